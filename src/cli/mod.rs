// Interactive shell exports
pub mod menu;
pub mod session;
pub mod table;

pub use menu::{DialoguerPrompter, MenuAction, PromptError, Prompter};
pub use session::{run, SessionError};
