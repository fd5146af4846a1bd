use crate::cli::menu::{choose_action, collect_request, PromptError, Prompter};
use crate::cli::table;
use crate::core::FilterEngine;
use console::style;
use std::io::{self, Write};
use thiserror::Error;

/// Reasons an interactive session stops early
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error("Output error: {0}")]
    Io(#[from] io::Error),
}

/// Run the prompt -> filter -> display loop until the user exits
///
/// A failure while collecting a filter's parameters, whether bad numeric
/// input or an interrupted sub-prompt, abandons that turn and returns to
/// the main menu. A failed main-menu prompt is reported and ends the
/// session.
pub fn run<P, W>(engine: &FilterEngine, prompter: &mut P, out: &mut W) -> Result<(), SessionError>
where
    P: Prompter + ?Sized,
    W: Write + ?Sized,
{
    writeln!(out, "{}", style("Welcome to the Prop Filter CLI!").bold())?;

    loop {
        let action = match choose_action(prompter) {
            Ok(action) => action,
            Err(err) => {
                tracing::warn!("Main menu prompt failed: {}", err);
                writeln!(out, "{}", err)?;
                return Err(err.into());
            }
        };

        match collect_request(prompter, action) {
            Ok(Some(request)) => {
                let result = engine.apply(&request);
                table::display(out, &result.matches)?;
            }
            Ok(None) => {
                tracing::debug!("Session ended via {:?}", action);
                writeln!(out, "Goodbye!")?;
                return Ok(());
            }
            Err(err) => {
                tracing::debug!("Abandoned {:?} turn: {}", action, err);
                writeln!(out, "{}", err)?;
            }
        }
    }
}
