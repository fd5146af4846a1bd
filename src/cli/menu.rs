use crate::models::{Comparison, Coordinates, FilterRequest, Lighting, NumericField};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while collecting filter parameters
#[derive(Debug, Error)]
pub enum PromptError {
    /// The terminal interaction itself failed (closed, interrupted)
    #[error("Prompt failed: {0}")]
    Interaction(#[from] dialoguer::Error),

    /// The user typed something that does not parse; only the turn is lost
    #[error("Invalid {0} input")]
    InvalidInput(&'static str),
}

/// Source of user answers
///
/// The interactive binary answers through a terminal; tests drive the
/// session with scripted answers.
pub trait Prompter {
    /// Pick one of `items`, returning its index
    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<usize, PromptError>;

    /// Read a free-text line (may be empty)
    fn input(&mut self, prompt: &str) -> Result<String, PromptError>;
}

/// Terminal prompter backed by dialoguer
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<usize, PromptError> {
        Ok(Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()?)
    }

    fn input(&mut self, prompt: &str) -> Result<String, PromptError> {
        Ok(Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?)
    }
}

/// Entries of the main menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Price,
    Amenities,
    Description,
    Distance,
    Rooms,
    Bathrooms,
    SquareFootage,
    Lighting,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 9] = [
        MenuAction::Price,
        MenuAction::Amenities,
        MenuAction::Description,
        MenuAction::Distance,
        MenuAction::Rooms,
        MenuAction::Bathrooms,
        MenuAction::SquareFootage,
        MenuAction::Lighting,
        MenuAction::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::Price => "Filter by price",
            MenuAction::Amenities => "Filter by amenities",
            MenuAction::Description => "Filter by description",
            MenuAction::Distance => "Filter by distance",
            MenuAction::Rooms => "Filter by rooms",
            MenuAction::Bathrooms => "Filter by bathrooms",
            MenuAction::SquareFootage => "Filter by square footage",
            MenuAction::Lighting => "Filter by lighting",
            MenuAction::Exit => "Exit",
        }
    }
}

/// Show the main menu and return the chosen action
pub fn choose_action<P: Prompter + ?Sized>(prompter: &mut P) -> Result<MenuAction, PromptError> {
    let labels: Vec<&str> = MenuAction::ALL.iter().map(|a| a.label()).collect();
    let index = prompter.select("What would you like to do?", &labels)?;
    Ok(MenuAction::ALL.get(index).copied().unwrap_or(MenuAction::Exit))
}

/// Collect the parameters for a filter action
///
/// Returns `Ok(None)` for [`MenuAction::Exit`].
pub fn collect_request<P: Prompter + ?Sized>(
    prompter: &mut P,
    action: MenuAction,
) -> Result<Option<FilterRequest>, PromptError> {
    let request = match action {
        MenuAction::Price => numeric_request(
            prompter,
            NumericField::Price,
            "price",
            "Enter the price",
            "price",
            parse_float,
        )?,
        MenuAction::Rooms => numeric_request(
            prompter,
            NumericField::Rooms,
            "rooms",
            "Enter the number of rooms",
            "number of rooms",
            parse_integer,
        )?,
        MenuAction::Bathrooms => numeric_request(
            prompter,
            NumericField::Bathrooms,
            "bathrooms",
            "Enter the number of bathrooms",
            "number of bathrooms",
            parse_integer,
        )?,
        MenuAction::SquareFootage => numeric_request(
            prompter,
            NumericField::SquareFootage,
            "square footage",
            "Enter the square footage",
            "square footage",
            parse_integer,
        )?,
        MenuAction::Amenities => FilterRequest::Amenity(
            prompter.input("Enter the amenity to filter by (e.g., garage, pool)")?,
        ),
        MenuAction::Description => FilterRequest::Description(
            prompter.input("Enter a keyword to search in the description")?,
        ),
        MenuAction::Lighting => {
            let labels: Vec<&str> = Lighting::ALL.iter().map(|l| l.as_str()).collect();
            let index = prompter.select("Select the lighting level", &labels)?;
            let level: Lighting = resolve(&labels, index, "lighting")?;
            FilterRequest::Lighting(level)
        }
        MenuAction::Distance => {
            let latitude = parse_float(&prompter.input("Enter your latitude")?, "latitude")?;
            let longitude = parse_float(&prompter.input("Enter your longitude")?, "longitude")?;
            let max_miles = parse_float(
                &prompter.input("Enter the maximum distance (in miles)")?,
                "distance",
            )?;
            FilterRequest::Distance {
                origin: Coordinates::new(latitude, longitude),
                max_miles,
            }
        }
        MenuAction::Exit => return Ok(None),
    };

    Ok(Some(request))
}

fn numeric_request<P: Prompter + ?Sized>(
    prompter: &mut P,
    field: NumericField,
    field_label: &str,
    value_prompt: &str,
    subject: &'static str,
    parse: fn(&str, &'static str) -> Result<f64, PromptError>,
) -> Result<FilterRequest, PromptError> {
    let operators: Vec<&str> = Comparison::ALL.iter().map(|c| c.as_str()).collect();
    let index = prompter.select(
        &format!("Choose a filter operator for {}", field_label),
        &operators,
    )?;
    let comparison: Comparison = resolve(&operators, index, "operator")?;

    let value = parse(&prompter.input(value_prompt)?, subject)?;

    Ok(FilterRequest::Numeric {
        field,
        comparison,
        value,
    })
}

/// Turn the chosen menu label back into its typed selector
fn resolve<T: FromStr>(labels: &[&str], index: usize, subject: &'static str) -> Result<T, PromptError> {
    labels
        .get(index)
        .and_then(|label| label.parse().ok())
        .ok_or(PromptError::InvalidInput(subject))
}

fn parse_float(raw: &str, subject: &'static str) -> Result<f64, PromptError> {
    parse_trimmed::<f64>(raw, subject)
}

/// Counts are entered as whole numbers and compared as floats
fn parse_integer(raw: &str, subject: &'static str) -> Result<f64, PromptError> {
    parse_trimmed::<i64>(raw, subject).map(|n| n as f64)
}

fn parse_trimmed<T: FromStr>(raw: &str, subject: &'static str) -> Result<T, PromptError> {
    raw.trim().parse().map_err(|_| {
        tracing::debug!("Rejected {} input: {:?}", subject, raw);
        PromptError::InvalidInput(subject)
    })
}
