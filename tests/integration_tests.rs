// Integration tests for Prop Filter

use prop_filter::cli::{self, PromptError, Prompter};
use prop_filter::models::{Comparison, Coordinates, FilterRequest, NumericField};
use prop_filter::services::{parse_properties, read_properties};
use prop_filter::FilterEngine;
use std::collections::VecDeque;
use std::io::{self, Write};

const DATASET: &str = r#"[
    {"squareFootage": 1000, "lighting": "low", "price": 100000, "rooms": 2, "bathrooms": 1,
     "location": [0, 0], "description": "Starter home near the park",
     "ammenities": {"pool": true, "garage": false}},
    {"squareFootage": 1800, "lighting": "high", "price": 250000, "rooms": 3, "bathrooms": 2,
     "location": [40.7128, -74.006], "description": "Loft with rooftop POOL",
     "ammenities": {"garage": true}},
    {"squareFootage": 2400, "lighting": "medium", "price": 250000, "rooms": 4, "bathrooms": 3,
     "location": [34.0522, -118.2437], "description": "Ranch house",
     "ammenities": {"pool": true, "garden": true}}
]"#;

fn create_engine() -> FilterEngine {
    FilterEngine::new(parse_properties(DATASET).unwrap())
}

/// Scripted answer that makes the prompt fail as if the user pressed Ctrl-C
const INTERRUPT: &str = "<interrupt>";

fn interaction_error(kind: io::ErrorKind, message: &str) -> PromptError {
    PromptError::Interaction(io::Error::new(kind, message.to_string()).into())
}

/// Prompter that replays canned answers; selections and text share one queue
struct ScriptedPrompter {
    answers: VecDeque<String>,
}

impl ScriptedPrompter {
    fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
        }
    }

    fn next(&mut self) -> Result<String, PromptError> {
        match self.answers.pop_front() {
            Some(answer) if answer == INTERRUPT => Err(interaction_error(io::ErrorKind::Interrupted, "interrupted")),
            Some(answer) => Ok(answer),
            None => Err(interaction_error(io::ErrorKind::UnexpectedEof, "script exhausted")),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, _prompt: &str, items: &[&str]) -> Result<usize, PromptError> {
        let answer = self.next()?;
        Ok(items
            .iter()
            .position(|item| *item == answer)
            .unwrap_or_else(|| panic!("{:?} is not one of {:?}", answer, items)))
    }

    fn input(&mut self, _prompt: &str) -> Result<String, PromptError> {
        self.next()
    }
}

fn run_script(answers: &[&str]) -> (Result<(), cli::SessionError>, String) {
    let engine = create_engine();
    let mut prompter = ScriptedPrompter::new(answers);
    let mut out = Vec::new();
    let result = cli::run(&engine, &mut prompter, &mut out);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn test_integration_price_equal_keeps_duplicates_in_order() {
    let engine = create_engine();

    let result = engine.apply(&FilterRequest::Numeric {
        field: NumericField::Price,
        comparison: Comparison::Equal,
        value: 250000.0,
    });

    assert_eq!(result.matches.len(), 2);
    assert_eq!(result.matches[0].square_footage, 1800);
    assert_eq!(result.matches[1].square_footage, 2400);
}

#[test]
fn test_integration_amenity_flags() {
    let engine = FilterEngine::new(vec![create_engine().properties()[0].clone()]);

    assert!(engine
        .apply(&FilterRequest::Amenity("garage".to_string()))
        .is_empty());
    assert_eq!(
        engine
            .apply(&FilterRequest::Amenity("pool".to_string()))
            .matches
            .len(),
        1
    );
}

#[test]
fn test_integration_zero_radius_at_same_point() {
    let engine = create_engine();

    let result = engine.apply(&FilterRequest::Distance {
        origin: Coordinates::new(0.0, 0.0),
        max_miles: 0.0,
    });

    assert_eq!(result.matches.len(), 1);
    assert_eq!(result.matches[0].description, "Starter home near the park");
}

#[test]
fn test_integration_source_records_untouched() {
    let engine = create_engine();
    let before = engine.properties().to_vec();

    engine.apply(&FilterRequest::Description("pool".to_string()));
    engine.apply(&FilterRequest::Amenity("garden".to_string()));

    assert_eq!(engine.properties(), before.as_slice());
}

#[test]
fn test_integration_load_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(DATASET.as_bytes()).unwrap();

    let engine = FilterEngine::new(read_properties(file.path()).unwrap());

    assert_eq!(engine.len(), 3);
}

#[test]
fn test_session_filters_then_exits() {
    let (result, output) = run_script(&["Filter by price", "equal", "250000", "Exit"]);

    assert!(result.is_ok());
    assert!(output.contains("Welcome to the Prop Filter CLI!"));
    assert!(output.contains("Loft with rooftop POOL"));
    assert!(output.contains("Ranch house"));
    assert!(!output.contains("Starter home"));
    assert!(output.contains("$250000.00"));
    assert!(output.trim_end().ends_with("Goodbye!"));
}

#[test]
fn test_session_invalid_number_skips_turn() {
    let (result, output) = run_script(&[
        "Filter by rooms",
        "greaterThan",
        "three",
        "Filter by description",
        "pool",
        "Exit",
    ]);

    assert!(result.is_ok());
    assert!(output.contains("Invalid number of rooms input"));
    assert!(output.contains("Loft with rooftop POOL"));
    assert!(!output.contains("Starter home near the park"));
}

#[test]
fn test_session_reports_no_matches() {
    let (_, output) = run_script(&["Filter by amenities", "helipad", "Exit"]);

    assert!(output.contains("No properties match your criteria."));
}

#[test]
fn test_session_lighting_and_distance() {
    let (result, output) = run_script(&[
        "Filter by lighting",
        "medium",
        "Filter by distance",
        "40.7128",
        "-74.006",
        "5",
        "Exit",
    ]);

    assert!(result.is_ok());
    assert!(output.contains("Ranch house"));
    assert!(output.contains("(40.7128, -74.0060)"));
    assert!(output.contains("garden, pool"));
}

#[test]
fn test_session_interrupted_filter_returns_to_menu() {
    let (result, output) = run_script(&["Filter by price", INTERRUPT, "Exit"]);

    assert!(result.is_ok());
    assert!(output.contains("Prompt failed: IO error: interrupted"));
    assert!(output.trim_end().ends_with("Goodbye!"));
}

#[test]
fn test_session_interrupted_value_prompt_returns_to_menu() {
    let (result, output) = run_script(&[
        "Filter by distance",
        "40.7128",
        INTERRUPT,
        "Filter by lighting",
        "high",
        "Exit",
    ]);

    assert!(result.is_ok());
    assert!(output.contains("Prompt failed"));
    assert!(output.contains("Loft with rooftop POOL"));
    assert!(output.contains("Goodbye!"));
}

#[test]
fn test_session_ends_when_main_menu_fails() {
    let (result, output) = run_script(&["Filter by amenities", "pool", INTERRUPT, "Exit"]);

    assert!(matches!(
        result,
        Err(cli::SessionError::Prompt(PromptError::Interaction(_)))
    ));
    assert!(output.contains("Ranch house"));
    assert!(output.contains("Prompt failed: IO error: interrupted"));
    assert!(!output.contains("Goodbye!"));
}
