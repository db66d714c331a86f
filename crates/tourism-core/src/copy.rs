//! Text shown by every host of the form

pub const TITLE: &str = "Tourism Multi-Agent Planner";

pub const INPUT_HINT: &str =
    "Enter a place (e.g., 'I'm going to go to Bangalore, what is the temperature there')";

pub const SUBMIT_LABEL: &str = "Submit";
pub const LOADING_LABEL: &str = "Loading...";
pub const CLEAR_LABEL: &str = "Clear";

pub const RESPONSE_HEADING: &str = "Response:";

pub const EXAMPLES_INTRO: &str = "Try asking about any place in the world!";
pub const EXAMPLES_HEADING: &str = "Examples:";

pub const EXAMPLE_QUERIES: [&str; 3] = [
    "I'm going to go to Bangalore, what is the temperature there",
    "What places can I visit in Paris?",
    "I'm planning a trip to Tokyo",
];

/// Example query as displayed, wrapped in quotes.
pub fn quoted(example: &str) -> String {
    format!("\"{}\"", example)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_example() {
        assert_eq!(
            quoted(EXAMPLE_QUERIES[2]),
            "\"I'm planning a trip to Tokyo\""
        );
    }
}
