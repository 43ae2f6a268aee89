//! Terminal output formatting.

use colored::{ColoredString, Colorize};

/// Print an analyzer reply, coloured by the sentiment it mentions.
pub fn print_message(message: &str) {
    println!("{}", colorize(message));
}

fn colorize(message: &str) -> ColoredString {
    if message.contains("POSITIVE") {
        message.green()
    } else if message.contains("NEGATIVE") {
        message.red()
    } else if message.contains("NEUTRAL") {
        message.cyan()
    } else {
        message.yellow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colorize_keeps_text() {
        colored::control::set_override(false);
        let msg = "The given text has been identified as POSITIVE with a score of 0.99.";
        assert_eq!(colorize(msg).to_string(), msg);
        assert_eq!(colorize("Invalid input! Try again.").to_string(), "Invalid input! Try again.");
    }
}
