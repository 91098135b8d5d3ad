//! Interactive price-decrease confirmation.

use std::io::{self, Write};

use lavka_catalog::{format_price, ConfirmationProvider};

/// Confirmation provider for interactive sessions: prompts on stdout and
/// approves on a case-insensitive `y`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinConfirmation;

impl ConfirmationProvider for StdinConfirmation {
    fn approve_decrease(&self, current: f64, proposed: f64) -> bool {
        print!(
            "Снизить цену с {} до {} руб.? [y/N] ",
            format_price(current),
            format_price(proposed)
        );
        let _ = io::stdout().flush();

        let mut answer = String::new();
        if io::stdin().read_line(&mut answer).is_err() {
            return false;
        }
        is_affirmative(&answer)
    }
}

/// A lone `y`, case-insensitive, surrounding whitespace ignored.
fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn y_in_any_case_is_affirmative() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative("Y"));
        assert!(is_affirmative(" y\n"));
    }

    #[test]
    fn anything_else_is_a_refusal() {
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative("yes"));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("да"));
    }
}
