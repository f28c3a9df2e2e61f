//! Credit/debit detection from notification wording.

use crate::models::transaction::Direction;

use super::patterns::{CREDIT_HINT, DEBIT_HINT};

/// Infer direction from keywords. Credit wording wins; debit is the fallback.
pub fn detect_direction(text: &str) -> Direction {
    let lowered = text.to_lowercase();
    if CREDIT_HINT.is_match(&lowered) {
        Direction::Credit
    } else if DEBIT_HINT.is_match(&lowered) {
        Direction::Debit
    } else {
        Direction::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_keywords() {
        assert_eq!(detect_direction("Your account was Credited with ETB 10"), Direction::Credit);
        assert_eq!(detect_direction("You have received ETB 10"), Direction::Credit);
        assert_eq!(detect_direction("A Deposit of 10 ETB"), Direction::Credit);
    }

    #[test]
    fn test_debit_keywords() {
        assert_eq!(detect_direction("has been DEBITED with ETB 10"), Direction::Debit);
        assert_eq!(detect_direction("A Withdrawal of 10 ETB"), Direction::Debit);
        assert_eq!(detect_direction("You have transferred ETB 10"), Direction::Debit);
    }

    #[test]
    fn test_credit_wins_over_debit() {
        assert_eq!(
            detect_direction("Transfer received: ETB 10 credited"),
            Direction::Credit
        );
    }

    #[test]
    fn test_fallback_is_debit() {
        assert_eq!(detect_direction("You paid ETB 10"), Direction::Debit);
        assert_eq!(detect_direction(""), Direction::Debit);
    }
}
