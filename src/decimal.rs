use rust_decimal::Decimal;
use std::fmt;

/// credit score for a (modifier, amount, period) triple
///
/// computed as `modifier * period / amount`, which equals
/// `(modifier / amount) * period` but keeps exact boundaries exact.
/// the score is strictly decreasing in amount for positive modifier and
/// period; the amount search in `decision::search` relies on that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct CreditScore(Decimal);

impl CreditScore {
    pub const ZERO: CreditScore = CreditScore(Decimal::ZERO);
    /// lowest score at which a loan is approvable
    pub const THRESHOLD: CreditScore = CreditScore(Decimal::ONE);

    /// calculate score; a non-positive amount scores zero
    pub fn calculate(credit_modifier: i64, amount: i64, period: i32) -> Self {
        if amount <= 0 {
            return Self::ZERO;
        }

        Decimal::from(credit_modifier)
            .checked_mul(Decimal::from(period))
            .and_then(|numerator| numerator.checked_div(Decimal::from(amount)))
            .map(CreditScore)
            .unwrap_or(Self::ZERO)
    }

    /// get underlying decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// score meets the approval threshold
    pub fn is_approvable(&self) -> bool {
        *self >= Self::THRESHOLD
    }
}

impl fmt::Display for CreditScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.round_dp(4))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_score_formula() {
        // (100 / 2000) * 12
        let score = CreditScore::calculate(100, 2000, 12);
        assert_eq!(score.as_decimal(), dec!(0.6));
        assert!(!score.is_approvable());

        // (1000 / 10000) * 12
        let score = CreditScore::calculate(1000, 10_000, 12);
        assert_eq!(score.as_decimal(), dec!(1.2));
        assert!(score.is_approvable());
    }

    #[test]
    fn test_exact_boundary_is_approvable() {
        assert_eq!(CreditScore::calculate(100, 2000, 20), CreditScore::THRESHOLD);
        assert!(CreditScore::calculate(300, 3600, 12).is_approvable());
        assert!(!CreditScore::calculate(300, 3601, 12).is_approvable());
    }

    #[test]
    fn test_non_positive_amount_scores_zero() {
        assert_eq!(CreditScore::calculate(1000, 0, 12), CreditScore::ZERO);
        assert_eq!(CreditScore::calculate(1000, -5, 12), CreditScore::ZERO);
    }

    #[test]
    fn test_zero_modifier_never_approvable() {
        assert!(!CreditScore::calculate(0, 2000, 60).is_approvable());
    }

    #[test]
    fn test_extreme_inputs_do_not_overflow() {
        assert_eq!(CreditScore::calculate(i64::MAX, i64::MAX, 1), CreditScore::THRESHOLD);
        assert!(CreditScore::calculate(i64::MAX, 1, i32::MAX).is_approvable());
        assert!(!CreditScore::calculate(1, i64::MAX, 1).is_approvable());
    }

    #[test]
    fn test_display_rounds() {
        let score = CreditScore::calculate(100, 3600, 12);
        assert_eq!(score.to_string(), "0.3333");
    }
}
