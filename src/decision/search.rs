use tracing::debug;

use crate::config::{DecisionConfig, SegmentModifiers};
use crate::decimal::CreditScore;
use crate::errors::{DecisionError, Result};
use crate::identity::IdentityCode;
use crate::types::CreditSegment;

/// credit modifier for an identity code, zero when no loan is possible
pub fn credit_modifier(code: &IdentityCode<'_>, modifiers: &SegmentModifiers) -> Result<i64> {
    let segment_number = code.segment()?;
    let segment = CreditSegment::from_segment_number(segment_number);
    let modifier = segment.modifier(modifiers);

    debug!(segment_number, ?segment, modifier, "derived credit modifier");

    Ok(modifier)
}

/// credit score for a loan of `amount` over `period` months
pub fn credit_score(credit_modifier: i64, amount: i64, period: i32) -> CreditScore {
    CreditScore::calculate(credit_modifier, amount, period)
}

/// largest approvable amount within the configured range, 0 if none
pub fn highest_approvable_amount(credit_modifier: i64, period: i32, config: &DecisionConfig) -> i64 {
    let mut low = config.minimum_loan_amount;
    let mut high = config.maximum_loan_amount;
    let mut highest = 0;

    while low <= high {
        let mid = low + (high - low) / 2;

        // the range may end at the integer limits
        if credit_score(credit_modifier, mid, period).is_approvable() {
            highest = mid;
            match mid.checked_add(1) {
                Some(next) => low = next,
                None => break,
            }
        } else {
            match mid.checked_sub(1) {
                Some(next) => high = next,
                None => break,
            }
        }
    }

    highest
}

/// first period at or after `requested_period` with an approvable amount
///
/// returns `(highest_amount, period)`; never looks past the maximum period.
pub fn find_approvable_period(
    credit_modifier: i64,
    requested_period: i32,
    config: &DecisionConfig,
) -> Result<(i64, i32)> {
    for period in requested_period..=config.maximum_loan_period {
        let highest = highest_approvable_amount(credit_modifier, period, config);

        if highest >= config.minimum_loan_amount {
            debug!(period, highest, "found approvable period");
            return Ok((highest, period));
        }
    }

    debug!(
        requested_period,
        maximum_period = config.maximum_loan_period,
        "no approvable period"
    );
    Err(DecisionError::NoValidLoan)
}
