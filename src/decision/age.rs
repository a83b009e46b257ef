use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::config::AgePolicy;
use crate::errors::{DecisionError, Result};
use crate::identity::IdentityCode;

/// whole years elapsed from `birth_date` to `today`
///
/// negative when the birth date lies in the future.
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

/// verify the applicant's age lies in the policy window
pub fn verify_age(
    code: &IdentityCode<'_>,
    policy: &AgePolicy,
    maximum_loan_period: i32,
    today: NaiveDate,
) -> Result<i32> {
    let age = age_on(code.birth_date()?, today);
    let maximum = policy
        .maximum_age(maximum_loan_period)
        .ok_or_else(|| DecisionError::InvalidConfiguration {
            message: "expected age out of range".to_string(),
        })?;

    debug!(age, minimum = policy.minimum_age, maximum, "verifying applicant age");

    if age < policy.minimum_age || age > maximum {
        return Err(DecisionError::InvalidAge {
            age,
            minimum: policy.minimum_age,
            maximum,
        });
    }

    Ok(age)
}
