use hourglass_rs::SafeTimeProvider;
use tracing::{debug, info};

use crate::config::DecisionConfig;
use crate::decision::age::verify_age;
use crate::decision::search::{credit_modifier, find_approvable_period};
use crate::errors::{DecisionError, Result};
use crate::identity::{IdentityCode, IdentityCodeValidator};
use crate::types::{Decision, DecisionRequest};

/// engine deciding the largest loan an applicant qualifies for
///
/// holds only immutable configuration and the identity code validator, so a
/// single engine can serve any number of callers.
pub struct DecisionEngine<V> {
    config: DecisionConfig,
    validator: V,
}

impl<V: IdentityCodeValidator> DecisionEngine<V> {
    /// create new decision engine, rejecting incoherent configuration
    pub fn new(config: DecisionConfig, validator: V) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, validator })
    }

    pub fn config(&self) -> &DecisionConfig {
        &self.config
    }

    /// decide a request from the request layer
    pub fn decide(&self, request: &DecisionRequest, time_provider: &SafeTimeProvider) -> Result<Decision> {
        self.calculate_approved_loan(
            &request.personal_code,
            request.loan_amount,
            request.loan_period,
            time_provider,
        )
    }

    /// calculate approved loan with system time
    pub fn calculate_approved_loan_now(
        &self,
        personal_code: &str,
        loan_amount: i64,
        loan_period: i32,
    ) -> Result<Decision> {
        let time = SafeTimeProvider::new(hourglass_rs::TimeSource::System);
        self.calculate_approved_loan(personal_code, loan_amount, loan_period, &time)
    }

    /// calculate the approved loan amount and period
    ///
    /// the requested amount is only validated; the offer is the largest
    /// approvable amount at the first workable period from the requested one.
    pub fn calculate_approved_loan(
        &self,
        personal_code: &str,
        loan_amount: i64,
        loan_period: i32,
        time_provider: &SafeTimeProvider,
    ) -> Result<Decision> {
        let code = IdentityCode::new(personal_code);

        self.verify_inputs(&code, loan_amount, loan_period)?;

        if self.config.age_policy.enabled {
            let today = time_provider.now().date_naive();
            verify_age(&code, &self.config.age_policy, self.config.maximum_loan_period, today)?;
        }

        let modifier = credit_modifier(&code, &self.config.segment_modifiers)?;
        if modifier == 0 {
            debug!("applicant in debt segment");
            return Err(DecisionError::NoValidLoan);
        }

        let (highest, period) = find_approvable_period(modifier, loan_period, &self.config)?;
        let amount = highest.min(self.config.maximum_loan_amount);

        info!(
            requested_amount = loan_amount,
            requested_period = loan_period,
            approved_amount = amount,
            approved_period = period,
            "loan approved"
        );

        Ok(Decision::approved(amount, period))
    }

    fn verify_inputs(&self, code: &IdentityCode<'_>, loan_amount: i64, loan_period: i32) -> Result<()> {
        if !self.validator.is_valid(code.as_str()) {
            return Err(DecisionError::InvalidIdentityCode {
                code: code.as_str().to_string(),
            });
        }

        if !self.config.is_amount_valid(loan_amount) {
            return Err(DecisionError::InvalidLoanAmount {
                amount: loan_amount,
                minimum: self.config.minimum_loan_amount,
                maximum: self.config.maximum_loan_amount,
            });
        }

        if !self.config.is_period_valid(loan_period) {
            return Err(DecisionError::InvalidLoanPeriod {
                period: loan_period,
                minimum: self.config.minimum_loan_period,
                maximum: self.config.maximum_loan_period,
            });
        }

        Ok(())
    }
}
