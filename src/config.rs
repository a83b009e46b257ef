use serde::{Deserialize, Serialize};

use crate::errors::{DecisionError, Result};

/// decision engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionConfig {
    pub minimum_loan_amount: i64,
    pub maximum_loan_amount: i64,
    /// months
    pub minimum_loan_period: i32,
    /// months
    pub maximum_loan_period: i32,
    pub segment_modifiers: SegmentModifiers,
    pub age_policy: AgePolicy,
}

/// credit modifier per creditworthy segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentModifiers {
    pub segment_1: i64,
    pub segment_2: i64,
    pub segment_3: i64,
}

/// age eligibility rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgePolicy {
    pub enabled: bool,
    pub minimum_age: i32,
    /// life expectancy; the loan must be repaid before it
    pub expected_age: i32,
}

impl AgePolicy {
    /// oldest age at which the longest loan still ends before expected age
    ///
    /// `None` when the window cannot be represented.
    pub fn maximum_age(&self, maximum_loan_period: i32) -> Option<i32> {
        self.expected_age.checked_sub(maximum_loan_period / 12)
    }
}

impl Default for SegmentModifiers {
    fn default() -> Self {
        Self {
            segment_1: 100,
            segment_2: 300,
            segment_3: 1000,
        }
    }
}

impl Default for AgePolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            minimum_age: 18,
            expected_age: 78,
        }
    }
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            minimum_loan_amount: 2000,
            maximum_loan_amount: 10_000,
            minimum_loan_period: 12,
            maximum_loan_period: 60,
            segment_modifiers: SegmentModifiers::default(),
            age_policy: AgePolicy::default(),
        }
    }
}

impl DecisionConfig {
    /// load configuration from json and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            DecisionError::InvalidConfiguration {
                message: e.to_string(),
            }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// set amount limits
    pub fn with_amount_range(mut self, minimum: i64, maximum: i64) -> Self {
        self.minimum_loan_amount = minimum;
        self.maximum_loan_amount = maximum;
        self
    }

    /// set period limits
    pub fn with_period_range(mut self, minimum: i32, maximum: i32) -> Self {
        self.minimum_loan_period = minimum;
        self.maximum_loan_period = maximum;
        self
    }

    /// set segment modifiers
    pub fn with_segment_modifiers(mut self, modifiers: SegmentModifiers) -> Self {
        self.segment_modifiers = modifiers;
        self
    }

    /// set age policy
    pub fn with_age_policy(mut self, policy: AgePolicy) -> Self {
        self.age_policy = policy;
        self
    }

    /// turn the age check off
    pub fn without_age_check(mut self) -> Self {
        self.age_policy.enabled = false;
        self
    }

    pub fn is_amount_valid(&self, amount: i64) -> bool {
        (self.minimum_loan_amount..=self.maximum_loan_amount).contains(&amount)
    }

    pub fn is_period_valid(&self, period: i32) -> bool {
        (self.minimum_loan_period..=self.maximum_loan_period).contains(&period)
    }

    /// check limits are coherent
    pub fn validate(&self) -> Result<()> {
        if self.minimum_loan_amount <= 0 {
            return Err(invalid("minimum loan amount must be positive"));
        }
        if self.minimum_loan_amount > self.maximum_loan_amount {
            return Err(invalid("minimum loan amount exceeds maximum"));
        }
        if self.minimum_loan_period <= 0 {
            return Err(invalid("minimum loan period must be positive"));
        }
        if self.minimum_loan_period > self.maximum_loan_period {
            return Err(invalid("minimum loan period exceeds maximum"));
        }

        let modifiers = self.segment_modifiers;
        if modifiers.segment_1 <= 0 || modifiers.segment_2 <= 0 || modifiers.segment_3 <= 0 {
            // zero is reserved for the debt segment
            return Err(invalid("segment modifiers must be positive"));
        }

        let policy = self.age_policy;
        if policy.enabled {
            if policy.minimum_age < 0 {
                return Err(invalid("minimum age cannot be negative"));
            }
            let maximum_age = policy
                .maximum_age(self.maximum_loan_period)
                .ok_or_else(|| invalid("expected age out of range"))?;
            if policy.minimum_age > maximum_age {
                return Err(DecisionError::InvalidConfiguration {
                    message: format!(
                        "no eligible age: minimum {} exceeds maximum {}",
                        policy.minimum_age, maximum_age
                    ),
                });
            }
        }

        Ok(())
    }
}

fn invalid(message: &str) -> DecisionError {
    DecisionError::InvalidConfiguration {
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let config = DecisionConfig::default();

        assert_eq!(config.minimum_loan_amount, 2000);
        assert_eq!(config.maximum_loan_amount, 10_000);
        assert_eq!(config.minimum_loan_period, 12);
        assert_eq!(config.maximum_loan_period, 60);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_maximum_age() {
        let config = DecisionConfig::default();
        assert_eq!(config.age_policy.maximum_age(config.maximum_loan_period), Some(73));
        assert_eq!(config.age_policy.maximum_age(48), Some(74));

        let policy = AgePolicy {
            enabled: true,
            minimum_age: 18,
            expected_age: i32::MIN,
        };
        assert_eq!(policy.maximum_age(60), None);
    }

    #[test]
    fn test_range_checks_are_inclusive() {
        let config = DecisionConfig::default();

        assert!(config.is_amount_valid(2000));
        assert!(config.is_amount_valid(10_000));
        assert!(!config.is_amount_valid(1999));
        assert!(!config.is_amount_valid(10_001));

        assert!(config.is_period_valid(12));
        assert!(config.is_period_valid(60));
        assert!(!config.is_period_valid(11));
        assert!(!config.is_period_valid(61));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "minimum_loan_amount": 1000,
            "maximum_loan_amount": 5000,
            "minimum_loan_period": 6,
            "maximum_loan_period": 24,
            "segment_modifiers": { "segment_1": 50, "segment_2": 150, "segment_3": 500 },
            "age_policy": { "enabled": false, "minimum_age": 18, "expected_age": 78 }
        }"#;

        let config = DecisionConfig::from_json(json).unwrap();
        assert_eq!(config.maximum_loan_amount, 5000);
        assert_eq!(config.segment_modifiers.segment_3, 500);
        assert!(!config.age_policy.enabled);
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let err = DecisionConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, DecisionError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_from_json_rejects_unrepresentable_age_window() {
        let json = r#"{
            "minimum_loan_amount": 2000,
            "maximum_loan_amount": 10000,
            "minimum_loan_period": 12,
            "maximum_loan_period": 60,
            "segment_modifiers": { "segment_1": 100, "segment_2": 300, "segment_3": 1000 },
            "age_policy": { "enabled": true, "minimum_age": 18, "expected_age": -2147483648 }
        }"#;

        let err = DecisionConfig::from_json(json).unwrap_err();
        assert_eq!(
            err,
            DecisionError::InvalidConfiguration {
                message: "expected age out of range".to_string(),
            }
        );
    }

    #[test]
    fn test_validate_rejects_inverted_ranges() {
        let config = DecisionConfig::default().with_amount_range(10_000, 2000);
        assert!(config.validate().is_err());

        let config = DecisionConfig::default().with_period_range(60, 12);
        assert!(config.validate().is_err());

        let config = DecisionConfig::default().with_amount_range(0, 2000);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_modifier() {
        let config = DecisionConfig::default().with_segment_modifiers(SegmentModifiers {
            segment_1: 0,
            segment_2: 300,
            segment_3: 1000,
        });

        let err = config.validate().unwrap_err();
        assert_eq!(
            err,
            DecisionError::InvalidConfiguration {
                message: "segment modifiers must be positive".to_string(),
            }
        );
    }

    #[test]
    fn test_validate_age_window() {
        let policy = AgePolicy {
            enabled: true,
            minimum_age: 70,
            expected_age: 74,
        };
        let config = DecisionConfig::default().with_age_policy(policy);
        assert!(config.validate().is_err());

        // same window is fine once the check is off
        assert!(config.without_age_check().validate().is_ok());
    }
}
