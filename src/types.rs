use serde::{Deserialize, Serialize};

use crate::config::SegmentModifiers;
use crate::errors::{DecisionError, Result};

/// credit segment derived from the last four digits of an identity code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreditSegment {
    /// 0000..=2499, outstanding debt, no loan possible
    Debt,
    /// 2500..=4999
    Segment1,
    /// 5000..=7499
    Segment2,
    /// 7500..=9999
    Segment3,
}

impl CreditSegment {
    pub fn from_segment_number(segment: u16) -> Self {
        match segment {
            0..=2499 => CreditSegment::Debt,
            2500..=4999 => CreditSegment::Segment1,
            5000..=7499 => CreditSegment::Segment2,
            _ => CreditSegment::Segment3,
        }
    }

    /// credit modifier for this segment, zero for debt
    pub fn modifier(&self, modifiers: &SegmentModifiers) -> i64 {
        match self {
            CreditSegment::Debt => 0,
            CreditSegment::Segment1 => modifiers.segment_1,
            CreditSegment::Segment2 => modifiers.segment_2,
            CreditSegment::Segment3 => modifiers.segment_3,
        }
    }
}

/// loan request as received from the request layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionRequest {
    pub personal_code: String,
    pub loan_amount: i64,
    pub loan_period: i32,
}

/// decision outcome
///
/// either amount and period are set, or only the error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    #[serde(rename = "loanAmount")]
    pub approved_amount: Option<i64>,
    #[serde(rename = "loanPeriod")]
    pub approved_period: Option<i32>,
    pub error_message: Option<String>,
}

impl Decision {
    pub fn approved(amount: i64, period: i32) -> Self {
        Self {
            approved_amount: Some(amount),
            approved_period: Some(period),
            error_message: None,
        }
    }

    /// build the response a caller returns for a rejected request
    pub fn rejected(error: &DecisionError) -> Self {
        Self {
            approved_amount: None,
            approved_period: None,
            error_message: Some(error.user_message().to_string()),
        }
    }

    pub fn from_result(result: Result<Decision>) -> Self {
        match result {
            Ok(decision) => decision,
            Err(error) => Self::rejected(&error),
        }
    }

    pub fn is_approved(&self) -> bool {
        self.approved_amount.is_some() && self.approved_period.is_some()
    }

    /// get json representation
    pub fn json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }
}
