use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecisionError {
    /// the code is kept for the caller but never rendered
    #[error("invalid personal id code")]
    InvalidIdentityCode {
        code: String,
    },

    #[error("invalid loan amount: {amount} not within {minimum}..={maximum}")]
    InvalidLoanAmount {
        amount: i64,
        minimum: i64,
        maximum: i64,
    },

    #[error("invalid loan period: {period} months not within {minimum}..={maximum}")]
    InvalidLoanPeriod {
        period: i32,
        minimum: i32,
        maximum: i32,
    },

    #[error("invalid age for taking out loan: {age} not within {minimum}..={maximum}")]
    InvalidAge {
        age: i32,
        minimum: i32,
        maximum: i32,
    },

    #[error("no valid loan found")]
    NoValidLoan,

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },
}

impl DecisionError {
    /// message shown to the applicant, without echoing their input back
    pub fn user_message(&self) -> &'static str {
        match self {
            DecisionError::InvalidIdentityCode { .. } => "Invalid personal ID code!",
            DecisionError::InvalidLoanAmount { .. } => "Invalid loan amount!",
            DecisionError::InvalidLoanPeriod { .. } => "Invalid loan period!",
            DecisionError::InvalidAge { .. } => "Invalid age for taking out loan.",
            DecisionError::NoValidLoan => "No valid loan found!",
            DecisionError::InvalidConfiguration { .. } => "An unexpected error occurred",
        }
    }
}

pub type Result<T> = std::result::Result<T, DecisionError>;
