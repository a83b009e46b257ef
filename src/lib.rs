pub mod config;
pub mod decimal;
pub mod decision;
pub mod errors;
pub mod identity;
pub mod types;

// re-export key types
pub use config::{AgePolicy, DecisionConfig, SegmentModifiers};
pub use decimal::CreditScore;
pub use decision::DecisionEngine;
pub use errors::{DecisionError, Result};
pub use identity::{IdentityCode, IdentityCodeValidator, StructuralValidator};
pub use types::{CreditSegment, Decision, DecisionRequest};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
