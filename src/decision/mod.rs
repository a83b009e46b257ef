pub mod age;
pub mod engine;
pub mod search;

pub use age::{age_on, verify_age};
pub use engine::DecisionEngine;
pub use search::{credit_modifier, credit_score, find_approvable_period, highest_approvable_amount};
