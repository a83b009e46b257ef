/// how the credit segment changes the offer
use loan_decision_rs::chrono::{TimeZone, Utc};
use loan_decision_rs::{
    CreditSegment, Decision, DecisionConfig, DecisionEngine, IdentityCode, SafeTimeProvider,
    StructuralValidator, TimeSource,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    ));
    let engine = DecisionEngine::new(DecisionConfig::default(), StructuralValidator)?;

    for code in ["38001081000", "38001082500", "38001085000", "38001087500"] {
        let segment = CreditSegment::from_segment_number(IdentityCode::new(code).segment()?);

        for period in [12, 24, 48] {
            let decision = Decision::from_result(engine.calculate_approved_loan(code, 5000, period, &time));
            match (decision.approved_amount, decision.approved_period) {
                (Some(amount), Some(approved_period)) => {
                    println!("{code} {segment:?} requested {period}m -> {amount} over {approved_period}m");
                }
                _ => {
                    println!(
                        "{code} {segment:?} requested {period}m -> {}",
                        decision.error_message.unwrap_or_default()
                    );
                }
            }
        }
    }

    Ok(())
}
