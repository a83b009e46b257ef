/// age eligibility follows the time provider
use loan_decision_rs::chrono::{Duration, TimeZone, Utc};
use loan_decision_rs::{DecisionConfig, DecisionEngine, SafeTimeProvider, StructuralValidator, TimeSource};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    ));
    let control = time.test_control().unwrap();

    let engine = DecisionEngine::new(DecisionConfig::default(), StructuralValidator)?;

    // turns 18 on 2024-06-02
    let code = "50606027500";

    match engine.calculate_approved_loan(code, 3000, 12, &time) {
        Ok(decision) => println!("{}: {}", time.now().date_naive(), decision.json()),
        Err(e) => println!("{}: {}", time.now().date_naive(), e),
    }

    control.advance(Duration::days(1));

    let decision = engine.calculate_approved_loan(code, 3000, 12, &time)?;
    println!("{}: {}", time.now().date_naive(), decision.json());

    Ok(())
}
