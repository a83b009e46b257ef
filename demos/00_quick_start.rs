/// quick start - decide a single loan request
use loan_decision_rs::{Decision, DecisionConfig, DecisionEngine, StructuralValidator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .compact()
        .init();

    let engine = DecisionEngine::new(DecisionConfig::default(), StructuralValidator)?;

    // born 1980-01-08, segment 6000
    let result = engine.calculate_approved_loan_now("38001086000", 4000, 12);

    // the request layer turns failures into a response message
    let decision = Decision::from_result(result);
    println!("{}", decision.json());

    Ok(())
}
