use crate::infra;
use clap::Args;
use cropcast::advisory::domain::FeatureVector;
use cropcast::advisory::{ChatService, InterpreterConfig, OutcomeInterpreter};
use cropcast::config::AppConfig;
use cropcast::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct PredictArgs {
    /// Harvest year
    #[arg(long)]
    pub(crate) year: i32,
    /// Average annual rainfall in millimeters
    #[arg(long)]
    pub(crate) rainfall: f64,
    /// Pesticide use in tonnes
    #[arg(long)]
    pub(crate) pesticides: f64,
    /// Average temperature in degrees Celsius
    #[arg(long)]
    pub(crate) temperature: f64,
    /// Country code or name
    #[arg(long)]
    pub(crate) country: String,
    /// Crop item, e.g. "Maize"
    #[arg(long)]
    pub(crate) item: String,
}

#[derive(Args, Debug)]
pub(crate) struct ChatArgs {
    /// Question for the farming assistant
    pub(crate) message: String,
}

pub(crate) fn run_predict(args: PredictArgs) -> Result<(), AppError> {
    let features = FeatureVector {
        year: args.year,
        rainfall_mm: args.rainfall,
        pesticides_tonnes: args.pesticides,
        avg_temp_c: args.temperature,
        country: args.country,
        item: args.item,
    };

    let service = infra::prediction_service();
    let estimate = service.predict(&features)?;
    let interpreter = OutcomeInterpreter::new(InterpreterConfig::default());
    let assessment = interpreter.interpret(&features, &estimate);

    println!(
        "Predicted yield for {} ({}): {:.1} (confidence {}%)",
        features.item, features.country, estimate.value, estimate.confidence
    );
    println!(
        "Factors: rainfall {}, temperature {}, pesticides {}",
        assessment.factors.rainfall.label(),
        assessment.factors.temperature.label(),
        assessment.factors.pesticides.label()
    );

    if assessment.anomalies.is_empty() {
        println!("Anomalies: none");
    } else {
        println!("Anomalies:");
        for anomaly in &assessment.anomalies {
            println!("  [{:?}] {}", anomaly.severity, anomaly.message);
            for reason in &anomaly.reasons {
                println!("    - {reason}");
            }
        }
    }

    if assessment.recommendations.is_empty() {
        println!("Recommendations: none");
    } else {
        println!("Recommendations:");
        for recommendation in &assessment.recommendations {
            println!(
                "  [{}] {}: {}",
                recommendation.category, recommendation.title, recommendation.description
            );
        }
    }

    Ok(())
}

pub(crate) fn run_chat(args: ChatArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = ChatService::from_config(&config.completion);

    // The responder may block on the completion call; step off the async
    // worker thread the CLI entrypoint runs on.
    let response = tokio::task::block_in_place(|| service.reply(&args.message, &[]));
    println!("{response}");

    Ok(())
}
