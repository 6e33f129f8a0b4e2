use attrition_ai::attrition::{AttritionRecord, PredictionService};
use attrition_ai::config::AppConfig;
use attrition_ai::error::AppError;
use attrition_ai::model::LinearModel;
use clap::Args;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct PredictArgs {
    /// Path to a JSON file holding one employee record
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Model artifact to score with (defaults to the configured path)
    #[arg(long)]
    pub(crate) model: Option<PathBuf>,
}

/// Scores a single record offline through the same pipeline the HTTP
/// endpoint uses, printing the response body to stdout.
pub(crate) fn run_predict(args: PredictArgs) -> Result<(), AppError> {
    let PredictArgs { input, model } = args;

    let artifact_path = match model {
        Some(path) => path,
        None => AppConfig::load()?.model.artifact_path,
    };

    let model = LinearModel::from_path(&artifact_path)?;
    let service = PredictionService::new(Arc::new(model));

    let file = File::open(&input)?;
    let record: AttritionRecord =
        serde_json::from_reader(BufReader::new(file)).map_err(std::io::Error::from)?;

    let prediction = service.predict(&record)?;
    println!("{}", serde_json::json!({ "prediction": prediction }));

    Ok(())
}
