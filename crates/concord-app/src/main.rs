//! Concord application binary - composition root.
//!
//! Ties together the workspace crates into a single executable:
//! 1. Parse CLI arguments and load configuration from TOML
//! 2. Initialize tracing
//! 3. Build the pipeline (rule segmenter, lexicon tagger, ONNX or mock
//!    concept encoder)
//! 4. Run one pipeline pass over the input text and print the structured
//!    output as JSON

use clap::Parser;

use concord_core::config::ConcordConfig;
use concord_core::error::{ConcordError, Result};
use concord_nlp::segmenter::RuleSegmenter;
use concord_nlp::tagger::LexiconTagger;
use concord_pipeline::ConceptPipeline;
use concord_vector::encoder::{ConceptEncoder, MockConceptEncoder, OnnxConceptEncoder};

mod cli;

use cli::CliArgs;

/// Build the pipeline around `encoder`, process `text`, and print the
/// resulting JSON to stdout.
async fn run<E: ConceptEncoder>(
    encoder: E,
    config: ConcordConfig,
    text: &str,
    pretty: bool,
) -> Result<()> {
    let pipeline = ConceptPipeline::new(
        RuleSegmenter::new(),
        LexiconTagger::new(),
        encoder,
        config.pipeline,
    );

    let output = pipeline.process(text).await?;

    let json = if pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    }
    .map_err(|e| ConcordError::Config(format!("JSON serialization: {}", e)))?;

    println!("{}", json);
    Ok(())
}

/// Read the input text from the given file, or from stdin when absent.
fn read_input(path: Option<&std::path::Path>) -> Result<String> {
    match path {
        Some(p) => Ok(std::fs::read_to_string(p)?),
        None => Ok(std::io::read_to_string(std::io::stdin())?),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();
    let config = ConcordConfig::load_or_default(&args.resolve_config_path());

    let log_level = args.resolve_log_level(&config.general.log_level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let text = read_input(args.input.as_deref())?;

    // The ONNX backend needs both model files; anything less runs the
    // deterministic mock encoder.
    let model_files = config
        .encoder
        .model_path
        .clone()
        .zip(config.encoder.tokenizer_path.clone());
    match model_files {
        Some((model, tokenizer)) => {
            let encoder = OnnxConceptEncoder::from_files(&model, &tokenizer)?;
            run(encoder, config, &text, args.pretty).await
        }
        None => {
            tracing::info!("No encoder model configured, using mock encoder");
            run(MockConceptEncoder::new(), config, &text, args.pretty).await
        }
    }
}
