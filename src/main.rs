//! Evaluation CLI: score a result file against a qrel file and report
//! macro-averaged precision, recall and F1.

use clap::Parser;
use erdeval::{parse_annotation_file, score_query, Evaluator};
use std::path::PathBuf;

/// Strict-match evaluator for entity recognition and disambiguation output.
#[derive(Parser, Debug)]
#[command(name = "erdeval")]
struct Args {
    /// Path to the qrel file (ground-truth annotations; contains all queries,
    /// including ones without any annotation).
    qrels: PathBuf,

    /// Path to the result file (predicted annotations, same format).
    results: PathBuf,

    /// Emit the aggregate and per-query metrics as JSON instead of the text report.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("RUST_LOG", "info")).init();

    let args = Args::parse();

    let qrels = parse_annotation_file(&args.qrels)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", args.qrels.display(), e))?;
    let results = parse_annotation_file(&args.results)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", args.results.display(), e))?;

    let evaluator = Evaluator::new(qrels, results)?;
    let evaluation = evaluator.evaluate(score_query);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
    } else {
        println!("{}", evaluation.report());
    }

    Ok(())
}
