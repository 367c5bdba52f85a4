use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use mien_core::EvaluationEngine;
use mien_report::{by_gender, by_lighting_diff, whole_corpus, Subgroup};

mod config;

#[derive(Parser)]
#[command(name = "mien", about = "Mien verification-performance evaluation CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a scores CSV and write per-subgroup reports
    Evaluate {
        /// Path to a scores.csv produced by the capture harness
        #[arg(short, long)]
        scores: PathBuf,
        /// How to bucket comparisons before evaluation
        #[arg(long, value_enum, default_value_t = GroupBy::None)]
        group_by: GroupBy,
        /// Output directory for JSON reports and curve CSVs
        #[arg(short, long, default_value = "results")]
        out: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum GroupBy {
    /// Evaluate the whole corpus as one unit
    None,
    /// One evaluation per gender group
    Gender,
    /// One evaluation per lighting-difference bucket
    Lighting,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Evaluate {
            scores,
            group_by,
            out,
        } => run_evaluate(&scores, group_by, &out),
    }
}

fn run_evaluate(scores_path: &Path, group_by: GroupBy, out: &Path) -> Result<()> {
    let config = config::Config::from_env();

    let records = mien_report::load_scores(scores_path)
        .with_context(|| format!("loading {}", scores_path.display()))?;
    tracing::info!(
        path = %scores_path.display(),
        comparisons = records.len(),
        "score file loaded"
    );

    let subgroups: Vec<Subgroup> = match group_by {
        GroupBy::None => vec![whole_corpus(&records)],
        GroupBy::Gender => by_gender(&records),
        GroupBy::Lighting => by_lighting_diff(&records),
    };

    if subgroups.is_empty() {
        tracing::warn!("no evaluable subgroups in score file");
        return Ok(());
    }

    std::fs::create_dir_all(out)
        .with_context(|| format!("creating output directory {}", out.display()))?;

    let engine = EvaluationEngine::new(config.sweep);

    for subgroup in &subgroups {
        let evaluation = engine
            .evaluate(&subgroup.label, &subgroup.scores)
            .with_context(|| format!("evaluating subgroup '{}'", subgroup.label))?;

        tracing::info!(
            subgroup = %subgroup.label,
            d_prime = evaluation.d_prime,
            eer = evaluation.eer.value,
            threshold = evaluation.eer.threshold,
            "subgroup evaluated"
        );

        mien_report::write_report(
            out,
            &subgroup.label,
            &evaluation,
            subgroup.scores.genuine.len(),
            subgroup.scores.impostor.len(),
        )?;
        mien_report::write_curve_csv(out, &subgroup.label, &evaluation.rate_curve)?;
    }

    tracing::info!(subgroups = subgroups.len(), out = %out.display(), "evaluation run complete");
    Ok(())
}
