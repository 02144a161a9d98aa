use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use skeleton::{TransformSummary, transform_basic, transform_enhanced};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// ccp-prep - Ali-CCP sample-skeleton preprocessor
#[derive(Parser)]
#[command(name = "ccp-prep")]
#[command(about = "Convert raw Ali-CCP sample-skeleton logs into training CSVs", long_about = None)]
struct Cli {
    /// Dataset size to process
    #[arg(value_enum, default_value_t = Mode::Small)]
    mode: Mode,

    /// Mine the most frequent sparse features and append them as columns
    #[arg(long)]
    enhanced: bool,

    /// Directory containing sample_skeleton_train.csv and sample_skeleton_test.csv
    #[arg(short, long, default_value = ".")]
    data_dir: PathBuf,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
enum Mode {
    /// 100K train / 10K test rows (default, quick testing)
    Small,
    /// 1M train / 100K test rows
    Medium,
    /// 10M train / 1M test rows (requires --enhanced)
    Large,
    /// Everything (42M+ train rows)
    Full,
}

impl Mode {
    fn as_str(self) -> &'static str {
        match self {
            Mode::Small => "small",
            Mode::Medium => "medium",
            Mode::Large => "large",
            Mode::Full => "full",
        }
    }
}

/// One split of a preprocessing run.
struct DatasetJob {
    input: &'static str,
    output: String,
    cap: Option<u64>,
}

/// Dataset-size selector: maps a mode to the train and test jobs.
fn dataset_jobs(mode: Mode) -> Vec<DatasetJob> {
    let (train_cap, test_cap) = match mode {
        Mode::Small => (Some(100_000), Some(10_000)),
        Mode::Medium => (Some(1_000_000), Some(100_000)),
        Mode::Large => (Some(10_000_000), Some(1_000_000)),
        Mode::Full => (None, None),
    };

    vec![
        DatasetJob {
            input: "sample_skeleton_train.csv",
            output: format!("ali_ccp_train_{}.csv", mode.as_str()),
            cap: train_cap,
        },
        DatasetJob {
            input: "sample_skeleton_test.csv",
            output: format!("ali_ccp_test_{}.csv", mode.as_str()),
            cap: test_cap,
        },
    ]
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // The large cut only exists for the feature-mining variant.
    if cli.mode == Mode::Large && !cli.enhanced {
        bail!("mode 'large' is only available with --enhanced (try: ccp-prep large --enhanced)");
    }

    println!(
        "Processing {} dataset from {}...",
        cli.mode.as_str().to_uppercase(),
        cli.data_dir.display()
    );

    for job in dataset_jobs(cli.mode) {
        let input = cli.data_dir.join(job.input);
        let output = cli.data_dir.join(&job.output);

        let start = Instant::now();
        let summary = if cli.enhanced {
            transform_enhanced(&input, &output, job.cap)
        } else {
            transform_basic(&input, &output, job.cap)
        }
        .with_context(|| format!("Failed to transform {}", input.display()))?;

        print_summary(&job.output, &summary, start.elapsed());
    }

    Ok(())
}

/// Print the per-split completion line (and the selection, in enhanced mode).
fn print_summary(output: &str, summary: &TransformSummary, elapsed: Duration) {
    println!(
        "{} Wrote {} rows to {} in {:?}",
        "✓".green(),
        summary.rows_written,
        output,
        elapsed
    );
    if let Some(selection) = &summary.selected_features {
        println!("  Selected features: {}", selection.ids().join(", "));
    }
}
