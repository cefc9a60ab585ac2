use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use resume_ranker::{
    storage::{load_corpus, write_rankings, OutputFormat},
    Ranker, RankerConfig, TfScheme,
};

#[derive(Parser)]
#[command(
    name = "resume-ranker",
    about = "Rank resumes against job ads by TF-IDF cosine similarity",
    version
)]
struct Cli {
    /// Directory of candidate (resume) text files
    #[arg(short, long)]
    candidates: PathBuf,

    /// Directory of requirement (job ad / assignment) text files
    #[arg(short, long)]
    requirements: PathBuf,

    /// Output directory for the rankings
    #[arg(short, long)]
    output: PathBuf,

    /// File extension of input documents
    #[arg(long, default_value = "txt")]
    extension: String,

    /// Output format: text or cbor
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Use 1 + ln(count) instead of raw counts
    #[arg(long)]
    sublinear_tf: bool,

    /// Keep English stop words in the vocabulary
    #[arg(long)]
    keep_stop_words: bool,

    /// Drop tokens shorter than this many characters
    #[arg(long)]
    min_token_len: Option<usize>,

    /// Decimal places of persisted scores
    #[arg(long)]
    precision: Option<usize>,

    /// Disable rayon parallelism
    #[arg(long)]
    sequential: bool,
}

impl Cli {
    fn apply(&self, config: &mut RankerConfig) {
        if self.sublinear_tf {
            config.tf_scheme = TfScheme::Sublinear;
        }
        if self.keep_stop_words {
            config.stop_words = false;
        }
        if let Some(len) = self.min_token_len {
            config.min_token_len = len;
        }
        if let Some(precision) = self.precision {
            config.precision = precision;
        }
        if self.sequential {
            config.parallel = false;
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = RankerConfig::from_env().context("invalid RANKER_* environment")?;
    cli.apply(&mut config);
    config.validate().context("invalid command-line options")?;
    tracing::debug!(?config, "configuration");

    let candidates = load_corpus(&cli.candidates, &cli.extension)
        .with_context(|| format!("loading candidates from {}", cli.candidates.display()))?;
    let requirements = load_corpus(&cli.requirements, &cli.extension)
        .with_context(|| format!("loading requirements from {}", cli.requirements.display()))?;
    tracing::info!(
        candidates = candidates.len(),
        requirements = requirements.len(),
        "loaded corpora"
    );

    let ranker = Ranker::new(config);
    let rankings = ranker
        .rank(&candidates, &requirements)
        .context("ranking failed")?;

    let written = write_rankings(&cli.output, &rankings, cli.format, ranker.config().precision)
        .with_context(|| format!("writing rankings to {}", cli.output.display()))?;
    tracing::info!(files = written.len(), "done");
    Ok(())
}
