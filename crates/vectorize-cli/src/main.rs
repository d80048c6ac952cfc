use std::{io::Read, path::PathBuf, time::Instant};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use text_vectorize::{
    CountMatrix, CountVectorizer, IdfVector, TfMatrix, TfidfMatrix, TfidfTransformer,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "vectorize")]
#[command(about = "Turn documents into count, TF, IDF and TF-IDF matrices", long_about = None)]
struct Cli {
    /// Documents to vectorize (if none are given, reads one document per line from stdin)
    #[arg(value_name = "TEXT")]
    texts: Vec<String>,

    /// Read documents from a file, one per line
    #[arg(short, long, value_name = "PATH", conflicts_with = "texts")]
    file: Option<PathBuf>,

    /// Read documents from a JSON array of strings
    #[arg(long, value_name = "PATH", conflicts_with_all = ["texts", "file"])]
    batch_json: Option<PathBuf>,

    /// Pipeline stage to print
    #[arg(short, long, value_enum, default_value = "all")]
    stage: Stage,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "human")]
    format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    quiet: bool,

    /// Verbose mode (debug logging and timings)
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    /// Term counts per document
    Counts,
    /// Term frequencies per document
    Tf,
    /// Smoothed inverse document frequency per term
    Idf,
    /// TF-IDF weights per document
    Tfidf,
    /// Every stage above
    All,
}

impl Stage {
    fn includes(self, other: Stage) -> bool {
        self == Stage::All || self == other
    }
}

#[derive(ValueEnum, Clone, Copy)]
enum OutputFormat {
    /// Feature names followed by one row per line (default)
    Human,
    /// A single JSON object
    Json,
}

#[derive(Clone, Copy)]
enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Verbosity {
    fn log_level(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "debug",
        }
    }
}

/// Everything computed for one corpus. Stages that were not requested stay `None`.
#[derive(Debug, Default, Serialize)]
struct Report {
    feature_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    counts: Option<CountMatrix>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tf: Option<TfMatrix>,
    #[serde(skip_serializing_if = "Option::is_none")]
    idf: Option<IdfVector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tfidf: Option<TfidfMatrix>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let verbosity = match (cli.quiet, cli.verbose) {
        (true, _) => Verbosity::Quiet,
        (_, true) => Verbosity::Verbose,
        _ => Verbosity::Normal,
    };
    init_tracing(verbosity.log_level());

    let documents = read_documents(&cli)?;
    let start = matches!(verbosity, Verbosity::Verbose).then(Instant::now);

    let report = build_report(&documents, cli.stage)?;

    if let Some(start_time) = start {
        eprintln!("Vectorization time: {:?}", start_time.elapsed());
    }

    match cli.format {
        OutputFormat::Human => print!("{}", render_human(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string(&report)?),
    }
    Ok(())
}

/// Logs go to stderr; `RUST_LOG` overrides the level picked from the flags.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Determine the corpus from CLI args
fn read_documents(cli: &Cli) -> Result<Vec<String>> {
    // Priority: text args > file > batch_json > stdin
    if !cli.texts.is_empty() {
        return Ok(cli.texts.clone());
    }

    if let Some(path) = &cli.file {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        return Ok(split_lines(&contents));
    }

    if let Some(path) = &cli.batch_json {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read JSON batch file: {}", path.display()))?;
        return parse_json_batch(&contents);
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read from stdin")?;
    Ok(split_lines(&buffer))
}

/// One document per non-blank line.
fn split_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(String::from)
        .collect()
}

fn parse_json_batch(contents: &str) -> Result<Vec<String>> {
    serde_json::from_str(contents).context("Failed to parse JSON array of strings")
}

/// Run the requested stages over the corpus.
fn build_report(documents: &[String], stage: Stage) -> Result<Report> {
    debug!(num_docs = documents.len(), ?stage, "Building report");

    let mut vectorizer = CountVectorizer::new();
    let counts = vectorizer.fit_transform(documents);

    let mut report = Report {
        feature_names: vectorizer.feature_names(),
        ..Report::default()
    };

    if stage.includes(Stage::Tf) {
        report.tf = Some(
            vectorizer
                .tf_transform(&counts)
                .context("Failed to compute term frequencies")?,
        );
    }
    if stage.includes(Stage::Idf) {
        report.idf = Some(
            vectorizer
                .idf_transform(&counts)
                .context("Failed to compute inverse document frequencies")?,
        );
    }
    if stage.includes(Stage::Tfidf) {
        report.tfidf = Some(
            TfidfTransformer::new()
                .fit_transform(&counts)
                .context("Failed to compute TF-IDF weights")?,
        );
    }
    if stage.includes(Stage::Counts) {
        report.counts = Some(counts);
    }

    Ok(report)
}

fn render_human(report: &Report) -> String {
    let mut out = format!("features: {:?}\n", report.feature_names);

    if let Some(counts) = &report.counts {
        out.push_str("\ncounts:\n");
        for row in counts {
            out.push_str(&format!("{row:?}\n"));
        }
    }
    if let Some(tf) = &report.tf {
        out.push_str("\ntf:\n");
        for row in tf {
            out.push_str(&format!("{row:?}\n"));
        }
    }
    if let Some(idf) = &report.idf {
        out.push_str(&format!("\nidf:\n{idf:?}\n"));
    }
    if let Some(tfidf) = &report.tfidf {
        out.push_str("\ntfidf:\n");
        for row in tfidf {
            out.push_str(&format!("{row:?}\n"));
        }
    }
    out
}
