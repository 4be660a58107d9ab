// src/main.rs

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use semantic_matcher::{
    ExportConfig, JsonSource, Matcher, MatcherError, SubmodelSource, build_index,
};

/// Index the semantic ids of a submodel repository and write the
/// equivalence links it contains.
#[derive(Debug, Parser)]
#[command(name = "semantic-matcher", version, about)]
struct Cli {
    /// Repository endpoint, e.g. http://localhost:8080/api/v3.0
    endpoint: String,

    /// Read submodels from an AAS JSON file instead of the endpoint
    #[arg(long, value_name = "FILE")]
    snapshot: Option<PathBuf>,

    /// Where to write the link document
    #[arg(long, short, value_name = "FILE", default_value = "semanticLinks.xml")]
    output: PathBuf,

    /// Print every semantic id and its members to stderr
    #[arg(long)]
    print_matches: bool,
}

fn main() -> ExitCode {
    // MATCHER_LOG takes an EnvFilter directive, e.g. "semantic_matcher=debug"
    if let Ok(filter) = EnvFilter::try_from_env("MATCHER_LOG") {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();
    let config = ExportConfig::new(cli.endpoint.clone());

    let result = match &cli.snapshot {
        Some(path) => run(Matcher::new(JsonSource::from_path(path), config), &cli),
        None => run_remote(config, &cli),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(feature = "http")]
fn run_remote(config: ExportConfig, cli: &Cli) -> Result<(), MatcherError> {
    let source = semantic_matcher::HttpSource::new(cli.endpoint.clone())?;
    run(Matcher::new(source, config), cli)
}

#[cfg(not(feature = "http"))]
fn run_remote(_config: ExportConfig, _cli: &Cli) -> Result<(), MatcherError> {
    Err(semantic_matcher::SourceError::http(
        "built without the 'http' feature; pass --snapshot <FILE>",
    )
    .into())
}

fn run<S: SubmodelSource>(matcher: Matcher<S>, cli: &Cli) -> Result<(), MatcherError> {
    let snapshot = matcher.snapshot()?;
    let index = build_index(&snapshot);
    if cli.print_matches {
        eprint!("{index}");
    }

    let xml = matcher.export_index(&index)?.to_xml()?;
    std::fs::write(&cli.output, &xml)?;
    tracing::info!(output = %cli.output.display(), "wrote link document");
    print!("{xml}");
    Ok(())
}
