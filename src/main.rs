use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use clap::{ArgAction, Parser};
use sideways::{
    errors::errors::Error,
    format_error,
    lexer::lexer::tokenize,
    parser::parser::{parse_with_config, ParserConfig, DEFAULT_MAX_DEPTH},
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Parses a Sideways script and prints its syntax tree.
#[derive(Debug, Parser)]
#[command(name = "sideways", version, about = "Sideways script parser")]
struct Cli {
    /// Script to parse
    path: PathBuf,

    /// Deepest nesting accepted before giving up
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Print the token stream instead of the syntax tree
    #[arg(long)]
    tokens: bool,

    /// Increase logging verbosity (-v: debug, -vv+: trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(cli.verbose))),
        )
        .with_writer(std::io::stderr)
        .init();

    let source = match read_to_string(&cli.path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Failed to read {}: {}", cli.path.display(), err);
            return ExitCode::FAILURE;
        }
    };

    match run(&cli, source.clone()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprint!("{}", format_error(&error, &source));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, source: String) -> Result<(), Error> {
    let file_name = cli
        .path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());

    let start = Instant::now();
    let tokens = tokenize(source, file_name)?;
    debug!(elapsed = ?start.elapsed(), "tokenized");

    if cli.tokens {
        for token in &tokens {
            println!("{:?} {:?} at {}", token.kind, token.value, token.position);
        }
        return Ok(());
    }

    let parse_start = Instant::now();
    let config = ParserConfig {
        max_depth: cli.max_depth,
    };
    let executables = parse_with_config(tokens, config)?;
    debug!(elapsed = ?parse_start.elapsed(), "parsed");

    println!("{:#?}", executables);
    info!(executables = executables.len(), elapsed = ?start.elapsed(), "done");
    Ok(())
}

fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "sideways=warn",
        1 => "sideways=debug",
        _ => "sideways=trace",
    }
}
