use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::info;

use lexmodel::config::{load_config_from_file, ModelConfig};
use lexmodel::parsing::tokenize_document;
use lexmodel::stopwords::{load_stopwords_file, stopwords_for};
use lexmodel::{ranked_dump, text_as_string, AssociativeModel, Result};

#[derive(Parser, Debug)]
#[command(name = "lexmodel", about = "Builds the associative lexical model of a text")]
struct Cli {
    /// Raw text file to model
    input: Option<PathBuf>,
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Stopword language, overrides the configuration
    #[arg(long)]
    language: Option<String>,
    /// Print the ranked lexeme/power dump instead of the reduced text
    #[arg(long)]
    ranked: bool,
    /// With --ranked, print JSON
    #[arg(long, requires = "ranked")]
    json: bool,
}

fn load_stopwords(config: &ModelConfig) -> Result<HashSet<String>> {
    match &config.stopwords_file {
        Some(path) => load_stopwords_file(path),
        None => stopwords_for(&config.language),
    }
}

fn run(cli: &Cli, input: &Path) -> Result<String> {
    let mut config = match &cli.config {
        Some(path) => load_config_from_file(&path.to_string_lossy())?,
        None => ModelConfig::default(),
    };
    if let Some(language) = &cli.language {
        config.language = language.clone();
    }

    let raw = fs::read_to_string(input)?;
    let document = tokenize_document(&input.to_string_lossy(), &raw);
    let stopwords = load_stopwords(&config)?;
    let model = AssociativeModel::build(&document.sentences, &stopwords, &config)?;
    info!(
        "{}: {} sentences, {} link-set lexemes, {} dominant",
        document.source_name,
        document.sentences.len(),
        model.stats().link_set,
        model.stats().dominant
    );

    if cli.ranked {
        let dump = ranked_dump(&model);
        if cli.json {
            dump.to_json()
        } else {
            Ok(dump.to_text())
        }
    } else {
        text_as_string(&model, &config.output)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let Some(input) = cli.input.clone() else {
        println!("Usage: lexmodel <raw text file name>");
        return ExitCode::SUCCESS;
    };

    match run(&cli, &input) {
        Ok(out) => {
            println!("{}", out);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
