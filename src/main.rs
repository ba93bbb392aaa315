use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use sparql_features::{config, extract_features_checked, sparql_syntax::Query, FeatureHistogram};

/// sparql-features - count the syntactic constructs of parsed SPARQL queries
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON syntax tree of a query (reads stdin when omitted)
    input: Option<PathBuf>,

    /// YAML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Vocabulary namespace for tag IRIs (overrides config)
    #[arg(long)]
    namespace: Option<String>,

    /// Maximum accepted query nesting depth (overrides config).
    ///
    /// JSON input is also bounded by the parser's recursion limit of 128
    /// levels, about 60 nested group patterns; deeper trees fail to parse.
    #[arg(long)]
    max_depth: Option<u32>,

    /// Treat input as JSON Lines, one query per line
    #[arg(long)]
    lines: bool,

    /// Key the output by full tag IRI instead of local name
    #[arg(long)]
    iris: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

fn load_config(cli: &Cli) -> anyhow::Result<config::ExtractorConfig> {
    let mut config = match &cli.config {
        Some(path) => config::ExtractorConfig::from_yaml_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => config::ExtractorConfig::from_env().context("loading config from environment")?,
    };

    if cli.namespace.is_some() || cli.max_depth.is_some() {
        let overrides = config::CliConfig {
            namespace: cli.namespace.clone().unwrap_or_else(|| config.namespace.clone()),
            max_nesting_depth: cli.max_depth.unwrap_or(config.max_nesting_depth),
        };
        config.merge(config::ExtractorConfig::from_cli(overrides)?);
    }
    Ok(config)
}

fn open_input(path: Option<&PathBuf>) -> anyhow::Result<Box<dyn Read>> {
    Ok(match path {
        Some(path) => Box::new(
            File::open(path).with_context(|| format!("opening {}", path.display()))?,
        ),
        None => Box::new(io::stdin()),
    })
}

fn render(
    histogram: &FeatureHistogram,
    config: &config::ExtractorConfig,
    cli: &Cli,
) -> anyhow::Result<String> {
    let map = if cli.iris {
        histogram.to_iri_map(&config.namespace)
    } else {
        histogram.to_named_map()
    };
    let json = if cli.pretty {
        serde_json::to_string_pretty(&map)?
    } else {
        serde_json::to_string(&map)?
    };
    Ok(json)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    log::debug!("Using config: {:?}", config);

    let input = open_input(cli.input.as_ref())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.lines {
        for (index, line) in BufReader::new(input).lines().enumerate() {
            let line = line.context("reading input")?;
            if line.trim().is_empty() {
                continue;
            }
            let line_no = index + 1;
            // one bad query must not stop a log run
            let query: Query = match serde_json::from_str(&line) {
                Ok(query) => query,
                Err(e) => {
                    log::warn!("line {}: skipped: invalid query syntax tree: {}", line_no, e);
                    continue;
                }
            };
            match extract_features_checked(&query, &config) {
                Ok(histogram) => writeln!(out, "{}", render(&histogram, &config, &cli)?)?,
                Err(e) => log::warn!("line {}: skipped: {}", line_no, e),
            }
        }
    } else {
        let query: Query =
            serde_json::from_reader(input).context("invalid query syntax tree")?;
        let histogram = extract_features_checked(&query, &config)?;
        writeln!(out, "{}", render(&histogram, &config, &cli)?)?;
    }
    Ok(())
}

fn main() {
    // Initialize logger - defaults to WARN level, can be overridden with RUST_LOG env var
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
