//! Metabase CLI
//!
//! Reads a JSON syntax tree dump of one translation unit and writes the
//! metabase document.
//!
//! # Usage
//!
//! ```bash
//! metabase --input ast.json --output metabase.json \
//!     --sdk-path "$(xcrun --sdk iphonesimulator --show-sdk-path)" \
//!     --min-version 9.0 --framework-name MyKit --pretty
//!
//! # Settings from a YAML file, flags still win
//! metabase --input ast.json --output metabase.json --config metabase.yaml
//! ```
//!
//! Logging goes to stderr; set `RUST_LOG` (default `info`).

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use metabase_ir::pipeline::{parse, read_tree, MetabaseDocument};
use metabase_ir::ParserConfig;

#[derive(Parser)]
#[command(name = "metabase")]
#[command(about = "Extract Objective-C framework metadata for bridge generation", long_about = None)]
struct Cli {
    /// JSON syntax tree dump of the translation unit
    #[arg(short, long)]
    input: PathBuf,

    /// Output document path
    #[arg(short, long)]
    output: PathBuf,

    /// SDK root; headers below it are system headers
    #[arg(long)]
    sdk_path: Option<String>,

    /// Minimum target OS version
    #[arg(long)]
    min_version: Option<String>,

    /// Drop declarations located in the SDK
    #[arg(long)]
    exclude_system_apis: bool,

    /// Only register declarations of this framework
    #[arg(long)]
    framework_filter: Option<String>,

    /// Framework being generated
    #[arg(long)]
    framework_name: Option<String>,

    /// YAML config file (schema version 1)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pretty-print the document
    #[arg(long)]
    pretty: bool,
}

impl Cli {
    /// Config file (or defaults) overlaid with command line flags
    fn parser_config(&self) -> anyhow::Result<ParserConfig> {
        let mut config = match &self.config {
            Some(path) => ParserConfig::from_yaml(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => ParserConfig::default(),
        };

        if let Some(sdk_path) = &self.sdk_path {
            config.sdk_path = sdk_path.clone();
        }
        if let Some(min_version) = &self.min_version {
            config.min_version = min_version.clone();
        }
        if self.exclude_system_apis {
            config.exclude_system_apis = true;
        }
        if let Some(filter) = &self.framework_filter {
            config.framework_filter = filter.clone();
        }
        if let Some(name) = &self.framework_name {
            config.framework_name = name.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = cli.parser_config()?;

    let root = read_tree(&cli.input)
        .with_context(|| format!("reading syntax tree {}", cli.input.display()))?;
    let ctx = parse(&root, config);

    let file = File::create(&cli.output)
        .with_context(|| format!("creating {}", cli.output.display()))?;
    MetabaseDocument::new(&ctx).write_to(BufWriter::new(file), cli.pretty)?;

    info!(output = %cli.output.display(), "metabase written");
    Ok(())
}
