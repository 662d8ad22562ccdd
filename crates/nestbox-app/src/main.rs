// ABOUTME: Main application entry point.
// ABOUTME: Reads a layout request, computes pixel boxes, and prints them as JSON.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use nestbox_core::Config;
use nestbox_layout::LayoutRequest;

#[derive(Parser, Debug)]
#[command(name = "nestbox")]
#[command(about = "Compute nested box layouts as integer pixel rectangles", long_about = None)]
struct Cli {
    /// Layout request JSON file ("-" or omitted reads stdin)
    request: Option<PathBuf>,

    /// Override the outer box width
    #[arg(long)]
    width: Option<f64>,

    /// Override the outer box height
    #[arg(long)]
    height: Option<f64>,

    /// Config file path (defaults to ~/.config/nestbox/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Single-line JSON output
    #[arg(long)]
    compact: bool,

    /// Print the tree's component aliases instead of computing the layout
    #[arg(long)]
    aliases: bool,

    /// Write the effective config to the config path and exit
    #[arg(long)]
    write_config: bool,
}

/// A missing file is only tolerated when it is about to be written
fn load_config(path: Option<&Path>, allow_missing: bool) -> Result<Config> {
    match path {
        Some(path) if allow_missing && !path.exists() => Ok(Config::default()),
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(Config::load_or_default()),
    }
}

fn write_config(config: &Config, path: Option<&Path>) -> Result<PathBuf> {
    match path {
        Some(path) => {
            config
                .save(path)
                .with_context(|| format!("Failed to write config to {}", path.display()))?;
            Ok(path.to_path_buf())
        }
        None => config
            .save_to_default()
            .context("Failed to write default config"),
    }
}

fn read_request(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read request from {}", path.display())),
        _ => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read request from stdin")?;
            Ok(input)
        }
    }
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref(), cli.write_config)?;
    init_logging(&config);

    if cli.write_config {
        let path = write_config(&config, cli.config.as_deref())?;
        tracing::info!("Wrote config to {}", path.display());
        println!("{}", path.display());
        return Ok(());
    }

    let input = read_request(cli.request.as_deref())?;
    let mut request = LayoutRequest::from_json(&input).context("Invalid layout request")?;

    if cli.aliases {
        for alias in request.layout.aliases() {
            println!("{alias}");
        }
        return Ok(());
    }

    if cli.width.is_some() || cli.height.is_some() {
        let mut outer = request.outer.unwrap_or_else(|| config.default_box());
        outer.width = cli.width.unwrap_or(outer.width);
        outer.height = cli.height.unwrap_or(outer.height);
        request.outer = Some(outer);
    }

    let result = request
        .compute(config.default_box())
        .context("Layout computation failed")?;
    tracing::info!("Laid out {} components", result.len());

    let output = if config.pretty && !cli.compact {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{output}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_config_then_load() {
        let temp_path = std::env::temp_dir()
            .join("nestbox_cli_test")
            .join("config.toml");
        let _ = std::fs::remove_file(&temp_path);

        let config = load_config(Some(temp_path.as_path()), true).unwrap();
        assert_eq!(config, Config::default());
        assert!(load_config(Some(temp_path.as_path()), false).is_err());

        let written = write_config(&config, Some(temp_path.as_path())).unwrap();
        assert_eq!(written, temp_path);
        assert_eq!(load_config(Some(temp_path.as_path()), false).unwrap(), config);

        let _ = std::fs::remove_file(&temp_path);
    }

    #[test]
    fn test_cli_parses_write_config_flag() {
        let cli = Cli::try_parse_from(["nestbox", "--write-config", "--config", "x.toml"]).unwrap();
        assert!(cli.write_config);
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
        assert!(cli.request.is_none());
    }
}
