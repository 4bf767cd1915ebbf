mod cli;

use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use client_paths::model::config::{AppConfig, LoggingConfig};
use client_paths::{HostDocument, PathSet, Paths};
use cli::{Cli, OutputFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    let _guard = init_logging(&config.logging)?;
    tracing::info!("client-paths starting");

    let paths = match init_registry(&cli, &config) {
        Ok(paths) => paths,
        Err(err) => {
            tracing::error!("path resolution failed: {err:#}");
            return Err(err);
        }
    };

    let mut stdout = io::stdout().lock();
    write_paths(&mut stdout, paths, &cli)?;
    stdout.flush()?;

    Ok(())
}

fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let (writer, guard) = if config.to_file {
        let log_dir = directories::ProjectDirs::from("", "", "client-paths")
            .map(|d| d.data_dir().to_path_buf())
            .unwrap_or_else(std::env::temp_dir);
        std::fs::create_dir_all(&log_dir)
            .with_context(|| format!("creating log directory {}", log_dir.display()))?;

        let file_appender = tracing_appender::rolling::daily(&log_dir, "client-paths.log");
        tracing_appender::non_blocking(file_appender)
    } else {
        tracing_appender::non_blocking(io::stderr())
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(!config.to_file)
        .with_env_filter(filter)
        .init();

    Ok(guard)
}

/// A document (argument or config) wins over the `[attributes]` table.
fn init_registry(cli: &Cli, config: &AppConfig) -> Result<&'static PathSet> {
    let document = cli.document.clone().or_else(|| config.document_path());

    let paths = if let Some(path) = document {
        tracing::info!("reading host document {}", path.display());
        let doc = HostDocument::read(&path)?;
        Paths::init(&doc)?
    } else if !config.attributes.is_empty() {
        tracing::info!("using attributes from configuration");
        Paths::init(&config.attributes)?
    } else {
        bail!("no host document given and no [attributes] configured");
    };

    Ok(paths)
}

fn write_paths(out: &mut impl Write, paths: &PathSet, cli: &Cli) -> Result<()> {
    if let Some(name) = cli.name {
        writeln!(out, "{}", paths.get(name))?;
        return Ok(());
    }

    match cli.format {
        OutputFormat::Toml => {
            let rendered = toml::to_string(paths).context("rendering paths as toml")?;
            write!(out, "{rendered}")?;
        }
        OutputFormat::Lines => {
            for (name, value) in paths.iter() {
                writeln!(out, "{name}={value}")?;
            }
        }
    }

    Ok(())
}
