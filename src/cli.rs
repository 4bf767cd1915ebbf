use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use client_paths::LogicalName;

#[derive(Debug, Parser)]
#[command(name = "client-paths")]
#[command(about = "Resolve the asset path prefixes declared by a game client's host page")]
pub struct Cli {
    /// Host document whose <html> element carries the path attributes
    pub document: Option<PathBuf>,

    /// Config file to layer over the defaults instead of the user config
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Toml)]
    pub format: OutputFormat,

    /// Print a single path (data, font, gui, music, sounds, sprites, weather, achievements, tileset, ws)
    #[arg(long)]
    pub name: Option<LogicalName>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// A TOML table of name = "path"
    Toml,
    /// One name=path pair per line
    Lines,
}
