//! Linkfile - reference tag generator for web documents.
//!
//! Computes the relative path from a host document (html, php, css) to a
//! target file and renders the snippet that links it (`<script>`,
//! `<link>`, `@import`, `include()`, `<img>`, `<audio>`, `<video>`,
//! font/image `url()`).

#![allow(dead_code)]

mod cli;
mod config;
mod content;
mod linker;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::LinkfileConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    let config = LinkfileConfig::load(&cli.config)?;

    match &cli.command {
        Commands::Link { args } => cli::link::run_link(args, &config),
        Commands::Url { args } => cli::link::run_url(args, &config),
        Commands::Strip { args } => cli::strip::run_strip(args, &config),
        Commands::Classify { args } => cli::classify::run_classify(args, &config),
    }
}
