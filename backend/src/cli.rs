use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Artist session catalogue and asset resolver.
#[derive(Debug, Parser)]
#[command(name = "lienzo", version, about)]
pub struct Cli {
  /// Development mode: reload the dataset on every call and seed missing
  /// assets from the local video cache. Overrides `[site].debug`.
  #[arg(long, global = true, env = "LIENZO_DEBUG")]
  pub debug: bool,

  #[command(subcommand)]
  pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
  /// List every artist in dataset order.
  Artists,

  /// Show one artist with its enabled sessions and neighbours.
  Artist { slug: String },

  /// Resolve a session request: redirect target or page context.
  Session { artist: String, session: Option<String> },

  /// Resolve an asset path through the blob store.
  Resolve {
    path: String,
    /// Write the bytes here instead of printing a summary.
    #[arg(long, short)]
    out: Option<PathBuf>,
  },

  /// Copy every file in the local video cache missing from the blob store.
  Seed,

  /// Load the dataset once and report what it contains.
  Check,

  /// Configuration helpers.
  #[command(subcommand)]
  Config(ConfigCommand),
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
  /// Write the current (or default) `[site]` and `[storage]` sections.
  Init,
  /// Print the effective configuration.
  Show,
}
