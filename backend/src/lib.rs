mod cli;
mod config;
mod infrastructure;

use anyhow::Context;
use clap::Parser;
use lienzo_config::SiteConfig;
use lienzo_core::domain::Direction;
use lienzo_core::ports::DatasetSource;
use lienzo_core::services::ContentRepository;
use serde::Serialize;
use serde_json::json;
use tracing::info;

use crate::cli::{Cli, Command, ConfigCommand};
use crate::config::RuntimeSettings;
use infrastructure::logging;
use infrastructure::wiring::AppState;

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
  println!("{}", serde_json::to_string_pretty(value)?);
  Ok(())
}

/// Entry point shared by the binary: parse args, init logging, wire, dispatch.
pub async fn run() -> anyhow::Result<()> {
  let cli = Cli::parse();
  logging::init(cli.debug);

  let settings = RuntimeSettings::load(cli.debug).context("failed to load lienzo.toml")?;

  match cli.command {
    // Config commands must work even without a dataset or blob store.
    Command::Config(cmd) => config_command(&cmd, &settings),
    command => {
      let state = AppState::build(settings)?;
      dispatch(&state, command).await
    }
  }
}

fn config_command(cmd: &ConfigCommand, settings: &RuntimeSettings) -> anyhow::Result<()> {
  match cmd {
    ConfigCommand::Init => {
      settings.site.save()?;
      settings.storage.save()?;
      info!(path = %settings.paths.config_file().display(), "configuration written");
      Ok(())
    }
    ConfigCommand::Show => print_json(settings),
  }
}

/// Route for a session request plus the cache header the page is served with.
fn session_output<S: DatasetSource>(
  repo: &ContentRepository<S>,
  site: &SiteConfig,
  artist: &str,
  session: Option<&str>,
) -> anyhow::Result<serde_json::Value> {
  let route = repo.route_session(artist, session, |path| site.full_url(path))?;
  Ok(json!({ "cache_control": site.cache_control(), "route": route }))
}

async fn dispatch(state: &AppState, command: Command) -> anyhow::Result<()> {
  let repo = &state.repository;

  match command {
    Command::Artists => print_json(&repo.get_artists()?),

    Command::Artist { slug } => {
      let artist = repo.get_artist(&slug)?;
      let sessions = repo.get_enabled_sessions(&slug)?;
      let previous = repo.get_adjacent_artist(&slug, Direction::Previous)?;
      let next = repo.get_adjacent_artist(&slug, Direction::Next)?;

      print_json(&json!({
        "artist": artist,
        "enabled_sessions": sessions,
        "previous": previous.slug,
        "next": next.slug,
      }))
    }

    Command::Session { artist, session } => {
      print_json(&session_output(repo, &state.settings.site, &artist, session.as_deref())?)
    }

    Command::Resolve { path, out } => {
      let asset = state.resolver.resolve(&path, state.settings.debug()).await?;

      match out {
        Some(out) => {
          tokio::fs::write(&out, &asset.bytes).await.with_context(|| format!("writing {}", out.display()))?;
          info!(key = %asset.key, out = %out.display(), "asset written");
          Ok(())
        }
        None => print_json(&json!({
          "key": asset.key.to_string(),
          "content_type": asset.content_type,
          "bytes": asset.bytes.len(),
        })),
      }
    }

    Command::Seed => {
      let report = state.resolver.seed_all().await?;
      print_json(&json!({ "seeded": report.seeded, "skipped": report.skipped }))
    }

    Command::Check => {
      let catalog = repo.loader().initialize()?;
      let sessions: usize = catalog.artists().iter().map(|a| a.sessions.len()).sum();
      let enabled: usize = catalog.artists().iter().map(|a| a.enabled_sessions().count()).sum();

      print_json(&json!({
        "source": repo.loader().source().path(),
        "artists": catalog.artists().len(),
        "sessions": sessions,
        "enabled_sessions": enabled,
        "navigation_order": catalog.navigation_order(),
      }))
    }

    Command::Config(cmd) => config_command(&cmd, &state.settings),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use lienzo_core::ports::MemorySource;
  use lienzo_core::services::{DatasetLoader, LoadMode};

  const DATA: &str = r#"{
    "artists": [
      {"slug": "a", "name": "Ann", "share_title": "paint", "sessions": [{"slug": "s1", "enabled": true}]}
    ],
    "globals": {}
  }"#;

  fn repo() -> ContentRepository<MemorySource> {
    ContentRepository::new(DatasetLoader::new(MemorySource::new(DATA), LoadMode::Cached))
  }

  #[test]
  fn session_page_shares_the_configured_site_url() {
    let site = SiteConfig { site_url: "https://art.example.com/".into(), ..Default::default() };

    let out = session_output(&repo(), &site, "a", Some("s1")).unwrap();
    assert_eq!(out["route"]["kind"], "page");
    assert_eq!(out["route"]["sharing_url"], "https://art.example.com/artists/a/sessions/s1/");
    assert_eq!(out["cache_control"], "public, max-age=61");
  }

  #[test]
  fn artist_only_request_redirects() {
    let out = session_output(&repo(), &SiteConfig::default(), "a", None).unwrap();
    assert_eq!(out["route"]["kind"], "redirect");
    assert_eq!(out["route"]["location"], "/artists/a/sessions/s1/");
  }
}
