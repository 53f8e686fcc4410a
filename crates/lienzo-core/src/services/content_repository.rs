use serde_json::{Map, Value};

use crate::domain::catalog::{Catalog, SessionLookup};
use crate::domain::{Artist, Direction, Session};
use crate::errors::{CoreError, NotFound};
use crate::ports::DatasetSource;
use crate::services::dataset_loader::DatasetLoader;

/// Vistas de consulta sobre el dataset vigente.
///
/// Cada llamada toma el snapshot actual del loader (en modo `Live` eso
/// implica releer la fuente) y devuelve copias: el snapshot nunca se modifica.
pub struct ContentRepository<S: DatasetSource> {
  loader: DatasetLoader<S>,
}

impl<S: DatasetSource> ContentRepository<S> {
  pub fn new(loader: DatasetLoader<S>) -> Self {
    Self { loader }
  }

  pub fn loader(&self) -> &DatasetLoader<S> {
    &self.loader
  }

  // -------- QUERY (read) --------

  pub fn get_artists(&self) -> Result<Vec<Artist>, CoreError> {
    Ok(self.loader.current()?.artists().to_vec())
  }

  pub fn get_globals(&self) -> Result<Map<String, Value>, CoreError> {
    Ok(self.loader.current()?.dataset().globals.clone())
  }

  pub fn get_artist(&self, slug: &str) -> Result<Artist, CoreError> {
    let catalog = self.loader.current()?;
    Ok(find_artist(&catalog, slug)?.clone())
  }

  pub fn get_enabled_sessions(&self, artist_slug: &str) -> Result<Vec<Session>, CoreError> {
    let catalog = self.loader.current()?;
    let sessions =
      catalog.enabled_sessions(artist_slug).ok_or_else(|| NotFound::Artist(artist_slug.into()))?;
    Ok(sessions.into_iter().cloned().collect())
  }

  /// Sesión habilitada por slug. Una sesión deshabilitada se reporta como
  /// `NotFound` igual que una inexistente; solo cambia el motivo.
  pub fn get_session(&self, artist_slug: &str, session_slug: &str) -> Result<Session, CoreError> {
    let catalog = self.loader.current()?;
    Ok(find_session(&catalog, artist_slug, session_slug)?.clone())
  }

  pub fn get_first_enabled_session(&self, artist_slug: &str) -> Result<Session, CoreError> {
    let catalog = self.loader.current()?;
    Ok(find_first_enabled_session(&catalog, artist_slug)?.clone())
  }

  pub fn get_adjacent_artist(&self, artist_slug: &str, direction: Direction) -> Result<Artist, CoreError> {
    let catalog = self.loader.current()?;
    let artist = catalog.adjacent(artist_slug, direction).ok_or_else(|| NotFound::Artist(artist_slug.into()))?;
    Ok(artist.clone())
  }

  /// (anterior, siguiente) sobre un único snapshot.
  pub fn get_neighbours(&self, artist_slug: &str) -> Result<(Artist, Artist), CoreError> {
    let catalog = self.loader.current()?;
    let (previous, next) = find_neighbours(&catalog, artist_slug)?;
    Ok((previous.clone(), next.clone()))
  }
}

// Búsquedas sobre un snapshot ya tomado. Las vistas que combinan varias
// consultas las usan para no mezclar snapshots.

pub(crate) fn find_artist<'a>(catalog: &'a Catalog, slug: &str) -> Result<&'a Artist, NotFound> {
  catalog.artist(slug).ok_or_else(|| NotFound::Artist(slug.into()))
}

pub(crate) fn find_session<'a>(
  catalog: &'a Catalog,
  artist_slug: &str,
  session_slug: &str,
) -> Result<&'a Session, NotFound> {
  match catalog.session(artist_slug, session_slug) {
    None => Err(NotFound::Artist(artist_slug.into())),
    Some(SessionLookup::Found(session)) => Ok(session),
    Some(SessionLookup::Disabled) => {
      Err(NotFound::SessionDisabled { artist: artist_slug.into(), session: session_slug.into() })
    }
    Some(SessionLookup::Missing) => {
      Err(NotFound::Session { artist: artist_slug.into(), session: session_slug.into() })
    }
  }
}

pub(crate) fn find_first_enabled_session<'a>(
  catalog: &'a Catalog,
  artist_slug: &str,
) -> Result<&'a Session, NotFound> {
  match catalog.first_enabled_session(artist_slug) {
    None => Err(NotFound::Artist(artist_slug.into())),
    Some(None) => Err(NotFound::NoEnabledSessions(artist_slug.into())),
    Some(Some(session)) => Ok(session),
  }
}

pub(crate) fn find_neighbours<'a>(
  catalog: &'a Catalog,
  artist_slug: &str,
) -> Result<(&'a Artist, &'a Artist), NotFound> {
  let missing = || NotFound::Artist(artist_slug.into());

  let previous = catalog.adjacent(artist_slug, Direction::Previous).ok_or_else(missing)?;
  let next = catalog.adjacent(artist_slug, Direction::Next).ok_or_else(missing)?;
  Ok((previous, next))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::errors::DataLoadError;
  use crate::ports::MemorySource;
  use crate::domain::Slug;
  use crate::services::dataset_loader::LoadMode;

  const SCENARIO: &str = r#"{
    "artists": [
      {"slug": "a", "name": "Artist A", "share_title": "paint", "sessions": [
        {"slug": "s1", "enabled": false},
        {"slug": "s2", "enabled": true}
      ]},
      {"slug": "b", "name": "Artist B", "share_title": "sculpt", "sessions": [
        {"slug": "s3", "enabled": true}
      ]}
    ],
    "globals": {"site": "sessions"}
  }"#;

  fn repo(raw: &str) -> ContentRepository<MemorySource> {
    ContentRepository::new(DatasetLoader::new(MemorySource::new(raw), LoadMode::Cached))
  }

  fn dataset_of(n: usize) -> String {
    let artists: Vec<String> = (0..n)
      .map(|i| {
        format!(
          r#"{{"slug": "artist-{i}", "name": "N{i}", "share_title": "t", "sessions": [{{"slug": "s", "enabled": {}}}]}}"#,
          i % 2 == 0
        )
      })
      .collect();
    format!(r#"{{"artists": [{}], "globals": {{}}}}"#, artists.join(","))
  }

  #[test]
  fn scenario_lookups() {
    let repo = repo(SCENARIO);

    let err = repo.get_session("a", "s1").unwrap_err();
    assert!(err.is_not_found());

    assert_eq!(repo.get_first_enabled_session("a").unwrap().slug, "s2");
    assert_eq!(repo.get_adjacent_artist("a", Direction::Previous).unwrap().slug, "b");
    assert_eq!(repo.get_adjacent_artist("b", Direction::Next).unwrap().slug, "a");
  }

  #[test]
  fn disabled_session_reports_reason() {
    let repo = repo(SCENARIO);

    match repo.get_session("a", "s1") {
      Err(CoreError::NotFound(NotFound::SessionDisabled { artist, session })) => {
        assert_eq!(artist, "a");
        assert_eq!(session, "s1");
      }
      other => panic!("unexpected: {other:?}"),
    }
    assert!(matches!(
      repo.get_session("a", "nope"),
      Err(CoreError::NotFound(NotFound::Session { .. }))
    ));
    assert!(matches!(
      repo.get_session("zz", "s2"),
      Err(CoreError::NotFound(NotFound::Artist(_)))
    ));
  }

  #[test]
  fn artists_keep_dataset_order() {
    let slugs: Vec<_> = repo(SCENARIO).get_artists().unwrap().into_iter().map(|a| a.slug).collect();
    assert_eq!(slugs, vec![Slug::from("a"), Slug::from("b")]);
  }

  #[test]
  fn enabled_sessions_exclude_disabled() {
    let repo = repo(SCENARIO);

    let sessions = repo.get_enabled_sessions("a").unwrap();
    assert_eq!(sessions.len(), 1);
    assert!(sessions.iter().all(|s| s.enabled));
    assert!(repo.get_enabled_sessions("missing").unwrap_err().is_not_found());
  }

  #[test]
  fn first_enabled_session_matches_head_of_enabled_list() {
    let repo = repo(&dataset_of(5));

    for artist in repo.get_artists().unwrap() {
      let enabled = repo.get_enabled_sessions(artist.slug.as_str()).unwrap();
      let first = repo.get_first_enabled_session(artist.slug.as_str());

      match enabled.first() {
        Some(head) => assert_eq!(&first.unwrap(), head),
        None => assert!(matches!(
          first,
          Err(CoreError::NotFound(NotFound::NoEnabledSessions(_)))
        )),
      }
    }
  }

  #[test]
  fn adjacency_round_trips_for_any_size() {
    for n in 1..6 {
      let repo = repo(&dataset_of(n));

      for artist in repo.get_artists().unwrap() {
        let next = repo.get_adjacent_artist(artist.slug.as_str(), Direction::Next).unwrap();
        let back = repo.get_adjacent_artist(next.slug.as_str(), Direction::Previous).unwrap();
        assert_eq!(back.slug, artist.slug);
      }
    }
  }

  #[test]
  fn single_artist_neighbours_itself() {
    let repo = repo(&dataset_of(1));

    let (previous, next) = repo.get_neighbours("artist-0").unwrap();
    assert_eq!(previous.slug, "artist-0");
    assert_eq!(next.slug, "artist-0");
  }

  #[test]
  fn adjacency_of_unknown_artist_is_not_found() {
    let err = repo(SCENARIO).get_adjacent_artist("ghost", Direction::Next).unwrap_err();
    assert!(matches!(err, CoreError::NotFound(NotFound::Artist(s)) if s == "ghost"));
  }

  #[test]
  fn globals_are_exposed() {
    assert_eq!(repo(SCENARIO).get_globals().unwrap()["site"], "sessions");
  }

  #[test]
  fn missing_artists_key_surfaces_data_load_error() {
    let err = repo(r#"{"globals": {}}"#).get_artists().unwrap_err();
    assert!(matches!(err, CoreError::DataLoad(DataLoadError::Parse(_))));
  }
}
