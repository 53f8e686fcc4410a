use std::collections::{HashMap, HashSet};

use crate::domain::artist::Artist;
use crate::domain::dataset::Dataset;
use crate::domain::navigation::{Direction, adjacent_index};
use crate::domain::session::Session;
use crate::domain::slug::Slug;
use crate::errors::DataLoadError;

/// Dataset cargado junto con sus índices derivados.
///
/// Se construye una vez por carga y no se modifica después: recargar el
/// dataset produce un `Catalog` nuevo completo.
#[derive(Debug, Clone)]
pub struct Catalog {
  dataset: Dataset,
  /// slug de artista -> posición en `dataset.artists`.
  by_slug: HashMap<Slug, usize>,
  /// Por posición de artista: posiciones de sus sesiones habilitadas.
  enabled: Vec<Vec<usize>>,
  /// Orden circular de navegación (orden de declaración).
  order: Vec<Slug>,
}

/// Resultado de buscar una sesión dentro de un artista.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionLookup<'a> {
  Found(&'a Session),
  Disabled,
  Missing,
}

impl Catalog {
  /// Construye los índices y valida la unicidad de los slugs.
  pub fn build(dataset: Dataset) -> Result<Self, DataLoadError> {
    let mut by_slug = HashMap::with_capacity(dataset.artists.len());
    let mut enabled = Vec::with_capacity(dataset.artists.len());
    let mut order = Vec::with_capacity(dataset.artists.len());

    for (idx, artist) in dataset.artists.iter().enumerate() {
      if by_slug.insert(artist.slug.clone(), idx).is_some() {
        return Err(DataLoadError::DuplicateArtist(artist.slug.clone()));
      }

      let mut seen = HashSet::with_capacity(artist.sessions.len());
      for session in &artist.sessions {
        if !seen.insert(&session.slug) {
          return Err(DataLoadError::DuplicateSession {
            artist: artist.slug.clone(),
            session: session.slug.clone(),
          });
        }
      }

      enabled.push(
        artist.sessions.iter().enumerate().filter(|(_, s)| s.enabled).map(|(i, _)| i).collect(),
      );
      order.push(artist.slug.clone());
    }

    Ok(Self { dataset, by_slug, enabled, order })
  }

  pub fn dataset(&self) -> &Dataset {
    &self.dataset
  }

  pub fn artists(&self) -> &[Artist] {
    &self.dataset.artists
  }

  pub fn navigation_order(&self) -> &[Slug] {
    &self.order
  }

  fn position(&self, slug: &str) -> Option<usize> {
    self.by_slug.get(slug).copied()
  }

  pub fn artist(&self, slug: &str) -> Option<&Artist> {
    self.position(slug).map(|idx| &self.dataset.artists[idx])
  }

  /// Sesiones habilitadas del artista, o `None` si el artista no existe.
  pub fn enabled_sessions(&self, artist_slug: &str) -> Option<Vec<&Session>> {
    let idx = self.position(artist_slug)?;
    let artist = &self.dataset.artists[idx];
    Some(self.enabled[idx].iter().map(|&i| &artist.sessions[i]).collect())
  }

  /// Primera sesión habilitada; `None` si el artista no existe, `Some(None)`
  /// si existe pero no tiene ninguna habilitada.
  pub fn first_enabled_session(&self, artist_slug: &str) -> Option<Option<&Session>> {
    let idx = self.position(artist_slug)?;
    let artist = &self.dataset.artists[idx];
    Some(self.enabled[idx].first().map(|&i| &artist.sessions[i]))
  }

  /// Busca una sesión distinguiendo "deshabilitada" de "inexistente".
  ///
  /// Devuelve `None` si el artista no existe.
  pub fn session(&self, artist_slug: &str, session_slug: &str) -> Option<SessionLookup<'_>> {
    let artist = self.artist(artist_slug)?;

    let found = match artist.sessions.iter().find(|s| s.slug == session_slug) {
      Some(s) if s.enabled => SessionLookup::Found(s),
      Some(_) => SessionLookup::Disabled,
      None => SessionLookup::Missing,
    };
    Some(found)
  }

  /// Vecino circular del artista; `None` si el slug no está en el orden.
  pub fn adjacent(&self, artist_slug: &str, direction: Direction) -> Option<&Artist> {
    let idx = self.position(artist_slug)?;
    let next = adjacent_index(idx, self.order.len(), direction);
    Some(&self.dataset.artists[next])
  }
}
