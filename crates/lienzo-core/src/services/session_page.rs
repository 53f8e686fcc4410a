use serde::Serialize;

use crate::domain::catalog::Catalog;
use crate::domain::{Artist, Session, Slug};
use crate::errors::CoreError;
use crate::ports::DatasetSource;
use crate::services::content_repository::{
  ContentRepository, find_artist, find_first_enabled_session, find_neighbours, find_session,
};

/// Metadatos `<meta>` de la página de una sesión.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageMeta {
  pub title: String,
  pub description: String,
  pub image: String,
}

/// Contexto completo que consume la plantilla de la página de sesión.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionPage {
  pub meta: PageMeta,
  pub social_share_description: String,
  pub previous: Artist,
  pub artist: Artist,
  pub next: Artist,
  pub session: Session,
  pub sharing_url: String,
}

/// Qué debe hacer la capa HTTP con una petición de sesión.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SessionRoute {
  /// Solo se pidió el artista: redirigir a su primera sesión habilitada.
  Redirect { location: String },
  Page(Box<SessionPage>),
}

/// Ruta canónica de la página de una sesión.
pub fn session_path(artist: &Slug, session: &Slug) -> String {
  format!("/artists/{artist}/sessions/{session}/")
}

impl SessionPage {
  fn build(previous: Artist, artist: Artist, next: Artist, session: Session, sharing_url: String) -> Self {
    let meta = PageMeta {
      title: format!("Virtual Art Sessions: {}", artist.name),
      description: format!(
        "Watch {} paint in virtual reality from any angle at Virtual Art Sessions, \
         a new Chrome Experiment using Tilt Brush. Created for Google Chrome.",
        artist.name
      ),
      image: format!("img/meta/sessions/{}/{}.jpg", artist.slug, session.slug),
    };
    let social_share_description = format!(
      "Watch {} {} in virtual reality from any angle with Tilt Brush #VirtualArtSessions {}",
      artist.name, artist.share_title, sharing_url
    );

    Self { meta, social_share_description, previous, artist, next, session, sharing_url }
  }
}

impl<S: DatasetSource> ContentRepository<S> {
  /// Construye el contexto de la página `artist_slug/session_slug`.
  ///
  /// `sharing_url` es la URL absoluta de la petición (dominio del sitio + path).
  /// Artista, sesión y vecinos salen del mismo snapshot.
  pub fn session_page(
    &self,
    artist_slug: &str,
    session_slug: &str,
    sharing_url: impl Into<String>,
  ) -> Result<SessionPage, CoreError> {
    let catalog = self.loader().current()?;
    session_page_in(&catalog, artist_slug, session_slug, sharing_url.into())
  }

  /// Resuelve una petición con o sin slug de sesión.
  ///
  /// `sharing_url` recibe la ruta canónica de la página y devuelve la URL
  /// absoluta que se comparte.
  pub fn route_session(
    &self,
    artist_slug: &str,
    session_slug: Option<&str>,
    sharing_url: impl FnOnce(&str) -> String,
  ) -> Result<SessionRoute, CoreError> {
    let catalog = self.loader().current()?;

    match session_slug {
      None => {
        let first = find_first_enabled_session(&catalog, artist_slug)?;
        let location = session_path(&Slug::from(artist_slug), &first.slug);
        Ok(SessionRoute::Redirect { location })
      }
      Some(session_slug) => {
        let path = session_path(&Slug::from(artist_slug), &Slug::from(session_slug));
        let page = session_page_in(&catalog, artist_slug, session_slug, sharing_url(&path))?;
        Ok(SessionRoute::Page(Box::new(page)))
      }
    }
  }
}

fn session_page_in(
  catalog: &Catalog,
  artist_slug: &str,
  session_slug: &str,
  sharing_url: String,
) -> Result<SessionPage, CoreError> {
  let artist = find_artist(catalog, artist_slug)?;
  let session = find_session(catalog, artist_slug, session_slug)?;
  let (previous, next) = find_neighbours(catalog, artist_slug)?;

  Ok(SessionPage::build(previous.clone(), artist.clone(), next.clone(), session.clone(), sharing_url))
}
