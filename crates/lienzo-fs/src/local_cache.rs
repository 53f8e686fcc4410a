use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use futures::StreamExt;
use tracing::{debug, warn};

use lienzo_core::domain::AssetPath;
use lienzo_core::ports::LocalCache;

use crate::walker::{WalkConfig, walk_files};

/// Errores que para la caché equivalen a "no hay archivo con ese nombre":
/// la ruta no existe, es un directorio o atraviesa un archivo.
fn is_absent(kind: ErrorKind) -> bool {
  matches!(kind, ErrorKind::NotFound | ErrorKind::IsADirectory | ErrorKind::NotADirectory)
}

/// Caché local de assets en un directorio del propio árbol del proyecto
/// (`scripts/videos`). Solo lectura.
#[derive(Debug, Clone)]
pub struct DirLocalCache {
  root: PathBuf,
}

impl DirLocalCache {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  /// Ruta física del asset. Si el archivo existe, se canonicaliza y se
  /// comprueba que siga dentro de la raíz (un symlink no puede sacarlo).
  async fn resolve(&self, path: &AssetPath) -> io::Result<Option<PathBuf>> {
    let joined = self.root.join(path.to_relative_path());

    let canonical = match tokio::fs::canonicalize(&joined).await {
      Ok(p) => p,
      Err(e) if is_absent(e.kind()) => return Ok(None),
      Err(e) => return Err(e),
    };
    let root = tokio::fs::canonicalize(&self.root).await?;

    if !canonical.starts_with(&root) {
      return Err(io::Error::new(
        ErrorKind::PermissionDenied,
        format!("{} escapes the local cache root", path),
      ));
    }

    // Solo cuentan archivos regulares.
    if !tokio::fs::metadata(&canonical).await?.is_file() {
      return Ok(None);
    }
    Ok(Some(canonical))
  }

  fn to_asset_path(&self, file: &Path) -> Option<AssetPath> {
    let rel = file.strip_prefix(&self.root).ok()?;
    let joined = rel.components().map(|c| c.as_os_str().to_string_lossy()).collect::<Vec<_>>().join("/");
    AssetPath::parse(&joined).ok()
  }
}

#[async_trait]
impl LocalCache for DirLocalCache {
  async fn read(&self, path: &AssetPath) -> io::Result<Option<Vec<u8>>> {
    let Some(physical) = self.resolve(path).await? else {
      debug!(%path, root = %self.root.display(), "not in local cache");
      return Ok(None);
    };

    match tokio::fs::read(&physical).await {
      Ok(bytes) => Ok(Some(bytes)),
      Err(e) if is_absent(e.kind()) => Ok(None),
      Err(e) => Err(e),
    }
  }

  async fn list(&self) -> io::Result<Vec<AssetPath>> {
    if !tokio::fs::try_exists(&self.root).await? {
      return Ok(Vec::new());
    }

    let mut entries = std::pin::pin!(walk_files(self.root.clone(), WalkConfig::default()));

    let mut found = Vec::new();
    while let Some(res) = entries.next().await {
      match res {
        Ok(file) => {
          // Restos de escrituras a medias.
          if file.extension().is_some_and(|e| e == "tmp") {
            continue;
          }
          if let Some(asset) = self.to_asset_path(&file) {
            found.push(asset);
          }
        }
        Err(e) => warn!("local cache walk error: {e}"),
      }
    }
    Ok(found)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  fn asset(p: &str) -> AssetPath {
    AssetPath::parse(p).unwrap()
  }

  #[tokio::test]
  async fn reads_present_files_and_reports_missing_ones() {
    let tmp = tempdir().unwrap();
    std::fs::create_dir_all(tmp.path().join("videos/a")).unwrap();
    std::fs::write(tmp.path().join("videos/a/video.mp4"), b"frames").unwrap();

    let cache = DirLocalCache::new(tmp.path());

    assert_eq!(cache.read(&asset("videos/a/video.mp4")).await.unwrap(), Some(b"frames".to_vec()));
    assert_eq!(cache.read(&asset("videos/b/video.mp4")).await.unwrap(), None);
  }

  #[tokio::test]
  async fn directories_and_paths_through_files_are_absent() {
    let tmp = tempdir().unwrap();
    std::fs::create_dir_all(tmp.path().join("videos/a")).unwrap();
    std::fs::write(tmp.path().join("videos/a/video.mp4"), b"frames").unwrap();

    let cache = DirLocalCache::new(tmp.path());

    assert_eq!(cache.read(&asset("videos/a")).await.unwrap(), None);
    assert_eq!(cache.read(&asset("videos/a/video.mp4/extra.mp4")).await.unwrap(), None);
  }

  #[tokio::test]
  async fn lists_relative_asset_paths() {
    let tmp = tempdir().unwrap();
    std::fs::create_dir_all(tmp.path().join("videos/a/512_424")).unwrap();
    std::fs::write(tmp.path().join("videos/a/512_424/video.webm"), b"x").unwrap();
    std::fs::write(tmp.path().join("videos/a/512_424/.video.webm.1.0.tmp"), b"x").unwrap();

    let listed = DirLocalCache::new(tmp.path()).list().await.unwrap();
    assert_eq!(listed, vec![asset("videos/a/512_424/video.webm")]);
  }

  #[tokio::test]
  async fn missing_root_lists_nothing() {
    let tmp = tempdir().unwrap();
    let cache = DirLocalCache::new(tmp.path().join("videos"));

    assert!(cache.list().await.unwrap().is_empty());
    assert_eq!(cache.read(&asset("a.mp4")).await.unwrap(), None);
  }

  #[cfg(unix)]
  #[tokio::test]
  async fn symlink_out_of_root_is_refused() {
    let outside = tempdir().unwrap();
    std::fs::write(outside.path().join("secret.mp4"), b"secret").unwrap();

    let tmp = tempdir().unwrap();
    std::os::unix::fs::symlink(outside.path().join("secret.mp4"), tmp.path().join("link.mp4")).unwrap();

    let err = DirLocalCache::new(tmp.path()).read(&asset("link.mp4")).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PermissionDenied);
  }
}
