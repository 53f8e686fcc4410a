use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::io::AsyncWriteExt;

static TMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Nombre temporal único junto al destino, para que escrituras concurrentes
/// del mismo archivo no compartan el `.tmp`.
fn tmp_path_for(path: &Path) -> PathBuf {
  let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
  let n = TMP_COUNTER.fetch_add(1, Ordering::Relaxed);
  path.with_file_name(format!(".{name}.{}.{n}.tmp", std::process::id()))
}

pub fn atomic_write_str(path: &Path, contents: &str) -> io::Result<()> {
  atomic_write(path, contents.as_bytes())
}

/// Escribe en un temporal, hace `fsync` y renombra sobre el destino.
pub fn atomic_write(path: &Path, contents: &[u8]) -> io::Result<()> {
  let tmp_path = tmp_path_for(path);

  {
    let mut tmp_file = fs::File::create(&tmp_path)?;
    tmp_file.write_all(contents)?;
    tmp_file.sync_all()?;
  }

  fs::rename(&tmp_path, path).inspect_err(|_| {
    let _ = fs::remove_file(&tmp_path);
  })
}

/// Variante async; crea los directorios padre si faltan.
///
/// Dos escritores del mismo destino terminan con el contenido del último
/// `rename`.
pub async fn atomic_write_async(path: &Path, contents: &[u8]) -> io::Result<()> {
  if let Some(parent) = path.parent() {
    tokio::fs::create_dir_all(parent).await?;
  }

  let tmp_path = tmp_path_for(path);

  let written = async {
    let mut tmp_file = tokio::fs::File::create(&tmp_path).await?;
    tmp_file.write_all(contents).await?;
    tmp_file.sync_all().await?;
    tokio::fs::rename(&tmp_path, path).await
  }
  .await;

  if written.is_err() {
    let _ = tokio::fs::remove_file(&tmp_path).await;
  }
  written
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn replaces_existing_file() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("lienzo.toml");

    atomic_write_str(&path, "a = 1\n").unwrap();
    atomic_write_str(&path, "a = 2\n").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "a = 2\n");
    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 1);
  }

  #[tokio::test]
  async fn async_write_creates_parents() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("bucket/videos/a/video.mp4");

    atomic_write_async(&path, b"frames").await.unwrap();

    assert_eq!(tokio::fs::read(&path).await.unwrap(), b"frames");
  }

  #[tokio::test]
  async fn concurrent_writers_leave_one_complete_file() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("same.bin");

    let (a, b) = tokio::join!(atomic_write_async(&path, b"same"), atomic_write_async(&path, b"same"));
    a.unwrap();
    b.unwrap();

    assert_eq!(tokio::fs::read(&path).await.unwrap(), b"same");
    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 1);
  }
}
