use std::io;
use std::path::{Path, PathBuf};

use futures::stream::{self, Stream};
use tokio::fs::{self, ReadDir};

/// Configuración del recorrido.
#[derive(Debug, Clone)]
pub struct WalkConfig {
  pub max_depth: usize,
  /// Ignora entradas cuyo nombre empieza por `.` (y no entra en esos dirs).
  pub skip_hidden: bool,
}

impl Default for WalkConfig {
  fn default() -> Self {
    Self { max_depth: 32, skip_hidden: true }
  }
}

// Estado interno: directorio pendiente de abrir o ya abierto.
enum Frame {
  Pending { path: PathBuf, depth: usize },
  Open { rd: ReadDir, depth: usize },
}

fn is_hidden(path: &Path) -> bool {
  path.file_name().is_some_and(|n| n.to_string_lossy().starts_with('.'))
}

/// Stream de archivos regulares bajo `root`, recursivo.
///
/// Los symlinks no se siguen. Los errores de E/S se emiten como elementos
/// del stream y el recorrido continúa con la siguiente entrada.
pub fn walk_files(root: impl Into<PathBuf>, cfg: WalkConfig) -> impl Stream<Item = io::Result<PathBuf>> {
  let stack = vec![Frame::Pending { path: root.into(), depth: 0 }];

  stream::unfold((stack, cfg), |(mut stack, cfg)| async move {
    loop {
      let top = stack.last_mut()?;

      match top {
        Frame::Pending { path, depth } => {
          let path = std::mem::take(path);
          let depth = *depth;
          stack.pop();

          match fs::read_dir(&path).await {
            Ok(rd) => stack.push(Frame::Open { rd, depth }),
            Err(e) => return Some((Err(e), (stack, cfg))),
          }
        }

        Frame::Open { rd, depth } => {
          let depth = *depth;

          match rd.next_entry().await {
            Ok(Some(entry)) => {
              let path = entry.path();
              if cfg.skip_hidden && is_hidden(&path) {
                continue;
              }

              let ft = match entry.file_type().await {
                Ok(ft) => ft,
                Err(e) => return Some((Err(e), (stack, cfg))),
              };

              if ft.is_dir() {
                if depth < cfg.max_depth {
                  stack.push(Frame::Pending { path, depth: depth + 1 });
                }
                continue;
              }

              if ft.is_file() {
                return Some((Ok(path), (stack, cfg)));
              }
            }
            Ok(None) => {
              stack.pop();
            }
            Err(e) => {
              stack.pop();
              return Some((Err(e), (stack, cfg)));
            }
          }
        }
      }
    }
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use futures::StreamExt;
  use tempfile::tempdir;

  #[tokio::test]
  async fn yields_nested_files_and_skips_hidden() {
    let tmp = tempdir().unwrap();
    std::fs::create_dir_all(tmp.path().join("videos/a/1024_848")).unwrap();
    std::fs::create_dir_all(tmp.path().join(".git")).unwrap();
    std::fs::write(tmp.path().join("videos/a/1024_848/video.mp4"), b"x").unwrap();
    std::fs::write(tmp.path().join("top.json"), b"{}").unwrap();
    std::fs::write(tmp.path().join(".git/HEAD"), b"ref").unwrap();

    let mut found: Vec<PathBuf> =
      walk_files(tmp.path(), WalkConfig::default()).filter_map(|r| async move { r.ok() }).collect().await;
    found.sort();

    assert_eq!(
      found,
      vec![tmp.path().join("top.json"), tmp.path().join("videos/a/1024_848/video.mp4")]
    );
  }

  #[tokio::test]
  async fn respects_max_depth() {
    let tmp = tempdir().unwrap();
    std::fs::create_dir_all(tmp.path().join("a/b")).unwrap();
    std::fs::write(tmp.path().join("a/one.txt"), b"1").unwrap();
    std::fs::write(tmp.path().join("a/b/two.txt"), b"2").unwrap();

    let cfg = WalkConfig { max_depth: 1, skip_hidden: true };
    let found: Vec<PathBuf> = walk_files(tmp.path(), cfg).filter_map(|r| async move { r.ok() }).collect().await;

    assert_eq!(found, vec![tmp.path().join("a/one.txt")]);
  }

  #[tokio::test]
  async fn missing_root_yields_an_error() {
    let tmp = tempdir().unwrap();
    let results: Vec<_> = walk_files(tmp.path().join("nope"), WalkConfig::default()).collect().await;

    assert_eq!(results.len(), 1);
    assert!(results[0].is_err());
  }
}
