use std::io;

use async_trait::async_trait;

use crate::domain::asset::AssetPath;

/// Copia local de assets descargados fuera de banda.
///
/// Solo lectura desde el núcleo. Se consulta únicamente en modo desarrollo.
#[async_trait]
pub trait LocalCache: Send + Sync {
  /// `Ok(None)` si el archivo no existe en la caché.
  async fn read(&self, path: &AssetPath) -> io::Result<Option<Vec<u8>>>;

  /// Todos los assets presentes, en cualquier orden.
  async fn list(&self) -> io::Result<Vec<AssetPath>>;
}
