use serde::{Deserialize, Serialize};

/// Sentido de la navegación entre artistas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
  Previous,
  Next,
}

/// Índice vecino dentro de un orden circular de longitud `len`.
///
/// Usa módulo euclídeo: el anterior al índice 0 es `len - 1`.
/// `len` debe ser mayor que cero.
pub fn adjacent_index(index: usize, len: usize, direction: Direction) -> usize {
  let step: i64 = match direction {
    Direction::Previous => -1,
    Direction::Next => 1,
  };
  (index as i64 + step).rem_euclid(len as i64) as usize
}
