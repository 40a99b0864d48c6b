// Archivo: errors.rs
// Propósito: errores de la capa de persistencia conversacional.
use thiserror::Error;

/// Errores de la capa de persistencia.
///
/// - `Pool`: fallo al obtener una conexión del pool r2d2.
/// - `Database`: error de Diesel durante una consulta o transacción.
/// - `SessionClosed`: operación sobre una sesión ya confirmada o descartada.
/// - `Migration`: fallo aplicando las migraciones embebidas.
/// - `Config`: URL o variables de entorno inválidas.
#[derive(Error, Debug)]
pub enum PersistenceError {
  /// Fallo del pool de conexiones.
  #[error("Error de pool: {0}")]
  Pool(#[from] r2d2::Error),
  /// Error de base de datos (Diesel).
  #[error("Error de base de datos: {0}")]
  Database(#[from] diesel::result::Error),
  /// La sesión ya no admite más operaciones.
  #[error("Sesión cerrada: {0}")]
  SessionClosed(String),
  /// Error aplicando migraciones embebidas.
  #[error("Error de migración: {0}")]
  Migration(String),
  /// Configuración inválida (URL de base de datos, variables de entorno).
  #[error("Error de configuración: {0}")]
  Config(String),
  /// Otro tipo de error.
  #[error("Otro: {0}")]
  Other(String),
}
