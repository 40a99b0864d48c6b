// Archivo: errors.rs
// Propósito: definir los errores del motor de conversaciones y el alias
// Result<T> usado por las APIs del crate.
use thiserror::Error;
/// Errores comunes del motor de conversaciones.
///
/// - `IllegalState`: operación inválida para el estado actual del executor.
/// - `Listener`: error originado dentro de un listener del ciclo de vida.
/// - `Execution`: error señalado por la aplicación durante un request.
/// - `Other`: cualquier otro error.
#[derive(Error, Debug)]
pub enum FlowError {
    /// Operación inválida (por ejemplo, pause sin conversación activa).
    #[error("Estado ilegal: {0}")]
    IllegalState(String),
    /// Error propagado desde un `FlowExecutionListener`.
    #[error("Error de listener: {0}")]
    Listener(String),
    /// Error de ejecución levantado por la aplicación durante el request.
    #[error("Error de ejecución: {0}")]
    Execution(String),
    /// Otro tipo de error.
    #[error("Otro: {0}")]
    Other(String),
}
/// Alias de resultado usado por las APIs del crate.
pub type Result<T> = std::result::Result<T, FlowError>;
