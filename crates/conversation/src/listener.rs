// Archivo: listener.rs
// Propósito: definir el trait `FlowExecutionListener`, el contrato que
// reciben los observadores del ciclo de vida de una conversación.
use crate::context::RequestContext;
use crate::errors::{FlowError, Result};
use crate::session::FlowSession;
use serde_json::Value as JsonValue;

/// Observador del ciclo de vida de conversaciones.
///
/// Todos los métodos tienen implementación por defecto no-op, de modo
/// que un listener sólo implementa los eventos que le interesan. Los
/// callbacks se invocan en el hilo del request; entre `paused` y
/// `resuming` la conversación no tiene request asociado.
///
/// Contrato de fallos: un listener no debe fallar cuando se lo invoca
/// sobre una conversación que no le concierne; en ese caso degrada a
/// no-op y devuelve `Ok(())`.
pub trait FlowExecutionListener: Send + Sync {
    /// La conversación está por iniciarse. Se invoca antes de que el
    /// contexto la marque como activa.
    fn session_starting(&self,
                        _context: &RequestContext,
                        _conversation: &FlowSession,
                        _input: Option<&JsonValue>)
                        -> Result<()> {
        Ok(())
    }

    /// El request actual terminó y la conversación queda en pausa.
    fn paused(&self, _context: &RequestContext) -> Result<()> {
        Ok(())
    }

    /// Un nuevo request retoma la conversación activa del contexto.
    fn resuming(&self, _context: &RequestContext) -> Result<()> {
        Ok(())
    }

    /// La conversación está terminando: el estado terminal ya está
    /// fijado pero la decisión de commit/descarte aún no se tomó.
    /// Punto de extensión pre-commit.
    fn session_ending(&self,
                      _context: &RequestContext,
                      _conversation: &FlowSession,
                      _outcome: &str,
                      _output: Option<&JsonValue>)
                      -> Result<()> {
        Ok(())
    }

    /// La conversación terminó. Aquí se decide el destino de los
    /// recursos con vida de conversación (confirmar o descartar).
    fn session_ended(&self,
                     _context: &RequestContext,
                     _conversation: &FlowSession,
                     _outcome: &str,
                     _output: Option<&JsonValue>)
                     -> Result<()> {
        Ok(())
    }

    /// La aplicación señaló un error durante el request. El listener
    /// debe liberar cualquier recurso por-hilo que tenga tomado.
    fn exception_thrown(&self, _context: &RequestContext, _error: &FlowError) -> Result<()> {
        Ok(())
    }
}
