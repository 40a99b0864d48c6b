// Archivo: context.rs
// Propósito: `RequestContext`, el contexto de un request en proceso.
//
// Modela el hilo que atiende un request: expone cuál es la conversación
// activa en ese momento. Entre requests no hay conversación activa.
use crate::session::FlowSession;
use std::sync::{Arc, Mutex};

/// Contexto del request actual.
///
/// Los listeners lo reciben en cada callback para localizar la
/// conversación activa (y, a través de ella, su scope).
#[derive(Default)]
pub struct RequestContext {
    active: Mutex<Option<Arc<FlowSession>>>,
}

impl RequestContext {
    /// Crea un contexto sin conversación activa.
    pub fn new() -> Self {
        Self { active: Mutex::new(None) }
    }

    /// Marca la conversación como activa para este request.
    pub fn set_active_session(&self, session: Arc<FlowSession>) {
        *self.active.lock().unwrap_or_else(|e| e.into_inner()) = Some(session);
    }

    /// Limpia la conversación activa (fin del request o de la conversación).
    pub fn clear_active_session(&self) {
        *self.active.lock().unwrap_or_else(|e| e.into_inner()) = None;
    }

    /// Conversación activa, si la hay.
    pub fn active_session(&self) -> Option<Arc<FlowSession>> {
        self.active.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}
