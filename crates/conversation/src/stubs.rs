// Archivo: stubs.rs
// Propósito: implementaciones en memoria para pruebas y wiring rápido.
//
// Incluye un listener que registra los eventos recibidos, útil para
// verificar orden y cantidad de callbacks sin colaboradores reales.
use crate::context::RequestContext;
use crate::errors::{FlowError, Result};
use crate::listener::FlowExecutionListener;
use crate::session::FlowSession;
use serde_json::Value as JsonValue;
use std::sync::Mutex;

/// Listener que acumula los nombres de los eventos recibidos.
///
/// Pensado para pruebas locales: no es durable ni thread-aware más allá
/// del mutex interno.
#[derive(Default)]
pub struct RecordingListener {
    events: Mutex<Vec<String>>,
}

impl RecordingListener {
    /// Crea un listener sin eventos registrados.
    pub fn new() -> Self {
        Self { events: Mutex::new(Vec::new()) }
    }

    /// Copia de los eventos registrados hasta el momento.
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn record(&self, name: &str) {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(name.to_string());
    }
}

impl FlowExecutionListener for RecordingListener {
    fn session_starting(&self,
                        _context: &RequestContext,
                        _conversation: &FlowSession,
                        _input: Option<&JsonValue>)
                        -> Result<()> {
        self.record("session_starting");
        Ok(())
    }

    fn paused(&self, _context: &RequestContext) -> Result<()> {
        self.record("paused");
        Ok(())
    }

    fn resuming(&self, _context: &RequestContext) -> Result<()> {
        self.record("resuming");
        Ok(())
    }

    fn session_ending(&self,
                      _context: &RequestContext,
                      _conversation: &FlowSession,
                      _outcome: &str,
                      _output: Option<&JsonValue>)
                      -> Result<()> {
        self.record("session_ending");
        Ok(())
    }

    fn session_ended(&self,
                     _context: &RequestContext,
                     _conversation: &FlowSession,
                     _outcome: &str,
                     _output: Option<&JsonValue>)
                     -> Result<()> {
        self.record("session_ended");
        Ok(())
    }

    fn exception_thrown(&self, _context: &RequestContext, _error: &FlowError) -> Result<()> {
        self.record("exception_thrown");
        Ok(())
    }
}
