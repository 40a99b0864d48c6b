// Archivo: session.rs
// Propósito: `FlowSession`, la conversación en ejecución: definición,
// estado actual y scope propio.
use crate::definition::FlowDefinition;
use crate::scope::Scope;
use crate::state::State;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Una conversación (flow session) en curso.
///
/// Mantiene el scope que sobrevive entre requests y el estado actual.
/// El estado se fija desde fuera (por el executor al terminar, o por la
/// aplicación en transiciones intermedias).
pub struct FlowSession {
    id: Uuid,
    definition: Arc<FlowDefinition>,
    state: Mutex<Option<Arc<State>>>,
    scope: Scope,
    started_at: DateTime<Utc>,
}

impl FlowSession {
    /// Crea una conversación nueva a partir de su definición.
    pub fn new(definition: Arc<FlowDefinition>) -> Self {
        Self { id: Uuid::new_v4(),
               definition,
               state: Mutex::new(None),
               scope: Scope::new(),
               started_at: Utc::now() }
    }

    /// Identificador único de la conversación.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Definición declarativa de la conversación.
    pub fn definition(&self) -> &FlowDefinition {
        &self.definition
    }

    /// Scope con vida de conversación.
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Fija el estado actual (por ejemplo, el end state al terminar).
    pub fn set_state(&self, state: Arc<State>) {
        *self.state.lock().unwrap_or_else(|e| e.into_inner()) = Some(state);
    }

    /// Estado actual, si la conversación ya transitó a alguno.
    pub fn current_state(&self) -> Option<Arc<State>> {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Instante de inicio de la conversación.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}
