// Archivo: state.rs
// Propósito: estados de una conversación. Sólo distinguimos estados
// normales y estados terminales (end states) con atributos propios.
use crate::attributes::AttributeMap;

/// Estado de una conversación.
///
/// Un end state finaliza la conversación con un outcome y puede llevar
/// atributos que los listeners consultan al terminar; el binder de
/// persistencia lee `commit` para decidir entre confirmar o descartar.
#[derive(Debug)]
pub struct State {
    id: String,
    end: bool,
    attributes: AttributeMap,
}

impl State {
    /// Crea un estado normal (no terminal).
    pub fn new(id: &str) -> Self {
        Self { id: id.to_string(), end: false, attributes: AttributeMap::new() }
    }

    /// Crea un estado terminal.
    pub fn end_state(id: &str) -> Self {
        Self { id: id.to_string(), end: true, attributes: AttributeMap::new() }
    }

    /// Identificador del estado.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Indica si el estado es terminal.
    pub fn is_end_state(&self) -> bool {
        self.end
    }

    /// Atributos del estado.
    pub fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }
}
