// Archivo: definition.rs
// Propósito: definir `FlowDefinition`, la descripción estática de una
// conversación (id + atributos declarativos).
use crate::attributes::AttributeMap;

/// Definición de una conversación (flow).
///
/// Declara los atributos que condicionan el comportamiento de los
/// listeners; por ejemplo, `persistenceContext = true` indica que la
/// conversación posee una sesión de persistencia durante toda su vida.
#[derive(Debug)]
pub struct FlowDefinition {
    id: String,
    attributes: AttributeMap,
}

impl FlowDefinition {
    /// Crea una definición con el id dado y sin atributos.
    pub fn new(id: &str) -> Self {
        Self { id: id.to_string(), attributes: AttributeMap::new() }
    }

    /// Identificador de la definición.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Atributos declarativos de la definición.
    pub fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }
}
