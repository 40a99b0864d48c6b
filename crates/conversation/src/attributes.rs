// Archivo: attributes.rs
// Propósito: mapa de atributos compartido por definiciones y estados.
//
// Los atributos son valores JSON (`serde_json::Value`) indexados por
// nombre. Las definiciones lo usan para flags como `persistenceContext`
// y los estados terminales para flags como `commit`.
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::sync::Mutex;

/// Mapa de atributos con mutabilidad interior.
///
/// Se comparte por referencia desde `FlowDefinition` y `State`, por lo
/// que `put` acepta `&self`. Un mutex envenenado se recupera con
/// `into_inner` (los valores son JSON planos, no hay invariantes rotos).
#[derive(Debug, Default)]
pub struct AttributeMap {
    values: Mutex<HashMap<String, JsonValue>>,
}

impl AttributeMap {
    /// Crea un mapa vacío.
    pub fn new() -> Self {
        Self { values: Mutex::new(HashMap::new()) }
    }

    /// Inserta o reemplaza un atributo.
    pub fn put(&self, key: &str, value: JsonValue) {
        self.values
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), value);
    }

    /// Devuelve una copia del valor si existe.
    pub fn get(&self, key: &str) -> Option<JsonValue> {
        self.values
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    /// Interpreta un atributo como booleano. Acepta tanto `true` como el
    /// string "true"; un atributo ausente o de otro tipo es `false`.
    pub fn get_bool(&self, key: &str) -> bool {
        match self.get(key) {
            Some(JsonValue::Bool(b)) => b,
            Some(JsonValue::String(s)) => s == "true",
            _ => false,
        }
    }

    /// Verifica si el atributo existe.
    pub fn contains(&self, key: &str) -> bool {
        self.values
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains_key(key)
    }
}
