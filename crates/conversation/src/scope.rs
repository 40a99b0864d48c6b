// Archivo: scope.rs
// Propósito: almacenamiento clave/valor con vida de conversación.
//
// El scope es el dueño de larga vida de los recursos de la conversación
// (sobrevive a los requests individuales). Guarda objetos vivos, no
// datos serializados, por eso los valores son `Arc<dyn Any>`.
use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Almacenamiento con alcance de conversación.
///
/// Los valores se insertan y recuperan tipados vía `Arc<T>`. Si el tipo
/// pedido no coincide con el almacenado, `get`/`remove` devuelven `None`.
#[derive(Default)]
pub struct Scope {
    values: Mutex<HashMap<String, Arc<dyn Any + Send + Sync>>>,
}

impl Scope {
    /// Crea un scope vacío.
    pub fn new() -> Self {
        Self { values: Mutex::new(HashMap::new()) }
    }

    /// Inserta o reemplaza un valor bajo la clave dada.
    pub fn put<T: Any + Send + Sync>(&self, key: &str, value: Arc<T>) {
        self.values
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), value);
    }

    /// Recupera el valor tipado si existe y el tipo coincide.
    pub fn get<T: Any + Send + Sync>(&self, key: &str) -> Option<Arc<T>> {
        self.values
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
            .and_then(|v| v.downcast::<T>().ok())
    }

    /// Elimina y devuelve el valor tipado. Si la clave existe pero el
    /// tipo no coincide, el valor se descarta igualmente.
    pub fn remove<T: Any + Send + Sync>(&self, key: &str) -> Option<Arc<T>> {
        self.values
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(key)
            .and_then(|v| v.downcast::<T>().ok())
    }

    /// Verifica si la clave existe.
    pub fn contains(&self, key: &str) -> bool {
        self.values
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains_key(key)
    }
}
