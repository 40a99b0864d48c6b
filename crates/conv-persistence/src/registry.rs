// Archivo: registry.rs
// Propósito: registro de recursos transaccionales por hilo.
//
// El registro es un lease transitorio por request: la sesión se liga
// al hilo mientras se procesa un request y se desliga al pausar, de
// modo que trabajo ajeno en el mismo hilo no la vea. El dueño de larga
// vida es el scope de la conversación, nunca este registro.
use crate::factory::SessionFactory;
use crate::session::PersistenceSession;
use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

thread_local! {
  static RESOURCES: RefCell<HashMap<Uuid, Arc<PersistenceSession>>> = RefCell::new(HashMap::new());
}

/// Liga la sesión al hilo actual bajo la identidad de la fábrica.
pub fn bind_session(factory: &SessionFactory, session: Arc<PersistenceSession>) {
  RESOURCES.with(|r| r.borrow_mut().insert(factory.id(), session));
  log::debug!("sesión ligada al hilo para factory {}", factory.id());
}

/// Desliga y devuelve la sesión del hilo actual. No-op seguro (devuelve
/// `None`) si no hay nada ligado.
pub fn unbind_session(factory: &SessionFactory) -> Option<Arc<PersistenceSession>> {
  let removed = RESOURCES.with(|r| r.borrow_mut().remove(&factory.id()));
  if removed.is_some() {
    log::debug!("sesión desligada del hilo para factory {}", factory.id());
  }
  removed
}

/// Sesión actualmente ligada al hilo para la fábrica dada, si la hay.
pub fn bound_session(factory: &SessionFactory) -> Option<Arc<PersistenceSession>> {
  RESOURCES.with(|r| r.borrow().get(&factory.id()).cloned())
}

/// Indica si hay una sesión ligada al hilo para la fábrica dada.
pub fn is_bound(factory: &SessionFactory) -> bool {
  RESOURCES.with(|r| r.borrow().contains_key(&factory.id()))
}
