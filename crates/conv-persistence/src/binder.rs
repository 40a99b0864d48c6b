// Archivo: binder.rs
// Propósito: `PersistenceContextListener`, el listener que liga una
// sesión de persistencia al ciclo de vida de una conversación.
//
// Reglas del ciclo de vida:
// - starting: si la definición declara `persistenceContext`, se crea la
//   sesión, se guarda en el scope de la conversación y se liga al hilo.
// - paused/resuming: el lease por hilo se suelta y se retoma con la
//   misma instancia guardada en el scope.
// - ended: se desliga siempre; se confirma sólo si el end state lleva
//   `commit = true`, si no se descarta.
// - exception: se desliga y descarta lo no confirmado, si hay algo.
use crate::errors::PersistenceError;
use crate::factory::SessionFactory;
use crate::registry;
use crate::session::PersistenceSession;
use conversation::context::RequestContext;
use conversation::errors::{FlowError, Result};
use conversation::listener::FlowExecutionListener;
use conversation::session::FlowSession;
use serde_json::Value as JsonValue;
use std::sync::Arc;

/// Clave del scope y atributo de definición que marca una conversación
/// como contexto de persistencia.
pub const PERSISTENCE_CONTEXT_ATTRIBUTE: &str = "persistenceContext";
/// Atributo del end state que pide confirmar los cambios al terminar.
pub const COMMIT_ATTRIBUTE: &str = "commit";

/// Listener que administra una sesión de persistencia con vida de
/// conversación.
///
/// Toda conversación cuya definición no declare `persistenceContext` es
/// ignorada: cada callback degrada a no-op sin fallar.
pub struct PersistenceContextListener {
  factory: SessionFactory,
}

impl PersistenceContextListener {
  /// Crea el listener sobre la fábrica de sesiones dada.
  pub fn new(factory: SessionFactory) -> Self {
    Self { factory }
  }

  fn is_persistence_context(&self, conversation: &FlowSession) -> bool {
    conversation.definition().attributes().get_bool(PERSISTENCE_CONTEXT_ATTRIBUTE)
  }

  fn scoped_session(conversation: &FlowSession) -> Option<Arc<PersistenceSession>> {
    conversation.scope().get::<PersistenceSession>(PERSISTENCE_CONTEXT_ATTRIBUTE)
  }

  fn listener_err(&self, what: &str, e: PersistenceError) -> FlowError {
    FlowError::Listener(format!("{}: {}", what, e))
  }
}

impl FlowExecutionListener for PersistenceContextListener {
  fn session_starting(&self,
                      _context: &RequestContext,
                      conversation: &FlowSession,
                      _input: Option<&JsonValue>)
                      -> Result<()> {
    if !self.is_persistence_context(conversation) {
      return Ok(());
    }
    let session = self.factory.open_session();
    conversation.scope().put(PERSISTENCE_CONTEXT_ATTRIBUTE, session.clone());
    registry::bind_session(&self.factory, session);
    log::debug!("sesión de persistencia creada para la conversación {}", conversation.id());
    Ok(())
  }

  fn paused(&self, _context: &RequestContext) -> Result<()> {
    // soltar el lease por hilo; el scope conserva la sesión intacta
    let _ = registry::unbind_session(&self.factory);
    Ok(())
  }

  fn resuming(&self, context: &RequestContext) -> Result<()> {
    if let Some(conversation) = context.active_session() {
      if let Some(session) = Self::scoped_session(&conversation) {
        registry::bind_session(&self.factory, session);
      }
    }
    Ok(())
  }

  fn session_ending(&self,
                    _context: &RequestContext,
                    conversation: &FlowSession,
                    _outcome: &str,
                    _output: Option<&JsonValue>)
                    -> Result<()> {
    // punto de extensión pre-commit: la decisión se toma en session_ended
    if let Some(session) = Self::scoped_session(conversation) {
      log::debug!("conversación {} por terminar: {} operaciones pendientes",
                  conversation.id(),
                  session.pending_count());
    }
    Ok(())
  }

  fn session_ended(&self,
                   _context: &RequestContext,
                   conversation: &FlowSession,
                   outcome: &str,
                   _output: Option<&JsonValue>)
                   -> Result<()> {
    if !self.is_persistence_context(conversation) {
      return Ok(());
    }
    // soltar el lease antes de decidir commit: si el commit falla, el
    // hilo ya quedó limpio
    let _ = registry::unbind_session(&self.factory);
    let session = match conversation.scope().remove::<PersistenceSession>(PERSISTENCE_CONTEXT_ATTRIBUTE) {
      Some(s) => s,
      None => return Ok(()),
    };
    let commit = conversation.current_state()
                             .map(|s| s.attributes().get_bool(COMMIT_ATTRIBUTE))
                             .unwrap_or(false);
    if commit {
      session.flush_and_commit()
             .map_err(|e| self.listener_err("commit al terminar la conversación", e))?;
      log::debug!("conversación {} confirmada con outcome {}", conversation.id(), outcome);
    } else {
      session.discard();
      log::debug!("conversación {} descartada con outcome {}", conversation.id(), outcome);
    }
    Ok(())
  }

  fn exception_thrown(&self, context: &RequestContext, _error: &FlowError) -> Result<()> {
    if let Some(session) = registry::unbind_session(&self.factory) {
      session.discard();
      if let Some(conversation) = context.active_session() {
        let _ = conversation.scope().remove::<PersistenceSession>(PERSISTENCE_CONTEXT_ATTRIBUTE);
      }
    }
    Ok(())
  }
}
