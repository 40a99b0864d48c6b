// Archivo: executor.rs
// Propósito: implementar `FlowExecutor`, la capa que conduce el ciclo de
// vida de una conversación y notifica a los listeners registrados.
//
// El executor no ejecuta lógica de negocio ni grafos de transición: la
// aplicación decide cuándo pausar, retomar o terminar. El valor está en
// el orden garantizado de los callbacks.
use crate::context::RequestContext;
use crate::definition::FlowDefinition;
use crate::errors::{FlowError, Result};
use crate::listener::FlowExecutionListener;
use crate::session::FlowSession;
use crate::state::State;
use serde_json::Value as JsonValue;
use std::sync::Arc;

/// Conductor del ciclo de vida de conversaciones.
///
/// Mantiene la lista de listeners y los invoca en orden de registro en
/// cada evento. Modelo de un request a la vez: todas las operaciones se
/// ejecutan en el hilo del request actual.
pub struct FlowExecutor {
    listeners: Vec<Arc<dyn FlowExecutionListener>>,
}

impl FlowExecutor {
    /// Crea un executor con los listeners dados.
    pub fn new(listeners: Vec<Arc<dyn FlowExecutionListener>>) -> Self {
        Self { listeners }
    }

    /// Inicia una conversación: crea la `FlowSession`, notifica
    /// `session_starting` y recién después la marca activa en el
    /// contexto. Devuelve la conversación creada.
    pub fn start(&self,
                 context: &RequestContext,
                 definition: Arc<FlowDefinition>,
                 input: Option<JsonValue>)
                 -> Result<Arc<FlowSession>> {
        let conversation = Arc::new(FlowSession::new(definition));
        for l in &self.listeners {
            l.session_starting(context, &conversation, input.as_ref())?;
        }
        context.set_active_session(conversation.clone());
        Ok(conversation)
    }

    /// Pausa la conversación activa al final de un request.
    pub fn pause(&self, context: &RequestContext) -> Result<()> {
        self.require_active(context, "pause")?;
        for l in &self.listeners {
            l.paused(context)?;
        }
        Ok(())
    }

    /// Retoma la conversación activa al comienzo de un nuevo request.
    pub fn resume(&self, context: &RequestContext) -> Result<()> {
        self.require_active(context, "resume")?;
        for l in &self.listeners {
            l.resuming(context)?;
        }
        Ok(())
    }

    /// Termina la conversación activa con el end state y outcome dados.
    /// Fija el estado terminal, notifica `session_ending` y luego
    /// `session_ended` a todos los listeners, y limpia el contexto.
    pub fn end(&self,
               context: &RequestContext,
               end_state: Arc<State>,
               outcome: &str,
               output: Option<JsonValue>)
               -> Result<()> {
        let conversation = self.require_active(context, "end")?;
        if !end_state.is_end_state() {
            return Err(FlowError::IllegalState(format!("el estado {} no es terminal", end_state.id())));
        }
        conversation.set_state(end_state);
        for l in &self.listeners {
            l.session_ending(context, &conversation, outcome, output.as_ref())?;
        }
        for l in &self.listeners {
            l.session_ended(context, &conversation, outcome, output.as_ref())?;
        }
        context.clear_active_session();
        Ok(())
    }

    /// Propaga un error de la aplicación a los listeners para que
    /// liberen sus recursos por-hilo.
    pub fn signal_error(&self, context: &RequestContext, error: &FlowError) -> Result<()> {
        for l in &self.listeners {
            l.exception_thrown(context, error)?;
        }
        Ok(())
    }

    fn require_active(&self, context: &RequestContext, op: &str) -> Result<Arc<FlowSession>> {
        context.active_session()
               .ok_or_else(|| FlowError::IllegalState(format!("{} sin conversación activa", op)))
    }
}
