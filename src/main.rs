use conv_persistence::{registry, visitor_count, PersistenceContextListener, Visitor, COMMIT_ATTRIBUTE,
                       PERSISTENCE_CONTEXT_ATTRIBUTE};
use conversation::{FlowDefinition, FlowExecutor, RequestContext, State};
use serde_json::json;
use std::error::Error;
use std::sync::Arc;

/// Demo de una conversación con contexto de persistencia: dos requests
/// que registran una visita cada uno y un end state con `commit = true`
/// que confirma ambas al terminar.
fn main() -> Result<(), Box<dyn Error>> {
    // Inicializar la factory (aplica migraciones embebidas si procede)
    let factory = conv_persistence::new_from_env().map_err(|e| Box::new(e) as Box<dyn Error>)?;
    let listener = Arc::new(PersistenceContextListener::new(factory.clone()));
    let executor = FlowExecutor::new(vec![listener]);
    let context = RequestContext::new();

    let definition = Arc::new(FlowDefinition::new("registro-visitas"));
    definition.attributes().put(PERSISTENCE_CONTEXT_ATTRIBUTE, json!(true));

    println!("== Demo: conversación con contexto de persistencia ==");
    println!("visitas al inicio: {}", visitor_count(&factory)?);

    // request 1: iniciar la conversación y registrar una visita
    executor.start(&context, definition, None)?;
    let session = registry::bound_session(&factory).ok_or("sin sesión ligada al hilo")?;
    session.save(Visitor::new("Ana"))?;
    println!("request 1: visita de Ana en buffer ({} pendiente)", session.pending_count());
    executor.pause(&context)?;
    println!("conversación en pausa; visitas durables: {}", visitor_count(&factory)?);

    // request 2: retomar, registrar otra visita y terminar con commit
    executor.resume(&context)?;
    let session = registry::bound_session(&factory).ok_or("sin sesión ligada al hilo")?;
    session.save(Visitor::new("Benito"))?;
    println!("request 2: visita de Benito en buffer ({} pendientes)", session.pending_count());

    let end = Arc::new(State::end_state("success"));
    end.attributes().put(COMMIT_ATTRIBUTE, json!(true));
    executor.end(&context, end, "success", None)?;

    println!("conversación terminada; visitas durables: {}", visitor_count(&factory)?);
    Ok(())
}
