use conversation::errors::FlowError;
use conversation::stubs::RecordingListener;
use conversation::{FlowDefinition, FlowExecutor, RequestContext, State};
use serde_json::json;
use std::sync::Arc;

#[test]
fn lifecycle_callbacks_in_order() {
  let listener = Arc::new(RecordingListener::new());
  let executor = FlowExecutor::new(vec![listener.clone()]);
  let context = RequestContext::new();
  let def = Arc::new(FlowDefinition::new("booking"));

  let conv = executor.start(&context, def, Some(json!({"guest": "ana"}))).expect("start");
  assert!(context.active_session().is_some());
  assert_eq!(context.active_session().unwrap().id(), conv.id());

  executor.pause(&context).expect("pause");
  executor.resume(&context).expect("resume");

  let end = Arc::new(State::end_state("done"));
  executor.end(&context, end, "success", None).expect("end");
  // al terminar no queda conversación activa
  assert!(context.active_session().is_none());

  assert_eq!(listener.events(),
             vec!["session_starting", "paused", "resuming", "session_ending", "session_ended"]);
}

#[test]
fn end_sets_terminal_state_on_conversation() {
  let executor = FlowExecutor::new(vec![]);
  let context = RequestContext::new();
  let conv = executor.start(&context, Arc::new(FlowDefinition::new("f")), None).expect("start");
  assert!(conv.current_state().is_none());

  let end = Arc::new(State::end_state("success"));
  end.attributes().put("commit", json!(true));
  executor.end(&context, end, "success", None).expect("end");

  let state = conv.current_state().expect("terminal state");
  assert!(state.is_end_state());
  assert!(state.attributes().get_bool("commit"));
}

#[test]
fn pause_without_active_session_is_illegal() {
  let executor = FlowExecutor::new(vec![]);
  let context = RequestContext::new();
  match executor.pause(&context) {
    Err(FlowError::IllegalState(_)) => {}
    other => panic!("expected IllegalState, got {:?}", other),
  }
}

#[test]
fn end_with_non_end_state_is_illegal() {
  let executor = FlowExecutor::new(vec![]);
  let context = RequestContext::new();
  executor.start(&context, Arc::new(FlowDefinition::new("f")), None).expect("start");
  let not_end = Arc::new(State::new("view"));
  match executor.end(&context, not_end, "success", None) {
    Err(FlowError::IllegalState(_)) => {}
    other => panic!("expected IllegalState, got {:?}", other),
  }
  // la conversación sigue activa: el end no se consumó
  assert!(context.active_session().is_some());
}

#[test]
fn signal_error_reaches_listeners() {
  let listener = Arc::new(RecordingListener::new());
  let executor = FlowExecutor::new(vec![listener.clone()]);
  let context = RequestContext::new();
  executor.start(&context, Arc::new(FlowDefinition::new("f")), None).expect("start");

  let err = FlowError::Execution("fallo de aplicación".into());
  executor.signal_error(&context, &err).expect("signal");
  assert_eq!(listener.events(), vec!["session_starting", "exception_thrown"]);
}
