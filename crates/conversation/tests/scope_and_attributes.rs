use conversation::{AttributeMap, FlowDefinition, FlowSession, Scope};
use serde_json::json;
use std::sync::Arc;

#[test]
fn attribute_bool_coercion() {
  let attrs = AttributeMap::new();
  // ausente -> false
  assert!(!attrs.get_bool("persistenceContext"));
  // el flag puede venir como string "true" o como bool
  attrs.put("persistenceContext", json!("true"));
  assert!(attrs.get_bool("persistenceContext"));
  attrs.put("commit", json!(true));
  assert!(attrs.get_bool("commit"));
  attrs.put("commit", json!(false));
  assert!(!attrs.get_bool("commit"));
  // otros tipos no se interpretan como true
  attrs.put("commit", json!(1));
  assert!(!attrs.get_bool("commit"));
}

#[test]
fn scope_typed_put_get_remove() {
  let scope = Scope::new();
  assert!(!scope.contains("persistenceContext"));

  scope.put("persistenceContext", Arc::new(String::from("session-obj")));
  assert!(scope.contains("persistenceContext"));

  let got = scope.get::<String>("persistenceContext").expect("get");
  assert_eq!(*got, "session-obj");
  // pedir otro tipo devuelve None sin tocar el valor
  assert!(scope.get::<u64>("persistenceContext").is_none());
  assert!(scope.contains("persistenceContext"));

  let removed = scope.remove::<String>("persistenceContext").expect("remove");
  assert_eq!(*removed, "session-obj");
  assert!(!scope.contains("persistenceContext"));
}

#[test]
fn scope_preserves_identity() {
  let scope = Scope::new();
  let original = Arc::new(String::from("misma-instancia"));
  scope.put("k", original.clone());
  let got = scope.get::<String>("k").expect("get");
  assert!(Arc::ptr_eq(&original, &got), "debe ser la misma instancia");
}

#[test]
fn flow_session_state_and_scope() {
  let def = Arc::new(FlowDefinition::new("checkout"));
  def.attributes().put("persistenceContext", json!(true));
  let conv = FlowSession::new(def);

  assert!(conv.definition().attributes().get_bool("persistenceContext"));
  assert!(conv.current_state().is_none());
  conv.scope().put("n", Arc::new(7u32));
  assert_eq!(*conv.scope().get::<u32>("n").expect("n"), 7);
}
