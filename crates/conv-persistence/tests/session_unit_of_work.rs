use conv_persistence::{registry, visitor_count, PersistenceError, Persistable, SessionFactory, Visitor};
use std::sync::Arc;

fn factory(db: &str) -> SessionFactory {
  SessionFactory::new(&format!("file:{}?mode=memory&cache=shared", db)).expect("factory")
}

#[test]
fn saves_are_buffered_until_commit() {
  let f = factory("uow_buffer");
  let session = f.open_session();

  session.save(Visitor::new("ana")).expect("save 1");
  session.save(Visitor::new("benito")).expect("save 2");
  assert_eq!(session.pending_count(), 2);
  assert_eq!(visitor_count(&f).expect("count"), 0, "nada durable antes del flush");

  session.flush_and_commit().expect("commit");
  assert_eq!(visitor_count(&f).expect("count"), 2);
  assert!(session.is_closed());

  // una sesión confirmada no admite más operaciones
  match session.save(Visitor::new("carla")) {
    Err(PersistenceError::SessionClosed(_)) => {}
    other => panic!("expected SessionClosed, got {:?}", other),
  }
  match session.flush_and_commit() {
    Err(PersistenceError::SessionClosed(_)) => {}
    other => panic!("expected SessionClosed, got {:?}", other),
  }
}

#[test]
fn discard_drops_pending_work() {
  let f = factory("uow_discard");
  let session = f.open_session();
  session.save(Visitor::new("ana")).expect("save");
  assert_eq!(session.pending_count(), 1);

  session.discard();
  assert_eq!(session.pending_count(), 0);
  assert!(session.is_closed());
  assert_eq!(visitor_count(&f).expect("count"), 0);
}

#[test]
fn with_connection_reads_live_rows() {
  let f = factory("uow_native");
  let seed = Visitor::new("seed");
  f.with_connection(|c| seed.persist(c)).expect("seed");

  let session = f.open_session();
  let count = session.with_connection(|c| {
                       use conv_persistence::schema::visitors::dsl as v_dsl;
                       use diesel::prelude::*;
                       v_dsl::visitors.count().get_result::<i64>(c)
                     })
                     .expect("count nativo");
  assert_eq!(count, 1);
}

#[test]
fn registry_keys_factories_independently() {
  let f1 = factory("uow_reg_a");
  let f2 = factory("uow_reg_b");
  let s1 = f1.open_session();

  registry::bind_session(&f1, s1.clone());
  assert!(registry::is_bound(&f1));
  assert!(!registry::is_bound(&f2), "otra factory no debe ver el lease");

  let s2 = f2.open_session();
  registry::bind_session(&f2, s2);
  assert!(registry::is_bound(&f2));

  let unbound = registry::unbind_session(&f1).expect("unbind");
  assert!(Arc::ptr_eq(&s1, &unbound));
  assert!(registry::unbind_session(&f1).is_none(), "segundo unbind es no-op");
  assert!(registry::is_bound(&f2), "el lease de la otra factory sigue");
  let _ = registry::unbind_session(&f2);
}
