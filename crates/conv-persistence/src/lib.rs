//! Crate `conv-persistence` — proveedor de persistencia conversacional.
//!
//! Expone la fábrica de sesiones Diesel (`SessionFactory`), la unidad
//! de trabajo `PersistenceSession`, el registro de recursos por hilo y
//! el listener `PersistenceContextListener` que liga una sesión al
//! ciclo de vida de una conversación del crate `conversation`. El
//! backend por defecto es SQLite; la feature `pg` habilita Postgres.

mod binder;
mod entities;
mod errors;
mod factory;
pub mod registry;
pub mod schema;
mod session;

pub use binder::{PersistenceContextListener, COMMIT_ATTRIBUTE, PERSISTENCE_CONTEXT_ATTRIBUTE};
pub use entities::{visitor_count, Address, Visitor};
pub use errors::PersistenceError;
pub use factory::{new_from_env, DbConn, DbPool, DbPooledConn, SessionFactory, MIGRATIONS};
pub use session::{Lazy, Loadable, PendingOp, Persistable, PersistenceSession};
