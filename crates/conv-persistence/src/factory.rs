// Archivo: factory.rs
// Propósito: `SessionFactory`, el proveedor de sesiones de persistencia.
//
// Envuelve un pool Diesel/r2d2 y una identidad propia (uuid) que sirve
// de clave en el registro de recursos por hilo. Aplica las migraciones
// embebidas al construirse.
use crate::errors::PersistenceError;
use crate::session::PersistenceSession;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::sync::Arc;
use uuid::Uuid;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

#[cfg(feature = "pg")]
pub type DbConn = diesel::pg::PgConnection;
#[cfg(not(feature = "pg"))]
pub type DbConn = diesel::sqlite::SqliteConnection;
pub type DbPool = Pool<ConnectionManager<DbConn>>;
pub type DbPooledConn = PooledConnection<ConnectionManager<DbConn>>;

/// Fábrica de sesiones de persistencia sobre un pool Diesel/r2d2.
///
/// La identidad de la fábrica (`id`) es la clave con la que sus
/// sesiones se ligan al registro por hilo: dos fábricas distintas no
/// interfieren aunque compartan hilo.
#[derive(Clone)]
pub struct SessionFactory {
  id: Uuid,
  pool: Arc<DbPool>,
}

impl SessionFactory {
  /// Crea la fábrica, abre el pool (máx. 4 conexiones) y ejecuta las
  /// migraciones embebidas.
  pub fn new(database_url: &str) -> Result<Self, PersistenceError> {
    let manager = ConnectionManager::<DbConn>::new(database_url);
    let pool = Pool::builder().max_size(4)
                              .build(manager)?;
    let factory = SessionFactory { id: Uuid::new_v4(), pool: Arc::new(pool) };
    let mut conn = factory.pool.get()?;
    #[cfg(not(feature = "pg"))]
    {
      let _ = diesel::sql_query("PRAGMA journal_mode = WAL;").execute(&mut conn);
      let _ = diesel::sql_query("PRAGMA busy_timeout = 5000;").execute(&mut conn);
    }
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| PersistenceError::Migration(e.to_string()))?;
    log::debug!("session factory {} lista", factory.id);
    Ok(factory)
  }

  /// Identidad de la fábrica (clave del registro por hilo).
  pub fn id(&self) -> Uuid {
    self.id
  }

  /// Abre una nueva sesión (unidad de trabajo) sobre el pool.
  pub fn open_session(&self) -> Arc<PersistenceSession> {
    Arc::new(PersistenceSession::new(self.pool.clone()))
  }

  /// Ejecuta un closure con una conexión del pool. Útil para seeds,
  /// consultas de verificación y carga perezosa.
  pub fn with_connection<R>(&self, f: impl FnOnce(&mut DbConn) -> QueryResult<R>) -> Result<R, PersistenceError> {
    let mut conn = self.pool.get()?;
    f(&mut conn).map_err(PersistenceError::from)
  }
}

/// Crear la fábrica desde variables de entorno (o default sqlite
/// in-memory cuando no hay URL configurada).
pub fn new_from_env() -> Result<SessionFactory, PersistenceError> {
  dotenvy::dotenv().ok();
  if cfg!(feature = "pg") {
    let url = std::env::var("CONV_DB_URL").or_else(|_| std::env::var("DATABASE_URL"))
                                          .map_err(|_| PersistenceError::Config("CONV_DB_URL / DATABASE_URL not set".into()))?;
    let l = url.to_lowercase();
    if !(l.starts_with("postgres") || l.starts_with("postgresql://") || url.contains('@')) {
      return Err(PersistenceError::Config("CONV_DB_URL / DATABASE_URL does not look like Postgres URL".into()));
    }
    SessionFactory::new(&url)
  } else {
    let url = std::env::var("CONV_DB_URL").or_else(|_| std::env::var("DATABASE_URL"))
                                          .unwrap_or_else(|_| "file:convdb?mode=memory&cache=shared".into());
    SessionFactory::new(&url)
  }
}
