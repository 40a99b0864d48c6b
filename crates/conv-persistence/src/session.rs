// Archivo: session.rs
// Propósito: `PersistenceSession`, la unidad de trabajo con vida de
// conversación, y el soporte de colecciones de carga perezosa.
//
// La sesión no toca la base de datos al guardar: acumula operaciones
// pendientes y recién las ejecuta, dentro de una única transacción, en
// `flush_and_commit`. `discard` las abandona sin efecto durable.
use crate::errors::PersistenceError;
use crate::factory::{DbConn, DbPool};
use diesel::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Operación de escritura diferida hasta el flush.
pub type PendingOp = Box<dyn FnOnce(&mut DbConn) -> QueryResult<usize> + Send>;

/// Entidad que sabe insertarse en la base de datos.
pub trait Persistable: Send + 'static {
  /// Inserta la entidad usando la conexión dada.
  fn persist(&self, conn: &mut DbConn) -> QueryResult<usize>;
}

/// Entidad que sabe cargarse por clave.
pub trait Loadable: Sized {
  type Key: ?Sized;
  /// Carga la entidad, `None` si no existe.
  fn load(conn: &mut DbConn, key: &Self::Key) -> QueryResult<Option<Self>>;
}

/// Colección de carga perezosa.
///
/// Una entidad recuperada arranca con sus colecciones en
/// `Uninitialized`; sólo una llamada explícita de inicialización las
/// materializa (también después de una pausa de la conversación).
#[derive(Debug, Default)]
pub enum Lazy<T> {
  #[default]
  Uninitialized,
  Loaded(Vec<T>),
}

impl<T> Lazy<T> {
  /// Indica si la colección ya fue materializada.
  pub fn is_initialized(&self) -> bool {
    matches!(self, Lazy::Loaded(_))
  }

  /// Elementos cargados, `None` si aún no se inicializó.
  pub fn loaded(&self) -> Option<&[T]> {
    match self {
      Lazy::Loaded(items) => Some(items),
      Lazy::Uninitialized => None,
    }
  }

  /// Materializa la colección con los elementos dados.
  pub fn set_loaded(&mut self, items: Vec<T>) {
    *self = Lazy::Loaded(items);
  }
}

/// Unidad de trabajo ligada a una conversación.
///
/// Las lecturas (`get`, `with_connection`) van directo a la base; las
/// escrituras (`save`) quedan pendientes hasta `flush_and_commit`.
/// Después de confirmar o descartar, la sesión queda cerrada y rechaza
/// nuevas operaciones de escritura.
pub struct PersistenceSession {
  pool: Arc<DbPool>,
  pending: Mutex<Vec<PendingOp>>,
  closed: AtomicBool,
}

impl PersistenceSession {
  pub(crate) fn new(pool: Arc<DbPool>) -> Self {
    Self { pool,
           pending: Mutex::new(Vec::new()),
           closed: AtomicBool::new(false) }
  }

  /// Encola la inserción de la entidad. No toca la base de datos hasta
  /// el flush.
  pub fn save<E: Persistable>(&self, entity: E) -> Result<(), PersistenceError> {
    self.ensure_open("save")?;
    self.pending
        .lock()
        .unwrap_or_else(|e| e.into_inner())
        .push(Box::new(move |conn| entity.persist(conn)));
    Ok(())
  }

  /// Cantidad de operaciones pendientes de flush.
  pub fn pending_count(&self) -> usize {
    self.pending.lock().unwrap_or_else(|e| e.into_inner()).len()
  }

  /// Carga una entidad por clave directo desde la base de datos.
  pub fn get<E: Loadable>(&self, key: &E::Key) -> Result<Option<E>, PersistenceError> {
    let mut conn = self.pool.get()?;
    E::load(&mut conn, key).map_err(PersistenceError::from)
  }

  /// Ejecuta un closure con la conexión nativa de la sesión.
  pub fn with_connection<R>(&self, f: impl FnOnce(&mut DbConn) -> QueryResult<R>) -> Result<R, PersistenceError> {
    let mut conn = self.pool.get()?;
    f(&mut conn).map_err(PersistenceError::from)
  }

  /// Ejecuta todas las operaciones pendientes dentro de una única
  /// transacción y cierra la sesión. Un fallo de commit se propaga al
  /// caller; la sesión queda cerrada igualmente y no es reutilizable.
  pub fn flush_and_commit(&self) -> Result<(), PersistenceError> {
    self.ensure_open("flush_and_commit")?;
    self.closed.store(true, Ordering::SeqCst);
    let ops: Vec<PendingOp> = std::mem::take(&mut *self.pending.lock().unwrap_or_else(|e| e.into_inner()));
    let mut pooled = self.pool.get()?;
    let conn: &mut DbConn = &mut pooled;
    conn.transaction::<_, diesel::result::Error, _>(|c| {
          for op in ops {
            op(c)?;
          }
          Ok(())
        })?;
    log::debug!("sesión confirmada");
    Ok(())
  }

  /// Abandona las operaciones pendientes sin tocar la base de datos y
  /// cierra la sesión.
  pub fn discard(&self) {
    self.pending.lock().unwrap_or_else(|e| e.into_inner()).clear();
    self.closed.store(true, Ordering::SeqCst);
    log::debug!("sesión descartada");
  }

  /// Indica si la sesión ya fue confirmada o descartada.
  pub fn is_closed(&self) -> bool {
    self.closed.load(Ordering::SeqCst)
  }

  fn ensure_open(&self, op: &str) -> Result<(), PersistenceError> {
    if self.is_closed() {
      return Err(PersistenceError::SessionClosed(format!("{} sobre una sesión cerrada", op)));
    }
    Ok(())
  }
}
