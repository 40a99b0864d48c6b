// Archivo: entities.rs
// Propósito: entidades de demostración sobre el esquema del crate.
//
// `Visitor` lleva una colección perezosa de `Address` que sólo se
// materializa con una llamada explícita de inicialización.
use crate::errors::PersistenceError;
use crate::factory::{DbConn, SessionFactory};
use crate::schema::{addresses, visitors};
use crate::session::{Lazy, Loadable, Persistable, PersistenceSession};
use chrono::Utc;
use diesel::prelude::*;
use uuid::Uuid;

#[derive(Debug, Queryable, Insertable)]
#[diesel(table_name = visitors)]
struct VisitorRow {
  pub id: String,
  pub name: String,
  pub created_at_ts: i64,
}

#[derive(Debug, Queryable, Insertable)]
#[diesel(table_name = addresses)]
struct AddressRow {
  pub id: String,
  pub visitor_id: String,
  pub city: String,
}

/// Visita registrada durante una conversación.
#[derive(Debug)]
pub struct Visitor {
  pub id: Uuid,
  pub name: String,
  /// Direcciones asociadas; carga perezosa.
  pub addresses: Lazy<Address>,
}

/// Dirección asociada a una visita.
#[derive(Debug)]
pub struct Address {
  pub id: Uuid,
  pub visitor_id: Uuid,
  pub city: String,
}

impl Visitor {
  /// Crea una visita nueva con id generado.
  pub fn new(name: &str) -> Self {
    Self { id: Uuid::new_v4(),
           name: name.to_string(),
           addresses: Lazy::Uninitialized }
  }

  /// Materializa las direcciones de la visita usando la sesión dada.
  /// No-op si ya estaban inicializadas.
  pub fn initialize_addresses(&mut self, session: &PersistenceSession) -> Result<(), PersistenceError> {
    if self.addresses.is_initialized() {
      return Ok(());
    }
    let owner = self.id.to_string();
    let rows = session.with_connection(|conn| {
                        use crate::schema::addresses::dsl as a_dsl;
                        a_dsl::addresses.filter(a_dsl::visitor_id.eq(&owner)).load::<AddressRow>(conn)
                      })?;
    let items = rows.into_iter()
                    .map(|r| Address { id: Uuid::parse_str(&r.id).unwrap_or_default(),
                                       visitor_id: self.id,
                                       city: r.city })
                    .collect();
    self.addresses.set_loaded(items);
    Ok(())
  }
}

impl Address {
  /// Crea una dirección nueva para la visita dada.
  pub fn new(visitor_id: Uuid, city: &str) -> Self {
    Self { id: Uuid::new_v4(), visitor_id, city: city.to_string() }
  }
}

impl Persistable for Visitor {
  fn persist(&self, conn: &mut DbConn) -> QueryResult<usize> {
    let row = VisitorRow { id: self.id.to_string(),
                           name: self.name.clone(),
                           created_at_ts: Utc::now().timestamp() };
    diesel::insert_into(visitors::table).values(&row).execute(conn)
  }
}

impl Loadable for Visitor {
  type Key = Uuid;

  fn load(conn: &mut DbConn, key: &Uuid) -> QueryResult<Option<Self>> {
    use crate::schema::visitors::dsl as v_dsl;
    let opt = v_dsl::visitors.filter(v_dsl::id.eq(key.to_string()))
                             .first::<VisitorRow>(conn)
                             .optional()?;
    Ok(opt.map(|r| Visitor { id: Uuid::parse_str(&r.id).unwrap_or(*key),
                             name: r.name,
                             addresses: Lazy::Uninitialized }))
  }
}

impl Persistable for Address {
  fn persist(&self, conn: &mut DbConn) -> QueryResult<usize> {
    let row = AddressRow { id: self.id.to_string(),
                           visitor_id: self.visitor_id.to_string(),
                           city: self.city.clone() };
    diesel::insert_into(addresses::table).values(&row).execute(conn)
  }
}

/// Cantidad de filas en `visitors`. Consulta de verificación usada por
/// el demo y las pruebas.
pub fn visitor_count(factory: &SessionFactory) -> Result<i64, PersistenceError> {
  use crate::schema::visitors::dsl as v_dsl;
  factory.with_connection(|conn| v_dsl::visitors.count().get_result(conn))
}
