//! Crate `conversation` — motor mínimo de conversaciones multi-request
//!
//! Este crate define los tipos de una conversación (flow session):
//! definición con atributos declarativos, estados terminales, scope con
//! vida de conversación y contexto de request. Expone el contrato
//! `FlowExecutionListener` para observadores del ciclo de vida y un
//! `FlowExecutor` que conduce start/pause/resume/end/error notificando
//! a los listeners en orden.
//!
//! Diseño resumido:
//! - Un request a la vez por conversación: los callbacks corren en el
//!   hilo del request actual.
//! - El scope de la conversación es el dueño de larga vida de sus
//!   recursos; los listeners deciden qué tomar y soltar por request.
//! - Los listeners degradan a no-op cuando el evento no les concierne.
//!
//! Ejemplo rápido:
//! ```rust
//! use conversation::{FlowDefinition, FlowExecutor, RequestContext};
//! use std::sync::Arc;
//! let executor = FlowExecutor::new(vec![]);
//! let context = RequestContext::new();
//! let def = Arc::new(FlowDefinition::new("demo"));
//! let _conv = executor.start(&context, def, None).unwrap();
//! ```
pub mod attributes;
pub mod context;
pub mod definition;
pub mod errors;
pub mod executor;
pub mod listener;
pub mod scope;
pub mod session;
pub mod state;
pub mod stubs;

pub use attributes::*;
pub use context::*;
pub use definition::*;
pub use errors::*;
pub use executor::*;
pub use listener::*;
pub use scope::*;
pub use session::*;
pub use state::*;
pub use stubs::*;
