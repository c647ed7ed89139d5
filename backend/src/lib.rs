//! Camps API backend library.
//!
//! Hexagonal layout: [`domain`] holds entities, representations and the
//! camp and talk use-cases; [`inbound`] adapts HTTP onto the driving ports;
//! [`outbound`] provides the in-memory and PostgreSQL stores.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
