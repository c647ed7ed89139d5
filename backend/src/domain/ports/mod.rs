//! Domain ports and supporting types for the hexagonal boundary.
//!
//! `CampRepository` is the driven port implemented by the stores in
//! `crate::outbound`; the `*Query` and `*Command` traits are driving ports
//! consumed by the HTTP adapter.

mod macros;
pub(crate) use macros::define_port_error;

mod camp_repository;
mod camps_command;
mod camps_query;
mod talks_command;
mod talks_query;

#[cfg(test)]
pub use camp_repository::MockCampRepository;
pub use camp_repository::{CampRepository, CampRepositoryError};
#[cfg(test)]
pub use camps_command::MockCampsCommand;
pub use camps_command::{
    CampsCommand, Created, CreateCampRequest, DeleteCampRequest, UpdateCampRequest,
};
#[cfg(test)]
pub use camps_query::MockCampsQuery;
pub use camps_query::{CampsQuery, GetCampRequest, ListCampsRequest, SearchCampsRequest};
#[cfg(test)]
pub use talks_command::MockTalksCommand;
pub use talks_command::{CreateTalkRequest, DeleteTalkRequest, TalksCommand, UpdateTalkRequest};
#[cfg(test)]
pub use talks_query::MockTalksQuery;
pub use talks_query::{GetTalkRequest, ListTalksRequest, TalksQuery};
