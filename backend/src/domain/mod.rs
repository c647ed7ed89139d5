//! Domain primitives, aggregates and use-cases.
//!
//! Purpose: define the camp/talk/speaker entities, their wire
//! representations and the mapping rules between them, plus the services
//! that implement the driving ports in [`ports`].
//!
//! Public surface:
//! - Camp, Location, Moniker, Talk, Speaker and their identifiers.
//! - CampModel, TalkModel, SpeakerModel with the [`Representation`] mapping.
//! - UnitOfWork and CommitReceipt for staged, atomic mutations.
//! - ResourceLocator for `Location` headers.
//! - Error and ErrorCode, the transport-agnostic failure envelope.
//! - CampService and TalkService.

pub mod camp;
pub mod camps_service;
pub mod error;
pub mod mapping;
pub mod ports;
pub mod representation;
pub mod resource_location;
pub mod speaker;
pub mod talk;
pub mod talks_service;
pub mod trace_id;
pub mod unit_of_work;
pub mod validation;

pub use self::camp::{Camp, Location, Moniker};
pub use self::camps_service::CampService;
pub use self::error::{Error, ErrorCode};
pub use self::mapping::Representation;
pub use self::representation::{CampModel, LocationModel, SpeakerModel, TalkModel};
pub use self::resource_location::{
    CampLocation, LocationError, ResourceLocation, ResourceLocator,
};
pub use self::speaker::{Speaker, SpeakerId};
pub use self::talk::{NewTalk, Talk, TalkDraft, TalkId};
pub use self::talks_service::TalkService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::unit_of_work::{Change, CommitReceipt, UnitOfWork};

