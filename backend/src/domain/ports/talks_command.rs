//! Driving port for talk mutations.

use async_trait::async_trait;

use crate::domain::{Error, TalkModel};

use super::Created;

/// Request to add a talk to a camp. The body must reference a speaker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTalkRequest {
    pub moniker: String,
    pub talk: TalkModel,
}

/// Request to merge a representation onto a talk identified by the body's
/// `talkId`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTalkRequest {
    pub moniker: String,
    pub talk: TalkModel,
}

/// Request to delete a talk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTalkRequest {
    pub moniker: String,
    pub talk_id: i32,
}

/// Driving port for talk writes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TalksCommand: Send + Sync {
    async fn create_talk(&self, request: CreateTalkRequest)
    -> Result<Created<TalkModel>, Error>;

    /// Merge scalars and, when the referenced speaker exists, reassign it.
    async fn update_talk(&self, request: UpdateTalkRequest) -> Result<TalkModel, Error>;

    async fn delete_talk(&self, request: DeleteTalkRequest) -> Result<(), Error>;
}
