//! Driving port for talk read operations.

use async_trait::async_trait;

use crate::domain::{Error, TalkModel};

/// Request to list the talks of a camp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListTalksRequest {
    pub moniker: String,
}

/// Request to fetch one talk of a camp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetTalkRequest {
    pub moniker: String,
    pub talk_id: i32,
}

/// Driving port for talk reads. Talks are returned with their speaker.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TalksQuery: Send + Sync {
    /// Talks of the camp; an unknown camp yields an empty list.
    async fn list_talks(&self, request: ListTalksRequest) -> Result<Vec<TalkModel>, Error>;

    /// One talk; `InvalidRequest` when it does not belong to the camp.
    async fn get_talk(&self, request: GetTalkRequest) -> Result<TalkModel, Error>;
}
