//! Port for camp, talk and speaker persistence.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{Camp, CommitReceipt, Moniker, Speaker, SpeakerId, Talk, TalkId, UnitOfWork};

use super::define_port_error;

define_port_error! {
    /// Errors raised by camp repository adapters.
    pub enum CampRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "camp repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "camp repository query failed: {message}",
        /// A uniqueness constraint rejected the commit.
        Conflict { message: String } =>
            "camp repository conflict: {message}",
    }
}

/// Port for reading camps, talks and speakers and committing staged changes.
///
/// Lookups return `Ok(None)` or an empty list when nothing matches; errors
/// are reserved for store faults.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CampRepository: Send + Sync {
    /// All camps ordered by event date, optionally with their talks.
    async fn list_camps(&self, include_talks: bool) -> Result<Vec<Camp>, CampRepositoryError>;

    /// The camp with the given moniker. Talks are not loaded.
    async fn find_camp(&self, moniker: &Moniker) -> Result<Option<Camp>, CampRepositoryError>;

    /// Camps whose event date equals `date`.
    async fn list_camps_by_date(
        &self,
        date: NaiveDate,
        include_talks: bool,
    ) -> Result<Vec<Camp>, CampRepositoryError>;

    async fn find_speaker(&self, id: SpeakerId) -> Result<Option<Speaker>, CampRepositoryError>;

    /// Talks owned by the camp, ordered by id.
    async fn list_talks(
        &self,
        moniker: &Moniker,
        include_speakers: bool,
    ) -> Result<Vec<Talk>, CampRepositoryError>;

    /// The talk with `talk_id` if it belongs to the camp.
    async fn find_talk(
        &self,
        moniker: &Moniker,
        talk_id: TalkId,
        include_speaker: bool,
    ) -> Result<Option<Talk>, CampRepositoryError>;

    /// Apply every staged change atomically.
    ///
    /// An empty unit of work returns an unchanged receipt without touching
    /// the store. A duplicate moniker fails with
    /// [`CampRepositoryError::Conflict`] and nothing is written.
    async fn commit(&self, work: UnitOfWork) -> Result<CommitReceipt, CampRepositoryError>;
}
