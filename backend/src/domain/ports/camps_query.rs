//! Driving port for camp read operations.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{CampModel, Error};

/// Request to list every camp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCampsRequest {
    pub include_talks: bool,
}

/// Request to fetch one camp by moniker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetCampRequest {
    pub moniker: String,
}

/// Request to find camps held on a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchCampsRequest {
    pub date: NaiveDate,
    pub include_talks: bool,
}

/// Driving port for camp reads.
///
/// # Examples
///
/// ```rust,no_run
/// # use std::sync::Arc;
/// # use camps_backend::domain::CampService;
/// # use camps_backend::domain::ports::{CampsQuery, GetCampRequest};
/// # use camps_backend::outbound::memory::InMemoryCampRepository;
/// # async fn example() -> Result<(), camps_backend::domain::Error> {
/// let service = CampService::new(
///     Arc::new(InMemoryCampRepository::with_sample_data()),
///     Default::default(),
/// );
/// let camp = service
///     .get_camp(GetCampRequest { moniker: "ATL2018".to_owned() })
///     .await?;
/// assert_eq!(camp.moniker.as_deref(), Some("ATL2018"));
/// # Ok(())
/// # }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CampsQuery: Send + Sync {
    /// Every camp, ordered by event date. An empty list is a success.
    async fn list_camps(&self, request: ListCampsRequest) -> Result<Vec<CampModel>, Error>;

    /// One camp; `NotFound` when the moniker is unknown.
    async fn get_camp(&self, request: GetCampRequest) -> Result<CampModel, Error>;

    /// Camps whose event date equals the requested date; `NotFound` when
    /// there are none.
    async fn search_camps(&self, request: SearchCampsRequest) -> Result<Vec<CampModel>, Error>;
}
