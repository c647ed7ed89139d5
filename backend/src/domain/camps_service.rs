//! Camp use-cases.
//!
//! `CampService` implements the camp driving ports on top of a
//! [`CampRepository`]. Every mutation goes through a [`UnitOfWork`]; a commit
//! that reports no change is surfaced as a client error carrying a fixed
//! message.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    CampRepository, CampRepositoryError, CampsCommand, CampsQuery, CreateCampRequest, Created,
    DeleteCampRequest, GetCampRequest, ListCampsRequest, SearchCampsRequest, UpdateCampRequest,
};
use crate::domain::validation::{missing_field, require_camp_fields, validate_camp};
use crate::domain::{
    Camp, CampModel, CommitReceipt, Error, Moniker, Representation, ResourceLocator, UnitOfWork,
};

pub(crate) const MONIKER_EXISTS: &str = "Moniker already exists";

pub(crate) fn map_repository_error(error: CampRepositoryError) -> Error {
    match error {
        CampRepositoryError::Connection { .. } => {
            Error::service_unavailable("Camp store is unavailable")
        }
        CampRepositoryError::Query { message } => {
            Error::internal(format!("camp repository error: {message}"))
        }
        CampRepositoryError::Conflict { .. } => Error::invalid_request(MONIKER_EXISTS),
    }
}

fn camp_missing(moniker: &Moniker) -> Error {
    Error::invalid_request(format!("Could not find camp with moniker: {moniker}"))
}

fn to_models(camps: &[Camp]) -> Vec<CampModel> {
    camps.iter().map(CampModel::from_entity).collect()
}

/// Camp service implementing [`CampsQuery`] and [`CampsCommand`].
#[derive(Clone)]
pub struct CampService<R> {
    camp_repo: Arc<R>,
    locator: ResourceLocator,
}

impl<R> CampService<R> {
    /// Create a service over `camp_repo` that builds locations with `locator`.
    pub fn new(camp_repo: Arc<R>, locator: ResourceLocator) -> Self {
        Self { camp_repo, locator }
    }
}

impl<R> CampService<R>
where
    R: CampRepository,
{
    async fn find(&self, moniker: &Moniker) -> Result<Option<Camp>, Error> {
        self.camp_repo
            .find_camp(moniker)
            .await
            .map_err(map_repository_error)
    }

    async fn commit(&self, work: UnitOfWork) -> Result<CommitReceipt, Error> {
        self.camp_repo
            .commit(work)
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> CampsQuery for CampService<R>
where
    R: CampRepository,
{
    async fn list_camps(&self, request: ListCampsRequest) -> Result<Vec<CampModel>, Error> {
        let camps = self
            .camp_repo
            .list_camps(request.include_talks)
            .await
            .map_err(map_repository_error)?;
        Ok(to_models(&camps))
    }

    async fn get_camp(&self, request: GetCampRequest) -> Result<CampModel, Error> {
        let moniker = Moniker::new(request.moniker);
        let camp = self
            .find(&moniker)
            .await?
            .ok_or_else(|| Error::not_found("Camp not found"))?;
        Ok(CampModel::from_entity(&camp))
    }

    async fn search_camps(&self, request: SearchCampsRequest) -> Result<Vec<CampModel>, Error> {
        let camps = self
            .camp_repo
            .list_camps_by_date(request.date, request.include_talks)
            .await
            .map_err(map_repository_error)?;
        if camps.is_empty() {
            return Err(Error::not_found(format!(
                "No camps found on {}",
                request.date
            )));
        }
        Ok(to_models(&camps))
    }
}

#[async_trait]
impl<R> CampsCommand for CampService<R>
where
    R: CampRepository,
{
    async fn create_camp(&self, request: CreateCampRequest) -> Result<Created<CampModel>, Error> {
        let model = request.camp;
        require_camp_fields(&model)?;
        let moniker = model
            .moniker
            .as_deref()
            .map(Moniker::new)
            .ok_or_else(|| missing_field("moniker"))?;

        if self.find(&moniker).await?.is_some() {
            return Err(Error::invalid_request(MONIKER_EXISTS));
        }
        let location = self
            .locator
            .camp(&moniker)
            .map_err(|_| Error::invalid_request("Could not use current moniker"))?;

        let camp = model.to_entity();
        validate_camp(&camp)?;

        let mut work = UnitOfWork::new();
        work.add_camp(camp.clone());
        if !self.commit(work).await?.is_changed() {
            return Err(Error::invalid_request("Failed to create camp"));
        }

        Ok(Created {
            location: location.resource(),
            representation: CampModel::from_entity(&camp),
        })
    }

    async fn update_camp(&self, request: UpdateCampRequest) -> Result<CampModel, Error> {
        let moniker = Moniker::new(request.moniker);
        let original = self
            .find(&moniker)
            .await?
            .ok_or_else(|| camp_missing(&moniker))?;

        let mut camp = original.clone();
        request.camp.apply_to(&mut camp);
        validate_camp(&camp)?;

        let mut work = UnitOfWork::new();
        if camp != original {
            work.update_camp(camp.clone());
        }
        if !self.commit(work).await?.is_changed() {
            return Err(Error::invalid_request("Failed to update camp"));
        }

        Ok(CampModel::from_entity(&camp))
    }

    async fn delete_camp(&self, request: DeleteCampRequest) -> Result<(), Error> {
        let moniker = Moniker::new(request.moniker);
        let camp = self
            .find(&moniker)
            .await?
            .ok_or_else(|| camp_missing(&moniker))?;

        let mut work = UnitOfWork::new();
        work.remove_camp(camp.moniker().clone());
        if !self.commit(work).await?.is_changed() {
            return Err(Error::invalid_request("Failed to delete camp"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "camps_service_tests.rs"]
mod tests;
