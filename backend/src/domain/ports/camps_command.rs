//! Driving port for camp mutations.

use async_trait::async_trait;

use crate::domain::{CampModel, Error, ResourceLocation};

/// Outcome of a successful creation: the new resource's location and its
/// representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Created<T> {
    pub location: ResourceLocation,
    pub representation: T,
}

/// Request to create a camp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCampRequest {
    pub camp: CampModel,
}

/// Request to merge a representation onto an existing camp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCampRequest {
    pub moniker: String,
    pub camp: CampModel,
}

/// Request to delete a camp and its talks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCampRequest {
    pub moniker: String,
}

/// Driving port for camp writes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CampsCommand: Send + Sync {
    /// Create a camp from a complete representation.
    async fn create_camp(&self, request: CreateCampRequest)
    -> Result<Created<CampModel>, Error>;

    /// Merge the supplied fields onto the camp and return the result.
    async fn update_camp(&self, request: UpdateCampRequest) -> Result<CampModel, Error>;

    /// Remove the camp and every talk it owns.
    async fn delete_camp(&self, request: DeleteCampRequest) -> Result<(), Error>;
}
