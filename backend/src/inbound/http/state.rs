//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{CampRepository, CampsCommand, CampsQuery, TalksCommand, TalksQuery};
use crate::domain::{CampService, ResourceLocator, TalkService};

/// Parameter object bundling the port implementations used by handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub camps: Arc<dyn CampsQuery>,
    pub camps_command: Arc<dyn CampsCommand>,
    pub talks: Arc<dyn TalksQuery>,
    pub talks_command: Arc<dyn TalksCommand>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub camps: Arc<dyn CampsQuery>,
    pub camps_command: Arc<dyn CampsCommand>,
    pub talks: Arc<dyn TalksQuery>,
    pub talks_command: Arc<dyn TalksCommand>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state from a ports bundle.
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            camps,
            camps_command,
            talks,
            talks_command,
        } = ports;
        Self {
            camps,
            camps_command,
            talks,
            talks_command,
        }
    }

    /// Wire the camp and talk services over a single repository.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use camps_backend::domain::ResourceLocator;
    /// use camps_backend::inbound::http::state::HttpState;
    /// use camps_backend::outbound::memory::InMemoryCampRepository;
    ///
    /// let repo = Arc::new(InMemoryCampRepository::with_sample_data());
    /// let state = HttpState::from_repository(repo, ResourceLocator::relative());
    /// let _camps = state.camps.clone();
    /// ```
    pub fn from_repository<R>(repo: Arc<R>, locator: ResourceLocator) -> Self
    where
        R: CampRepository + 'static,
    {
        let camps = Arc::new(CampService::new(Arc::clone(&repo), locator.clone()));
        let talks = Arc::new(TalkService::new(repo, locator));
        Self::new(HttpStatePorts {
            camps: camps.clone(),
            camps_command: camps,
            talks: talks.clone(),
            talks_command: talks,
        })
    }
}
