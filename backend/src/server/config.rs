//! HTTP server configuration object.

use std::net::SocketAddr;

use camps_backend::domain::ResourceLocator;

use super::state_builders::CampStore;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) store: CampStore,
    pub(crate) locator: ResourceLocator,
}

impl ServerConfig {
    /// Serve `store` on `bind_addr`, emitting relative `Location` headers.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, store: CampStore) -> Self {
        Self {
            bind_addr,
            store,
            locator: ResourceLocator::relative(),
        }
    }

    /// Build `Location` headers with `locator` instead.
    #[must_use]
    pub fn with_locator(mut self, locator: ResourceLocator) -> Self {
        self.locator = locator;
        self
    }
}
