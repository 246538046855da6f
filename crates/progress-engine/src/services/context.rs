//! Service context - dependency container for services
//!
//! Holds the counter repository, the chat gateway port, the deduplication
//! window, and the slices of configuration the engine consults per event.

use std::sync::Arc;

use progress_common::{RoleConfig, ThresholdConfig, TrackingConfig};
use progress_core::traits::{ChatGateway, CounterRepository};
use progress_core::CounterKind;
use progress_window::CooldownWindow;

/// Service context containing all engine dependencies
#[derive(Clone)]
pub struct ServiceContext {
    counter_repo: Arc<dyn CounterRepository>,
    gateway: Arc<dyn ChatGateway>,
    window: Arc<CooldownWindow>,
    tracking: TrackingConfig,
    roles: RoleConfig,
    thresholds: ThresholdConfig,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        counter_repo: Arc<dyn CounterRepository>,
        gateway: Arc<dyn ChatGateway>,
        window: Arc<CooldownWindow>,
        tracking: TrackingConfig,
        roles: RoleConfig,
        thresholds: ThresholdConfig,
    ) -> Self {
        Self {
            counter_repo,
            gateway,
            window,
            tracking,
            roles,
            thresholds,
        }
    }

    /// Get the counter repository
    pub fn counter_repo(&self) -> &dyn CounterRepository {
        self.counter_repo.as_ref()
    }

    /// Get the chat gateway
    pub fn gateway(&self) -> &dyn ChatGateway {
        self.gateway.as_ref()
    }

    /// Get the deduplication window
    pub fn window(&self) -> &CooldownWindow {
        self.window.as_ref()
    }

    /// Get the channel tracking configuration
    pub fn tracking(&self) -> &TrackingConfig {
        &self.tracking
    }

    /// Get the role configuration
    pub fn roles(&self) -> &RoleConfig {
        &self.roles
    }

    /// Threshold a counter must reach for the progression grant
    #[inline]
    pub fn threshold(&self, kind: CounterKind) -> i64 {
        match kind {
            CounterKind::Reactions => self.thresholds.reactions,
            CounterKind::Posts => self.thresholds.posts,
        }
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("tracking", &self.tracking)
            .field("roles", &self.roles)
            .field("thresholds", &self.thresholds)
            .finish()
    }
}
