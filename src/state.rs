//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{BookingService, UserService};
use crate::domain::repositories::{BookingRepository, UserRepository};

/// Services shared by all requests.
///
/// The repositories behind the services are trait objects so the same router
/// runs on PostgreSQL or on the in-memory store.
#[derive(Clone)]
pub struct AppState {
    pub booking_service: Arc<BookingService<dyn BookingRepository>>,
    pub user_service: Arc<UserService<dyn UserRepository>>,
    /// Name of the active storage backend, reported by the health check.
    pub storage_backend: &'static str,
}

impl AppState {
    pub fn new(
        booking_repository: Arc<dyn BookingRepository>,
        user_repository: Arc<dyn UserRepository>,
        storage_backend: &'static str,
    ) -> Self {
        Self {
            booking_service: Arc::new(BookingService::new(booking_repository)),
            user_service: Arc::new(UserService::new(user_repository)),
            storage_backend,
        }
    }
}
