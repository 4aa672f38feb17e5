//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{ReservationRepository, RoomRepository, UserRepository};
use crate::infrastructure::{
    SeaOrmReservationRepository, SeaOrmRoomRepository, SeaOrmUserRepository,
};

/// Application state shared across all handlers.
///
/// The database handle is passed in explicitly at startup and cloned into
/// each repository; there is no process-wide singleton.
#[derive(Clone)]
pub struct AppState {
    /// Room reference data and availability queries
    pub room_repo: Arc<dyn RoomRepository>,
    /// Reservation and restriction writes
    pub reservation_repo: Arc<dyn ReservationRepository>,
    /// Owner/staff accounts
    pub user_repo: Arc<dyn UserRepository>,
}

impl AppState {
    /// Create a new AppState with all repositories initialized
    pub fn new(db: DatabaseConnection) -> Self {
        let room_repo = Arc::new(SeaOrmRoomRepository::new(db.clone()));
        let reservation_repo = Arc::new(SeaOrmReservationRepository::new(db.clone()));
        let user_repo = Arc::new(SeaOrmUserRepository::new(db));

        Self {
            room_repo,
            reservation_repo,
            user_repo,
        }
    }
}
