//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::DomainError;
use crate::models::{Room, User};

/// Input for creating a reservation.
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub room_id: i32,
}

/// Input for blocking a room over a date range.
///
/// `reservation_id` is `None` for owner-imposed blocks.
#[derive(Debug, Clone)]
pub struct NewRoomRestriction {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub room_id: i32,
    pub reservation_id: Option<i32>,
    pub restriction_id: i32,
}

/// Input for overwriting a user's profile fields.
#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub access_level: i32,
}

/// Successful authentication: the user's id and stored password hash.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub id: i32,
    pub password_hash: String,
}

/// Repository for room reference data and availability queries.
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Fetch a room by id. `NotFound` when no row matches.
    async fn find_by_id(&self, id: i32) -> Result<Room, DomainError>;

    /// True iff no restriction row for `room_id` overlaps `[start, end)`.
    ///
    /// Callers are responsible for `start < end`.
    async fn search_availability_by_dates(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        room_id: i32,
    ) -> Result<bool, DomainError>;

    /// Rooms with zero overlapping restrictions in `[start, end)`, ordered
    /// by id. An empty Vec means no availability, not an error.
    async fn search_availability_for_all_rooms(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Room>, DomainError>;
}

/// Repository for reservations and their calendar blocks.
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Insert a reservation row and return its new id.
    async fn insert_reservation(&self, res: NewReservation) -> Result<i32, DomainError>;

    /// Insert a restriction row (owner block or booking block).
    async fn insert_room_restriction(
        &self,
        restriction: NewRoomRestriction,
    ) -> Result<(), DomainError>;

    /// Book a room: insert the reservation and its blocking restriction in
    /// one transaction. Either both rows exist afterwards or neither does.
    async fn book_room(&self, res: NewReservation) -> Result<i32, DomainError>;
}

/// Repository for owner/staff accounts.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user by id. `NotFound` when no row matches.
    async fn find_by_id(&self, id: i32) -> Result<User, DomainError>;

    /// Overwrite name, email and access level of the addressed row only.
    async fn update_user(&self, update: UserUpdate) -> Result<(), DomainError>;

    /// Look the user up by email and verify the password against the stored
    /// bcrypt hash. `NotFound` for an unknown email, `IncorrectPassword` for
    /// a hash mismatch; callers must not expose which one occurred.
    async fn authenticate(&self, email: &str, password: &str) -> Result<Credentials, DomainError>;
}
