//! Repository implementations using SeaORM

pub mod reservation_repository;
pub mod room_repository;
pub mod user_repository;

pub use reservation_repository::SeaOrmReservationRepository;
pub use room_repository::SeaOrmRoomRepository;
pub use user_repository::SeaOrmUserRepository;

use std::future::Future;
use std::time::Duration;

use crate::domain::DomainError;

/// Hard ceiling on any single storage operation.
pub(crate) const QUERY_TIMEOUT: Duration = Duration::from_secs(3);

/// Run a storage future under the fixed per-call ceiling. Exceeding it
/// surfaces as `DomainError::Timeout`; nothing is retried.
pub(crate) async fn with_timeout<T, F>(fut: F) -> Result<T, DomainError>
where
    F: Future<Output = Result<T, DomainError>>,
{
    match tokio::time::timeout(QUERY_TIMEOUT, fut).await {
        Ok(result) => result,
        Err(_) => Err(DomainError::Timeout),
    }
}
