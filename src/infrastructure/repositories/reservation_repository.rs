//! SeaORM implementation of ReservationRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set, TransactionTrait};

use super::with_timeout;
use crate::domain::{DomainError, NewReservation, NewRoomRestriction, ReservationRepository};
use crate::models::{reservation, room_restriction};

/// Restriction kind marking a range as taken by a guest booking.
const RESERVATION_RESTRICTION_ID: i32 = 1;

/// SeaORM-based implementation of ReservationRepository
pub struct SeaOrmReservationRepository {
    db: DatabaseConnection,
}

impl SeaOrmReservationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn reservation_row(res: &NewReservation, now: &str) -> reservation::ActiveModel {
    reservation::ActiveModel {
        first_name: Set(res.first_name.clone()),
        last_name: Set(res.last_name.clone()),
        email: Set(res.email.clone()),
        phone: Set(res.phone.clone()),
        start_date: Set(res.start_date.to_string()),
        end_date: Set(res.end_date.to_string()),
        room_id: Set(res.room_id),
        created_at: Set(now.to_owned()),
        updated_at: Set(now.to_owned()),
        ..Default::default()
    }
}

#[async_trait]
impl ReservationRepository for SeaOrmReservationRepository {
    async fn insert_reservation(&self, res: NewReservation) -> Result<i32, DomainError> {
        with_timeout(async {
            let now = chrono::Utc::now().to_rfc3339();
            let inserted = reservation_row(&res, &now).insert(&self.db).await?;
            Ok(inserted.id)
        })
        .await
    }

    async fn insert_room_restriction(
        &self,
        restriction: NewRoomRestriction,
    ) -> Result<(), DomainError> {
        with_timeout(async {
            let now = chrono::Utc::now().to_rfc3339();
            room_restriction::ActiveModel {
                start_date: Set(restriction.start_date.to_string()),
                end_date: Set(restriction.end_date.to_string()),
                room_id: Set(restriction.room_id),
                reservation_id: Set(restriction.reservation_id),
                restriction_id: Set(restriction.restriction_id),
                created_at: Set(now.clone()),
                updated_at: Set(now),
                ..Default::default()
            }
            .insert(&self.db)
            .await?;

            Ok(())
        })
        .await
    }

    async fn book_room(&self, res: NewReservation) -> Result<i32, DomainError> {
        with_timeout(async {
            let txn = self.db.begin().await?;
            let now = chrono::Utc::now().to_rfc3339();

            let inserted = reservation_row(&res, &now).insert(&txn).await?;

            // The blocking restriction rides in the same transaction: a
            // failure here rolls the reservation back too.
            room_restriction::ActiveModel {
                start_date: Set(res.start_date.to_string()),
                end_date: Set(res.end_date.to_string()),
                room_id: Set(res.room_id),
                reservation_id: Set(Some(inserted.id)),
                restriction_id: Set(RESERVATION_RESTRICTION_ID),
                created_at: Set(now.clone()),
                updated_at: Set(now),
                ..Default::default()
            }
            .insert(&txn)
            .await?;

            txn.commit().await?;
            Ok(inserted.id)
        })
        .await
    }
}
