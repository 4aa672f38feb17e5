//! SeaORM implementation of RoomRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::sea_query::Query;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use super::with_timeout;
use crate::domain::{DomainError, RoomRepository};
use crate::models::room::{Column, Entity as RoomEntity};
use crate::models::room_restriction;
use crate::models::Room;

/// SeaORM-based implementation of RoomRepository
pub struct SeaOrmRoomRepository {
    db: DatabaseConnection,
}

impl SeaOrmRoomRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RoomRepository for SeaOrmRoomRepository {
    async fn find_by_id(&self, id: i32) -> Result<Room, DomainError> {
        with_timeout(async {
            RoomEntity::find_by_id(id)
                .one(&self.db)
                .await?
                .ok_or(DomainError::NotFound)
        })
        .await
    }

    async fn search_availability_by_dates(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        room_id: i32,
    ) -> Result<bool, DomainError> {
        with_timeout(async {
            // Overlap: existing.start < proposed.end AND existing.end > proposed.start.
            // Dates are ISO-8601 TEXT, so SQL comparison and date order agree.
            let overlapping = room_restriction::Entity::find()
                .filter(room_restriction::Column::RoomId.eq(room_id))
                .filter(room_restriction::Column::StartDate.lt(end.to_string()))
                .filter(room_restriction::Column::EndDate.gt(start.to_string()))
                .count(&self.db)
                .await?;

            Ok(overlapping == 0)
        })
        .await
    }

    async fn search_availability_for_all_rooms(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Room>, DomainError> {
        with_timeout(async {
            // Rooms whose id appears in no overlapping restriction row.
            let rooms = RoomEntity::find()
                .filter(
                    Column::Id.not_in_subquery(
                        Query::select()
                            .column(room_restriction::Column::RoomId)
                            .from(room_restriction::Entity)
                            .and_where(
                                room_restriction::Column::StartDate.lt(end.to_string()),
                            )
                            .and_where(
                                room_restriction::Column::EndDate.gt(start.to_string()),
                            )
                            .to_owned(),
                    ),
                )
                .order_by_asc(Column::Id)
                .all(&self.db)
                .await?;

            Ok(rooms)
        })
        .await
    }
}
