use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set};

use innbook::auth::hash_password;
use innbook::db;
use innbook::domain::{
    DomainError, NewReservation, NewRoomRestriction, ReservationRepository, RoomRepository,
    UserRepository, UserUpdate,
};
use innbook::infrastructure::{
    SeaOrmReservationRepository, SeaOrmRoomRepository, SeaOrmUserRepository,
};
use innbook::models::{reservation, room_restriction, user};

const GENERALS_QUARTERS: i32 = 1;
const MAJORS_SUITE: i32 = 2;
const OWNER_BLOCK: i32 = 2;

async fn setup_test_db() -> DatabaseConnection {
    db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB")
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

fn guest(room_id: i32, start: &str, end: &str) -> NewReservation {
    NewReservation {
        first_name: "John".to_string(),
        last_name: "Smith".to_string(),
        email: "john@gmail.com".to_string(),
        phone: "555-555-5555".to_string(),
        start_date: date(start),
        end_date: date(end),
        room_id,
    }
}

fn owner_block(room_id: i32, start: &str, end: &str) -> NewRoomRestriction {
    NewRoomRestriction {
        start_date: date(start),
        end_date: date(end),
        room_id,
        reservation_id: None,
        restriction_id: OWNER_BLOCK,
    }
}

async fn create_test_user(db: &DatabaseConnection, email: &str, password: &str) -> i32 {
    let now = chrono::Utc::now().to_rfc3339();
    let row = user::ActiveModel {
        first_name: Set("Site".to_string()),
        last_name: Set("Owner".to_string()),
        email: Set(email.to_string()),
        password: Set(hash_password(password).expect("hash failed")),
        access_level: Set(3),
        created_at: Set(now.clone()),
        updated_at: Set(now),
        ..Default::default()
    };
    row.insert(db).await.expect("Failed to create user").id
}

#[tokio::test]
async fn test_unrestricted_room_is_available() {
    let db = setup_test_db().await;
    let rooms = SeaOrmRoomRepository::new(db);

    let available = rooms
        .search_availability_by_dates(date("2020-01-05"), date("2020-01-06"), GENERALS_QUARTERS)
        .await
        .unwrap();

    assert!(available);
}

#[tokio::test]
async fn test_overlapping_restriction_blocks_room() {
    let db = setup_test_db().await;
    let rooms = SeaOrmRoomRepository::new(db.clone());
    let reservations = SeaOrmReservationRepository::new(db);

    // Owner holds room 1 for [2020-01-01, 2020-01-10).
    reservations
        .insert_room_restriction(owner_block(GENERALS_QUARTERS, "2020-01-01", "2020-01-10"))
        .await
        .unwrap();

    // A stay inside the hold is unavailable.
    let available = rooms
        .search_availability_by_dates(date("2020-01-05"), date("2020-01-06"), GENERALS_QUARTERS)
        .await
        .unwrap();
    assert!(!available);

    // A stay after the hold ends is available.
    let available = rooms
        .search_availability_by_dates(date("2020-01-11"), date("2020-01-12"), GENERALS_QUARTERS)
        .await
        .unwrap();
    assert!(available);
}

#[tokio::test]
async fn test_half_open_range_edges_do_not_collide() {
    let db = setup_test_db().await;
    let rooms = SeaOrmRoomRepository::new(db.clone());
    let reservations = SeaOrmReservationRepository::new(db);

    reservations
        .insert_room_restriction(owner_block(GENERALS_QUARTERS, "2020-01-01", "2020-01-10"))
        .await
        .unwrap();

    // Departing on the day the hold starts is fine...
    let available = rooms
        .search_availability_by_dates(date("2019-12-28"), date("2020-01-01"), GENERALS_QUARTERS)
        .await
        .unwrap();
    assert!(available);

    // ...and so is arriving on the day it ends.
    let available = rooms
        .search_availability_by_dates(date("2020-01-10"), date("2020-01-12"), GENERALS_QUARTERS)
        .await
        .unwrap();
    assert!(available);
}

#[tokio::test]
async fn test_restriction_only_affects_its_room() {
    let db = setup_test_db().await;
    let rooms = SeaOrmRoomRepository::new(db.clone());
    let reservations = SeaOrmReservationRepository::new(db);

    reservations
        .insert_room_restriction(owner_block(GENERALS_QUARTERS, "2020-01-01", "2020-01-10"))
        .await
        .unwrap();

    let available = rooms
        .search_availability_by_dates(date("2020-01-05"), date("2020-01-06"), MAJORS_SUITE)
        .await
        .unwrap();
    assert!(available);
}

#[tokio::test]
async fn test_all_rooms_search_excludes_restricted_rooms() {
    let db = setup_test_db().await;
    let rooms = SeaOrmRoomRepository::new(db.clone());
    let reservations = SeaOrmReservationRepository::new(db);

    // Both rooms free: results are ordered by id.
    let free = rooms
        .search_availability_for_all_rooms(date("2020-01-05"), date("2020-01-06"))
        .await
        .unwrap();
    assert_eq!(
        free.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![GENERALS_QUARTERS, MAJORS_SUITE]
    );

    // Restrict room 1: only room 2 remains.
    reservations
        .insert_room_restriction(owner_block(GENERALS_QUARTERS, "2020-01-01", "2020-01-10"))
        .await
        .unwrap();
    let free = rooms
        .search_availability_for_all_rooms(date("2020-01-05"), date("2020-01-06"))
        .await
        .unwrap();
    assert_eq!(free.iter().map(|r| r.id).collect::<Vec<_>>(), vec![MAJORS_SUITE]);

    // Restrict room 2 as well: empty result, not an error.
    reservations
        .insert_room_restriction(owner_block(MAJORS_SUITE, "2020-01-01", "2020-01-10"))
        .await
        .unwrap();
    let free = rooms
        .search_availability_for_all_rooms(date("2020-01-05"), date("2020-01-06"))
        .await
        .unwrap();
    assert!(free.is_empty());
}

#[tokio::test]
async fn test_insert_reservation_returns_new_id() {
    let db = setup_test_db().await;
    let reservations = SeaOrmReservationRepository::new(db.clone());

    let first = reservations
        .insert_reservation(guest(GENERALS_QUARTERS, "2020-01-01", "2020-01-03"))
        .await
        .unwrap();
    let second = reservations
        .insert_reservation(guest(MAJORS_SUITE, "2020-02-01", "2020-02-03"))
        .await
        .unwrap();

    assert!(first >= 1);
    assert!(second > first);

    let stored = reservation::Entity::find_by_id(first)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.start_date, "2020-01-01");
    assert_eq!(stored.end_date, "2020-01-03");
    assert_eq!(stored.room_id, GENERALS_QUARTERS);
}

#[tokio::test]
async fn test_book_room_writes_reservation_and_restriction_together() {
    let db = setup_test_db().await;
    let rooms = SeaOrmRoomRepository::new(db.clone());
    let reservations = SeaOrmReservationRepository::new(db.clone());

    let reservation_id = reservations
        .book_room(guest(GENERALS_QUARTERS, "2020-01-01", "2020-01-08"))
        .await
        .unwrap();

    // The restriction row points back at the reservation.
    let restriction = room_restriction::Entity::find()
        .one(&db)
        .await
        .unwrap()
        .expect("restriction row missing");
    assert_eq!(restriction.reservation_id, Some(reservation_id));
    assert_eq!(restriction.room_id, GENERALS_QUARTERS);

    // And the booked range is no longer available.
    let available = rooms
        .search_availability_by_dates(date("2020-01-03"), date("2020-01-04"), GENERALS_QUARTERS)
        .await
        .unwrap();
    assert!(!available);
}

#[tokio::test]
async fn test_book_room_rolls_back_when_the_room_does_not_exist() {
    let db = setup_test_db().await;
    let reservations = SeaOrmReservationRepository::new(db.clone());

    // Foreign keys are enforced, so booking a nonexistent room fails.
    let result = reservations
        .book_room(guest(999, "2020-01-01", "2020-01-08"))
        .await;
    assert!(result.is_err());

    // Nothing was left behind by the failed transaction.
    let reservation_count = reservation::Entity::find().count(&db).await.unwrap();
    let restriction_count = room_restriction::Entity::find().count(&db).await.unwrap();
    assert_eq!(reservation_count, 0);
    assert_eq!(restriction_count, 0);
}

#[tokio::test]
async fn test_get_room_by_id() {
    let db = setup_test_db().await;
    let rooms = SeaOrmRoomRepository::new(db);

    let room = rooms.find_by_id(GENERALS_QUARTERS).await.unwrap();
    assert_eq!(room.room_name, "General's Quarters");

    let missing = rooms.find_by_id(999).await;
    assert!(matches!(missing, Err(DomainError::NotFound)));
}

#[tokio::test]
async fn test_authenticate_separates_missing_user_from_bad_password() {
    let db = setup_test_db().await;
    let user_id = create_test_user(&db, "owner@example.com", "correct-horse").await;
    let users = SeaOrmUserRepository::new(db);

    let ok = users
        .authenticate("owner@example.com", "correct-horse")
        .await
        .unwrap();
    assert_eq!(ok.id, user_id);
    assert!(!ok.password_hash.is_empty());

    let mismatch = users.authenticate("owner@example.com", "wrong").await;
    assert!(matches!(mismatch, Err(DomainError::IncorrectPassword)));

    let unknown = users.authenticate("nobody@example.com", "correct-horse").await;
    assert!(matches!(unknown, Err(DomainError::NotFound)));
}

#[tokio::test]
async fn test_update_user_touches_only_the_addressed_row() {
    let db = setup_test_db().await;
    let first_id = create_test_user(&db, "owner@example.com", "pw-one").await;
    let second_id = create_test_user(&db, "manager@example.com", "pw-two").await;
    let users = SeaOrmUserRepository::new(db);

    users
        .update_user(UserUpdate {
            id: first_id,
            first_name: "Renamed".to_string(),
            last_name: "Owner".to_string(),
            email: "renamed@example.com".to_string(),
            access_level: 1,
        })
        .await
        .unwrap();

    let updated = users.find_by_id(first_id).await.unwrap();
    assert_eq!(updated.first_name, "Renamed");
    assert_eq!(updated.email, "renamed@example.com");
    assert_eq!(updated.access_level, 1);

    // The other account is untouched.
    let untouched = users.find_by_id(second_id).await.unwrap();
    assert_eq!(untouched.first_name, "Site");
    assert_eq!(untouched.email, "manager@example.com");
    assert_eq!(untouched.access_level, 3);

    let missing = users
        .update_user(UserUpdate {
            id: 999,
            first_name: "Ghost".to_string(),
            last_name: "User".to_string(),
            email: "ghost@example.com".to_string(),
            access_level: 1,
        })
        .await;
    assert!(matches!(missing, Err(DomainError::NotFound)));
}

#[tokio::test]
async fn test_get_user_by_id() {
    let db = setup_test_db().await;
    let user_id = create_test_user(&db, "owner@example.com", "correct-horse").await;
    let users = SeaOrmUserRepository::new(db);

    let found = users.find_by_id(user_id).await.unwrap();
    assert_eq!(found.email, "owner@example.com");

    let missing = users.find_by_id(999).await;
    assert!(matches!(missing, Err(DomainError::NotFound)));
}
