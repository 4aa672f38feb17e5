pub mod reservation;
pub mod restriction;
pub mod room;
pub mod room_restriction;
pub mod user;

pub use reservation::Model as Reservation;
pub use room::Model as Room;
pub use user::Model as User;
