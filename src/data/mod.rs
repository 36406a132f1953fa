pub mod app_settings;
pub mod init;
pub mod persistence;
pub mod reservation;
pub mod rooms;

pub use app_settings::BoardSettings;
pub use persistence::Persistable;
pub use reservation::{Reservation, ReservationData};
pub use rooms::{RoomGroup, RoomLayout};
