pub mod init;
pub mod reservations;
pub mod rooms;
pub mod root;
pub mod show;
