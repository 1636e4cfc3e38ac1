pub mod reservations;
pub mod session;
