pub mod classes;
pub mod coach;
pub mod home;
pub mod login;
pub mod menu;
pub mod reports;
pub mod reservations;
pub mod signup;
pub mod staff;
