pub mod admin;
pub mod appointments;
pub mod availability;
pub mod barbers;
pub mod barbershops;
pub mod booking;
pub mod dashboard;
pub mod services;
