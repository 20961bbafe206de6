pub mod appointment;
pub mod availability;
pub mod barber;
pub mod barbershop;
pub mod client;
pub mod payment;
pub mod service;
