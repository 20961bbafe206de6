//! # Chairtime Core
//!
//! Domain types and business logic shared by the Chairtime scheduling
//! service. This crate owns:
//!
//! - **Models**: request/response types for every API surface (tenants,
//!   services, barbers, clients, appointments, availability, payments)
//! - **Errors**: the domain error enum used across all crates
//! - **Slots**: the availability resolver, a pure function that computes
//!   bookable start times for a (service, barber, date) triple
//!
//! The crate performs no I/O; persistence lives in `chairtime-db` and the
//! HTTP surface in `chairtime-api`.

pub mod errors;
pub mod models;
pub mod slots;
