//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs keep every field optional so that a missing field surfaces as
//! a validation failure (400) rather than a deserialization error. Validation
//! uses the `validator` derive; conversion into domain inputs happens through
//! `TryFrom`.

pub mod booking;
pub mod health;
pub mod user;
