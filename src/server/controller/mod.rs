//! HTTP request handlers.
//!
//! Controllers extract request data, convert DTOs into validated parameters, call the
//! service layer, and convert the resulting domain models back into DTOs.

pub mod booking;
pub mod health;
pub mod param;
