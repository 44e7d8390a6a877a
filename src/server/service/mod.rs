//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Date rules, admin overrides, and conflict mapping
//! - **Orchestration**: Coordinating repository calls inside transactions
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod admin;
pub mod booking;
