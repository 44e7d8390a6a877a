//! Server-side API backend and business logic.
//!
//! This module contains the complete backend for the lounge booking service: HTTP API
//! endpoints, booking rules, data access, and the chat bot launcher. The backend uses Axum
//! as the web framework, SeaORM for database operations, and Serenity for the Discord bot.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Booking rules, transactions, and admin overrides
//! - **Data Layer** (`data/`) - Database operations over the user and booking tables
//! - **Model Layer** (`model/`) - Domain models and validated parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB pool, admin allow-list)
//! - **Startup** (`startup`) - Database setup, CORS, rate limiting, and shutdown signal
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Bot** (`bot/`) - Discord slash command launcher for the booking web app
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** validates input, converts DTOs to params, calls service
//! 3. **Service** executes business logic, orchestrates data operations
//! 4. **Data** queries database and returns entity or domain models
//! 5. **Controller** converts domain model to DTO, returns HTTP response

pub mod bot;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
