//! Users Domain
//!
//! User management as a self-contained, layered domain crate: create and
//! fetch users, update a user's email, and remove users.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │     Handlers     │  ← HTTP endpoints, input validation, status mapping
//! └────────┬─────────┘
//! ┌────────▼─────────┐
//! │     Service      │  ← Orchestration; one repository call per operation
//! └────────┬─────────┘
//! ┌────────▼─────────┐
//! │  UserRepository  │  ← trait; in-memory and SeaORM-backed impls
//! └────────┬─────────┘
//! ┌────────▼─────────┐
//! │      Models      │  ← Entities and DTOs
//! └──────────────────┘
//! ```
//!
//! The service forwards repository errors without rewrapping them, so the
//! handler layer can translate [`UserError::NotFound`] into a 404 and every
//! other failure into a 500.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_users::{
//!     handlers,
//!     repository::InMemoryUserRepository,
//!     service::UserService,
//! };
//!
//! let service = UserService::new(InMemoryUserRepository::new());
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{UserError, UserResult};
pub use models::{CreateUser, RemoveUser, UpdateUserEmail, User};
pub use postgres::PgUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
