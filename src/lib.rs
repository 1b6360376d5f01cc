//! clube_admin Library
//!
//! Re-exports modules for integration testing and external use.

pub mod api;
pub mod config;
pub mod domain;
mod error;
pub mod handlers;
pub mod reports;
pub mod store;

pub use api::{build_app, AppState};
pub use config::{Config, LogFormat};
pub use domain::{Amount, AmountError, DomainError, Money, OperationContext};
pub use error::{AppError, AppResult, ErrorResponse};
pub use store::{Club, SharedClub};
