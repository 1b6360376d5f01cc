//! Command Handlers module
//!
//! Handlers validate commands and apply them to the shared club under its
//! write lock. Each handler covers one functional area.

mod commands;
mod dues_handler;
mod event_handler;
mod ledger_handler;
mod minutes_handler;
mod roster_handler;
mod specialty_handler;


pub use commands::*;
pub use dues_handler::DuesHandler;
pub use event_handler::EventHandler;
pub use ledger_handler::LedgerHandler;
pub use minutes_handler::MinutesHandler;
pub use roster_handler::RosterHandler;
pub use specialty_handler::SpecialtyHandler;
