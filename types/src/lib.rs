//! Shared data model and pure client logic for the UniScape travel platform.
//!
//! Everything in this crate is platform-neutral: entity types mirroring the
//! backend's JSON shapes, the response envelope convention, the typed admin
//! command table, and the formatting/validation helpers used by the web UI.
//! Keeping this logic out of the wasm crate keeps it natively testable.

pub mod commands;
pub mod error;
pub mod formatting;
pub mod loader;
pub mod models;
pub mod payment;
pub mod validation;

pub use commands::{AdminCommand, Collection, CommandVerb};
pub use error::ApiError;
pub use loader::LoadState;
pub use models::{
    ApiStatus, Booking, PaymentDetail, PaymentMethod, RefundRequest, Transaction, TransportRoute,
    Trip, TripStatus, User, UserRef,
};
