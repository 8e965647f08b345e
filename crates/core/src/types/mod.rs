//! Core types for the BADINVSTMNT site.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod status;
pub mod submission;

pub use email::{Email, EmailError};
pub use status::OrderStatus;
pub use submission::{SubmissionType, SubmitterRole};
