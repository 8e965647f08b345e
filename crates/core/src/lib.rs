//! BADINVSTMNT Core - Shared domain types and logic.
//!
//! This crate provides the domain layer used by the site API:
//! - [`types`] - `Email`, `OrderStatus`, and music-submission enums
//! - [`validate`] - Field validators shared by every form boundary
//! - [`cart`] - The shopping cart store (pure, no I/O)
//! - [`order`] - Order assembly from a cart snapshot + customer form
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP
//! clients, no persistence. Documents are read and written by the `api`
//! crate, which delegates everything stateful to the hosted document store.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod order;
pub mod types;
pub mod validate;

pub use types::*;
