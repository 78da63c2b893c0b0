//! # devicenanny-domain
//!
//! Pure domain model for the device lab checkout board.
//!
//! ## Responsibilities
//! - Define **checkout rows** (a device joined with the user holding it)
//! - Define the **checked-out-by** sentinel (`"0"` means the device is in the lab)
//! - Define the **cell styling rules** that colour the board
//! - Resolve the **renewal lookup** from the two user-id inputs
//! - Error conventions shared by every layer
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod checkout;
pub mod renewal;
pub mod style;
