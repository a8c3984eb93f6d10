//! Core entity definitions for the users and notes services.
//!
//! This crate defines the data types shared between the HTTP services and
//! their storage crates: users with their public projection, and notes.

mod note;
mod user;

pub use note::*;
pub use user::*;
