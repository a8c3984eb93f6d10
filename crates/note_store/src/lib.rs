//! Note storage for the notes service.
//!
//! A thin layer over a relational `notes` table. The store owns a sqlx
//! connection pool and exposes insert and query operations; transactional
//! guarantees come from the backing engine.

mod error;
mod store;

pub use error::*;
pub use store::*;
