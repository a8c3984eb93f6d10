//! Note entity definitions.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A note from the notes store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Note {
    /// Identifier assigned by the backing table.
    pub id: i64,
    /// Note body.
    pub text: String,
    /// Whether the note has been completed.
    #[serde(default)]
    pub is_completed: bool,
}
