//! OpenAPI documentation for the notes API.

use entities::Note;
use utoipa::OpenApi;

use crate::api::notes::CreateNoteRequest;

/// OpenAPI document for the notes API. The title and version are replaced
/// from configuration when the router is built.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Notes API",
        description = "A simple note CRUD API backed by a relational table"
    ),
    paths(
        crate::api::notes::list_notes,
        crate::api::notes::create_note,
        crate::api::notes::get_note,
    ),
    components(schemas(Note, CreateNoteRequest)),
    tags(
        (name = "notes", description = "Operations on stored notes")
    )
)]
pub struct ApiDoc;
