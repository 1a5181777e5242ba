use crate::types::DbId;

/// Domain errors surfaced at the read boundary.
///
/// The availability engine itself is total: overlap checks, block resolution,
/// and capacity filtering never fail on their inputs (an inverted stay range
/// simply yields no slips). What can go wrong is lookups and caller input,
/// so this stays a two-variant enum.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),
}
