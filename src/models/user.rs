use serde::Serialize;

/// A tracked user. Created on first submission of a new username,
/// never mutated or deleted by this program.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i64,             // ⇔ users.id (INTEGER, generated)
    pub username: String,    // ⇔ users.username (TEXT, unique)
}
