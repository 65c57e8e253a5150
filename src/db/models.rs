use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbCredential {
    pub id: i64,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct DbPicture {
    pub id: i64,
    pub name: String,
    pub data: Option<Vec<u8>>,
    pub owner: Option<String>,
}

/// Picture row as written by the seeder. `id` is never generated by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPicture {
    pub id: i64,
    pub name: String,
    pub data: Option<Vec<u8>>,
    pub owner: Option<String>,
}

/// Result of inserting a credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Created(i64),
    /// The store's UNIQUE constraint on `username` rejected the row.
    UsernameTaken,
}

impl From<NewPicture> for DbPicture {
    fn from(p: NewPicture) -> Self {
        Self {
            id: p.id,
            name: p.name,
            data: p.data,
            owner: p.owner,
        }
    }
}
