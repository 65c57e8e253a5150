use crate::db::models::{DbPicture, NewPicture};
use crate::db::sqlite::SqlitePool;
use crate::error::GateError;

/// Read access for request handlers plus the upsert used by the startup seeder.
#[derive(Clone)]
pub struct PicturesStorage {
    pool: SqlitePool,
}

impl PicturesStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<DbPicture>, GateError> {
        let row = sqlx::query_as::<_, DbPicture>(
            "SELECT id, name, data, owner FROM pictures WHERE name = ?",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// The picture owned by `username`, if any. Lowest id wins when several match.
    pub async fn find_for_owner(&self, username: &str) -> Result<Option<DbPicture>, GateError> {
        let row = sqlx::query_as::<_, DbPicture>(
            "SELECT id, name, data, owner FROM pictures WHERE owner = ? ORDER BY id LIMIT 1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Upsert by unique name. The caller supplies the id, and a renumbered
    /// seed moves the existing row to the new id.
    pub async fn upsert(&self, pic: NewPicture) -> Result<(), GateError> {
        sqlx::query(
            r#"
            INSERT INTO pictures (id, name, data, owner) VALUES (?, ?, ?, ?)
            ON CONFLICT(name) DO UPDATE SET
                id=excluded.id,
                data=excluded.data,
                owner=excluded.owner
            "#,
        )
        .bind(pic.id)
        .bind(pic.name)
        .bind(pic.data)
        .bind(pic.owner)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::TempDb;

    fn picture(id: i64, name: &str, owner: Option<&str>) -> NewPicture {
        NewPicture {
            id,
            name: name.to_string(),
            data: Some(vec![id as u8; 4]),
            owner: owner.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn lookup_by_name_and_owner() {
        let db = TempDb::new("pictures-lookup").await;
        let storage = PicturesStorage::new(db.pool.clone());

        let seed = picture(3, "sunset", Some("alice"));
        storage.upsert(seed.clone()).await.unwrap();
        storage.upsert(picture(9, "harbor", None)).await.unwrap();

        let fetched = storage.get_by_name("sunset").await.unwrap();
        assert_eq!(fetched, Some(DbPicture::from(seed)));

        let owned = storage.find_for_owner("alice").await.unwrap().unwrap();
        assert_eq!(owned.name, "sunset");
        assert!(storage.find_for_owner("bob").await.unwrap().is_none());
        assert!(storage.get_by_name("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn lowest_id_wins_for_owner() {
        let db = TempDb::new("pictures-owner-order").await;
        let storage = PicturesStorage::new(db.pool.clone());

        storage.upsert(picture(20, "later", Some("alice"))).await.unwrap();
        storage.upsert(picture(5, "earlier", Some("alice"))).await.unwrap();

        let owned = storage.find_for_owner("alice").await.unwrap().unwrap();
        assert_eq!(owned.id, 5);
    }

    #[tokio::test]
    async fn upsert_replaces_data_and_owner_by_name() {
        let db = TempDb::new("pictures-upsert").await;
        let storage = PicturesStorage::new(db.pool.clone());

        storage.upsert(picture(1, "sunset", None)).await.unwrap();
        let mut updated = picture(1, "sunset", Some("bob"));
        updated.data = None;
        storage.upsert(updated).await.unwrap();

        let fetched = storage.get_by_name("sunset").await.unwrap().unwrap();
        assert_eq!(fetched.owner.as_deref(), Some("bob"));
        assert_eq!(fetched.data, None);
    }

    #[tokio::test]
    async fn upsert_renumbers_by_name() {
        let db = TempDb::new("pictures-renumber").await;
        let storage = PicturesStorage::new(db.pool.clone());

        storage.upsert(picture(1, "a", None)).await.unwrap();
        storage.upsert(picture(5, "a", None)).await.unwrap();

        let fetched = storage.get_by_name("a").await.unwrap().unwrap();
        assert_eq!(fetched.id, 5);
    }

    #[tokio::test]
    async fn upsert_onto_foreign_id_fails() {
        let db = TempDb::new("pictures-foreign-id").await;
        let storage = PicturesStorage::new(db.pool.clone());

        storage.upsert(picture(1, "a", None)).await.unwrap();
        let err = storage.upsert(picture(1, "b", None)).await.unwrap_err();

        assert!(matches!(err, GateError::DatabaseError(_)));
        assert!(storage.get_by_name("b").await.unwrap().is_none());
    }
}
