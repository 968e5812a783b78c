use sqlite::{SqliteAdapter, SqliteSettings};

/// A single connection keeps every query on the same in-memory database.
pub async fn test_adapter() -> SqliteAdapter {
    SqliteAdapter::new(&SqliteSettings {
        db_path: "sqlite::memory:".into(),
        max_connections: 1,
    })
    .await
    .unwrap()
}
