use crate::config::DbPool;

pub struct MetaCrud {
    pool: DbPool,
}

impl MetaCrud {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn category_names(&self) -> Result<Vec<String>, sqlx::Error> {
        self.names("categories").await
    }

    pub async fn size_names(&self) -> Result<Vec<String>, sqlx::Error> {
        self.names("sizes").await
    }

    pub async fn tag_names(&self) -> Result<Vec<String>, sqlx::Error> {
        self.names("tags").await
    }

    async fn names(&self, table: &str) -> Result<Vec<String>, sqlx::Error> {
        // `table` is one of three fixed identifiers above, never user input.
        let rows: Vec<(String,)> =
            sqlx::query_as(&format!("SELECT name FROM {} ORDER BY id", table))
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(|(name,)| name).collect())
    }
}
