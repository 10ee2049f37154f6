use sqlx::{mysql::MySqlPoolOptions, MySql, Pool};

pub type DbPool = Pool<MySql>;

pub async fn init_db(database_url: &str) -> DbPool {
    MySqlPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
        .expect("Failed to connect to MySQL")
}

/// MySQL reports unique-key violations as error 1062.
pub fn is_duplicate_entry(err: &sqlx::Error) -> bool {
    let msg = err.to_string();
    msg.contains("Duplicate entry") || msg.contains("1062")
}
