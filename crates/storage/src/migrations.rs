//! SQLite schema for the durable backend.

use sqlx::SqlitePool;

/// Create the `taxi_fleet` table if it does not exist yet.
///
/// `AUTOINCREMENT` keeps identities from ever being reused, even after every
/// row has been deleted.
pub(crate) async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS taxi_fleet (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            number TEXT NOT NULL,
            driver TEXT NOT NULL,
            status TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_taxi_fleet_status ON taxi_fleet (status)")
        .execute(pool)
        .await?;

    Ok(())
}
