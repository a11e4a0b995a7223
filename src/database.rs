use sqlx::postgres::PgPoolOptions;
pub use sqlx::PgPool as Pool;

/// Build the Postgres connection
pub async fn init_postgres_connection(connection_spec: &str) -> Pool {
    PgPoolOptions::new()
        .max_connections(5)
        .connect(connection_spec)
        .await
        .expect("Could not connect to postgres")
}
