use sea_orm::{Database, DatabaseConnection};
use tracing::info;

use crate::domain::common::DatabaseConfig;

#[derive(Debug, Clone)]
pub struct Postgres {
    db: DatabaseConnection,
}

impl Postgres {
    /// Connects and applies pending migrations.
    pub async fn new(config: &DatabaseConfig) -> Result<Self, anyhow::Error> {
        let url = format!(
            "postgres://{}:{}@{}:{}/{}",
            config.username, config.password, config.host, config.port, config.name
        );

        let db = Database::connect(&url).await?;
        info!("Connected to database {}", config.name);

        sqlx::migrate!("./migrations")
            .run(db.get_postgres_connection_pool())
            .await?;
        info!("Database migrations applied");

        Ok(Self { db })
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }
}
