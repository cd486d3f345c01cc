use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;

#[derive(Clone)]
pub struct DbService {
    pub(crate) conn: DatabaseConnection,
}

impl DbService {
    /// Connect and bring the schema up to date. Accepts anything SeaORM can
    /// turn into connect options so tests can tune pool settings.
    pub async fn new<C>(options: C) -> Result<Self, DbErr>
    where
        C: Into<ConnectOptions>,
    {
        info!("Connecting to database...");
        let conn = Database::connect(options).await?;
        info!("Running migrations...");
        Migrator::up(&conn, None).await?;
        info!("Database ready.");
        Ok(Self { conn })
    }
}
