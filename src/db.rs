use async_trait::async_trait;
use chrono::Utc;
use sqlx::{
    PgPool,
    migrate::MigrateError,
    postgres::PgPoolOptions,
    types::Json,
};
use tracing::debug;

use crate::error::{CollectError, Result};
use crate::room_condition::RoomCondition;

/// Append-only sink for collected room conditions.
#[async_trait]
pub trait RoomConditionStore: Send + Sync {
    async fn put(&self, room_condition: &RoomCondition) -> Result<()>;
}

/// Builds a single-connection pool that does not connect until the first query.
pub fn new_pool(database_url: &str) -> std::result::Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(1)
        .connect_lazy(database_url)
}

/// Stores each record as a JSONB document keyed by its id.
#[derive(Debug, Clone)]
pub struct PgRoomConditionStore {
    pool: PgPool,
}

impl PgRoomConditionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn migrate(&self) -> std::result::Result<(), MigrateError> {
        sqlx::migrate!().run(&self.pool).await
    }
}

#[async_trait]
impl RoomConditionStore for PgRoomConditionStore {
    async fn put(&self, room_condition: &RoomCondition) -> Result<()> {
        let item = serde_json::to_value(room_condition).map_err(CollectError::Serialization)?;

        sqlx::query(
            r#"
            INSERT INTO room_conditions (id, created_at, item)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(room_condition.id)
        .bind(room_condition.created_at.with_timezone(&Utc))
        .bind(Json(item))
        .execute(&self.pool)
        .await
        .map_err(CollectError::StoreWrite)?;

        debug!(id = %room_condition.id, "inserted room condition");

        Ok(())
    }
}
