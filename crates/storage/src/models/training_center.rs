use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TrainingCenter {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub owner: String,
}
