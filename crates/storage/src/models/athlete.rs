use chrono::{DateTime, SubsecRound, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::{Category, TrainingCenter};

/// Athlete row as persisted: related entities are held by id only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Athlete {
    pub id: Uuid,
    pub name: String,
    pub tax_id: String,
    pub age: i32,
    pub weight: Decimal,
    pub height: Decimal,
    pub sex: String,
    pub category_id: Uuid,
    pub training_center_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// An athlete together with the category and training center it references,
/// as they exist at read time.
#[derive(Debug, Clone, PartialEq)]
pub struct AthleteView {
    pub athlete: Athlete,
    pub category: Category,
    pub training_center: TrainingCenter,
}

/// Exact-match criteria for listing athletes. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AthleteFilter {
    pub name: Option<String>,
    pub tax_id: Option<String>,
}

impl AthleteFilter {
    pub fn matches(&self, athlete: &Athlete) -> bool {
        self.name.as_ref().is_none_or(|name| *name == athlete.name)
            && self.tax_id.as_ref().is_none_or(|tax_id| *tax_id == athlete.tax_id)
    }
}

/// Current UTC time truncated to the microsecond precision Postgres keeps,
/// so a freshly created record compares equal to its stored copy.
pub fn creation_timestamp() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}
