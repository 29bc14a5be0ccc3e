//! Unit-of-work abstraction over the entity tables.
//!
//! A [`StoreSession`] is opened per request with [`EntityStore::begin`].
//! Writes become durable only through [`StoreSession::commit`]; a session
//! dropped without committing is rolled back.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Athlete, AthleteFilter, AthleteView, Category, TrainingCenter};

pub mod memory;
pub mod postgres;

#[async_trait]
pub trait EntityStore: Send + Sync {
    async fn begin(&self) -> Result<Box<dyn StoreSession>>;
}

/// Row-level primitives available inside a single transaction.
///
/// `update_*` and `delete_*` return [`crate::error::StorageError::NotFound`]
/// when no row has the given id. Unique and foreign-key violations surface
/// as [`crate::error::StorageError::ConstraintViolation`].
#[async_trait]
pub trait StoreSession: Send {
    async fn insert_category(&mut self, category: &Category) -> Result<()>;
    async fn list_categories(&mut self) -> Result<Vec<Category>>;
    async fn find_category(&mut self, id: Uuid) -> Result<Option<Category>>;
    async fn find_category_by_name(&mut self, name: &str) -> Result<Option<Category>>;
    async fn update_category(&mut self, category: &Category) -> Result<()>;
    async fn delete_category(&mut self, id: Uuid) -> Result<()>;

    async fn insert_training_center(&mut self, training_center: &TrainingCenter) -> Result<()>;
    async fn list_training_centers(&mut self) -> Result<Vec<TrainingCenter>>;
    async fn find_training_center(&mut self, id: Uuid) -> Result<Option<TrainingCenter>>;
    async fn find_training_center_by_name(&mut self, name: &str)
    -> Result<Option<TrainingCenter>>;
    async fn update_training_center(&mut self, training_center: &TrainingCenter) -> Result<()>;
    async fn delete_training_center(&mut self, id: Uuid) -> Result<()>;

    async fn insert_athlete(&mut self, athlete: &Athlete) -> Result<()>;
    async fn list_athletes(&mut self, filter: &AthleteFilter) -> Result<Vec<AthleteView>>;
    async fn find_athlete(&mut self, id: Uuid) -> Result<Option<AthleteView>>;
    async fn update_athlete(&mut self, athlete: &Athlete) -> Result<()>;
    async fn delete_athlete(&mut self, id: Uuid) -> Result<()>;

    async fn commit(self: Box<Self>) -> Result<()>;
}
