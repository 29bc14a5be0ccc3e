//! In-process entity store.
//!
//! A session holds the store lock for its whole lifetime and works on a copy
//! of the tables; `commit` publishes the copy, dropping the session discards
//! it. Sessions are therefore fully serialized. Constraint names match the
//! Postgres migrations so errors read the same with either backend.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

use super::{EntityStore, StoreSession};
use crate::error::{Result, StorageError};
use crate::models::{Athlete, AthleteFilter, AthleteView, Category, TrainingCenter};

#[derive(Debug, Clone, Default)]
struct Tables {
    categories: Vec<Category>,
    training_centers: Vec<TrainingCenter>,
    athletes: Vec<Athlete>,
}

impl Tables {
    fn view(&self, athlete: &Athlete) -> Result<AthleteView> {
        let category = self
            .categories
            .iter()
            .find(|c| c.id == athlete.category_id)
            .cloned()
            .ok_or_else(|| StorageError::referenced("athletes_category_id_fkey"))?;
        let training_center = self
            .training_centers
            .iter()
            .find(|t| t.id == athlete.training_center_id)
            .cloned()
            .ok_or_else(|| StorageError::referenced("athletes_training_center_id_fkey"))?;

        Ok(AthleteView {
            athlete: athlete.clone(),
            category,
            training_center,
        })
    }

    fn check_category_name(&self, category: &Category) -> Result<()> {
        if self
            .categories
            .iter()
            .any(|c| c.id != category.id && c.name == category.name)
        {
            return Err(StorageError::duplicate("categories_name_key"));
        }
        Ok(())
    }

    fn check_training_center_name(&self, training_center: &TrainingCenter) -> Result<()> {
        if self
            .training_centers
            .iter()
            .any(|t| t.id != training_center.id && t.name == training_center.name)
        {
            return Err(StorageError::duplicate("training_centers_name_key"));
        }
        Ok(())
    }

    fn check_athlete(&self, athlete: &Athlete) -> Result<()> {
        if self
            .athletes
            .iter()
            .any(|a| a.id != athlete.id && a.tax_id == athlete.tax_id)
        {
            return Err(StorageError::duplicate("athletes_tax_id_key"));
        }
        if !self.categories.iter().any(|c| c.id == athlete.category_id) {
            return Err(StorageError::referenced("athletes_category_id_fkey"));
        }
        if !self
            .training_centers
            .iter()
            .any(|t| t.id == athlete.training_center_id)
        {
            return Err(StorageError::referenced("athletes_training_center_id_fkey"));
        }
        Ok(())
    }
}

/// Entity store kept entirely in memory. Cloning shares the same tables.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EntityStore for MemoryStore {
    async fn begin(&self) -> Result<Box<dyn StoreSession>> {
        let guard = self.tables.clone().lock_owned().await;
        let working = (*guard).clone();
        Ok(Box::new(MemorySession { guard, working }))
    }
}

struct MemorySession {
    guard: OwnedMutexGuard<Tables>,
    working: Tables,
}

#[async_trait]
impl StoreSession for MemorySession {
    async fn insert_category(&mut self, category: &Category) -> Result<()> {
        self.working.check_category_name(category)?;
        self.working.categories.push(category.clone());
        Ok(())
    }

    async fn list_categories(&mut self) -> Result<Vec<Category>> {
        Ok(self.working.categories.clone())
    }

    async fn find_category(&mut self, id: Uuid) -> Result<Option<Category>> {
        Ok(self.working.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn find_category_by_name(&mut self, name: &str) -> Result<Option<Category>> {
        Ok(self
            .working
            .categories
            .iter()
            .find(|c| c.name == name)
            .cloned())
    }

    async fn update_category(&mut self, category: &Category) -> Result<()> {
        self.working.check_category_name(category)?;
        let slot = self
            .working
            .categories
            .iter_mut()
            .find(|c| c.id == category.id)
            .ok_or(StorageError::NotFound)?;
        *slot = category.clone();
        Ok(())
    }

    async fn delete_category(&mut self, id: Uuid) -> Result<()> {
        if self.working.athletes.iter().any(|a| a.category_id == id) {
            return Err(StorageError::referenced("athletes_category_id_fkey"));
        }
        let before = self.working.categories.len();
        self.working.categories.retain(|c| c.id != id);
        if self.working.categories.len() == before {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }

    async fn insert_training_center(&mut self, training_center: &TrainingCenter) -> Result<()> {
        self.working.check_training_center_name(training_center)?;
        self.working.training_centers.push(training_center.clone());
        Ok(())
    }

    async fn list_training_centers(&mut self) -> Result<Vec<TrainingCenter>> {
        Ok(self.working.training_centers.clone())
    }

    async fn find_training_center(&mut self, id: Uuid) -> Result<Option<TrainingCenter>> {
        Ok(self
            .working
            .training_centers
            .iter()
            .find(|t| t.id == id)
            .cloned())
    }

    async fn find_training_center_by_name(
        &mut self,
        name: &str,
    ) -> Result<Option<TrainingCenter>> {
        Ok(self
            .working
            .training_centers
            .iter()
            .find(|t| t.name == name)
            .cloned())
    }

    async fn update_training_center(&mut self, training_center: &TrainingCenter) -> Result<()> {
        self.working.check_training_center_name(training_center)?;
        let slot = self
            .working
            .training_centers
            .iter_mut()
            .find(|t| t.id == training_center.id)
            .ok_or(StorageError::NotFound)?;
        *slot = training_center.clone();
        Ok(())
    }

    async fn delete_training_center(&mut self, id: Uuid) -> Result<()> {
        if self.working.athletes.iter().any(|a| a.training_center_id == id) {
            return Err(StorageError::referenced("athletes_training_center_id_fkey"));
        }
        let before = self.working.training_centers.len();
        self.working.training_centers.retain(|t| t.id != id);
        if self.working.training_centers.len() == before {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }

    async fn insert_athlete(&mut self, athlete: &Athlete) -> Result<()> {
        self.working.check_athlete(athlete)?;
        self.working.athletes.push(athlete.clone());
        Ok(())
    }

    async fn list_athletes(&mut self, filter: &AthleteFilter) -> Result<Vec<AthleteView>> {
        self.working
            .athletes
            .iter()
            .filter(|a| filter.matches(a))
            .map(|a| self.working.view(a))
            .collect()
    }

    async fn find_athlete(&mut self, id: Uuid) -> Result<Option<AthleteView>> {
        self.working
            .athletes
            .iter()
            .find(|a| a.id == id)
            .map(|a| self.working.view(a))
            .transpose()
    }

    async fn update_athlete(&mut self, athlete: &Athlete) -> Result<()> {
        self.working.check_athlete(athlete)?;
        let slot = self
            .working
            .athletes
            .iter_mut()
            .find(|a| a.id == athlete.id)
            .ok_or(StorageError::NotFound)?;
        *slot = athlete.clone();
        Ok(())
    }

    async fn delete_athlete(&mut self, id: Uuid) -> Result<()> {
        let before = self.working.athletes.len();
        self.working.athletes.retain(|a| a.id != id);
        if self.working.athletes.len() == before {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }

    async fn commit(self: Box<Self>) -> Result<()> {
        let MemorySession { mut guard, working } = *self;
        *guard = working;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::creation_timestamp;
    use rust_decimal::Decimal;

    fn category(name: &str) -> Category {
        Category {
            id: Uuid::new_v4(),
            name: name.to_string(),
        }
    }

    fn training_center(name: &str) -> TrainingCenter {
        TrainingCenter {
            id: Uuid::new_v4(),
            name: name.to_string(),
            address: "Rua x.002".to_string(),
            owner: "Marcos".to_string(),
        }
    }

    fn athlete(category: &Category, tc: &TrainingCenter, tax_id: &str) -> Athlete {
        Athlete {
            id: Uuid::new_v4(),
            name: "Joao".to_string(),
            tax_id: tax_id.to_string(),
            age: 25,
            weight: Decimal::new(755, 1),
            height: Decimal::new(17, 1),
            sex: "M".to_string(),
            category_id: category.id,
            training_center_id: tc.id,
            created_at: creation_timestamp(),
        }
    }

    #[tokio::test]
    async fn test_uncommitted_session_is_rolled_back() {
        let store = MemoryStore::new();

        let mut session = store.begin().await.unwrap();
        session.insert_category(&category("Scale")).await.unwrap();
        drop(session);

        let mut session = store.begin().await.unwrap();
        assert!(session.list_categories().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_commit_publishes_writes() {
        let store = MemoryStore::new();
        let scale = category("Scale");

        let mut session = store.begin().await.unwrap();
        session.insert_category(&scale).await.unwrap();
        session.commit().await.unwrap();

        let mut session = store.begin().await.unwrap();
        assert_eq!(session.find_category(scale.id).await.unwrap(), Some(scale));
    }

    #[tokio::test]
    async fn test_duplicate_names_violate_constraint() {
        let store = MemoryStore::new();
        let mut session = store.begin().await.unwrap();

        session.insert_category(&category("Scale")).await.unwrap();
        let err = session.insert_category(&category("Scale")).await.unwrap_err();
        assert!(err.is_unique_violation());

        session
            .insert_training_center(&training_center("CT king"))
            .await
            .unwrap();
        let err = session
            .insert_training_center(&training_center("CT king"))
            .await
            .unwrap_err();
        assert!(err.is_unique_violation());
    }

    #[tokio::test]
    async fn test_renaming_to_own_name_is_not_a_conflict() {
        let store = MemoryStore::new();
        let mut session = store.begin().await.unwrap();
        let scale = category("Scale");

        session.insert_category(&scale).await.unwrap();
        session.update_category(&scale).await.unwrap();
    }

    #[tokio::test]
    async fn test_referenced_rows_cannot_be_deleted() {
        let store = MemoryStore::new();
        let mut session = store.begin().await.unwrap();
        let scale = category("Scale");
        let ct = training_center("CT king");

        session.insert_category(&scale).await.unwrap();
        session.insert_training_center(&ct).await.unwrap();
        session
            .insert_athlete(&athlete(&scale, &ct, "12345678900"))
            .await
            .unwrap();

        let err = session.delete_category(scale.id).await.unwrap_err();
        assert!(err.is_foreign_key_violation());
        let err = session.delete_training_center(ct.id).await.unwrap_err();
        assert!(err.is_foreign_key_violation());
    }

    #[tokio::test]
    async fn test_athlete_view_embeds_current_related_rows() {
        let store = MemoryStore::new();
        let mut session = store.begin().await.unwrap();
        let mut scale = category("Scale");
        let ct = training_center("CT king");
        let joao = athlete(&scale, &ct, "12345678900");

        session.insert_category(&scale).await.unwrap();
        session.insert_training_center(&ct).await.unwrap();
        session.insert_athlete(&joao).await.unwrap();

        scale.name = "Elite".to_string();
        session.update_category(&scale).await.unwrap();

        let view = session.find_athlete(joao.id).await.unwrap().unwrap();
        assert_eq!(view.category.name, "Elite");
        assert_eq!(view.training_center, ct);
    }

    #[tokio::test]
    async fn test_list_athletes_applies_filter() {
        let store = MemoryStore::new();
        let mut session = store.begin().await.unwrap();
        let scale = category("Scale");
        let ct = training_center("CT king");

        session.insert_category(&scale).await.unwrap();
        session.insert_training_center(&ct).await.unwrap();
        session
            .insert_athlete(&athlete(&scale, &ct, "111"))
            .await
            .unwrap();
        session
            .insert_athlete(&athlete(&scale, &ct, "222"))
            .await
            .unwrap();

        let filter = AthleteFilter {
            tax_id: Some("222".to_string()),
            ..Default::default()
        };
        let found = session.list_athletes(&filter).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].athlete.tax_id, "222");

        let all = session.list_athletes(&AthleteFilter::default()).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_rows_report_not_found() {
        let store = MemoryStore::new();
        let mut session = store.begin().await.unwrap();

        assert!(matches!(
            session.delete_athlete(Uuid::new_v4()).await,
            Err(StorageError::NotFound)
        ));
        assert!(matches!(
            session.update_category(&category("Scale")).await,
            Err(StorageError::NotFound)
        ));
    }
}
