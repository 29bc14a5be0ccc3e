use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::postgres::PgPoolOptions;
use sqlx::{FromRow, PgPool, Postgres, Transaction};
use uuid::Uuid;

use super::{EntityStore, StoreSession};
use crate::error::{Result, StorageError};
use crate::models::{Athlete, AthleteFilter, AthleteView, Category, TrainingCenter};

/// Settings for the Postgres connection pool.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Postgres-backed entity store.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url)
            .await?;

        Ok(Self { pool })
    }

    /// Run embedded migrations from `crates/storage/migrations/`.
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl EntityStore for Database {
    async fn begin(&self) -> Result<Box<dyn StoreSession>> {
        let tx = self.pool.begin().await?;
        Ok(Box::new(PgSession { tx }))
    }
}

pub struct PgSession {
    tx: Transaction<'static, Postgres>,
}

const ATHLETE_VIEW_SELECT: &str = r#"
    SELECT a.id, a.name, a.tax_id, a.age, a.weight, a.height, a.sex,
           a.category_id, a.training_center_id, a.created_at,
           c.name AS category_name,
           t.name AS training_center_name,
           t.address AS training_center_address,
           t.owner AS training_center_owner
    FROM athletes a
    JOIN categories c ON c.id = a.category_id
    JOIN training_centers t ON t.id = a.training_center_id
"#;

#[derive(FromRow)]
struct AthleteViewRow {
    id: Uuid,
    name: String,
    tax_id: String,
    age: i32,
    weight: Decimal,
    height: Decimal,
    sex: String,
    category_id: Uuid,
    training_center_id: Uuid,
    created_at: DateTime<Utc>,
    category_name: String,
    training_center_name: String,
    training_center_address: String,
    training_center_owner: String,
}

impl From<AthleteViewRow> for AthleteView {
    fn from(row: AthleteViewRow) -> Self {
        Self {
            category: Category {
                id: row.category_id,
                name: row.category_name,
            },
            training_center: TrainingCenter {
                id: row.training_center_id,
                name: row.training_center_name,
                address: row.training_center_address,
                owner: row.training_center_owner,
            },
            athlete: Athlete {
                id: row.id,
                name: row.name,
                tax_id: row.tax_id,
                age: row.age,
                weight: row.weight,
                height: row.height,
                sex: row.sex,
                category_id: row.category_id,
                training_center_id: row.training_center_id,
                created_at: row.created_at,
            },
        }
    }
}

fn expect_one_row(rows_affected: u64) -> Result<()> {
    if rows_affected == 0 {
        return Err(StorageError::NotFound);
    }
    Ok(())
}

#[async_trait]
impl StoreSession for PgSession {
    async fn insert_category(&mut self, category: &Category) -> Result<()> {
        sqlx::query("INSERT INTO categories (id, name) VALUES ($1, $2)")
            .bind(category.id)
            .bind(&category.name)
            .execute(&mut *self.tx)
            .await
            .map_err(StorageError::from_sqlx)?;

        Ok(())
    }

    async fn list_categories(&mut self) -> Result<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>("SELECT id, name FROM categories")
            .fetch_all(&mut *self.tx)
            .await?;

        Ok(categories)
    }

    async fn find_category(&mut self, id: Uuid) -> Result<Option<Category>> {
        let category =
            sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE id = $1")
                .bind(id)
                .fetch_optional(&mut *self.tx)
                .await?;

        Ok(category)
    }

    async fn find_category_by_name(&mut self, name: &str) -> Result<Option<Category>> {
        let category =
            sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE name = $1")
                .bind(name)
                .fetch_optional(&mut *self.tx)
                .await?;

        Ok(category)
    }

    async fn update_category(&mut self, category: &Category) -> Result<()> {
        let result = sqlx::query("UPDATE categories SET name = $2 WHERE id = $1")
            .bind(category.id)
            .bind(&category.name)
            .execute(&mut *self.tx)
            .await
            .map_err(StorageError::from_sqlx)?;

        expect_one_row(result.rows_affected())
    }

    async fn delete_category(&mut self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&mut *self.tx)
            .await
            .map_err(StorageError::from_sqlx)?;

        expect_one_row(result.rows_affected())
    }

    async fn insert_training_center(&mut self, training_center: &TrainingCenter) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO training_centers (id, name, address, owner)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(training_center.id)
        .bind(&training_center.name)
        .bind(&training_center.address)
        .bind(&training_center.owner)
        .execute(&mut *self.tx)
        .await
        .map_err(StorageError::from_sqlx)?;

        Ok(())
    }

    async fn list_training_centers(&mut self) -> Result<Vec<TrainingCenter>> {
        let centers = sqlx::query_as::<_, TrainingCenter>(
            "SELECT id, name, address, owner FROM training_centers",
        )
        .fetch_all(&mut *self.tx)
        .await?;

        Ok(centers)
    }

    async fn find_training_center(&mut self, id: Uuid) -> Result<Option<TrainingCenter>> {
        let center = sqlx::query_as::<_, TrainingCenter>(
            "SELECT id, name, address, owner FROM training_centers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *self.tx)
        .await?;

        Ok(center)
    }

    async fn find_training_center_by_name(
        &mut self,
        name: &str,
    ) -> Result<Option<TrainingCenter>> {
        let center = sqlx::query_as::<_, TrainingCenter>(
            "SELECT id, name, address, owner FROM training_centers WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&mut *self.tx)
        .await?;

        Ok(center)
    }

    async fn update_training_center(&mut self, training_center: &TrainingCenter) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE training_centers
            SET name = $2,
                address = $3,
                owner = $4
            WHERE id = $1
            "#,
        )
        .bind(training_center.id)
        .bind(&training_center.name)
        .bind(&training_center.address)
        .bind(&training_center.owner)
        .execute(&mut *self.tx)
        .await
        .map_err(StorageError::from_sqlx)?;

        expect_one_row(result.rows_affected())
    }

    async fn delete_training_center(&mut self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM training_centers WHERE id = $1")
            .bind(id)
            .execute(&mut *self.tx)
            .await
            .map_err(StorageError::from_sqlx)?;

        expect_one_row(result.rows_affected())
    }

    async fn insert_athlete(&mut self, athlete: &Athlete) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO athletes (
                id, name, tax_id, age, weight, height, sex,
                category_id, training_center_id, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(athlete.id)
        .bind(&athlete.name)
        .bind(&athlete.tax_id)
        .bind(athlete.age)
        .bind(athlete.weight)
        .bind(athlete.height)
        .bind(&athlete.sex)
        .bind(athlete.category_id)
        .bind(athlete.training_center_id)
        .bind(athlete.created_at)
        .execute(&mut *self.tx)
        .await
        .map_err(StorageError::from_sqlx)?;

        Ok(())
    }

    async fn list_athletes(&mut self, filter: &AthleteFilter) -> Result<Vec<AthleteView>> {
        let query = format!(
            "{ATHLETE_VIEW_SELECT} WHERE ($1::text IS NULL OR a.name = $1) \
             AND ($2::text IS NULL OR a.tax_id = $2)"
        );

        let rows = sqlx::query_as::<_, AthleteViewRow>(&query)
            .bind(filter.name.as_deref())
            .bind(filter.tax_id.as_deref())
            .fetch_all(&mut *self.tx)
            .await?;

        Ok(rows.into_iter().map(AthleteView::from).collect())
    }

    async fn find_athlete(&mut self, id: Uuid) -> Result<Option<AthleteView>> {
        let query = format!("{ATHLETE_VIEW_SELECT} WHERE a.id = $1");

        let row = sqlx::query_as::<_, AthleteViewRow>(&query)
            .bind(id)
            .fetch_optional(&mut *self.tx)
            .await?;

        Ok(row.map(AthleteView::from))
    }

    async fn update_athlete(&mut self, athlete: &Athlete) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE athletes
            SET name = $2,
                tax_id = $3,
                age = $4,
                weight = $5,
                height = $6,
                sex = $7
            WHERE id = $1
            "#,
        )
        .bind(athlete.id)
        .bind(&athlete.name)
        .bind(&athlete.tax_id)
        .bind(athlete.age)
        .bind(athlete.weight)
        .bind(athlete.height)
        .bind(&athlete.sex)
        .execute(&mut *self.tx)
        .await
        .map_err(StorageError::from_sqlx)?;

        expect_one_row(result.rows_affected())
    }

    async fn delete_athlete(&mut self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM athletes WHERE id = $1")
            .bind(id)
            .execute(&mut *self.tx)
            .await
            .map_err(StorageError::from_sqlx)?;

        expect_one_row(result.rows_affected())
    }

    async fn commit(self: Box<Self>) -> Result<()> {
        self.tx.commit().await.map_err(StorageError::from_sqlx)?;
        Ok(())
    }
}
