use storage::{
    EntityStore,
    dto::category::{CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest},
    models::Category,
};
use uuid::Uuid;

use crate::error::{ApiResult, WebError};

fn not_found(id: Uuid) -> WebError {
    WebError::NotFound(format!("Category not found with id: {}", id))
}

/// Create a new category
pub async fn create_category(
    store: &dyn EntityStore,
    request: CreateCategoryRequest,
) -> ApiResult<CategoryResponse> {
    let category = Category {
        id: Uuid::new_v4(),
        name: request.name,
    };

    let mut session = store.begin().await?;
    session.insert_category(&category).await?;
    session.commit().await?;

    tracing::info!(category_id = %category.id, name = %category.name, "Category created");
    Ok(category.into())
}

/// List all categories
pub async fn list_categories(store: &dyn EntityStore) -> ApiResult<Vec<CategoryResponse>> {
    let mut session = store.begin().await?;
    let categories = session.list_categories().await?;

    Ok(categories.into_iter().map(CategoryResponse::from).collect())
}

/// Get category by id
pub async fn get_category(store: &dyn EntityStore, id: Uuid) -> ApiResult<CategoryResponse> {
    let mut session = store.begin().await?;
    let category = session.find_category(id).await?.ok_or_else(|| not_found(id))?;

    tracing::debug!(category_id = %id, "Category loaded");
    Ok(category.into())
}

/// Patch a category, changing only the supplied fields
pub async fn update_category(
    store: &dyn EntityStore,
    id: Uuid,
    request: UpdateCategoryRequest,
) -> ApiResult<CategoryResponse> {
    let mut session = store.begin().await?;
    let mut category = session.find_category(id).await?.ok_or_else(|| not_found(id))?;

    request.apply_to(&mut category);
    session.update_category(&category).await?;
    session.commit().await?;

    tracing::info!(category_id = %id, "Category updated");
    Ok(category.into())
}

/// Delete a category
pub async fn delete_category(store: &dyn EntityStore, id: Uuid) -> ApiResult<()> {
    let mut session = store.begin().await?;
    session.find_category(id).await?.ok_or_else(|| not_found(id))?;

    session.delete_category(id).await?;
    session.commit().await?;

    tracing::info!(category_id = %id, "Category deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::{MemoryStore, error::StorageError};

    fn request(name: &str) -> CreateCategoryRequest {
        CreateCategoryRequest {
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_then_get_round_trips() {
        let store = MemoryStore::new();

        let created = create_category(&store, request("Scale")).await.unwrap();
        let fetched = get_category(&store, created.id).await.unwrap();

        assert_eq!(created, fetched);
        assert_eq!(fetched.name, "Scale");
    }

    #[tokio::test]
    async fn test_duplicate_name_is_a_conflict() {
        let store = MemoryStore::new();
        create_category(&store, request("Scale")).await.unwrap();

        let err = create_category(&store, request("Scale")).await.unwrap_err();
        assert!(matches!(
            err,
            WebError::Storage(StorageError::ConstraintViolation { .. })
        ));
        assert_eq!(list_categories(&store).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_patch_keeps_name() {
        let store = MemoryStore::new();
        let created = create_category(&store, request("Scale")).await.unwrap();

        let updated = update_category(&store, created.id, UpdateCategoryRequest::default())
            .await
            .unwrap();
        assert_eq!(updated, created);
    }

    #[tokio::test]
    async fn test_patch_renames() {
        let store = MemoryStore::new();
        let created = create_category(&store, request("Scale")).await.unwrap();

        let patch = UpdateCategoryRequest {
            name: Some("Elite".to_string()),
        };
        let updated = update_category(&store, created.id, patch).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(get_category(&store, created.id).await.unwrap().name, "Elite");
    }

    #[tokio::test]
    async fn test_missing_category_is_not_found_everywhere() {
        let store = MemoryStore::new();
        let id = Uuid::new_v4();

        assert!(matches!(
            get_category(&store, id).await,
            Err(WebError::NotFound(_))
        ));
        assert!(matches!(
            update_category(&store, id, UpdateCategoryRequest::default()).await,
            Err(WebError::NotFound(_))
        ));
        assert!(matches!(
            delete_category(&store, id).await,
            Err(WebError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_removes_category() {
        let store = MemoryStore::new();
        let created = create_category(&store, request("Scale")).await.unwrap();

        delete_category(&store, created.id).await.unwrap();

        assert!(matches!(
            get_category(&store, created.id).await,
            Err(WebError::NotFound(_))
        ));
        assert!(matches!(
            delete_category(&store, created.id).await,
            Err(WebError::NotFound(_))
        ));
    }
}
