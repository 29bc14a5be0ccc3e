use storage::{
    EntityStore,
    dto::training_center::{
        CreateTrainingCenterRequest, TrainingCenterResponse, UpdateTrainingCenterRequest,
    },
    models::TrainingCenter,
};
use uuid::Uuid;

use crate::error::{ApiResult, WebError};

fn not_found(id: Uuid) -> WebError {
    WebError::NotFound(format!("Training center not found with id: {}", id))
}

/// Create a new training center
pub async fn create_training_center(
    store: &dyn EntityStore,
    request: CreateTrainingCenterRequest,
) -> ApiResult<TrainingCenterResponse> {
    let training_center = TrainingCenter {
        id: Uuid::new_v4(),
        name: request.name,
        address: request.address,
        owner: request.owner,
    };

    let mut session = store.begin().await?;
    session.insert_training_center(&training_center).await?;
    session.commit().await?;

    tracing::info!(
        training_center_id = %training_center.id,
        name = %training_center.name,
        "Training center created"
    );
    Ok(training_center.into())
}

/// List all training centers
pub async fn list_training_centers(
    store: &dyn EntityStore,
) -> ApiResult<Vec<TrainingCenterResponse>> {
    let mut session = store.begin().await?;
    let centers = session.list_training_centers().await?;

    Ok(centers.into_iter().map(TrainingCenterResponse::from).collect())
}

/// Get training center by id
pub async fn get_training_center(
    store: &dyn EntityStore,
    id: Uuid,
) -> ApiResult<TrainingCenterResponse> {
    let mut session = store.begin().await?;
    let center = session
        .find_training_center(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(center.into())
}

/// Replace every field of a training center
pub async fn update_training_center(
    store: &dyn EntityStore,
    id: Uuid,
    request: UpdateTrainingCenterRequest,
) -> ApiResult<TrainingCenterResponse> {
    let mut session = store.begin().await?;
    let mut center = session
        .find_training_center(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    request.apply_to(&mut center);
    session.update_training_center(&center).await?;
    session.commit().await?;

    tracing::info!(training_center_id = %id, "Training center updated");
    Ok(center.into())
}

/// Delete a training center
pub async fn delete_training_center(store: &dyn EntityStore, id: Uuid) -> ApiResult<()> {
    let mut session = store.begin().await?;
    session
        .find_training_center(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    session.delete_training_center(id).await?;
    session.commit().await?;

    tracing::info!(training_center_id = %id, "Training center deleted");
    Ok(())
}
