use storage::{
    EntityStore,
    dto::athlete::{AthleteResponse, CreateAthleteRequest, UpdateAthleteRequest},
    models::{Athlete, AthleteFilter, AthleteView, creation_timestamp},
};
use uuid::Uuid;

use crate::error::{ApiResult, WebError};

fn not_found(id: Uuid) -> WebError {
    WebError::NotFound(format!("Athlete not found with id: {}", id))
}

/// Create a new athlete.
///
/// The category and training center are referenced by name and must already
/// exist; otherwise the request is rejected before anything is written.
pub async fn create_athlete(
    store: &dyn EntityStore,
    request: CreateAthleteRequest,
) -> ApiResult<AthleteResponse> {
    let mut session = store.begin().await?;

    let category = session
        .find_category_by_name(&request.category.name)
        .await?
        .ok_or_else(|| {
            WebError::BadRequest(format!("Category {} not found", request.category.name))
        })?;

    let training_center = session
        .find_training_center_by_name(&request.training_center.name)
        .await?
        .ok_or_else(|| {
            WebError::BadRequest(format!(
                "Training center {} not found",
                request.training_center.name
            ))
        })?;

    let athlete = Athlete {
        id: Uuid::new_v4(),
        name: request.name,
        tax_id: request.tax_id,
        age: request.age,
        weight: request.weight,
        height: request.height,
        sex: request.sex,
        category_id: category.id,
        training_center_id: training_center.id,
        created_at: creation_timestamp(),
    };

    session.insert_athlete(&athlete).await?;
    session.commit().await?;

    tracing::info!(
        athlete_id = %athlete.id,
        category = %category.name,
        training_center = %training_center.name,
        "Athlete created"
    );

    Ok(AthleteView {
        athlete,
        category,
        training_center,
    }
    .into())
}

/// List athletes matching the filter
pub async fn list_athletes(
    store: &dyn EntityStore,
    filter: AthleteFilter,
) -> ApiResult<Vec<AthleteResponse>> {
    let mut session = store.begin().await?;
    let athletes = session.list_athletes(&filter).await?;

    tracing::debug!(count = athletes.len(), "Athletes listed");
    Ok(athletes.into_iter().map(AthleteResponse::from).collect())
}

/// Get athlete by id
pub async fn get_athlete(store: &dyn EntityStore, id: Uuid) -> ApiResult<AthleteResponse> {
    let mut session = store.begin().await?;
    let view = session.find_athlete(id).await?.ok_or_else(|| not_found(id))?;

    Ok(view.into())
}

/// Patch an athlete's own attributes, changing only the supplied fields
pub async fn update_athlete(
    store: &dyn EntityStore,
    id: Uuid,
    request: UpdateAthleteRequest,
) -> ApiResult<AthleteResponse> {
    let mut session = store.begin().await?;
    let mut view = session.find_athlete(id).await?.ok_or_else(|| not_found(id))?;

    request.apply_to(&mut view.athlete);
    session.update_athlete(&view.athlete).await?;
    session.commit().await?;

    tracing::info!(athlete_id = %id, "Athlete updated");
    Ok(view.into())
}

/// Delete an athlete
pub async fn delete_athlete(store: &dyn EntityStore, id: Uuid) -> ApiResult<()> {
    let mut session = store.begin().await?;
    session.find_athlete(id).await?.ok_or_else(|| not_found(id))?;

    session.delete_athlete(id).await?;
    session.commit().await?;

    tracing::info!(athlete_id = %id, "Athlete deleted");
    Ok(())
}
