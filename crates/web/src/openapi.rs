use utoipa::OpenApi;

use crate::features::{athletes, categories, training_centers};

#[derive(OpenApi)]
#[openapi(
    info(title = "Workout API"),
    paths(
        categories::handlers::list_categories,
        categories::handlers::get_category,
        categories::handlers::create_category,
        categories::handlers::update_category,
        categories::handlers::delete_category,
        training_centers::handlers::list_training_centers,
        training_centers::handlers::get_training_center,
        training_centers::handlers::create_training_center,
        training_centers::handlers::update_training_center,
        training_centers::handlers::delete_training_center,
        athletes::handlers::list_athletes,
        athletes::handlers::get_athlete,
        athletes::handlers::create_athlete,
        athletes::handlers::update_athlete,
        athletes::handlers::delete_athlete,
    ),
    components(
        schemas(
            storage::dto::category::CreateCategoryRequest,
            storage::dto::category::UpdateCategoryRequest,
            storage::dto::category::CategoryResponse,
            storage::dto::training_center::CreateTrainingCenterRequest,
            storage::dto::training_center::UpdateTrainingCenterRequest,
            storage::dto::training_center::TrainingCenterResponse,
            storage::dto::athlete::CreateAthleteRequest,
            storage::dto::athlete::UpdateAthleteRequest,
            storage::dto::athlete::AthleteResponse,
            storage::dto::athlete::CategoryRef,
            storage::dto::athlete::TrainingCenterRef,
        )
    ),
    tags(
        (name = "categories", description = "Category endpoints"),
        (name = "training-centers", description = "Training center endpoints"),
        (name = "athletes", description = "Athlete endpoints"),
    )
)]
pub struct ApiDoc;
