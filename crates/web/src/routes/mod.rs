use axum::Router;

use crate::SharedStore;
use crate::features::{athletes, categories, training_centers};

pub fn api_routes() -> Router<SharedStore> {
    Router::new()
        .nest("/categories", categories::routes::routes())
        .nest("/training-centers", training_centers::routes::routes())
        .nest("/athletes", athletes::routes::routes())
}
