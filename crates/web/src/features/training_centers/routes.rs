use axum::{Router, routing::get};

use super::handlers::{
    create_training_center, delete_training_center, get_training_center, list_training_centers,
    update_training_center,
};
use crate::SharedStore;

pub fn routes() -> Router<SharedStore> {
    Router::new()
        .route("/", get(list_training_centers).post(create_training_center))
        .route(
            "/:id",
            get(get_training_center)
                .patch(update_training_center)
                .delete(delete_training_center),
        )
}
