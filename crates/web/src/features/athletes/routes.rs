use axum::{Router, routing::get};

use super::handlers::{
    create_athlete, delete_athlete, get_athlete, list_athletes, update_athlete,
};
use crate::SharedStore;

pub fn routes() -> Router<SharedStore> {
    Router::new()
        .route("/", get(list_athletes).post(create_athlete))
        .route(
            "/:id",
            get(get_athlete).patch(update_athlete).delete(delete_athlete),
        )
}
