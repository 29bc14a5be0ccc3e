use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::TrainingCenter;

/// Request payload for creating a new training center
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateTrainingCenterRequest {
    #[validate(length(
        min = 1,
        max = 20,
        message = "Name must be between 1 and 20 characters"
    ))]
    #[schema(example = "CT king")]
    pub name: String,

    #[validate(length(
        min = 1,
        max = 60,
        message = "Address must be between 1 and 60 characters"
    ))]
    #[schema(example = "Rua x.002")]
    pub address: String,

    #[validate(length(
        min = 1,
        max = 30,
        message = "Owner must be between 1 and 30 characters"
    ))]
    #[schema(example = "Marcos")]
    pub owner: String,
}

/// Request payload for updating a training center.
///
/// Every field is required and overwrites the stored value.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateTrainingCenterRequest {
    #[validate(length(min = 1, max = 20))]
    pub name: String,

    #[validate(length(min = 1, max = 60))]
    pub address: String,

    #[validate(length(min = 1, max = 30))]
    pub owner: String,
}

impl UpdateTrainingCenterRequest {
    pub fn apply_to(self, training_center: &mut TrainingCenter) {
        training_center.name = self.name;
        training_center.address = self.address;
        training_center.owner = self.owner;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TrainingCenterResponse {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub owner: String,
}

impl From<TrainingCenter> for TrainingCenterResponse {
    fn from(tc: TrainingCenter) -> Self {
        Self {
            id: tc.id,
            name: tc.name,
            address: tc.address,
            owner: tc.owner,
        }
    }
}
