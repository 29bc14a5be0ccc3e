use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::category::CategoryResponse;
use super::training_center::TrainingCenterResponse;
use crate::models::{Athlete, AthleteFilter, AthleteView};

/// Reference to an existing category by its name
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CategoryRef {
    #[validate(length(min = 1, max = 30))]
    #[schema(example = "Scale")]
    pub name: String,
}

/// Reference to an existing training center by its name
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct TrainingCenterRef {
    #[validate(length(min = 1, max = 20))]
    #[schema(example = "CT king")]
    pub name: String,
}

/// Request payload for creating a new athlete
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateAthleteRequest {
    #[validate(length(
        min = 1,
        max = 50,
        message = "Name must be between 1 and 50 characters"
    ))]
    #[schema(example = "Joao")]
    pub name: String,

    #[validate(length(
        min = 1,
        max = 11,
        message = "Tax id must be between 1 and 11 characters"
    ))]
    #[schema(example = "12345678900")]
    pub tax_id: String,

    #[validate(range(min = 0, max = 150))]
    pub age: i32,

    #[serde(with = "rust_decimal::serde::float")]
    #[validate(custom(function = "validate_positive"))]
    #[schema(value_type = f64, example = 75.5)]
    pub weight: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    #[validate(custom(function = "validate_positive"))]
    #[schema(value_type = f64, example = 1.7)]
    pub height: Decimal,

    #[validate(custom(function = "validate_sex"))]
    #[schema(example = "M")]
    pub sex: String,

    #[validate(nested)]
    pub category: CategoryRef,

    #[validate(nested)]
    pub training_center: TrainingCenterRef,
}

/// Request payload for patching an athlete's own attributes.
///
/// Omitted fields keep their stored value. Category and training center
/// cannot be reassigned here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateAthleteRequest {
    #[validate(length(min = 1, max = 50))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 11))]
    pub tax_id: Option<String>,

    #[validate(range(min = 0, max = 150))]
    pub age: Option<i32>,

    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[validate(custom(function = "validate_positive"))]
    #[schema(value_type = Option<f64>)]
    pub weight: Option<Decimal>,

    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[validate(custom(function = "validate_positive"))]
    #[schema(value_type = Option<f64>)]
    pub height: Option<Decimal>,

    #[validate(custom(function = "validate_sex"))]
    pub sex: Option<String>,
}

impl UpdateAthleteRequest {
    pub fn apply_to(self, athlete: &mut Athlete) {
        if let Some(name) = self.name {
            athlete.name = name;
        }
        if let Some(tax_id) = self.tax_id {
            athlete.tax_id = tax_id;
        }
        if let Some(age) = self.age {
            athlete.age = age;
        }
        if let Some(weight) = self.weight {
            athlete.weight = weight;
        }
        if let Some(height) = self.height {
            athlete.height = height;
        }
        if let Some(sex) = self.sex {
            athlete.sex = sex;
        }
    }
}

/// Query parameters accepted when listing athletes
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AthleteListParams {
    /// Exact athlete name
    pub name: Option<String>,
    /// Exact tax id
    pub tax_id: Option<String>,
}

impl From<AthleteListParams> for AthleteFilter {
    fn from(params: AthleteListParams) -> Self {
        Self {
            name: params.name,
            tax_id: params.tax_id,
        }
    }
}

/// Athlete with its category and training center embedded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AthleteResponse {
    pub id: Uuid,
    pub name: String,
    pub tax_id: String,
    pub age: i32,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub weight: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub height: Decimal,
    pub sex: String,
    pub category: CategoryResponse,
    pub training_center: TrainingCenterResponse,
    pub created_at: DateTime<Utc>,
}

impl From<AthleteView> for AthleteResponse {
    fn from(view: AthleteView) -> Self {
        let AthleteView {
            athlete,
            category,
            training_center,
        } = view;

        Self {
            id: athlete.id,
            name: athlete.name,
            tax_id: athlete.tax_id,
            age: athlete.age,
            weight: athlete.weight,
            height: athlete.height,
            sex: athlete.sex,
            category: category.into(),
            training_center: training_center.into(),
            created_at: athlete.created_at,
        }
    }
}

// Validation helpers
fn validate_sex(sex: &str) -> Result<(), validator::ValidationError> {
    const VALID_SEXES: &[&str] = &["M", "F"];

    if VALID_SEXES.contains(&sex) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_sex"))
    }
}

fn validate_positive(value: &Decimal) -> Result<(), validator::ValidationError> {
    if value.is_sign_positive() && !value.is_zero() {
        Ok(())
    } else {
        Err(validator::ValidationError::new("must_be_positive"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::creation_timestamp;

    fn create_request() -> CreateAthleteRequest {
        serde_json::from_value(serde_json::json!({
            "name": "Joao",
            "tax_id": "12345678900",
            "age": 25,
            "weight": 75.5,
            "height": 1.7,
            "sex": "M",
            "category": {"name": "Scale"},
            "training_center": {"name": "CT king"}
        }))
        .unwrap()
    }

    fn stored_athlete() -> Athlete {
        Athlete {
            id: Uuid::new_v4(),
            name: "Joao".to_string(),
            tax_id: "12345678900".to_string(),
            age: 25,
            weight: Decimal::new(755, 1),
            height: Decimal::new(17, 1),
            sex: "M".to_string(),
            category_id: Uuid::new_v4(),
            training_center_id: Uuid::new_v4(),
            created_at: creation_timestamp(),
        }
    }

    #[test]
    fn test_create_request_parses_numbers_as_decimals() {
        let req = create_request();
        assert_eq!(req.weight, Decimal::new(755, 1));
        assert_eq!(req.height, Decimal::new(17, 1));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_invalid_sex_is_rejected() {
        let req = CreateAthleteRequest {
            sex: "X".to_string(),
            ..create_request()
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("sex"));
    }

    #[test]
    fn test_non_positive_weight_is_rejected() {
        let req = CreateAthleteRequest {
            weight: Decimal::ZERO,
            ..create_request()
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_nested_reference_is_validated() {
        let req = CreateAthleteRequest {
            category: CategoryRef {
                name: "x".repeat(31),
            },
            ..create_request()
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_patch_only_touches_supplied_fields() {
        let mut athlete = stored_athlete();
        let before = athlete.clone();

        let patch: UpdateAthleteRequest = serde_json::from_str(r#"{"weight": 80}"#).unwrap();
        assert!(patch.validate().is_ok());
        patch.apply_to(&mut athlete);

        assert_eq!(athlete.weight, Decimal::from(80));
        assert_eq!(
            Athlete {
                weight: before.weight,
                ..athlete.clone()
            },
            before
        );
    }

    #[test]
    fn test_patch_cannot_reassign_category() {
        let parsed =
            serde_json::from_str::<UpdateAthleteRequest>(r#"{"category": {"name": "Elite"}}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_response_serializes_measurements_as_numbers() {
        let athlete = stored_athlete();
        let view = AthleteView {
            category: crate::models::Category {
                id: athlete.category_id,
                name: "Scale".to_string(),
            },
            training_center: crate::models::TrainingCenter {
                id: athlete.training_center_id,
                name: "CT king".to_string(),
                address: "Rua x.0022".to_string(),
                owner: "Marcos2".to_string(),
            },
            athlete,
        };

        let json = serde_json::to_value(AthleteResponse::from(view)).unwrap();
        assert_eq!(json["weight"].as_f64(), Some(75.5));
        assert_eq!(json["category"]["name"], "Scale");
        assert_eq!(json["training_center"]["name"], "CT king");
    }
}
