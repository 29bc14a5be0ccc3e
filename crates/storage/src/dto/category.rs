use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Category;

/// Request payload for creating a new category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateCategoryRequest {
    #[validate(length(
        min = 1,
        max = 30,
        message = "Name must be between 1 and 30 characters"
    ))]
    #[schema(example = "Scale")]
    pub name: String,
}

/// Request payload for patching a category. Omitted fields keep their value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, max = 30))]
    pub name: Option<String>,
}

impl UpdateCategoryRequest {
    pub fn apply_to(self, category: &mut Category) {
        if let Some(name) = self.name {
            category.name = name;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponse {
    pub id: Uuid,
    pub name: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_length_is_enforced() {
        let ok = CreateCategoryRequest {
            name: "Scale".to_string(),
        };
        assert!(ok.validate().is_ok());

        let too_long = CreateCategoryRequest {
            name: "x".repeat(31),
        };
        assert!(too_long.validate().is_err());

        let empty = CreateCategoryRequest {
            name: String::new(),
        };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_empty_patch_leaves_category_untouched() {
        let mut category = Category {
            id: Uuid::new_v4(),
            name: "Scale".to_string(),
        };
        let before = category.clone();

        UpdateCategoryRequest::default().apply_to(&mut category);
        assert_eq!(category, before);
    }

    #[test]
    fn test_patch_overwrites_supplied_name() {
        let mut category = Category {
            id: Uuid::new_v4(),
            name: "Scale".to_string(),
        };
        let id = category.id;

        let patch: UpdateCategoryRequest = serde_json::from_str(r#"{"name":"Elite"}"#).unwrap();
        patch.apply_to(&mut category);

        assert_eq!(category.name, "Elite");
        assert_eq!(category.id, id);
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let parsed = serde_json::from_str::<UpdateCategoryRequest>(r#"{"id":"x"}"#);
        assert!(parsed.is_err());
    }
}
