//! Request types shared by the REST and GraphQL surfaces, with field-level
//! validation applied after binding.

use async_graphql::InputObject;
use serde::Deserialize;

use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Deserialize, InputObject)]
#[graphql(rename_fields = "snake_case")]
pub struct CreateProductRequest {
    pub name: String,
    pub price: i64,
    pub user_id: i64,
}

impl CreateProductRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("name is required".into()));
        }
        if self.price < 1 {
            return Err(AppError::Validation("price must be at least 1".into()));
        }
        if self.user_id < 1 {
            return Err(AppError::Validation("user_id must be at least 1".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, InputObject)]
#[graphql(rename_fields = "snake_case")]
pub struct UpdateProductRequest {
    /// Comes from the URI on the REST path, from the input object on GraphQL.
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub price: i64,
}

impl UpdateProductRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.id < 1 {
            return Err(AppError::Validation("id must be at least 1".into()));
        }
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("name is required".into()));
        }
        if self.price < 1 {
            return Err(AppError::Validation("price must be at least 1".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, InputObject)]
#[graphql(rename_fields = "snake_case")]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

impl CreateUserRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("name is required".into()));
        }
        if !self.email.contains('@') || self.email.len() < 3 {
            return Err(AppError::Validation("email must be a valid email".into()));
        }
        Ok(())
    }
}

/// Bare id argument, bound from the URI on REST and passed as `input` on
/// GraphQL.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, InputObject)]
#[graphql(name = "UriID", rename_fields = "snake_case")]
pub struct UriId {
    pub id: i64,
}

impl UriId {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.id < 1 {
            return Err(AppError::Validation("id must be at least 1".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ListProductsQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl ListProductsQuery {
    pub fn validate(&self) -> Result<(), AppError> {
        if matches!(self.page, Some(p) if p < 1) {
            return Err(AppError::Validation("page must be at least 1".into()));
        }
        if matches!(self.per_page, Some(p) if p < 1) {
            return Err(AppError::Validation("per_page must be at least 1".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UserProductsQuery {
    pub first: Option<i64>,
    pub after: Option<String>,
}

impl UserProductsQuery {
    pub fn validate(&self) -> Result<(), AppError> {
        if matches!(self.first, Some(f) if f < 1) {
            return Err(AppError::Validation("first must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_product_requires_fields() {
        let ok = CreateProductRequest { name: "chair".into(), price: 100, user_id: 1 };
        assert!(ok.validate().is_ok());
        assert!(CreateProductRequest { name: "  ".into(), ..ok.clone() }.validate().is_err());
        assert!(CreateProductRequest { price: 0, ..ok.clone() }.validate().is_err());
        assert!(CreateProductRequest { user_id: 0, ..ok }.validate().is_err());
    }

    #[test]
    fn create_user_checks_email() {
        let ok = CreateUserRequest { name: "ann".into(), email: "ann@example.com".into() };
        assert!(ok.validate().is_ok());
        assert!(CreateUserRequest { email: "nope".into(), ..ok }.validate().is_err());
    }

    #[test]
    fn user_products_rejects_non_positive_first() {
        assert!(UserProductsQuery { first: Some(0), after: None }.validate().is_err());
        assert!(UserProductsQuery { first: Some(5), after: None }.validate().is_ok());
    }
}
