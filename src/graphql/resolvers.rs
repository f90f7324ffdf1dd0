//! Hand-written resolvers. Operation names and field casing match the REST
//! wire format (snake_case fields, PascalCase operations).

use std::sync::Arc;

use async_graphql::{ComplexObject, Context, Object, Result};

use crate::models::{DeletedProduct, Product, ProductConnection, User};
use crate::requests::{CreateProductRequest, UpdateProductRequest, UriId, UserProductsQuery};
use crate::service::Service;

fn service<'a>(ctx: &Context<'a>) -> &'a Arc<dyn Service> {
    ctx.data_unchecked::<Arc<dyn Service>>()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    #[graphql(name = "GetProduct")]
    async fn get_product(&self, ctx: &Context<'_>, input: UriId) -> Result<Product> {
        input.validate()?;
        Ok(service(ctx).get_product(input.id).await?)
    }

    #[graphql(name = "GetUser")]
    async fn get_user(&self, ctx: &Context<'_>, input: UriId) -> Result<User> {
        input.validate()?;
        Ok(service(ctx).get_user(input.id).await?)
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    #[graphql(name = "CreateProduct")]
    async fn create_product(
        &self,
        ctx: &Context<'_>,
        input: CreateProductRequest,
    ) -> Result<Product> {
        input.validate()?;
        Ok(service(ctx).create_product(input).await?)
    }

    #[graphql(name = "UpdateProduct")]
    async fn update_product(
        &self,
        ctx: &Context<'_>,
        input: UpdateProductRequest,
    ) -> Result<Product> {
        input.validate()?;
        Ok(service(ctx).update_product(input).await?)
    }

    #[graphql(name = "DeleteProduct")]
    async fn delete_product(&self, ctx: &Context<'_>, input: UriId) -> Result<DeletedProduct> {
        input.validate()?;
        Ok(service(ctx).delete_product(input.id).await?)
    }
}

#[ComplexObject]
impl Product {
    #[graphql(complexity = "crate::graphql::complexity::nested_user(child_complexity)")]
    async fn user(&self, ctx: &Context<'_>) -> Result<User> {
        Ok(service(ctx).get_user(self.user_id).await?)
    }
}

#[ComplexObject]
impl User {
    #[graphql(
        complexity = "crate::graphql::complexity::products_page(child_complexity, first)"
    )]
    async fn products(
        &self,
        ctx: &Context<'_>,
        first: Option<i64>,
        after: Option<String>,
    ) -> Result<ProductConnection> {
        let query = UserProductsQuery { first, after };
        query.validate()?;
        Ok(service(ctx).user_products(self.id, query).await?)
    }
}
