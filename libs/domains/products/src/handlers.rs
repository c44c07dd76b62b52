//! HTTP handlers for the products API

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use axum_helpers::{errors::ErrorResponse, JsonBody};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductInput};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for the products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        get_product,
        search_products_by_name,
        create_product,
        update_product,
        delete_product,
        delete_product_by_id,
    ),
    components(schemas(Product, ProductInput, ErrorResponse)),
    tags(
        (name = "Products", description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route(
            "/",
            get(list_products).post(create_product).delete(delete_product),
        )
        .route(
            "/{id}",
            get(get_product)
                .put(update_product)
                .delete(delete_product_by_id),
        )
        .route("/searchLike/{name}", get(search_products_by_name))
        .with_state(shared_service)
}

/// List all products
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "List of all products", body = Vec<Product>),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Vec<Product>>> {
    let products = service.list().await?;
    Ok(Json(products))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, description = "No product with that id", body = ErrorResponse),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<i32>,
) -> ProductResult<Json<Product>> {
    let product = service.get_by_id(id).await?;
    Ok(Json(product))
}

/// Search products whose name contains the given fragment
#[utoipa::path(
    get,
    path = "/searchLike/{name}",
    tag = "Products",
    params(
        ("name" = String, Path, description = "Name fragment to search for")
    ),
    responses(
        (status = 200, description = "Matching products", body = Vec<Product>),
        (status = 404, description = "No product name contains the fragment"),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    )
)]
async fn search_products_by_name<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(name): Path<String>,
) -> ProductResult<Response> {
    let products = service.search_by_name(&name).await?;

    // No matches resolves locally: a bare 404 without an error payload
    if products.is_empty() {
        return Ok(StatusCode::NOT_FOUND.into_response());
    }

    Ok(Json(products).into_response())
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = ProductInput,
    responses(
        (status = 201, description = "Product created with its assigned id", body = Product),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    JsonBody(input): JsonBody<ProductInput>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Update a product by id
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    request_body = ProductInput,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 404, description = "No product with that id"),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<i32>,
    JsonBody(input): JsonBody<ProductInput>,
) -> ProductResult<Response> {
    // The row must already exist. Resolved locally as a bare 404 rather
    // than through the error mapping.
    match service.get_by_id(id).await {
        Ok(_) => {}
        Err(ProductError::NotFound(_)) => return Ok(StatusCode::NOT_FOUND.into_response()),
        Err(e) => return Err(e),
    }

    // The path id wins over any id in the body
    let product = service.update(input, id).await?;
    Ok(Json(product).into_response())
}

/// Delete a product identified by the request body
#[utoipa::path(
    delete,
    path = "",
    tag = "Products",
    request_body = ProductInput,
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Body has no id, or no product with that id"),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    JsonBody(input): JsonBody<ProductInput>,
) -> ProductResult<Response> {
    // A body without an id cannot name a row; resolved locally as 404,
    // as is an id the store does not know
    let Some(id) = input.id else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };

    let product = match service.get_by_id(id).await {
        Ok(product) => product,
        Err(ProductError::NotFound(_)) => return Ok(StatusCode::NOT_FOUND.into_response()),
        Err(e) => return Err(e),
    };
    service.delete(&product).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Delete a product by id
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "No product with that id", body = ErrorResponse),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    )
)]
async fn delete_product_by_id<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<i32>,
) -> ProductResult<StatusCode> {
    // Propagates the not-found condition for missing ids
    service.get_by_id(id).await?;
    service.delete_by_id(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
