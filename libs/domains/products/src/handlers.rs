//! HTTP handlers for the Products API
//!
//! Every route requires a valid bearer token.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, patch, post},
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestResponse, ConflictResponse, InternalServerErrorResponse, NotFoundResponse,
        UnauthorizedResponse, ValidationFailedResponse,
    },
    jwt_auth_middleware, ApiResponse, JwtAuth, UuidPath, ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{
    CreateProduct, Discount, DiscountKind, Inventory, InventoryStatus, Metadata, Price, Product,
    ProductFilter, ProductPage, SetDiscountRequest, UpdateInventoryRequest, UpdatePriceRequest,
};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for the Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_price,
        set_discount,
        update_inventory,
        delete_product,
    ),
    components(
        schemas(
            Product, ProductPage, CreateProduct, UpdatePriceRequest,
            SetDiscountRequest, UpdateInventoryRequest, ProductFilter,
            Price, Discount, DiscountKind, Inventory, InventoryStatus, Metadata
        ),
        responses(
            NotFoundResponse,
            BadRequestResponse,
            ValidationFailedResponse,
            ConflictResponse,
            UnauthorizedResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(
    service: ProductService<R>,
    jwt_auth: JwtAuth,
) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products))
        .route("/create", post(create_product))
        .route("/update-inventory", patch(update_inventory))
        .route("/{id}", get(get_product).delete(delete_product))
        .route("/{id}/price", patch(update_price))
        .route("/{id}/discount", post(set_discount))
        .layer(middleware::from_fn_with_state(jwt_auth, jwt_auth_middleware))
        .with_state(shared_service)
}

/// List products with optional filters
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(ProductFilter),
    responses(
        (status = 200, description = "Page of products with filtered total", body = ProductPage),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Query(filter): Query<ProductFilter>,
) -> ProductResult<impl IntoResponse> {
    let (products, total) = service.list_products(filter).await?;
    Ok(Json(ApiResponse::new(
        "Products retrieved successfully",
        ProductPage { products, total },
    )))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "/create",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created successfully", body = Product),
        (status = 401, response = UnauthorizedResponse),
        (status = 409, response = ConflictResponse),
        (status = 422, response = ValidationFailedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Product created successfully", product)),
    ))
}

/// Get a single product by ID
///
/// Soft-deleted products are still returned by this endpoint.
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
) -> ProductResult<impl IntoResponse> {
    let product = service.get_product(id).await?;
    Ok(Json(ApiResponse::new(
        "Product retrieved successfully",
        product,
    )))
}

/// Update a product's price fields
#[utoipa::path(
    patch,
    path = "/{id}/price",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = UpdatePriceRequest,
    responses(
        (status = 200, description = "Product price updated successfully", body = Product),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 422, response = ValidationFailedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_price<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdatePriceRequest>,
) -> ProductResult<impl IntoResponse> {
    let product = service.update_price(id, input).await?;
    Ok(Json(ApiResponse::new(
        "Product price updated successfully",
        product,
    )))
}

/// Set a discount on a product and recompute its current price
#[utoipa::path(
    post,
    path = "/{id}/discount",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = SetDiscountRequest,
    responses(
        (status = 200, description = "Product discount set successfully", body = Product),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 422, response = ValidationFailedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn set_discount<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<SetDiscountRequest>,
) -> ProductResult<impl IntoResponse> {
    let product = service.set_discount(id, input).await?;
    Ok(Json(ApiResponse::new(
        "Product discount set successfully",
        product,
    )))
}

/// Update a product's inventory (product id in the body)
#[utoipa::path(
    patch,
    path = "/update-inventory",
    tag = "Products",
    request_body = UpdateInventoryRequest,
    responses(
        (status = 200, description = "Product inventory updated successfully", body = Product),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 422, response = ValidationFailedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_inventory<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(input): ValidatedJson<UpdateInventoryRequest>,
) -> ProductResult<impl IntoResponse> {
    let product = service.update_inventory(input).await?;
    Ok(Json(ApiResponse::new(
        "Product inventory updated successfully",
        product,
    )))
}

/// Soft delete a product
///
/// Deleting an already-deleted product is rejected with 400.
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted successfully", body = Product),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    UuidPath(id): UuidPath,
) -> ProductResult<impl IntoResponse> {
    let product = service.delete_product(id).await?;
    Ok(Json(ApiResponse::new(
        "Product deleted successfully",
        product,
    )))
}
