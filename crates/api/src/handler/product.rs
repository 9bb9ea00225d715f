use crate::{
    middleware::validate::{EntityId, SimpleValidatedJson},
    state::AppState,
};
use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::{
    abstract_trait::{DynProductCommandService, DynProductQueryService},
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest},
        responses::{MessageResponse, ProductResponse},
    },
    errors::{ErrorResponse, HttpError, ValidationErrorResponse},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/products",
    tag = "Product",
    responses(
        (status = 200, description = "All products in creation order", body = Vec<ProductResponse>)
    )
)]
pub async fn get_products(
    Extension(service): Extension<DynProductQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ProductResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 422, description = "ID is not an integer", body = ValidationErrorResponse)
    )
)]
pub async fn get_product(
    Extension(service): Extension<DynProductQueryService>,
    EntityId(id): EntityId,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/products",
    tag = "Product",
    request_body = CreateProductRequest,
    responses(
        (status = 200, description = "Product created", body = ProductResponse),
        (status = 422, description = "Validation error", body = ValidationErrorResponse)
    )
)]
pub async fn create_product(
    Extension(service): Extension<DynProductCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_product(&body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ProductResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ValidationErrorResponse)
    )
)]
pub async fn update_product(
    Extension(service): Extension<DynProductCommandService>,
    EntityId(id): EntityId,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_product(id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = MessageResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn delete_product(
    Extension(service): Extension<DynProductCommandService>,
    EntityId(id): EntityId,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_product(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/products", get(get_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .layer(Extension(app_state.di_container.product_service.query.clone()))
        .layer(Extension(app_state.di_container.product_service.command.clone()))
}

#[cfg(test)]
mod tests {
    use crate::test_helpers::{call, send, test_app};
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode, header::CONTENT_TYPE},
    };
    use serde_json::{Value, json};
    use testresult::TestResult;

    fn test_product() -> Value {
        json!({
            "name": "Test Product",
            "description": "Test Description",
            "price": 99.99,
            "category": "Test Category",
            "tags": ["test", "sample"],
            "in_stock": true
        })
    }

    #[tokio::test]
    async fn create_returns_the_stored_product() -> TestResult {
        let app = test_app();

        let (status, body) = call(&app, Method::POST, "/products", Some(test_product())).await?;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], 1);
        assert_eq!(body["name"], "Test Product");
        assert_eq!(body["description"], "Test Description");
        assert_eq!(body["price"], 99.99);
        assert_eq!(body["category"], "Test Category");
        assert_eq!(body["tags"], json!(["test", "sample"]));
        assert_eq!(body["in_stock"], true);
        assert!(body["created_at"].is_string());
        Ok(())
    }

    #[tokio::test]
    async fn ids_increase_per_create() -> TestResult {
        let app = test_app();

        for expected in 1..=3 {
            let (_, body) = call(&app, Method::POST, "/products", Some(test_product())).await?;
            assert_eq!(body["id"], expected);
        }

        let (status, body) = call(&app, Method::GET, "/products", None).await?;
        assert_eq!(status, StatusCode::OK);
        let ids: Vec<i64> = body
            .as_array()
            .ok_or("list body is not an array")?
            .iter()
            .filter_map(|p| p["id"].as_i64())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
        Ok(())
    }

    #[tokio::test]
    async fn optional_fields_take_their_defaults() -> TestResult {
        let app = test_app();
        let payload = json!({
            "name": "Bare",
            "description": "No extras",
            "price": 5.0,
            "category": "Misc"
        });

        let (status, body) = call(&app, Method::POST, "/products", Some(payload)).await?;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tags"], json!([]));
        assert_eq!(body["in_stock"], true);
        Ok(())
    }

    #[tokio::test]
    async fn get_returns_what_create_returned() -> TestResult {
        let app = test_app();
        let (_, created) = call(&app, Method::POST, "/products", Some(test_product())).await?;

        let (status, fetched) = call(&app, Method::GET, "/products/1", None).await?;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);
        Ok(())
    }

    #[tokio::test]
    async fn partial_update_changes_only_sent_fields() -> TestResult {
        let app = test_app();
        let (_, created) = call(&app, Method::POST, "/products", Some(test_product())).await?;

        let patch = json!({"name": "Updated Product", "price": 149.99});
        let (status, updated) = call(&app, Method::PUT, "/products/1", Some(patch)).await?;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["name"], "Updated Product");
        assert_eq!(updated["price"], 149.99);
        assert_eq!(updated["description"], created["description"]);
        assert_eq!(updated["category"], created["category"]);
        assert_eq!(updated["tags"], created["tags"]);
        assert_eq!(updated["in_stock"], created["in_stock"]);
        assert_eq!(updated["created_at"], created["created_at"]);
        assert_eq!(updated["id"], 1);
        Ok(())
    }

    #[tokio::test]
    async fn empty_update_leaves_the_product_alone() -> TestResult {
        let app = test_app();
        let (_, created) = call(&app, Method::POST, "/products", Some(test_product())).await?;

        let (status, updated) = call(&app, Method::PUT, "/products/1", Some(json!({}))).await?;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated, created);
        Ok(())
    }

    #[tokio::test]
    async fn falsy_values_still_overwrite() -> TestResult {
        let app = test_app();
        call(&app, Method::POST, "/products", Some(test_product())).await?;

        let patch = json!({"in_stock": false, "tags": [], "price": 0.0});
        let (status, updated) = call(&app, Method::PUT, "/products/1", Some(patch)).await?;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["in_stock"], false);
        assert_eq!(updated["tags"], json!([]));
        assert_eq!(updated["price"], 0.0);
        Ok(())
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() -> TestResult {
        let app = test_app();
        call(&app, Method::POST, "/products", Some(test_product())).await?;

        let (status, body) = call(&app, Method::DELETE, "/products/1", None).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Product deleted successfully"}));

        let (status, body) = call(&app, Method::GET, "/products/1", None).await?;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"detail": "Product not found"}));
        Ok(())
    }

    #[tokio::test]
    async fn unknown_id_is_404_for_get_put_and_delete() -> TestResult {
        let app = test_app();
        let not_found = json!({"detail": "Product not found"});

        let (status, body) = call(&app, Method::GET, "/products/999", None).await?;
        assert_eq!((status, &body), (StatusCode::NOT_FOUND, &not_found));

        let patch = json!({"name": "Ghost"});
        let (status, body) = call(&app, Method::PUT, "/products/999", Some(patch)).await?;
        assert_eq!((status, &body), (StatusCode::NOT_FOUND, &not_found));

        let (status, body) = call(&app, Method::DELETE, "/products/999", None).await?;
        assert_eq!((status, &body), (StatusCode::NOT_FOUND, &not_found));
        Ok(())
    }

    #[tokio::test]
    async fn deleted_ids_are_not_reused() -> TestResult {
        let app = test_app();
        call(&app, Method::POST, "/products", Some(test_product())).await?;
        call(&app, Method::POST, "/products", Some(test_product())).await?;
        call(&app, Method::DELETE, "/products/2", None).await?;

        let (_, body) = call(&app, Method::POST, "/products", Some(test_product())).await?;

        assert_eq!(body["id"], 3);
        Ok(())
    }

    #[tokio::test]
    async fn missing_required_fields_are_rejected_without_storing() -> TestResult {
        let app = test_app();

        let payload = json!({"name": "Test"});
        let (status, body) = call(&app, Method::POST, "/products", Some(payload)).await?;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let missing: Vec<_> = body["detail"]
            .as_array()
            .ok_or("detail should be a list")?
            .iter()
            .map(|item| (item["loc"].clone(), item["type"].clone()))
            .collect();
        assert_eq!(
            missing,
            vec![
                (json!(["body", "description"]), json!("missing")),
                (json!(["body", "price"]), json!("missing")),
                (json!(["body", "category"]), json!("missing")),
            ]
        );

        let (_, list) = call(&app, Method::GET, "/products", None).await?;
        assert_eq!(list, json!([]));
        Ok(())
    }

    #[tokio::test]
    async fn rule_violations_are_reported_per_field() -> TestResult {
        let app = test_app();
        let mut payload = test_product();
        payload["name"] = json!("");
        payload["price"] = json!(-1.0);

        let (status, body) = call(&app, Method::POST, "/products", Some(payload)).await?;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"][0]["loc"], json!(["body", "name"]));
        assert_eq!(body["detail"][0]["msg"], "Name is required");
        assert_eq!(body["detail"][1]["loc"], json!(["body", "price"]));
        assert_eq!(body["detail"][1]["msg"], "Price cannot be negative");
        Ok(())
    }

    #[tokio::test]
    async fn null_in_update_is_rejected() -> TestResult {
        let app = test_app();
        call(&app, Method::POST, "/products", Some(test_product())).await?;

        let patch = json!({"name": null});
        let (status, body) = call(&app, Method::PUT, "/products/1", Some(patch)).await?;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"][0]["type"], "type_error");

        let (_, product) = call(&app, Method::GET, "/products/1", None).await?;
        assert_eq!(product["name"], "Test Product");
        Ok(())
    }

    #[tokio::test]
    async fn non_integer_id_is_422() -> TestResult {
        let app = test_app();

        let (status, body) = call(&app, Method::GET, "/products/abc", None).await?;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"][0]["loc"], json!(["path", "id"]));
        assert_eq!(body["detail"][0]["type"], "int_parsing");
        Ok(())
    }

    #[tokio::test]
    async fn malformed_json_is_422_without_storing() -> TestResult {
        let app = test_app();
        let request = Request::builder()
            .method(Method::POST)
            .uri("/products")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from("{\"name\": "))?;

        let (status, body) = send(&app, request).await?;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"][0]["loc"], json!(["body"]));
        assert_eq!(body["detail"][0]["type"], "json_invalid");

        let (_, list) = call(&app, Method::GET, "/products", None).await?;
        assert_eq!(list, json!([]));
        Ok(())
    }

    #[tokio::test]
    async fn body_without_content_type_is_still_decoded() -> TestResult {
        let app = test_app();
        let request = Request::builder()
            .method(Method::POST)
            .uri("/products")
            .body(Body::from(test_product().to_string()))?;

        let (status, body) = send(&app, request).await?;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], 1);
        assert_eq!(body["name"], "Test Product");
        Ok(())
    }
}
