// src/docs.rs
use axum::{response::Html, Json};
use utoipa::OpenApi;

use crate::dtos::product::ProductPayload;
use crate::handlers::product;
use crate::models::product::Product;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Online Retail API",
        version = "1.0.0",
        description = "API documentation for the Online Retail project"
    ),
    paths(
        product::get_products,
        product::get_product,
        product::create_product,
        product::update_product,
        product::delete_product
    ),
    components(schemas(Product, ProductPayload)),
    tags((name = "Products", description = "Product catalog management"))
)]
pub struct ApiDoc;

// GET /api-docs/openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Swagger UI shell; the viewer assets come from the CDN and read the
/// document served by [`openapi_json`].
const SWAGGER_UI_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Online Retail API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js" crossorigin></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({
        url: "/api-docs/openapi.json",
        dom_id: "#swagger-ui",
      });
    };
  </script>
</body>
</html>
"##;

// GET /api-docs
pub async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_UI_HTML)
}
