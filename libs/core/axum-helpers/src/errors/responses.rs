//! Reusable OpenAPI response definitions for the `{"detail": ...}` error body.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({ "detail": "Protein not found" })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - invalid query parameter",
    content_type = "application/json",
    example = json!({ "detail": "limit must be greater than 0" })
)]
pub struct BadRequestResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error - the cause is included in `detail`",
    content_type = "application/json",
    example = json!({ "detail": "Server selection timeout: No available servers" })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);
