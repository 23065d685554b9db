use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpResponse};
use chrono::{Duration, Utc};
use serde::Serialize;
use std::path::Path;

use crate::models::Order;
use crate::token;

use super::error::{ApiError, ApiResult};
use super::state::ApiState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceResponse {
    pub order_id: String,
    pub total: f64,
    pub token: String,
}

/// Render an invoice for the submitted order and hand back a signed,
/// time-limited download token alongside the computed total.
pub async fn generate_invoice(
    data: web::Json<Order>,
    state: web::Data<ApiState>,
) -> ApiResult<HttpResponse> {
    let order = data.into_inner();
    if order.items.is_empty() {
        return Err(ApiError::bad_request("Invalid order data"));
    }

    let artifact = state.generator.render(&order).map_err(|e| {
        tracing::error!("failed to render invoice: {}", e);
        ApiError::from(e)
    })?;

    let expires_at = Utc::now() + Duration::minutes(state.config.token_ttl_minutes);
    let token = token::issue(
        &state.config.jwt_secret,
        &artifact.path.to_string_lossy(),
        &artifact.order_id,
        expires_at,
    )?;

    tracing::info!(order_id = %artifact.order_id, pages = artifact.pages, "invoice generated");

    Ok(HttpResponse::Ok().json(InvoiceResponse {
        order_id: artifact.order_id,
        total: artifact.total,
        token,
    }))
}

/// Verify a download token and stream the referenced invoice as an
/// attachment.
pub async fn download_invoice(
    path: web::Path<String>,
    state: web::Data<ApiState>,
) -> ApiResult<HttpResponse> {
    let claims = token::verify(&state.config.jwt_secret, &path.into_inner())?;

    let file = Path::new(&claims.file);
    if tokio::fs::metadata(file).await.is_err() {
        return Err(ApiError::not_found("File not found"));
    }
    let bytes = tokio::fs::read(file).await?;

    Ok(HttpResponse::Ok()
        .content_type("application/pdf")
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(format!("{}.pdf", claims.order))],
        })
        .body(bytes))
}
