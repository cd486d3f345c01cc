use actix_web::get;
use serde::{Deserialize, Serialize};

use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize, Deserialize)]
pub struct Response {}

#[get("")]
async fn health() -> ApiResult<Response> {
    Ok(ApiResponse::EmptyOk)
}
