use crate::service::ReportService;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// 发票接口查询参数
#[derive(Debug, Deserialize)]
pub struct InvoiceParams {
    pub search: Option<String>,
}

/// 分布报表查询参数
#[derive(Debug, Deserialize)]
pub struct DistributionParams {
    pub city: Option<String>,
    pub sort: Option<String>,
}

/// 错误响应体 (只携带错误消息)
#[derive(Debug, Serialize)]
pub struct ProblemResponse {
    pub message: String,
}

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 发票查询接口
pub async fn get_invoice(
    State(service): State<Arc<ReportService>>,
    Path(order_id): Path<i32>,
    Query(params): Query<InvoiceParams>,
) -> Response {
    match service.get_invoice(order_id, params.search.as_deref()).await {
        Ok(rows) => (StatusCode::OK, Json(rows)).into_response(),
        Err(e) => problem(e),
    }
}

/// 城市分布报表接口
pub async fn get_orders_distribution_report(
    State(service): State<Arc<ReportService>>,
    Query(params): Query<DistributionParams>,
) -> Response {
    match service
        .get_orders_distribution_report(params.city.as_deref(), params.sort.as_deref())
        .await
    {
        Ok(rows) => (StatusCode::OK, Json(rows)).into_response(),
        Err(e) => problem(e),
    }
}

/// 唯一的错误出口: 底层失败一律 500 + message
fn problem(err: sqlx::Error) -> Response {
    tracing::error!("report query failed: {}", err);
    let body = ProblemResponse {
        message: err.to_string(),
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn problem_response_carries_only_message() {
        let body = ProblemResponse {
            message: "connection refused".to_string(),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value, serde_json::json!({ "message": "connection refused" }));
    }
}
