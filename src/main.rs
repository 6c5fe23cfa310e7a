use axum::{routing::get, Router};
use order_management_rust::{api, create_pool, AppConfig, ReportService};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::fmt::time::ChronoLocal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志 - 使用本地时间格式
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(true)
        .with_level(true)
        .init();

    // 加载配置
    let config = AppConfig::from_env();
    info!("Starting server with config: {:?}", config);

    // 创建数据库连接池
    let pool = create_pool(&config.database.url).await?;
    info!("Database pool created");

    // 报表服务 (只读, 共享连接池)
    let service = Arc::new(ReportService::new(pool));

    // 跨域: 放开所有来源/方法/头
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // 构建路由
    let app = Router::new()
        .route("/health", get(api::health_check))
        .route(
            "/api/OrderManagement/invoice/:order_id",
            get(api::get_invoice),
        )
        .route(
            "/api/OrderManagement/ordersdistributionreport",
            get(api::get_orders_distribution_report),
        )
        .with_state(service)
        .layer(ServiceBuilder::new().layer(cors));

    // 启动服务器
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Server listening on {}", addr);
    info!("API Endpoints:");
    info!("  GET /api/OrderManagement/invoice/:order_id        - invoice lines for one order");
    info!("  GET /api/OrderManagement/ordersdistributionreport - orders per city");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
