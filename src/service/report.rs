use crate::db::queries;
use crate::db::query::SortDirection;
use crate::models::{Invoice, OrderDistribution};
use sqlx::PgPool;

/// 报表服务: 只读, 每次调用从池里借一条连接, 返回时归还
pub struct ReportService {
    pool: PgPool,
}

impl ReportService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 查询指定订单的发票行, 可按商品名称/分类模糊过滤
    /// 订单不存在返回空列表, 不视为错误
    pub async fn get_invoice(
        &self,
        order_id: i32,
        search_term: Option<&str>,
    ) -> Result<Vec<Invoice>, sqlx::Error> {
        let mut conn = self.pool.acquire().await?;
        queries::fetch_invoice_rows(&mut conn, order_id, search_term).await
    }

    /// 城市维度订单分布报表, 可按城市过滤并指定订单数排序方向
    pub async fn get_orders_distribution_report(
        &self,
        city_filter: Option<&str>,
        sort_direction: Option<&str>,
    ) -> Result<Vec<OrderDistribution>, sqlx::Error> {
        let sort = SortDirection::from_param(sort_direction);
        let mut conn = self.pool.acquire().await?;
        queries::fetch_city_distribution(&mut conn, city_filter, sort).await
    }
}
