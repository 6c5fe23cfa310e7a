use crate::db::query::{self, SortDirection};
use crate::models::{Invoice, OrderDistribution};
use sqlx::PgConnection;

/// 查询指定订单的发票行
pub async fn fetch_invoice_rows(
    conn: &mut PgConnection,
    order_id: i32,
    search_term: Option<&str>,
) -> Result<Vec<Invoice>, sqlx::Error> {
    let mut qb = query::invoice_query(order_id, search_term);
    qb.build_query_as::<Invoice>().fetch_all(conn).await
}

/// 查询城市维度订单分布
pub async fn fetch_city_distribution(
    conn: &mut PgConnection,
    city_filter: Option<&str>,
    sort: SortDirection,
) -> Result<Vec<OrderDistribution>, sqlx::Error> {
    let mut qb = query::distribution_query(city_filter, sort);
    qb.build_query_as::<OrderDistribution>().fetch_all(conn).await
}
