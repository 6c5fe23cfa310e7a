use sqlx::{Postgres, QueryBuilder};

/// 排序方向: 仅 "asc" (忽略大小写) 为升序, 其余一律降序
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// 解析排序参数, 无法识别的值不报错, 直接落到降序
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw {
            Some(s) if s.eq_ignore_ascii_case("asc") => SortDirection::Asc,
            _ => SortDirection::Desc,
        }
    }

    fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// 过滤串去除空白后非空才算有效
fn has_filter(term: Option<&str>) -> bool {
    term.map_or(false, |t| !t.trim().is_empty())
}

/// 构建发票查询: 订单→客户→明细→商品
/// 订单总额用窗口聚合计算, 每行重复同一值
/// 可选按商品名称/分类模糊过滤 (ILIKE, 两侧通配)
pub fn invoice_query(order_id: i32, search_term: Option<&str>) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(
        r#"
        WITH order_summary AS (
            SELECT
                o.id as order_id,
                o.created_at,
                c.first_name,
                c.last_name,
                c.email,
                c.details->>'city' as customer_city,
                c.details->>'country' as customer_country
            FROM orders o
            JOIN customers c ON o.customer_id = c.id
            WHERE o.id = "#,
    );
    qb.push_bind(order_id);
    qb.push(
        r#"
        )
        SELECT
            os.order_id,
            os.created_at,
            os.first_name || ' ' || os.last_name as customer_name,
            os.email as customer_email,
            os.customer_city,
            os.customer_country,
            p.name as product_name,
            p.category as product_category,
            oi.quantity,
            p.price as unit_price,
            (oi.quantity * p.price) as line_total,
            SUM(oi.quantity * p.price) OVER (PARTITION BY os.order_id) as order_total
        FROM order_summary os
        JOIN order_items oi ON os.order_id = oi.order_id
        JOIN products p ON oi.product_id = p.id"#,
    );

    if has_filter(search_term) {
        // 空白判断用 trim 后的串, 通配模式绑定原始串
        let pattern = format!("%{}%", search_term.unwrap_or_default());
        qb.push("\n        WHERE (p.name ILIKE ");
        qb.push_bind(pattern.clone());
        qb.push(" OR p.category ILIKE ");
        qb.push_bind(pattern);
        qb.push(")");
    }

    // 商品ID兜底排序, 保证同名商品的行序稳定
    qb.push("\n        ORDER BY p.name, p.id");
    qb
}

/// 构建城市分布查询: 按城市分组统计去重订单数与金额合计
/// 金额在 SQL 侧保留两位小数
pub fn distribution_query(
    city_filter: Option<&str>,
    sort: SortDirection,
) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(
        r#"
        WITH city_stats AS (
            SELECT
                c.details->>'city' as customer_city,
                COUNT(DISTINCT o.id) as number_of_orders,
                SUM(oi.quantity * p.price) as total_amount
            FROM customers c
            JOIN orders o ON c.id = o.customer_id
            JOIN order_items oi ON o.id = oi.order_id
            JOIN products p ON oi.product_id = p.id"#,
    );

    if has_filter(city_filter) {
        qb.push("\n            WHERE c.details->>'city' ILIKE ");
        qb.push_bind(format!("%{}%", city_filter.unwrap_or_default()));
    }

    qb.push(
        r#"
            GROUP BY c.details->>'city'
        )
        SELECT
            customer_city,
            number_of_orders,
            ROUND(total_amount::NUMERIC, 2) as total_amount_usd
        FROM city_stats
        ORDER BY number_of_orders "#,
    );
    qb.push(sort.as_sql());
    qb
}
