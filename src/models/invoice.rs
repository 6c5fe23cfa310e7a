use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 发票行 (一条订单明细对应一行)
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub order_id: i32,
    pub created_at: DateTime<Utc>,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_city: Option<String>,    // 客户档案 details 里可能缺失
    pub customer_country: Option<String>,
    pub product_name: String,
    pub product_category: String,
    pub quantity: i32,
    pub unit_price: BigDecimal,
    pub line_total: BigDecimal,           // quantity * unit_price
    pub order_total: BigDecimal,          // 同一订单所有行的合计, 窗口聚合, 每行重复
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let row = Invoice {
            order_id: 45,
            created_at: Utc::now(),
            customer_name: "Jonas Petrauskas".to_string(),
            customer_email: "jonas@example.com".to_string(),
            customer_city: Some("Vilnius".to_string()),
            customer_country: Some("Lithuania".to_string()),
            product_name: "External Storage 2TB".to_string(),
            product_category: "Storage".to_string(),
            quantity: 2,
            unit_price: BigDecimal::from(80),
            line_total: BigDecimal::from(160),
            order_total: BigDecimal::from(160),
        };

        let value = serde_json::to_value(&row).unwrap();
        let obj = value.as_object().unwrap();
        for key in [
            "orderId",
            "createdAt",
            "customerName",
            "customerEmail",
            "customerCity",
            "customerCountry",
            "productName",
            "productCategory",
            "quantity",
            "unitPrice",
            "lineTotal",
            "orderTotal",
        ] {
            assert!(obj.contains_key(key), "missing key {}", key);
        }
        assert_eq!(obj.len(), 12);
    }
}
