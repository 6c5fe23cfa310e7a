use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 按城市聚合的订单分布
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDistribution {
    pub customer_city: Option<String>,  // 客户档案无城市时为 NULL
    pub number_of_orders: i64,
    pub total_amount_usd: BigDecimal,   // 两位小数, SQL 侧 ROUND
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let row = OrderDistribution {
            customer_city: Some("Vilnius".to_string()),
            number_of_orders: 12,
            total_amount_usd: BigDecimal::from(1999),
        };

        let value = serde_json::to_value(&row).unwrap();
        let obj = value.as_object().unwrap();
        assert!(obj.contains_key("customerCity"));
        assert!(obj.contains_key("numberOfOrders"));
        assert!(obj.contains_key("totalAmountUsd"));
        assert_eq!(obj.len(), 3);
    }

    #[test]
    fn city_may_be_null() {
        let row = OrderDistribution {
            customer_city: None,
            number_of_orders: 1,
            total_amount_usd: BigDecimal::from(10),
        };

        let value = serde_json::to_value(&row).unwrap();
        assert!(value["customerCity"].is_null());
    }
}
