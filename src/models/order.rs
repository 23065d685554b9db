use serde::{Deserialize, Serialize};

use crate::core::{InvoiceError, InvoiceResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    #[serde(default)]
    pub items: Vec<LineItem>,
    /// Flat courier charge added to the total when positive.
    #[serde(default)]
    pub courier: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub price: f64,
    pub qty: f64,
    pub unit: Option<String>, // display only, defaults to "kg"
}

impl LineItem {
    pub fn subtotal(&self) -> f64 {
        self.price * self.qty
    }

    pub fn unit_label(&self) -> &str {
        self.unit.as_deref().unwrap_or("kg")
    }
}

impl Order {
    /// An order must carry at least one line item before anything is rendered.
    pub fn validate(&self) -> InvoiceResult<()> {
        if self.items.is_empty() {
            return Err(InvoiceError::Validation(
                "order has no items".to_string(),
            ));
        }
        Ok(())
    }

    /// Grand total: sum of item subtotals plus the courier charge when positive.
    pub fn total(&self) -> f64 {
        let items: f64 = self.items.iter().map(LineItem::subtotal).sum();
        if self.courier > 0.0 {
            items + self.courier
        } else {
            items
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, price: f64, qty: f64) -> LineItem {
        LineItem {
            name: name.to_string(),
            price,
            qty,
            unit: None,
        }
    }

    #[test]
    fn total_sums_items_and_courier() {
        let order = Order {
            name: Some("A".to_string()),
            phone: None,
            address: None,
            items: vec![item("Rice", 100.0, 2.0), item("Oil", 50.0, 1.0)],
            courier: 20.0,
        };
        assert_eq!(order.total(), 270.0);
    }

    #[test]
    fn negative_courier_is_ignored() {
        let order = Order {
            name: None,
            phone: None,
            address: None,
            items: vec![item("Rice", 100.0, 1.0)],
            courier: -5.0,
        };
        assert_eq!(order.total(), 100.0);
    }

    #[test]
    fn empty_item_list_fails_validation() {
        let order = Order {
            name: None,
            phone: None,
            address: None,
            items: vec![],
            courier: 0.0,
        };
        assert!(order.validate().is_err());
    }

    #[test]
    fn missing_price_is_a_deserialization_error() {
        let raw = r#"{"items":[{"name":"Rice","qty":2}]}"#;
        assert!(serde_json::from_str::<Order>(raw).is_err());
    }

    #[test]
    fn optional_fields_default() {
        let raw = r#"{"items":[{"name":"Rice","price":10,"qty":1}]}"#;
        let order: Order = serde_json::from_str(raw).unwrap();
        assert!(order.name.is_none());
        assert_eq!(order.courier, 0.0);
        assert_eq!(order.items[0].unit_label(), "kg");
    }
}
