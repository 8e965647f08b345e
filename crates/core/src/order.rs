//! Order assembly.
//!
//! Transforms a checkout form (customer info + cart snapshot + total) into a
//! [`NewOrder`] ready to persist, or a single [`OrderError`] naming the first
//! failing field. The order path deliberately applies only the loose email
//! pattern - the stricter contact-form rules were never enforced at checkout
//! and that observed behavior is preserved.
//!
//! A `NewOrder` is an immutable snapshot: item names, prices, and images are
//! frozen at purchase time and never reference live product documents. The
//! store assigns the document id and `createdAt`; status always starts at
//! `pending` and is never mutated by this system.

use serde::{Deserialize, Serialize};

use crate::types::{Email, OrderStatus};

/// Why an order draft was rejected.
///
/// Each variant's display string is the exact message returned to the
/// client with a 400 status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OrderError {
    #[error("Customer information is required")]
    MissingCustomerInfo,
    #[error("Customer name is required")]
    MissingName,
    #[error("Customer email is required")]
    MissingEmail,
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Order items are required")]
    MissingItems,
    #[error("Valid order total is required")]
    InvalidTotal,
    #[error("Invalid item data")]
    InvalidItem,
}

/// Customer details frozen into an order.
///
/// All fields are trimmed; phone, address, and city default to `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub email: Email,
    pub phone: String,
    pub address: String,
    pub city: String,
}

/// One purchased line, snapshotted from the cart.
///
/// Price and quantity are plain numbers: the checkout contract only requires
/// them to be numeric, so fractional quantities are accepted as submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity: f64,
    pub image: String,
}

/// A validated order ready to persist.
///
/// The store assigns `id` and `createdAt` on write.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub user_id: Option<String>,
    pub customer_info: CustomerInfo,
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub status: OrderStatus,
}

/// Raw checkout payload as submitted by the client.
///
/// Every field is optional so that missing data reaches the assembler and
/// produces its specific message instead of a generic decode failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    #[serde(default)]
    pub customer_info: Option<CustomerDraft>,
    #[serde(default)]
    pub items: Option<Vec<ItemDraft>>,
    #[serde(default)]
    pub total: Option<f64>,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Raw customer block of a checkout payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

/// Raw line item of a checkout payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemDraft {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
}

impl NewOrder {
    /// Validate a draft and assemble the order snapshot.
    ///
    /// Checks run in a fixed order and stop at the first failure: customer
    /// block present, name non-empty, email present, email loosely valid,
    /// items non-empty, total positive, then each item's required fields.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule as an [`OrderError`].
    pub fn from_draft(draft: OrderDraft) -> Result<Self, OrderError> {
        let customer = draft.customer_info.ok_or(OrderError::MissingCustomerInfo)?;

        let name = customer.name.as_deref().map(str::trim).unwrap_or_default();
        if name.is_empty() {
            return Err(OrderError::MissingName);
        }

        let raw_email = customer.email.as_deref().unwrap_or_default();
        if raw_email.is_empty() {
            return Err(OrderError::MissingEmail);
        }
        let email = Email::parse_loose(raw_email).map_err(|_| OrderError::InvalidEmail)?;

        let items = draft.items.unwrap_or_default();
        if items.is_empty() {
            return Err(OrderError::MissingItems);
        }

        let total = draft.total.unwrap_or_default();
        if total <= 0.0 {
            return Err(OrderError::InvalidTotal);
        }

        let items = items
            .into_iter()
            .map(|item| {
                let id = item.id.filter(|s| !s.is_empty());
                let name = item.name.filter(|s| !s.is_empty());
                match (id, name, item.price, item.quantity) {
                    (Some(id), Some(name), Some(price), Some(quantity)) => Ok(OrderItem {
                        id,
                        name,
                        price,
                        quantity,
                        image: item.image.unwrap_or_default(),
                    }),
                    _ => Err(OrderError::InvalidItem),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            user_id: draft.user_id,
            customer_info: CustomerInfo {
                name: name.to_string(),
                email,
                phone: customer.phone.as_deref().map(str::trim).unwrap_or_default().to_string(),
                address: customer
                    .address
                    .as_deref()
                    .map(str::trim)
                    .unwrap_or_default()
                    .to_string(),
                city: customer.city.as_deref().map(str::trim).unwrap_or_default().to_string(),
            },
            items,
            total,
            status: OrderStatus::Pending,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn customer() -> CustomerDraft {
        CustomerDraft {
            name: Some("Jo Bloggs".to_string()),
            email: Some("Jo@Example.com".to_string()),
            phone: Some(" 555 123 4567 ".to_string()),
            address: None,
            city: Some("Cairo".to_string()),
        }
    }

    fn item() -> ItemDraft {
        ItemDraft {
            id: Some("tee-01".to_string()),
            name: Some("Tour Tee".to_string()),
            price: Some(25.0),
            quantity: Some(2.0),
            image: None,
        }
    }

    fn draft() -> OrderDraft {
        OrderDraft {
            customer_info: Some(customer()),
            items: Some(vec![item()]),
            total: Some(50.0),
            user_id: Some("user-1".to_string()),
        }
    }

    #[test]
    fn test_valid_draft_assembles() {
        let order = NewOrder::from_draft(draft()).unwrap();

        assert_eq!(order.customer_info.name, "Jo Bloggs");
        assert_eq!(order.customer_info.email.as_str(), "jo@example.com");
        assert_eq!(order.customer_info.phone, "555 123 4567");
        assert_eq!(order.customer_info.address, "");
        assert_eq!(order.customer_info.city, "Cairo");
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].image, "");
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.user_id.as_deref(), Some("user-1"));
    }

    #[test]
    fn test_missing_customer_info() {
        let d = OrderDraft::default();
        assert_eq!(
            NewOrder::from_draft(d).unwrap_err(),
            OrderError::MissingCustomerInfo
        );
    }

    #[test]
    fn test_missing_name() {
        let mut d = draft();
        d.customer_info = Some(CustomerDraft {
            name: Some("   ".to_string()),
            ..customer()
        });
        assert_eq!(NewOrder::from_draft(d).unwrap_err(), OrderError::MissingName);
    }

    #[test]
    fn test_missing_email() {
        let mut d = draft();
        d.customer_info = Some(CustomerDraft {
            email: None,
            ..customer()
        });
        assert_eq!(NewOrder::from_draft(d).unwrap_err(), OrderError::MissingEmail);
    }

    #[test]
    fn test_loose_email_only() {
        // Fails the strict contact-form pattern but is accepted for orders.
        let mut d = draft();
        d.customer_info = Some(CustomerDraft {
            email: Some("jo@ex_ample.com".to_string()),
            ..customer()
        });
        let order = NewOrder::from_draft(d).unwrap();
        assert_eq!(order.customer_info.email.as_str(), "jo@ex_ample.com");

        let mut d = draft();
        d.customer_info = Some(CustomerDraft {
            email: Some("not-an-email".to_string()),
            ..customer()
        });
        assert_eq!(NewOrder::from_draft(d).unwrap_err(), OrderError::InvalidEmail);
    }

    #[test]
    fn test_empty_items_rejected() {
        let mut d = draft();
        d.items = Some(Vec::new());
        assert_eq!(NewOrder::from_draft(d).unwrap_err(), OrderError::MissingItems);

        let mut d = draft();
        d.items = None;
        assert_eq!(NewOrder::from_draft(d).unwrap_err(), OrderError::MissingItems);
    }

    #[test]
    fn test_non_positive_total_rejected() {
        for total in [Some(0.0), Some(-5.0), None] {
            let mut d = draft();
            d.total = total;
            assert_eq!(
                NewOrder::from_draft(d).unwrap_err(),
                OrderError::InvalidTotal,
                "total {total:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_invalid_item_rejected() {
        let mut d = draft();
        d.items = Some(vec![ItemDraft {
            price: None,
            ..item()
        }]);
        assert_eq!(NewOrder::from_draft(d).unwrap_err(), OrderError::InvalidItem);

        let mut d = draft();
        d.items = Some(vec![ItemDraft {
            id: Some(String::new()),
            ..item()
        }]);
        assert_eq!(NewOrder::from_draft(d).unwrap_err(), OrderError::InvalidItem);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            OrderError::InvalidTotal.to_string(),
            "Valid order total is required"
        );
        assert_eq!(OrderError::InvalidItem.to_string(), "Invalid item data");
        assert_eq!(
            OrderError::MissingItems.to_string(),
            "Order items are required"
        );
    }
}
