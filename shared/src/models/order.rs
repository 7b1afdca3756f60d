//! Order Model

use serde::{Deserialize, Serialize};

use super::cart::Cart;

/// One submitted order line.
///
/// Quantity is fixed at 1 per cart line; duplicate items become separate
/// lines rather than being merged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: i64,
    pub price: f64,
    pub quantity: u32,
}

/// Optional contact details collected at checkout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderSubmission {
    pub items: Vec<OrderLine>,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
}

impl OrderSubmission {
    /// Build the payload from the current cart plus contact details.
    ///
    /// Items without an id are submitted with id 0.
    pub fn from_cart(cart: &Cart, contact: ContactInfo) -> Self {
        Self {
            items: cart
                .items()
                .iter()
                .map(|item| OrderLine {
                    id: item.id.unwrap_or(0),
                    price: item.price,
                    quantity: 1,
                })
                .collect(),
            customer_name: contact.name,
            customer_email: contact.email,
            customer_phone: contact.phone,
        }
    }
}

/// Create order response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub success: bool,
    #[serde(default)]
    pub order_id: i64,
    #[serde(default)]
    pub message: Option<String>,
}
