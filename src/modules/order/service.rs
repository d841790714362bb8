use crate::modules::cart::{self, repository::CartLine};
use bigdecimal::BigDecimal;

pub struct OrderDraftItem {
    pub menu_item_id: i64,
    pub quantity: i32,
    pub price: BigDecimal,
}

/// What an order will look like once the given cart lines are checked out.
/// Prices are copied from the lines so later menu changes leave the order alone.
pub struct OrderDraft {
    pub total_amount: BigDecimal,
    pub items: Vec<OrderDraftItem>,
    pub cart_item_ids: Vec<i64>,
}

impl OrderDraft {
    pub fn from_cart_lines(lines: &[CartLine]) -> Self {
        Self {
            total_amount: cart::service::total(lines),
            items: lines
                .iter()
                .map(|line| OrderDraftItem {
                    menu_item_id: line.menu_item_id,
                    quantity: line.quantity,
                    price: line.price.clone(),
                })
                .collect(),
            cart_item_ids: lines.iter().map(|line| line.id).collect(),
        }
    }
}
