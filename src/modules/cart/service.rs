use super::repository::{self, CartItem, CartLine};
use crate::types::Context;
use bigdecimal::BigDecimal;

#[derive(Debug)]
pub enum Error {
    CartItemNotFound,
    NotOwner,
    UnexpectedError,
}

/// Sum of live price × quantity over the given lines.
pub fn total(lines: &[CartLine]) -> BigDecimal {
    lines
        .iter()
        .fold(BigDecimal::from(0), |acc, line| acc + line.subtotal())
}

/// Looks up a cart line that the user is allowed to modify.
pub async fn find_owned(ctx: &Context, user_id: i64, cart_item_id: i64) -> Result<CartItem, Error> {
    let cart_item = ctx
        .repos
        .cart
        .find_by_id(cart_item_id)
        .await
        .map_err(|_| Error::UnexpectedError)?
        .ok_or(Error::CartItemNotFound)?;

    if !repository::is_owner(&cart_item, user_id) {
        tracing::warn!(
            "User {} tried to modify cart item {} of user {}",
            user_id,
            cart_item.id,
            cart_item.user_id
        );
        return Err(Error::NotOwner);
    }

    Ok(cart_item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn line(price: &str, quantity: i32) -> CartLine {
        CartLine {
            id: 1,
            user_id: 1,
            menu_item_id: 1,
            quantity,
            name: String::from("Margherita Pizza"),
            price: BigDecimal::from_str(price).unwrap(),
            image_url: String::new(),
            restaurant_id: 1,
            is_available: true,
        }
    }

    #[test]
    fn empty_cart_totals_zero() {
        assert_eq!(total(&[]), BigDecimal::from(0));
    }

    #[test]
    fn totals_price_times_quantity() {
        let lines = vec![line("12.99", 2), line("4.99", 1)];

        assert_eq!(total(&lines), BigDecimal::from_str("30.97").unwrap());
    }
}
