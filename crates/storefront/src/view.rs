//! Cart display projection.
//!
//! [`CartPage::render`] turns a cart into plain row descriptors so the
//! concrete UI binding (terminal, HTML, anything) stays a thin adapter.
//! Rendering rebuilds every row from scratch, so repeated renders of the
//! same cart are identical.

use fastbite_core::{CurrencyCode, Price};

use crate::cart::Cart;

/// One displayed cart row.
///
/// `index` is the removal handle: the UI binding passes it back to
/// [`crate::session::StorefrontSession::remove_item`] when the row's remove
/// control is activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRow {
    /// Position of the backing line item, also the removal handle.
    pub index: usize,
    /// Dish name.
    pub name: String,
    /// Units of this dish.
    pub quantity: u32,
    /// Price times quantity, formatted in the configured currency.
    pub line_total: String,
}

/// The rendered cart page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartPage {
    /// One row per line item, in cart order.
    pub rows: Vec<CartRow>,
    /// Grand total, formatted in the same currency as the rows.
    pub total: String,
    /// Whether the empty-cart indicator should show instead of rows.
    pub is_empty: bool,
}

impl CartPage {
    /// The page for an empty cart: no rows, zero total.
    #[must_use]
    pub fn empty(currency: CurrencyCode) -> Self {
        Self {
            rows: Vec::new(),
            total: Price::zero(currency).to_string(),
            is_empty: true,
        }
    }

    /// Project a cart into display rows and a grand total.
    #[must_use]
    pub fn render(cart: &Cart, currency: CurrencyCode) -> Self {
        if cart.is_empty() {
            return Self::empty(currency);
        }

        let rows = cart
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| CartRow {
                index,
                name: item.name.clone(),
                quantity: item.qty,
                line_total: Price::new(item.line_total(), currency).to_string(),
            })
            .collect();

        Self {
            rows,
            total: Price::new(cart.total(), currency).to_string(),
            is_empty: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;

    use super::*;

    fn sample_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add_item("Paneer Tikka", dec!(250.00));
        cart.add_item("Paneer Tikka", dec!(250.00));
        cart.add_item("Masala Dosa", dec!(120.50));
        cart
    }

    #[test]
    fn empty_cart_shows_indicator_and_zero_total() {
        let page = CartPage::render(&Cart::new(), CurrencyCode::INR);

        assert!(page.is_empty);
        assert!(page.rows.is_empty());
        assert_eq!(page.total, "₹0.00");
    }

    #[test]
    fn renders_one_row_per_line_item_with_line_totals() {
        let page = CartPage::render(&sample_cart(), CurrencyCode::INR);

        assert!(!page.is_empty);
        assert_eq!(page.rows.len(), 2);

        assert_eq!(page.rows[0].index, 0);
        assert_eq!(page.rows[0].name, "Paneer Tikka");
        assert_eq!(page.rows[0].quantity, 2);
        assert_eq!(page.rows[0].line_total, "₹500.00");

        assert_eq!(page.rows[1].index, 1);
        assert_eq!(page.rows[1].quantity, 1);
        assert_eq!(page.rows[1].line_total, "₹120.50");

        assert_eq!(page.total, "₹620.50");
    }

    #[test]
    fn row_and_grand_total_formatting_agree() {
        let mut cart = Cart::new();
        cart.add_item("Thali", dec!(123456.78));

        let page = CartPage::render(&cart, CurrencyCode::INR);
        assert_eq!(page.rows[0].line_total, "₹1,23,456.78");
        assert_eq!(page.total, "₹1,23,456.78");
    }

    #[test]
    fn rendering_twice_produces_identical_pages() {
        let cart = sample_cart();

        let first = CartPage::render(&cart, CurrencyCode::INR);
        let second = CartPage::render(&cart, CurrencyCode::INR);
        assert_eq!(first, second);
    }

    #[test]
    fn currency_follows_configuration() {
        let mut cart = Cart::new();
        cart.add_item("Burger", dec!(5.00));

        let page = CartPage::render(&cart, CurrencyCode::USD);
        assert_eq!(page.total, "$5.00");
    }
}
