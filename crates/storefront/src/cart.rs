//! The in-memory cart model.
//!
//! A [`Cart`] is an ordered list of [`LineItem`]s, one per distinct dish
//! name. The model is pure: persistence and notification side effects live
//! in [`crate::session`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One distinct product entry in the cart, with its quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Dish name; unique key within a cart.
    pub name: String,
    /// Unit price. Serialized as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Quantity, at least 1. Older persisted carts may omit it.
    #[serde(default = "default_qty")]
    pub qty: u32,
}

const fn default_qty() -> u32 {
    1
}

impl LineItem {
    /// Price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.qty)
    }
}

/// The full ordered collection of line items for the current session.
///
/// Insertion order is preserved for display only; it carries no other
/// meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add one unit of a dish.
    ///
    /// If a line item with this name already exists its quantity is
    /// incremented; otherwise a new line item with quantity 1 is appended.
    pub fn add_item(&mut self, name: &str, price: Decimal) {
        if let Some(existing) = self.items.iter_mut().find(|item| item.name == name) {
            existing.qty += 1;
        } else {
            self.items.push(LineItem {
                name: name.to_owned(),
                price,
                qty: 1,
            });
        }
    }

    /// Remove the line item at `index`.
    ///
    /// Out-of-range indices are a silent no-op. Returns whether anything was
    /// removed.
    pub fn remove_item(&mut self, index: usize) -> bool {
        if index < self.items.len() {
            self.items.remove(index);
            true
        } else {
            false
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total number of units across all line items (not distinct dishes).
    #[must_use]
    pub fn count(&self) -> u32 {
        self.items.iter().map(|item| item.qty).sum()
    }

    /// Sum of price times quantity over all line items, exact.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Whether the cart has no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// The line items in display order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;

    use super::*;

    #[test]
    fn adding_a_new_dish_appends_with_quantity_one() {
        let mut cart = Cart::new();
        cart.add_item("Burger", dec!(5.00));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.count(), 1);
        assert_eq!(cart.total(), dec!(5.00));
    }

    #[test]
    fn adding_the_same_dish_twice_increments_quantity() {
        let mut cart = Cart::new();
        cart.add_item("Burger", dec!(5.00));
        cart.add_item("Burger", dec!(5.00));

        assert_eq!(cart.len(), 1, "no duplicate line items");
        assert_eq!(cart.items()[0].qty, 2);
        assert_eq!(cart.count(), 2);
        assert_eq!(cart.total(), dec!(10.00));
    }

    #[test]
    fn count_sums_quantities_and_ignores_add_order() {
        let orders = [
            ["Burger", "Pizza", "Burger", "Fries"],
            ["Fries", "Burger", "Burger", "Pizza"],
            ["Burger", "Burger", "Fries", "Pizza"],
        ];

        for names in orders {
            let mut cart = Cart::new();
            for name in names {
                cart.add_item(name, dec!(3.50));
            }
            assert_eq!(cart.count(), 4);
            assert_eq!(cart.total(), dec!(14.00));
        }
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut cart = Cart::new();
        cart.add_item("Pizza", dec!(9.00));
        cart.add_item("Burger", dec!(5.00));
        cart.add_item("Pizza", dec!(9.00));

        let names: Vec<&str> = cart.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Pizza", "Burger"]);
    }

    #[test]
    fn remove_deletes_exactly_one_entry_by_position() {
        let mut cart = Cart::new();
        cart.add_item("Burger", dec!(5.00));
        cart.add_item("Pizza", dec!(9.00));

        assert!(cart.remove_item(0));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].name, "Pizza");
    }

    #[test]
    fn remove_out_of_range_is_a_no_op() {
        let mut cart = Cart::new();
        cart.add_item("Burger", dec!(5.00));

        assert!(!cart.remove_item(1));
        assert!(!cart.remove_item(usize::MAX));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), dec!(5.00));
    }

    #[test]
    fn total_is_exact_over_decimal_prices() {
        let mut cart = Cart::new();
        for _ in 0..3 {
            cart.add_item("Samosa", dec!(0.10));
        }
        cart.add_item("Chai", dec!(0.20));

        // 3 * 0.10 + 0.20, exactly
        assert_eq!(cart.total(), dec!(0.50));
    }

    #[test]
    fn clear_empties_the_cart() {
        let mut cart = Cart::new();
        cart.add_item("Burger", dec!(5.00));
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.count(), 0);
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn deserializing_a_line_item_without_qty_defaults_to_one() {
        let item: LineItem =
            serde_json::from_str(r#"{"name":"Burger","price":5.0}"#).expect("valid line item");
        assert_eq!(item.qty, 1);
    }

    #[test]
    fn serializes_price_as_a_json_number() {
        let mut cart = Cart::new();
        cart.add_item("Burger", dec!(5.5));

        let json = serde_json::to_string(&cart).expect("serializable");
        assert_eq!(json, r#"[{"name":"Burger","price":5.5,"qty":1}]"#);
    }
}
