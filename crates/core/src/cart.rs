//! Shopping cart store.
//!
//! The cart is an ordered collection of line items, unique by product id,
//! with insertion order preserved (first add wins the position). It is owned
//! by a single session and mutated by exactly one writer, so every operation
//! is a plain synchronous method - no locking, no I/O.

use serde::{Deserialize, Serialize};

/// Maximum quantity of a single line item.
pub const MAX_QUANTITY: u32 = 99;

/// A product being added to the cart, before a quantity is attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
}

/// One line of the cart: a product snapshot plus its quantity.
///
/// Invariant: `quantity` is always in `[1, MAX_QUANTITY]`. A line never
/// exists with quantity zero - removal deletes it instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: String,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub image: String,
}

impl CartLine {
    /// Line subtotal: unit price times quantity, native float arithmetic.
    #[must_use]
    pub fn line_price(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// The cart store.
///
/// Created empty per session and cleared on successful checkout. The api
/// layer never persists it; clients keep their copy in local storage and
/// submit a snapshot at checkout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add an item to the cart.
    ///
    /// If the product is already present, its quantity is incremented by
    /// `quantity` and clamped at [`MAX_QUANTITY`]. Otherwise a new line is
    /// appended with the quantity clamped into `[1, MAX_QUANTITY]`.
    pub fn add(&mut self, item: CartItem, quantity: u32) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == item.id) {
            line.quantity = line.quantity.saturating_add(quantity).min(MAX_QUANTITY);
            return;
        }

        self.lines.push(CartLine {
            product_id: item.id,
            name: item.name,
            unit_price: item.price,
            quantity: quantity.clamp(1, MAX_QUANTITY),
            image: item.image,
        });
    }

    /// Set the quantity of an existing line.
    ///
    /// A quantity below one behaves as removal; anything else is clamped at
    /// [`MAX_QUANTITY`]. No-op if the product is not in the cart.
    pub fn update_quantity(&mut self, product_id: &str, quantity: u32) {
        if quantity < 1 {
            self.remove(product_id);
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = quantity.min(MAX_QUANTITY);
        }
    }

    /// Remove a line from the cart. No-op if the product is absent.
    pub fn remove(&mut self, product_id: &str) {
        self.lines.retain(|l| l.product_id != product_id);
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of `unit_price * quantity` across all lines.
    ///
    /// No rounding beyond native floating arithmetic.
    #[must_use]
    pub fn total_price(&self) -> f64 {
        self.lines.iter().map(CartLine::line_price).sum()
    }

    /// The lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Look up a line by product id.
    #[must_use]
    pub fn get(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn item(id: &str, price: f64) -> CartItem {
        CartItem {
            id: id.to_string(),
            name: format!("Item {id}"),
            price,
            image: String::new(),
        }
    }

    #[test]
    fn test_add_new_line() {
        let mut cart = Cart::new();
        cart.add(item("tee", 25.0), 2);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get("tee").unwrap().quantity, 2);
    }

    #[test]
    fn test_add_same_product_sums_quantities() {
        let mut cart = Cart::new();
        cart.add(item("tee", 25.0), 2);
        cart.add(item("tee", 25.0), 3);

        let mut expected = Cart::new();
        expected.add(item("tee", 25.0), 5);

        assert_eq!(cart, expected);
    }

    #[test]
    fn test_add_clamps_at_max() {
        let mut cart = Cart::new();
        cart.add(item("tee", 25.0), 60);
        cart.add(item("tee", 25.0), 60);
        assert_eq!(cart.get("tee").unwrap().quantity, MAX_QUANTITY);

        // Adding beyond the cap never exceeds it.
        cart.add(item("tee", 25.0), 1);
        assert_eq!(cart.get("tee").unwrap().quantity, MAX_QUANTITY);
    }

    #[test]
    fn test_add_zero_quantity_becomes_one() {
        let mut cart = Cart::new();
        cart.add(item("tee", 25.0), 0);
        assert_eq!(cart.get("tee").unwrap().quantity, 1);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add(item("b", 1.0), 1);
        cart.add(item("a", 1.0), 1);
        cart.add(item("b", 1.0), 1);

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.product_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = Cart::new();
        cart.add(item("tee", 25.0), 2);

        cart.update_quantity("tee", 7);
        assert_eq!(cart.get("tee").unwrap().quantity, 7);

        cart.update_quantity("tee", 500);
        assert_eq!(cart.get("tee").unwrap().quantity, MAX_QUANTITY);
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let mut cart = Cart::new();
        cart.add(item("tee", 25.0), 2);
        cart.update_quantity("tee", 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add(item("tee", 25.0), 2);
        cart.update_quantity("hoodie", 5);
        assert_eq!(cart.len(), 1);
        assert!(cart.get("hoodie").is_none());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add(item("tee", 25.0), 1);
        cart.remove("hoodie");
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::new();
        cart.add(item("tee", 25.0), 2);
        cart.add(item("vinyl", 34.5), 1);

        assert_eq!(cart.total_items(), 3);
        assert!((cart.total_price() - 84.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_add_then_remove_roundtrip() {
        let mut cart = Cart::new();
        cart.add(item("tee", 25.0), 2);
        cart.remove("tee");

        assert!(cart.is_empty());
        assert!((cart.total_price() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(item("tee", 25.0), 2);
        cart.add(item("vinyl", 34.5), 1);
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
    }
}
