//! Cart value: an ordered, id-unique list of cart lines.
//!
//! All transitions are pure: they return a new `Cart` and leave `self` untouched,
//! so a rejected operation can simply drop its candidate.

use std::collections::HashSet;

use storefront_core::{DomainError, DomainResult, Entity, ProductId};

use crate::product::CartItem;

/// Ordered sequence of cart lines (insertion order).
///
/// Invariants:
/// - no two lines share a product id
/// - every line has `amount >= 1`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from stored lines, enforcing the cart invariants.
    pub fn from_items(items: Vec<CartItem>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.amount == 0 {
                return Err(DomainError::validation(format!(
                    "product {} has a zero amount",
                    item.product_id()
                )));
            }
            if !seen.insert(item.product_id()) {
                return Err(DomainError::invariant(format!(
                    "product {} appears more than once",
                    item.product_id()
                )));
            }
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &CartItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.is(&product_id))
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.get(product_id).is_some()
    }

    /// Units of `product_id` in the cart (0 when absent).
    pub fn amount_of(&self, product_id: ProductId) -> u32 {
        self.get(product_id).map(|item| item.amount).unwrap_or(0)
    }

    /// Sum of units across all lines.
    pub fn total_units(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.amount)).sum()
    }

    /// New cart with the line for `product_id` replaced by one carrying `amount`.
    pub fn with_item_amount(&self, product_id: ProductId, amount: u32) -> DomainResult<Self> {
        if amount == 0 {
            return Err(DomainError::validation("amount must be at least 1"));
        }
        if !self.contains(product_id) {
            return Err(DomainError::not_found());
        }

        let items = self
            .items
            .iter()
            .map(|item| {
                if item.is(&product_id) {
                    item.with_amount(amount)
                } else {
                    item.clone()
                }
            })
            .collect();

        Ok(Self { items })
    }

    /// New cart with `item` appended at the end.
    pub fn with_appended(&self, item: CartItem) -> DomainResult<Self> {
        if item.amount == 0 {
            return Err(DomainError::validation("amount must be at least 1"));
        }
        if self.contains(item.product_id()) {
            return Err(DomainError::invariant(format!(
                "product {} is already in the cart",
                item.product_id()
            )));
        }

        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.extend(self.items.iter().cloned());
        items.push(item);
        Ok(Self { items })
    }

    /// New cart without the line for `product_id`.
    pub fn without(&self, product_id: ProductId) -> DomainResult<Self> {
        if !self.contains(product_id) {
            return Err(DomainError::not_found());
        }

        let items = self
            .items
            .iter()
            .filter(|item| !item.is(&product_id))
            .cloned()
            .collect();

        Ok(Self { items })
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartItem;
    type IntoIter = std::slice::Iter<'a, CartItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Product;

    fn product(id: u64) -> Product {
        Product::new(
            ProductId::new(id),
            format!("Product {id}"),
            1000 * id,
            format!("https://cdn.example.com/{id}.jpg"),
        )
    }

    fn line(id: u64, amount: u32) -> CartItem {
        CartItem::new(product(id)).with_amount(amount)
    }

    #[test]
    fn from_items_rejects_duplicate_ids() {
        let err = Cart::from_items(vec![line(1, 1), line(1, 2)]).unwrap_err();
        match err {
            DomainError::InvariantViolation(msg) => assert!(msg.contains("more than once")),
            other => panic!("Expected invariant violation, got {other:?}"),
        }
    }

    #[test]
    fn from_items_rejects_zero_amounts() {
        let err = Cart::from_items(vec![line(1, 0)]).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn with_item_amount_sets_absolute_amount_and_keeps_order() {
        let cart = Cart::from_items(vec![line(1, 1), line(2, 4), line(3, 1)]).unwrap();

        let next = cart.with_item_amount(ProductId::new(2), 2).unwrap();

        assert_eq!(next.amount_of(ProductId::new(2)), 2);
        let ids: Vec<u64> = next.iter().map(|i| i.product_id().get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        // Source cart is untouched.
        assert_eq!(cart.amount_of(ProductId::new(2)), 4);
    }

    #[test]
    fn with_item_amount_on_missing_product_is_not_found() {
        let cart = Cart::from_items(vec![line(1, 1)]).unwrap();
        assert_eq!(
            cart.with_item_amount(ProductId::new(9), 1).unwrap_err(),
            DomainError::NotFound
        );
    }

    #[test]
    fn with_appended_rejects_existing_product() {
        let cart = Cart::from_items(vec![line(1, 1)]).unwrap();
        let err = cart.with_appended(line(1, 1)).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
    }

    #[test]
    fn without_removes_exactly_one_line() {
        let cart = Cart::from_items(vec![line(1, 1), line(2, 3)]).unwrap();

        let next = cart.without(ProductId::new(1)).unwrap();

        assert_eq!(next.len(), 1);
        assert!(!next.contains(ProductId::new(1)));
        assert_eq!(next.amount_of(ProductId::new(2)), 3);
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn without_missing_product_is_not_found() {
        let cart = Cart::new();
        assert_eq!(cart.without(ProductId::new(1)).unwrap_err(), DomainError::NotFound);
    }

    #[test]
    fn total_units_sums_amounts() {
        let cart = Cart::from_items(vec![line(1, 2), line(2, 3)]).unwrap();
        assert_eq!(cart.total_units(), 5);
        assert_eq!(cart.amount_of(ProductId::new(7)), 0);
    }
}
