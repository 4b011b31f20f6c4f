//! Catalog products and the cart lines copied from them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Price, ProductId, Quantity};

/// A purchasable catalog item.
///
/// Only `id`, `name` and `price` are interpreted. Every other catalog field
/// (image, description, ...) is kept in [`Product::attributes`] and carried
/// through to cart lines and persisted carts unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier.
    pub id: ProductId,
    /// Display name. Stored carts may omit it.
    #[serde(default)]
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Remaining catalog fields, preserved verbatim.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Product {
    /// Create a product without extra catalog fields.
    #[must_use]
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: impl Into<Price>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: price.into(),
            attributes: Map::new(),
        }
    }

    /// Attach an extra catalog field.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Look up an extra catalog field.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }
}

const QUANTITY_KEY: &str = "quantity";

/// One product in the cart with its quantity.
///
/// Serializes as the product's own fields plus `quantity`, e.g.
/// `{"id":1,"name":"Lukather","price":299,"image":"guitar_01","quantity":2}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    product: Product,
    quantity: Quantity,
}

impl CartLine {
    /// Copy a product into a new line holding one unit.
    #[must_use]
    pub fn new(product: Product) -> Self {
        Self::with_quantity(product, Quantity::ONE)
    }

    /// Copy a product into a line with an explicit quantity.
    ///
    /// A `quantity` catalog field is dropped; the line's own quantity replaces it.
    #[must_use]
    pub fn with_quantity(mut product: Product, quantity: Quantity) -> Self {
        product.attributes.remove(QUANTITY_KEY);
        Self { product, quantity }
    }

    /// The product's ID, which is also the line's ID.
    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.product.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.product.name
    }

    /// Unit price captured when the product was added.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.product.price
    }

    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// The product snapshot this line was copied from.
    #[must_use]
    pub const fn product(&self) -> &Product {
        &self.product
    }

    /// `quantity * price` for this line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }

    /// Add one unit. Returns `false` (and changes nothing) at the upper bound.
    pub fn increment(&mut self) -> bool {
        self.quantity.incremented().is_some_and(|q| {
            self.quantity = q;
            true
        })
    }

    /// Take away one unit. Returns `false` (and changes nothing) at the lower bound.
    pub fn decrement(&mut self) -> bool {
        self.quantity.decremented().is_some_and(|q| {
            self.quantity = q;
            true
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn guitar() -> Product {
        Product::new(1, "Lukather", 299)
            .with_attribute("image", "guitar_01")
            .with_attribute("description", "Morbi ornare augue nisl")
    }

    #[test]
    fn test_product_keeps_unknown_fields() {
        let product: Product = serde_json::from_value(json!({
            "id": 4,
            "name": "SRV",
            "price": 299,
            "image": "guitar_04",
            "tags": ["strat", "sunburst"]
        }))
        .unwrap();

        assert_eq!(product.id, ProductId::new(4));
        assert_eq!(product.attribute("image"), Some(&json!("guitar_04")));
        assert_eq!(product.attribute("tags"), Some(&json!(["strat", "sunburst"])));
    }

    #[test]
    fn test_cart_line_serializes_flat() {
        let line = CartLine::new(guitar());
        let value = serde_json::to_value(&line).unwrap();

        assert_eq!(
            value,
            json!({
                "id": 1,
                "name": "Lukather",
                "price": 299,
                "image": "guitar_01",
                "description": "Morbi ornare augue nisl",
                "quantity": 1
            })
        );
    }

    #[test]
    fn test_cart_line_quantity_not_duplicated_into_attributes() {
        let line: CartLine = serde_json::from_value(json!({
            "id": 1,
            "name": "Lukather",
            "price": 299,
            "quantity": 3
        }))
        .unwrap();

        assert_eq!(line.quantity().get(), 3);
        assert!(line.product().attribute("quantity").is_none());
    }

    #[test]
    fn test_cart_line_replaces_catalog_quantity_field() {
        let stocked = Product::new(9, "Stocked", 10).with_attribute("quantity", 40);
        let line = CartLine::new(stocked);
        assert!(line.product().attribute("quantity").is_none());

        let raw = serde_json::to_string(&line).unwrap();
        assert_eq!(raw.matches("\"quantity\"").count(), 1);

        let reloaded: CartLine = serde_json::from_str(&raw).unwrap();
        assert_eq!(reloaded, line);
        assert_eq!(reloaded.quantity(), Quantity::ONE);
    }

    #[test]
    fn test_cart_line_without_name_loads() {
        let line: CartLine =
            serde_json::from_value(json!({"id": 1, "price": 100, "quantity": 1})).unwrap();

        assert_eq!(line.id(), ProductId::new(1));
        assert_eq!(line.name(), "");
        assert_eq!(line.line_total(), Price::from(100));
    }

    #[test]
    fn test_cart_line_rejects_quantity_out_of_range() {
        let result = serde_json::from_value::<CartLine>(json!({
            "id": 1,
            "name": "Lukather",
            "price": 299,
            "quantity": 6
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_increment_and_decrement_respect_bounds() {
        let mut line = CartLine::new(guitar());
        assert!(!line.decrement());
        assert_eq!(line.quantity(), Quantity::ONE);

        for _ in 0..4 {
            assert!(line.increment());
        }
        assert!(!line.increment());
        assert_eq!(line.quantity().get(), Quantity::MAX);
    }

    #[test]
    fn test_line_total() {
        let line = CartLine::with_quantity(guitar(), Quantity::new(3).unwrap());
        assert_eq!(line.line_total(), Price::from(897));
    }
}
