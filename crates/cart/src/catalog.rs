//! The static product catalog.
//!
//! The catalog is supplied once at startup from static configuration and is
//! never mutated during a session. It is the only place product attributes
//! live; the cart snapshots the name and price of a product when it is
//! added, so later catalog edits do not rewrite an existing cart.

use avogrove_core::{Price, ProductId};

/// A purchasable product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Stable identity key, unique within the catalog.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Short marketing description.
    pub description: String,
    /// Free-text details (origin, weight, ripeness).
    pub details: String,
    /// Unit price in the smallest currency unit.
    pub unit_price: Price,
    /// Display token for the product icon; opaque to the cart.
    pub icon: String,
}

/// Read-only product lookup.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from a product table.
    ///
    /// Duplicate IDs are a configuration bug; lookups resolve to the first
    /// matching product.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Find a product by its ID.
    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Iterate over all products in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

/// The avocado product table the storefront launched with.
#[must_use]
pub fn demo_catalog() -> Catalog {
    Catalog::new(vec![
        Product {
            id: ProductId::new(1),
            name: "台灣在地酪梨".to_owned(),
            description: "來自台南的新鮮酪梨，果肉綿密香濃，營養價值極高".to_owned(),
            details: "產地:台南 | 重量:約250-300g/顆 | 熟度:5-7天可食用".to_owned(),
            unit_price: Price::new(80),
            icon: "🥑".to_owned(),
        },
        Product {
            id: ProductId::new(2),
            name: "精選大顆酪梨".to_owned(),
            description: "特選大顆酪梨，適合全家分享，果肉飽滿香甜".to_owned(),
            details: "產地:嘉義 | 重量:約350-400g/顆 | 熟度:5-7天可食用".to_owned(),
            unit_price: Price::new(120),
            icon: "🥑".to_owned(),
        },
        Product {
            id: ProductId::new(3),
            name: "酪梨禮盒組（6入）".to_owned(),
            description: "精心挑選6顆優質酪梨，送禮自用兩相宜".to_owned(),
            details: "產地:台灣各地精選 | 總重:約1.8kg | 精美禮盒包裝".to_owned(),
            unit_price: Price::new(450),
            icon: "🎁".to_owned(),
        },
        Product {
            id: ProductId::new(4),
            name: "酪梨家庭組（12入）".to_owned(),
            description: "大份量家庭組，經濟實惠，全家一起享受健康美味".to_owned(),
            details: "產地:台灣各地精選 | 總重:約3.6kg | 紙箱包裝".to_owned(),
            unit_price: Price::new(850),
            icon: "📦".to_owned(),
        },
    ])
}
