//! The static product catalog.
//!
//! Products are read-only data for the process lifetime. Prices are integer
//! currency units (whole dollars in the demo catalog). The `gradient` and
//! `icon` fields are display metadata consumed by the storefront client.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Electronics,
    Fashion,
    Lifestyle,
}

/// A color variant of a product: display name plus CSS swatch value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorVariant {
    pub name: String,
    pub value: String,
}

/// A catalog product.
///
/// Cart entries and order item snapshots carry the full product record, so
/// this type is also the wire representation of a cart item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub description: String,
    /// Price in integer currency units.
    pub price: i64,
    /// Pre-discount price, when the product is on sale.
    pub original_price: Option<i64>,
    pub category: Category,
    /// CSS gradient class for the product tile.
    pub gradient: String,
    /// Emoji stand-in for a product image.
    pub icon: String,
    /// Ordered set of available colors.
    pub colors: Vec<ColorVariant>,
}

impl Product {
    fn new(
        id: u32,
        name: &str,
        description: &str,
        price: i64,
        original_price: Option<i64>,
        category: Category,
        icon: &str,
        colors: &[(&str, &str)],
    ) -> Self {
        Self {
            id,
            name: name.to_owned(),
            description: description.to_owned(),
            price,
            original_price,
            category,
            gradient: format!("product-gradient-{id}"),
            icon: icon.to_owned(),
            colors: colors
                .iter()
                .map(|(name, value)| ColorVariant {
                    name: (*name).to_owned(),
                    value: (*value).to_owned(),
                })
                .collect(),
        }
    }
}

static CATALOG: LazyLock<Vec<Product>> = LazyLock::new(|| {
    vec![
        Product::new(
            1,
            "Premium Wireless Headphones",
            "Immersive sound with active noise cancellation. Experience crystal-clear audio with 40-hour battery life and premium comfort.",
            299,
            Some(399),
            Category::Electronics,
            "\u{1f3a7}",
            &[
                ("Black", "linear-gradient(135deg, #1a1a1a, #3a3a3a)"),
                ("Gold", "linear-gradient(135deg, #c9a961, #d4af77)"),
                ("White", "linear-gradient(135deg, #e8e8e8, #f5f5f5)"),
            ],
        ),
        Product::new(
            2,
            "Luxury Smartwatch Pro",
            "Advanced fitness tracking and health monitoring. Track your workouts, heart rate, sleep, and more with stunning AMOLED display.",
            449,
            None,
            Category::Electronics,
            "\u{231a}",
            &[
                ("Space Gray", "linear-gradient(135deg, #2c2c2c, #4a4a4a)"),
                ("Gold", "linear-gradient(135deg, #b8860b, #daa520)"),
                ("Silver", "linear-gradient(135deg, #c0c0c0, #e0e0e0)"),
            ],
        ),
        Product::new(
            3,
            "Ultra Sport Sneakers",
            "Lightweight design for maximum performance. Engineered with responsive cushioning and breathable mesh for all-day comfort.",
            159,
            Some(199),
            Category::Fashion,
            "\u{1f45f}",
            &[
                ("White", "linear-gradient(135deg, #ffffff, #e0e0e0)"),
                ("Blue", "linear-gradient(135deg, #1e3a8a, #3b82f6)"),
                ("Red", "linear-gradient(135deg, #991b1b, #dc2626)"),
            ],
        ),
        Product::new(
            4,
            "Aviator Sunglasses",
            "Classic style with UV400 protection. Premium polarized lenses with durable metal frames for timeless sophistication.",
            129,
            Some(179),
            Category::Fashion,
            "\u{1f576}\u{fe0f}",
            &[
                ("Gold", "linear-gradient(135deg, #b8860b, #ffd700)"),
                ("Black", "linear-gradient(135deg, #1a1a1a, #2c2c2c)"),
                ("Brown", "linear-gradient(135deg, #8b4513, #a0522d)"),
            ],
        ),
        Product::new(
            5,
            "Professional Mirrorless Camera",
            "4K video and 45MP sensor for stunning shots. Professional-grade imaging with advanced autofocus and image stabilization.",
            1299,
            None,
            Category::Electronics,
            "\u{1f4f7}",
            &[
                ("Black", "linear-gradient(135deg, #1a1a1a, #2c2c2c)"),
                ("Silver", "linear-gradient(135deg, #708090, #a9a9a9)"),
            ],
        ),
        Product::new(
            6,
            "Urban Minimalist Backpack",
            "Sleek design with laptop compartment. Water-resistant material with multiple pockets and ergonomic straps.",
            89,
            Some(119),
            Category::Lifestyle,
            "\u{1f392}",
            &[
                ("Charcoal", "linear-gradient(135deg, #374151, #4b5563)"),
                ("Navy", "linear-gradient(135deg, #1e3a8a, #1e40af)"),
                ("Black", "linear-gradient(135deg, #1a1a1a, #2c2c2c)"),
            ],
        ),
        Product::new(
            7,
            "Ultra Thin Laptop Pro",
            "Powerful performance in a sleek design. High-resolution display with all-day battery life for professionals on the go.",
            1499,
            None,
            Category::Electronics,
            "\u{1f4bb}",
            &[
                ("Silver", "linear-gradient(135deg, #c0c0c0, #e8e8e8)"),
                ("Space Gray", "linear-gradient(135deg, #2c2c2c, #4a4a4a)"),
            ],
        ),
        Product::new(
            8,
            "Premium Tablet 12\"",
            "Stunning display for work and entertainment. Powerful processor with versatile accessories for productivity.",
            799,
            Some(899),
            Category::Electronics,
            "\u{1f4f1}",
            &[
                ("Black", "linear-gradient(135deg, #1a1a1a, #2c2c2c)"),
                ("White", "linear-gradient(135deg, #e8e8e8, #f5f5f5)"),
                ("Gold", "linear-gradient(135deg, #b8860b, #daa520)"),
            ],
        ),
        Product::new(
            9,
            "True Wireless Earbuds",
            "Crystal clear sound with deep bass. Comfortable fit with long battery life and quick charging case.",
            179,
            Some(229),
            Category::Electronics,
            "\u{1f3b5}",
            &[
                ("White", "linear-gradient(135deg, #ffffff, #e0e0e0)"),
                ("Black", "linear-gradient(135deg, #1a1a1a, #2c2c2c)"),
                ("Pink", "linear-gradient(135deg, #ffc0cb, #ffb6c1)"),
            ],
        ),
        Product::new(
            10,
            "Premium Bomber Jacket",
            "Stylish and comfortable for any season. Premium materials with modern cut and versatile design.",
            249,
            Some(329),
            Category::Fashion,
            "\u{1f9e5}",
            &[
                ("Black", "linear-gradient(135deg, #1a1a1a, #2c2c2c)"),
                ("Navy", "linear-gradient(135deg, #1e3a8a, #1e40af)"),
                ("Green", "linear-gradient(135deg, #065f46, #047857)"),
            ],
        ),
        Product::new(
            11,
            "Insulated Water Bottle",
            "Keeps drinks cold for 24 hours. Durable stainless steel with leak-proof lid and wide mouth opening.",
            35,
            Some(49),
            Category::Lifestyle,
            "\u{1f4a7}",
            &[
                ("Blue", "linear-gradient(135deg, #3b82f6, #60a5fa)"),
                ("Pink", "linear-gradient(135deg, #ec4899, #f472b6)"),
                ("Black", "linear-gradient(135deg, #1a1a1a, #2c2c2c)"),
            ],
        ),
        Product::new(
            12,
            "Smart LED Desk Lamp",
            "Adjustable brightness and color temperature. Touch controls with memory function and USB charging port.",
            79,
            None,
            Category::Lifestyle,
            "\u{1f4a1}",
            &[
                ("White", "linear-gradient(135deg, #ffffff, #e0e0e0)"),
                ("Black", "linear-gradient(135deg, #1a1a1a, #2c2c2c)"),
            ],
        ),
    ]
});

/// The full static catalog, in display order.
#[must_use]
pub fn catalog() -> &'static [Product] {
    &CATALOG
}

/// Look up a catalog product by ID.
#[must_use]
pub fn find(id: u32) -> Option<&'static Product> {
    CATALOG.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_twelve_products() {
        assert_eq!(catalog().len(), 12);
    }

    #[test]
    fn test_catalog_ids_are_unique_and_ordered() {
        let ids: Vec<u32> = catalog().iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=12).collect::<Vec<u32>>());
    }

    #[test]
    fn test_find_by_id() {
        let camera = find(5).expect("product 5 exists");
        assert_eq!(camera.name, "Professional Mirrorless Camera");
        assert_eq!(camera.price, 1299);
        assert_eq!(camera.original_price, None);
        assert_eq!(camera.category, Category::Electronics);
        assert!(find(99).is_none());
    }

    #[test]
    fn test_product_serde_camel_case() {
        let json = serde_json::to_value(find(1).expect("product 1 exists")).expect("serialize");
        assert_eq!(json["originalPrice"], 399);
        assert_eq!(json["category"], "electronics");
        assert_eq!(json["gradient"], "product-gradient-1");
        assert_eq!(json["colors"][0]["name"], "Black");
    }

    #[test]
    fn test_every_product_has_colors() {
        for product in catalog() {
            assert!(
                !product.colors.is_empty(),
                "product {} has no color variants",
                product.id
            );
            assert!(product.price > 0);
        }
    }
}
