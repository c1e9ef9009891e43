//! Static model and product catalogs.
//!
//! The fitting room reads from two fixed, in-memory collections: the
//! catalog models (reference person photos with body-shape metadata)
//! and the purchasable garments. Nothing here is ever mutated or
//! persisted.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier for a catalog model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelId(u32);

impl ModelId {
    /// Create a new model id.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

/// Identifier for a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(u32);

impl ProductId {
    /// Create a new product id.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

/// Currency glyph prefixed to every displayed price.
pub const CURRENCY_GLYPH: &str = "₹";

/// A price in integer minor currency units (e.g. paise).
///
/// Stored as an integer so arithmetic and comparison stay exact; the
/// `Display` impl renders the major-unit value to exactly two decimal
/// places, prefixed with [`CURRENCY_GLYPH`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Price(u32);

impl Price {
    /// Create a price from integer minor units.
    #[must_use]
    pub const fn from_minor_units(units: u32) -> Self {
        Self(units)
    }

    /// The raw minor-unit value.
    #[must_use]
    pub const fn minor_units(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Integer math only: 12345 renders as ₹123.45.
        write!(f, "{CURRENCY_GLYPH}{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// T-shirts.
    Tees,
    /// Hoodies and sweatshirts.
    Hoodies,
    /// Jackets, coats, and parkas.
    Outerwear,
    /// Bags, belts, and similar non-garment items.
    Accessories,
    /// Shoes.
    Footwear,
}

impl Category {
    /// Whether garments in this category can be tried on in the
    /// fitting room. Only tees, hoodies, and outerwear qualify.
    #[must_use]
    pub const fn is_try_on(self) -> bool {
        matches!(self, Self::Tees | Self::Hoodies | Self::Outerwear)
    }
}

/// A catalog model: a reference person photo with body-shape metadata,
/// used as a stand-in for the user's own photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FitModel {
    /// Unique model id.
    pub id: ModelId,
    /// Display name.
    pub name: &'static str,
    /// Image reference (served as a static asset).
    pub image: &'static str,
    /// Height label, e.g. `5'6"`.
    pub height: &'static str,
    /// Build label, e.g. `athletic`.
    pub build: &'static str,
}

/// A purchasable garment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Product {
    /// Unique product id.
    pub id: ProductId,
    /// Display name.
    pub name: &'static str,
    /// URL slug; the product detail page lives at `/product/{slug}`.
    pub slug: &'static str,
    /// Price in integer minor units.
    pub price: Price,
    /// Short description.
    pub description: &'static str,
    /// Product category.
    pub category: Category,
    /// Ordered image references; the first is the tile thumbnail.
    pub images: &'static [&'static str],
}

/// The fixed catalog of fitting-room models.
pub const FIT_MODELS: &[FitModel] = &[
    FitModel {
        id: ModelId::new(1),
        name: "Maya",
        image: "/assets/models/maya.jpg",
        height: "5'6\"",
        build: "athletic",
    },
    FitModel {
        id: ModelId::new(2),
        name: "Arjun",
        image: "/assets/models/arjun.jpg",
        height: "5'11\"",
        build: "slim",
    },
    FitModel {
        id: ModelId::new(3),
        name: "Sana",
        image: "/assets/models/sana.jpg",
        height: "5'4\"",
        build: "petite",
    },
    FitModel {
        id: ModelId::new(4),
        name: "Dev",
        image: "/assets/models/dev.jpg",
        height: "6'1\"",
        build: "broad",
    },
];

/// The fixed product catalog, in merchandising order.
pub const PRODUCTS: &[Product] = &[
    Product {
        id: ProductId::new(1),
        name: "Classic Crew Tee",
        slug: "classic-crew-tee",
        price: Price::from_minor_units(129_900),
        description: "Midweight combed-cotton tee with a ribbed crew neck.",
        category: Category::Tees,
        images: &[
            "/assets/products/classic-crew-tee-front.jpg",
            "/assets/products/classic-crew-tee-back.jpg",
        ],
    },
    Product {
        id: ProductId::new(2),
        name: "Graphic Print Tee",
        slug: "graphic-print-tee",
        price: Price::from_minor_units(149_900),
        description: "Relaxed-fit tee with a water-based front print.",
        category: Category::Tees,
        images: &["/assets/products/graphic-print-tee-front.jpg"],
    },
    Product {
        id: ProductId::new(3),
        name: "Heavyweight Pocket Tee",
        slug: "heavyweight-pocket-tee",
        price: Price::from_minor_units(169_900),
        description: "Boxy 240 gsm tee with a single chest pocket.",
        category: Category::Tees,
        images: &["/assets/products/heavyweight-pocket-tee-front.jpg"],
    },
    Product {
        id: ProductId::new(4),
        name: "Zip-Up Hoodie",
        slug: "zip-up-hoodie",
        price: Price::from_minor_units(299_900),
        description: "Brushed-fleece hoodie with a two-way metal zip.",
        category: Category::Hoodies,
        images: &[
            "/assets/products/zip-up-hoodie-front.jpg",
            "/assets/products/zip-up-hoodie-detail.jpg",
        ],
    },
    Product {
        id: ProductId::new(5),
        name: "Canvas Tote",
        slug: "canvas-tote",
        price: Price::from_minor_units(89_900),
        description: "Heavy canvas tote with an interior zip pocket.",
        category: Category::Accessories,
        images: &["/assets/products/canvas-tote.jpg"],
    },
    Product {
        id: ProductId::new(6),
        name: "Oversized Pullover Hoodie",
        slug: "oversized-pullover-hoodie",
        price: Price::from_minor_units(279_900),
        description: "Dropped-shoulder pullover in loopback terry.",
        category: Category::Hoodies,
        images: &["/assets/products/oversized-pullover-hoodie-front.jpg"],
    },
    Product {
        id: ProductId::new(7),
        name: "Quilted Bomber Jacket",
        slug: "quilted-bomber-jacket",
        price: Price::from_minor_units(549_900),
        description: "Diamond-quilted bomber with ribbed hem and cuffs.",
        category: Category::Outerwear,
        images: &[
            "/assets/products/quilted-bomber-jacket-front.jpg",
            "/assets/products/quilted-bomber-jacket-side.jpg",
        ],
    },
    Product {
        id: ProductId::new(8),
        name: "Low-Top Sneakers",
        slug: "low-top-sneakers",
        price: Price::from_minor_units(399_900),
        description: "Leather low-tops on a cupsole with tonal laces.",
        category: Category::Footwear,
        images: &["/assets/products/low-top-sneakers.jpg"],
    },
    Product {
        id: ProductId::new(9),
        name: "Longline Parka",
        slug: "longline-parka",
        price: Price::from_minor_units(699_900),
        description: "Water-resistant parka with a drawcord hood.",
        category: Category::Outerwear,
        images: &["/assets/products/longline-parka-front.jpg"],
    },
];

/// Maximum number of try-on tiles shown in the product selector.
pub const MAX_TRY_ON_TILES: usize = 6;

/// Look up a catalog model by id.
#[must_use]
pub fn model(id: ModelId) -> Option<&'static FitModel> {
    FIT_MODELS.iter().find(|m| m.id == id)
}

/// Look up a product by id.
#[must_use]
pub fn product(id: ProductId) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.id == id)
}

/// The products offered as try-on tiles: catalog order preserved,
/// restricted to try-on categories, capped at [`MAX_TRY_ON_TILES`].
#[must_use]
pub fn try_on_candidates() -> Vec<&'static Product> {
    PRODUCTS
        .iter()
        .filter(|p| p.category.is_try_on())
        .take(MAX_TRY_ON_TILES)
        .collect()
}

/// Whether a product id belongs to the try-on candidate set.
///
/// This is the gate that makes selecting a product outside the
/// filtered set impossible through the selection interface.
#[must_use]
pub fn is_try_on_candidate(id: ProductId) -> bool {
    try_on_candidates().iter().any(|p| p.id == id)
}
