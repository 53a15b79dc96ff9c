use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a skin in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SkinId(pub u32);

impl SkinId {
    /// The built-in "no skin" look. Always owned, never sold.
    pub const NONE: SkinId = SkinId(0);
}

impl fmt::Display for SkinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How the click control looks when a skin is equipped.
///
/// The engine never interprets this; it is handed to the UI as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkinAsset {
    /// Image drawn on the click control, `None` for the plain button.
    pub image: Option<&'static str>,
    /// Image used for the shop card.
    pub shop_image: &'static str,
    /// Button colour as RGB.
    pub rgb: (u8, u8, u8),
}

/// A purchasable cosmetic variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkinDefinition {
    pub id: SkinId,
    pub name: &'static str,
    /// 0 = free to claim
    pub price: u64,
    pub asset: SkinAsset,
}

impl SkinDefinition {
    pub fn is_free(&self) -> bool {
        self.price == 0
    }
}

pub const SKIN_CATALOG: [SkinDefinition; 4] = [
    SkinDefinition {
        id: SkinId::NONE,
        name: "No skin",
        price: 0,
        asset: SkinAsset {
            image: None,
            shop_image: "item4.png",
            rgb: (0xf5, 0xa7, 0x42), // #f5a742
        },
    },
    SkinDefinition {
        id: SkinId(1),
        name: "Green",
        price: 25_000,
        asset: SkinAsset {
            image: Some("item1.png"),
            shop_image: "item1.png",
            rgb: (0x42, 0xf5, 0x54),
        },
    },
    SkinDefinition {
        id: SkinId(2),
        name: "Blue",
        price: 35_000,
        asset: SkinAsset {
            image: Some("item2.png"),
            shop_image: "item2.png",
            rgb: (0x42, 0xa1, 0xf5),
        },
    },
    SkinDefinition {
        id: SkinId(3),
        name: "Pink",
        price: 50_000,
        asset: SkinAsset {
            image: Some("item3.png"),
            shop_image: "item3.png",
            rgb: (0xf5, 0x42, 0xb3),
        },
    },
];

/// Look up a skin by index.
pub fn lookup(id: SkinId) -> Option<&'static SkinDefinition> {
    SKIN_CATALOG.iter().find(|s| s.id == id)
}

/// All skins in shop order.
pub fn all() -> &'static [SkinDefinition] {
    &SKIN_CATALOG
}
