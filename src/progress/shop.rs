//! The cosmetic shop catalog
//!
//! Fixed catalog of backgrounds and skins. One free default item per kind is
//! owned from the start; everything else is bought with coins. Catalog ids
//! are only unique per kind (both defaults are `"default"`), so lookups
//! always pair the id with the kind.

use serde::{Deserialize, Serialize};

/// What a shop item changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShopItemKind {
    Background,
    Skin,
}

impl ShopItemKind {
    /// Human-readable kind label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Background => "Background",
            Self::Skin => "Skin",
        }
    }
}

/// One purchasable cosmetic item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopItem {
    pub(crate) id: String,
    pub(crate) kind: ShopItemKind,
    pub(crate) name: String,
    pub(crate) price: u32,
    pub(crate) asset: String,
    pub(crate) is_purchased: bool,
    pub(crate) is_default: bool,
}

impl ShopItem {
    fn new(id: &str, kind: ShopItemKind, name: &str, price: u32, asset: &str) -> Self {
        Self {
            id: id.to_owned(),
            kind,
            name: name.to_owned(),
            price,
            asset: asset.to_owned(),
            is_purchased: false,
            is_default: false,
        }
    }

    fn free_default(id: &str, kind: ShopItemKind, name: &str, asset: &str) -> Self {
        Self {
            is_purchased: true,
            is_default: true,
            ..Self::new(id, kind, name, 0, asset)
        }
    }

    /// Catalog id, unique within the item's kind
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub const fn kind(&self) -> ShopItemKind {
        self.kind
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price in coins (0 for the free defaults)
    #[must_use]
    pub const fn price(&self) -> u32 {
        self.price
    }

    /// Asset reference for the rendering layer
    #[must_use]
    pub fn asset(&self) -> &str {
        &self.asset
    }

    #[must_use]
    pub const fn is_purchased(&self) -> bool {
        self.is_purchased
    }

    /// Free item usable without purchase
    #[must_use]
    pub const fn is_default(&self) -> bool {
        self.is_default
    }
}

/// The full fixed catalog: four backgrounds and four skins
pub(crate) fn default_catalog() -> Vec<ShopItem> {
    vec![
        // Backgrounds
        ShopItem::free_default("default", ShopItemKind::Background, "Classic", "bg_default"),
        ShopItem::new("lab", ShopItemKind::Background, "Lab", 200, "bg_lab"),
        ShopItem::new("garden", ShopItemKind::Background, "Garden", 200, "bg_garden"),
        ShopItem::new("neon", ShopItemKind::Background, "Neon", 300, "bg_neon"),
        // Skins
        ShopItem::free_default("default", ShopItemKind::Skin, "Classic", "skin_default"),
        ShopItem::new("arctic", ShopItemKind::Skin, "Arctic", 150, "skin_arctic"),
        ShopItem::new("zen", ShopItemKind::Skin, "Zen", 250, "skin_zen"),
        ShopItem::new("cyber", ShopItemKind::Skin, "Cyber", 400, "skin_cyber"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_one_default_per_kind() {
        let catalog = default_catalog();
        for kind in [ShopItemKind::Background, ShopItemKind::Skin] {
            let defaults: Vec<_> = catalog
                .iter()
                .filter(|item| item.kind() == kind && item.is_default())
                .collect();
            assert_eq!(defaults.len(), 1);
            assert!(defaults[0].is_purchased());
            assert_eq!(defaults[0].price(), 0);
        }
    }

    #[test]
    fn catalog_ids_are_unique_within_kind() {
        let catalog = default_catalog();
        for item in &catalog {
            let same: Vec<_> = catalog
                .iter()
                .filter(|other| other.kind() == item.kind() && other.id() == item.id())
                .collect();
            assert_eq!(same.len(), 1, "duplicate id {} in {:?}", item.id(), item.kind());
        }
    }

    #[test]
    fn paid_items_start_unpurchased() {
        for item in default_catalog() {
            if !item.is_default() {
                assert!(!item.is_purchased());
                assert!(item.price() > 0);
            }
        }
    }
}
