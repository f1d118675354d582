#![allow(dead_code)]
use crate::character::attributes::AttributeType;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipSlot {
    Weapon,
    Head,
    Body,
    Accessory,
}

impl EquipSlot {
    pub fn name(&self) -> &'static str {
        match self {
            EquipSlot::Weapon => "Weapon",
            EquipSlot::Head => "Head",
            EquipSlot::Body => "Body",
            EquipSlot::Accessory => "Accessory",
        }
    }
}

/// What a consumable does when used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsumableEffect {
    RestoreHp(u32),
    RestoreMp(u32),
    /// Permanently raises one attribute by a point, with the same
    /// max HP/MP side effects as spending a stat point on it.
    PermanentStat(AttributeType),
}

/// Mechanical identity of an item. Equipment carries its combat bonus
/// here; consumables carry their effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Consumable(ConsumableEffect),
    Weapon { attack_bonus: u32 },
    Armor { slot: EquipSlot, defense_bonus: u32 },
}

impl ItemKind {
    /// The slot this item occupies when equipped, if it is equipment.
    pub fn slot(&self) -> Option<EquipSlot> {
        match self {
            ItemKind::Consumable(_) => None,
            ItemKind::Weapon { .. } => Some(EquipSlot::Weapon),
            ItemKind::Armor { slot, .. } => Some(*slot),
        }
    }

    pub fn is_equippable(&self) -> bool {
        self.slot().is_some()
    }

    pub fn category(&self) -> ItemCategory {
        match self {
            ItemKind::Consumable(_) => ItemCategory::Consumable,
            ItemKind::Weapon { .. } => ItemCategory::Weapon,
            ItemKind::Armor { .. } => ItemCategory::Armor,
        }
    }
}

/// Coarse grouping used by the shop filter and inventory tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemCategory {
    Consumable,
    Weapon,
    Armor,
}

impl ItemCategory {
    pub fn all() -> [ItemCategory; 3] {
        [
            ItemCategory::Consumable,
            ItemCategory::Weapon,
            ItemCategory::Armor,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ItemCategory::Consumable => "Consumable",
            ItemCategory::Weapon => "Weapon",
            ItemCategory::Armor => "Armor",
        }
    }
}

/// Catalog entry sold by the shop.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemTemplate {
    pub id: String,
    pub name: String,
    pub kind: ItemKind,
    pub price: u64,
    pub description: String,
}

/// An item instance in a player's inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnedItem {
    pub uid: Uuid,
    pub template_id: String,
    pub name: String,
    pub kind: ItemKind,
    pub description: String,
    pub equipped: bool,
}

impl OwnedItem {
    /// Mints a fresh instance of a catalog entry, unequipped.
    pub fn from_template(template: &ItemTemplate) -> Self {
        Self {
            uid: Uuid::new_v4(),
            template_id: template.id.clone(),
            name: template.name.clone(),
            kind: template.kind,
            description: template.description.clone(),
            equipped: false,
        }
    }
}
