//! The hunter shop catalog.
//!
//! Potions and elixirs come in fixed tiers; weapons and armor are the
//! cross product of a base type and a craftsmanship grade. A handful of
//! unique relics round out the list.

use crate::character::attributes::AttributeType;
use crate::core::constants::{ARMOR_BASE_DEFENSE, ELIXIR_PRICE, WEAPON_BASE_ATTACK};
use crate::items::types::{ConsumableEffect, EquipSlot, ItemKind, ItemTemplate};

// (display tier, id slug, HP restored, price); mana potions restore and
// cost half of the matching tier
const POTION_TIERS: [(&str, &str, u32, u64); 5] = [
    ("Lesser", "lesser", 100, 100),
    ("Mid-grade", "mid", 500, 400),
    ("High-grade", "high", 1500, 1000),
    ("Top-grade", "top", 5000, 3000),
    ("Miracle", "miracle", 99999, 10000),
];

// (display name, id slug, damage factor)
const WEAPON_TYPES: [(&str, &str, f64); 4] = [
    ("Dagger", "dagger", 1.0),
    ("Longsword", "longsword", 1.5),
    ("Greatsword", "greatsword", 2.0),
    ("Scythe", "scythe", 2.5),
];

// (display name, id slug, slot)
const ARMOR_PIECES: [(&str, &str, EquipSlot); 4] = [
    ("Helmet", "helmet", EquipSlot::Head),
    ("Plate Armor", "plate", EquipSlot::Body),
    ("Cloak", "cloak", EquipSlot::Accessory),
    ("Ring", "ring", EquipSlot::Accessory),
];

// (display grade, id slug, stat factor, price)
const GEAR_GRADES: [(&str, &str, f64, u64); 6] = [
    ("Worn", "worn", 0.5, 500),
    ("Steel", "steel", 1.2, 2_000),
    ("Masterwork", "masterwork", 2.5, 8_000),
    ("Legendary", "legendary", 6.0, 30_000),
    ("Mythic", "mythic", 15.0, 100_000),
    ("Monarch's", "monarch", 40.0, 500_000),
];

/// Returns every item the shop sells.
pub fn get_shop_catalog() -> Vec<ItemTemplate> {
    let mut catalog = Vec::new();

    for (tier, slug, restore, price) in POTION_TIERS {
        catalog.push(ItemTemplate {
            id: format!("hp_{slug}"),
            name: format!("{tier} Healing Potion"),
            kind: ItemKind::Consumable(ConsumableEffect::RestoreHp(restore)),
            price,
            description: format!("Restores {restore} HP."),
        });
    }
    for (tier, slug, restore, price) in POTION_TIERS {
        let restore = restore / 2;
        catalog.push(ItemTemplate {
            id: format!("mp_{slug}"),
            name: format!("{tier} Mana Potion"),
            kind: ItemKind::Consumable(ConsumableEffect::RestoreMp(restore)),
            price: price / 2,
            description: format!("Restores {restore} MP."),
        });
    }

    for attr in AttributeType::all() {
        catalog.push(ItemTemplate {
            id: format!("elixir_{}", attr.name().to_lowercase()),
            name: format!("Elixir of {}", attr.name()),
            kind: ItemKind::Consumable(ConsumableEffect::PermanentStat(attr)),
            price: ELIXIR_PRICE,
            description: format!("Permanently increases {} by 1.", attr.name()),
        });
    }

    for (weapon, weapon_slug, damage_factor) in WEAPON_TYPES {
        for (grade, grade_slug, grade_factor, price) in GEAR_GRADES {
            let attack_bonus = (WEAPON_BASE_ATTACK * damage_factor * grade_factor) as u32;
            catalog.push(ItemTemplate {
                id: format!("wpn_{weapon_slug}_{grade_slug}"),
                name: format!("{grade} {weapon}"),
                kind: ItemKind::Weapon { attack_bonus },
                price,
                description: format!("Attack +{attack_bonus}."),
            });
        }
    }

    for (piece, piece_slug, slot) in ARMOR_PIECES {
        for (grade, grade_slug, grade_factor, price) in GEAR_GRADES {
            let defense_bonus = (ARMOR_BASE_DEFENSE * grade_factor) as u32;
            catalog.push(ItemTemplate {
                id: format!("arm_{piece_slug}_{grade_slug}"),
                name: format!("{grade} {piece}"),
                kind: ItemKind::Armor {
                    slot,
                    defense_bonus,
                },
                price,
                description: format!("Defense +{defense_bonus}."),
            });
        }
    }

    catalog.push(ItemTemplate {
        id: "kasaka_fang".to_string(),
        name: "Kasaka's Venom Fang".to_string(),
        kind: ItemKind::Weapon { attack_bonus: 120 },
        price: 15_000,
        description: "A dagger carved from the venom fang of Kasaka.".to_string(),
    });
    catalog.push(ItemTemplate {
        id: "demon_king_dagger".to_string(),
        name: "Demon King's Dagger".to_string(),
        kind: ItemKind::Weapon { attack_bonus: 450 },
        price: 80_000,
        description: "The dagger of the Demon King Baran.".to_string(),
    });
    catalog.push(ItemTemplate {
        id: "orb_of_avarice".to_string(),
        name: "Orb of Avarice".to_string(),
        kind: ItemKind::Armor {
            slot: EquipSlot::Accessory,
            defense_bonus: 800,
        },
        price: 120_000,
        description: "An orb that amplifies its bearer's magic.".to_string(),
    });

    catalog
}

/// Looks up a single catalog entry by id.
pub fn find_template(id: &str) -> Option<ItemTemplate> {
    get_shop_catalog().into_iter().find(|t| t.id == id)
}
