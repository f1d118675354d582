//! Shop purchases, equipment toggling and consumable use.

use uuid::Uuid;

use crate::core::events::GameEvent;
use crate::core::game_state::{GameState, LogKind};
use crate::items::catalog::find_template;
use crate::items::types::{ConsumableEffect, ItemKind, OwnedItem};

/// Buys one catalog item by id. Unknown ids are ignored; short gold is
/// refused out loud. Spending every last coin is allowed.
pub fn purchase(state: &mut GameState, item_id: &str) -> Vec<GameEvent> {
    let Some(template) = find_template(item_id) else {
        return Vec::new();
    };
    if state.player.gold < template.price {
        state.push_log(LogKind::Info, "Not enough gold.".to_string());
        return vec![GameEvent::NotEnoughGold {
            item_name: template.name,
        }];
    }

    state.player.gold -= template.price;
    let item = OwnedItem::from_template(&template);
    let item_name = item.name.clone();
    state.player.inventory.push(item);
    state.push_log(LogKind::Gain, format!("Purchased {item_name}."));
    vec![GameEvent::ItemPurchased {
        item_name,
        price: template.price,
    }]
}

/// Equips or unequips a weapon or armor piece by inventory uid.
///
/// Each slot holds one item; equipping into an occupied slot quietly
/// displaces the previous occupant. Consumables are ignored.
pub fn toggle_equip(state: &mut GameState, uid: Uuid) -> Vec<GameEvent> {
    let inventory = &mut state.player.inventory;
    let Some(pos) = inventory.iter().position(|item| item.uid == uid) else {
        return Vec::new();
    };
    let Some(slot) = inventory[pos].kind.slot() else {
        return Vec::new();
    };

    if inventory[pos].equipped {
        inventory[pos].equipped = false;
        let item_name = inventory[pos].name.clone();
        state.push_log(LogKind::Info, format!("Unequipped {item_name}."));
        return vec![GameEvent::ItemUnequipped { item_name }];
    }

    for item in inventory.iter_mut() {
        if item.equipped && item.kind.slot() == Some(slot) {
            item.equipped = false;
        }
    }
    inventory[pos].equipped = true;
    let item_name = inventory[pos].name.clone();
    state.push_log(LogKind::Info, format!("Equipped {item_name}."));
    vec![GameEvent::ItemEquipped { item_name }]
}

/// Drinks or applies a consumable by inventory uid, then discards it.
/// Restoration logs the nominal amount even when capped by a full bar.
pub fn use_consumable(state: &mut GameState, uid: Uuid) -> Vec<GameEvent> {
    let Some(pos) = state
        .player
        .inventory
        .iter()
        .position(|item| item.uid == uid)
    else {
        return Vec::new();
    };
    let ItemKind::Consumable(effect) = state.player.inventory[pos].kind else {
        return Vec::new();
    };

    let item = state.player.inventory.remove(pos);
    let item_name = item.name;

    match effect {
        ConsumableEffect::RestoreHp(amount) => {
            state.player.restore_hp(amount);
            state.push_log(
                LogKind::Gain,
                format!("Used {item_name}: restored {amount} HP."),
            );
        }
        ConsumableEffect::RestoreMp(amount) => {
            state.player.restore_mp(amount);
            state.push_log(
                LogKind::Gain,
                format!("Used {item_name}: restored {amount} MP."),
            );
        }
        ConsumableEffect::PermanentStat(attribute) => {
            state.player.raise_attribute(attribute);
            state.push_log(
                LogKind::Gain,
                format!(
                    "Used {item_name}: {} permanently increased by 1.",
                    attribute.name()
                ),
            );
        }
    }
    vec![GameEvent::ItemUsed { item_name, effect }]
}

/// Sum of attack bonuses over every equipped weapon.
pub fn equipped_weapon_bonus(inventory: &[OwnedItem]) -> u32 {
    inventory
        .iter()
        .filter(|item| item.equipped)
        .filter_map(|item| match item.kind {
            ItemKind::Weapon { attack_bonus } => Some(attack_bonus),
            _ => None,
        })
        .sum()
}

/// Sum of defense bonuses over every equipped armor piece.
pub fn equipped_armor_bonus(inventory: &[OwnedItem]) -> u32 {
    inventory
        .iter()
        .filter(|item| item.equipped)
        .filter_map(|item| match item.kind {
            ItemKind::Armor { defense_bonus, .. } => Some(defense_bonus),
            _ => None,
        })
        .sum()
}
