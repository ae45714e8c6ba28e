//! Economy: sword upgrades at the forge, one-time unlocks at the altar.
//!
//! Every guard failure is a silent no-op: insufficient currency, maxed
//! tier, or an already-owned unlock leaves the player untouched.

use gravenhold_core::components::Player;
use gravenhold_core::constants::*;
use gravenhold_core::enums::AltarUnlock;

/// Gold cost to upgrade from the given tier. None at max tier.
pub fn sword_upgrade_cost(tier: u8) -> Option<u32> {
    FORGE_COSTS.get(tier as usize).copied()
}

/// Buy the next sword tier. Returns whether the purchase went through.
pub fn try_upgrade_sword(player: &mut Player) -> bool {
    let Some(cost) = sword_upgrade_cost(player.sword_tier) else {
        return false;
    };
    if player.gold < cost as f32 {
        return false;
    }
    player.gold -= cost as f32;
    player.sword_tier += 1;
    true
}

/// Blood cost of an altar unlock.
pub fn altar_cost(unlock: AltarUnlock) -> u32 {
    match unlock {
        AltarUnlock::Magnet => ALTAR_COST_MAGNET,
        AltarUnlock::Minimap => ALTAR_COST_MINIMAP,
        AltarUnlock::Pause => ALTAR_COST_PAUSE,
    }
}

/// Buy a one-time altar unlock. No-op if already owned or blood is short.
pub fn try_buy_unlock(player: &mut Player, unlock: AltarUnlock) -> bool {
    if player.unlocks.owns(unlock) {
        return false;
    }
    let cost = altar_cost(unlock);
    if player.blood < cost {
        return false;
    }
    player.blood -= cost;
    match unlock {
        AltarUnlock::Magnet => player.unlocks.magnet = true,
        AltarUnlock::Minimap => player.unlocks.minimap = true,
        AltarUnlock::Pause => player.unlocks.pause = true,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn player() -> Player {
        Player::spawn_at(Vec2::ZERO)
    }

    #[test]
    fn upgrade_succeeds_with_exact_gold() {
        let mut p = player();
        p.gold = FORGE_COSTS[0] as f32;
        assert!(try_upgrade_sword(&mut p));
        assert_eq!(p.sword_tier, 1);
        assert_eq!(p.gold, 0.0);
    }

    #[test]
    fn upgrade_rejected_when_gold_short() {
        let mut p = player();
        p.gold = FORGE_COSTS[0] as f32 - 1.0;
        assert!(!try_upgrade_sword(&mut p));
        assert_eq!(p.sword_tier, 0);
        assert_eq!(p.gold, FORGE_COSTS[0] as f32 - 1.0);
    }

    #[test]
    fn upgrade_at_max_tier_is_noop() {
        let mut p = player();
        p.sword_tier = SWORD_TIER_MAX;
        p.gold = 100_000.0;
        assert!(!try_upgrade_sword(&mut p));
        assert_eq!(p.sword_tier, SWORD_TIER_MAX);
        assert_eq!(p.gold, 100_000.0);
    }

    #[test]
    fn full_upgrade_path_costs_the_whole_table() {
        let mut p = player();
        let total: u32 = FORGE_COSTS.iter().sum();
        p.gold = total as f32;
        for expected_tier in 1..=SWORD_TIER_MAX {
            assert!(try_upgrade_sword(&mut p));
            assert_eq!(p.sword_tier, expected_tier);
        }
        assert_eq!(p.gold, 0.0);
        assert_eq!(sword_upgrade_cost(p.sword_tier), None);
    }

    #[test]
    fn altar_unlock_deducts_blood_once() {
        let mut p = player();
        p.blood = ALTAR_COST_MAGNET + 3;
        assert!(try_buy_unlock(&mut p, AltarUnlock::Magnet));
        assert!(p.unlocks.magnet);
        assert_eq!(p.blood, 3);
    }

    #[test]
    fn rebuying_owned_unlock_is_noop_regardless_of_blood() {
        let mut p = player();
        p.blood = 1_000;
        assert!(try_buy_unlock(&mut p, AltarUnlock::Pause));
        let after_first = p.blood;
        assert!(!try_buy_unlock(&mut p, AltarUnlock::Pause));
        assert_eq!(p.blood, after_first);
        assert!(p.unlocks.pause);
    }

    #[test]
    fn unlock_rejected_when_blood_short() {
        let mut p = player();
        p.blood = ALTAR_COST_MINIMAP - 1;
        assert!(!try_buy_unlock(&mut p, AltarUnlock::Minimap));
        assert!(!p.unlocks.minimap);
        assert_eq!(p.blood, ALTAR_COST_MINIMAP - 1);
    }
}
