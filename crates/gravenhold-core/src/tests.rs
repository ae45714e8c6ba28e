#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::commands::PlayerCommand;
    use crate::components::{EnemyBehavior, Player, Unlocks};
    use crate::constants::*;
    use crate::enums::*;
    use crate::state::HudSnapshot;
    use crate::types::{Aabb, SimTime};

    /// Verify the tagged enums round-trip through serde_json.
    #[test]
    fn test_enemy_kind_serde() {
        let variants = vec![
            EnemyKind::Skeleton,
            EnemyKind::Zombie,
            EnemyKind::Bat,
            EnemyKind::Archer,
            EnemyKind::Ghost,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: EnemyKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_run_state_serde() {
        let variants = vec![
            RunState::Running,
            RunState::Paused,
            RunState::GameOver,
            RunState::Victory,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: RunState = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_modal_state_serde() {
        for v in [ModalState::None, ModalState::Forge, ModalState::Altar] {
            let json = serde_json::to_string(&v).unwrap();
            let back: ModalState = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_enemy_behavior_serde() {
        let variants = vec![
            EnemyBehavior::Skeleton,
            EnemyBehavior::Zombie,
            EnemyBehavior::Bat { phase: 1.25 },
            EnemyBehavior::Archer {
                range: ARCHER_RANGE,
                shoot_cooldown: 42,
            },
            EnemyBehavior::Ghost,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: EnemyBehavior = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
            assert_eq!(v.kind(), back.kind());
        }
    }

    #[test]
    fn test_command_serde_tagged() {
        let cmd = PlayerCommand::SetMoveAxis { x: -1.0, y: 0.5 };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"type\":\"SetMoveAxis\""));
        let back: PlayerCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(cmd, back);

        let cmd = PlayerCommand::BuyAltarUnlock {
            unlock: AltarUnlock::Minimap,
        };
        let json = serde_json::to_string(&cmd).unwrap();
        let back: PlayerCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(cmd, back);
    }

    #[test]
    fn test_snapshot_serde_round_trip() {
        let snap = HudSnapshot {
            hp: 73.5,
            max_hp: 100.0,
            wave: 3,
            max_wave: WAVE_MAX,
            wave_countdown_secs: Some(7),
            active_modal: ModalState::Forge,
            ..Default::default()
        };
        let json = serde_json::to_string(&snap).unwrap();
        let back: HudSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snap, back);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut t = SimTime::default();
        for _ in 0..TICK_RATE {
            t.advance();
        }
        assert_eq!(t.tick, TICK_RATE as u64);
        assert!((t.elapsed_secs - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_aabb_overlap() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        // Touching edges do not overlap.
        let c = Aabb::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&c));

        let d = Aabb::new(30.0, 30.0, 4.0, 4.0);
        assert!(!a.overlaps(&d));

        assert_eq!(a.center(), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_player_spawn_defaults() {
        let p = Player::spawn_at(Vec2::new(100.0, 200.0));
        assert_eq!(p.hp, PLAYER_MAX_HP);
        assert_eq!(p.mana, PLAYER_MAX_MANA);
        assert_eq!(p.sword_tier, 0);
        assert_eq!(p.gold, 0.0);
        assert_eq!(p.blood, 0);
        assert!(!p.swing.active);
        assert!(!p.ult.active);
        assert_eq!(p.center(), Vec2::new(107.0, 209.0));
    }

    #[test]
    fn test_unlocks_owns() {
        let u = Unlocks {
            magnet: true,
            minimap: false,
            pause: true,
        };
        assert!(u.owns(AltarUnlock::Magnet));
        assert!(!u.owns(AltarUnlock::Minimap));
        assert!(u.owns(AltarUnlock::Pause));
    }

    #[test]
    fn test_forge_cost_table() {
        assert_eq!(FORGE_COSTS.len(), SWORD_TIER_MAX as usize);
        // Costs escalate tier over tier.
        assert!(FORGE_COSTS.windows(2).all(|w| w[0] < w[1]));
    }
}
