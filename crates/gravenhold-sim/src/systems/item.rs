//! Item update: magnet attraction and pickup.

use glam::Vec2;
use hecs::World;

use gravenhold_core::components::{Item, Player, Position};
use gravenhold_core::constants::*;
use gravenhold_core::enums::ItemKind;
use gravenhold_core::types::Aabb;

/// Pull nearby items toward the player (magnet unlock) and collect any
/// the player touches.
pub fn run(world: &mut World, player: &mut Player, despawn_buffer: &mut Vec<hecs::Entity>) {
    let player_box = player.aabb();
    for (entity, (item, pos)) in world.query_mut::<(&Item, &mut Position)>() {
        if player.unlocks.magnet && player.position.distance(pos.0) < MAGNET_RADIUS {
            pos.0 += (player.position - pos.0) * MAGNET_PULL;
        }

        if player_box.overlaps(&Aabb::from_pos(pos.0, Vec2::splat(ITEM_SIZE))) {
            match item.kind {
                ItemKind::Food => player.hp = (player.hp + FOOD_HEAL).min(player.max_hp),
                ItemKind::Blood => player.blood += 1,
                ItemKind::Gold => player.gold += item.value,
            }
            despawn_buffer.push(entity);
        }
    }
}
