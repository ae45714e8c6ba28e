//! Player combat: melee swing, fireball cast, ultimate dash.
//!
//! The swing applies damage at most once per enemy per swing instance via
//! the engine's per-swing hit set. The ultimate triangle deliberately has
//! no such limiting; it re-applies every tick it overlaps.

use std::f32::consts::PI;

use glam::Vec2;
use hecs::World;
use rand_chacha::ChaCha8Rng;

use gravenhold_core::components::{Enemy, Player, Position, Prop};
use gravenhold_core::constants::*;
use gravenhold_core::enums::{ProjectileKind, PropKind};
use gravenhold_core::types::Aabb;

use crate::world_setup;

/// Begin a melee swing aimed at the pointer. No-op while a swing or the
/// ultimate is already running.
pub fn start_swing(player: &mut Player, pointer: Vec2, swing_hits: &mut Vec<hecs::Entity>) {
    if player.swing.active || player.ult.active {
        return;
    }
    player.swing.active = true;
    player.swing.progress = 0.0;
    swing_hits.clear();
    let aim = pointer - player.center();
    player.swing.base_angle = aim.y.atan2(aim.x);
}

/// Advance an active swing by one tick: sweep the blade, probe at the tip,
/// damage unhit enemies and chip crates.
pub fn update_swing(
    world: &mut World,
    player: &mut Player,
    swing_hits: &mut Vec<hecs::Entity>,
    rng: &mut ChaCha8Rng,
) {
    if !player.swing.active {
        return;
    }
    player.swing.progress += SWING_PROGRESS_PER_TICK;

    let angle =
        player.swing.base_angle - SWING_ARC * 0.5 + SWING_ARC * player.swing.progress.min(1.0);
    player.swing.angle = angle;

    let dir = Vec2::new(angle.cos(), angle.sin());
    let reach = SWING_BASE_REACH + player.sword_tier as f32 * SWING_REACH_PER_TIER;
    let tip = player.center() + dir * reach;
    let probe = Aabb::from_pos(
        tip - Vec2::splat(SWING_PROBE_SIZE * 0.5),
        Vec2::splat(SWING_PROBE_SIZE),
    );
    let damage = SWING_BASE_DAMAGE + player.sword_tier as f32 * SWING_DAMAGE_PER_TIER;

    let mut hit_bursts: Vec<Vec2> = Vec::new();
    for (entity, (enemy, pos)) in world.query_mut::<(&mut Enemy, &mut Position)>() {
        if swing_hits.contains(&entity) {
            continue;
        }
        if probe.overlaps(&Aabb::from_pos(pos.0, enemy.size)) {
            enemy.hp -= damage;
            pos.0 += dir * SWING_KNOCKBACK;
            swing_hits.push(entity);
            hit_bursts.push(pos.0);
        }
    }

    let mut chip_bursts: Vec<Vec2> = Vec::new();
    let mut broken: Vec<Vec2> = Vec::new();
    for (_entity, (prop, pos)) in world.query_mut::<(&mut Prop, &Position)>() {
        if prop.active
            && prop.kind == PropKind::Crate
            && probe.overlaps(&Aabb::from_pos(pos.0, prop.size))
        {
            prop.hp -= SWING_CRATE_DAMAGE;
            chip_bursts.push(pos.0);
            if prop.hp <= 0.0 {
                prop.active = false;
                broken.push(pos.0);
            }
        }
    }

    for pos in hit_bursts {
        world_setup::spawn_particles(world, rng, pos, COLOR_HIT_FLASH, 2);
    }
    for pos in chip_bursts {
        world_setup::spawn_particles(world, rng, pos, COLOR_CRATE_CHIP, 2);
    }
    world_setup::crate_breaks(world, rng, &broken);

    if player.swing.progress >= 1.0 {
        player.swing.active = false;
    }
}

/// Cast a fireball toward the pointer. Silently fails (no projectile,
/// mana unchanged) when mana is short.
pub fn cast_fireball(world: &mut World, player: &mut Player, pointer: Vec2) {
    if player.mana < FIREBALL_MANA_COST {
        return;
    }
    player.mana -= FIREBALL_MANA_COST;
    let aim = pointer - player.center();
    let angle = aim.y.atan2(aim.x);
    world_setup::spawn_projectile(
        world,
        player.center(),
        ProjectileKind::Fireball,
        Vec2::new(angle.cos(), angle.sin()) * FIREBALL_SPEED,
        false,
    );
}

/// Trigger the ultimate dash. Requires the maximum sword tier, enough
/// mana, and no dash already running.
pub fn trigger_ultimate(player: &mut Player, pointer: Vec2) {
    if player.sword_tier < SWORD_TIER_MAX || player.ult.active || player.mana < ULT_MANA_COST {
        return;
    }
    player.mana -= ULT_MANA_COST;
    player.ult.active = true;
    player.ult.timer = ULT_DURATION_TICKS;
    let aim = pointer - player.position;
    player.ult.direction = aim.y.atan2(aim.x);
}

/// One tick of an active ultimate: lock velocity along the dash, damage
/// everything in the backward triangle plus anything riding the player.
pub fn run_ultimate(world: &mut World, player: &mut Player, rng: &mut ChaCha8Rng) {
    if !player.ult.active {
        return;
    }

    let heading = player.ult.direction;
    player.velocity = Vec2::new(heading.cos(), heading.sin()) * ULT_SPEED;

    let apex = player.center();
    let left = heading + PI - ULT_TRIANGLE_HALF_ANGLE;
    let right = heading + PI + ULT_TRIANGLE_HALF_ANGLE;
    let wing_l = apex + Vec2::new(left.cos(), left.sin()) * ULT_TRIANGLE_LENGTH;
    let wing_r = apex + Vec2::new(right.cos(), right.sin()) * ULT_TRIANGLE_LENGTH;

    let player_box = player.aabb();
    let mut bursts: Vec<Vec2> = Vec::new();
    for (_entity, (enemy, pos)) in world.query_mut::<(&mut Enemy, &Position)>() {
        let rect = Aabb::from_pos(pos.0, enemy.size);
        if point_in_triangle(rect.center(), apex, wing_l, wing_r) {
            enemy.hp -= ULT_TRIANGLE_DAMAGE;
            bursts.push(pos.0);
        }
        // Contact damage during the dash stacks with the triangle.
        if rect.overlaps(&player_box) {
            enemy.hp -= ULT_CONTACT_DAMAGE;
        }
    }

    let mut broken: Vec<Vec2> = Vec::new();
    for (_entity, (prop, pos)) in world.query_mut::<(&mut Prop, &Position)>() {
        if prop.active
            && prop.kind == PropKind::Crate
            && point_in_triangle(
                Aabb::from_pos(pos.0, prop.size).center(),
                apex,
                wing_l,
                wing_r,
            )
        {
            prop.hp -= ULT_CRATE_DAMAGE;
            if prop.hp <= 0.0 {
                prop.active = false;
                broken.push(pos.0);
            }
        }
    }

    world_setup::spawn_particles(world, rng, apex, COLOR_ULT_TRAIL, 4);
    for pos in bursts {
        world_setup::spawn_particles(world, rng, pos, COLOR_ULT_TRAIL, 1);
    }
    world_setup::crate_breaks(world, rng, &broken);

    player.ult.timer = player.ult.timer.saturating_sub(1);
    if player.ult.timer == 0 {
        player.ult.active = false;
    }
}

/// Point-in-triangle via consistent signed-area evaluation; handles both
/// windings.
pub fn point_in_triangle(p: Vec2, p0: Vec2, p1: Vec2, p2: Vec2) -> bool {
    let s = p0.y * p2.x - p0.x * p2.y + (p2.y - p0.y) * p.x + (p0.x - p2.x) * p.y;
    let t = p0.x * p1.y - p0.y * p1.x + (p0.y - p1.y) * p.x + (p1.x - p0.x) * p.y;
    let area = -p1.y * p2.x + p0.y * (p2.x - p1.x) + p0.x * (p1.y - p2.y) + p1.x * p2.y;
    if area < 0.0 {
        s <= 0.0 && s + t >= area
    } else {
        s >= 0.0 && s + t <= area
    }
}
