//! One simulation step over the whole particle population
//!
//! The order is fixed: the charge and collapse scans only look at docked
//! particles, so docking has to finish first.
//!
//! 1. advance every particle
//! 2. cull particles outside the playfield
//! 3. decay fire touching the sun
//! 4. dock or explode movers touching the structure
//! 5. resolve adjacent charges
//! 6. collapse completed clusters

use rand::Rng;

use super::charge::{SunDisc, resolve_charges, resolve_sun_impacts};
use super::cluster::escalate;
use super::collision::resolve_collisions;
use super::event::SimEvent;
use super::proximity::in_bounds;
use super::world::World;
use crate::screen_center;
use crate::tuning::Tuning;

/// Advance the world by `dt` seconds
pub fn step<R: Rng + ?Sized>(
    world: &mut World,
    dt: f32,
    sun: SunDisc,
    tuning: &Tuning,
    rng: &mut R,
) {
    for particle in world.particles_mut() {
        particle.advance(dt);
    }

    cull_out_of_bounds(world, tuning.screen_width, tuning.screen_height);

    resolve_sun_impacts(
        world,
        sun,
        tuning.radioactive_speed,
        tuning.radioactive_spread_deg,
        rng,
    );

    resolve_collisions(world);

    let center = screen_center(tuning.screen_width, tuning.screen_height);
    resolve_charges(world, center, tuning.fire_speed);
    escalate(world, center);
}

/// Remove every particle whose center left the playfield
pub fn cull_out_of_bounds(world: &mut World, width: f32, height: f32) {
    let outside: Vec<_> = world
        .iter()
        .filter(|(_, p)| !in_bounds(p, width, height))
        .map(|(id, _)| id)
        .collect();

    for id in outside {
        world.remove(id);
        world.push_event(SimEvent::Culled { id });
    }
}
