//! Charge interactions and decay chains
//!
//! Docked charge particles react with adjacent charges:
//! - like charges repel and annihilate into a single fire particle
//! - opposite charges attract and condense into two base-tier neutrals
//!
//! Fire drifts outward; when it reaches the sun it decays into two
//! radioactive particles thrown back out with a random spread.

use std::collections::HashSet;

use glam::Vec2;
use rand::Rng;

use super::event::SimEvent;
use super::particle::{Particle, ParticleId, ParticleKind};
use super::proximity::{is_adjacent, overlaps_disc};
use super::world::World;
use crate::angle_between_points;

/// Outcome of two charges touching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    Repel,
    Attract,
}

/// How two kinds interact, if they are both charges
pub fn interaction(a: ParticleKind, b: ParticleKind) -> Option<Interaction> {
    use ParticleKind::{Negative, Positive};
    match (a, b) {
        (Positive, Positive) | (Negative, Negative) => Some(Interaction::Repel),
        (Positive, Negative) | (Negative, Positive) => Some(Interaction::Attract),
        _ => None,
    }
}

/// Annihilate two like charges into fire at their midpoint, heading away from `center`.
/// Returns the fire's id, or None if either particle is already gone.
pub fn repel(
    world: &mut World,
    a: ParticleId,
    b: ParticleId,
    center: Vec2,
    fire_speed: f32,
) -> Option<ParticleId> {
    let pa = world.get(a)?.pos;
    let pb = world.get(b)?.pos;
    let mid = (pa + pb) / 2.0;

    world.remove(a);
    world.remove(b);
    let fire = world.spawn(Particle::fire(mid, center, fire_speed));

    log::debug!("Charges {a} and {b} repelled into fire {fire}");
    world.push_event(SimEvent::Repelled {
        consumed: [a, b],
        fire,
    });
    Some(fire)
}

/// Condense two opposite charges into stationary base-tier neutrals in place
pub fn attract(world: &mut World, a: ParticleId, b: ParticleId) -> Option<[ParticleId; 2]> {
    let pa = world.get(a)?.pos;
    let pb = world.get(b)?.pos;

    world.remove(a);
    world.remove(b);
    let spawned = [
        world.spawn(Particle::neutral(1, pa)),
        world.spawn(Particle::neutral(1, pb)),
    ];

    log::debug!("Charges {a} and {b} attracted into {spawned:?}");
    world.push_event(SimEvent::Attracted {
        consumed: [a, b],
        spawned,
    });
    Some(spawned)
}

/// Scan docked charges for adjacent pairs and resolve them.
///
/// Each particle takes part in at most one interaction per pass: pairs are
/// visited in id order and the first match wins.
pub fn resolve_charges(world: &mut World, center: Vec2, fire_speed: f32) {
    let mut charges: Vec<ParticleId> = [ParticleKind::Positive, ParticleKind::Negative]
        .into_iter()
        .flat_map(|kind| world.ids_of_kind(kind))
        .filter(|&id| world.is_stationary(id))
        .collect();
    charges.sort_unstable();

    let mut consumed: HashSet<ParticleId> = HashSet::new();

    for (i, &a) in charges.iter().enumerate() {
        if consumed.contains(&a) {
            continue;
        }
        for &b in &charges[i + 1..] {
            if consumed.contains(&b) {
                continue;
            }
            let (Some(pa), Some(pb)) = (world.get(a), world.get(b)) else {
                continue;
            };
            if !is_adjacent(pa, pb) {
                continue;
            }
            let Some(kind) = interaction(pa.kind, pb.kind) else {
                continue;
            };

            match kind {
                Interaction::Repel => {
                    repel(world, a, b, center, fire_speed);
                }
                Interaction::Attract => {
                    attract(world, a, b);
                }
            }
            consumed.insert(a);
            consumed.insert(b);
            break;
        }
    }
}

/// Disc the fire reacts to
#[derive(Debug, Clone, Copy)]
pub struct SunDisc {
    pub center: Vec2,
    pub radius: f32,
}

/// Decay every fire particle touching the sun into two radioactive particles.
///
/// Each radioactive heading is the outward-from-sun angle plus an independent
/// uniform deviation in [-spread_deg, +spread_deg].
pub fn resolve_sun_impacts<R: Rng + ?Sized>(
    world: &mut World,
    sun: SunDisc,
    speed: f32,
    spread_deg: f32,
    rng: &mut R,
) {
    for fire in world.ids_of_kind(ParticleKind::Fire) {
        let Some(p) = world.get(fire) else {
            continue;
        };
        if !overlaps_disc(p, sun.center, sun.radius) {
            continue;
        }

        let pos = p.pos;
        let outward = angle_between_points(sun.center, pos);
        world.remove(fire);

        let spawned = [0, 1].map(|_| {
            let deviation = rng.random_range(-spread_deg..=spread_deg);
            world.spawn(Particle::radioactive(pos, outward + deviation, speed))
        });

        log::debug!("Fire {fire} decayed at the sun into {spawned:?}");
        world.push_event(SimEvent::Decayed { fire, spawned });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::particle::{Matter, Mobility};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const CENTER: Vec2 = Vec2::new(756.0, 491.0);

    fn charge(world: &mut World, kind: ParticleKind, x: f32, y: f32) -> ParticleId {
        world.spawn(Particle::new(kind, Vec2::new(x, y)))
    }

    #[test]
    fn test_interaction_table() {
        use ParticleKind::*;
        assert_eq!(interaction(Positive, Positive), Some(Interaction::Repel));
        assert_eq!(interaction(Negative, Negative), Some(Interaction::Repel));
        assert_eq!(interaction(Negative, Positive), Some(Interaction::Attract));
        assert_eq!(interaction(Positive, Neutral(Matter::LightGrey)), None);
        assert_eq!(interaction(Radioactive, Positive), None);
    }

    #[test]
    fn test_like_charges_repel_into_fire() {
        let mut world = World::new();
        let a = charge(&mut world, ParticleKind::Positive, 100.0, 100.0);
        let b = charge(&mut world, ParticleKind::Positive, 120.0, 100.0);

        resolve_charges(&mut world, CENTER, 30.0);

        assert!(!world.contains(a));
        assert!(!world.contains(b));
        let fires = world.ids_of_kind(ParticleKind::Fire);
        assert_eq!(fires.len(), 1);
        let fire = world.get(fires[0]).unwrap();
        assert_eq!(fire.pos, Vec2::new(110.0, 100.0));
        assert_eq!(fire.mobility, Mobility::Moving);
        assert_eq!(world.len(), 1);
    }

    #[test]
    fn test_opposite_charges_attract() {
        let mut world = World::new();
        let a = charge(&mut world, ParticleKind::Positive, 100.0, 100.0);
        let b = charge(&mut world, ParticleKind::Negative, 100.0, 120.0);

        resolve_charges(&mut world, CENTER, 30.0);

        assert!(!world.contains(a));
        assert!(!world.contains(b));
        let neutrals = world.ids_of_kind(ParticleKind::Neutral(Matter::LightGrey));
        assert_eq!(neutrals.len(), 2);
        let positions: Vec<Vec2> = neutrals.iter().map(|&id| world.get(id).unwrap().pos).collect();
        assert!(positions.contains(&Vec2::new(100.0, 100.0)));
        assert!(positions.contains(&Vec2::new(100.0, 120.0)));
        assert!(neutrals.iter().all(|&id| world.is_stationary(id)));
    }

    #[test]
    fn test_distant_charges_ignored() {
        let mut world = World::new();
        charge(&mut world, ParticleKind::Positive, 100.0, 100.0);
        charge(&mut world, ParticleKind::Positive, 140.0, 100.0);
        resolve_charges(&mut world, CENTER, 30.0);
        assert_eq!(world.len(), 2);
        assert!(world.events().is_empty());
    }

    #[test]
    fn test_moving_charges_ignored() {
        let mut world = World::new();
        charge(&mut world, ParticleKind::Positive, 100.0, 100.0);
        world.spawn(
            Particle::new(ParticleKind::Positive, Vec2::new(120.0, 100.0)).with_heading(0.0, 60.0),
        );
        resolve_charges(&mut world, CENTER, 30.0);
        assert_eq!(world.len(), 2);
    }

    #[test]
    fn test_each_charge_reacts_once_per_pass() {
        // Row of three: the middle one pairs with the first and the third waits
        let mut world = World::new();
        let a = charge(&mut world, ParticleKind::Positive, 100.0, 100.0);
        let b = charge(&mut world, ParticleKind::Positive, 120.0, 100.0);
        let c = charge(&mut world, ParticleKind::Negative, 140.0, 100.0);

        resolve_charges(&mut world, CENTER, 30.0);

        assert!(!world.contains(a));
        assert!(!world.contains(b));
        assert!(world.contains(c));
        assert_eq!(world.ids_of_kind(ParticleKind::Fire).len(), 1);
    }

    #[test]
    fn test_fire_decays_at_sun() {
        let mut world = World::new();
        let sun = SunDisc {
            center: Vec2::new(1000.0, 500.0),
            radius: 100.0,
        };
        let fire = world.spawn(Particle::fire(Vec2::new(905.0, 500.0), CENTER, 30.0));
        let mut rng = Pcg32::seed_from_u64(7);

        resolve_sun_impacts(&mut world, sun, 24.0, 30.0, &mut rng);

        assert!(!world.contains(fire));
        let spawned = world.ids_of_kind(ParticleKind::Radioactive);
        assert_eq!(spawned.len(), 2);
        for id in spawned {
            let p = world.get(id).unwrap();
            assert_eq!(p.pos, Vec2::new(905.0, 500.0));
            // Outward from the sun here is 180 degrees
            assert!((p.angle - 180.0).abs() <= 30.0 + 1e-3);
            assert!(p.is_moving());
        }
    }

    #[test]
    fn test_fire_away_from_sun_untouched() {
        let mut world = World::new();
        let sun = SunDisc {
            center: Vec2::new(1000.0, 500.0),
            radius: 100.0,
        };
        world.spawn(Particle::fire(Vec2::new(500.0, 500.0), CENTER, 30.0));
        let mut rng = Pcg32::seed_from_u64(7);
        resolve_sun_impacts(&mut world, sun, 24.0, 30.0, &mut rng);
        assert_eq!(world.ids_of_kind(ParticleKind::Fire).len(), 1);
    }

    proptest! {
        #[test]
        fn repulsion_is_order_independent(
            ax in 0.0f32..1000.0, ay in 0.0f32..1000.0,
            dx in -14.0f32..14.0, dy in -14.0f32..14.0,
        ) {
            let mut w1 = World::new();
            let a1 = charge(&mut w1, ParticleKind::Negative, ax, ay);
            let b1 = charge(&mut w1, ParticleKind::Negative, ax + dx, ay + dy);
            let f1 = repel(&mut w1, a1, b1, CENTER, 30.0).unwrap();

            let mut w2 = World::new();
            let a2 = charge(&mut w2, ParticleKind::Negative, ax, ay);
            let b2 = charge(&mut w2, ParticleKind::Negative, ax + dx, ay + dy);
            let f2 = repel(&mut w2, b2, a2, CENTER, 30.0).unwrap();

            prop_assert_eq!(w1.len(), 1);
            prop_assert_eq!(w2.len(), 1);
            prop_assert_eq!(w1.get(f1).unwrap(), w2.get(f2).unwrap());
        }
    }
}
