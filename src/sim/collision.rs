//! Collision detection and docking
//!
//! Moving particles are tested against the stationary structure. On contact the
//! mover is snapped flush against the particle it hit so the structure grows as
//! a gapless grid. Radioactive contact destroys both bodies instead.

use super::event::SimEvent;
use super::particle::{Particle, ParticleId, ParticleKind};
use super::proximity::overlaps;
use super::world::World;

/// How a contact between a mover and a stationary particle resolves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    /// Snap the mover onto the structure
    Dock,
    /// Both bodies are destroyed
    Explosion,
    /// No effect (fire only reacts to the sun)
    Inert,
}

/// Classify a contact between a mover and the particle it touched
pub fn classify(mover: &Particle, other: &Particle) -> CollisionKind {
    match (mover.kind, other.kind) {
        (ParticleKind::Fire, _) | (_, ParticleKind::Fire) => CollisionKind::Inert,
        (ParticleKind::Radioactive, _) | (_, ParticleKind::Radioactive) => {
            CollisionKind::Explosion
        }
        _ => CollisionKind::Dock,
    }
}

/// Snap `mover` flush against `anchor`.
///
/// The axis with the larger center offset is the contact axis: the mover's
/// touching edge meets the anchor's opposite edge. On the other axis the two
/// share an edge (tops, or lefts) so bodies tile without gaps. Ties go to the
/// vertical axis. Re-aligning an aligned pair changes nothing.
pub fn align(mover: &mut Particle, anchor: &Particle) {
    let d = mover.pos - anchor.pos;

    if d.x.abs() > d.y.abs() {
        if d.x > 0.0 {
            mover.set_left(anchor.right());
        } else {
            mover.set_right(anchor.left());
        }
        mover.set_top(anchor.top());
    } else {
        if d.y > 0.0 {
            mover.set_bottom(anchor.top());
        } else {
            mover.set_top(anchor.bottom());
        }
        mover.set_left(anchor.left());
    }
}

/// Nearest stationary particle overlapping `mover` (ties broken by lowest id)
pub fn find_contact(world: &World, mover: &Particle) -> Option<ParticleId> {
    world
        .stationary()
        .filter(|(_, s)| overlaps(mover, s))
        .map(|(id, s)| (id, mover.pos.distance_squared(s.pos)))
        .min_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)))
        .map(|(id, _)| id)
}

/// Resolve every moving particle against the stationary set.
///
/// Movers are visited in id order from a snapshot. A mover that docks joins
/// the stationary set immediately, so later movers can land on it this frame.
pub fn resolve_collisions(world: &mut World) {
    for id in world.moving_ids() {
        let Some(mover) = world.get(id) else {
            continue;
        };
        if mover.kind == ParticleKind::Fire {
            continue;
        }
        let Some(other_id) = find_contact(world, mover) else {
            continue;
        };
        let Some(other) = world.get(other_id) else {
            continue;
        };

        match classify(mover, other) {
            CollisionKind::Inert => {}
            CollisionKind::Explosion => {
                let pos = mover.pos;
                world.remove(id);
                world.remove(other_id);
                log::debug!("Particle {id} exploded against {other_id}");
                world.push_event(SimEvent::Exploded {
                    a: id,
                    b: other_id,
                    pos,
                });
            }
            CollisionKind::Dock => {
                let mut snapped = mover.clone();
                align(&mut snapped, other);
                if let Some(anchor) = world.get_mut(other_id) {
                    anchor.angle = 0.0;
                }
                if let Some(m) = world.get_mut(id) {
                    m.pos = snapped.pos;
                }
                world.dock(id);
                log::debug!("Particle {id} docked onto {other_id}");
                world.push_event(SimEvent::Docked { id, onto: other_id });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::particle::Mobility;
    use glam::Vec2;
    use proptest::prelude::*;

    fn stationary(x: f32, y: f32) -> Particle {
        Particle::neutral(1, Vec2::new(x, y))
    }

    fn mover(kind: ParticleKind, x: f32, y: f32) -> Particle {
        Particle::new(kind, Vec2::new(x, y)).with_heading(180.0, 60.0)
    }

    #[test]
    fn test_align_horizontal_right() {
        let anchor = stationary(100.0, 100.0);
        let mut m = mover(ParticleKind::Positive, 117.0, 104.0);
        align(&mut m, &anchor);
        assert_eq!(m.left(), anchor.right());
        assert_eq!(m.top(), anchor.top());
    }

    #[test]
    fn test_align_horizontal_left() {
        let anchor = stationary(100.0, 100.0);
        let mut m = mover(ParticleKind::Positive, 85.0, 97.0);
        align(&mut m, &anchor);
        assert_eq!(m.right(), anchor.left());
        assert_eq!(m.top(), anchor.top());
    }

    #[test]
    fn test_align_vertical() {
        let anchor = stationary(100.0, 100.0);
        let mut above = mover(ParticleKind::Negative, 103.0, 116.0);
        align(&mut above, &anchor);
        assert_eq!(above.bottom(), anchor.top());
        assert_eq!(above.left(), anchor.left());

        let mut below = mover(ParticleKind::Negative, 96.0, 82.0);
        align(&mut below, &anchor);
        assert_eq!(below.top(), anchor.bottom());
        assert_eq!(below.left(), anchor.left());
    }

    #[test]
    fn test_classify() {
        let n = stationary(0.0, 0.0);
        assert_eq!(classify(&mover(ParticleKind::Positive, 0.0, 0.0), &n), CollisionKind::Dock);
        assert_eq!(
            classify(&mover(ParticleKind::Radioactive, 0.0, 0.0), &n),
            CollisionKind::Explosion
        );
        assert_eq!(classify(&mover(ParticleKind::Fire, 0.0, 0.0), &n), CollisionKind::Inert);
    }

    #[test]
    fn test_resolve_docks_mover() {
        let mut world = World::new();
        let anchor = world.spawn(stationary(100.0, 100.0));
        world.get_mut(anchor).unwrap().angle = 45.0;
        let base = ParticleKind::Neutral(crate::sim::Matter::LightGrey);
        let m = world.spawn(mover(base, 118.0, 103.0));

        resolve_collisions(&mut world);
        // The anchor's heading is cleared on contact
        assert_eq!(world.get(anchor).unwrap().angle, 0.0);

        let p = world.get(m).unwrap();
        assert_eq!(p.mobility, Mobility::Stationary);
        assert_eq!(p.speed, 0.0);
        assert_eq!(p.angle, 0.0);
        assert_eq!(p.pos, Vec2::new(120.0, 100.0));
        assert!(world.is_stationary(m));
        assert!(world.moving_ids().is_empty());
        assert_eq!(
            world.events(),
            &[SimEvent::Docked {
                id: m,
                onto: anchor
            }]
        );
    }

    #[test]
    fn test_resolve_picks_nearest_contact() {
        let mut world = World::new();
        let _far = world.spawn(stationary(100.0, 100.0));
        let near = world.spawn(stationary(120.0, 100.0));
        let m = world.spawn(mover(ParticleKind::Positive, 112.0, 115.0));

        resolve_collisions(&mut world);
        assert_eq!(world.events(), &[SimEvent::Docked { id: m, onto: near }]);
    }

    #[test]
    fn test_radioactive_explodes_both() {
        let mut world = World::new();
        let anchor = world.spawn(stationary(100.0, 100.0));
        let r = world.spawn(Particle::radioactive(Vec2::new(110.0, 100.0), 0.0, 24.0));

        resolve_collisions(&mut world);
        assert!(!world.contains(anchor));
        assert!(!world.contains(r));
        assert!(world.is_empty());

        // Docked charges are no shield either
        let charge = world.spawn(Particle::new(ParticleKind::Positive, Vec2::new(300.0, 300.0)));
        let r = world.spawn(Particle::radioactive(Vec2::new(290.0, 305.0), 0.0, 24.0));
        resolve_collisions(&mut world);
        assert!(world.is_empty());
        assert!(matches!(
            world.events().last(),
            Some(SimEvent::Exploded { a, b, .. }) if *a == r && *b == charge
        ));
    }

    #[test]
    fn test_fire_passes_through() {
        let mut world = World::new();
        let anchor = world.spawn(stationary(100.0, 100.0));
        let f = world.spawn(Particle::fire(Vec2::new(105.0, 100.0), Vec2::ZERO, 30.0));

        resolve_collisions(&mut world);
        assert!(world.contains(anchor));
        assert!(world.get(f).unwrap().is_moving());
        assert!(world.events().is_empty());
    }

    #[test]
    fn test_empty_world_is_noop() {
        let mut world = World::new();
        resolve_collisions(&mut world);
        assert!(world.events().is_empty());
    }

    proptest! {
        #[test]
        fn alignment_is_idempotent(dx in -19.5f32..19.5, dy in -19.5f32..19.5) {
            let anchor = stationary(300.0, 300.0);
            let mut m = mover(ParticleKind::Positive, 300.0 + dx, 300.0 + dy);
            align(&mut m, &anchor);
            let once = m.pos;
            align(&mut m, &anchor);
            prop_assert_eq!(once, m.pos);
        }
    }
}
