//! Spatial predicates shared by every resolver

use glam::Vec2;

use super::particle::Particle;
use crate::consts::ADJACENCY_DISTANCE_SQ;

/// True when two particle centers are within touching distance.
///
/// Symmetric. Callers never pass the same particle twice.
#[inline]
pub fn is_adjacent(a: &Particle, b: &Particle) -> bool {
    a.pos.distance_squared(b.pos) <= ADJACENCY_DISTANCE_SQ
}

/// Axis-aligned box intersection. Boxes that only share an edge do not overlap.
#[inline]
pub fn overlaps(a: &Particle, b: &Particle) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.bottom() < b.top() && a.top() > b.bottom()
}

/// Whether a particle's box touches a disc
pub fn overlaps_disc(p: &Particle, center: Vec2, radius: f32) -> bool {
    let closest = Vec2::new(
        center.x.clamp(p.left(), p.right()),
        center.y.clamp(p.bottom(), p.top()),
    );
    closest.distance_squared(center) <= radius * radius
}

/// Whether a particle center lies inside the playfield
#[inline]
pub fn in_bounds(p: &Particle, width: f32, height: f32) -> bool {
    (0.0..=width).contains(&p.pos.x) && (0.0..=height).contains(&p.pos.y)
}
