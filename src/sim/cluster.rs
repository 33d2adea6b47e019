//! Gravitational collapse
//!
//! Nine docked neutrals of the same kind laid out on a 3x3 grid collapse: the
//! particle in the middle cell and the one nearest the screen center are
//! replaced with the next tier of matter. Clusters are recomputed from scratch
//! every pass.

use std::collections::HashSet;

use glam::Vec2;

use super::event::SimEvent;
use super::particle::{Particle, ParticleId, ParticleKind};
use super::world::World;
use crate::consts::{CLUSTER_SIDE, CLUSTER_TOLERANCE, PARTICLE_SIZE};

/// Members of a completed 3x3 grid, indexed `cells[column][row]` from the anchor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    pub cells: [[ParticleId; CLUSTER_SIDE]; CLUSTER_SIDE],
}

impl Cluster {
    /// Particle in the middle cell
    pub fn center(&self) -> ParticleId {
        self.cells[1][1]
    }

    pub fn members(&self) -> impl Iterator<Item = ParticleId> + '_ {
        self.cells.iter().flatten().copied()
    }
}

/// Try to complete a 3x3 grid extending right and up from `anchor`.
///
/// Each expected cell must hold a member within `CLUSTER_TOLERANCE` on both
/// axes; when several qualify the nearest (then lowest id) is taken.
pub fn find_cluster(anchor: Vec2, members: &[(ParticleId, Vec2)]) -> Option<Cluster> {
    let mut cells = [[0; CLUSTER_SIDE]; CLUSTER_SIDE];

    for (col, column) in cells.iter_mut().enumerate() {
        for (row, cell) in column.iter_mut().enumerate() {
            let expected = anchor + Vec2::new(col as f32, row as f32) * PARTICLE_SIZE;
            let (id, _) = members
                .iter()
                .filter(|(_, pos)| {
                    (pos.x - expected.x).abs() <= CLUSTER_TOLERANCE
                        && (pos.y - expected.y).abs() <= CLUSTER_TOLERANCE
                })
                .map(|&(id, pos)| (id, pos.distance_squared(expected)))
                .min_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)))?;
            *cell = id;
        }
    }

    Some(Cluster { cells })
}

/// Docked particles of one kind with their positions, ordered by id
fn stationary_members(world: &World, kind: ParticleKind) -> Vec<(ParticleId, Vec2)> {
    world
        .ids_of_kind(kind)
        .into_iter()
        .filter(|&id| world.is_stationary(id))
        .filter_map(|id| world.get(id).map(|p| (id, p.pos)))
        .collect()
}

/// Replace a particle with the next tier of its matter, in place and docked
fn promote(world: &mut World, id: ParticleId) -> Option<ParticleId> {
    let old = world.get(id)?;
    let ParticleKind::Neutral(matter) = old.kind else {
        return None;
    };
    let successor = Particle::new(ParticleKind::Neutral(matter.promoted()), old.pos);
    world.replace(id, successor)
}

/// Find and collapse every complete cluster among docked neutrals.
///
/// Groups are taken once before any promotion, so matter promoted in this
/// pass cannot complete a higher-tier cluster until the next one. Overlapping
/// clusters each collapse, but a particle is never replaced twice. Returns the
/// number of clusters that collapsed.
pub fn escalate(world: &mut World, screen_center: Vec2) -> usize {
    let groups: Vec<(ParticleKind, Vec<(ParticleId, Vec2)>)> = world
        .kinds()
        .into_iter()
        .filter(|kind| kind.is_neutral())
        .map(|kind| (kind, stationary_members(world, kind)))
        .filter(|(_, members)| members.len() >= CLUSTER_SIDE * CLUSTER_SIDE)
        .collect();

    let mut processed: HashSet<ParticleId> = HashSet::new();
    let mut collapsed = 0;

    for (kind, members) in &groups {
        for &(anchor_id, anchor_pos) in members {
            let Some(cluster) = find_cluster(anchor_pos, members) else {
                continue;
            };

            let center = cluster.center();
            let closest = cluster
                .members()
                .filter_map(|id| {
                    members
                        .iter()
                        .find(|&&(member, _)| member == id)
                        .map(|&(_, pos)| (id, pos.distance_squared(screen_center)))
                })
                .min_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)))
                .map(|(id, _)| id)
                .unwrap_or(center);

            let mut replaced = Vec::with_capacity(2);
            for id in [center, closest] {
                if !processed.insert(id) {
                    continue;
                }
                if let Some(new_id) = promote(world, id) {
                    replaced.push((id, new_id));
                }
            }

            if let Some(&(_, first)) = replaced.first() {
                let new_kind = world.get(first).map(|p| p.kind).unwrap_or(*kind);
                log::debug!("Cluster anchored at {anchor_id} collapsed into {new_kind:?}");
                world.push_event(SimEvent::Collapsed {
                    kind: new_kind,
                    replaced,
                });
                collapsed += 1;
            }
        }
    }

    collapsed
}
