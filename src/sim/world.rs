//! Particle registry
//!
//! The world is the single owner of every live particle. Alongside the master
//! collection it keeps three indexes that are always updated together:
//! - the moving and stationary sets (disjoint, membership mirrors `mobility`)
//! - a per-kind index used to find all particles of one kind without a scan
//!
//! Resolvers never hold particles of their own; they ask the world to spawn,
//! dock, replace or remove. Iteration is ordered by id for determinism.

use std::collections::{BTreeMap, BTreeSet};

use super::event::SimEvent;
use super::particle::{Mobility, Particle, ParticleId, ParticleKind};

#[derive(Debug, Clone)]
pub struct World {
    particles: BTreeMap<ParticleId, Particle>,
    moving: BTreeSet<ParticleId>,
    stationary: BTreeSet<ParticleId>,
    by_kind: BTreeMap<ParticleKind, BTreeSet<ParticleId>>,
    events: Vec<SimEvent>,
    next_id: ParticleId,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    pub fn new() -> Self {
        Self {
            particles: BTreeMap::new(),
            moving: BTreeSet::new(),
            stationary: BTreeSet::new(),
            by_kind: BTreeMap::new(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Insert a particle and return its new id
    pub fn spawn(&mut self, particle: Particle) -> ParticleId {
        let id = self.next_id;
        self.next_id += 1;

        match particle.mobility {
            Mobility::Moving => self.moving.insert(id),
            Mobility::Stationary => self.stationary.insert(id),
        };
        self.by_kind.entry(particle.kind).or_default().insert(id);
        self.particles.insert(id, particle);
        id
    }

    /// Remove a particle from every index. Removing an absent id is a no-op.
    pub fn remove(&mut self, id: ParticleId) -> Option<Particle> {
        let particle = self.particles.remove(&id)?;
        self.moving.remove(&id);
        self.stationary.remove(&id);
        if let Some(ids) = self.by_kind.get_mut(&particle.kind) {
            ids.remove(&id);
            if ids.is_empty() {
                self.by_kind.remove(&particle.kind);
            }
        }
        Some(particle)
    }

    /// Swap a particle for a new one at the same slot in the indexes.
    /// Returns the successor's id, or None if `id` was already gone.
    pub fn replace(&mut self, id: ParticleId, successor: Particle) -> Option<ParticleId> {
        self.remove(id)?;
        Some(self.spawn(successor))
    }

    /// Stop a particle and move it from the moving set to the stationary set
    pub fn dock(&mut self, id: ParticleId) {
        if let Some(p) = self.particles.get_mut(&id) {
            p.halt();
            self.moving.remove(&id);
            self.stationary.insert(id);
        }
    }

    pub fn get(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.get(&id)
    }

    /// Mutable access for position and heading changes.
    /// Mobility and kind changes must go through `dock` / `replace`.
    pub fn get_mut(&mut self, id: ParticleId) -> Option<&mut Particle> {
        self.particles.get_mut(&id)
    }

    pub fn contains(&self, id: ParticleId) -> bool {
        self.particles.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// All particles, ordered by id
    pub fn iter(&self) -> impl Iterator<Item = (ParticleId, &Particle)> {
        self.particles.iter().map(|(&id, p)| (id, p))
    }

    pub(crate) fn particles_mut(&mut self) -> impl Iterator<Item = &mut Particle> {
        self.particles.values_mut()
    }

    /// Snapshot of the moving set
    pub fn moving_ids(&self) -> Vec<ParticleId> {
        self.moving.iter().copied().collect()
    }

    /// Snapshot of the stationary set
    pub fn stationary_ids(&self) -> Vec<ParticleId> {
        self.stationary.iter().copied().collect()
    }

    pub fn is_stationary(&self, id: ParticleId) -> bool {
        self.stationary.contains(&id)
    }

    /// Stationary particles, ordered by id
    pub fn stationary(&self) -> impl Iterator<Item = (ParticleId, &Particle)> {
        self.stationary
            .iter()
            .filter_map(|id| self.particles.get(id).map(|p| (*id, p)))
    }

    /// Snapshot of every live id of one kind
    pub fn ids_of_kind(&self, kind: ParticleKind) -> Vec<ParticleId> {
        self.by_kind
            .get(&kind)
            .map(|ids| ids.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Kinds with at least one live particle
    pub fn kinds(&self) -> Vec<ParticleKind> {
        self.by_kind.keys().copied().collect()
    }

    /// Sum of tiers across the structure
    pub fn score(&self) -> u64 {
        self.stationary().map(|(_, p)| u64::from(p.tier())).sum()
    }

    pub fn push_event(&mut self, event: SimEvent) {
        self.events.push(event);
    }

    /// Events recorded since the last drain
    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }
}
