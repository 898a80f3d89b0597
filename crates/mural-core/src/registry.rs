//! Committed wall storage

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::wall::WallSegment;

/// Append-only, insertion-ordered store of committed walls
///
/// Mutated only by the draw session's commit step; read by the overlap
/// detector and by the rendering consumer. Individual walls are never
/// removed; the whole registry is cleared on explicit reset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WallRegistry {
    walls: Vec<WallSegment>,
}

impl WallRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a committed wall
    pub fn add(&mut self, wall: WallSegment) {
        self.walls.push(wall);
    }

    /// All committed walls in insertion order
    pub fn all(&self) -> &[WallSegment] {
        &self.walls
    }

    /// Iterate over committed walls in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &WallSegment> {
        self.walls.iter()
    }

    /// Look up a wall by id
    pub fn get(&self, id: Uuid) -> Option<&WallSegment> {
        self.walls.iter().find(|wall| wall.id == id)
    }

    /// Number of committed walls
    pub fn len(&self) -> usize {
        self.walls.len()
    }

    /// Check if no walls have been committed
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// Remove all committed walls
    pub fn clear(&mut self) {
        self.walls.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn wall(x: f32) -> WallSegment {
        WallSegment::new(Vec2::new(x, 0.0), Vec2::new(x + 1.0, 0.0), 0.3, 2.75)
    }

    #[test]
    fn test_insertion_order_is_stable() {
        let mut registry = WallRegistry::new();
        let (a, b, c) = (wall(0.0), wall(2.0), wall(4.0));
        let ids = [a.id, b.id, c.id];

        registry.add(a);
        registry.add(b);
        registry.add(c);

        let stored: Vec<_> = registry.iter().map(|w| w.id).collect();
        assert_eq!(stored, ids);
    }

    #[test]
    fn test_get_by_id() {
        let mut registry = WallRegistry::new();
        let wall = wall(0.0);
        let id = wall.id;
        registry.add(wall);

        assert!(registry.get(id).is_some());
        assert!(registry.get(Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_clear() {
        let mut registry = WallRegistry::new();
        registry.add(wall(0.0));
        assert_eq!(registry.len(), 1);

        registry.clear();
        assert!(registry.is_empty());
    }
}
