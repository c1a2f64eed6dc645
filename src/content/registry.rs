//! LevelCatalog resource providing lookups for loaded levels.

use bevy::prelude::*;

use super::data::LevelDef;

/// Every level definition, in play order.
#[derive(Resource, Debug, Default)]
pub struct LevelCatalog {
    pub levels: Vec<LevelDef>,
}

impl LevelCatalog {
    pub fn new(levels: Vec<LevelDef>) -> Self {
        Self { levels }
    }

    pub fn get(&self, id: &str) -> Option<&LevelDef> {
        self.levels.iter().find(|level| level.id == id)
    }

    pub fn ids(&self) -> Vec<String> {
        self.levels.iter().map(|level| level.id.clone()).collect()
    }

    /// Returns a summary of loaded content counts for logging.
    pub fn summary(&self) -> String {
        let colliders: usize = self.levels.iter().map(|level| level.colliders.len()).sum();
        format!(
            "LevelCatalog loaded: {} levels, {} colliders",
            self.levels.len(),
            colliders
        )
    }
}
