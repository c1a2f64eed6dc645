//! Content domain: RON configuration and level data loaded at startup.

mod data;
mod loader;
mod registry;
mod validation;


pub use data::{ColliderDef, LevelDef};
pub use registry::LevelCatalog;

use std::path::Path;

use bevy::prelude::*;

use crate::core::Environment;
use crate::content::loader::load_all_content;
use crate::content::validation::{validate_animation_table, validate_levels};
use crate::player::{AnimationTable, PlayerTuning};

const DATA_PATH: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LevelCatalog>()
            .add_systems(PreStartup, load_content);
    }
}

/// Read assets/data into resources and seed the environment from game settings.
fn load_content(mut commands: Commands, mut environment: ResMut<Environment>) {
    let (content, errors) = load_all_content(Path::new(DATA_PATH));
    for error in &errors {
        warn!("{}, using defaults", error);
    }

    let table = AnimationTable::new(content.player.animations);
    for error in validate_animation_table(&table)
        .iter()
        .chain(validate_levels(&content.levels).iter())
    {
        error!("Content validation: {}", error);
    }

    let catalog = LevelCatalog::new(content.levels);
    info!("{}", catalog.summary());

    environment.difficulty = content.settings.difficulty;
    environment.invincible = content.settings.invincible;
    environment.levels = catalog.ids();
    environment.current_level = 0;

    commands.insert_resource::<PlayerTuning>(content.player.tuning);
    commands.insert_resource(table);
    commands.insert_resource(catalog);
}
