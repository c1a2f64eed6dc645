//! Validation for content that gameplay code relies on being complete.

use std::collections::HashSet;

use super::data::*;
use crate::level::ColliderKind;
use crate::player::{AnimationTable, PlayerAction};

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub source_id: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} '{}': {}", self.source_type, self.source_id, self.message)
    }
}

/// Every player action must have a descriptor before it can be latched.
pub fn validate_animation_table(table: &AnimationTable) -> Vec<ValidationError> {
    PlayerAction::ALL
        .iter()
        .filter(|action| table.get(**action).is_none())
        .map(|action| ValidationError {
            source_type: "AnimationTable",
            source_id: format!("{:?}", action),
            message: "missing animation descriptor".to_string(),
        })
        .collect()
}

/// Level ids must be unique, colliders must have a positive size, and every
/// level needs a tube to finish through.
pub fn validate_levels(levels: &[LevelDef]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for level in levels {
        if !seen.insert(level.id.as_str()) {
            errors.push(ValidationError {
                source_type: "LevelDef",
                source_id: level.id.clone(),
                message: "duplicate level id".to_string(),
            });
        }

        for (index, collider) in level.colliders.iter().enumerate() {
            if collider.bounds.width <= 0.0 || collider.bounds.height <= 0.0 {
                errors.push(ValidationError {
                    source_type: "LevelDef",
                    source_id: level.id.clone(),
                    message: format!("collider #{} ({:?}) has no area", index, collider.kind),
                });
            }
        }

        if !level
            .colliders
            .iter()
            .any(|collider| collider.kind == ColliderKind::Tube)
        {
            errors.push(ValidationError {
                source_type: "LevelDef",
                source_id: level.id.clone(),
                message: "no tube to exit through".to_string(),
            });
        }
    }

    errors
}
