//! Player domain: controller failures surfaced to the calling systems.

use bevy::prelude::Entity;

use crate::player::actions::PlayerAction;

#[derive(Debug, Clone, PartialEq)]
pub enum ControllerError {
    /// A key was about to be latched (or animated) without a descriptor.
    MissingAnimation(PlayerAction),
    /// A contact was reported against an entity with no collider data.
    UnknownCollider(Entity),
}

impl std::fmt::Display for ControllerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ControllerError::MissingAnimation(action) => {
                write!(f, "no animation descriptor for action {:?}", action)
            }
            ControllerError::UnknownCollider(entity) => {
                write!(f, "contact with {:?}, which has no level collider", entity)
            }
        }
    }
}

impl std::error::Error for ControllerError {}
