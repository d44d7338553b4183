//! Draggable configuration.

use crate::element::ElementId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a draggable finds its drop targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetType {
    /// Every registry element carrying `target_tag`.
    #[default]
    Tag,
    /// The single element named by `target_object`.
    Object,
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Tag is empty and drag and drop component has target type of Tag")]
    EmptyTag,
    #[error("No target object assigned and drag and drop component has target type of Object")]
    MissingTargetObject,
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Settings of one draggable, fixed at construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    pub target_type: TargetType,
    /// Target for `TargetType::Object`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_object: Option<ElementId>,
    /// Tag for `TargetType::Tag`.
    pub target_tag: String,
    /// Allow dragging again after settling on a target.
    pub can_move_again: bool,
    /// Snap back to the initial position when a drop finds no target.
    pub reset_position_if_target_not_found: bool,
    /// Re-query tagged targets on every drop instead of once at startup.
    pub refresh_targets_every_drop: bool,
}

impl DragConfig {
    /// Target every element tagged with `tag`.
    pub fn by_tag(tag: impl Into<String>) -> Self {
        Self {
            target_type: TargetType::Tag,
            target_tag: tag.into(),
            ..Self::default()
        }
    }

    /// Target one specific element.
    pub fn by_object(target: ElementId) -> Self {
        Self {
            target_type: TargetType::Object,
            target_object: Some(target),
            ..Self::default()
        }
    }

    pub fn with_can_move_again(mut self, can_move_again: bool) -> Self {
        self.can_move_again = can_move_again;
        self
    }

    pub fn with_reset_if_not_found(mut self, reset: bool) -> Self {
        self.reset_position_if_target_not_found = reset;
        self
    }

    pub fn with_refresh_every_drop(mut self, refresh: bool) -> Self {
        self.refresh_targets_every_drop = refresh;
        self
    }

    /// Check the settings relevant to the selected target type.
    pub fn validate(&self) -> ConfigResult<()> {
        match self.target_type {
            TargetType::Tag if self.target_tag.is_empty() => Err(ConfigError::EmptyTag),
            TargetType::Object if self.target_object.is_none() => {
                Err(ConfigError::MissingTargetObject)
            }
            _ => Ok(()),
        }
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
