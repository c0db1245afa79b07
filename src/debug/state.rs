//! Debug domain: state for the dev overlay.

use bevy::prelude::*;

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether body rects and collision sides are drawn
    pub overlay_visible: bool,
}
