use indexmap::IndexMap;

use crate::error::{HeaderError, HeaderResult};

use super::strategy::RendererStrategy;
use super::zoom_config::{RendererConfig, ZoomLevel, builtin_renderer_configs};

/// Zoom level to renderer strategy lookup, built once at startup.
///
/// Construction validates every config so a broken table fails fast; a
/// lookup miss at render time is a fatal configuration error, never a
/// silent fallback, because every selectable zoom level must have been
/// deliberately provisioned.
#[derive(Debug, Clone)]
pub struct RendererDispatch {
    strategies: IndexMap<ZoomLevel, RendererStrategy>,
}

impl RendererDispatch {
    /// Empty table; hosts provision it via [`Self::insert_strategy`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            strategies: IndexMap::new(),
        }
    }

    /// Table with one validated strategy per builtin [`ZoomLevel`] preset.
    pub fn with_builtin_presets() -> HeaderResult<Self> {
        Self::from_configs(builtin_renderer_configs())
    }

    /// Builds a table from an explicit config map, validating each entry.
    pub fn from_configs(configs: IndexMap<ZoomLevel, RendererConfig>) -> HeaderResult<Self> {
        let mut dispatch = Self::new();
        for (level, config) in configs {
            dispatch.insert_strategy(level, RendererStrategy::from_config(config)?);
        }
        Ok(dispatch)
    }

    /// Provisions (or replaces) one zoom level's strategy.
    pub fn insert_strategy(&mut self, level: ZoomLevel, strategy: RendererStrategy) {
        self.strategies.insert(level, strategy);
    }

    /// Resolves the strategy for a zoom level.
    pub fn for_zoom_level(&self, level: ZoomLevel) -> HeaderResult<&RendererStrategy> {
        self.strategies
            .get(&level)
            .ok_or(HeaderError::MissingZoomConfig { level })
    }

    #[must_use]
    pub fn provisioned_levels(&self) -> Vec<ZoomLevel> {
        self.strategies.keys().copied().collect()
    }
}

impl Default for RendererDispatch {
    fn default() -> Self {
        Self::new()
    }
}
