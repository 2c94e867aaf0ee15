use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::LogicalUnit;
use crate::error::{HeaderError, HeaderResult};

/// Zoom factors outside this range are clamped before the day width is
/// derived. The clamp bounds what a caller can request; it never repairs a
/// fractional result (see [`resolve_zoomed_day_width`]).
pub const MIN_ZOOM_FACTOR: f64 = 0.25;
pub const MAX_ZOOM_FACTOR: f64 = 4.0;

const DEFAULT_PRIMARY_ROW_HEIGHT_PX: u32 = 24;
const DEFAULT_SECONDARY_ROW_HEIGHT_PX: u32 = 20;

/// Preset zoom levels, coarsest first.
///
/// Four unit families (year/quarter, quarter/month, month/week, week/day),
/// each with pixel variants. The numeric suffix is the nominal secondary
/// cell width in pixels; the authoritative geometry is always the preset's
/// [`RendererConfig::day_width_px`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoomLevel {
    YearQuarter90,
    YearQuarter180,
    QuarterMonth60,
    QuarterMonth90,
    MonthWeek35,
    MonthWeek50,
    MonthWeek70,
    WeekDay30,
    WeekDay50,
    WeekDay70,
}

impl ZoomLevel {
    /// Every preset, coarsest to finest.
    pub const ALL: [Self; 10] = [
        Self::YearQuarter90,
        Self::YearQuarter180,
        Self::QuarterMonth60,
        Self::QuarterMonth90,
        Self::MonthWeek35,
        Self::MonthWeek50,
        Self::MonthWeek70,
        Self::WeekDay30,
        Self::WeekDay50,
        Self::WeekDay70,
    ];

    /// Next preset toward more pixels per day, `None` at the finest.
    #[must_use]
    pub fn finer(self) -> Option<Self> {
        let position = Self::ALL.iter().position(|level| *level == self)?;
        Self::ALL.get(position + 1).copied()
    }

    /// Next preset toward fewer pixels per day, `None` at the coarsest.
    #[must_use]
    pub fn coarser(self) -> Option<Self> {
        let position = Self::ALL.iter().position(|level| *level == self)?;
        position.checked_sub(1).and_then(|p| Self::ALL.get(p)).copied()
    }
}

/// Per-zoom-level header geometry.
///
/// Built once at table construction time and immutable thereafter. The day
/// width is integral by type; validation still rejects zero and malformed
/// unit pairings so a broken table fails at startup, not mid-render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RendererConfig {
    pub primary_unit: LogicalUnit,
    pub secondary_unit: LogicalUnit,
    pub day_width_px: u32,
    #[serde(default = "default_primary_row_height_px")]
    pub primary_row_height_px: u32,
    #[serde(default = "default_secondary_row_height_px")]
    pub secondary_row_height_px: u32,
}

impl RendererConfig {
    /// Creates a config with default row heights.
    #[must_use]
    pub fn new(primary_unit: LogicalUnit, secondary_unit: LogicalUnit, day_width_px: u32) -> Self {
        Self {
            primary_unit,
            secondary_unit,
            day_width_px,
            primary_row_height_px: default_primary_row_height_px(),
            secondary_row_height_px: default_secondary_row_height_px(),
        }
    }

    /// Sets both row heights.
    #[must_use]
    pub fn with_row_heights(mut self, primary_px: u32, secondary_px: u32) -> Self {
        self.primary_row_height_px = primary_px;
        self.secondary_row_height_px = secondary_px;
        self
    }

    /// Validates the config; run once when the dispatch table is built.
    pub fn validate(self) -> HeaderResult<Self> {
        if self.day_width_px == 0 {
            return Err(HeaderError::InvalidDayWidth { value: 0.0 });
        }
        if self.primary_row_height_px == 0 || self.secondary_row_height_px == 0 {
            return Err(HeaderError::InvalidConfig(
                "header row heights must be >= 1 px".to_owned(),
            ));
        }
        if !self.primary_unit.is_coarser_than(self.secondary_unit) {
            return Err(HeaderError::InvalidConfig(format!(
                "primary unit {:?} must be coarser than secondary unit {:?}",
                self.primary_unit, self.secondary_unit
            )));
        }
        Ok(self)
    }
}

fn default_primary_row_height_px() -> u32 {
    DEFAULT_PRIMARY_ROW_HEIGHT_PX
}

fn default_secondary_row_height_px() -> u32 {
    DEFAULT_SECONDARY_ROW_HEIGHT_PX
}

/// The builtin preset table, one entry per [`ZoomLevel`] variant.
#[must_use]
pub fn builtin_renderer_configs() -> IndexMap<ZoomLevel, RendererConfig> {
    let mut table = IndexMap::new();
    table.insert(
        ZoomLevel::YearQuarter90,
        RendererConfig::new(LogicalUnit::Year, LogicalUnit::Quarter, 1),
    );
    table.insert(
        ZoomLevel::YearQuarter180,
        RendererConfig::new(LogicalUnit::Year, LogicalUnit::Quarter, 2),
    );
    table.insert(
        ZoomLevel::QuarterMonth60,
        RendererConfig::new(LogicalUnit::Quarter, LogicalUnit::Month, 2),
    );
    table.insert(
        ZoomLevel::QuarterMonth90,
        RendererConfig::new(LogicalUnit::Quarter, LogicalUnit::Month, 3),
    );
    table.insert(
        ZoomLevel::MonthWeek35,
        RendererConfig::new(LogicalUnit::Month, LogicalUnit::Week, 5),
    );
    table.insert(
        ZoomLevel::MonthWeek50,
        RendererConfig::new(LogicalUnit::Month, LogicalUnit::Week, 7),
    );
    table.insert(
        ZoomLevel::MonthWeek70,
        RendererConfig::new(LogicalUnit::Month, LogicalUnit::Week, 10),
    );
    table.insert(
        ZoomLevel::WeekDay30,
        RendererConfig::new(LogicalUnit::Week, LogicalUnit::Day, 30),
    );
    table.insert(
        ZoomLevel::WeekDay50,
        RendererConfig::new(LogicalUnit::Week, LogicalUnit::Day, 50),
    );
    table.insert(
        ZoomLevel::WeekDay70,
        RendererConfig::new(LogicalUnit::Week, LogicalUnit::Day, 70),
    );
    table
}

/// Serializes a preset table to pretty JSON for debug/config files.
pub fn preset_table_to_json_pretty(
    table: &IndexMap<ZoomLevel, RendererConfig>,
) -> HeaderResult<String> {
    serde_json::to_string_pretty(table)
        .map_err(|e| HeaderError::InvalidConfig(format!("failed to serialize preset table: {e}")))
}

/// Deserializes a preset table from JSON. Entries are not yet validated;
/// the dispatch table construction validates each config.
pub fn preset_table_from_json_str(
    input: &str,
) -> HeaderResult<IndexMap<ZoomLevel, RendererConfig>> {
    serde_json::from_str(input)
        .map_err(|e| HeaderError::InvalidConfig(format!("failed to parse preset table: {e}")))
}

/// Derives the effective day width for a render call.
///
/// The factor is clamped to `MIN_ZOOM_FACTOR..=MAX_ZOOM_FACTOR`, then the
/// product with the preset's base width must come out integral and >= 1.
/// A fractional product is a configuration error and is rejected, never
/// rounded: per-day rounding drift would break pixel alignment between the
/// header and the task body sharing the same mapper.
pub fn resolve_zoomed_day_width(base_day_width_px: u32, zoom_factor: f64) -> HeaderResult<u32> {
    if !zoom_factor.is_finite() || zoom_factor <= 0.0 {
        return Err(HeaderError::InvalidConfig(
            "zoom factor must be finite and > 0".to_owned(),
        ));
    }

    let clamped = zoom_factor.clamp(MIN_ZOOM_FACTOR, MAX_ZOOM_FACTOR);
    let product = f64::from(base_day_width_px) * clamped;
    let rounded = product.round();
    if (product - rounded).abs() > 1e-9 || rounded < 1.0 {
        return Err(HeaderError::InvalidDayWidth { value: product });
    }

    Ok(rounded as u32)
}
