use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{CoordinateMapper, DateRange, HeaderPeriod, expand};
use crate::error::{HeaderError, HeaderResult};

use super::dispatch::RendererDispatch;
use super::label_format::LabelTranslator;
use super::zoom_config::{ZoomLevel, resolve_zoomed_day_width};

/// One header assembly call's inputs.
///
/// Serializable so hosts can capture/replay render requests.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeaderRequest {
    pub visible_start: NaiveDate,
    pub visible_end: NaiveDate,
    pub zoom_level: ZoomLevel,
    #[serde(default = "default_zoom_factor")]
    pub zoom_factor: f64,
}

impl HeaderRequest {
    /// Request at the preset's native scale (zoom factor 1.0).
    #[must_use]
    pub fn new(visible_start: NaiveDate, visible_end: NaiveDate, zoom_level: ZoomLevel) -> Self {
        Self {
            visible_start,
            visible_end,
            zoom_level,
            zoom_factor: default_zoom_factor(),
        }
    }

    #[must_use]
    pub fn with_zoom_factor(mut self, zoom_factor: f64) -> Self {
        self.zoom_factor = zoom_factor;
        self
    }
}

fn default_zoom_factor() -> f64 {
    1.0
}

/// Both rendered header rows plus the geometry the drawing layer needs.
///
/// The drawing layer consumes the coordinates as-is; recomputing them
/// against its own mapper would re-introduce the drift this crate exists
/// to prevent. `requested_range` is returned next to `expanded_range` so
/// the host can tell the user what span is actually covered (edge
/// tooltips) versus what was asked for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderRenderResult {
    pub primary_row: Vec<HeaderPeriod>,
    pub secondary_row: Vec<HeaderPeriod>,
    pub requested_range: DateRange,
    pub expanded_range: DateRange,
    pub day_width_px: u32,
    pub total_width_px: f64,
}

impl HeaderRenderResult {
    /// Grid line x positions for the task body: each secondary cell's left
    /// edge plus the final right edge.
    #[must_use]
    pub fn secondary_boundary_xs(&self) -> Vec<f64> {
        let mut xs: Vec<f64> = self.secondary_row.iter().map(|cell| cell.x_px).collect();
        if let Some(last) = self.secondary_row.last() {
            xs.push(last.x_px + last.width_px);
        }
        xs
    }

    /// Serializes the result to pretty JSON for snapshots and debugging.
    pub fn to_json_pretty(&self) -> HeaderResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            HeaderError::InvalidConfig(format!("failed to serialize render result: {e}"))
        })
    }

    /// Deserializes a result captured with [`Self::to_json_pretty`].
    pub fn from_json_str(input: &str) -> HeaderResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            HeaderError::InvalidConfig(format!("failed to parse render result: {e}"))
        })
    }
}

/// Top-level entry point: expansion, dispatch, and row generation.
///
/// Holds the host-supplied timeline origin (leftmost date of the entire
/// timeline, not the visible window) and the zoom dispatch table. The
/// translator is an explicit per-call argument; locale changes are the
/// host's re-render trigger, not this crate's state.
#[derive(Debug, Clone)]
pub struct HeaderAssembler {
    origin_date: NaiveDate,
    dispatch: RendererDispatch,
}

impl HeaderAssembler {
    #[must_use]
    pub fn new(origin_date: NaiveDate, dispatch: RendererDispatch) -> Self {
        Self {
            origin_date,
            dispatch,
        }
    }

    /// Assembler with the builtin preset table.
    pub fn with_builtin_presets(origin_date: NaiveDate) -> HeaderResult<Self> {
        Ok(Self::new(origin_date, RendererDispatch::with_builtin_presets()?))
    }

    #[must_use]
    pub fn origin_date(&self) -> NaiveDate {
        self.origin_date
    }

    #[must_use]
    pub fn dispatch(&self) -> &RendererDispatch {
        &self.dispatch
    }

    /// Renders both header rows for a visible range.
    ///
    /// Rejects reversed ranges, resolves the strategy and the zoomed day
    /// width, expands the range via the dual-boundary union so no row is
    /// truncated at a viewport edge, then generates the positioned,
    /// labeled cells.
    pub fn assemble(
        &self,
        request: HeaderRequest,
        translator: &dyn LabelTranslator,
    ) -> HeaderResult<HeaderRenderResult> {
        let requested_range = DateRange::new(request.visible_start, request.visible_end)?;
        let strategy = self.dispatch.for_zoom_level(request.zoom_level)?;
        let config = strategy.config();
        let day_width_px = resolve_zoomed_day_width(config.day_width_px, request.zoom_factor)?;

        let expanded_range = expand(requested_range, config.primary_unit, config.secondary_unit);
        let mapper = CoordinateMapper::new(self.origin_date, day_width_px)?;
        let (primary_row, secondary_row) = strategy.render(expanded_range, mapper, translator);
        let total_width_px = mapper.width(expanded_range);

        debug!(
            zoom_level = ?request.zoom_level,
            day_width_px,
            requested_start = %requested_range.start(),
            requested_end = %requested_range.end(),
            expanded_start = %expanded_range.start(),
            expanded_end = %expanded_range.end(),
            primary_cells = primary_row.len(),
            secondary_cells = secondary_row.len(),
            "assembled header"
        );

        Ok(HeaderRenderResult {
            primary_row,
            secondary_row,
            requested_range,
            expanded_range,
            day_width_px,
            total_width_px,
        })
    }
}
