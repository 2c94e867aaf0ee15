//! gantt-header-rs: two-tier timeline header engine for zoomable Gantt charts.
//!
//! Given a visible date range, a zoom level and a pixels-per-day scale, this
//! crate produces two stacked rows of labeled, pixel-positioned period cells
//! that stay coordinate-aligned with a separately rendered task body. The
//! visible range is expanded to the union of both granularities' complete
//! periods, so neither row ever shows a truncated cell at a viewport edge.
//!
//! Pure computation only: drawing, styling and scroll tracking belong to the
//! host application.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{HeaderAssembler, HeaderRenderResult, HeaderRequest, RendererDispatch, ZoomLevel};
pub use error::{HeaderError, HeaderResult};
