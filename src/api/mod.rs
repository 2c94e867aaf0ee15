pub mod assembler;
pub mod dispatch;
pub mod label_format;
pub mod strategy;
pub mod zoom_config;

pub use assembler::{HeaderAssembler, HeaderRenderResult, HeaderRequest};
pub use dispatch::RendererDispatch;
pub use label_format::{
    HeaderLocale, LabelFormat, LabelRule, LabelRules, LabelTranslator, default_rules_for,
    format_period_label, select_label_format,
};
pub use strategy::RendererStrategy;
pub use zoom_config::{
    MAX_ZOOM_FACTOR, MIN_ZOOM_FACTOR, RendererConfig, ZoomLevel, builtin_renderer_configs,
    preset_table_from_json_str, preset_table_to_json_pretty, resolve_zoomed_day_width,
};
