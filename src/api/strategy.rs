use crate::core::{CoordinateMapper, DateRange, HeaderPeriod, HeaderRow, generate_periods};
use crate::error::HeaderResult;

use super::label_format::{
    LabelRules, LabelTranslator, default_rules_for, format_period_label, select_label_format,
};
use super::zoom_config::RendererConfig;

/// One zoom family's renderer: configuration plus per-row label rules.
///
/// A strategy is data, not a subclass: the same two-row pipeline runs for
/// every zoom level, parameterized by the config's unit pair and by label
/// rule ladders keyed on per-cell pixel width. Stateless given its
/// configuration; render calls share nothing mutable.
#[derive(Debug, Clone)]
pub struct RendererStrategy {
    config: RendererConfig,
    primary_rules: LabelRules,
    secondary_rules: LabelRules,
}

impl RendererStrategy {
    /// Builds a strategy from a validated config with the default label
    /// rule ladders for its unit pair.
    pub fn from_config(config: RendererConfig) -> HeaderResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            primary_rules: default_rules_for(config.primary_unit),
            secondary_rules: default_rules_for(config.secondary_unit),
            config,
        })
    }

    /// Overrides the label rule ladders.
    #[must_use]
    pub fn with_label_rules(mut self, primary: LabelRules, secondary: LabelRules) -> Self {
        self.primary_rules = primary;
        self.secondary_rules = secondary;
        self
    }

    #[must_use]
    pub fn config(&self) -> RendererConfig {
        self.config
    }

    /// Generates both header rows over an already-expanded range.
    ///
    /// The caller aligned `expanded` via the dual-boundary expansion, so
    /// the secondary row is always complete periods; primary edge cells
    /// clip at the expanded bounds only for interleaving unit pairs.
    #[must_use]
    pub fn render(
        &self,
        expanded: DateRange,
        mapper: CoordinateMapper,
        translator: &dyn LabelTranslator,
    ) -> (Vec<HeaderPeriod>, Vec<HeaderPeriod>) {
        let primary_row = generate_periods(
            expanded,
            self.config.primary_unit,
            HeaderRow::Primary,
            mapper,
            |cell_range, width_px| {
                let format = select_label_format(&self.primary_rules, width_px);
                format_period_label(cell_range, format, translator)
            },
        );
        let secondary_row = generate_periods(
            expanded,
            self.config.secondary_unit,
            HeaderRow::Secondary,
            mapper,
            |cell_range, width_px| {
                let format = select_label_format(&self.secondary_rules, width_px);
                format_period_label(cell_range, format, translator)
            },
        );
        (primary_row, secondary_row)
    }
}
