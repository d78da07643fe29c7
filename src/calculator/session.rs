use twine_core::Model;
use uom::si::length::inch;

use crate::models::gearing::{GearInput, GearTableModel, TableConfig};

use super::{
    CalculationError, CellRange, CustomWheelPrompt, RenderedTable, WheelSelection,
    copy_selection, parse_front_teeth, render_table,
};

/// One interactive calculator session.
///
/// Owns the table currently on display. A successful calculation replaces it
/// wholesale; a failed or cancelled one leaves it untouched.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    model: GearTableModel,
    table: Option<RenderedTable>,
}

impl Calculator {
    /// Creates a session whose tables follow `config`.
    #[must_use]
    pub fn new(config: TableConfig) -> Self {
        Self {
            model: GearTableModel::new(config),
            table: None,
        }
    }

    /// Handles a calculate request.
    ///
    /// The front teeth text is validated first, so an invalid entry never
    /// reaches the custom wheel size prompt.
    ///
    /// # Errors
    ///
    /// Returns a [`CalculationError`] if the front teeth text is invalid, the
    /// custom wheel size is cancelled or out of range, or the gear math fails.
    pub fn calculate(
        &mut self,
        front_teeth: &str,
        wheel: WheelSelection,
        prompt: &mut impl CustomWheelPrompt,
    ) -> Result<&RenderedTable, CalculationError> {
        let front_teeth = parse_front_teeth(front_teeth).inspect_err(|err| {
            tracing::warn!(%err, "rejected front teeth input");
        })?;
        let wheel = wheel.resolve(prompt)?;

        let input = GearInput::new(front_teeth, wheel);
        let table = self.model.call(&input)?;
        tracing::debug!(
            front_teeth = *front_teeth,
            diameter_in = wheel.diameter().get::<inch>(),
            custom = wheel.is_custom(),
            rows = table.len(),
            "computed gear table"
        );

        let rendered = render_table(table, self.model.config().speeds());
        Ok(self.table.insert(rendered))
    }

    /// The table currently on display, if any.
    #[must_use]
    pub fn table(&self) -> Option<&RenderedTable> {
        self.table.as_ref()
    }

    /// Discards the displayed table.
    pub fn clear(&mut self) {
        if self.table.take().is_some() {
            tracing::debug!("cleared gear table");
        }
    }

    /// Exports the selected cells of the displayed table.
    ///
    /// Ranges reaching past the table are clipped to it. Returns `None` if no
    /// table is displayed or no range overlaps it.
    #[must_use]
    pub fn copy(&self, ranges: &[CellRange]) -> Option<String> {
        copy_selection(self.table.as_ref()?.cells(), ranges)
    }
}
