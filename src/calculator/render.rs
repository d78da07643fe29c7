use uom::si::{length::inch, ratio::ratio, velocity::kilometer_per_hour};

use crate::{
    models::gearing::{GearTable, ReferenceSpeed},
    support::units::Cadence,
};

use super::CellRange;

/// Headers of the columns that precede the per-speed cadence columns.
pub const FIXED_COLUMN_HEADERS: [&str; 3] = ["Rear Gear", "Gear Inch", "Gear Ratio"];

/// Rounds half away from zero to two decimal places.
///
/// Rounding follows the exact value of `value`, so 2.675 (stored just below
/// 2.675) rounds down while 3.125 (stored exactly) rounds up.
pub(super) fn round_to_hundredths(value: f64) -> f64 {
    let scaled = value * 100.0;
    // Exact residual of the multiplication.
    let error = value.mul_add(100.0, -scaled);

    let rounded = if (scaled - scaled.trunc()).abs() == 0.5 && error != 0.0 {
        // The product was rounded onto a tie; the exact value lies to one side.
        if error < 0.0 {
            scaled.floor()
        } else {
            scaled.ceil()
        }
    } else {
        scaled.round()
    };
    rounded / 100.0
}

/// Formats a value with exactly two decimals, rounding half away from zero.
///
/// The rounding mode is fixed so displayed strings do not depend on the
/// platform's formatting defaults.
///
/// ```
/// use gear_tables::calculator::format_two_decimals;
///
/// assert_eq!(format_two_decimals(96.666_666), "96.67");
/// assert_eq!(format_two_decimals(3.125), "3.13");
/// assert_eq!(format_two_decimals(43.0), "43.00");
/// ```
#[must_use]
pub fn format_two_decimals(value: f64) -> String {
    format!("{:.2}", round_to_hundredths(value))
}

/// Column headers for a table reporting cadence at `speeds`.
#[must_use]
pub fn column_headers(speeds: &[ReferenceSpeed]) -> Vec<String> {
    FIXED_COLUMN_HEADERS
        .iter()
        .map(|header| (*header).to_owned())
        .chain(speeds.iter().map(|speed| {
            let kmh = round_to_hundredths(speed.as_ref().get::<kilometer_per_hour>());
            format!("RPM @ {kmh} km/h")
        }))
        .collect()
}

/// A [`GearTable`] with every cell formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedTable {
    headers: Vec<String>,
    cells: Vec<Vec<String>>,
    table: GearTable,
}

impl RenderedTable {
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Display cells, one inner vector per row.
    #[must_use]
    pub fn cells(&self) -> &[Vec<String>] {
        &self.cells
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// The unformatted table the cells were rendered from.
    #[must_use]
    pub fn gear_table(&self) -> &GearTable {
        &self.table
    }

    /// Range covering every cell, or `None` for a table without rows.
    #[must_use]
    pub fn full_range(&self) -> Option<CellRange> {
        if self.cells.is_empty() || self.headers.is_empty() {
            return None;
        }
        Some(CellRange::new(
            0,
            0,
            self.row_count() - 1,
            self.column_count() - 1,
        ))
    }

    /// The whole table as tab-separated text, header line first.
    #[must_use]
    pub fn to_tsv(&self) -> String {
        let mut text = self.headers.join("\t");
        text.push('\n');
        for row in &self.cells {
            text.push_str(&row.join("\t"));
            text.push('\n');
        }
        text
    }
}

/// Formats every cell of `table`.
///
/// `speeds` labels the cadence columns and should be the speeds the table was
/// generated with.
#[must_use]
pub fn render_table(table: GearTable, speeds: &[ReferenceSpeed]) -> RenderedTable {
    let cells: Vec<Vec<String>> = table
        .rows()
        .iter()
        .map(|row| {
            [
                format!("{}T", row.rear_teeth),
                format_two_decimals(row.gear_inch.get::<inch>()),
                format_two_decimals(row.gear_ratio.get::<ratio>()),
            ]
            .into_iter()
            .chain(
                row.cadences
                    .iter()
                    .map(|entry| format_two_decimals(entry.cadence.rpm())),
            )
            .collect()
        })
        .collect();

    RenderedTable {
        headers: column_headers(speeds),
        cells,
        table,
    }
}

#[cfg(test)]
mod tests {
    use uom::si::f64::Velocity;

    use super::*;
    use crate::{
        models::gearing::{
            FrontTeeth, GearInput, TableConfig, WheelDiameter, WheelSize, generate_table,
        },
        support::constraint::NonNegative,
    };

    fn rendered(front: u32, inches: f64) -> RenderedTable {
        let config = TableConfig::default();
        let input = GearInput::new(
            FrontTeeth::new(front).unwrap(),
            WheelSize::Predefined(WheelDiameter::new::<inch>(inches).unwrap()),
        );
        render_table(generate_table(&input, &config).unwrap(), config.speeds())
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(format_two_decimals(0.125), "0.13");
        assert_eq!(format_two_decimals(2.5), "2.50");
        assert_eq!(format_two_decimals(10.803_349), "10.80");
        assert_eq!(format_two_decimals(0.0), "0.00");
        assert_eq!(round_to_hundredths(27.499), 27.5);
        assert_eq!(format_two_decimals(-0.125), "-0.13");
    }

    #[test]
    fn rounding_follows_the_stored_value() {
        // Stored just below the tie, although `x * 100.0` lands on it.
        assert_eq!(format_two_decimals(107.0 / 40.0), "2.67");
        assert_eq!(format_two_decimals(-107.0 / 40.0), "-2.67");
        assert_eq!(format_two_decimals(1.005), "1.00");
        assert_eq!(format_two_decimals(0.285), "0.28");
        // Exact ties still round away from zero.
        assert_eq!(format_two_decimals(3.125), "3.13");
        assert_eq!(format_two_decimals(90.625), "90.63");
    }

    #[test]
    fn reference_headers() {
        let headers = column_headers(TableConfig::default().speeds());
        assert_eq!(
            headers,
            vec![
                "Rear Gear",
                "Gear Inch",
                "Gear Ratio",
                "RPM @ 5 km/h",
                "RPM @ 10 km/h",
                "RPM @ 20 km/h",
                "RPM @ 30 km/h",
                "RPM @ 40 km/h",
            ]
        );
    }

    #[test]
    fn fractional_speed_header() {
        let speeds = [NonNegative::new(Velocity::new::<kilometer_per_hour>(12.5)).unwrap()];
        assert_eq!(column_headers(&speeds)[3], "RPM @ 12.5 km/h");
    }

    #[test]
    fn cells_for_50t_on_700c() {
        let table = rendered(50, 29.0);
        assert_eq!(table.row_count(), 52);
        assert_eq!(table.column_count(), 8);
        assert!(table.cells().iter().all(|row| row.len() == 8));

        assert_eq!(table.cells()[0][0], "9T");
        assert_eq!(table.cells()[51][0], "60T");
        assert_eq!(
            table.cells()[6],
            vec!["15T", "96.67", "3.33", "10.80", "21.61", "43.21", "64.82", "86.43"]
        );
        assert_eq!(table.cells()[7][0], "16T");
        assert_eq!(table.cells()[7][2], "3.13");
    }

    #[test]
    fn full_range_and_tsv() {
        let table = rendered(34, 26.0);
        assert_eq!(table.full_range(), Some(CellRange::new(0, 0, 51, 7)));

        let tsv = table.to_tsv();
        let mut lines = tsv.lines();
        assert_eq!(lines.next(), Some(table.headers().join("\t").as_str()));
        assert_eq!(lines.count(), 52);
        assert!(tsv.ends_with('\n'));
    }
}
