use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::models::{Sample, COLUMNS};
use crate::utils::format::{format_time, format_value};

/// Human-readable cells for one tuple, in canonical column order.
pub fn format_row(sample: &Sample) -> [String; 7] {
    [
        format_value(sample.score * 100.0, 1),
        format_time(sample.fcp),
        format_time(sample.si),
        format_time(sample.lcp),
        format_time(sample.tti),
        format_time(sample.tbt),
        format_value(sample.cls, 3),
    ]
}

/// Assemble the display table for one (url, device) batch: trial rows
/// `#1..#N` followed by bold `AVG` and `SD` rows. Summary mode keeps
/// only the aggregate rows.
pub fn build_table(samples: &[Sample], avg: &Sample, stdev: &Sample, summary: bool) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("")];
    header.extend(COLUMNS.iter().map(|label| Cell::new(label).fg(Color::Green)));
    table.add_row(header);

    if !summary {
        for (index, sample) in samples.iter().enumerate() {
            let mut row = vec![Cell::new(format!("#{}", index + 1))];
            row.extend(format_row(sample).into_iter().map(Cell::new));
            table.add_row(row);
        }
    }

    for (label, aggregate) in [("AVG", avg), ("SD", stdev)] {
        let mut row = vec![Cell::new(label).add_attribute(Attribute::Bold)];
        row.extend(
            format_row(aggregate)
                .into_iter()
                .map(|text| Cell::new(text).add_attribute(Attribute::Bold)),
        );
        table.add_row(row);
    }

    for index in 1..=COLUMNS.len() {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::compute::stats::aggregate;

    fn batch() -> Vec<Sample> {
        vec![
            Sample::from_row([0.8, 820.0, 1540.0, 1710.0, 2200.0, 40.0, 0.012]),
            Sample::from_row([0.9, 780.0, 1490.0, 1650.0, 2100.0, 20.0, 0.010]),
        ]
    }

    #[test]
    fn full_mode_lists_every_trial_then_aggregates() {
        let samples = batch();
        let (avg, stdev) = aggregate(&samples).unwrap();
        let rendered = build_table(&samples, &avg, &stdev, false).to_string();

        for label in COLUMNS {
            assert!(rendered.contains(label), "missing column {label}");
        }
        for label in ["#1", "#2", "AVG", "SD"] {
            assert!(rendered.contains(label), "missing row {label}");
        }

        // Spot-check formatted cells: trial scores and a converted time.
        assert!(rendered.contains("80"));
        assert!(rendered.contains("90"));
        assert!(rendered.contains("1.5s"));
        assert!(rendered.contains("820ms"));
    }

    #[test]
    fn summary_mode_keeps_only_aggregate_rows() {
        let samples = batch();
        let (avg, stdev) = aggregate(&samples).unwrap();
        let rendered = build_table(&samples, &avg, &stdev, true).to_string();

        assert!(!rendered.contains("#1"));
        assert!(!rendered.contains("#2"));
        assert!(rendered.contains("AVG"));
        assert!(rendered.contains("SD"));
        // Mean score of 0.8 and 0.9.
        assert!(rendered.contains("85"));
    }

    #[test]
    fn formats_aggregate_rows_like_trial_rows() {
        let sample = Sample::from_row([0.825, 999.96, 1500.0, 1000.0, 950.0, 0.0, 0.12345]);
        assert_eq!(
            format_row(&sample),
            [
                "82.5".to_string(),
                "1,000ms".to_string(),
                "1.5s".to_string(),
                "1s".to_string(),
                "950ms".to_string(),
                "0ms".to_string(),
                "0.123".to_string(),
            ]
        );
    }
}
