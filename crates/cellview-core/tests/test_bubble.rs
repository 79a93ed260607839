mod common;

use std::f64::consts::FRAC_PI_2;

use approx::assert_relative_eq;

use cellview_core::bubble::{bubble_plot, natural_factors, BubbleOptions};
use cellview_core::error::CellviewError;
use cellview_core::palette::viridis;
use cellview_core::panel::{OutputBackend, Tool};
use cellview_core::table::QuantTable;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_bounds_equal_column_extremes() {
    let table = common::quant_table();
    let plot = bubble_plot(&table, &BubbleOptions::new("Well", "Receptor")).unwrap();
    assert_eq!(plot.size_bounds, (5.0, 80.0));
    assert_eq!(plot.color_bounds, (0.25, 1.5));
}

#[test]
fn test_missing_percent_positive_fails() {
    let csv = "\
Round,Plate,Well,Virus,Receptor,Dose,Total Brightness per Signal Area
1,1,3,VSV,ACE2,10,0.5
";
    let table = QuantTable::from_csv_reader(csv.as_bytes()).unwrap();
    let err = bubble_plot(&table, &BubbleOptions::new("Well", "Receptor")).unwrap_err();
    assert!(
        matches!(&err, CellviewError::MissingColumn(name) if name == "Percent Positive"),
        "got: {err}"
    );
}

#[test]
fn test_missing_axis_column_fails() {
    let table = common::quant_table();
    let err = bubble_plot(&table, &BubbleOptions::new("Column", "Receptor")).unwrap_err();
    assert!(matches!(err, CellviewError::MissingColumn(name) if name == "Column"));
}

#[test]
fn test_non_numeric_size_column_fails() {
    let table = common::quant_table();
    let mut opts = BubbleOptions::new("Well", "Receptor");
    opts.size_column = "Virus".into();
    assert!(matches!(
        bubble_plot(&table, &opts),
        Err(CellviewError::NonNumericColumn(_))
    ));
}

#[test]
fn test_empty_table_fails() {
    let csv = "Round,Plate,Well,Virus,Receptor,Dose,Total Brightness per Signal Area,Percent Positive\n";
    let table = QuantTable::from_csv_reader(csv.as_bytes()).unwrap();
    assert!(matches!(
        bubble_plot(&table, &BubbleOptions::new("Well", "Receptor")),
        Err(CellviewError::EmptyTable)
    ));
}

#[test]
fn test_default_factors_use_natural_order() {
    let table = common::quant_table();
    let plot = bubble_plot(&table, &BubbleOptions::new("Well", "Receptor")).unwrap();
    let x = plot.panel.x_range.as_factor().unwrap();
    let y = plot.panel.y_range.as_factor().unwrap();
    assert_eq!(x.factors, strings(&["3", "12"]));
    assert_eq!(y.factors, strings(&["ACE2", "TMPRSS2"]));
}

#[test]
fn test_natural_factors() {
    assert_eq!(
        natural_factors(&strings(&["10", "2", "10", "1.5"])),
        strings(&["1.5", "2", "10"])
    );
    assert_eq!(
        natural_factors(&strings(&["b", "a", "10", "b"])),
        strings(&["10", "a", "b"])
    );
}

#[test]
fn test_explicit_factors_filter_rows() {
    let table = common::quant_table();
    let mut opts = BubbleOptions::new("Well", "Receptor");
    opts.x_factors = Some(strings(&["3"]));
    let plot = bubble_plot(&table, &opts).unwrap();
    assert_eq!(plot.panel.markers().count(), 2);
    assert!(plot.panel.markers().all(|m| m.x == "3"));
    // Bounds still cover the whole table.
    assert_eq!(plot.size_bounds, (5.0, 80.0));
}

#[test]
fn test_marker_size_and_color_encoding() {
    let table = common::quant_table();
    let plot = bubble_plot(&table, &BubbleOptions::new("Well", "Receptor")).unwrap();
    let markers: Vec<_> = plot.panel.markers().collect();
    assert_eq!(markers.len(), 3);

    // Percent Positive 20 within [5, 80] -> 0.2 of the 5..25 px range.
    assert_relative_eq!(markers[0].size, 9.0, epsilon = 1e-9);
    assert_relative_eq!(markers[1].size, 25.0, epsilon = 1e-9);
    assert_relative_eq!(markers[2].size, 5.0, epsilon = 1e-9);

    let palette = viridis(256);
    assert_eq!(markers[1].color, palette.last());
    assert_eq!(markers[2].color, palette.first());
}

#[test]
fn test_constant_size_column_uses_mid_size() {
    let csv = "\
Round,Plate,Well,Virus,Receptor,Dose,Total Brightness per Signal Area,Percent Positive
1,1,1,VSV,ACE2,10,0.5,50
1,1,2,VSV,ACE2,10,0.7,50
";
    let table = QuantTable::from_csv_reader(csv.as_bytes()).unwrap();
    let plot = bubble_plot(&table, &BubbleOptions::new("Well", "Receptor")).unwrap();
    assert_eq!(plot.size_bounds, (50.0, 50.0));
    assert!(plot.panel.markers().all(|m| (m.size - 15.0).abs() < 1e-9));
}

#[test]
fn test_hover_tooltips_carry_identity_columns() {
    let table = common::quant_table();
    let plot = bubble_plot(&table, &BubbleOptions::new("Well", "Receptor")).unwrap();
    let first = plot.panel.markers().next().unwrap();
    let expected: Vec<(String, String)> = [
        ("Round", "1"),
        ("Plate", "1"),
        ("Well", "3"),
        ("Virus", "VSV"),
        ("Receptor", "ACE2"),
        ("Dose", "10"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    assert_eq!(first.tooltip, expected);
    assert!(plot.panel.tools.contains(&Tool::Hover));
}

#[test]
fn test_panel_styling() {
    let table = common::quant_table();
    let plot = bubble_plot(&table, &BubbleOptions::new("Well", "Receptor")).unwrap();
    let panel = &plot.panel;
    assert_eq!(panel.frame_width, Some(500));
    assert_eq!(panel.frame_height, 400);
    assert_eq!(panel.x_axis.major_label_orientation, FRAC_PI_2);
    assert_eq!(panel.y_axis.major_label_orientation, 0.0);
    assert_eq!(panel.output_backend, OutputBackend::Svg);
    assert_eq!(panel.x_axis.label.as_deref(), Some("Well"));
}

#[test]
fn test_bound_overrides_are_returned() {
    let table = common::quant_table();
    let mut opts = BubbleOptions::new("Well", "Receptor");
    opts.size_bounds = Some((0.0, 100.0));
    opts.color_bounds = Some((0.0, 3.0));
    let plot = bubble_plot(&table, &opts).unwrap();
    assert_eq!(plot.size_bounds, (0.0, 100.0));
    assert_eq!(plot.color_bounds, (0.0, 3.0));
    let first = plot.panel.markers().next().unwrap();
    assert_relative_eq!(first.size, 9.0, epsilon = 1e-9);
}
