use super::*;

#[test]
fn default_thresholds_pick_expected_columns() {
    let bp = ColumnBreakpoints::default();
    assert_eq!(bp.columns_for_width(0), 2);
    assert_eq!(bp.columns_for_width(639), 2);
    assert_eq!(bp.columns_for_width(640), 4);
    assert_eq!(bp.columns_for_width(1100), 6);
    assert_eq!(bp.columns_for_width(1440), 8);
    assert_eq!(bp.columns_for_width(4000), 10);
}

#[test]
fn narrower_than_first_threshold_uses_first_entry() {
    let bp = ColumnBreakpoints::new(vec![(800, 3), (400, 2)]);
    assert_eq!(bp.entries(), &[(400, 2), (800, 3)]);
    assert_eq!(bp.columns_for_width(100), 2);
    assert_eq!(bp.columns_for_width(900), 3);
}

#[test]
fn construction_sanitizes_entries() {
    let bp = ColumnBreakpoints::new(vec![(0, 0), (500, 2), (500, 5)]);
    assert_eq!(bp.entries(), &[(500, 5)]);

    let empty = ColumnBreakpoints::new(Vec::new());
    assert_eq!(empty.entries(), &[(0, 1)]);
    assert_eq!(empty.columns_for_width(10_000), 1);
}

#[test]
fn deserializes_from_pairs() {
    let bp: ColumnBreakpoints = serde_json::from_str("[[0, 1], [600, 3]]").unwrap();
    assert_eq!(bp.columns_for_width(700), 3);
}
