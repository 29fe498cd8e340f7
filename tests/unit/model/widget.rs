use super::*;

#[test]
fn legacy_spans_apply_only_when_canonical_size_is_absent() {
    let json = r#"{ "id": "a", "colSpan": 2, "rowSpan": 3 }"#;
    let w: WidgetConfig = serde_json::from_str(json).unwrap();
    assert_eq!(w.width(), 2.0);
    assert_eq!(w.height(), 3.0);

    let json = r#"{ "id": "a", "w": 1.5, "colSpan": 2, "rowSpan": 3 }"#;
    let w: WidgetConfig = serde_json::from_str(json).unwrap();
    assert_eq!(w.width(), 1.5);
    assert_eq!(w.height(), 3.0);

    let w = WidgetConfig::new("b");
    assert_eq!((w.width(), w.height()), (1.0, 1.0));
}

#[test]
fn invalid_sizes_fall_back_to_alias_or_default() {
    let mut w = WidgetConfig::new("a");
    w.w = Some(-2.0);
    w.col_span = Some(3.0);
    w.h = Some(f64::NAN);
    assert_eq!(w.width(), 3.0);
    assert_eq!(w.height(), 1.0);
}

#[test]
fn position_requires_both_coordinates() {
    let mut w = WidgetConfig::new("a");
    w.x = Some(1.0);
    assert_eq!(w.position(), None);
    w.y = Some(2.0);
    assert_eq!(w.position(), Some((1.0, 2.0)));
}

#[test]
fn unknown_fields_round_trip() {
    let json = r#"{
        "id": "tray-1",
        "type": "card-tray",
        "enable": true,
        "data": { "cards": [] },
        "colSpan": 1,
        "rowSpan": 1,
        "isPublic": true
    }"#;
    let w: WidgetConfig = serde_json::from_str(json).unwrap();
    assert_eq!(w.kind.as_deref(), Some("card-tray"));
    assert!(w.is_enabled());
    assert_eq!(w.extra.get("isPublic"), Some(&Value::Bool(true)));

    let back = serde_json::to_value(&w).unwrap();
    assert_eq!(back["isPublic"], Value::Bool(true));
    assert_eq!(back["colSpan"], serde_json::json!(1.0));
    assert!(back.get("x").is_none());
}

#[test]
fn layout_item_serializes_resolved_geometry_once() {
    let w = WidgetConfig::new("a").with_size(9.0, 9.0).at(7.0, 7.0);
    let item = GridLayoutItem::new(w, 1.0, 2.0, 1.5, 1.0);
    let v = serde_json::to_value(&item).unwrap();
    assert_eq!(v["i"], "a");
    assert_eq!(v["id"], "a");
    assert_eq!(v["x"], serde_json::json!(1.0));
    assert_eq!(v["w"], serde_json::json!(1.5));

    let widget = item.into_widget();
    assert_eq!(widget.position(), Some((1.0, 2.0)));
    assert_eq!(widget.w, Some(1.5));
}

#[test]
fn overlap_ignores_shared_edges() {
    let a = GridLayoutItem::new(WidgetConfig::new("a"), 0.0, 0.0, 1.0, 1.0);
    let b = GridLayoutItem::new(WidgetConfig::new("b"), 1.0, 0.0, 1.0, 1.0);
    let c = GridLayoutItem::new(WidgetConfig::new("c"), 0.5, 0.5, 1.0, 1.0);
    assert!(!a.overlaps(&b));
    assert!(a.overlaps(&c));
}
