use serde_json::{Map, Value};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// A widget as stored by the dashboard: the placement engine's input item.
///
/// Sizes and positions are in grid cells. `w`/`h` are canonical; the legacy
/// `colSpan`/`rowSpan` fields are consulted only when the canonical ones are
/// absent. A widget without both `x` and `y` is unpositioned.
///
/// Fields this crate does not interpret are kept in [`WidgetConfig::extra`]
/// and round-trip unchanged.
pub struct WidgetConfig {
    /// Stable widget identifier.
    pub id: String,
    /// Widget kind (`"card-tray"`, `"clock"`, ...).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Whether the widget is shown; absent means enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,
    /// Width in cells.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub w: Option<f64>,
    /// Height in cells.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h: Option<f64>,
    /// Legacy width alias.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub col_span: Option<f64>,
    /// Legacy height alias.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_span: Option<f64>,
    /// Stored column position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// Stored row position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// Widget payload (for a card tray: `{"cards": [...]}`).
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub data: Value,
    /// Every other field, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WidgetConfig {
    /// Build an unpositioned 1x1 widget.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Set the canonical size.
    pub fn with_size(mut self, w: f64, h: f64) -> Self {
        self.w = Some(w);
        self.h = Some(h);
        self
    }

    /// Set the stored position.
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    /// Set the widget kind.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Width in cells before quantization: `w`, then `colSpan`, then 1.
    pub fn width(&self) -> f64 {
        first_size(self.w, self.col_span)
    }

    /// Height in cells before quantization: `h`, then `rowSpan`, then 1.
    pub fn height(&self) -> f64 {
        first_size(self.h, self.row_span)
    }

    /// Stored position, if both coordinates are present.
    pub fn position(&self) -> Option<(f64, f64)> {
        Some((self.x?, self.y?))
    }

    /// Whether the widget should take part in layout.
    pub fn is_enabled(&self) -> bool {
        self.enable.unwrap_or(true)
    }
}

// Non-finite and negative sizes count as absent.
fn first_size(canonical: Option<f64>, legacy: Option<f64>) -> f64 {
    [canonical, legacy]
        .into_iter()
        .flatten()
        .find(|v| v.is_finite() && *v >= 0.0)
        .unwrap_or(1.0)
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// A widget with a resolved, collision-free grid rectangle.
///
/// Only [`crate::generate_layout`] produces these. `i` is the render key and
/// always equals the widget id. Serializes as the widget's own fields with
/// `i`, `x`, `y`, `w`, `h` overriding the stored ones.
pub struct GridLayoutItem {
    i: String,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    #[serde(flatten)]
    widget: WidgetConfig,
}

impl GridLayoutItem {
    pub(crate) fn new(mut widget: WidgetConfig, x: f64, y: f64, w: f64, h: f64) -> Self {
        widget.x = None;
        widget.y = None;
        widget.w = None;
        widget.h = None;
        Self {
            i: widget.id.clone(),
            x,
            y,
            w,
            h,
            widget,
        }
    }

    /// Render key (equal to [`GridLayoutItem::id`]).
    pub fn i(&self) -> &str {
        &self.i
    }

    /// Widget identifier.
    pub fn id(&self) -> &str {
        &self.widget.id
    }

    /// Resolved column position in cells.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Resolved row position in cells.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Resolved width in cells.
    pub fn w(&self) -> f64 {
        self.w
    }

    /// Resolved height in cells.
    pub fn h(&self) -> f64 {
        self.h
    }

    /// The widget's non-geometry fields.
    pub fn widget(&self) -> &WidgetConfig {
        &self.widget
    }

    /// Whether the two items share any area.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }

    /// Convert back into a widget whose stored geometry is the resolved one,
    /// ready for the store to persist.
    pub fn into_widget(self) -> WidgetConfig {
        let mut widget = self.widget;
        widget.x = Some(self.x);
        widget.y = Some(self.y);
        widget.w = Some(self.w);
        widget.h = Some(self.h);
        widget
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/widget.rs"]
mod tests;
