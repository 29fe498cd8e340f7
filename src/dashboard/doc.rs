use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_json::{Map, Value};

use crate::{
    foundation::error::{GridError, GridResult},
    layout::placement::{LayoutOpts, generate_layout_with},
    model::nav::{NavGroup, NavItem},
    model::widget::{GridLayoutItem, WidgetConfig},
    tray::reorder::reorder_tray_cards,
};

/// Widget kind whose `data.cards` holds tray cards.
pub const TRAY_WIDGET_KIND: &str = "card-tray";

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Snapshot of the dashboard state as held by the store.
///
/// This is the JSON boundary object: widgets, link groups, and whatever else
/// the store keeps (user name, app config, ...), which is preserved as-is.
/// Operations never modify `self`; they return fresh values.
pub struct Dashboard {
    /// Widgets in store order.
    #[serde(default)]
    pub widgets: Vec<WidgetConfig>,
    /// Link groups in display order.
    #[serde(default)]
    pub groups: Vec<NavGroup>,
    /// Every other top-level field, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Dashboard {
    /// Parse a dashboard from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> GridResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| GridError::serde(format!("parse dashboard JSON: {e}")))
    }

    /// Parse a dashboard from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> GridResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            GridError::validation(format!("open dashboard JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check that widget ids are non-empty and unique.
    pub fn validate(&self) -> GridResult<()> {
        let mut seen = BTreeSet::new();
        for widget in &self.widgets {
            if widget.id.trim().is_empty() {
                return Err(GridError::validation("widget id must be non-empty"));
            }
            if !seen.insert(widget.id.as_str()) {
                return Err(GridError::validation(format!(
                    "duplicate widget id '{}'",
                    widget.id
                )));
            }
        }
        Ok(())
    }

    /// Lay out the enabled widgets.
    pub fn layout(&self, opts: &LayoutOpts) -> Vec<GridLayoutItem> {
        let enabled = self
            .widgets
            .iter()
            .filter(|w| w.is_enabled())
            .cloned()
            .collect::<Vec<_>>();
        generate_layout_with(&enabled, opts)
    }

    /// Cards held by the tray widget `widget_id`, in tray order.
    pub fn tray_cards(&self, widget_id: &str) -> GridResult<Vec<NavItem>> {
        let widget = self.tray_widget(widget_id)?;
        match widget.data.get("cards") {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(cards) => serde_json::from_value(cards.clone()).map_err(|e| {
                GridError::serde(format!("tray '{widget_id}' cards: {e}"))
            }),
        }
    }

    /// Return a copy of this dashboard with one tray card moved.
    ///
    /// Groups and all other widgets are carried over untouched. The tray's
    /// card list is truncated to `capacity` as part of the move.
    pub fn reorder_tray(
        &self,
        widget_id: &str,
        from_index: isize,
        to_index: isize,
        capacity: usize,
    ) -> GridResult<Self> {
        let cards = self.tray_cards(widget_id)?;
        let reordered = reorder_tray_cards(&cards, from_index, to_index, capacity);
        let reordered = serde_json::to_value(reordered)?;

        let mut next = self.clone();
        let widget = next
            .widgets
            .iter_mut()
            .find(|w| w.id == widget_id)
            .ok_or_else(|| GridError::validation(format!("unknown widget '{widget_id}'")))?;
        if widget.data.is_null() {
            widget.data = Value::Object(Map::new());
        }
        if let Value::Object(data) = &mut widget.data {
            data.insert("cards".to_string(), reordered);
        }
        Ok(next)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> GridResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn tray_widget(&self, widget_id: &str) -> GridResult<&WidgetConfig> {
        let widget = self
            .widgets
            .iter()
            .find(|w| w.id == widget_id)
            .ok_or_else(|| GridError::validation(format!("unknown widget '{widget_id}'")))?;
        if widget.kind.as_deref() != Some(TRAY_WIDGET_KIND) {
            return Err(GridError::validation(format!(
                "widget '{widget_id}' is not a {TRAY_WIDGET_KIND}"
            )));
        }
        if !(widget.data.is_null() || widget.data.is_object()) {
            return Err(GridError::validation(format!(
                "tray '{widget_id}' data must be an object when set"
            )));
        }
        Ok(widget)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dashboard/doc.rs"]
mod tests;
