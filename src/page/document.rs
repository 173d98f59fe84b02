use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{info, warn};

/// A line chart handed to whatever draws charts on the host page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChart {
    pub label: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub x_title: String,
    pub y_title: String,
}

/// The host page as the calculator sees it: elements addressed by id.
///
/// Pipeline code never calls this with raw ids; it goes through
/// [`PageBindings`](super::PageBindings), which checks the ids up front.
pub trait Document {
    fn has_element(&self, id: &str) -> bool;
    /// Current value of a form control, empty when unset.
    fn value(&self, id: &str) -> String;
    fn set_value(&mut self, id: &str, value: &str);
    fn set_inner_html(&mut self, id: &str, html: String);
    fn append_html(&mut self, id: &str, html: String);
    fn set_text(&mut self, id: &str, text: &str);
    /// Blocking, user-facing message.
    fn alert(&mut self, message: &str);
    fn draw_line_chart(&mut self, canvas_id: &str, chart: &LineChart);
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub value: String,
    pub html: String,
    pub text: String,
}

/// Document kept entirely in memory. Writes to unknown ids are dropped
/// with a warning, the way a missing element would fail on a real page.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    elements: HashMap<String, Element>,
    alerts: Vec<String>,
    charts: HashMap<String, LineChart>,
}

impl MemoryDocument {
    pub fn with_ids(ids: &[&str]) -> Self {
        let elements = ids
            .iter()
            .map(|id| (id.to_string(), Element::default()))
            .collect();
        Self {
            elements,
            ..Self::default()
        }
    }

    pub fn inner_html(&self, id: &str) -> &str {
        self.elements.get(id).map(|e| e.html.as_str()).unwrap_or("")
    }

    pub fn text(&self, id: &str) -> &str {
        self.elements.get(id).map(|e| e.text.as_str()).unwrap_or("")
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn chart(&self, canvas_id: &str) -> Option<&LineChart> {
        self.charts.get(canvas_id)
    }

    fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        let el = self.elements.get_mut(id);
        if el.is_none() {
            warn!("No element with id '{}'", id);
        }
        el
    }
}

impl Document for MemoryDocument {
    fn has_element(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn value(&self, id: &str) -> String {
        self.elements
            .get(id)
            .map(|e| e.value.clone())
            .unwrap_or_default()
    }

    fn set_value(&mut self, id: &str, value: &str) {
        if let Some(el) = self.element_mut(id) {
            el.value = value.to_string();
        }
    }

    fn set_inner_html(&mut self, id: &str, html: String) {
        if let Some(el) = self.element_mut(id) {
            el.html = html;
        }
    }

    fn append_html(&mut self, id: &str, html: String) {
        if let Some(el) = self.element_mut(id) {
            el.html.push_str(&html);
        }
    }

    fn set_text(&mut self, id: &str, text: &str) {
        if let Some(el) = self.element_mut(id) {
            el.text = text.to_string();
        }
    }

    fn alert(&mut self, message: &str) {
        info!("alert: {}", message);
        self.alerts.push(message.to_string());
    }

    fn draw_line_chart(&mut self, canvas_id: &str, chart: &LineChart) {
        if self.element_mut(canvas_id).is_some() {
            self.charts.insert(canvas_id.to_string(), chart.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_to_unknown_ids_are_ignored() {
        let mut doc = MemoryDocument::with_ids(&["a"]);
        doc.set_value("b", "1");
        doc.append_html("b", "<p></p>".to_string());
        assert!(!doc.has_element("b"));
        assert_eq!(doc.value("b"), "");
    }

    #[test]
    fn append_accumulates_and_replace_resets() {
        let mut doc = MemoryDocument::with_ids(&["box"]);
        doc.append_html("box", "<p>1</p>".to_string());
        doc.append_html("box", "<p>2</p>".to_string());
        assert_eq!(doc.inner_html("box"), "<p>1</p><p>2</p>");
        doc.set_inner_html("box", String::new());
        assert_eq!(doc.inner_html("box"), "");
    }
}
