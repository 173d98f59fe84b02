use thiserror::Error;

use super::document::{Document, LineChart};

pub const CALC_FORM: &str = "calcForm";
pub const CURRENT_PRICE: &str = "current_price";
pub const ENTRY_PRICE: &str = "entry_price";
pub const LEVERAGE: &str = "leverage";
pub const POSITION_SIZE: &str = "position_size";
pub const RISK_PERCENT: &str = "risk_percent";
pub const CALC_RESULTS: &str = "calcResults";
pub const ADVICE_RESULTS: &str = "adviceResults";
pub const PAIRS_CONTAINER: &str = "pairs-container";
pub const PAIR_SELECT: &str = "pair-select";
pub const STOP_LOSS: &str = "stop-loss";
pub const TAKE_PROFIT: &str = "take-profit";
pub const PAIR_SYMBOL: &str = "pair-symbol";
pub const PAIR_PRICE: &str = "pair-price";
pub const PRICE_CHANGE: &str = "price-change";

const REQUIRED: [&str; 9] = [
    CALC_FORM,
    CURRENT_PRICE,
    ENTRY_PRICE,
    LEVERAGE,
    POSITION_SIZE,
    RISK_PERCENT,
    CALC_RESULTS,
    ADVICE_RESULTS,
    PAIRS_CONTAINER,
];

const OPTIONAL: [&str; 6] = [
    PAIR_SELECT,
    STOP_LOSS,
    TAKE_PROFIT,
    PAIR_SYMBOL,
    PAIR_PRICE,
    PRICE_CHANGE,
];

/// Canvas id the host page uses for a symbol's chart, e.g. `chart-btcusdt`.
pub fn chart_canvas_id(symbol: &str) -> String {
    format!("chart-{}", symbol.to_lowercase())
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindError {
    #[error("page is missing required elements: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
}

/// A form control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Input(&'static str);

impl Input {
    pub fn id(&self) -> &'static str {
        self.0
    }

    pub fn read<D: Document + ?Sized>(&self, doc: &D) -> String {
        doc.value(self.0)
    }

    pub fn write<D: Document + ?Sized>(&self, doc: &mut D, value: &str) {
        doc.set_value(self.0, value)
    }

    pub fn clear<D: Document + ?Sized>(&self, doc: &mut D) {
        doc.set_value(self.0, "")
    }
}

/// A container whose markup is replaced or appended to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panel(&'static str);

impl Panel {
    pub fn id(&self) -> &'static str {
        self.0
    }

    pub fn replace<D: Document + ?Sized>(&self, doc: &mut D, html: String) {
        doc.set_inner_html(self.0, html)
    }

    pub fn append<D: Document + ?Sized>(&self, doc: &mut D, html: String) {
        doc.append_html(self.0, html)
    }
}

/// An element that only shows text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Text(&'static str);

impl Text {
    pub fn id(&self) -> &'static str {
        self.0
    }

    pub fn set<D: Document + ?Sized>(&self, doc: &mut D, text: &str) {
        doc.set_text(self.0, text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas(String);

impl Canvas {
    pub fn id(&self) -> &str {
        &self.0
    }

    pub fn draw<D: Document + ?Sized>(&self, doc: &mut D, chart: &LineChart) {
        doc.draw_line_chart(&self.0, chart)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormInputs {
    pub current_price: Input,
    pub entry_price: Input,
    pub leverage: Input,
    pub position_size: Input,
    pub risk_percent: Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickLevelOutputs {
    pub stop_loss: Text,
    pub take_profit: Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickerOutputs {
    pub symbol: Text,
    pub price: Text,
    pub change: Text,
}

/// Typed handles for every element the calculator touches.
///
/// Required elements are checked once in [`PageBindings::bind`]. Optional
/// ones pick the page variant: with `pair-select` the catalog also fills a
/// dropdown, with `stop-loss`/`take-profit` the local estimate is shown,
/// with the ticker and canvas elements the chart section is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageBindings {
    pub form: FormInputs,
    pub calc_results: Panel,
    pub advice_results: Panel,
    pub pairs_container: Panel,
    pub pair_select: Option<Input>,
    pub pair_options: Option<Panel>,
    pub quick_levels: Option<QuickLevelOutputs>,
    pub ticker: Option<TickerOutputs>,
    pub chart: Option<Canvas>,
}

impl PageBindings {
    pub fn bind<D: Document + ?Sized>(doc: &D, chart_canvas: &str) -> Result<Self, BindError> {
        let missing: Vec<&'static str> = REQUIRED
            .iter()
            .copied()
            .filter(|id| !doc.has_element(id))
            .collect();
        if !missing.is_empty() {
            return Err(BindError::Missing(missing));
        }

        let has = |id: &str| doc.has_element(id);

        let quick_levels = (has(STOP_LOSS) && has(TAKE_PROFIT)).then_some(QuickLevelOutputs {
            stop_loss: Text(STOP_LOSS),
            take_profit: Text(TAKE_PROFIT),
        });

        let ticker = (has(PAIR_SYMBOL) && has(PAIR_PRICE) && has(PRICE_CHANGE)).then_some(
            TickerOutputs {
                symbol: Text(PAIR_SYMBOL),
                price: Text(PAIR_PRICE),
                change: Text(PRICE_CHANGE),
            },
        );

        Ok(PageBindings {
            form: FormInputs {
                current_price: Input(CURRENT_PRICE),
                entry_price: Input(ENTRY_PRICE),
                leverage: Input(LEVERAGE),
                position_size: Input(POSITION_SIZE),
                risk_percent: Input(RISK_PERCENT),
            },
            calc_results: Panel(CALC_RESULTS),
            advice_results: Panel(ADVICE_RESULTS),
            pairs_container: Panel(PAIRS_CONTAINER),
            pair_select: has(PAIR_SELECT).then_some(Input(PAIR_SELECT)),
            pair_options: has(PAIR_SELECT).then_some(Panel(PAIR_SELECT)),
            quick_levels,
            ticker,
            chart: has(chart_canvas).then(|| Canvas(chart_canvas.to_string())),
        })
    }

    /// Every id the richest page variant exposes.
    pub fn full_page_ids(chart_canvas: &str) -> Vec<String> {
        REQUIRED
            .iter()
            .chain(OPTIONAL.iter())
            .map(|id| id.to_string())
            .chain(std::iter::once(chart_canvas.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::MemoryDocument;

    #[test]
    fn missing_required_ids_are_all_reported() {
        let doc = MemoryDocument::with_ids(&[CALC_FORM, CURRENT_PRICE, ENTRY_PRICE]);
        let err = PageBindings::bind(&doc, "chart-btcusdt").unwrap_err();
        let BindError::Missing(ids) = &err;
        assert_eq!(ids.len(), 6);
        assert!(err.to_string().contains("calcResults"));
    }

    #[test]
    fn basic_page_has_no_optional_handles() {
        let doc = MemoryDocument::with_ids(&REQUIRED);
        let page = PageBindings::bind(&doc, "chart-btcusdt").unwrap();
        assert!(page.pair_select.is_none());
        assert!(page.quick_levels.is_none());
        assert!(page.ticker.is_none());
        assert!(page.chart.is_none());
    }

    #[test]
    fn full_page_binds_every_variant() {
        let ids = PageBindings::full_page_ids("chart-btcusdt");
        let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
        let doc = MemoryDocument::with_ids(&refs);
        let page = PageBindings::bind(&doc, "chart-btcusdt").unwrap();
        assert_eq!(page.pair_select.map(|i| i.id()), Some(PAIR_SELECT));
        assert!(page.quick_levels.is_some());
        assert!(page.ticker.is_some());
        assert_eq!(page.chart.as_ref().map(|c| c.id()), Some("chart-btcusdt"));
    }

    #[test]
    fn canvas_id_follows_symbol() {
        assert_eq!(chart_canvas_id("BTCUSDT"), "chart-btcusdt");
    }
}
