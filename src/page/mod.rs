//! The calculator page: form validation, the two-step calculation, the pair
//! catalog and the price chart, written against the [`Document`] contract.

pub mod bindings;
pub mod calculator;
pub mod catalog;
pub mod chart;
pub mod document;
pub mod render;
pub mod validate;

pub use bindings::{chart_canvas_id, BindError, PageBindings};
pub use calculator::{submit, SubmitOutcome};
pub use catalog::{load_catalog, on_pair_change, select_pair, PairCatalog};
pub use chart::render_chart;
pub use document::{Document, LineChart, MemoryDocument};

use crate::client::PairSource;
use crate::config::Config;
use crate::exchange::MarketData;

/// Page-load work: the pair catalog, then the chart. The two do not depend
/// on each other and a failure in one leaves the other untouched.
pub async fn load_page<D, S, M>(
    doc: &mut D,
    page: &PageBindings,
    source: &S,
    market: &M,
    cfg: &Config,
) -> Option<PairCatalog>
where
    D: Document + ?Sized,
    S: PairSource + ?Sized,
    M: MarketData + ?Sized,
{
    let catalog = load_catalog(doc, page, source).await;
    render_chart(
        doc,
        page,
        market,
        &cfg.chart_symbol,
        cfg.chart_interval,
        cfg.chart_points,
    )
    .await;
    catalog
}
