use tracing::{debug, error, info, warn};

use super::bindings::PageBindings;
use super::document::Document;
use super::render::{fmt_num, pair_card, pair_option, placeholder_option};
use crate::client::{CatalogPayload, PairSource};
use crate::models::PairSummary;

/// Pairs currently rendered as cards, in display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PairCatalog {
    pairs: Vec<PairSummary>,
}

impl PairCatalog {
    pub fn new(pairs: Vec<PairSummary>) -> Self {
        Self { pairs }
    }

    pub fn get(&self, symbol: &str) -> Option<&PairSummary> {
        self.pairs.iter().find(|p| p.symbol == symbol)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Fetch `/data` and replace the cards (and dropdown, when bound).
///
/// Returns `None` when nothing was rendered; the page is then left exactly
/// as it was.
pub async fn load_catalog<D, S>(doc: &mut D, page: &PageBindings, source: &S) -> Option<PairCatalog>
where
    D: Document + ?Sized,
    S: PairSource + ?Sized,
{
    let payload = match source.fetch_pairs().await {
        Ok(payload) => payload,
        Err(e) => {
            error!("Error fetching data: {}", e);
            return None;
        }
    };
    debug!("Received data: {:?}", payload);

    let items = match payload {
        CatalogPayload::Pairs(items) => items,
        CatalogPayload::Error { error } => {
            error!("Error from server: {}", error);
            doc.alert(&format!("Error: {}", error));
            return None;
        }
        CatalogPayload::Other(value) => {
            error!("Expected pairs to be an array, but got: {}", value);
            return None;
        }
    };

    let total = items.len();
    let pairs: Vec<PairSummary> = items
        .into_iter()
        .enumerate()
        .filter_map(|(idx, item)| match serde_json::from_value::<PairSummary>(item) {
            Ok(pair) => Some(pair),
            Err(e) => {
                warn!("Skipping malformed pair #{}: {}", idx, e);
                None
            }
        })
        .collect();
    if pairs.len() < total {
        warn!("Dropped {} of {} pairs", total - pairs.len(), total);
    }

    page.pairs_container.replace(doc, String::new());
    if let Some(select) = &page.pair_options {
        select.replace(doc, placeholder_option());
    }

    for pair in &pairs {
        page.pairs_container.append(doc, pair_card(pair));
        if let Some(select) = &page.pair_options {
            select.append(doc, pair_option(&pair.symbol));
        }
    }

    info!("Rendered {} pairs", pairs.len());
    Some(PairCatalog::new(pairs))
}

/// Change handler of the pair dropdown: reads the selected symbol from the
/// page. Returns the pair that was applied, if any.
pub fn on_pair_change<'a, D>(
    doc: &mut D,
    page: &PageBindings,
    catalog: &'a PairCatalog,
) -> Option<&'a PairSummary>
where
    D: Document + ?Sized,
{
    let select = page.pair_select?;
    let symbol = select.read(doc);
    let pair = catalog.get(&symbol)?;

    let price = fmt_num(pair.current_price);
    page.form.current_price.write(doc, &price);
    page.form.entry_price.write(doc, &price);
    page.form.leverage.clear(doc);
    page.form.position_size.clear(doc);
    page.form.risk_percent.clear(doc);

    info!(
        "Selected pair {}: price {} volume {} change {}% spread {}% volatility {}% high {} low {}",
        pair.symbol,
        price,
        pair.volume,
        pair.price_change_24h,
        pair.spread,
        pair.volatility,
        pair.high_price,
        pair.low_price
    );
    Some(pair)
}

/// Pick `symbol` in the dropdown and fire its change handler.
pub fn select_pair<'a, D>(
    doc: &mut D,
    page: &PageBindings,
    catalog: &'a PairCatalog,
    symbol: &str,
) -> Option<&'a PairSummary>
where
    D: Document + ?Sized,
{
    let select = page.pair_select?;
    select.write(doc, symbol);
    on_pair_change(doc, page, catalog)
}
