use tracing::{debug, error, info};

use super::bindings::PageBindings;
use super::document::Document;
use super::render::{result_panel, CALCULATION_HEADING, SUGGESTION_HEADING};
use super::validate::{validate, RawForm, INVALID_INPUT_ALERT};
use crate::client::{CalculationBackend, PipelineError};
use crate::core::quick_levels::QuickLevels;
use crate::core::suggestion::SuggestionPolicy;
use crate::models::TradeResult;

/// How far a form submission got.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// A field failed validation; nothing was sent.
    Rejected,
    /// The primary calculation failed; neither panel was touched.
    PrimaryFailed,
    /// The primary panel was rendered, the suggested calculation failed.
    SuggestionFailed { primary: TradeResult },
    Completed {
        primary: TradeResult,
        suggested: TradeResult,
    },
}

/// Handle a submit of the calculator form.
///
/// Both calculations run one after the other: the suggested request is only
/// sent once the primary answer has been rendered.
pub async fn submit<D, B, P>(
    doc: &mut D,
    page: &PageBindings,
    backend: &B,
    policy: &P,
) -> SubmitOutcome
where
    D: Document + ?Sized,
    B: CalculationBackend + ?Sized,
    P: SuggestionPolicy + ?Sized,
{
    let raw = RawForm::read(doc, &page.form);
    let input = match validate(&raw) {
        Ok(input) => input,
        Err(e) => {
            debug!("Rejected form: {}", e);
            doc.alert(INVALID_INPUT_ALERT);
            return SubmitOutcome::Rejected;
        }
    };

    if let Some(out) = &page.quick_levels {
        let levels = QuickLevels::estimate(&input);
        out.stop_loss.set(doc, &levels.stop_loss_text());
        out.take_profit.set(doc, &levels.take_profit_text());
    }

    let primary = match backend.compute_trade(&input).await {
        Ok(result) => result,
        Err(e) => {
            report(doc, "Error calculating", e);
            return SubmitOutcome::PrimaryFailed;
        }
    };
    page.calc_results.replace(
        doc,
        result_panel(CALCULATION_HEADING, &primary, input.trade_type()),
    );

    let suggested_input = policy.suggest(&input);
    info!(
        "Suggested risk {}% leverage {}x",
        suggested_input.risk_percent, suggested_input.leverage
    );

    let suggested = match backend.compute_trade(&suggested_input).await {
        Ok(result) => result,
        Err(e) => {
            report(doc, "Error fetching suggested values", e);
            return SubmitOutcome::SuggestionFailed { primary };
        }
    };
    page.advice_results.replace(
        doc,
        result_panel(SUGGESTION_HEADING, &suggested, suggested_input.trade_type()),
    );

    SubmitOutcome::Completed { primary, suggested }
}

/// Backend errors reach the user, transport errors only the log.
fn report<D: Document + ?Sized>(doc: &mut D, context: &str, err: PipelineError) {
    match err {
        PipelineError::Backend(message) => {
            error!("{}: {}", context, message);
            doc.alert(&format!("Error: {}", message));
        }
        PipelineError::Transport(message) => error!("{}: {}", context, message),
    }
}
