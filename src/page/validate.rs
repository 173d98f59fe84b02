use thiserror::Error;

use super::bindings::FormInputs;
use super::document::Document;
use crate::models::TradeInput;

pub const INVALID_INPUT_ALERT: &str = "Please fill in all fields with valid values.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("field '{0}' is not a number")]
    NotNumeric(&'static str),
}

/// Raw text of the five calculator fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawForm {
    pub current_price: String,
    pub entry_price: String,
    pub leverage: String,
    pub position_size: String,
    pub risk_percent: String,
}

impl RawForm {
    pub fn read<D: Document + ?Sized>(doc: &D, form: &FormInputs) -> Self {
        Self {
            current_price: form.current_price.read(doc),
            entry_price: form.entry_price.read(doc),
            leverage: form.leverage.read(doc),
            position_size: form.position_size.read(doc),
            risk_percent: form.risk_percent.read(doc),
        }
    }
}

/// All five fields must hold a finite number. No range or sign checks.
pub fn validate(raw: &RawForm) -> Result<TradeInput, ValidationError> {
    Ok(TradeInput {
        current_price: parse_field("current_price", &raw.current_price)?,
        entry_price: parse_field("entry_price", &raw.entry_price)?,
        leverage: parse_field("leverage", &raw.leverage)?,
        position_size: parse_field("position_size", &raw.position_size)?,
        risk_percent: parse_field("risk_percent", &raw.risk_percent)?,
    })
}

fn parse_field(name: &'static str, raw: &str) -> Result<f64, ValidationError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(ValidationError::NotNumeric(name))
}
