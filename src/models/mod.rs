pub mod candle;
pub mod direction;
pub mod pair;
pub mod timeframe;
pub mod trade;

pub use candle::Candle;
pub use direction::TradeType;
pub use pair::{PairSummary, Ticker24h};
pub use timeframe::Timeframe;
pub use trade::{ErrorBody, TradeInput, TradeResult};
