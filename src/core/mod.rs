pub mod pairs;
pub mod quick_levels;
pub mod risk;
pub mod suggestion;
