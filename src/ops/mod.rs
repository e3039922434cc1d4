pub mod project;
pub mod sort;
pub mod timeframe;
