pub mod item;
pub mod timeframe;
pub mod config;

pub use item::*;
pub use timeframe::*;
pub use config::*;
