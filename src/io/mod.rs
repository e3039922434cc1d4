pub mod config_io;
pub mod item_io;
pub mod state;
