pub mod coordinator;
pub mod expansion;
pub mod rows;
