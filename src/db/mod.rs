pub mod initialize;
pub mod log;
pub mod maintenance;
pub mod migrate;
pub mod pool;
pub mod queries;
