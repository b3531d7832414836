pub mod pool;
pub mod sanitize;
