pub mod health;
pub mod invalidate;
pub mod quotes;

pub use health::health_check;
pub use invalidate::invalidate_cache;
pub use quotes::{get_quote, update_quote};
