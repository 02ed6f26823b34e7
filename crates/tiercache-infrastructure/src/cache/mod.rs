//! Cache construction and typed access
//!
//! Backend implementations live in tiercache-providers; this module turns a
//! connection string into one of them and wraps it for typed use.

pub mod factory;
pub mod provider;
pub mod url;

pub use factory::CacheFactory;
pub use provider::{NamespacedCache, SharedCache};
pub use url::parse_connection_string;
