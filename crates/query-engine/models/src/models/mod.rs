//! Request-side data: filter, order and projection trees, select requests and insert rows.

pub mod error;
pub mod order;
pub mod request;
pub mod scalar;
pub mod search;

// re-export without modules
pub use error::Error;
pub use order::*;
pub use request::*;
pub use scalar::ScalarValue;
pub use search::{Condition, EqualValue, Search, Where};
