pub mod dynamic_query;
pub use dynamic_query::*;
