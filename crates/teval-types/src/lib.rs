pub mod metrics;
pub mod query;
pub mod record;
pub mod report;

pub use metrics::*;
pub use query::*;
pub use record::*;
pub use report::*;
