//! Order management domain services.

mod pricing_policy;

pub use pricing_policy::{PricedLine, PricingPolicy};
