//! The valuation engine: NIL values, budget caps, negotiation,
//! NBA comparables, and the coaching job market.
//!
//! Everything in here is a pure function over the domain model in
//! [`types`]; the storage layer supplies reference data, the commands
//! wire the two together.

pub mod budget;
pub mod comps;
pub mod jobs;
pub mod negotiation;
pub mod nil;
pub mod types;
