//! Scan gating domain: severity scale, scan document model, and the
//! pure evaluation services (resolver, aggregator, gate, row builder).

pub mod domain;
pub mod services;
