// ============================================================================
// Domain Module
// Configuration consumed by the formatting and quoting layers
// ============================================================================

pub mod config;

pub use config::{DisplayConfig, QuoteConfig, MAX_BASIS_POINTS};
