// ============================================================================
// Numeric Module
// Arbitrary-precision fixed-point arithmetic for token amounts and prices
// ============================================================================
//
// This module provides:
// - FixedDecimal<P>: BigInt magnitude + scale, with a compile-time scale policy
// - AutoPromote / StrictMatch: the two scale policies
// - NumericError: Error types for arithmetic operations
// - Amount / StrictAmount type aliases for common use cases
//
// Design principles:
// - No floating-point operations
// - All fallible arithmetic returns Result (no panics)
// - One rescale primitive; narrowing rounds half away from zero
// - Parsing truncates excess input digits, arithmetic rounds
// - The core never logs

mod errors;
mod fixed_decimal;
mod policy;
mod rounding;

pub use errors::{NumericError, NumericResult};
pub use fixed_decimal::{Amount, FixedDecimal, StrictAmount};
pub use policy::{AutoPromote, ScalePolicy, StrictMatch};
