//! Shared utilities.

/// Frame clock replacing global delta-time bookkeeping.
pub mod frame_timing;

pub use frame_timing::FrameClock;
