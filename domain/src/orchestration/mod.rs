//! Dual-tier orchestration domain
//!
//! Values produced and consumed by one chat turn.

pub mod value_objects;
