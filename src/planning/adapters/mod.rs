//! Adapter implementations for the planning repository ports.

pub mod memory;
pub mod postgres;
