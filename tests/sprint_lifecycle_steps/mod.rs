//! Step definitions for sprint lifecycle behaviour tests.

pub mod then;
pub mod when;
