//! Unit tests for the planning module.

mod support;
