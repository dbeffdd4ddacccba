//! Fluent configuration for comparators
//!
//! [`Config::builder`] collects a locale source, a collation strength and
//! optional symbol overrides, and validates them once up front.

mod config;

pub use config::{Config, ConfigBuilder, LocaleSource};
