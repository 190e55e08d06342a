//! Self-storage business dashboard.
//!
//! One uploaded JSON snapshot in, one rendered dashboard out: the [`report`]
//! module ingests the snapshot into an immutable metrics record, derives the
//! recommendation rate, and builds the KPI tiles, charts, and page markup for
//! a single stateless render cycle.

pub mod config;
pub mod error;
pub mod report;
pub mod telemetry;
