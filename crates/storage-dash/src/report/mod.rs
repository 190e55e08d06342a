//! One render cycle of the dashboard: ingest the uploaded snapshot into an
//! immutable [`MetricsRecord`], derive the recommendation rate, and build the
//! KPI tiles, chart figures, and page markup. Ingest is the only fallible
//! step; everything downstream is a total function over the defaulted record.

pub mod charts;
pub mod domain;
mod metrics;
pub mod page;
mod summary;
pub mod views;

pub use metrics::{IngestError, MetricsRecord, REFERRAL_ORIGIN};
