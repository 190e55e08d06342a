use super::domain::PaymentCategory;
use serde::Serialize;

/// A labeled single-number display widget.
#[derive(Debug, Clone, Serialize)]
pub struct KpiTile {
    pub label: &'static str,
    pub value: String,
}

/// Raw unit counts behind the occupancy donut; the chart shows both the
/// counts and their percentage shares.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OccupancySplit {
    pub occupied: u64,
    pub free: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewCustomerEntry {
    pub month: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaymentStatusEntry {
    pub category: PaymentCategory,
    pub category_label: &'static str,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct OriginShare {
    pub origin: String,
    pub count: u64,
}

/// Everything one render cycle displays, computed once from the record.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub kpi_row_one: Vec<KpiTile>,
    pub kpi_row_two: Vec<KpiTile>,
    pub recommendation_rate_percent: f64,
    pub occupancy: OccupancySplit,
    pub new_customers: Vec<NewCustomerEntry>,
    pub payment_status: Vec<PaymentStatusEntry>,
    pub customer_origin: Vec<OriginShare>,
}
