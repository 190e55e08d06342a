use super::domain::PaymentCategory;
use super::metrics::MetricsRecord;
use super::views::{
    DashboardSummary, KpiTile, NewCustomerEntry, OccupancySplit, OriginShare, PaymentStatusEntry,
};

impl MetricsRecord {
    /// Build the full set of display artifacts for one render cycle. Total
    /// over any record; values that need rounding are formatted here so the
    /// page and the JSON view agree.
    pub fn summary(&self) -> DashboardSummary {
        let recommendation_rate_percent = self.recommendation_rate_percent();

        let kpi_row_one = vec![
            KpiTile {
                label: "Belegte Einheiten",
                value: self.occupied_units.to_string(),
            },
            KpiTile {
                label: "Freie Einheiten",
                value: self.free_units.to_string(),
            },
            KpiTile {
                label: "Ø Vertragsdauer (Monate)",
                value: format!("{:.1}", self.avg_contract_months),
            },
            KpiTile {
                label: "Auto-Reminder gesendet",
                value: self.auto_reminders_sent.to_string(),
            },
        ];

        let kpi_row_two = vec![
            KpiTile {
                label: "Facebook-Follower",
                value: self.social_facebook_followers.to_string(),
            },
            KpiTile {
                label: "Google Reviews",
                value: self.social_google_reviews.to_string(),
            },
            KpiTile {
                label: "Ø Belegungsgrad (%)",
                value: self.occupancy_rate_percent.to_string(),
            },
            KpiTile {
                label: "Empfehlungsrate (%)",
                value: format!("{recommendation_rate_percent:.1}"),
            },
        ];

        let new_customers = self
            .new_customers
            .entries()
            .map(|(month, count)| NewCustomerEntry {
                month: month.to_string(),
                count,
            })
            .collect();

        let payment_status = PaymentCategory::ordered()
            .into_iter()
            .map(|category| PaymentStatusEntry {
                category,
                category_label: category.label(),
                count: self.payment_status.count(category),
            })
            .collect();

        let customer_origin = self
            .customer_origin
            .iter()
            .map(|(origin, count)| OriginShare {
                origin: origin.clone(),
                count: *count,
            })
            .collect();

        DashboardSummary {
            kpi_row_one,
            kpi_row_two,
            recommendation_rate_percent,
            occupancy: OccupancySplit {
                occupied: self.occupied_units,
                free: self.free_units,
            },
            new_customers,
            payment_status,
            customer_origin,
        }
    }
}
