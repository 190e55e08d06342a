use super::domain::{MonthlySeries, PaymentCategory, PaymentStatus};
use serde_json::{Map, Value};

/// Origin label whose share of all acquisitions is the recommendation rate.
pub const REFERRAL_ORIGIN: &str = "Referral";

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("uploaded bytes are not valid UTF-8 text: {0}")]
    Decode(#[from] std::str::Utf8Error),
    #[error("uploaded text is not a JSON object: {0}")]
    Parse(#[from] serde_json::Error),
}

/// All metrics of one uploaded snapshot, immutable once constructed. Every
/// field is optional in the document; absent or wrong-shaped values resolve
/// to zero / empty, so a record always exists after a successful parse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsRecord {
    pub occupied_units: u64,
    pub free_units: u64,
    pub avg_contract_months: f64,
    pub auto_reminders_sent: u64,
    pub social_facebook_followers: u64,
    pub social_google_reviews: u64,
    pub occupancy_rate_percent: f64,
    /// Origin label and acquisition count, in document order.
    pub customer_origin: Vec<(String, u64)>,
    pub new_customers: MonthlySeries,
    pub payment_status: PaymentStatus,
}

impl MetricsRecord {
    /// Ingest one uploaded file: UTF-8 decode, then parse as a JSON object.
    /// The top level must be an object; any other valid JSON is a parse
    /// failure, since none of the recognized keys could exist on it.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, IngestError> {
        let text = std::str::from_utf8(bytes)?;
        let object: Map<String, Value> = serde_json::from_str(text)?;
        Ok(Self::from_object(&object))
    }

    pub fn from_object(object: &Map<String, Value>) -> Self {
        Self {
            occupied_units: count_field(object, "occupied_units"),
            free_units: count_field(object, "free_units"),
            avg_contract_months: decimal_field(object, "avg_contract_months"),
            auto_reminders_sent: count_field(object, "auto_reminders_sent"),
            social_facebook_followers: count_field(object, "social_facebook_followers"),
            social_google_reviews: count_field(object, "social_google_reviews"),
            occupancy_rate_percent: decimal_field(object, "occupancy_rate_percent"),
            customer_origin: origin_field(object, "customer_origin"),
            new_customers: series_field(object, "new_customers_per_month"),
            payment_status: payment_field(object, "payment_status"),
        }
    }

    /// Share of acquisitions attributed to referrals, rounded to one decimal
    /// place. The denominator floor keeps an empty mapping at 0.0 instead of
    /// a division by zero.
    pub fn recommendation_rate_percent(&self) -> f64 {
        let referrals = self
            .customer_origin
            .iter()
            .find(|(label, _)| label.as_str() == REFERRAL_ORIGIN)
            .map(|(_, count)| *count)
            .unwrap_or(0);
        let total: u64 = self.customer_origin.iter().map(|(_, count)| *count).sum();
        round_to_tenth(100.0 * referrals as f64 / total.max(1) as f64)
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// Typed accessors carrying the coercion policy: a missing key and a
// wrong-shaped value both resolve to the documented default.

fn count_field(object: &Map<String, Value>, key: &str) -> u64 {
    object.get(key).and_then(Value::as_u64).unwrap_or(0)
}

fn decimal_field(object: &Map<String, Value>, key: &str) -> f64 {
    object.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

fn origin_field(object: &Map<String, Value>, key: &str) -> Vec<(String, u64)> {
    match object.get(key).and_then(Value::as_object) {
        Some(mapping) => mapping
            .iter()
            .map(|(label, count)| (label.clone(), count.as_u64().unwrap_or(0)))
            .collect(),
        None => Vec::new(),
    }
}

fn series_field(object: &Map<String, Value>, key: &str) -> MonthlySeries {
    let Some(mapping) = object.get(key).and_then(Value::as_object) else {
        return MonthlySeries::default();
    };

    let labels = mapping
        .get("labels")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .map(|item| item.as_str().unwrap_or_default().to_string())
                .collect()
        })
        .unwrap_or_default();

    let counts = mapping
        .get("counts")
        .and_then(Value::as_array)
        .map(|items| items.iter().map(|item| item.as_u64().unwrap_or(0)).collect())
        .unwrap_or_default();

    MonthlySeries { labels, counts }
}

fn payment_field(object: &Map<String, Value>, key: &str) -> PaymentStatus {
    match object.get(key).and_then(Value::as_object) {
        Some(mapping) => PaymentStatus {
            paid: count_field(mapping, PaymentCategory::Paid.key()),
            open: count_field(mapping, PaymentCategory::Open.key()),
            overdue: count_field(mapping, PaymentCategory::Overdue.key()),
        },
        None => PaymentStatus::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_from(json: &str) -> MetricsRecord {
        MetricsRecord::from_bytes(json.as_bytes()).expect("snapshot ingests")
    }

    #[test]
    fn empty_object_resolves_every_field_to_its_default() {
        let record = record_from("{}");
        assert_eq!(record, MetricsRecord::default());
        assert_eq!(record.recommendation_rate_percent(), 0.0);
    }

    #[test]
    fn recognized_fields_are_extracted() {
        let record = record_from(
            r#"{
                "occupied_units": 80,
                "free_units": 20,
                "avg_contract_months": 14.25,
                "auto_reminders_sent": 37,
                "social_facebook_followers": 1200,
                "social_google_reviews": 89,
                "occupancy_rate_percent": 80.0,
                "customer_origin": {"Referral": 3, "Walk-in": 7},
                "new_customers_per_month": {"labels": ["Jan", "Feb", "Mar"], "counts": [5, 9, 2]},
                "payment_status": {"paid": 41, "open": 6, "overdue": 2}
            }"#,
        );

        assert_eq!(record.occupied_units, 80);
        assert_eq!(record.free_units, 20);
        assert_eq!(record.avg_contract_months, 14.25);
        assert_eq!(record.auto_reminders_sent, 37);
        assert_eq!(record.social_facebook_followers, 1200);
        assert_eq!(record.social_google_reviews, 89);
        assert_eq!(record.occupancy_rate_percent, 80.0);
        assert_eq!(record.new_customers.labels, vec!["Jan", "Feb", "Mar"]);
        assert_eq!(record.new_customers.counts, vec![5, 9, 2]);
        assert_eq!(record.payment_status.paid, 41);
        assert_eq!(record.payment_status.open, 6);
        assert_eq!(record.payment_status.overdue, 2);
    }

    #[test]
    fn recommendation_rate_uses_referral_share() {
        let record = record_from(r#"{"customer_origin": {"Referral": 3, "Walk-in": 7}}"#);
        assert_eq!(record.recommendation_rate_percent(), 30.0);
    }

    #[test]
    fn recommendation_rate_of_empty_mapping_is_zero() {
        let record = record_from(r#"{"customer_origin": {}}"#);
        assert_eq!(record.recommendation_rate_percent(), 0.0);
    }

    #[test]
    fn recommendation_rate_rounds_to_one_decimal() {
        let record = record_from(r#"{"customer_origin": {"Referral": 1, "Google": 2}}"#);
        assert_eq!(record.recommendation_rate_percent(), 33.3);
    }

    #[test]
    fn customer_origin_keeps_document_order() {
        let record = record_from(
            r#"{"customer_origin": {"Walk-in": 7, "Referral": 3, "Google": 12, "Anzeige": 1}}"#,
        );
        let labels: Vec<&str> = record
            .customer_origin
            .iter()
            .map(|(label, _)| label.as_str())
            .collect();
        assert_eq!(labels, vec!["Walk-in", "Referral", "Google", "Anzeige"]);
    }

    #[test]
    fn wrong_shaped_values_fall_back_to_defaults() {
        let record = record_from(
            r#"{
                "occupied_units": "many",
                "free_units": -4,
                "avg_contract_months": "long",
                "customer_origin": ["Referral"],
                "new_customers_per_month": {"labels": "Jan", "counts": [5, "neun"]},
                "payment_status": {"paid": 41.5, "open": "6"}
            }"#,
        );

        assert_eq!(record.occupied_units, 0);
        assert_eq!(record.free_units, 0);
        assert_eq!(record.avg_contract_months, 0.0);
        assert!(record.customer_origin.is_empty());
        assert!(record.new_customers.labels.is_empty());
        assert_eq!(record.new_customers.counts, vec![5, 0]);
        assert_eq!(record.payment_status, PaymentStatus::default());
    }

    #[test]
    fn invalid_utf8_fails_decode() {
        let error = MetricsRecord::from_bytes(&[0xff, 0xfe, b'{', b'}'])
            .expect_err("invalid utf-8 rejected");
        assert!(matches!(error, IngestError::Decode(_)));
        assert!(error.to_string().contains("UTF-8"));
    }

    #[test]
    fn invalid_json_fails_parse_with_detail() {
        let error = MetricsRecord::from_bytes(b"{not json").expect_err("invalid json rejected");
        let IngestError::Parse(source) = &error else {
            panic!("expected parse error, got {error:?}");
        };
        assert!(!source.to_string().is_empty());
    }

    #[test]
    fn valid_json_that_is_not_an_object_fails_parse() {
        let error = MetricsRecord::from_bytes(b"[1, 2, 3]").expect_err("array rejected");
        assert!(matches!(error, IngestError::Parse(_)));

        let error = MetricsRecord::from_bytes(b"42").expect_err("scalar rejected");
        assert!(matches!(error, IngestError::Parse(_)));
    }
}
