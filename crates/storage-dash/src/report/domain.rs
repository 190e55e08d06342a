use serde::Serialize;

/// The two slices of the occupancy donut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OccupancySegment {
    Occupied,
    Free,
}

impl OccupancySegment {
    pub const fn ordered() -> [Self; 2] {
        [Self::Occupied, Self::Free]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Occupied => "Belegt",
            Self::Free => "Frei",
        }
    }

    /// One saturated, one neutral color so the occupied share carries the eye.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Occupied => "royalblue",
            Self::Free => "lightgray",
        }
    }
}

/// Fixed billing categories of the payment-status bar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentCategory {
    Paid,
    Open,
    Overdue,
}

impl PaymentCategory {
    pub const fn ordered() -> [Self; 3] {
        [Self::Paid, Self::Open, Self::Overdue]
    }

    /// Key under the snapshot's `payment_status` object.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Open => "open",
            Self::Overdue => "overdue",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Paid => "Bezahlt",
            Self::Open => "Offen",
            Self::Overdue => "Überfällig",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::Paid => "seagreen",
            Self::Open => "gold",
            Self::Overdue => "crimson",
        }
    }
}

/// Month labels paired positionally with new-customer counts. The sequences
/// may arrive with unequal lengths; pairing stops at the shorter one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlySeries {
    pub labels: Vec<String>,
    pub counts: Vec<u64>,
}

impl MonthlySeries {
    pub fn len(&self) -> usize {
        self.labels.len().min(self.counts.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, u64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.counts.iter().copied())
    }
}

/// Invoice counts per payment category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaymentStatus {
    pub paid: u64,
    pub open: u64,
    pub overdue: u64,
}

impl PaymentStatus {
    pub const fn count(self, category: PaymentCategory) -> u64 {
        match category {
            PaymentCategory::Paid => self.paid,
            PaymentCategory::Open => self.open,
            PaymentCategory::Overdue => self.overdue,
        }
    }
}
