use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day on a cost timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostPoint {
    pub date: NaiveDate,
    pub cost: f64,
}

/// Share of a period's spend attributed to one AWS service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceCost {
    pub service_name: String,
    pub cost: f64,
}

/// Share of a period's spend attributed to one account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountCost {
    pub account_id: String,
    pub account_name: String,
    pub cost: f64,
}

/// Totals and breakdowns for one reporting period.
///
/// `total_cost` is the sum over the aggregation window, which is not
/// necessarily the same span as `series` (the chart window rendered for the
/// period). `by_service` and `by_account` each sum to `total_cost`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodSummary {
    pub total_cost: f64,
    pub trend_percent: f64,
    pub series: Vec<CostPoint>,
    pub by_service: Vec<ServiceCost>,
    pub by_account: Vec<AccountCost>,
}

/// Full cost report for one account, across all three granularities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostReport {
    pub daily: PeriodSummary,
    pub weekly: PeriodSummary,
    pub monthly: PeriodSummary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
}

impl Period {
    pub fn from_id(id: &str) -> Option<Self> {
        match id.to_lowercase().as_str() {
            "daily" | "day" => Some(Self::Daily),
            "weekly" | "week" => Some(Self::Weekly),
            "monthly" | "month" => Some(Self::Monthly),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }

    /// Day count of the chart window rendered for this period.
    pub fn display_days(&self) -> u32 {
        match self {
            Self::Daily => 7,
            Self::Weekly => 14,
            Self::Monthly => 30,
        }
    }

    /// All periods in display order.
    pub fn all() -> &'static [Period] {
        &[Period::Daily, Period::Weekly, Period::Monthly]
    }
}

impl CostReport {
    pub fn period(&self, period: Period) -> &PeriodSummary {
        match period {
            Period::Daily => &self.daily,
            Period::Weekly => &self.weekly,
            Period::Monthly => &self.monthly,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_from_id_accepts_aliases() {
        assert_eq!(Period::from_id("daily"), Some(Period::Daily));
        assert_eq!(Period::from_id("WEEK"), Some(Period::Weekly));
        assert_eq!(Period::from_id("month"), Some(Period::Monthly));
        assert_eq!(Period::from_id("yearly"), None);
    }

    #[test]
    fn period_display_days() {
        assert_eq!(Period::Daily.display_days(), 7);
        assert_eq!(Period::Weekly.display_days(), 14);
        assert_eq!(Period::Monthly.display_days(), 30);
    }

    #[test]
    fn cost_point_serializes_date_as_iso() {
        let point = CostPoint {
            date: NaiveDate::from_ymd_opt(2026, 8, 15).unwrap(),
            cost: 1234.5,
        };
        let json = serde_json::to_string(&point).unwrap();
        assert!(json.contains("\"2026-08-15\""));
    }

    #[test]
    fn period_serializes_snake_case() {
        let json = serde_json::to_string(&Period::Weekly).unwrap();
        assert_eq!(json, "\"weekly\"");
    }
}
