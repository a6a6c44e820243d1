//! Synthetic cost data generation.
//!
//! Produces the same report shape a Cost Explorer backed source would:
//! a per-period timeline, total, trend, and proportional service/account
//! breakdowns normalized to sum to the period total. Randomness and the
//! reference date are injected so a seeded run is fully reproducible.

use chrono::{Datelike, Duration, NaiveDate};
use rand::prelude::*;

use crate::core::models::cost::{
    AccountCost, CostPoint, CostReport, PeriodSummary, ServiceCost,
};

/// Fixed service catalog; every report carries all six, however small the share.
pub const SERVICE_CATALOG: [&str; 6] = ["EC2", "S3", "Lambda", "RDS", "VPC", "CloudWatch"];

pub const DAILY_BASELINE: f64 = 1500.0;
pub const WEEKLY_BASELINE: f64 = 1200.0;
pub const MONTHLY_BASELINE: f64 = 1100.0;

/// Account identity used for the by-account breakdown.
#[derive(Debug, Clone)]
pub struct AccountRef {
    pub id: String,
    pub name: String,
}

impl AccountRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Services and accounts the synthesizer attributes cost to.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub services: Vec<String>,
    pub accounts: Vec<AccountRef>,
}

impl Default for Catalog {
    /// Demo directory used when no accounts are stored.
    fn default() -> Self {
        Self {
            services: SERVICE_CATALOG.iter().map(|s| s.to_string()).collect(),
            accounts: vec![
                AccountRef::new("123456789012", "Production"),
                AccountRef::new("234567890123", "Development"),
                AccountRef::new("345678901234", "Staging"),
                AccountRef::new("456789012345", "Analytics"),
            ],
        }
    }
}

impl Catalog {
    /// Standard service catalog over a caller-provided account directory.
    /// Falls back to the demo directory when the list is empty.
    pub fn with_accounts(accounts: Vec<AccountRef>) -> Self {
        if accounts.is_empty() {
            return Self::default();
        }
        Self {
            services: SERVICE_CATALOG.iter().map(|s| s.to_string()).collect(),
            accounts,
        }
    }
}

/// Totals and breakdowns derived from one aggregation window.
#[derive(Debug, Clone)]
pub struct Aggregates {
    pub total_cost: f64,
    pub trend_percent: f64,
    pub by_service: Vec<ServiceCost>,
    pub by_account: Vec<AccountCost>,
}

impl Aggregates {
    fn into_summary(self, series: Vec<CostPoint>) -> PeriodSummary {
        PeriodSummary {
            total_cost: self.total_cost,
            trend_percent: self.trend_percent,
            series,
            by_service: self.by_service,
            by_account: self.by_account,
        }
    }
}

pub struct Synthesizer<R: Rng> {
    rng: R,
    catalog: Catalog,
}

impl Synthesizer<StdRng> {
    pub fn from_entropy(catalog: Catalog) -> Self {
        Self::new(StdRng::from_entropy(), catalog)
    }

    pub fn seeded(seed: u64, catalog: Catalog) -> Self {
        Self::new(StdRng::seed_from_u64(seed), catalog)
    }
}

impl<R: Rng> Synthesizer<R> {
    pub fn new(rng: R, catalog: Catalog) -> Self {
        Self { rng, catalog }
    }

    /// Single uniform draw in [0, 1); every random value is derived from this
    /// one primitive so a constant-output rng yields a fully predictable run.
    fn unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Generate a `days`-long timeline ending at `today`, oldest first.
    ///
    /// Each cost is `baseline * (1 + u) * (1 + sin(i) * 0.1)` with `u` uniform
    /// in [0, 1); the sine modulation stays within ±10%, so costs are always
    /// strictly positive.
    pub fn series(&mut self, today: NaiveDate, days: u32, baseline: f64) -> Vec<CostPoint> {
        (0..days)
            .map(|i| {
                let date = today - Duration::days(i64::from(days - 1 - i));
                let cost =
                    baseline * (1.0 + self.unit()) * (1.0 + (f64::from(i)).sin() * 0.1);
                CostPoint { date, cost }
            })
            .collect()
    }

    /// Derive the period total, a trend percentage, and the two normalized
    /// breakdowns from an aggregation window.
    ///
    /// A zero-total window (empty series) yields all-zero shares rather than
    /// a division fault.
    pub fn aggregate(&mut self, series: &[CostPoint]) -> Aggregates {
        let total_cost: f64 = series.iter().map(|p| p.cost).sum();

        let services = self.catalog.services.clone();
        let mut by_service: Vec<ServiceCost> = services
            .into_iter()
            .map(|service_name| ServiceCost {
                cost: total_cost * (self.unit() * 0.2 + 0.05),
                service_name,
            })
            .collect();
        let raw_sum: f64 = by_service.iter().map(|s| s.cost).sum();
        if raw_sum > 0.0 {
            let scale = total_cost / raw_sum;
            for share in &mut by_service {
                share.cost *= scale;
            }
        } else {
            for share in &mut by_service {
                share.cost = 0.0;
            }
        }

        let accounts = self.catalog.accounts.clone();
        let mut by_account: Vec<AccountCost> = accounts
            .into_iter()
            .map(|account| AccountCost {
                cost: total_cost * (self.unit() * 0.3 + 0.1),
                account_id: account.id,
                account_name: account.name,
            })
            .collect();
        let raw_sum: f64 = by_account.iter().map(|a| a.cost).sum();
        if raw_sum > 0.0 {
            let scale = total_cost / raw_sum;
            for share in &mut by_account {
                share.cost *= scale;
            }
        } else {
            for share in &mut by_account {
                share.cost = 0.0;
            }
        }

        // Skewed positive: [-8, 12)
        let trend_percent = (self.unit() - 0.4) * 20.0;

        Aggregates {
            total_cost,
            trend_percent,
            by_service,
            by_account,
        }
    }

    /// Build a full three-period report for the given reference date.
    ///
    /// Per period, totals come from the aggregation window while the rendered
    /// series is a separately drawn display window (7/14/30 days). The two
    /// windows are independent draws and may disagree in length; this matches
    /// the observed dashboard behavior and is kept as-is.
    pub fn build_report(&mut self, today: NaiveDate) -> CostReport {
        // Daily: 1-day window for totals, 7-day chart.
        let window = self.series(today, 1, DAILY_BASELINE);
        let aggregates = self.aggregate(&window);
        let daily = aggregates.into_summary(self.series(today, 7, DAILY_BASELINE));

        // Weekly: start of week (Sunday) through today, 14-day chart.
        let days_in_week = today.weekday().num_days_from_sunday() + 1;
        let window = self.series(today, days_in_week, WEEKLY_BASELINE);
        let aggregates = self.aggregate(&window);
        let weekly = aggregates.into_summary(self.series(today, 14, WEEKLY_BASELINE));

        // Monthly: the 1st through today, 30-day chart.
        let days_in_month = today.day();
        let window = self.series(today, days_in_month, MONTHLY_BASELINE);
        let aggregates = self.aggregate(&window);
        let monthly = aggregates.into_summary(self.series(today, 30, MONTHLY_BASELINE));

        CostReport {
            daily,
            weekly,
            monthly,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;

    /// Rng whose every uniform draw is exactly 0.5 (rand maps the top 53 bits
    /// of `1 << 63` to 0.5).
    struct HalfRng;

    impl RngCore for HalfRng {
        fn next_u32(&mut self) -> u32 {
            1 << 31
        }

        fn next_u64(&mut self) -> u64 {
            1 << 63
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 15).unwrap()
    }

    fn seeded() -> Synthesizer<StdRng> {
        Synthesizer::seeded(42, Catalog::default())
    }

    #[test]
    fn half_rng_draws_exactly_half() {
        let mut synth = Synthesizer::new(HalfRng, Catalog::default());
        assert_eq!(synth.unit(), 0.5);
    }

    #[test]
    fn series_has_requested_length_and_ascending_dates() {
        let mut synth = seeded();
        for days in [1u32, 7, 14, 30, 365] {
            let series = synth.series(today(), days, 1500.0);
            assert_eq!(series.len(), days as usize);
            for pair in series.windows(2) {
                assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
            }
            assert_eq!(series.last().unwrap().date, today());
        }
    }

    #[test]
    fn series_costs_are_strictly_positive() {
        let mut synth = seeded();
        let series = synth.series(today(), 365, 0.01);
        assert!(series.iter().all(|p| p.cost > 0.0));
    }

    #[test]
    fn series_sine_modulation_is_bounded() {
        // With every uniform at 0.5 the random factor is constant, so the
        // remaining variation is the sine term alone.
        let mut synth = Synthesizer::new(HalfRng, Catalog::default());
        let series = synth.series(today(), 30, 1000.0);
        for (i, point) in series.iter().enumerate() {
            let expected = 1000.0 * 1.5 * (1.0 + (i as f64).sin() * 0.1);
            assert!((point.cost - expected).abs() < 1e-9);
            assert!(point.cost >= 1000.0 * 1.5 * 0.9 - 1e-9);
            assert!(point.cost <= 1000.0 * 1.5 * 1.1 + 1e-9);
        }
    }

    #[test]
    fn breakdowns_sum_to_total() {
        let mut synth = seeded();
        let series = synth.series(today(), 30, 1100.0);
        let aggregates = synth.aggregate(&series);

        let expected: f64 = series.iter().map(|p| p.cost).sum();
        assert!((aggregates.total_cost - expected).abs() < 1e-9);

        let service_sum: f64 = aggregates.by_service.iter().map(|s| s.cost).sum();
        assert!((service_sum - aggregates.total_cost).abs() / aggregates.total_cost < 1e-9);

        let account_sum: f64 = aggregates.by_account.iter().map(|a| a.cost).sum();
        assert!((account_sum - aggregates.total_cost).abs() / aggregates.total_cost < 1e-9);
    }

    #[test]
    fn service_catalog_is_exhaustive() {
        let mut synth = seeded();
        let series = synth.series(today(), 7, 1500.0);
        let aggregates = synth.aggregate(&series);

        let mut names: Vec<&str> = aggregates
            .by_service
            .iter()
            .map(|s| s.service_name.as_str())
            .collect();
        names.sort_unstable();
        let mut expected: Vec<&str> = SERVICE_CATALOG.to_vec();
        expected.sort_unstable();
        assert_eq!(names, expected);
    }

    #[test]
    fn empty_series_yields_zero_shares_without_fault() {
        let mut synth = seeded();
        let aggregates = synth.aggregate(&[]);
        assert_eq!(aggregates.total_cost, 0.0);
        assert!(aggregates.by_service.iter().all(|s| s.cost == 0.0));
        assert!(aggregates.by_account.iter().all(|a| a.cost == 0.0));
        assert_eq!(aggregates.by_service.len(), SERVICE_CATALOG.len());
    }

    #[test]
    fn zero_cost_series_yields_zero_shares() {
        let mut synth = seeded();
        let series = vec![
            CostPoint {
                date: today(),
                cost: 0.0,
            };
            5
        ];
        let aggregates = synth.aggregate(&series);
        assert_eq!(aggregates.total_cost, 0.0);
        assert!(aggregates.by_service.iter().all(|s| s.cost == 0.0));
        assert!(aggregates.by_account.iter().all(|a| a.cost == 0.0));
    }

    #[test]
    fn trend_stays_within_range() {
        let mut synth = seeded();
        let series = synth.series(today(), 7, 1500.0);
        for _ in 0..200 {
            let aggregates = synth.aggregate(&series);
            assert!(aggregates.trend_percent >= -8.0);
            assert!(aggregates.trend_percent < 12.0);
        }
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let date = today();
        let a = Synthesizer::seeded(7, Catalog::default()).build_report(date);
        let b = Synthesizer::seeded(7, Catalog::default()).build_report(date);
        assert_eq!(a.daily.total_cost, b.daily.total_cost);
        assert_eq!(a.weekly.trend_percent, b.weekly.trend_percent);
        assert_eq!(a.monthly.series, b.monthly.series);
    }

    #[test]
    fn report_display_windows_are_fixed() {
        let mut synth = seeded();
        // 2026-08-15 is a Saturday; the weekly aggregation window is a full
        // 7 days and the monthly one 15, neither of which leaks into the
        // display series lengths.
        let report = synth.build_report(today());
        assert_eq!(report.daily.series.len(), 7);
        assert_eq!(report.weekly.series.len(), 14);
        assert_eq!(report.monthly.series.len(), 30);
    }

    #[test]
    fn report_display_windows_fixed_on_month_boundary() {
        let mut synth = seeded();
        let first = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        let report = synth.build_report(first);
        assert_eq!(report.daily.series.len(), 7);
        assert_eq!(report.weekly.series.len(), 14);
        assert_eq!(report.monthly.series.len(), 30);
    }

    #[test]
    fn daily_total_comes_from_one_day_window() {
        // Constant rng: the 1-day aggregation window has a single point of
        // 1500 * 1.5 = 2250, while the displayed chart still spans 7 days.
        let mut synth = Synthesizer::new(HalfRng, Catalog::default());
        let report = synth.build_report(today());
        assert!((report.daily.total_cost - 2250.0).abs() < 1e-9);
        assert_eq!(report.daily.series.len(), 7);
    }

    #[test]
    fn all_half_draws_split_services_evenly() {
        let mut synth = Synthesizer::new(HalfRng, Catalog::default());
        let series = synth.series(today(), 1, 1500.0);
        assert_eq!(series.len(), 1);
        assert!((series[0].cost - 2250.0).abs() < 1e-9);

        let aggregates = synth.aggregate(&series);
        assert!((aggregates.total_cost - 2250.0).abs() < 1e-9);
        // Each raw weight is 2250 * 0.15 = 337.5; normalization rescales all
        // six to an even 375.
        for share in &aggregates.by_service {
            assert!((share.cost - 375.0).abs() < 1e-9);
        }
        // Account weights are 2250 * 0.25 = 562.5 across four accounts,
        // already summing to the total.
        for share in &aggregates.by_account {
            assert!((share.cost - 562.5).abs() < 1e-9);
        }
        assert!((aggregates.trend_percent - 2.0).abs() < 1e-9);
    }

    #[test]
    fn custom_catalog_is_respected() {
        let catalog = Catalog {
            services: vec!["EC2".to_string(), "S3".to_string()],
            accounts: vec![AccountRef::new("999999999999", "Sandbox")],
        };
        let mut synth = Synthesizer::new(StdRng::seed_from_u64(3), catalog);
        let series = synth.series(today(), 3, 500.0);
        let aggregates = synth.aggregate(&series);
        assert_eq!(aggregates.by_service.len(), 2);
        assert_eq!(aggregates.by_account.len(), 1);
        assert_eq!(aggregates.by_account[0].account_name, "Sandbox");
        // A single account absorbs the whole total after normalization.
        assert!((aggregates.by_account[0].cost - aggregates.total_cost).abs() < 1e-9);
    }

    #[test]
    fn empty_account_directory_falls_back_to_demo() {
        let catalog = Catalog::with_accounts(Vec::new());
        assert_eq!(catalog.accounts.len(), 4);
        assert_eq!(catalog.accounts[0].name, "Production");
    }
}
