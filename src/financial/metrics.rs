//! Derived financial metrics: ROI, payback period and NPV.
//!
//! Undefined cases are represented in the types. A zero investment yields
//! `Roi::Undefined`, a non-positive net monthly benefit yields
//! `Payback::Never` — neither is ever coerced to a misleading number.

use serde::{Deserialize, Serialize};

/// Return on investment over the analysis horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Roi {
    Percent(f64),
    /// Total investment was zero; a percentage return is meaningless.
    Undefined,
}

impl Roi {
    pub fn as_percent(&self) -> Option<f64> {
        match self {
            Roi::Percent(p) => Some(*p),
            Roi::Undefined => None,
        }
    }
}

impl std::fmt::Display for Roi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Roi::Percent(p) => write!(f, "{p:.1}%"),
            Roi::Undefined => write!(f, "undefined (zero investment)"),
        }
    }
}

/// Time to recover the initial investment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Payback {
    Months(f64),
    /// Net monthly benefit is zero or negative; the investment is never
    /// recovered. Not a clamped 36 months -- genuinely never.
    Never,
}

impl Payback {
    pub fn is_never(&self) -> bool {
        matches!(self, Payback::Never)
    }

    pub fn months(&self) -> Option<f64> {
        match self {
            Payback::Months(m) => Some(*m),
            Payback::Never => None,
        }
    }

    /// Numeric view for aggregation: `Never` contributes the analysis
    /// horizon bound. Used by the tornado ranking, which needs a number for
    /// every sweep point.
    pub fn months_or(&self, horizon_months: f64) -> f64 {
        match self {
            Payback::Months(m) => m.min(horizon_months),
            Payback::Never => horizon_months,
        }
    }

    /// True when the investment is not recovered inside the horizon, either
    /// because it never is or because the true payback lies beyond it.
    /// Anywhere `months_or` flattened the value to the bound, this is true.
    pub fn exceeds_horizon(&self, horizon_months: f64) -> bool {
        match self {
            Payback::Months(m) => *m > horizon_months,
            Payback::Never => true,
        }
    }
}

impl std::fmt::Display for Payback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Payback::Months(m) => write!(f, "{m:.1} months"),
            Payback::Never => write!(f, "never"),
        }
    }
}

/// ROI percentage per the horizon totals.
///
/// `baseline_total` is what the incumbent would have cost over the same
/// horizon; the spread between it and the investment is part of the return.
pub fn roi(total_benefit: f64, baseline_total: f64, total_investment: f64) -> Roi {
    if total_investment == 0.0 {
        return Roi::Undefined;
    }
    let net = total_benefit + baseline_total - total_investment;
    Roi::Percent(100.0 * net / total_investment)
}

/// Months to recover `initial_investment` at `net_monthly_benefit`.
pub fn payback(initial_investment: f64, net_monthly_benefit: f64) -> Payback {
    if net_monthly_benefit <= 0.0 {
        return Payback::Never;
    }
    if initial_investment <= 0.0 {
        // Nothing to recover: paid back immediately.
        return Payback::Months(0.0);
    }
    Payback::Months(initial_investment / net_monthly_benefit)
}

/// Net present value of the yearly net flows at `discount_rate`, with the
/// initial investment paid up front.
pub fn npv(discount_rate: f64, initial_investment: f64, net_annual_flows: &[f64]) -> f64 {
    let discounted: f64 = net_annual_flows
        .iter()
        .enumerate()
        .map(|(i, flow)| flow / (1.0 + discount_rate).powi(i as i32 + 1))
        .sum();
    discounted - initial_investment
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_investment_roi_is_undefined() {
        assert_eq!(roi(100_000.0, 450_000.0, 0.0), Roi::Undefined);
    }

    #[test]
    fn roi_matches_hand_computation() {
        // benefits 300K + baseline 450K - investment 250K = 500K over 250K
        let r = roi(300_000.0, 450_000.0, 250_000.0);
        assert_eq!(r, Roi::Percent(200.0));
    }

    #[test]
    fn non_positive_net_benefit_is_never_not_a_clamp() {
        assert_eq!(payback(25_000.0, 0.0), Payback::Never);
        assert_eq!(payback(25_000.0, -5_000.0), Payback::Never);
    }

    #[test]
    fn payback_shrinks_as_net_benefit_grows() {
        let slow = payback(24_000.0, 1_000.0).months().unwrap();
        let fast = payback(24_000.0, 8_000.0).months().unwrap();
        assert!(fast < slow);
        assert_eq!(fast, 3.0);
    }

    #[test]
    fn zero_initial_investment_pays_back_immediately() {
        assert_eq!(payback(0.0, 5_000.0), Payback::Months(0.0));
    }

    #[test]
    fn never_uses_horizon_bound_for_aggregation() {
        assert_eq!(Payback::Never.months_or(36.0), 36.0);
        assert_eq!(Payback::Months(4.0).months_or(36.0), 4.0);
        assert_eq!(Payback::Months(90.0).months_or(36.0), 36.0);
    }

    #[test]
    fn exceeds_horizon_tracks_every_bounded_case() {
        assert!(Payback::Never.exceeds_horizon(36.0));
        assert!(Payback::Months(90.0).exceeds_horizon(36.0));
        assert!(!Payback::Months(36.0).exceeds_horizon(36.0));
        assert!(!Payback::Months(4.0).exceeds_horizon(36.0));
    }

    #[test]
    fn npv_discounts_later_years_more() {
        let flat = npv(0.0, 100.0, &[60.0, 60.0]);
        let discounted = npv(0.10, 100.0, &[60.0, 60.0]);
        assert!((flat - 20.0).abs() < 1e-9);
        assert!(discounted < flat);
        assert!(discounted > 0.0);
    }
}
