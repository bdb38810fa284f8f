//! JSON and Markdown report writers.

use std::io::Write;

use super::{AnalysisReport, ReportWriter, SimulationReport, SweepReport};

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_json<T: serde::Serialize>(&mut self, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_analysis(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        self.write_json(report)
    }

    fn write_sweep(&mut self, report: &SweepReport) -> anyhow::Result<()> {
        self.write_json(report)
    }

    fn write_simulation(&mut self, report: &SimulationReport) -> anyhow::Result<()> {
        self.write_json(report)
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for MarkdownWriter<W> {
    fn write_analysis(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        self.write_header("NAC Vendor Analysis", report.generated_at)?;
        self.write_scenario(report)?;
        self.write_rankings(report)?;
        self.write_vendor_details(report)?;
        self.write_recommendation(report)?;
        Ok(())
    }

    fn write_sweep(&mut self, report: &SweepReport) -> anyhow::Result<()> {
        self.write_header("Payback Sensitivity", report.generated_at)?;
        writeln!(self.writer, "Vendor: {}", report.vendor_name)?;
        writeln!(self.writer)?;
        self.write_tornado(report)?;
        self.write_sweep_tables(report)?;
        Ok(())
    }

    fn write_simulation(&mut self, report: &SimulationReport) -> anyhow::Result<()> {
        self.write_header("Monte Carlo Simulation", report.generated_at)?;
        let s = &report.summary;
        writeln!(self.writer, "Vendor: {}", report.vendor_name)?;
        writeln!(
            self.writer,
            "Trials: {} (seed {})",
            s.trials, s.seed
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Payback (months) | Annual Net ($) |")?;
        writeln!(self.writer, "|--------|------------------|----------------|")?;
        let rows: [(&str, f64, f64); 6] = [
            ("Mean", s.payback_months.mean, s.annual_net.mean),
            ("Median", s.payback_months.median, s.annual_net.median),
            ("P10", s.payback_months.p10, s.annual_net.p10),
            ("P90", s.payback_months.p90, s.annual_net.p90),
            ("Min", s.payback_months.min, s.annual_net.min),
            ("Max", s.payback_months.max, s.annual_net.max),
        ];
        for (label, payback, net) in rows {
            writeln!(self.writer, "| {label} | {payback:.1} | {} |", money(net))?;
        }
        writeln!(self.writer)?;
        if s.never_count > 0 {
            writeln!(
                self.writer,
                "{} of {} trials never paid back within the {:.0}-month horizon.",
                s.never_count, s.trials, s.horizon_months
            )?;
        }
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(
        &mut self,
        title: &str,
        generated_at: chrono::DateTime<chrono::Utc>,
    ) -> anyhow::Result<()> {
        writeln!(self.writer, "# {title}")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_scenario(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let s = &report.scenario;
        writeln!(self.writer, "## Scenario")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Input | Value |")?;
        writeln!(self.writer, "|-------|-------|")?;
        writeln!(self.writer, "| Industry | {} |", report.industry_name)?;
        writeln!(self.writer, "| Devices | {} |", s.devices)?;
        writeln!(self.writer, "| Users | {} |", s.users)?;
        writeln!(self.writer, "| Horizon | {} years |", s.years)?;
        writeln!(self.writer, "| Breach risk | {:.0}% |", s.breach_risk_pct)?;
        writeln!(
            self.writer,
            "| Admin effort | {:.0} h/week |",
            s.admin_hours_per_week
        )?;
        writeln!(
            self.writer,
            "| Downtime cost | {}/hour |",
            money(s.downtime_cost_per_hour)
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_rankings(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Rankings")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Rank | Vendor | Composite | Cost | ROI | Coverage | Deployment |"
        )?;
        writeln!(
            self.writer,
            "|------|--------|-----------|------|-----|----------|------------|"
        )?;
        for (i, r) in report.comparison.rankings.iter().enumerate() {
            writeln!(
                self.writer,
                "| {} | {} | {:.1} | {:.0} | {:.0} | {:.0} | {:.0} |",
                i + 1,
                r.vendor_name,
                r.composite,
                r.cost_score,
                r.roi_score,
                r.coverage_score,
                r.deployment_score
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_vendor_details(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        for outcome in &report.outcomes {
            let f = &outcome.financial;
            writeln!(self.writer, "## {}", outcome.vendor_name)?;
            writeln!(self.writer)?;
            writeln!(self.writer, "| Metric | Value |")?;
            writeln!(self.writer, "|--------|-------|")?;
            writeln!(
                self.writer,
                "| Feature coverage | {:.1}% ({}/{} full) |",
                outcome.coverage.overall, outcome.coverage.full_count, outcome.coverage.feature_count
            )?;
            if let Some(avg) = outcome.compliance.average {
                writeln!(self.writer, "| Compliance average | {avg:.1}% |")?;
            }
            writeln!(
                self.writer,
                "| Risk reduction | {} per year ({:.0}% of exposure) |",
                money(outcome.risk.risk_reduction_value),
                outcome.risk.mitigation_pct
            )?;
            writeln!(self.writer, "| Total cost | {} |", money(f.total_cost()))?;
            writeln!(
                self.writer,
                "| Total benefit | {} |",
                money(f.total_benefit())
            )?;
            writeln!(self.writer, "| ROI | {} |", f.roi)?;
            writeln!(self.writer, "| Payback | {} |", f.payback)?;
            writeln!(self.writer, "| NPV | {} |", money(f.npv))?;
            writeln!(self.writer)?;

            for framework in &outcome.compliance.by_framework {
                writeln!(
                    self.writer,
                    "- {}: {:.1}%",
                    framework.framework_name, framework.score
                )?;
            }
            if !outcome.compliance.by_framework.is_empty() {
                writeln!(self.writer)?;
            }
        }
        Ok(())
    }

    fn write_recommendation(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let rec = &report.comparison.recommendation;
        writeln!(self.writer, "## Recommendation")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "**{}**", rec.vendor_name)?;
        writeln!(self.writer)?;
        for reason in &rec.reasons {
            writeln!(self.writer, "- {reason}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_tornado(&mut self, report: &SweepReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Tornado")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Variable | Best (months) | Worst (months) | Swing |"
        )?;
        writeln!(
            self.writer,
            "|----------|---------------|----------------|-------|"
        )?;
        for row in &report.tornado {
            let worst = if row.hit_horizon {
                format!(">{:.0} (horizon)", report.horizon_months)
            } else {
                format!("{:.1}", row.max_months)
            };
            writeln!(
                self.writer,
                "| {} | {:.1} | {} | {:.1} |",
                row.variable.label(),
                row.min_months,
                worst,
                row.impact
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_sweep_tables(&mut self, report: &SweepReport) -> anyhow::Result<()> {
        for sweep in &report.sweeps {
            writeln!(self.writer, "### {}", sweep.variable.label())?;
            writeln!(self.writer)?;
            writeln!(self.writer, "| Change | Value | Payback | Annual Net |")?;
            writeln!(self.writer, "|--------|-------|---------|------------|")?;
            for point in &sweep.points {
                writeln!(
                    self.writer,
                    "| {:+}% | {:.0} | {} | {} |",
                    point.change_pct,
                    point.value,
                    point.payback,
                    money(point.annual_net)
                )?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }
}

/// Dollar amount with thousands separators, rounded to whole dollars.
pub(crate) fn money(amount: f64) -> String {
    let negative = amount < 0.0;
    let whole = amount.abs().round() as u64;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}
