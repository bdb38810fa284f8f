//! Colored terminal report writer.

use colored::*;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

use super::output::money;
use super::{AnalysisReport, ReportWriter, SimulationReport, SweepReport};

pub struct TerminalWriter;

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalWriter {
    pub fn new() -> Self {
        Self
    }
}

impl ReportWriter for TerminalWriter {
    fn write_analysis(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        print_banner("NAC VENDOR ANALYSIS");
        println!(
            "Industry: {}   Devices: {}   Horizon: {} years",
            report.industry_name.bold(),
            report.scenario.devices,
            report.scenario.years
        );
        println!();

        let mut table = new_table(vec![
            "#", "Vendor", "Composite", "Cost", "ROI", "Coverage", "Deploy",
        ]);
        for (i, r) in report.comparison.rankings.iter().enumerate() {
            table.add_row(vec![
                (i + 1).to_string(),
                r.vendor_name.clone(),
                format!("{:.1}", r.composite),
                format!("{:.0}", r.cost_score),
                format!("{:.0}", r.roi_score),
                format!("{:.0}", r.coverage_score),
                format!("{:.0}", r.deployment_score),
            ]);
        }
        println!("{table}");
        println!();

        for outcome in &report.outcomes {
            let f = &outcome.financial;
            println!("{}", outcome.vendor_name.bold().cyan());
            println!(
                "  Coverage: {}   Risk reduction: {}/yr",
                colored_pct(outcome.coverage.overall),
                money(outcome.risk.risk_reduction_value).green()
            );
            println!(
                "  Cost: {}   Benefit: {}   NPV: {}",
                money(f.total_cost()).red(),
                money(f.total_benefit()).green(),
                money(f.npv)
            );
            println!("  ROI: {}   Payback: {}", f.roi, colored_payback(f));
            println!();
        }

        let rec = &report.comparison.recommendation;
        println!(
            "{} {}",
            "Recommended:".bold(),
            rec.vendor_name.bold().green()
        );
        for reason in &rec.reasons {
            println!("  - {reason}");
        }
        Ok(())
    }

    fn write_sweep(&mut self, report: &SweepReport) -> anyhow::Result<()> {
        print_banner("PAYBACK SENSITIVITY");
        println!("Vendor: {}", report.vendor_name.bold());
        println!();

        let mut table = new_table(vec!["Variable", "Best (mo)", "Worst (mo)", "Swing"]);
        for row in &report.tornado {
            let worst = if row.hit_horizon {
                format!(">{:.0}", report.horizon_months)
            } else {
                format!("{:.1}", row.max_months)
            };
            table.add_row(vec![
                row.variable.label().to_string(),
                format!("{:.1}", row.min_months),
                worst,
                format!("{:.1}", row.impact),
            ]);
        }
        println!("{table}");

        if let Some(top) = report.tornado.first() {
            println!();
            println!(
                "{} {} drives a {:.1}-month payback swing.",
                "Most sensitive:".bold(),
                top.variable.label().yellow(),
                top.impact
            );
        }
        Ok(())
    }

    fn write_simulation(&mut self, report: &SimulationReport) -> anyhow::Result<()> {
        print_banner("MONTE CARLO SIMULATION");
        let s = &report.summary;
        println!(
            "Vendor: {}   Trials: {}   Seed: {}",
            report.vendor_name.bold(),
            s.trials,
            s.seed
        );
        println!();

        let mut table = new_table(vec!["Metric", "Payback (mo)", "Annual Net"]);
        let rows: [(&str, f64, f64); 6] = [
            ("Mean", s.payback_months.mean, s.annual_net.mean),
            ("Median", s.payback_months.median, s.annual_net.median),
            ("P10", s.payback_months.p10, s.annual_net.p10),
            ("P90", s.payback_months.p90, s.annual_net.p90),
            ("Min", s.payback_months.min, s.annual_net.min),
            ("Max", s.payback_months.max, s.annual_net.max),
        ];
        for (label, payback, net) in rows {
            table.add_row(vec![
                label.to_string(),
                format!("{payback:.1}"),
                money(net),
            ]);
        }
        println!("{table}");

        println!();
        if s.never_count > 0 {
            println!(
                "{} {} of {} trials never paid back within {:.0} months",
                "Warning:".yellow().bold(),
                s.never_count,
                s.trials,
                s.horizon_months
            );
        } else {
            println!(
                "{} every trial paid back within the horizon",
                "OK:".green().bold()
            );
        }
        Ok(())
    }
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn print_banner(title: &str) {
    println!();
    println!("{}", "═══════════════════════════════════════════".cyan());
    println!("{}", format!("      {title}").bold().cyan());
    println!("{}", "═══════════════════════════════════════════".cyan());
    println!();
}

fn colored_pct(pct: f64) -> ColoredString {
    let text = format!("{pct:.1}%");
    if pct >= 75.0 {
        text.green()
    } else if pct >= 50.0 {
        text.yellow()
    } else {
        text.red()
    }
}

fn colored_payback(f: &crate::financial::CostBenefit) -> ColoredString {
    let text = f.payback.to_string();
    match f.payback {
        crate::financial::Payback::Months(m) if m <= 12.0 => text.green(),
        crate::financial::Payback::Months(_) => text.yellow(),
        crate::financial::Payback::Never => text.red(),
    }
}
