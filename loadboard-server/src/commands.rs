use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};

use loadboard_core::{validate, PolicyReport};
use loadboard_types::{AccessPolicy, Allowance};

/// Run the CORS checklist on `policy` and print the findings.
///
/// Fails when any check fails so the exit status can gate deployments.
pub fn check_cors(policy: &AccessPolicy, json: bool) -> Result<()> {
    let report = validate(policy);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(policy, &report);
    }

    if !report.passed() {
        anyhow::bail!(
            "CORS policy check failed: {} of {} checks failed",
            report.total() - report.passed_count(),
            report.total()
        );
    }
    Ok(())
}

fn print_report(policy: &AccessPolicy, report: &PolicyReport) {
    println!("{}", "CORS Configuration".cyan().bold());
    println!("  allow_origins:     {:?}", policy.allowed_origins);
    println!("  allow_credentials: {}", policy.allow_credentials);
    println!("  allow_methods:     {}", describe(&policy.allowed_methods));
    println!("  allow_headers:     {}", describe(&policy.allowed_headers));
    println!();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["#", "Check", "Result", "Detail"]);

    for (n, finding) in report.findings.iter().enumerate() {
        let result = if finding.passed {
            Cell::new("PASS").fg(Color::Green)
        } else {
            Cell::new("FAIL").fg(Color::Red)
        };
        table.add_row(vec![
            Cell::new(n + 1),
            Cell::new(finding.check.label()),
            result,
            Cell::new(&finding.detail),
        ]);
    }

    println!("{table}");

    let summary = format!("{}/{} checks passed", report.passed_count(), report.total());
    if report.passed() {
        println!("\n{} {}", "✓".green(), summary.green());
    } else {
        println!("\n{} {}", "✗".red(), summary.red());
    }
}

fn describe(allowance: &Allowance) -> String {
    match allowance {
        Allowance::Any => r#"["*"]"#.to_string(),
        Allowance::Only(values) => format!("{values:?}"),
    }
}
