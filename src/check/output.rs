//! 输出层：写入报告文件，并以 json 或 text 打印到 stdout

use std::path::Path;
use crate::check::report::Report;
use crate::utils::fs::write_atomic;
use crate::utils::{ProvcheckError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Text,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "text" => Ok(OutputFormat::Text),
            other  => Err(ProvcheckError::Config(format!("unknown format: {}", other))),
        }
    }
}

pub fn to_json(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(report)
        .map_err(|e| ProvcheckError::Parse(format!("JSON serialize: {}", e)))
}

/// Persists the finished report, replacing any previous one.
pub fn write_report(path: &Path, report: &Report) -> Result<()> {
    write_atomic(path, to_json(report)?.as_bytes())
}

pub fn display(report: &Report, path: &Path, format: OutputFormat) -> Result<()> {
    println!("Wrote {}", path.display());
    match format {
        OutputFormat::Json => println!("{}", to_json(report)?),
        OutputFormat::Text => display_text(report),
    }
    Ok(())
}

// ── Text ────────────────────────────────────────────────────────────────────

fn display_text(report: &Report) {
    print_section("REPORT");
    println!("  Collected at : {}", report.timestamp);
    println!("  Target       : {}", report.target);

    print_section(&format!("CHECKS ({})", report.checks.len()));
    let width = report.checks.keys().map(String::len).max().unwrap_or(0);
    for (name, output) in &report.checks {
        let mut lines = output.lines();
        match lines.next() {
            Some(first) => println!("  {:<width$} : {}", name, first, width = width),
            None        => println!("  {:<width$} : (empty)", name, width = width),
        }
        for line in lines {
            println!("  {:<width$}   {}", "", line, width = width);
        }
    }
}

fn print_section(title: &str) {
    println!("\n{}", "─".repeat(60));
    println!("  {}", title);
    println!("{}", "─".repeat(60));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::report::CheckResult;
    use crate::utils::types::Target;

    fn report() -> Report {
        Report::new(
            "2026-01-02T03:04:05.000006+00:00".to_string(),
            Target { user: "deploy".to_string(), ip: "10.0.0.5".to_string() },
            vec![
                CheckResult { name: "uptime".to_string(), output: "up 3 days".to_string() },
                CheckResult { name: "kernel".to_string(), output: "6.8.0".to_string() },
            ],
        )
    }

    #[test]
    fn json_schema_and_order() {
        let json = to_json(&report()).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(v["target"], serde_json::json!({"user": "deploy", "ip": "10.0.0.5"}));
        assert_eq!(v["checks"]["kernel"], "6.8.0");
        assert!(json.find("\"uptime\"").unwrap() < json.find("\"kernel\"").unwrap());
        assert!(json.contains("\n  \"timestamp\""));
    }

    #[test]
    fn write_report_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports/report.json");
        write_report(&path, &report()).unwrap();

        let back: Report = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back, report());
    }

    #[test]
    fn unknown_format_rejected() {
        assert_eq!(OutputFormat::parse("text").unwrap(), OutputFormat::Text);
        assert!(matches!(OutputFormat::parse("yaml"), Err(ProvcheckError::Config(_))));
    }
}
