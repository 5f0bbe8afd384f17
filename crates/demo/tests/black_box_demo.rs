use std::cell::RefCell;
use std::rc::Rc;

use chrono::{TimeZone, Utc};
use solid_core::Console;
use solid_demo::DemoConfig;

fn run_with(config: &DemoConfig) -> Vec<String> {
    let buffer = Rc::new(RefCell::new(Vec::<u8>::new()));
    let console = Console::new(buffer.clone());

    solid_demo::run(&console, config).expect("demo run failed");

    let text = String::from_utf8(buffer.borrow().clone()).expect("output is utf-8");
    text.lines().map(str::to_string).collect()
}

fn run_captured() -> Vec<String> {
    run_with(&DemoConfig {
        fixed_time: Some(Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap()),
        ..DemoConfig::default()
    })
}

fn labels(lines: &[String]) -> Vec<&str> {
    lines
        .iter()
        .filter_map(|line| line.split_once(" - ").map(|(label, _)| label))
        .collect()
}

#[test]
fn families_print_in_order_with_expected_counts() {
    let lines = run_captured();

    assert_eq!(
        labels(&lines),
        vec!["SRP", "OCP", "OCP", "LSP", "LSP", "ISP", "ISP", "DIP", "DIP"]
    );
}

#[test]
fn every_dip_line_is_followed_by_its_sink_write() {
    let lines = run_captured();
    let dip: Vec<&String> = lines.iter().skip_while(|l| !l.starts_with("DIP")).collect();

    assert_eq!(
        dip,
        vec![
            "DIP - Logging to File",
            "File write: [2024-05-06T07:08:09Z] User data saved",
            "DIP - Logging to Database",
            "Database write: [2024-05-06T07:08:09Z] User data saved",
        ]
    );
}

#[test]
fn concrete_scenarios_are_rendered() {
    let lines = run_captured();

    assert_eq!(lines[0], "SRP - Laptop costs $999.99");
    assert_eq!(lines[1], "OCP - Laptop with 10% off: $899.99");
    assert_eq!(lines[2], "OCP - Laptop with 20% off: $799.99");
    assert_eq!(lines[3], "LSP - Car: Engine started; max speed 200 km/h");
    assert_eq!(
        lines[4],
        "LSP - Bicycle: No engine to start; pedalling instead; max speed 30 km/h"
    );
    assert_eq!(lines[5], "ISP - Fish swims with its fins");
    assert_eq!(lines[6], "ISP - Duck flies with its wings");
}

#[test]
fn runs_are_deterministic_under_a_fixed_clock() {
    assert_eq!(run_captured(), run_captured());
}

#[test]
fn configured_audit_message_reaches_both_sinks() {
    let config = DemoConfig::from_vars(
        Some("Invoice voided".into()),
        Some("2024-05-06T07:08:09Z".into()),
    );
    let lines = run_with(&config);

    assert_eq!(lines[8], "File write: [2024-05-06T07:08:09Z] Invoice voided");
    assert_eq!(lines[10], "Database write: [2024-05-06T07:08:09Z] Invoice voided");
}
