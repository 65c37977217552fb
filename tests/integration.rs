//! Integration tests for the schedule pay engine.
//!
//! This test suite covers:
//! - The reference scenarios for single schedule lines
//! - Grammar round trips and hour boundaries (property based)
//! - Occupancy expansion recovering the original ranges
//! - Batch processing of whole files
//! - The HTTP API

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use proptest::prelude::*;
use serde_json::{Value, json};
use tower::ServiceExt;

use schedule_pay::api::{AppState, create_router};
use schedule_pay::batch::{BatchProcessor, RunOverrides, run_report};
use schedule_pay::calculation::{OccupancyVector, RATE_TABLE, calculate_amount, expand_occupancy};
use schedule_pay::config::{ConfigLoader, InvalidLinePolicy, OutputFormat};
use schedule_pay::error::EngineError;
use schedule_pay::models::{DayCode, DayRange};
use schedule_pay::process_line;

// =============================================================================
// Test Helpers
// =============================================================================

const RENE: &str = "RENE=MO10:00-12:00,TU10:00-12:00,TH01:00-03:00,SA14:00-18:00,SU20:00-21:00";
const ASTRID: &str = "ASTRID=MO10:00-12:00,TH12:00-14:00,SU20:00-21:00";

fn create_router_for_test() -> Router {
    let config = ConfigLoader::load("./config/default.yaml").expect("Failed to load config");
    create_router(AppState::new(config))
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn token(day: DayCode, start: u8, end: u8) -> String {
    format!("{}{:02}:00-{:02}:00", day, start, end)
}

/// Amount of a range priced hour by hour, independent of the pipeline.
fn expected_amount(day: DayCode, start: u8, end: u8) -> u32 {
    (start..end)
        .map(|hour| RATE_TABLE.rate(day, usize::from(hour)))
        .sum()
}

// =============================================================================
// Reference Scenarios
// =============================================================================

#[test]
fn test_scenario_reference_line_pays_215() {
    let record = process_line(RENE, 1).unwrap();
    assert_eq!(record.name(), "RENE");
    assert_eq!(record.amount(), 215);
}

#[test]
fn test_scenario_minutes_not_rounded() {
    let result = process_line(
        "RENE=MO10:00-12:01,TH01:00-03:00,SA14:00-18:00,SU20:00-21:00",
        2,
    );
    assert!(matches!(result, Err(EngineError::DataStructure { line_number: 2 })));
}

#[test]
fn test_scenario_duplicated_day() {
    let result = process_line(
        "RENE=MO10:00-12:00,MO10:00-12:00,TH01:00-03:00,SA14:00-18:00,SU20:00-21:00",
        5,
    );
    assert!(matches!(result, Err(EngineError::DuplicatedDay { line_number: 5 })));
}

#[test]
fn test_scenario_invalid_hour() {
    let result = process_line(
        "RENE=MO10:00-25:00,TU10:00-12:00,TH01:00-03:00,SA14:00-18:00,SU20:00-21:00",
        2,
    );
    assert!(matches!(result, Err(EngineError::InvalidHour { line_number: 2 })));
}

#[test]
fn test_scenario_limit_hour() {
    let result = process_line(
        "RENE=MO10:00-12:00,TU10:00-12:00,TH01:00-03:00,SA14:00-11:00,SU20:00-21:00",
        2,
    );
    assert!(matches!(result, Err(EngineError::LimitHour { line_number: 2 })));
}

#[test]
fn test_scenario_empty_hour_list() {
    let result = process_line("RENE=", 1);
    assert!(matches!(result, Err(EngineError::DataStructure { line_number: 1 })));
}

#[test]
fn test_second_sample_pays_85() {
    assert_eq!(process_line(ASTRID, 2).unwrap().amount(), 85);
}

#[test]
fn test_full_week_at_hour_22() {
    let tokens: Vec<String> = DayCode::ALL.iter().map(|d| token(*d, 0, 22)).collect();
    let line = format!("MAX={}", tokens.join(","));
    let record = process_line(&line, 1).unwrap();

    // Weekday: 9*25 + 9*15 + 4*20 = 440. Weekend: 9*30 + 9*20 + 4*25 = 550.
    assert_eq!(record.amount(), 5 * 440 + 2 * 550);
}

#[test]
fn test_end_hour_23_is_rejected() {
    let result = process_line("RENE=SU20:00-23:00", 1);
    assert!(matches!(result, Err(EngineError::InvalidHour { .. })));
}

// =============================================================================
// Properties
// =============================================================================

fn day_strategy() -> impl Strategy<Value = DayCode> {
    prop::sample::select(DayCode::ALL.to_vec())
}

/// A valid (start, end) pair with both hours in 0..=22 and start < end.
fn range_strategy() -> impl Strategy<Value = (u8, u8)> {
    (0u8..22).prop_flat_map(|start| (Just(start), (start + 1)..=22))
}

/// Distinct days, each with a valid range, in a random order.
fn schedule_strategy() -> impl Strategy<Value = Vec<(DayCode, u8, u8)>> {
    prop::sample::subsequence(DayCode::ALL.to_vec(), 1..=7)
        .prop_shuffle()
        .prop_flat_map(|days| {
            let count = days.len();
            (Just(days), prop::collection::vec(range_strategy(), count))
        })
        .prop_map(|(days, ranges)| {
            days.into_iter()
                .zip(ranges)
                .map(|(day, (start, end))| (day, start, end))
                .collect()
        })
}

proptest! {
    #[test]
    fn prop_valid_lines_parse(name in "[A-Za-z]{1,12}", schedule in schedule_strategy()) {
        let tokens: Vec<String> = schedule.iter().map(|(d, s, e)| token(*d, *s, *e)).collect();
        let line = format!("{}={}", name, tokens.join(","));

        let record = process_line(&line, 1).unwrap();
        prop_assert_eq!(record.name(), name.as_str());

        let resolved: Vec<(DayCode, u8, u8)> = record
            .schedule()
            .iter()
            .map(|r| (r.day(), r.start_hour(), r.end_hour()))
            .collect();
        prop_assert_eq!(&resolved, &schedule);

        let expected: u32 = schedule.iter().map(|(d, s, e)| expected_amount(*d, *s, *e)).sum();
        prop_assert_eq!(record.amount(), expected);
    }

    #[test]
    fn prop_processing_is_deterministic(schedule in schedule_strategy()) {
        let tokens: Vec<String> = schedule.iter().map(|(d, s, e)| token(*d, *s, *e)).collect();
        let line = format!("ANA={}", tokens.join(","));

        let first = process_line(&line, 3).unwrap();
        let second = process_line(&line, 3).unwrap();
        prop_assert_eq!(first.name(), second.name());
        prop_assert_eq!(first.amount(), second.amount());
    }

    #[test]
    fn prop_occupancy_span_recovers_range(day in day_strategy(), (start, end) in range_strategy()) {
        let range = DayRange::new(day, start, end, 1).unwrap();
        let vector = OccupancyVector::from(&range);

        prop_assert_eq!(vector.span(), Some((start, end)));
        prop_assert_eq!(vector.hours_worked(), range.hours());
    }

    #[test]
    fn prop_hour_23_or_more_is_invalid(
        day in day_strategy(),
        valid in 0u8..23,
        invalid in 23u8..=99,
        invalid_is_start in any::<bool>(),
    ) {
        let (start, end) = if invalid_is_start { (invalid, valid) } else { (valid, invalid) };
        let line = format!("ANA={}", token(day, start, end));

        let result = process_line(&line, 7);
        prop_assert!(
            matches!(result, Err(EngineError::InvalidHour { line_number: 7 })),
            "expected InvalidHour at line 7, got {:?}",
            result
        );
    }

    #[test]
    fn prop_amount_sums_days(schedule in schedule_strategy()) {
        let tokens: Vec<String> = schedule.iter().map(|(d, s, e)| token(*d, *s, *e)).collect();
        let record = process_line(&format!("ANA={}", tokens.join(",")), 1).unwrap();

        let occupancy = expand_occupancy(record.schedule());
        prop_assert_eq!(calculate_amount(&occupancy), record.amount());
        prop_assert_eq!(
            record.breakdown().iter().map(|d| d.amount).sum::<u32>(),
            record.amount()
        );
    }
}

// =============================================================================
// Batch Processing
// =============================================================================

#[test]
fn test_batch_sample_file() {
    let mut processor = BatchProcessor::new(InvalidLinePolicy::Abort, "USD");
    let report = processor.run_file("./data/employees.txt").unwrap();

    let messages: Vec<String> = report.payments.iter().map(|p| p.message()).collect();
    assert_eq!(
        messages,
        vec![
            "The amount to pay RENE is: 215 USD",
            "The amount to pay ASTRID is: 85 USD"
        ]
    );
    assert!(report.is_complete());
}

#[test]
fn test_batch_stops_on_repeated_employee() {
    let input = format!("{RENE}\n{ASTRID}\n{RENE}\nANA=MO10:00-12:00\n");
    let mut processor = BatchProcessor::new(InvalidLinePolicy::Abort, "USD");
    let report = processor.run(input.as_bytes(), "inline");

    assert_eq!(report.payments.len(), 2);
    let halt = report.halted.unwrap();
    assert_eq!(halt.line_number, Some(3));
    assert_eq!(halt.message, "The employee RENE appears more than once.");
}

#[test]
fn test_batch_skip_policy() {
    let input = format!("{RENE}\nBAD=MO10:00-12:00,\n{ASTRID}\n");
    let mut processor = BatchProcessor::new(InvalidLinePolicy::Skip, "USD");
    let report = processor.run(input.as_bytes(), "inline");

    assert_eq!(report.payments.len(), 2);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].line_number, 2);
    assert_eq!(report.total_amount(), 300);
}

#[test]
fn test_batch_missing_file() {
    let mut processor = BatchProcessor::new(InvalidLinePolicy::Abort, "USD");
    let error = processor.run_file("./data/missing.txt").unwrap_err();
    assert!(matches!(error, EngineError::InputNotFound { .. }));
}

#[test]
fn test_run_report_fails_on_halt_and_missing_file() {
    let config = ConfigLoader::default();
    let (mut out, mut err) = (Vec::new(), Vec::new());

    let halted = run_report(
        &config,
        "./data/with_invalid_line.txt",
        RunOverrides::default(),
        &mut out,
        &mut err,
    )
    .unwrap();
    assert!(!halted);

    let missing = run_report(
        &config,
        "./data/missing.txt",
        RunOverrides::default(),
        &mut out,
        &mut err,
    )
    .unwrap();
    assert!(!missing);
    assert!(String::from_utf8(err).unwrap().starts_with("Error: The file wasn't found"));
}

#[test]
fn test_run_report_overrides() {
    let overrides = RunOverrides {
        skip_invalid: true,
        format: Some(OutputFormat::Json),
    };
    let (mut out, mut err) = (Vec::new(), Vec::new());
    let complete = run_report(
        &ConfigLoader::default(),
        "./data/with_invalid_line.txt",
        overrides,
        &mut out,
        &mut err,
    )
    .unwrap();

    assert!(complete);
    let report: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(report["payments"].as_array().unwrap().len(), 2);
    assert_eq!(report["skipped"][0]["line_number"], 2);
}

// =============================================================================
// HTTP API
// =============================================================================

#[tokio::test]
async fn test_api_calculate_reference_line() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/calculate",
        json!({ "line": RENE, "line_number": 1 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["amount"], 215);
    assert_eq!(body["schedule"][3], json!({ "day": "SA", "start_hour": 14, "end_hour": 18 }));
    assert_eq!(body["breakdown"][3], json!({ "day": "SA", "hours": 4, "amount": 80 }));
}

#[tokio::test]
async fn test_api_calculate_trims_line() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/calculate",
        json!({ "line": format!("{ASTRID}\n") }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["amount"], 85);
    assert_eq!(body["line_number"], 1);
}

#[tokio::test]
async fn test_api_rejects_each_line_error_kind() {
    let cases = [
        ("RENE=", "DATA_STRUCTURE_ERROR"),
        ("RENE=MO10:00-12:00,MO13:00-14:00", "DUPLICATED_DAY"),
        ("RENE=MO10:00-23:00", "INVALID_HOUR"),
        ("RENE=MO12:00-10:00", "LIMIT_HOUR"),
    ];

    for (line, code) in cases {
        let (status, body) = post_json(
            create_router_for_test(),
            "/calculate",
            json!({ "line": line, "line_number": 3 }),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "line {}", line);
        assert_eq!(body["code"], code);
        assert!(body["message"].as_str().unwrap().starts_with("Data in line 3"));
    }
}

#[tokio::test]
async fn test_api_batch() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/calculate/batch",
        json!({ "lines": [RENE, "", ASTRID] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["payments"][0]["amount"], 215);
    assert_eq!(body["payments"][1]["line_number"], 3);
    assert!(body.get("halted").is_none());
}

#[tokio::test]
async fn test_api_batch_halts_on_invalid_line_by_default() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/calculate/batch",
        json!({ "lines": [RENE, "RENE=MO10:00-12:01", ASTRID] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["payments"].as_array().unwrap().len(), 1);
    assert_eq!(
        body["halted"]["message"],
        "Data in line 2 does not have the specified structure."
    );
}
