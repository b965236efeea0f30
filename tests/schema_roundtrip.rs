use ecmo_weanqc::io::json_writer::build_report;
use ecmo_weanqc::schema::v1::WeaningQcV1;
use ecmo_weanqc::score::engine::score;
use ecmo_weanqc::score::{AlertLevel, Measurement};

fn baseline() -> Measurement {
    Measurement {
        map_mmhg: 70.0,
        heart_rate: 85.0,
        vasopressor: 3.0,
        ecmo_flow: 3.2,
        sweep_gas: 2.0,
        ecmo_fio2: 0.6,
        vent_fio2: 0.5,
        peep: 10.0,
        driving_pressure: 12.0,
        lactate: 2.0,
        ph: 7.38,
        pao2: 80.0,
        organ_score: 7.0,
        echo_score: 6.0,
    }
}

#[test]
fn report_roundtrips_through_json() {
    let m = baseline();
    let result = score(&m);
    let report = build_report(&m, &result, Some("ECMO-001"));

    let text = serde_json::to_string_pretty(&report).unwrap();
    let parsed: WeaningQcV1 = serde_json::from_str(&text).unwrap();

    assert_eq!(parsed.tool, "ecmo-weanqc");
    assert_eq!(parsed.schema_version, "v1");
    assert_eq!(parsed.patient_id.as_deref(), Some("ECMO-001"));
    assert_eq!(parsed.measurement, m);
    assert_eq!(parsed.probabilities.success, 77.3);
    assert_eq!(parsed.probabilities.failure, 22.7);
    assert_eq!(parsed.alert.level, AlertLevel::Favorable);
}

#[test]
fn report_is_internally_consistent() {
    let m = baseline();
    let result = score(&m);
    let report = build_report(&m, &result, None);

    assert!(report.patient_id.is_none());
    assert!((0.0..=1.0).contains(&report.total_risk));
    let recomputed =
        0.4 * report.domains.ecmo_support + 0.35 * report.domains.vitals + 0.25 * report.domains.organs;
    assert!((report.total_risk - recomputed).abs() < 1e-12);
    let success = ((1.0 - report.total_risk) * 100.0 * 10.0).round() / 10.0;
    assert_eq!(report.probabilities.success, success);
}

#[test]
fn alert_level_serializes_snake_case() {
    let text = serde_json::to_string(&AlertLevel::Favorable).unwrap();
    assert_eq!(text, "\"favorable\"");
    let parsed: AlertLevel = serde_json::from_str("\"unfavorable\"").unwrap();
    assert_eq!(parsed, AlertLevel::Unfavorable);
}
