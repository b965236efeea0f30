use chrono::Utc;
use ecmo_weanqc::io::json_writer::{write_history, write_report};
use ecmo_weanqc::patient::HistoryEntry;
use ecmo_weanqc::score::engine::score;
use ecmo_weanqc::score::Measurement;
use tempfile::TempDir;

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
fn report_file_contains_expected_fields() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("weanqc.json");
    let m = baseline();
    let result = score(&m);
    write_report(&path, &m, &result, None).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["tool"], "ecmo-weanqc");
    assert_eq!(value["schema_version"], "v1");
    assert_eq!(value["probabilities"]["success"], 77.3);
    assert_eq!(value["probabilities"]["failure"], 22.7);
    assert_eq!(value["alert"]["level"], "favorable");
    assert_eq!(value["measurement"]["lactate"], 2.0);
    assert!(value["sub_risks"]["ecmo_flow"].is_number());
    assert!(value["domains"]["vitals"].is_number());
    assert!(value["patient_id"].is_null());
}

#[test]
fn history_export_keeps_entry_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history.json");

    let mut history = Vec::new();
    for lactate in [2.0, 4.5] {
        let mut m = baseline();
        m.lactate = lactate;
        let result = score(&m);
        history.push(HistoryEntry::new(Utc::now(), m, &result));
    }
    write_history(&path, "ECMO-001", &history).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["patient_id"], "ECMO-001");
    let entries = value["history"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["lactate"], 2.0);
    assert_eq!(entries[1]["lactate"], 4.5);
    assert!(
        entries[0]["success_probability"].as_f64().unwrap()
            > entries[1]["success_probability"].as_f64().unwrap()
    );
}
