use ecmo_weanqc::io::summary::format_summary;
use ecmo_weanqc::score::engine::score;
use ecmo_weanqc::score::Measurement;

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
fn summary_contains_probabilities_and_alert() {
    let m = baseline();
    let result = score(&m);
    let text = format_summary(&m, &result, None);
    assert!(text.contains("Success probability: 77.3 %"));
    assert!(text.contains("Failure probability: 22.7 %"));
    assert!(text.contains("favorable"));
    assert!(text.contains("Domains:"));
    assert!(!text.contains("Patient:"));
}

#[test]
fn summary_names_patient_when_given() {
    let m = baseline();
    let result = score(&m);
    let text = format_summary(&m, &result, Some("ECMO-001"));
    assert!(text.contains("Patient: ECMO-001"));
}
