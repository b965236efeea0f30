//! Weaning-risk scoring engine.
//!
//! Demo model, not clinically validated. Thresholds and weights are kept in
//! behavioral parity with the study prototype and must not be retuned.
//!
//! Every function here is pure and total over f64: out-of-range inputs run
//! through the same clamped transforms and skew the result instead of
//! raising an error.

use crate::score::{AlertLevel, DomainScores, Measurement, ScoreResult, SubRisks};

fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

fn map_risk(map_mmhg: f64) -> f64 {
    if map_mmhg < 55.0 {
        1.0
    } else if map_mmhg < 65.0 {
        0.7
    } else if map_mmhg <= 85.0 {
        0.2
    } else {
        0.5
    }
}

fn heart_rate_risk(hr: f64) -> f64 {
    if hr < 50.0 || hr > 130.0 {
        1.0
    } else if hr <= 110.0 {
        0.3
    } else {
        0.6
    }
}

fn pao2_risk(pao2: f64) -> f64 {
    if pao2 < 60.0 {
        0.9
    } else if pao2 < 80.0 {
        0.5
    } else {
        0.2
    }
}

fn lactate_risk(lactate: f64) -> f64 {
    if lactate > 4.0 {
        1.0
    } else if lactate > 2.0 {
        0.6
    } else {
        0.2
    }
}

fn ph_risk(ph: f64) -> f64 {
    if ph < 7.2 || ph > 7.5 {
        0.9
    } else if (7.3..=7.45).contains(&ph) {
        0.2
    } else {
        0.5
    }
}

fn ecmo_flow_risk(flow: f64) -> f64 {
    if flow < 2.0 {
        1.0
    } else if flow < 3.0 {
        0.6
    } else {
        0.2
    }
}

/// Map every raw measurement to its [0, 1] sub-risk (0 = good, 1 = bad).
pub fn sub_risks(m: &Measurement) -> SubRisks {
    SubRisks {
        map: map_risk(m.map_mmhg),
        heart_rate: heart_rate_risk(m.heart_rate),
        vasopressor: clamp01(m.vasopressor / 10.0),
        pao2: pao2_risk(m.pao2),
        lactate: lactate_risk(m.lactate),
        ph: ph_risk(m.ph),
        ecmo_flow: ecmo_flow_risk(m.ecmo_flow),
        // higher sweep gas reads as harder to wean
        sweep_gas: clamp01((m.sweep_gas - 1.0) / 4.0),
        ecmo_fio2: clamp01((m.ecmo_fio2 - 0.5) / 0.5),
        vent_fio2: clamp01((m.vent_fio2 - 0.4) / 0.6),
        peep: clamp01((m.peep - 10.0).abs() / 10.0),
        driving_pressure: clamp01((m.driving_pressure - 12.0) / 10.0),
        // organ/echo scales run 0 = bad, 10 = good
        organ: clamp01((10.0 - m.organ_score) / 10.0),
        echo: clamp01((10.0 - m.echo_score) / 10.0),
    }
}

/// Aggregate sub-risks into the three weighted domains. ECMO flow counts
/// twice inside its domain, so the support domain divides by 7.
pub fn domain_scores(r: &SubRisks) -> DomainScores {
    let vitals = (r.map + r.heart_rate + r.vasopressor + r.pao2 + r.lactate + r.ph) / 6.0;
    let ecmo_support =
        (r.ecmo_flow * 2.0 + r.sweep_gas + r.ecmo_fio2 + r.vent_fio2 + r.peep + r.driving_pressure)
            / 7.0;
    let organs = (r.organ + r.echo) / 2.0;
    DomainScores {
        vitals,
        ecmo_support,
        organs,
    }
}

pub fn total_risk(d: &DomainScores) -> f64 {
    clamp01(0.4 * d.ecmo_support + 0.35 * d.vitals + 0.25 * d.organs)
}

/// Compute the weaning score for one measurement.
///
/// Returns success/failure probabilities rounded to one decimal (always
/// summing to 100.0) and the three-level alert.
pub fn score(m: &Measurement) -> ScoreResult {
    let risks = sub_risks(m);
    let domains = domain_scores(&risks);
    let total = total_risk(&domains);

    let success_probability = round1((1.0 - total) * 100.0);
    let failure_probability = round1(100.0 - success_probability);
    let alert_level = AlertLevel::from_success_probability(success_probability);

    ScoreResult {
        success_probability,
        failure_probability,
        alert_level,
        alert_text: alert_level.label().to_string(),
    }
}
