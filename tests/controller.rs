use std::path::PathBuf;

use rc_transient::data::export::read_csv_path;
use rc_transient::{
    Labels, NoticeLevel, ParameterForm, SimError, SimState, SimulationController,
};

fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("rc_transient_ctrl_{}_{}", std::process::id(), name))
}

fn form(r: &str, c: &str, v0: &str, t_final: &str, step: &str) -> ParameterForm {
    ParameterForm {
        resistance: r.into(),
        capacitance: c.into(),
        v0: v0.into(),
        t_final: t_final.into(),
        step: step.into(),
    }
}

#[test]
fn starts_idle_without_export() {
    let ctrl = SimulationController::new(Labels::english());
    assert_eq!(ctrl.state(), &SimState::Idle);
    assert!(!ctrl.can_export());
    assert!(ctrl.last_notice().is_none());
}

#[test]
fn valid_form_moves_to_results_ready() {
    let mut ctrl = SimulationController::new(Labels::english());
    let len = ctrl.generate(&form("1", "1", "5", "5", "1")).unwrap().len();
    assert_eq!(len, 5);
    assert!(ctrl.can_export());
    let result = ctrl.result().unwrap();
    assert_eq!(result.time(), &[0.0, 1.0, 2.0, 3.0, 4.0]);
    assert_eq!(result.voltage()[0], 5.0);
    assert_eq!(ctrl.last_notice().unwrap().level, NoticeLevel::Info);
}

#[test]
fn parse_error_keeps_previous_result() {
    let mut ctrl = SimulationController::new(Labels::english());
    ctrl.generate(&form("1", "1", "5", "5", "1")).unwrap();
    let before = ctrl.result().cloned();

    let err = ctrl.generate(&form("1", "one", "5", "5", "1")).unwrap_err();
    assert!(matches!(err, SimError::Parse { field: "capacitance", .. }));
    assert_eq!(ctrl.result().cloned(), before);
    assert!(ctrl.last_notice().unwrap().is_error());
}

#[test]
fn invalid_time_axis_from_idle_stays_idle() {
    let mut ctrl = SimulationController::new(Labels::english());
    for f in [
        form("1", "1", "5", "0", "1"),
        form("1", "1", "5", "5", "0"),
        form("1", "1", "5", "2", "2"),
    ] {
        let err = ctrl.generate(&f).unwrap_err();
        assert!(matches!(err, SimError::InvalidParameter(_)));
        assert_eq!(ctrl.state(), &SimState::Idle);
    }
}

#[test]
fn non_positive_circuit_values_are_rejected() {
    let mut ctrl = SimulationController::new(Labels::english());
    assert!(matches!(
        ctrl.generate(&form("0", "1", "5", "5", "1")),
        Err(SimError::InvalidParameter(_))
    ));
    assert!(matches!(
        ctrl.generate(&form("1", "-1e-6", "5", "5", "1")),
        Err(SimError::InvalidParameter(_))
    ));
}

#[test]
fn new_request_replaces_result() {
    let mut ctrl = SimulationController::new(Labels::english());
    ctrl.generate(&form("1", "1", "5", "5", "1")).unwrap();
    ctrl.generate(&form("2", "1", "10", "3", "0.5")).unwrap();
    let result = ctrl.result().unwrap();
    assert_eq!(result.len(), 6);
    assert_eq!(result.voltage()[0], 10.0);
    assert_eq!(result.current()[0], 5.0);
}

#[test]
fn export_while_idle_reports_no_results() {
    let mut ctrl = SimulationController::new(Labels::english());
    let path = temp_file("idle.csv");
    assert!(matches!(ctrl.export_to(&path), Err(SimError::NoResults)));
    assert!(!path.exists());
    assert!(ctrl.last_notice().unwrap().is_error());
}

#[test]
fn failed_export_keeps_results_exportable() {
    let mut ctrl = SimulationController::new(Labels::portuguese());
    ctrl.generate(&form("1", "1", "5", "5", "1")).unwrap();

    let bad = temp_file("missing_dir").join("out.csv");
    assert!(matches!(ctrl.export_to(&bad), Err(SimError::Export(_))));
    assert!(ctrl.can_export());

    let good = temp_file("ok.csv");
    ctrl.export_to(&good).unwrap();
    let back = read_csv_path(&good).unwrap();
    let _ = std::fs::remove_file(&good);
    assert_eq!(back.header[0], "Tempo (s)");
    assert_eq!(back.time, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    assert_eq!(ctrl.last_notice().unwrap().text, Labels::portuguese().saved);
}

#[test]
fn subscribers_receive_every_notice() {
    let mut ctrl = SimulationController::new(Labels::english());
    let rx = ctrl.subscribe();
    let _ = ctrl.generate(&form("x", "1", "5", "5", "1"));
    let _ = ctrl.generate(&form("1", "1", "5", "5", "1"));
    let got: Vec<_> = rx.try_iter().collect();
    assert_eq!(got.len(), 2);
    assert_eq!(got[0].level, NoticeLevel::Error);
    assert_eq!(got[1].level, NoticeLevel::Info);
}

#[test]
fn suggested_name_has_csv_extension() {
    let ctrl = SimulationController::new(Labels::english());
    let name = ctrl.suggested_file_name(&chrono::Local::now());
    assert!(name.starts_with("resultados_circuito_rc_"));
    assert!(name.ends_with(".csv"));
}
