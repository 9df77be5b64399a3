use std::path::PathBuf;

use approx::assert_relative_eq;
use chrono::{Local, TimeZone};
use rc_transient::data::export::{read_csv_path, write_csv_path};
use rc_transient::{
    default_file_name, read_csv, simulate, write_csv, CircuitParams, CsvHeader, SimulationInputs,
};

fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("rc_transient_{}_{}", std::process::id(), name))
}

fn sample_inputs() -> SimulationInputs {
    SimulationInputs {
        circuit: CircuitParams::new(5.0, 1_000.0, 1e-4),
        t_final: 0.5,
        step: 0.01,
    }
}

#[test]
fn writes_expected_csv() {
    let result = simulate(SimulationInputs {
        circuit: CircuitParams::new(5.0, 1.0, 1.0),
        t_final: 3.0,
        step: 1.0,
    })
    .unwrap();
    let mut buf = Vec::new();
    write_csv(&mut buf, &CsvHeader::english(), &result).unwrap();
    let s = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = s.trim().split('\n').collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "Time (s),Voltage (V),Current (A)");
    assert_eq!(lines[1], "0,5,5");
    assert!(lines[2].starts_with("1,"));
}

#[test]
fn portuguese_header() {
    let result = simulate(sample_inputs()).unwrap();
    let mut buf = Vec::new();
    write_csv(&mut buf, &CsvHeader::portuguese(), &result).unwrap();
    let s = String::from_utf8(buf).unwrap();
    assert!(s.starts_with("Tempo (s),Tensão (V),Corrente (A)\n"));
}

#[test]
fn exported_file_reads_back_the_same_series() {
    let result = simulate(sample_inputs()).unwrap();
    let path = temp_file("roundtrip.csv");
    write_csv_path(&path, &CsvHeader::english(), &result).unwrap();
    let back = read_csv_path(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(back.header, vec!["Time (s)", "Voltage (V)", "Current (A)"]);
    assert_eq!(back.time.len(), result.len());
    for k in 0..result.len() {
        assert_relative_eq!(back.time[k], result.time()[k], max_relative = 1e-12);
        assert_relative_eq!(back.voltage[k], result.voltage()[k], max_relative = 1e-12);
        assert_relative_eq!(back.current[k], result.current()[k], max_relative = 1e-12);
    }
}

#[test]
fn tiny_values_survive_in_memory_round_trip() {
    let result = simulate(SimulationInputs {
        circuit: CircuitParams::new(1e-3, 1e6, 1e-12),
        t_final: 2e-5,
        step: 1e-7,
    })
    .unwrap();
    let mut buf = Vec::new();
    write_csv(&mut buf, &CsvHeader::english(), &result).unwrap();
    let back = read_csv(buf.as_slice()).unwrap();
    assert_eq!(back.time, result.time());
    assert_eq!(back.voltage, result.voltage());
    assert_eq!(back.current, result.current());
}

#[test]
fn writing_into_missing_directory_fails() {
    let result = simulate(sample_inputs()).unwrap();
    let path = temp_file("no_such_dir").join("out.csv");
    assert!(write_csv_path(&path, &CsvHeader::english(), &result).is_err());
}

#[test]
fn default_file_name_uses_day_first_timestamp() {
    let now = Local.with_ymd_and_hms(2024, 3, 7, 9, 5, 2).single().unwrap();
    assert_eq!(
        default_file_name(&now),
        "resultados_circuito_rc_07-03-2024-09-05-02.csv"
    );
}
