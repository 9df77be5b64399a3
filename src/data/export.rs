//! CSV export of a simulation result.
//!
//! Layout: one header row, then one `time,voltage,current` row per sample.
//! Values use Rust's shortest round-trip `f64` formatting, so reading a file
//! back yields exactly the exported numbers.

use std::fmt::Display;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, TimeZone};

use crate::data::simulation::SimulationResult;

/// Prefix of the suggested export file name.
pub const FILE_PREFIX: &str = "resultados_circuito_rc_";
/// `DD-MM-YYYY-HH-MM-SS`
pub const FILE_TIMESTAMP_FORMAT: &str = "%d-%m-%Y-%H-%M-%S";

/// Column titles written in the header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvHeader {
    pub time: String,
    pub voltage: String,
    pub current: String,
}

impl CsvHeader {
    pub fn english() -> Self {
        Self {
            time: "Time (s)".to_string(),
            voltage: "Voltage (V)".to_string(),
            current: "Current (A)".to_string(),
        }
    }

    pub fn portuguese() -> Self {
        Self {
            time: "Tempo (s)".to_string(),
            voltage: "Tensão (V)".to_string(),
            current: "Corrente (A)".to_string(),
        }
    }
}

impl Default for CsvHeader {
    fn default() -> Self {
        Self::english()
    }
}

/// Default export file name for a save at `now`, e.g.
/// `resultados_circuito_rc_18-10-2026-14-03-59.csv`.
pub fn default_file_name<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("{FILE_PREFIX}{}.csv", now.format(FILE_TIMESTAMP_FORMAT))
}

/// Write `result` as CSV into `w`.
pub fn write_csv<W: Write>(
    mut w: W,
    header: &CsvHeader,
    result: &SimulationResult,
) -> std::io::Result<()> {
    writeln!(
        w,
        "{},{},{}",
        quote_field(&header.time),
        quote_field(&header.voltage),
        quote_field(&header.current)
    )?;
    for (t, v, i) in result.rows() {
        writeln!(w, "{t},{v},{i}")?;
    }
    w.flush()
}

/// Create (or truncate) `path` and write `result` into it.
pub fn write_csv_path<P: AsRef<Path>>(
    path: P,
    header: &CsvHeader,
    result: &SimulationResult,
) -> std::io::Result<()> {
    let f = std::fs::File::create(path)?;
    write_csv(BufWriter::new(f), header, result)
}

/// Series read back from an exported CSV file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CsvSeries {
    pub header: Vec<String>,
    pub time: Vec<f64>,
    pub voltage: Vec<f64>,
    pub current: Vec<f64>,
}

/// Parse a file produced by [`write_csv`].
pub fn read_csv<R: BufRead>(r: R) -> std::io::Result<CsvSeries> {
    let mut lines = r.lines();
    let header = match lines.next() {
        Some(line) => split_line(&line?),
        None => return Err(invalid_data("empty file, header row missing".to_string())),
    };
    if header.len() != 3 {
        return Err(invalid_data(format!(
            "expected 3 header columns, found {}",
            header.len()
        )));
    }
    let mut out = CsvSeries {
        header,
        ..Default::default()
    };
    for (idx, line) in lines.enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let row_no = idx + 2;
        let cols: Vec<&str> = line.split(',').collect();
        if cols.len() != 3 {
            return Err(invalid_data(format!(
                "row {row_no}: expected 3 columns, found {}",
                cols.len()
            )));
        }
        let parse = |s: &str| {
            s.trim()
                .parse::<f64>()
                .map_err(|e| invalid_data(format!("row {row_no}: {s:?}: {e}")))
        };
        out.time.push(parse(cols[0])?);
        out.voltage.push(parse(cols[1])?);
        out.current.push(parse(cols[2])?);
    }
    Ok(out)
}

pub fn read_csv_path<P: AsRef<Path>>(path: P) -> std::io::Result<CsvSeries> {
    let f = std::fs::File::open(path)?;
    read_csv(BufReader::new(f))
}

fn invalid_data(msg: String) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::InvalidData, msg)
}

fn quote_field(s: &str) -> String {
    if s.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Split one header line, honouring double-quoted fields.
fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut cur = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                cur.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut cur)),
            _ => cur.push(ch),
        }
    }
    fields.push(cur);
    fields
}
