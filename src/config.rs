//! Application configuration: window chrome, language, plot colors and the
//! initial contents of the parameter form.
//!
//! The whole config round-trips through JSON; every field has a default so a
//! partial file is enough.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::data::export::CsvHeader;
use crate::data::inputs::ParameterForm;
use crate::error::{Result, SimError};

// ─────────────────────────────────────────────────────────────────────────────
// Language / labels
// ─────────────────────────────────────────────────────────────────────────────

/// UI and export language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Pt,
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "pt" | "pt-br" | "portuguese" => Ok(Language::Pt),
            other => Err(format!("unknown language {other:?} (expected en or pt)")),
        }
    }
}

impl Language {
    pub fn labels(self) -> Labels {
        match self {
            Language::En => Labels::english(),
            Language::Pt => Labels::portuguese(),
        }
    }
}

/// Every user-visible string of the application.
#[derive(Clone, Debug, PartialEq)]
pub struct Labels {
    pub resistance: &'static str,
    pub capacitance: &'static str,
    pub v0: &'static str,
    pub t_final: &'static str,
    pub step: &'static str,
    pub generate: &'static str,
    pub save: &'static str,
    pub save_dialog_title: &'static str,
    pub csv_filter: &'static str,
    pub idle_hint: &'static str,
    pub generated: &'static str,
    pub saved: &'static str,
    pub error_title: &'static str,
    pub dismiss: &'static str,
    pub plot_title: &'static str,
    pub x_axis: &'static str,
    pub y_axis: &'static str,
    pub voltage_series: &'static str,
    pub current_series: &'static str,
    pub time_constant: &'static str,
    pub csv: CsvHeader,
}

impl Labels {
    pub fn english() -> Self {
        Self {
            resistance: "Resistance (R) in ohms:",
            capacitance: "Capacitance (C) in farads:",
            v0: "Initial voltage (V0) in volts:",
            t_final: "Final time in seconds:",
            step: "Time step in seconds:",
            generate: "Generate plot",
            save: "Save results",
            save_dialog_title: "Save results",
            csv_filter: "CSV Files",
            idle_hint: "Generate the plot before saving the results",
            generated: "Simulation complete",
            saved: "File saved successfully",
            error_title: "Error",
            dismiss: "OK",
            plot_title: "RC circuit transient response",
            x_axis: "Time (s)",
            y_axis: "Amplitude",
            voltage_series: "Voltage (V)",
            current_series: "Current (A)",
            time_constant: "Time constant τ = R·C",
            csv: CsvHeader::english(),
        }
    }

    pub fn portuguese() -> Self {
        Self {
            resistance: "Resistência (R) em Ohms:",
            capacitance: "Capacitância (C) em Farads:",
            v0: "Tensão Inicial (V0) em Volts:",
            t_final: "Tempo final em segundos:",
            step: "Passo de tempo em segundos:",
            generate: "Gerar gráfico",
            save: "Salvar resultados",
            save_dialog_title: "Salvar resultados",
            csv_filter: "Arquivos CSV",
            idle_hint: "Gere o gráfico antes de poder ter acesso aos resultados",
            generated: "Simulação concluída",
            saved: "Arquivo salvo com sucesso",
            error_title: "Erro",
            dismiss: "OK",
            plot_title: "Resposta transitória do circuito RC",
            x_axis: "Tempo (s)",
            y_axis: "Amplitude",
            voltage_series: "Tensão (V)",
            current_series: "Corrente (A)",
            time_constant: "Constante de tempo τ = R·C",
            csv: CsvHeader::portuguese(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// RcAppConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration.
///
/// | Field           | Purpose |
/// |-----------------|---------|
/// | `title`         | Native window title |
/// | `window_size`   | Initial inner size in points |
/// | `language`      | Labels in the UI and the CSV header |
/// | `voltage_color` | RGBA of the voltage trace |
/// | `current_color` | RGBA of the current trace |
/// | `defaults`      | Initial text of the parameter form |
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RcAppConfig {
    pub title: String,
    pub window_size: [f32; 2],
    pub language: Language,
    pub voltage_color: [u8; 4],
    pub current_color: [u8; 4],
    pub defaults: ParameterForm,
}

impl Default for RcAppConfig {
    fn default() -> Self {
        Self {
            title: "RC circuit simulator".to_string(),
            window_size: [900.0, 900.0],
            language: Language::En,
            voltage_color: [0, 0, 255, 255],
            current_color: [255, 0, 0, 255],
            defaults: ParameterForm::default(),
        }
    }
}

impl RcAppConfig {
    pub fn labels(&self) -> Labels {
        self.language.labels()
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| SimError::Config(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| SimError::Config(e.to_string()))
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let txt = self.to_json()?;
        std::fs::write(path, txt)
            .map_err(|e| SimError::Config(format!("{}: {e}", path.display())))
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let txt = std::fs::read_to_string(path)
            .map_err(|e| SimError::Config(format!("{}: {e}", path.display())))?;
        let cfg = Self::from_json(&txt)?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(cfg)
    }

    /// Load `path` if given, falling back to defaults (with a warning) when the
    /// file is missing or malformed.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path {
            Some(p) => Self::load_from_path(p).unwrap_or_else(|e| {
                log::warn!("{e}; using default configuration");
                Self::default()
            }),
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let cfg = RcAppConfig::from_json(r#"{ "language": "pt" }"#).unwrap();
        assert_eq!(cfg.language, Language::Pt);
        assert_eq!(cfg.title, RcAppConfig::default().title);
        assert_eq!(cfg.labels().csv, CsvHeader::portuguese());
    }

    #[test]
    fn language_from_str() {
        assert_eq!("EN".parse::<Language>().unwrap(), Language::En);
        assert_eq!("pt-br".parse::<Language>().unwrap(), Language::Pt);
        assert!("fr".parse::<Language>().is_err());
    }
}
