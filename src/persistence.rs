//! Remember the last submitted parameter form between runs, as JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::inputs::ParameterForm;
use crate::error::{Result, SimError};

/// Serializable snapshot of the parameter form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormStateSerde {
    pub form: ParameterForm,
    /// Local time of the save, RFC 3339.
    pub saved_at: Option<String>,
}

impl FormStateSerde {
    pub fn capture(form: &ParameterForm) -> Self {
        Self {
            form: form.clone(),
            saved_at: Some(chrono::Local::now().to_rfc3339()),
        }
    }
}

// ---------- Public API ----------

/// Serialize the form state as pretty JSON.
pub fn state_to_json(state: &FormStateSerde) -> Result<String> {
    serde_json::to_string_pretty(state).map_err(|e| SimError::Config(e.to_string()))
}

/// Deserialize the form state from JSON.
pub fn state_from_json(json: &str) -> Result<FormStateSerde> {
    serde_json::from_str(json).map_err(|e| SimError::Config(e.to_string()))
}

/// Save `form` to a JSON file at `path`.
pub fn save_form_to_path(form: &ParameterForm, path: &Path) -> Result<()> {
    let txt = state_to_json(&FormStateSerde::capture(form))?;
    std::fs::write(path, txt).map_err(|e| SimError::Config(format!("{}: {e}", path.display())))
}

/// Load the form saved by [`save_form_to_path`].
pub fn load_form_from_path(path: &Path) -> Result<ParameterForm> {
    let txt = std::fs::read_to_string(path)
        .map_err(|e| SimError::Config(format!("{}: {e}", path.display())))?;
    Ok(state_from_json(&txt)?.form)
}
