//! JSON output of run results.

use std::path::Path;

use blendmask_diagnostics::{DiagnosticsOutput, to_json};
use tracing::info;

use crate::error::IoError;

/// Write `output` to `path` as pretty-printed JSON, creating missing parent
/// directories.
///
/// # Errors
///
/// Returns [`IoError::Write`] if serialization or any file-system operation
/// fails.
pub fn write_json(path: &Path, output: &DiagnosticsOutput) -> Result<(), IoError> {
    let write_err = |reason: String| IoError::Write {
        path: path.to_path_buf(),
        reason,
    };

    let json = to_json(output).map_err(|e| write_err(e.to_string()))?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| write_err(e.to_string()))?;
    }
    std::fs::write(path, json).map_err(|e| write_err(e.to_string()))?;

    info!(
        path = %path.display(),
        mode = %output.mode,
        n_periods = output.model.len(),
        "wrote diagnostics"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output() -> DiagnosticsOutput {
        DiagnosticsOutput {
            mode: "xxx".to_string(),
            diagnostic: "decadal_mean".to_string(),
            period_months: 120,
            start_year: 1850,
            n_months: 240,
            model: vec![-0.1, 0.1],
            reference: None,
            decadal_warming: 0.2,
            annual_warming: None,
        }
    }

    #[test]
    fn creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.json");
        write_json(&path, &output()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn unwritable_path_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be overwritten by a file.
        let err = write_json(dir.path(), &output()).unwrap_err();
        assert!(matches!(err, IoError::Write { .. }), "got {err:?}");
    }
}
