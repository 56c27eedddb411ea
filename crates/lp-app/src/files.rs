//! File loading and saving.

use crate::error::{AppError, AppResult};
use lp_matrix::MatrixSpec;
use std::path::Path;

/// File name of the source export.
pub const SOURCE_EXPORT: &str = "lp_solve.txt";

/// File name of the report export.
pub const REPORT_EXPORT: &str = "report.txt";

const SOURCE_EXTENSIONS: [&str; 2] = ["lp", "txt"];

/// Decode an uploaded source file. Only `.lp` and `.txt` names are taken.
pub fn decode_source(name: &str, bytes: &[u8]) -> AppResult<String> {
    let accepted = Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SOURCE_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        });
    if !accepted {
        return Err(AppError::UnsupportedFile {
            name: name.to_string(),
        });
    }

    String::from_utf8(bytes.to_vec()).map_err(|_| AppError::Decode {
        name: name.to_string(),
    })
}

/// Read a file from disk; returns its display name and raw bytes.
pub fn read_source_file(path: &Path) -> AppResult<(String, Vec<u8>)> {
    let bytes = std::fs::read(path).map_err(|e| AppError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok((name, bytes))
}

pub fn write_export(path: &Path, contents: &str) -> AppResult<()> {
    std::fs::write(path, contents).map_err(|e| AppError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load and validate a YAML matrix spec.
pub fn load_matrix_spec(path: &Path) -> AppResult<MatrixSpec> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let spec: MatrixSpec = serde_yaml::from_str(&content)?;
    spec.validate()?;
    Ok(spec)
}

pub fn save_matrix_spec(path: &Path, spec: &MatrixSpec) -> AppResult<()> {
    spec.validate()?;
    let content = serde_yaml::to_string(spec)?;
    std::fs::write(path, content).map_err(|e| AppError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
