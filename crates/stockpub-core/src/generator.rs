//! Subprocess invocation for the external report generator.
//!
//! The generator is a Python script (`stock_report.py`) living at the project
//! root. Invoked with the single argument `report` it writes
//! `reports/latest.html` and `reports/latest.md` relative to the root and
//! exits non-zero on failure. Its internals are its own business.

use std::path::Path;
use std::process::Command;

use crate::error::{PublishError, Result};
use crate::paths;

/// Mode selector passed to the generator: "produce today's report".
pub const REPORT_MODE: &str = "report";

/// The python interpreters we know how to invoke, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interpreter {
    Python3,
    Python,
}

impl Interpreter {
    pub fn name(&self) -> &'static str {
        match self {
            Interpreter::Python3 => "python3",
            Interpreter::Python => "python",
        }
    }
}

/// Detect the best available python interpreter.
/// Returns None if no interpreter is found.
pub fn detect_interpreter() -> Option<Interpreter> {
    if which::which("python3").is_ok() {
        return Some(Interpreter::Python3);
    }
    if which::which("python").is_ok() {
        return Some(Interpreter::Python);
    }
    None
}

/// Run the report generator in report mode and block until it exits.
///
/// Stdout and stderr are inherited so the generator's own diagnostics reach
/// the operator in real time. A non-zero exit status is fatal; the pipeline
/// has nothing to clean up because no copy has been attempted yet.
pub fn run_report(root: &Path) -> Result<()> {
    let script = paths::generator_script(root);
    if !script.is_file() {
        return Err(PublishError::GeneratorMissing(script));
    }

    let interpreter = detect_interpreter().ok_or(PublishError::NoInterpreter)?;
    tracing::debug!(
        interpreter = interpreter.name(),
        script = %script.display(),
        "running report generator"
    );

    let status = Command::new(interpreter.name())
        .arg(&script)
        .arg(REPORT_MODE)
        .current_dir(root)
        .status()
        .map_err(|e| PublishError::GeneratorSpawn(e.to_string()))?;

    if !status.success() {
        return Err(PublishError::GeneratorFailed {
            code: status.code().unwrap_or(1),
        });
    }
    Ok(())
}
