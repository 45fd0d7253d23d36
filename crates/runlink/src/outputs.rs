//! Invocation outputs for the calling pipeline.
//!
//! When `$GITHUB_OUTPUT` names a file the outputs are appended there in
//! `name=value` form (the action-output convention); otherwise they go to
//! stdout in the same form.

use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::Path;

use anyhow::{Context as _, Result};
use runlink_core::InvocationResult;

/// Write the invocation's outputs. Absent values produce no lines.
pub fn write(result: &InvocationResult, output_file: Option<&Path>) -> Result<()> {
    let mut lines = Vec::new();
    if let Some(url) = &result.workflow_url {
        lines.push(format!("workflow-url={url}"));
    }
    if let Some(conclusion) = &result.conclusion {
        lines.push(format!("workflow-conclusion={conclusion}"));
    }

    match output_file {
        Some(path) => {
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open output file '{}'", path.display()))?;
            for line in &lines {
                writeln!(file, "{line}")?;
            }
        }
        None => {
            for line in &lines {
                println!("{line}");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use runlink_core::Conclusion;

    use super::*;

    fn result(url: Option<&str>, conclusion: Option<Conclusion>) -> InvocationResult {
        InvocationResult {
            workflow_url: url.map(String::from),
            conclusion,
            succeeded: true,
        }
    }

    #[test]
    fn writes_present_outputs_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("outputs");

        let full = result(
            Some("https://github.com/acme/widgets/actions/runs/7"),
            Some(Conclusion::Success),
        );
        write(&full, Some(&path)).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "workflow-url=https://github.com/acme/widgets/actions/runs/7\nworkflow-conclusion=success\n"
        );
    }

    #[test]
    fn appends_to_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("outputs");
        std::fs::write(&path, "existing=1\n").unwrap();

        write(&result(None, Some(Conclusion::Failure)), Some(&path)).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "existing=1\nworkflow-conclusion=failure\n");
    }

    #[test]
    fn absent_values_write_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("outputs");

        write(&result(None, None), Some(&path)).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "");
    }
}
