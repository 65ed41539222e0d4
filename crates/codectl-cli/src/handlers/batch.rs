//! Batch command handler.
//!
//! Reads JSON requests such as
//!
//! ```json
//! [
//!   {"action": "get_version"},
//!   {"action": "goto_file", "path": "src/main.rs", "line": 68, "character": 12}
//! ]
//! ```
//!
//! from a file or stdin, runs them in order and prints one JSON outcome per
//! line. The first failing request stops the batch.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use codectl_core::{Editor, EditorRequest, Outcome};
use serde_json::Value;
use tracing::debug;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the batch command.
pub fn execute(ctx: &CliContext, source: &Path) -> Result<()> {
    let text = read_source(source)?;
    let requests = parse_requests(&text)?;
    run_requests(ctx.editor(), &requests, |outcome| {
        println!("{}", serde_json::to_string(outcome)?);
        Ok(())
    })
}

/// Decode one request object or an array of them.
///
/// # Errors
///
/// `CliError::Data` naming the 1-based position of the first bad request.
pub fn parse_requests(text: &str) -> Result<Vec<EditorRequest>, CliError> {
    let document: Value = serde_json::from_str(text)
        .map_err(|e| CliError::Data(format!("batch is not valid JSON: {e}")))?;

    let items = match document {
        Value::Array(items) => items,
        single => vec![single],
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item)
                .map_err(|e| CliError::Data(format!("request {}: {e}", index + 1)))
        })
        .collect()
}

/// Run `requests` in order, handing each outcome to `emit` as it completes.
///
/// # Errors
///
/// The first request error, with the request's position and action as
/// context. Later requests are not run.
pub fn run_requests(
    editor: &Editor,
    requests: &[EditorRequest],
    mut emit: impl FnMut(&Outcome) -> Result<()>,
) -> Result<()> {
    for (index, request) in requests.iter().enumerate() {
        debug!(position = index + 1, action = request.action(), "Running request");
        let outcome = request
            .execute(editor)
            .with_context(|| format!("request {} ({})", index + 1, request.action()))?;
        emit(&outcome)?;
    }
    Ok(())
}

fn read_source(source: &Path) -> Result<String, CliError> {
    if source == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    std::fs::read_to_string(source)
        .map_err(|e| CliError::Io(format!("{}: {e}", source.display())))
}
