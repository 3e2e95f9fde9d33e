use anyhow::{Context, Result};
use mentor_application::LearningAssistant;
use mentor_core::OperationResult;
use mentor_core::config::MentorConfig;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// One line of a script.
#[derive(Debug, Deserialize)]
struct ScriptLine {
    operation: String,
    #[serde(default)]
    args: Value,
}

pub async fn execute(script: &Path, session: &str, config: &MentorConfig, report: bool) -> Result<()> {
    let content = fs::read_to_string(script)
        .with_context(|| format!("Failed to read script {}", script.display()))?;

    let assistant = LearningAssistant::from_config(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let count = run_script(&assistant, session, &content, &mut out).await?;
    tracing::info!("[mentor run] {} operations against session {}", count, session);

    if report {
        let report = assistant.report(session).await?;
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    }

    Ok(())
}

/// Runs every non-empty line of `script`, writing one JSON result per line.
///
/// Lines that are not valid script lines produce an error result; the rest of
/// the script still runs.
pub async fn run_script<W: Write>(
    assistant: &LearningAssistant,
    session: &str,
    script: &str,
    out: &mut W,
) -> Result<usize> {
    let mut count = 0;
    for (index, line) in script.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let result = match serde_json::from_str::<ScriptLine>(line) {
            Ok(step) => assistant.invoke(session, &step.operation, step.args).await?,
            Err(e) => {
                tracing::warn!("[mentor run] Skipping line {}: {}", index + 1, e);
                OperationResult::error(
                    format!("Invalid script line {}: {}", index + 1, e),
                    assistant.dispatcher().context().timestamp(),
                )
            }
        };
        writeln!(out, "{}", serde_json::to_string(&result)?)?;
        count += 1;
    }
    Ok(count)
}
