//! Prompt helpers shared by the interactive commands

use anyhow::Result;

/// Ask a yes/no question; `yes` answers it with `true` without asking
pub(crate) fn confirm(prompt: impl std::fmt::Display, initial: bool, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }
    let answer = cliclack::confirm(prompt.to_string())
        .initial_value(initial)
        .interact()?;
    Ok(answer)
}

/// End the command with a "Cancelled." outro
pub(crate) fn cancelled() -> Result<()> {
    cliclack::outro_cancel("Cancelled.")?;
    Ok(())
}

/// Render aligned `label: value` rows for a cliclack note
pub(crate) fn details(rows: &[(&str, String)]) -> String {
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    rows.iter()
        .map(|(label, value)| format!("{:<width$}  {}", format!("{}:", label), value, width = width + 1))
        .collect::<Vec<_>>()
        .join("\n")
}
