use super::load_output;
use anyhow::Result;
use console::style;
use gemini_webapi_core::ModelOutput;
use std::path::Path;

/// Handle the candidates command
pub fn handle_candidates_command(file: &Path) -> Result<()> {
    let output = load_output(file)?;
    println!("{}", render_candidates(&output));
    Ok(())
}

/// One line per candidate, the chosen one marked with `*`
pub fn render_candidates(output: &ModelOutput) -> String {
    if output.candidates().is_empty() {
        return style("No candidates").yellow().to_string();
    }

    output
        .candidates()
        .iter()
        .enumerate()
        .map(|(i, candidate)| {
            let marker = if usize::try_from(output.chosen()) == Ok(i) {
                "*"
            } else {
                " "
            };
            let preview = candidate.text().lines().next().unwrap_or_default();
            format!(
                "{marker} [{i}] {} {preview} ({} image(s))",
                style(candidate.rcid()).cyan(),
                candidate.images().len()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
