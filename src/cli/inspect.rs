use super::{OutputFormat, load_output};
use anyhow::{Context, Result};
use console::style;
use gemini_webapi_core::{DisplayConfig, ModelOutput};
use serde_json::json;
use std::path::Path;

/// Handle the inspect command
pub fn handle_inspect_command(
    file: &Path,
    chosen: Option<usize>,
    format: OutputFormat,
    display: &DisplayConfig,
) -> Result<()> {
    let mut output = load_output(file)?;
    if let Some(index) = chosen {
        output = output
            .choose(index)
            .with_context(|| format!("Cannot choose candidate {index}"))?;
    }

    let rendered = match format {
        OutputFormat::Text => render_text(&output, display)?,
        OutputFormat::Json => render_json(&output)?,
        OutputFormat::Debug => format!("{output:#?}"),
    };
    println!("{rendered}");
    Ok(())
}

/// Human-readable view of the chosen candidate
pub fn render_text(output: &ModelOutput, display: &DisplayConfig) -> Result<String> {
    let candidate = output
        .chosen_candidate()
        .context("Response has no chosen candidate")?;
    let mut lines = vec![candidate.text().to_string()];

    if display.show_thoughts
        && let Some(thoughts) = candidate.thoughts()
    {
        lines.push(String::new());
        lines.push(style("Thoughts:").bold().to_string());
        lines.push(style(thoughts).dim().to_string());
    }

    if display.show_images && !candidate.images().is_empty() {
        lines.push(String::new());
        lines.push(
            style(format!("Images ({}):", candidate.images().len()))
                .bold()
                .to_string(),
        );
        for (i, image) in candidate.images().iter().enumerate() {
            let marker = if image.is_generated() { " [generated]" } else { "" };
            lines.push(format!("  {}. {image}{marker}", i + 1));
        }
    }

    lines.push(String::new());
    lines.push(format!("{} {}", style("rcid:").cyan(), candidate.rcid()));
    if display.show_metadata {
        let tokens = output.continuation()?.to_tokens();
        lines.push(format!("{} {tokens:?}", style("metadata:").cyan()));
    }

    Ok(lines.join("\n"))
}

/// Chosen candidate plus the metadata needed to continue the chat
pub fn render_json(output: &ModelOutput) -> Result<String> {
    let candidate = output
        .chosen_candidate()
        .context("Response has no chosen candidate")?;
    let value = json!({
        "chosen": output.chosen(),
        "text": candidate.text(),
        "thoughts": candidate.thoughts(),
        "images": candidate.images(),
        "rcid": candidate.rcid(),
        "metadata": output.continuation()?.to_tokens(),
    });
    serde_json::to_string_pretty(&value).context("Failed to serialize response")
}

#[cfg(test)]
mod tests {
    use super::*;
    use gemini_webapi_core::{Candidate, Image};

    fn output() -> ModelOutput {
        ModelOutput::new(
            vec!["c1".into(), "r1".into()],
            vec![
                Candidate::new("rc_1", "Hello there")
                    .with_thoughts("greeting the user")
                    .with_image(Image::generated("https://x.io/a").with_title("drawing")),
            ],
        )
    }

    #[test]
    fn test_text_respects_display_config() {
        let full = render_text(&output(), &DisplayConfig::default()).unwrap();
        assert!(full.starts_with("Hello there"));
        assert!(full.contains("greeting the user"));
        assert!(full.contains("Image(title='drawing', url='https://x.io/a', alt='') [generated]"));
        assert!(full.contains("rc_1"));
        assert!(!full.contains("metadata:"));

        let minimal = DisplayConfig {
            show_thoughts: false,
            show_images: false,
            show_metadata: true,
        };
        let text = render_text(&output(), &minimal).unwrap();
        assert!(!text.contains("greeting the user"));
        assert!(!text.contains("drawing"));
        assert!(text.contains(r#"["c1", "r1", "rc_1"]"#));
    }

    #[test]
    fn test_json_contains_continuation() {
        let rendered = render_json(&output()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["text"], "Hello there");
        assert_eq!(value["metadata"], json!(["c1", "r1", "rc_1"]));
        assert_eq!(value["images"][0]["kind"], "generated");
    }

    #[test]
    fn test_invalid_index_is_reported() {
        let empty = ModelOutput::new(vec![], vec![]);
        let err = render_text(&empty, &DisplayConfig::default()).unwrap_err();
        assert!(err.to_string().contains("no chosen candidate"));
    }
}
