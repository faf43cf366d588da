//! Normalize command implementation.

use anyhow::Result;
use numnorm_core::TextNormalizer;
use serde::Serialize;
use text_normalizer::Normalizer;

use super::read_input;

/// JSON output of the normalize command.
#[derive(Debug, Serialize)]
struct NormalizeOutput<'a> {
    input: &'a str,
    normalized: &'a str,
}

/// Run the normalize command.
pub fn run(input: &str, json: bool) -> Result<()> {
    let text = read_input(input)?;

    let normalizer = Normalizer::new();
    println!("{}", render(&normalizer, &text, json)?);

    Ok(())
}

/// Normalize `text` and format it as plain text or a JSON object.
fn render(normalizer: &Normalizer, text: &str, json: bool) -> Result<String> {
    let normalized = normalizer.normalize(text)?;

    if json {
        let output = NormalizeOutput {
            input: text,
            normalized: &normalized,
        };
        return Ok(serde_json::to_string_pretty(&output)?);
    }

    Ok(normalized)
}
