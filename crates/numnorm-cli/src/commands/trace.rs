//! Trace command implementation.

use anyhow::Result;
use text_normalizer::Normalizer;

use super::read_input;

/// Run the trace command.
pub fn run(input: &str) -> Result<()> {
    let text = read_input(input)?;
    let normalizer = Normalizer::new();

    for line in render(&normalizer, &text)? {
        println!("{line}");
    }

    Ok(())
}

/// One line for the input, then one per stage in application order.
fn render(normalizer: &Normalizer, text: &str) -> Result<Vec<String>> {
    let mut lines = vec![format!("{:<16} {text}", "input")];
    for step in normalizer.trace(text)? {
        lines.push(format!("{:<16} {}", step.stage, step.text));
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_lists_stages_in_order() {
        let normalizer = Normalizer::new();
        let lines = render(&normalizer, "₽1,000").unwrap();

        let labels: Vec<&str> = lines
            .iter()
            .filter_map(|line| line.split_whitespace().next())
            .collect();
        assert_eq!(
            labels,
            ["input", "comma_grouping", "currency", "decimal_point", "ordinal", "cardinal"]
        );

        assert!(lines[0].ends_with(" ₽1,000"));
        assert!(lines[1].ends_with(" ₽1000"));
        assert!(lines[2].ends_with(" 1000 рубля"));
        assert!(lines[5].ends_with(" одна тысяча рубля"));
    }

    #[test]
    fn test_render_pads_stage_names() {
        let normalizer = Normalizer::new();
        let lines = render(&normalizer, "7").unwrap();
        assert_eq!(lines[0], format!("{:<16} 7", "input"));
        assert_eq!(lines.last().unwrap(), &format!("{:<16} семь", "cardinal"));
    }
}
