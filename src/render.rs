//! Plain-text rendering of session state for the terminal.

use std::fmt::Write;

use crate::analysis::{AnalysisResult, ToneId};
use crate::session::SessionView;

/// Render whatever the view currently holds.
pub fn render_view(view: &SessionView) -> String {
    if view.loading {
        return "Analyzing...\n".to_string();
    }
    if let Some(error) = &view.error {
        return format!("Error: {}\n", error);
    }
    match &view.result {
        Some(result) => render_result(result),
        None => "Ready to analyze\n".to_string(),
    }
}

pub fn render_result(result: &AnalysisResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Moral of the Story");
    let _ = writeln!(out, "{}", indent(&result.moral));

    let _ = writeln!(out);
    let _ = writeln!(out, "Key Phrases ({} extracted)", result.keywords.len());
    if !result.keywords.is_empty() {
        let _ = writeln!(out, "  {}", result.keywords.join(", "));
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Tone Analysis");
    let _ = writeln!(
        out,
        "  Original tone: {} (confidence {})",
        result.original_tone,
        result.confidence_percent()
    );
    if let Some(target) = &result.target_tone {
        let _ = writeln!(out, "  Target tone:   {}", target);
    }

    if let Some(text) = &result.transformed_text {
        let _ = writeln!(out);
        let _ = writeln!(out, "Transformed Text");
        let _ = writeln!(out, "{}", indent(text));
    }

    out
}

/// One line per tone: identifier, label, description.
pub fn render_tones() -> String {
    let mut out = String::new();
    for tone in ToneId::ALL {
        let _ = writeln!(
            out,
            "{:<13} {:<13} {}",
            tone.as_str(),
            tone.label(),
            tone.description()
        );
    }
    out
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("  {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}
