use crate::models::Narrative;

#[derive(Clone, Copy, PartialEq)]
enum Section {
    None,
    Insights,
    Recommendations,
}

/// Splits a model reply into insights and recommendations. Text that does
/// not follow the requested layout is kept only as `raw`.
pub fn parse_narrative(text: &str) -> Narrative {
    let mut narrative = Narrative {
        raw: text.trim().to_string(),
        ..Default::default()
    };
    let mut section = Section::None;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(header) = section_header(line) {
            section = header;
            continue;
        }

        let Some(item) = list_item(line) else {
            continue;
        };

        match section {
            Section::Insights => narrative.insights.push(item.to_string()),
            Section::Recommendations => narrative.recommendations.push(item.to_string()),
            Section::None => {}
        }
    }

    narrative
}

fn section_header(line: &str) -> Option<Section> {
    let cleaned: String = line
        .chars()
        .filter(|c| !matches!(c, '#' | '*' | ':' | '_'))
        .collect();
    match cleaned.trim().to_lowercase().as_str() {
        "insights" | "key insights" => Some(Section::Insights),
        "recommendations" | "tactical recommendations" => Some(Section::Recommendations),
        _ => None,
    }
}

/// Strips a `1.`, `2)`, `-`, `*` or `•` marker.
fn list_item(line: &str) -> Option<&str> {
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    let rest = if digits > 0 {
        line[digits..].strip_prefix(['.', ')'])?
    } else {
        line.strip_prefix(['-', '*', '•'])?
    };

    let item = rest.trim();
    if item.is_empty() {
        None
    } else {
        Some(item)
    }
}
