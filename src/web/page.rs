use crate::models::{Competition, MatchCount};
use crate::render::escape_html;

/// Values echoed back into the form after a submission.
#[derive(Debug, Clone, Default)]
pub struct FormValues {
    pub competition_a: Option<Competition>,
    pub team_a: Option<String>,
    pub competition_b: Option<Competition>,
    pub team_b: Option<String>,
    pub match_count: MatchCount,
}

/// Content of the output region.
pub enum Output {
    Placeholder,
    Report(String),
    Error(String),
}

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Football Match Analysis</title>
<style>
body { font-family: system-ui, sans-serif; max-width: 56rem; margin: 2rem auto; padding: 0 1rem; }
fieldset { margin-bottom: 1rem; }
label { margin-right: 1rem; }
table { border-collapse: collapse; margin: 1rem 0; }
td, th { border: 1px solid #ccc; padding: 0.3rem 0.6rem; text-align: left; }
.error { color: #a00; font-weight: bold; }
.notice { color: #775; font-style: italic; }
</style>
</head>
<body>
<h1>Football Match Analysis</h1>
<p>Compare the recent form of two teams using data from football-data.org.</p>
<form method="post" action="/analyze">
<fieldset>
<legend>Team A</legend>
<label>League <select name="competition_a" data-team-select="team_a">
<option value="">Select a league</option>
__COMPETITIONS_A__
</select></label>
<label>Team <select name="team_a" id="team_a" data-selected="__TEAM_A__">
<option value="">Select a league first</option>
</select></label>
</fieldset>
<fieldset>
<legend>Team B</legend>
<label>League <select name="competition_b" data-team-select="team_b">
<option value="">Select a league</option>
__COMPETITIONS_B__
</select></label>
<label>Team <select name="team_b" id="team_b" data-selected="__TEAM_B__">
<option value="">Select a league first</option>
</select></label>
</fieldset>
<label>Number of recent matches to analyze
<input type="number" name="match_count" min="__MIN__" max="__MAX__" step="1" value="__COUNT__">
</label>
<button type="submit">Analyze Match</button>
</form>
<h2>Analysis Report</h2>
<section id="output">
__OUTPUT__
</section>
<script>
async function loadTeams(league, select) {
  select.innerHTML = '<option value="">Loading...</option>';
  if (!league.value) {
    select.innerHTML = '<option value="">Select a league first</option>';
    return;
  }
  const res = await fetch('/api/competitions/' + encodeURIComponent(league.value) + '/teams');
  const body = await res.json();
  if (!res.ok) {
    select.innerHTML = '';
    const opt = document.createElement('option');
    opt.value = '';
    opt.textContent = 'Error: ' + body.error;
    select.appendChild(opt);
    return;
  }
  select.innerHTML = '<option value="">Select a team</option>';
  for (const team of body.data) {
    const opt = document.createElement('option');
    opt.value = team.id;
    opt.textContent = team.name;
    if (String(team.id) === select.dataset.selected) opt.selected = true;
    select.appendChild(opt);
  }
}
for (const league of document.querySelectorAll('[data-team-select]')) {
  const select = document.getElementById(league.dataset.teamSelect);
  league.addEventListener('change', () => loadTeams(league, select));
  if (league.value) loadTeams(league, select);
}
</script>
</body>
</html>
"#;

fn competition_options(selected: Option<Competition>) -> String {
    Competition::all()
        .iter()
        .map(|c| {
            format!(
                "<option value=\"{}\"{}>{}</option>",
                c.code(),
                if Some(*c) == selected { " selected" } else { "" },
                escape_html(c.display_name())
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_page(values: &FormValues, output: &Output) -> String {
    let output_html = match output {
        Output::Placeholder => {
            "<p><em>Select leagues and teams, then click 'Analyze Match'.</em></p>".to_string()
        }
        Output::Report(fragment) => fragment.clone(),
        Output::Error(message) => format!("<p class=\"error\">Error: {}</p>", escape_html(message)),
    };

    let competitions_a = competition_options(values.competition_a);
    let competitions_b = competition_options(values.competition_b);
    let team_a = escape_html(values.team_a.as_deref().unwrap_or_default());
    let team_b = escape_html(values.team_b.as_deref().unwrap_or_default());
    let min = MatchCount::MIN.to_string();
    let max = MatchCount::MAX.to_string();
    let count = values.match_count.to_string();

    fill(
        PAGE_TEMPLATE,
        &[
            ("__COMPETITIONS_A__", competitions_a.as_str()),
            ("__COMPETITIONS_B__", competitions_b.as_str()),
            ("__TEAM_A__", team_a.as_str()),
            ("__TEAM_B__", team_b.as_str()),
            ("__MIN__", min.as_str()),
            ("__MAX__", max.as_str()),
            ("__COUNT__", count.as_str()),
            ("__OUTPUT__", output_html.as_str()),
        ],
    )
}

/// Substitutes placeholders in one pass; inserted values are never rescanned.
fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("__") {
        let tail = &rest[start..];
        match vars.iter().find(|(key, _)| tail.starts_with(key)) {
            Some((key, value)) => {
                out.push_str(&rest[..start]);
                out.push_str(value);
                rest = &tail[key.len()..];
            }
            None => {
                out.push_str(&rest[..start + 2]);
                rest = &rest[start + 2..];
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_lists_all_competitions() {
        let html = render_page(&FormValues::default(), &Output::Placeholder);

        for c in Competition::all() {
            assert!(html.contains(&format!("value=\"{}\"", c.code())));
        }
        assert!(html.contains("min=\"3\" max=\"10\""));
        assert!(html.contains("value=\"5\""));
        assert!(html.contains("Analyze Match"));
    }

    #[test]
    fn test_page_keeps_selection_and_escapes_errors() {
        let values = FormValues {
            competition_a: Some(Competition::SerieA),
            team_a: Some("109".to_string()),
            ..Default::default()
        };

        let html = render_page(&values, &Output::Error("bad <input>".to_string()));

        assert!(html.contains("<option value=\"SA\" selected>"));
        assert!(html.contains("data-selected=\"109\""));
        assert!(html.contains("Error: bad &lt;input&gt;"));
    }

    #[test]
    fn test_placeholder_text_in_team_is_kept_literally() {
        let values = FormValues {
            team_a: Some("__OUTPUT__".to_string()),
            team_b: Some("__COUNT__".to_string()),
            ..Default::default()
        };

        let html = render_page(&values, &Output::Error("upstream down".to_string()));

        assert!(html.contains("data-selected=\"__OUTPUT__\""));
        assert!(html.contains("data-selected=\"__COUNT__\""));
        assert_eq!(html.matches("Error: upstream down").count(), 1);
    }
}
