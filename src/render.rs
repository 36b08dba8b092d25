use crate::models::{AnalysisReport, NarrativeOutcome, RecentMatch, Side, TeamSummary};

pub const NARRATIVE_FALLBACK: &str = "AI analysis unavailable. Showing statistics only.";

struct MetricRow {
    label: &'static str,
    a: String,
    b: String,
}

fn metric_rows(a: &TeamSummary, b: &TeamSummary) -> Vec<MetricRow> {
    let metrics: [(&'static str, fn(&TeamSummary) -> String); 9] = [
        ("Matches Played", |s| s.matches_considered.to_string()),
        ("Wins / Draws / Losses", |s| {
            format!("{}/{}/{}", s.wins, s.draws, s.losses)
        }),
        ("Total Points", |s| s.points.to_string()),
        ("Goals Scored", |s| s.goals_for.to_string()),
        ("Goals Conceded", |s| s.goals_against.to_string()),
        ("Goal Difference", |s| format!("{:+}", s.goal_difference())),
        ("Avg Goals Scored", |s| format!("{:.2}", s.avg_goals_for)),
        ("Avg Goals Conceded", |s| format!("{:.2}", s.avg_goals_against)),
        ("Form (latest first)", |s| dash_if_empty(s.form_string())),
    ];

    metrics
        .into_iter()
        .map(|(label, value)| MetricRow {
            label,
            a: value(a),
            b: value(b),
        })
        .collect()
}

fn dash_if_empty(s: String) -> String {
    if s.is_empty() {
        "-".to_string()
    } else {
        s
    }
}

fn leader_line(report: &AnalysisReport) -> String {
    let c = &report.comparison;
    match c.form_leader() {
        Some(side) => format!(
            "{} lead on form by {} point(s); goal difference delta {:+}.",
            c.summary(side).team_name,
            c.points_delta.abs(),
            match side {
                Side::A => c.goal_diff_delta,
                Side::B => -c.goal_diff_delta,
            }
        ),
        None => format!(
            "Level on points; goal difference delta {:+} for {}.",
            c.goal_diff_delta, c.team_a.team_name
        ),
    }
}

fn recent_line(m: &RecentMatch) -> String {
    format!(
        "{} {} {} {}-{} ({})",
        m.date.format("%Y-%m-%d"),
        if m.home { "vs" } else { "at" },
        m.opponent,
        m.goals_for,
        m.goals_against,
        m.outcome
    )
}

pub fn format_text(report: &AnalysisReport) -> String {
    let c = &report.comparison;
    let mut output = String::new();

    output.push_str(&format!(
        "\n=== {} vs {} ===\n",
        c.team_a.team_name, c.team_b.team_name
    ));
    output.push_str(&format!(
        "{} / {} | last {} matches\n\n",
        report.competition_a, report.competition_b, report.match_count
    ));

    let rows = metric_rows(&c.team_a, &c.team_b);
    let width = rows.iter().map(|r| r.label.len()).max().unwrap_or(0);
    for row in &rows {
        output.push_str(&format!(
            "  {:<width$}  {:>8}  {:>8}\n",
            row.label,
            row.a,
            row.b,
            width = width
        ));
    }

    output.push_str(&format!("\n{}\n", leader_line(report)));

    for (summary, recent) in [
        (&c.team_a, &report.recent_matches_a),
        (&c.team_b, &report.recent_matches_b),
    ] {
        output.push_str(&format!("\nRecent matches, {}:\n", summary.team_name));
        if recent.is_empty() {
            output.push_str("  (none)\n");
        }
        for m in recent {
            output.push_str(&format!("  - {}\n", recent_line(m)));
        }
    }

    output.push_str("\nAI Analysis:\n");
    match &report.narrative {
        NarrativeOutcome::Generated(n) if n.is_structured() => {
            output.push_str("Insights:\n");
            for (i, item) in n.insights.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, item));
            }
            output.push_str("Recommendations:\n");
            for (i, item) in n.recommendations.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, item));
            }
        }
        NarrativeOutcome::Generated(n) => {
            output.push_str(&format!("{}\n", n.raw));
        }
        NarrativeOutcome::Unavailable { .. } => {
            output.push_str(&format!("{}\n", NARRATIVE_FALLBACK));
        }
    }

    output.push_str(&format!(
        "\nAnalyzed on: {}\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

pub fn format_markdown(report: &AnalysisReport) -> String {
    let c = &report.comparison;
    let mut output = String::new();

    output.push_str("## Football Match Analysis\n\n");
    output.push_str(&format!(
        "### {} vs {}\n\n",
        c.team_a.team_name, c.team_b.team_name
    ));
    output.push_str(&format!(
        "### Team Statistics (Last {} Matches)\n\n",
        report.match_count
    ));
    output.push_str(&format!(
        "| Metric | {} | {} |\n|--------|------------|------------|\n",
        c.team_a.team_name, c.team_b.team_name
    ));
    for row in metric_rows(&c.team_a, &c.team_b) {
        output.push_str(&format!("| {} | {} | {} |\n", row.label, row.a, row.b));
    }

    output.push_str(&format!("\n{}\n\n---\n\n### AI Analysis\n\n", leader_line(report)));

    match &report.narrative {
        NarrativeOutcome::Generated(n) if n.is_structured() => {
            output.push_str("**Insights**\n\n");
            for (i, item) in n.insights.iter().enumerate() {
                output.push_str(&format!("{}. {}\n", i + 1, item));
            }
            output.push_str("\n**Recommendations**\n\n");
            for (i, item) in n.recommendations.iter().enumerate() {
                output.push_str(&format!("{}. {}\n", i + 1, item));
            }
        }
        NarrativeOutcome::Generated(n) => {
            output.push_str(&format!("{}\n", n.raw));
        }
        NarrativeOutcome::Unavailable { .. } => {
            output.push_str(&format!("*{}*\n", NARRATIVE_FALLBACK));
        }
    }

    output.push_str(&format!(
        "\n---\n*Analyzed on {}*\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

/// HTML fragment for the output region of the form page.
pub fn format_html(report: &AnalysisReport) -> String {
    let c = &report.comparison;
    let a = escape_html(&c.team_a.team_name);
    let b = escape_html(&c.team_b.team_name);
    let mut output = String::new();

    output.push_str(&format!("<h2>{} vs {}</h2>\n", a, b));
    output.push_str(&format!(
        "<p class=\"meta\">{} / {} &middot; last {} matches</p>\n",
        escape_html(report.competition_a.display_name()),
        escape_html(report.competition_b.display_name()),
        report.match_count
    ));

    output.push_str(&format!(
        "<table>\n<thead><tr><th>Metric</th><th>{}</th><th>{}</th></tr></thead>\n<tbody>\n",
        a, b
    ));
    for row in metric_rows(&c.team_a, &c.team_b) {
        output.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            row.label,
            escape_html(&row.a),
            escape_html(&row.b)
        ));
    }
    output.push_str("</tbody>\n</table>\n");
    output.push_str(&format!("<p>{}</p>\n", escape_html(&leader_line(report))));

    for (summary, recent) in [
        (&c.team_a, &report.recent_matches_a),
        (&c.team_b, &report.recent_matches_b),
    ] {
        output.push_str(&format!(
            "<h3>Recent matches: {}</h3>\n<ul>\n",
            escape_html(&summary.team_name)
        ));
        for m in recent {
            output.push_str(&format!("<li>{}</li>\n", escape_html(&recent_line(m))));
        }
        output.push_str("</ul>\n");
    }

    output.push_str("<h3>AI Analysis</h3>\n");
    match &report.narrative {
        NarrativeOutcome::Generated(n) if n.is_structured() => {
            push_html_list(&mut output, "Insights", &n.insights);
            push_html_list(&mut output, "Recommendations", &n.recommendations);
        }
        NarrativeOutcome::Generated(n) => {
            output.push_str(&format!("<p>{}</p>\n", escape_html(&n.raw)));
        }
        NarrativeOutcome::Unavailable { .. } => {
            output.push_str(&format!(
                "<p class=\"notice\">{}</p>\n",
                escape_html(NARRATIVE_FALLBACK)
            ));
        }
    }

    output
}

fn push_html_list(output: &mut String, title: &str, items: &[String]) {
    output.push_str(&format!("<h4>{}</h4>\n<ol>\n", title));
    for item in items {
        output.push_str(&format!("<li>{}</li>\n", escape_html(item)));
    }
    output.push_str("</ol>\n");
}

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
