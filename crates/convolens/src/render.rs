//! Plain-text rendering of reports

use convolens_core::{
    CategoryShare, Dashboard, DifficultyAnalysis, ExampleSelection, FollowUpSummary,
    PathIntentRow, SessionAnalysis, Summary,
};

const NOT_AVAILABLE: &str = "n/a";

fn heading(title: &str) -> String {
    format!("{}\n{}", title, "-".repeat(title.chars().count()))
}

pub fn fmt_rate(rate: Option<f64>) -> String {
    rate.map(|r| format!("{:.1}%", r))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn fmt_median(median: Option<f64>) -> String {
    median
        .map(|m| format!("{:.2}", m))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn render_summary(summary: &Summary) -> String {
    format!(
        "{}\n\
         Questions: {}\nSessions: {}\n\
         Median questions/session: {}\n\
         Follow-up rate: {}\nDifficulty rate: {}",
        heading("Summary"),
        summary.total_questions,
        summary.total_sessions,
        fmt_median(summary.median_questions_per_session),
        fmt_rate(summary.follow_up_rate),
        fmt_rate(summary.difficulty_rate),
    )
}

pub fn render_sessions(analysis: &SessionAnalysis) -> String {
    let mut lines = vec![
        heading("Sessions"),
        format!("Total sessions: {}", analysis.total_sessions),
        format!(
            "Median questions/session: {}",
            fmt_median(analysis.median_questions)
        ),
    ];
    if !analysis.distribution.is_empty() {
        lines.push("Questions per session:".to_string());
        for bucket in &analysis.distribution {
            lines.push(format!(
                "  {:>3} question(s): {} session(s)",
                bucket.questions, bucket.sessions
            ));
        }
    }
    lines.join("\n")
}

pub fn render_shares(title: &str, shares: &[CategoryShare]) -> String {
    if shares.is_empty() {
        return format!("{}\n  (no data)", heading(title));
    }
    let width = shares
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(0);
    let rows: Vec<String> = shares
        .iter()
        .map(|s| {
            format!(
                "  {:<width$}  {:>5}  {:>5.1}%",
                s.name,
                s.count,
                s.percentage,
                width = width
            )
        })
        .collect();
    format!("{}\n{}", heading(title), rows.join("\n"))
}

pub fn render_crosstab(rows: &[PathIntentRow]) -> String {
    let title = "Learning Path x Intent";
    if rows.is_empty() {
        return format!("{}\n  (no data)", heading(title));
    }
    let lines: Vec<String> = rows
        .iter()
        .map(|r| {
            format!(
                "  {} — {} questions, mostly {} ({}, {:.1}%)",
                r.path, r.total, r.dominant_intent, r.dominant_count, r.dominant_percentage
            )
        })
        .collect();
    format!("{}\n{}", heading(title), lines.join("\n"))
}

pub fn render_follow_ups(summary: &FollowUpSummary) -> String {
    format!(
        "{}\n\
         With follow-up: {}\nWithout follow-up: {}\nFollow-up rate: {}",
        heading("Follow-ups"),
        summary.with_follow_up,
        summary.without_follow_up,
        fmt_rate(summary.rate()),
    )
}

pub fn render_difficulty(analysis: &DifficultyAnalysis) -> String {
    let mut lines = vec![
        heading("Difficulty"),
        format!(
            "Sessions with difficulty: {}/{} ({})",
            analysis.sessions_with_difficulty.len(),
            analysis.total_sessions,
            fmt_rate(analysis.rate)
        ),
    ];
    if !analysis.types.is_empty() {
        lines.push("Difficulty types:".to_string());
        for entry in &analysis.types {
            lines.push(format!("  {}: {}", entry.name, entry.count));
        }
    }
    lines.join("\n")
}

pub fn render_examples(selection: &ExampleSelection) -> String {
    let mut lines = vec![heading("Example Questions")];
    for example in selection.by_intent.iter().chain(&selection.by_complexity) {
        lines.push(format!("  [{}] {}", example.category, example.question));
    }
    lines.join("\n")
}

pub fn render_dashboard(dashboard: &Dashboard) -> String {
    let sections = [
        format!(
            "Conversation Analytics\n======================\nGenerated: {}",
            dashboard.generated_at.format("%Y-%m-%d %H:%M UTC")
        ),
        render_summary(&dashboard.summary),
        render_sessions(&dashboard.sessions),
        render_shares("Intents", &dashboard.intents),
        render_shares("Complexity", &dashboard.complexity),
        render_shares("Learning Paths", &dashboard.learning_paths),
        render_crosstab(&dashboard.path_intents),
        render_follow_ups(&dashboard.follow_ups),
        render_difficulty(&dashboard.difficulty),
        render_examples(&dashboard.examples),
    ];
    sections.join("\n\n")
}
