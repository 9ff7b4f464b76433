use crate::cli::DataArgs;
use crate::render;
use convolens_core::{
    complexity_distribution, difficulty_analysis, follow_up_summary, intent_distribution,
    learning_path_distribution, path_intent_crosstab, session_analysis, QuestionRecord,
};

/// A single deterministic report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Sessions,
    Intents,
    Complexity,
    LearningPaths,
    PathIntents,
    FollowUps,
    Difficulty,
}

pub fn run(section: Section, data: &DataArgs) -> anyhow::Result<()> {
    let records = super::load_dataset(&data.file)?;
    println!("{}", build_section(section, &records, data.json)?);
    Ok(())
}

fn build_section(section: Section, records: &[QuestionRecord], json: bool) -> anyhow::Result<String> {
    let value = match section {
        Section::Sessions => {
            let report = session_analysis(records);
            if !json {
                return Ok(render::render_sessions(&report));
            }
            serde_json::to_value(report)?
        }
        Section::Intents => {
            let report = intent_distribution(records);
            if !json {
                return Ok(render::render_shares("Intents", &report));
            }
            serde_json::to_value(report)?
        }
        Section::Complexity => {
            let report = complexity_distribution(records);
            if !json {
                return Ok(render::render_shares("Complexity", &report));
            }
            serde_json::to_value(report)?
        }
        Section::LearningPaths => {
            let report = learning_path_distribution(records);
            if !json {
                return Ok(render::render_shares("Learning Paths", &report));
            }
            serde_json::to_value(report)?
        }
        Section::PathIntents => {
            let report = path_intent_crosstab(records);
            if !json {
                return Ok(render::render_crosstab(&report));
            }
            serde_json::to_value(report)?
        }
        Section::FollowUps => {
            let report = follow_up_summary(records);
            if !json {
                return Ok(render::render_follow_ups(&report));
            }
            // The rate is derived, so add it for JSON consumers
            let mut value = serde_json::to_value(report)?;
            value["rate"] = serde_json::json!(report.rate());
            value
        }
        Section::Difficulty => {
            let report = difficulty_analysis(records);
            if !json {
                return Ok(render::render_difficulty(&report));
            }
            serde_json::to_value(report)?
        }
    };
    Ok(serde_json::to_string_pretty(&value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<QuestionRecord> {
        vec![
            QuestionRecord::new("a")
                .with_learning_path("A")
                .with_follow_up(true),
            QuestionRecord::new("a").with_learning_path("none"),
            QuestionRecord::new("b").with_learning_path("B"),
            QuestionRecord::new("b")
                .with_learning_path("B")
                .with_follow_up("True"),
        ]
    }

    #[test]
    fn test_learning_paths_json() {
        let out = build_section(Section::LearningPaths, &sample_records(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["name"], "B");
        assert_eq!(value[0]["percentage"], 66.7);
    }

    #[test]
    fn test_follow_ups_json_includes_rate() {
        let out = build_section(Section::FollowUps, &sample_records(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["with_follow_up"], 2);
        assert_eq!(value["rate"], 50.0);
    }

    #[test]
    fn test_follow_ups_json_empty_rate_null() {
        let out = build_section(Section::FollowUps, &[], true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(value["rate"].is_null());
    }

    #[test]
    fn test_every_section_renders_text_on_empty_input() {
        for section in [
            Section::Sessions,
            Section::Intents,
            Section::Complexity,
            Section::LearningPaths,
            Section::PathIntents,
            Section::FollowUps,
            Section::Difficulty,
        ] {
            let out = build_section(section, &[], false).unwrap();
            assert!(!out.is_empty(), "{:?} rendered nothing", section);
            assert!(!out.contains("NaN"));
        }
    }
}
