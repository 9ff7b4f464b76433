#![allow(dead_code)]

use convolens_core::QuestionRecord;
use std::path::{Path, PathBuf};

pub const SAMPLE_CSV: &str = "\
session_id,question,user_intent,question_complexity,learning_path,has_follow_up_questions,has_difficulty,difficulty_type
1,How do I build an emergency fund?,problem_solving,beginner,budgeting,True,false,
1,Should I pay rent or save first?,decision_making,intermediate,budgeting,false,true,prioritization
1,thanks,greeting,,none,false,false,
2,What is compound interest?,knowledge_seeking,beginner,investing,true,false,
2,Which index fund is better for me?,decision_making,advanced,investing,True,True,comparison
3,I lost my job and cannot pay bills,crisis_management,advanced,null,false,true,emotional
4,Can you explain that again?,clarification, intermediate ,investing,false,false,
";

pub fn write_dataset(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// Records with the given number of questions per session
pub fn sessions_of(counts: &[usize]) -> Vec<QuestionRecord> {
    counts
        .iter()
        .enumerate()
        .flat_map(|(i, &n)| (0..n).map(move |_| QuestionRecord::new(format!("session-{}", i))))
        .collect()
}
