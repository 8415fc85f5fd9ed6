//! Answer checking: a pluggable, trait-based verdict on a single answer.
//!
//! Default: `KeywordAnswerChecker`, a shallow substring heuristic. It does
//! not grade meaning; keep the rules as they are.

/// Decides whether an answer to a question counts as correct.
///
/// Carried in `AppState` as `Arc<dyn AnswerChecker>`.
pub trait AnswerChecker: Send + Sync {
    fn check(&self, question: &str, answer: &str) -> bool;
}

/// Keyword rules, applied in order on lower-cased text; first match wins:
/// 1. question has "what is" and answer has "explain", "define" or "refers to"
/// 2. question has "how to" and answer has "method", "way" or "using"
/// 3. question has "difference between" and answer has "vs"
pub struct KeywordAnswerChecker;

const RULES: &[(&str, &[&str])] = &[
    ("what is", &["explain", "define", "refers to"]),
    ("how to", &["method", "way", "using"]),
    ("difference between", &["vs"]),
];

impl AnswerChecker for KeywordAnswerChecker {
    fn check(&self, question: &str, answer: &str) -> bool {
        let question = question.to_lowercase();
        let answer = answer.to_lowercase();

        RULES.iter().any(|(cue, keywords)| {
            question.contains(cue) && keywords.iter().any(|k| answer.contains(k))
        })
    }
}
