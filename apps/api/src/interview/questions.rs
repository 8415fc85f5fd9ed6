//! Question generator: one completion call per profile, parsed into an
//! ordered question list.

use tracing::{info, warn};

use crate::interview::prompts::{
    EMPTY_TECH_STACK_PLACEHOLDER, QUESTION_PROMPT_TEMPLATE, QUESTION_SAMPLING, QUESTION_SYSTEM,
};
use crate::llm_client::{ChatCompletion, LlmError};
use crate::models::message::Message;

/// Produces the question set for a tech stack. Never fails: an empty stack
/// yields a single placeholder (no remote call), and a remote failure yields a
/// single error-description entry the interview treats as one pseudo-question.
pub async fn generate_technical_questions(
    llm: &dyn ChatCompletion,
    tech_stack: &[String],
    count: usize,
) -> Vec<String> {
    if tech_stack.is_empty() {
        return vec![EMPTY_TECH_STACK_PLACEHOLDER.to_string()];
    }

    match request_questions(llm, tech_stack, count).await {
        Ok(questions) => {
            info!("Generated {} questions for [{}]", questions.len(), tech_stack.join(", "));
            questions
        }
        Err(e) => {
            warn!("Question generation failed: {e}");
            vec![format!("Error generating questions: {e}")]
        }
    }
}

async fn request_questions(
    llm: &dyn ChatCompletion,
    tech_stack: &[String],
    count: usize,
) -> Result<Vec<String>, LlmError> {
    let messages = [
        Message::system(QUESTION_SYSTEM),
        Message::user(build_question_prompt(tech_stack, count)),
    ];

    let raw = llm.complete(&messages, QUESTION_SAMPLING).await?;
    Ok(parse_questions(&raw))
}

fn build_question_prompt(tech_stack: &[String], count: usize) -> String {
    QUESTION_PROMPT_TEMPLATE
        .replace("{count}", &count.to_string())
        .replace("{tech_stack}", &tech_stack.join(", "))
}

/// Keeps only the numbered lines of a model reply, trimmed, in order.
/// Preamble and trailing notes rarely start with a digit, so they drop out.
/// Any Unicode numeric char counts, so non-Latin numbering is kept.
pub fn parse_questions(raw: &str) -> Vec<String> {
    raw.trim()
        .split('\n')
        .map(str::trim)
        .filter(|line| line.starts_with(char::is_numeric))
        .map(str::to_string)
        .collect()
}
