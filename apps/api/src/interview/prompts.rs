// Prompt templates and fixed user-facing copy for the screening flow.

use crate::llm_client::SamplingParams;

/// System prompt priming the model as a question generator.
pub const QUESTION_SYSTEM: &str = "You are a technical recruiter generating interview questions";

/// Question prompt template. Replace `{count}` and `{tech_stack}` before sending.
pub const QUESTION_PROMPT_TEMPLATE: &str = "Generate {count} technical interview questions \
    for a candidate with expertise in the following technologies: {tech_stack}. \
    Each question should be concise and focus on a specific technical concept or \
    problem-solving scenario related to these technologies.";

pub const QUESTION_SAMPLING: SamplingParams = SamplingParams {
    temperature: 0.7,
    top_p: 0.9,
    max_tokens: 500,
};

pub const CHAT_SAMPLING: SamplingParams = SamplingParams {
    temperature: 0.7,
    top_p: 0.9,
    max_tokens: 1024,
};

/// Returned in place of questions when no technologies were declared.
pub const EMPTY_TECH_STACK_PLACEHOLDER: &str =
    "Please specify your tech stack to generate technical questions.";

pub const CHAT_FALLBACK: &str = "I'm sorry, I encountered an error. Please try again later.";

pub const CLOSING_MESSAGE: &str =
    "Thank you for your time! We'll review your application and get back to you soon.";

pub const SUBMITTED_NOTICE: &str = "Thank you! Your information has been submitted.";
pub const CORRECT_NOTICE: &str = "Correct!";
pub const INCORRECT_NOTICE: &str = "That's not quite right.";
pub const COMPLETED_NOTICE: &str = "Congratulations! You've answered all the technical questions.";

pub fn greeting(full_name: &str) -> String {
    format!("Welcome, {full_name}. Let's start with some technical questions.")
}
