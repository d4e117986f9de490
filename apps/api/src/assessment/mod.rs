// Skill assessment: quiz generation, grading, and narrative reports.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod analyzer;
pub mod handlers;
pub mod prompts;
pub mod questions;
