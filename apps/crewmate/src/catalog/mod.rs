//! Prompt catalog: the system prompts handed to the model, in the
//! content-block shape its `system` field expects.
//!
//! Every accessor is total and side-effect free. The text lives in
//! [`prompts`] as compile-time constants.

use serde::{Deserialize, Serialize};

pub mod prompts;
pub mod variant;

pub use variant::PromptVariant;

use prompts::{
    DEVELOPER_CONTEXT_SUFFIX, MAIN_ASSISTANT_PROMPT, POLICY_CONTEXT_SUFFIX, SIMPLE_PROMPT,
};

/// A single `{"text": "..."}` entry of a system prompt.
/// Serializes with `text` as its only key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub text: String,
}

impl ContentBlock {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Raw text of the main assistant prompt.
pub fn main_assistant_text() -> &'static str {
    MAIN_ASSISTANT_PROMPT
}

/// The main assistant prompt as content blocks.
pub fn formatted_prompt() -> Vec<ContentBlock> {
    vec![ContentBlock::new(main_assistant_text())]
}

/// Plain-conversation prompt without search-tool instructions.
pub fn simple_prompt() -> Vec<ContentBlock> {
    vec![ContentBlock::new(SIMPLE_PROMPT)]
}

/// Main prompt plus the developer-context suffix.
pub fn developer_prompt() -> Vec<ContentBlock> {
    vec![ContentBlock::new(
        [main_assistant_text(), DEVELOPER_CONTEXT_SUFFIX].concat(),
    )]
}

/// Main prompt plus the policy-context suffix.
pub fn policy_expert_prompt() -> Vec<ContentBlock> {
    vec![ContentBlock::new(
        [main_assistant_text(), POLICY_CONTEXT_SUFFIX].concat(),
    )]
}
