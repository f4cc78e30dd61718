//! Crewmate system prompt catalog.
//!
//! `catalog` holds the prompt text and the accessors that wrap it in content
//! blocks. `config` and `errors` support the `crewmate` binary.

pub mod catalog;
pub mod config;
pub mod errors;

pub use catalog::{
    developer_prompt, formatted_prompt, main_assistant_text, policy_expert_prompt, simple_prompt,
    ContentBlock, PromptVariant,
};
pub use errors::CatalogError;
