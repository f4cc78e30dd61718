//! Prompt variant selection: maps a conversation context to the catalog
//! accessor that serves it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::{
    developer_prompt, formatted_prompt, policy_expert_prompt, simple_prompt, ContentBlock,
};
use crate::errors::CatalogError;

const ENTERPRISE_PERSONA: &str = "Crewmate Vanguard Enterprise AI Assistant";
const SIMPLE_PERSONA: &str = "Crewmate";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptVariant {
    /// Knowledge-base assistant with the full formatting contract.
    #[default]
    Main,
    /// Plain conversation, no search tool.
    Simple,
    Developer,
    PolicyExpert,
}

impl PromptVariant {
    pub const ALL: [PromptVariant; 4] = [
        PromptVariant::Main,
        PromptVariant::Simple,
        PromptVariant::Developer,
        PromptVariant::PolicyExpert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PromptVariant::Main => "main",
            PromptVariant::Simple => "simple",
            PromptVariant::Developer => "developer",
            PromptVariant::PolicyExpert => "policy_expert",
        }
    }

    /// The name the model introduces itself with under this variant.
    pub fn persona(&self) -> &'static str {
        match self {
            PromptVariant::Simple => SIMPLE_PERSONA,
            PromptVariant::Main | PromptVariant::Developer | PromptVariant::PolicyExpert => {
                ENTERPRISE_PERSONA
            }
        }
    }

    /// System prompt content blocks for this variant.
    pub fn system_blocks(&self) -> Vec<ContentBlock> {
        match self {
            PromptVariant::Main => formatted_prompt(),
            PromptVariant::Simple => simple_prompt(),
            PromptVariant::Developer => developer_prompt(),
            PromptVariant::PolicyExpert => policy_expert_prompt(),
        }
    }
}

impl fmt::Display for PromptVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PromptVariant {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "main" | "default" | "formatted" | "crew" => Ok(PromptVariant::Main),
            "simple" => Ok(PromptVariant::Simple),
            "developer" | "dev" => Ok(PromptVariant::Developer),
            "policy_expert" | "policy-expert" | "policyexpert" | "policy" => {
                Ok(PromptVariant::PolicyExpert)
            }
            _ => Err(CatalogError::UnknownVariant(s.to_string())),
        }
    }
}
