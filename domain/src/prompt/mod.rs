//! Prompt domain
//!
//! Builds the fast and deep prompts for a turn from the user's query.

mod template;

pub use template::PromptTemplate;
