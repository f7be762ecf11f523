// Email generation: prompt formatting, the built-in catalog, and the service
// gluing them to the LLM client. All model calls go through llm_client — no
// direct OpenAI calls here.

pub mod catalog;
pub mod handlers;
pub mod prompts;
pub mod service;
