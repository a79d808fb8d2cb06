//! Keyword-matched canned answers.
//!
//! [`AnswerResolver`] is the seam for swapping the matching strategy; the
//! built-in [`KeywordResolver`] scans an ordered template list and falls
//! back to echoing the question.

use tracing::debug;

use crate::models::AnswerTemplate;

/// Maps a free-text question to an answer. Total: never fails.
pub trait AnswerResolver: Send + Sync {
    fn resolve(&self, question: &str) -> String;
}

/// First-match keyword resolver over a fixed, ordered template list.
#[derive(Debug, Clone)]
pub struct KeywordResolver {
    templates: Vec<AnswerTemplate>,
}

impl KeywordResolver {
    pub fn new(templates: Vec<AnswerTemplate>) -> Self {
        Self { templates }
    }

    pub fn templates(&self) -> &[AnswerTemplate] {
        &self.templates
    }
}

impl Default for KeywordResolver {
    fn default() -> Self {
        Self::new(default_templates())
    }
}

impl AnswerResolver for KeywordResolver {
    fn resolve(&self, question: &str) -> String {
        let normalized = question.to_lowercase();
        match self.templates.iter().position(|t| t.matches(&normalized)) {
            Some(idx) => {
                debug!(template = idx, "answer template matched");
                self.templates[idx].answer.clone()
            }
            None => {
                debug!("no answer template matched, using fallback");
                fallback_answer(question)
            }
        }
    }
}

/// Answer returned when no template matches; echoes the question verbatim.
pub fn fallback_answer(question: &str) -> String {
    format!(
        "I heard your question: \"{question}\". Replace the sample worker logic with your own AI or knowledge-base call to return a richer answer."
    )
}

/// Built-in templates, in priority order.
pub fn default_templates() -> Vec<AnswerTemplate> {
    vec![
        AnswerTemplate::new(
            ["云计算", "cloud computing"],
            "云计算 (cloud computing) is the on-demand delivery of compute, storage, and networking resources over the internet. \
             Users can provision capabilities such as processing power or databases without owning physical hardware, paying only for what they consume. \
             Common service models include IaaS for raw infrastructure, PaaS for managed runtimes, and SaaS for complete applications.",
        ),
        AnswerTemplate::new(
            ["worker", "cloudflare"],
            "Cloudflare Workers let you run JavaScript, Rust, or WASM on Cloudflare’s global network. \
             They start instantly, scale automatically, and can sit in front of APIs to handle authentication, caching, or AI orchestration.",
        ),
    ]
}
