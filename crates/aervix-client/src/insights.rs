//! Board tips from an external text-generation service.
//!
//! Only the seam lives here: the provider is supplied by the embedding
//! application. Any provider failure degrades to a fixed tip.

use aervix_shared::constants::FALLBACK_INSIGHT;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InsightError {
    #[error("Insight provider unavailable: {0}")]
    Unavailable(String),

    #[error("Insight provider returned no text")]
    Empty,
}

/// Generates free-form tips from a prompt.
pub trait InsightProvider {
    fn generate(&self, prompt: &str) -> Result<String, InsightError>;
}

/// Prompt sent for a board's tips.
pub fn insight_prompt(board_name: &str) -> String {
    format!(
        "Provide 3 unique pro-tips for working with {board_name} in electronics projects \
         for an engineering student. Keep it concise."
    )
}

/// Ask `provider` for tips about `board_name`, or return the fallback tip.
pub fn insight_or_fallback<P: InsightProvider + ?Sized>(provider: &P, board_name: &str) -> String {
    let result = provider
        .generate(&insight_prompt(board_name))
        .and_then(|text| {
            if text.trim().is_empty() {
                Err(InsightError::Empty)
            } else {
                Ok(text)
            }
        });

    match result {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(board = %board_name, error = %e, "insight request failed, using fallback");
            FALLBACK_INSIGHT.to_string()
        }
    }
}
