//! Wire types for the generateContent endpoint.
//!
//! Matches the Gemini-style JSON shape: a request carries a list of
//! contents with text parts, a response carries candidates whose first
//! content part holds the generated text.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub contents: Vec<RequestContent>,
}

impl GenerateRequest {
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![TextPart {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestContent {
    pub parts: Vec<TextPart>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextPart {
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateResponse {
    /// Extract the first candidate's text, trimmed. `None` when the
    /// model returned no usable candidate.
    pub fn first_text(&self) -> Option<String> {
        let text = self
            .candidates
            .first()?
            .content
            .parts
            .first()?
            .text
            .trim()
            .to_string();
        if text.is_empty() { None } else { Some(text) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: CandidateContent,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<TextPart>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let request = GenerateRequest::from_prompt("Tell me a joke.");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "Tell me a joke.");
    }

    #[test]
    fn test_response_first_text() {
        let payload = serde_json::json!({
            "candidates": [
                { "content": { "parts": [ { "text": "  Hello there!  " } ] } }
            ]
        });
        let response: GenerateResponse = serde_json::from_value(payload).unwrap();
        assert_eq!(response.first_text(), Some("Hello there!".to_string()));
    }

    #[test]
    fn test_response_without_candidates() {
        let response: GenerateResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(response.first_text(), None);
    }
}
