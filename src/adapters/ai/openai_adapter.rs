//! OpenAI-compatible adapter for model-backed structure generation.
//!
//! Supports OpenAI API, Azure OpenAI, and local Ollama instances.
//! Implements `StructurePort` with robust JSON parsing and markdown stripping.

use crate::domain::{
    ActionItem, DEFAULT_OWNER, Deadline, DomainError, FocusSession, Priority, ProcessedOutput,
};
use crate::ports::StructurePort;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

/// OpenAI-compatible structure generator.
///
/// Can be configured to work with:
/// - OpenAI API (api.openai.com)
/// - Azure OpenAI
/// - Ollama (localhost)
/// - Any OpenAI-compatible API
pub struct OpenAiAdapter {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl OpenAiAdapter {
    /// Create a new OpenAI adapter.
    ///
    /// # Arguments
    /// * `api_url` - API endpoint (e.g., "https://api.openai.com/v1/chat/completions")
    /// * `api_key` - API key (can be empty for local Ollama)
    /// * `model` - Model name (e.g., "gpt-4o-mini", "llama3.2")
    /// * `timeout` - Per-request timeout for the completion call
    pub fn new(
        api_url: String,
        api_key: String,
        model: String,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Ai(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            api_url,
            api_key,
            model,
        })
    }

    /// Build the system prompt with JSON schema instructions.
    fn system_prompt() -> &'static str {
        r#"You are an assistant that makes written instructions accessible for people with ADHD, dyslexia or low vision.

## Your Task
Read the user's text and produce:
1. `simplified_text`: the same content in short, plain sentences.
2. `audio_narration_script`: a warm, spoken-style script (start with a greeting, mention any deadline, end with encouragement).
3. `visual_task_steps`: numbered steps, each formatted "Step N: ...".
4. `action_items`: up to 5 concrete tasks with owner, priority and deadline.
5. `guided_focus_sessions`: a "Planning & Understanding" session, 1-3 work sessions (one per main task), and a "Review & Wrap Up" session.

## Rules
- Priority is one of "High", "Medium", "Low".
- Deadline is a short phrase like "By Friday", "Tomorrow", "In 2 days", or "Not specified".
- If nobody else is named, the owner is "User".
- Durations and breaks are whole minutes.

## Output Format
You MUST respond with valid JSON only. No markdown, no explanations outside JSON.

```json
{
  "simplified_text": "...",
  "audio_narration_script": "...",
  "visual_task_steps": ["Step 1: ...", "Step 2: ..."],
  "action_items": [
    {"task": "...", "owner": "User", "priority": "Medium", "deadline": "Not specified"}
  ],
  "guided_focus_sessions": [
    {"session_name": "Planning & Understanding", "duration_minutes": 10, "instructions": ["..."], "break_minutes": 5}
  ]
}
```"#
    }

    /// Build the user prompt with the raw text.
    fn user_prompt(text: &str) -> String {
        format!(
            "Break down the following text into an accessible, structured plan.\n\n{}",
            text
        )
    }

    /// Sanitize JSON response from LLM.
    ///
    /// LLMs sometimes wrap JSON in markdown code blocks. This strips them.
    fn sanitize_json(raw_text: &str) -> String {
        let trimmed = raw_text.trim();

        if let Some(rest) = trimmed.strip_prefix("```") {
            let without_prefix = rest.strip_prefix("json").unwrap_or(rest);
            if let Some(end_idx) = without_prefix.rfind("```") {
                return without_prefix[..end_idx].trim().to_string();
            }
            return without_prefix.trim().to_string();
        }

        // JSON embedded in surrounding prose
        if let (Some(start), Some(end)) = (trimmed.find('{'), trimmed.rfind('}')) {
            if start < end {
                return trimmed[start..=end].to_string();
            }
        }

        trimmed.to_string()
    }

    /// Parse the model's message content into the domain output.
    fn parse_structure(raw_content: &str) -> Result<ProcessedOutput, DomainError> {
        let clean_json = Self::sanitize_json(raw_content);
        let parsed: LlmStructure = serde_json::from_str(&clean_json).map_err(|e| {
            warn!(error = %e, json = %clean_json.chars().take(200).collect::<String>(), "JSON parse failed");
            DomainError::Ai(format!("Failed to parse LLM JSON: {}", e))
        })?;
        Ok(parsed.into())
    }
}

/// OpenAI API request structure.
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: String,
}

/// OpenAI API response structure.
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    content: String,
}

/// Parsed LLM response (matches our JSON schema). Lenient: optional fields get defaults.
#[derive(Deserialize)]
struct LlmStructure {
    simplified_text: String,
    #[serde(default)]
    audio_narration_script: String,
    #[serde(default)]
    visual_task_steps: Vec<String>,
    #[serde(default)]
    action_items: Vec<LlmActionItem>,
    #[serde(default)]
    guided_focus_sessions: Vec<LlmFocusSession>,
}

#[derive(Deserialize)]
struct LlmActionItem {
    task: String,
    owner: Option<String>,
    priority: Option<String>,
    deadline: Option<String>,
}

#[derive(Deserialize)]
struct LlmFocusSession {
    session_name: String,
    duration_minutes: u32,
    #[serde(default)]
    instructions: Vec<String>,
    #[serde(default)]
    break_minutes: u32,
}

impl From<LlmActionItem> for ActionItem {
    fn from(item: LlmActionItem) -> Self {
        let deadline = item
            .deadline
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .map(Deadline::new)
            .unwrap_or_default();
        ActionItem {
            task: item.task,
            owner: item
                .owner
                .filter(|o| !o.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_OWNER.to_string()),
            priority: item
                .priority
                .as_deref()
                .map(Priority::parse_lenient)
                .unwrap_or_default(),
            deadline,
        }
    }
}

impl From<LlmStructure> for ProcessedOutput {
    fn from(llm: LlmStructure) -> Self {
        ProcessedOutput {
            simplified_text: llm.simplified_text,
            audio_narration_script: llm.audio_narration_script,
            visual_task_steps: llm.visual_task_steps,
            action_items: llm.action_items.into_iter().map(ActionItem::from).collect(),
            guided_focus_sessions: llm
                .guided_focus_sessions
                .into_iter()
                .map(|s| FocusSession {
                    session_name: s.session_name,
                    duration_minutes: s.duration_minutes,
                    instructions: s.instructions,
                    break_minutes: s.break_minutes,
                })
                .collect(),
        }
    }
}

#[async_trait::async_trait]
impl StructurePort for OpenAiAdapter {
    fn backend_name(&self) -> &'static str {
        "openai"
    }

    async fn generate_structure(&self, text: &str) -> Result<ProcessedOutput, DomainError> {
        info!(
            text_len = text.len(),
            model = %self.model,
            "sending text to AI for structuring"
        );

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: Self::system_prompt().to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: Self::user_prompt(text),
                },
            ],
            temperature: 0.3,
            response_format: ResponseFormat {
                format_type: "json_object".to_string(),
            },
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::Ai(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text, "AI API returned error");
            return Err(DomainError::Ai(format!(
                "API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Ai(format!("Failed to parse API response: {}", e)))?;

        let raw_content = chat_response
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .ok_or_else(|| DomainError::Ai("No response choices returned".to_string()))?;

        debug!(raw_len = raw_content.len(), "received AI response");

        let output = Self::parse_structure(&raw_content)?;

        info!(
            actions = output.action_items.len(),
            sessions = output.guided_focus_sessions.len(),
            "AI structuring complete"
        );

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::post;
    use axum::{Json, Router};

    const CANNED: &str = r#"{
        "simplified_text": "Book the venue. Invite the team.",
        "audio_narration_script": "Hi. Book the venue, then invite the team.",
        "visual_task_steps": ["Step 1: Book the venue", "Step 2: Invite the team"],
        "action_items": [
            {"task": "Book the venue", "owner": null, "priority": "HIGH", "deadline": "By Monday"},
            {"task": "Invite the team", "owner": "Dana", "priority": null, "deadline": ""}
        ],
        "guided_focus_sessions": [
            {"session_name": "Planning & Understanding", "duration_minutes": 10, "instructions": ["Plan"], "break_minutes": 5},
            {"session_name": "Review & Wrap Up", "duration_minutes": 10}
        ]
    }"#;

    #[test]
    fn test_sanitize_json_clean() {
        let input = r#"{"simplified_text": "test"}"#;
        assert_eq!(OpenAiAdapter::sanitize_json(input), input);
    }

    #[test]
    fn test_sanitize_json_markdown() {
        let input = "```json\n{\"simplified_text\": \"test\"}\n```";
        assert_eq!(
            OpenAiAdapter::sanitize_json(input),
            r#"{"simplified_text": "test"}"#
        );
    }

    #[test]
    fn test_sanitize_json_markdown_no_lang() {
        let input = "```\n{\"simplified_text\": \"test\"}\n```";
        assert_eq!(
            OpenAiAdapter::sanitize_json(input),
            r#"{"simplified_text": "test"}"#
        );
    }

    #[test]
    fn test_sanitize_json_with_text() {
        let input = "Here is the plan:\n{\"simplified_text\": \"test\", \"action_items\": []}";
        assert_eq!(
            OpenAiAdapter::sanitize_json(input),
            r#"{"simplified_text": "test", "action_items": []}"#
        );
    }

    #[test]
    fn test_parse_structure_normalizes_fields() {
        let output = OpenAiAdapter::parse_structure(CANNED).unwrap();

        assert_eq!(output.action_items.len(), 2);
        let first = &output.action_items[0];
        assert_eq!(first.owner, "User");
        assert_eq!(first.priority, Priority::High);
        assert_eq!(first.deadline.as_str(), "By Monday");
        let second = &output.action_items[1];
        assert_eq!(second.owner, "Dana");
        assert_eq!(second.priority, Priority::Medium);
        assert!(!second.deadline.is_specified());
        assert_eq!(output.guided_focus_sessions[1].break_minutes, 0);
        assert!(output.guided_focus_sessions[1].instructions.is_empty());
    }

    #[test]
    fn test_parse_structure_rejects_garbage() {
        let err = OpenAiAdapter::parse_structure("sorry, I can't do that").unwrap_err();
        assert!(matches!(err, DomainError::Ai(_)));
    }

    async fn spawn_fake_api(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/v1/chat/completions", addr)
    }

    #[tokio::test]
    async fn test_generate_structure_against_fake_api() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|Json(body): Json<serde_json::Value>| async move {
                assert_eq!(body["model"], "test-model");
                assert_eq!(body["response_format"]["type"], "json_object");
                Json(serde_json::json!({
                    "choices": [{"message": {"content": format!("```json\n{}\n```", CANNED)}}]
                }))
            }),
        );
        let url = spawn_fake_api(router).await;
        let adapter = OpenAiAdapter::new(
            url,
            "sk-test".to_string(),
            "test-model".to_string(),
            Duration::from_secs(5),
        )
        .unwrap();

        let output = adapter.generate_structure("Book the venue.").await.unwrap();

        assert_eq!(output.simplified_text, "Book the venue. Invite the team.");
        assert_eq!(output.visual_task_steps.len(), 2);
        assert_eq!(adapter.backend_name(), "openai");
    }

    #[tokio::test]
    async fn test_generate_structure_maps_http_error() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|| async { (axum::http::StatusCode::UNAUTHORIZED, "bad key") }),
        );
        let url = spawn_fake_api(router).await;
        let adapter = OpenAiAdapter::new(
            url,
            "sk-wrong".to_string(),
            "test-model".to_string(),
            Duration::from_secs(5),
        )
        .unwrap();

        let err = adapter.generate_structure("Book the venue.").await.unwrap_err();

        match err {
            DomainError::Ai(msg) => assert!(msg.contains("401")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
