//! Two-stage email generation workflow.
//!
//! Fixed pipeline: classify the intent, then generate content conditioned
//! on that intent. Each invocation is stateless and fully sequential --
//! exactly two provider calls on the happy path, one when classification
//! fails. No retries, no streaming, no persisted intermediate state.

use outreach_types::email::{DraftEmail, EmailType, GeneratedEmail, WorkflowRequest};
use outreach_types::error::WorkflowError;
use outreach_types::llm::{CompletionRequest, CompletionResponse};

use super::parse::{parse_category, parse_draft};
use super::prompt::{classify_prompt, follow_up_prompt, sales_prompt};
use crate::llm::BoxCompletionClient;

/// Stage-specific failure message for the sales generation path.
const SALES_FAILURE: &str = "Failed to generate sales email";

/// Stage-specific failure message for the follow-up generation path.
const FOLLOW_UP_FAILURE: &str = "Failed to generate follow-up email";

/// Sampling temperature for both stages.
const TEMPERATURE: f64 = 0.7;

/// Output cap per completion call; generated emails are short.
const MAX_OUTPUT_TOKENS: u32 = 1024;

/// Orchestrates the classify-then-generate pipeline over a completion client.
pub struct EmailWorkflow {
    client: BoxCompletionClient,
    model: String,
}

impl EmailWorkflow {
    /// Create a workflow bound to a completion client and model.
    pub fn new(client: BoxCompletionClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Run the full workflow for one request.
    ///
    /// Never panics: provider failures and malformed generations both
    /// resolve to a typed [`WorkflowError`]. A provider failure during
    /// classification short-circuits -- the generation call is never made.
    #[tracing::instrument(
        name = "generate_email",
        skip(self, request),
        fields(model = %self.model, provider = self.client.name())
    )]
    pub async fn generate(
        &self,
        request: &WorkflowRequest,
    ) -> Result<GeneratedEmail, WorkflowError> {
        let email_type = self.classify(request).await?;
        tracing::debug!(email_type = %email_type, "classification complete");

        let draft = self.compose(request, email_type).await?;

        Ok(GeneratedEmail {
            email_type,
            subject: draft.subject,
            body: draft.body,
        })
    }

    /// Stage one: classify the request into an email type.
    async fn classify(&self, request: &WorkflowRequest) -> Result<EmailType, WorkflowError> {
        let prompt = classify_prompt(&request.recipient_name, &request.message_context);
        let response = self.complete(prompt).await?;
        Ok(parse_category(&response.content))
    }

    /// Stage two: generate the draft with the template routed by the
    /// classified type.
    async fn compose(
        &self,
        request: &WorkflowRequest,
        email_type: EmailType,
    ) -> Result<DraftEmail, WorkflowError> {
        let (prompt, failure_message) = match email_type {
            EmailType::FollowUp => (
                follow_up_prompt(&request.recipient_name, &request.message_context),
                FOLLOW_UP_FAILURE,
            ),
            EmailType::Sales => (
                sales_prompt(&request.recipient_name, &request.message_context),
                SALES_FAILURE,
            ),
        };

        let response = self.complete(prompt).await?;

        parse_draft(&response.content).map_err(|e| {
            tracing::warn!(error = %e, email_type = %email_type, "malformed generation output");
            WorkflowError::MalformedGeneration {
                message: failure_message.to_string(),
            }
        })
    }

    async fn complete(&self, prompt: String) -> Result<CompletionResponse, WorkflowError> {
        let request = CompletionRequest {
            model: self.model.clone(),
            prompt,
            temperature: Some(TEMPERATURE),
            max_output_tokens: MAX_OUTPUT_TOKENS,
        };

        Ok(self.client.complete(&request).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use outreach_types::llm::CompletionError;

    use crate::llm::CompletionClient;

    /// Deterministic completion stub: returns scripted responses in order
    /// and records every prompt it receives.
    struct ScriptedClient {
        responses: Mutex<Vec<Result<String, CompletionError>>>,
        prompts: Arc<Mutex<Vec<String>>>,
    }

    impl ScriptedClient {
        fn new(responses: Vec<Result<String, CompletionError>>) -> (Self, Arc<Mutex<Vec<String>>>) {
            let prompts = Arc::new(Mutex::new(Vec::new()));
            let client = Self {
                // Popped from the back, so store in reverse order.
                responses: Mutex::new(responses.into_iter().rev().collect()),
                prompts: Arc::clone(&prompts),
            };
            (client, prompts)
        }
    }

    impl CompletionClient for ScriptedClient {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn complete(
            &self,
            request: &CompletionRequest,
        ) -> Result<outreach_types::llm::CompletionResponse, CompletionError> {
            self.prompts.lock().unwrap().push(request.prompt.clone());
            let next = self
                .responses
                .lock()
                .unwrap()
                .pop()
                .expect("scripted client ran out of responses");
            next.map(|content| outreach_types::llm::CompletionResponse { content })
        }
    }

    fn workflow_with(
        responses: Vec<Result<String, CompletionError>>,
    ) -> (EmailWorkflow, Arc<Mutex<Vec<String>>>) {
        let (client, prompts) = ScriptedClient::new(responses);
        let workflow = EmailWorkflow::new(BoxCompletionClient::new(client), "test-model");
        (workflow, prompts)
    }

    fn request() -> WorkflowRequest {
        WorkflowRequest {
            recipient_name: "Acme Corp".to_string(),
            message_context: "introduce our API product".to_string(),
        }
    }

    const DRAFT_JSON: &str = r#"{"subject":"Quick intro","body":"Hi, saw Acme Corp — let's talk."}"#;

    #[tokio::test]
    async fn test_follow_up_happy_path() {
        let (workflow, _) = workflow_with(vec![
            Ok("follow_up".to_string()),
            Ok(DRAFT_JSON.to_string()),
        ]);

        let email = workflow.generate(&request()).await.unwrap();
        assert_eq!(email.email_type, EmailType::FollowUp);
        assert_eq!(email.subject, "Quick intro");
        assert_eq!(email.body, "Hi, saw Acme Corp — let's talk.");
    }

    #[tokio::test]
    async fn test_sales_classification_routes_to_sales_template() {
        let (workflow, prompts) = workflow_with(vec![
            Ok("sales".to_string()),
            Ok(DRAFT_JSON.to_string()),
        ]);

        let email = workflow.generate(&request()).await.unwrap();
        assert_eq!(email.email_type, EmailType::Sales);

        let prompts = prompts.lock().unwrap();
        assert_eq!(prompts.len(), 2);
        assert!(prompts[1].contains("sales assistant"));
    }

    #[tokio::test]
    async fn test_unrecognized_classification_routes_to_sales_template() {
        for garbage in ["", "newsletter", "FOLLOW UP"] {
            let (workflow, prompts) = workflow_with(vec![
                Ok(garbage.to_string()),
                Ok(DRAFT_JSON.to_string()),
            ]);

            let email = workflow.generate(&request()).await.unwrap();
            assert_eq!(email.email_type, EmailType::Sales);
            assert!(prompts.lock().unwrap()[1].contains("sales assistant"));
        }
    }

    #[tokio::test]
    async fn test_follow_up_routes_to_follow_up_template() {
        let (workflow, prompts) = workflow_with(vec![
            Ok("  Follow_Up\n".to_string()),
            Ok(DRAFT_JSON.to_string()),
        ]);

        workflow.generate(&request()).await.unwrap();
        assert!(prompts.lock().unwrap()[1].contains("follow-up assistant"));
    }

    #[tokio::test]
    async fn test_fenced_generation_output_accepted() {
        let fenced = format!("```json\n{DRAFT_JSON}\n```");
        let (workflow, _) = workflow_with(vec![Ok("sales".to_string()), Ok(fenced)]);

        let email = workflow.generate(&request()).await.unwrap();
        assert_eq!(email.subject, "Quick intro");
        assert_eq!(email.body, "Hi, saw Acme Corp — let's talk.");
    }

    #[tokio::test]
    async fn test_malformed_sales_generation_yields_stage_message() {
        let (workflow, _) = workflow_with(vec![
            Ok("sales".to_string()),
            Ok("not json at all".to_string()),
        ]);

        let err = workflow.generate(&request()).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to generate sales email");
    }

    #[tokio::test]
    async fn test_malformed_follow_up_generation_yields_stage_message() {
        let (workflow, _) = workflow_with(vec![
            Ok("follow_up".to_string()),
            Ok(r#"{"subject":"Hi"}"#.to_string()),
        ]);

        let err = workflow.generate(&request()).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to generate follow-up email");
    }

    #[tokio::test]
    async fn test_classify_failure_short_circuits() {
        let (workflow, prompts) = workflow_with(vec![Err(CompletionError::Provider {
            message: "connection refused".to_string(),
        })]);

        let err = workflow.generate(&request()).await.unwrap_err();
        assert!(err.to_string().contains("connection refused"));
        // The generation call was never made.
        assert_eq!(prompts.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_generation_provider_failure_propagates() {
        let (workflow, _) = workflow_with(vec![
            Ok("sales".to_string()),
            Err(CompletionError::RateLimited {
                retry_after_ms: None,
            }),
        ]);

        let err = workflow.generate(&request()).await.unwrap_err();
        assert!(matches!(err, WorkflowError::Completion(_)));
    }

    #[tokio::test]
    async fn test_repeated_runs_are_identical() {
        let mut results = Vec::new();
        for _ in 0..2 {
            let (workflow, _) = workflow_with(vec![
                Ok("sales".to_string()),
                Ok(DRAFT_JSON.to_string()),
            ]);
            results.push(workflow.generate(&request()).await.unwrap());
        }
        assert_eq!(results[0], results[1]);
    }

    #[tokio::test]
    async fn test_happy_path_makes_exactly_two_calls() {
        let (workflow, prompts) = workflow_with(vec![
            Ok("follow_up".to_string()),
            Ok(DRAFT_JSON.to_string()),
        ]);

        workflow.generate(&request()).await.unwrap();
        assert_eq!(prompts.lock().unwrap().len(), 2);
    }
}
