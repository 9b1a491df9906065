//! Prompt templates for the two workflow stages.
//!
//! Pure string interpolation, no I/O. An empty recipient name interpolates
//! as an empty string, never a placeholder literal.

/// Build the classification prompt.
///
/// Instructs the model to answer with exactly one of the category tokens
/// (`sales`, `follow_up`) and no extra prose.
pub fn classify_prompt(recipient_name: &str, message_context: &str) -> String {
    format!(
        r#"Analyze the following email context and determine the most appropriate email type:

Recipient: {recipient_name}
Context: {message_context}

Choose from these categories:
1. "sales" - for business, formal communications, work-related matters, tailored to the recipient business description
2. "follow_up" - for already sent sales emails, formal communications, polite follow-up emails

Respond with only the category name (sales, follow_up)."#
    )
}

/// Build the sales generation prompt.
///
/// Asks for a short, high-urgency persuasive email with a call-to-action,
/// returned as a JSON object with "subject" and "body" fields.
pub fn sales_prompt(recipient_name: &str, message_context: &str) -> String {
    format!(
        r#"You are a sales assistant.
Generate a professional sales email, tailored to the recipient business description:

Recipient: {recipient_name}
Context: {message_context}

Create an email with:
1. An attention-grabbing subject line. Clear and concise.
2. A persuasive body that addresses the context and includes a call-to-action
3. Keep the email under 40 words total. So it can be read under 10 seconds.
4. max 7-10 words/sentence

Respond with a JSON object containing "subject" and "body" fields."#
    )
}

/// Build the follow-up generation prompt.
///
/// Asks for a warm, polite, concise follow-up email in the same JSON shape.
pub fn follow_up_prompt(recipient_name: &str, message_context: &str) -> String {
    format!(
        r#"You are a follow-up assistant.
Generate a sales follow-up email for the following context:

Recipient: {recipient_name}
Context: {message_context}

Create a follow-up email with:
1. A friendly, polite, professional subject line
2. A warm, polite and concise body that addresses the context
3. (e.g., "just checking in")

Respond with a JSON object containing "subject" and "body" fields."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_prompt_interpolates_inputs() {
        let prompt = classify_prompt("Acme Corp", "introduce our API product");
        assert!(prompt.contains("Recipient: Acme Corp"));
        assert!(prompt.contains("Context: introduce our API product"));
        assert!(prompt.contains("only the category name"));
    }

    #[test]
    fn test_classify_prompt_names_both_tokens() {
        let prompt = classify_prompt("", "ctx");
        assert!(prompt.contains("\"sales\""));
        assert!(prompt.contains("\"follow_up\""));
    }

    #[test]
    fn test_empty_recipient_degrades_gracefully() {
        for prompt in [
            classify_prompt("", "ctx"),
            sales_prompt("", "ctx"),
            follow_up_prompt("", "ctx"),
        ] {
            assert!(prompt.contains("Recipient: \n"));
            assert!(!prompt.contains("{recipient_name}"));
        }
    }

    #[test]
    fn test_generation_prompts_request_json_shape() {
        for prompt in [
            sales_prompt("Acme Corp", "ctx"),
            follow_up_prompt("Acme Corp", "ctx"),
        ] {
            assert!(prompt.contains("\"subject\""));
            assert!(prompt.contains("\"body\""));
            assert!(prompt.contains("JSON object"));
        }
    }

    #[test]
    fn test_sales_prompt_carries_length_constraint() {
        let prompt = sales_prompt("Acme Corp", "ctx");
        assert!(prompt.contains("under 40 words"));
        assert!(prompt.contains("call-to-action"));
    }
}
