use crate::ai::error::AiError;
use serde::de::DeserializeOwned;

/// Strips markdown fences and surrounding prose from a model reply, leaving
/// the outermost JSON object or array.
pub fn clean_json_response(response: &str) -> String {
    let mut cleaned = response.trim().to_string();

    if cleaned.starts_with("```") {
        let lines: Vec<&str> = cleaned.lines().collect();
        if lines.len() > 2 {
            cleaned = lines[1..lines.len() - 1].join("\n");
        }
    }

    let start = cleaned.find(['{', '[']);
    if let Some(start) = start {
        let close = if cleaned[start..].starts_with('[') { ']' } else { '}' };
        if let Some(end) = cleaned.rfind(close)
            && end > start
        {
            cleaned = cleaned[start..=end].to_string();
        }
    }

    cleaned.trim().to_string()
}

pub fn parse_json<T: DeserializeOwned>(operation: &'static str, response: &str) -> Result<T, AiError> {
    if response.trim().is_empty() {
        return Err(AiError::EmptyResponse);
    }

    let cleaned = clean_json_response(response);
    serde_json::from_str(&cleaned).map_err(|e| {
        tracing::debug!(raw = %response, cleaned = %cleaned, "Failed to parse AI response");
        AiError::Parse {
            operation,
            detail: e.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnalysisTopic;

    #[test]
    fn test_clean_json_response_simple() {
        let json = r#"{"title":"x"}"#;
        assert_eq!(clean_json_response(json), json);
    }

    #[test]
    fn test_clean_json_response_markdown_fence() {
        let json = "```json\n[{\"title\": \"a\", \"summary\": \"b\"}]\n```";
        assert_eq!(
            clean_json_response(json),
            r#"[{"title": "a", "summary": "b"}]"#
        );
    }

    #[test]
    fn test_clean_json_response_with_prose() {
        let json = r#"Here you go: {"strengths": "- good"} hope it helps"#;
        assert_eq!(clean_json_response(json), r#"{"strengths": "- good"}"#);
    }

    #[test]
    fn test_clean_json_response_array_with_nested_objects() {
        let json = r#"Sure! [{"a": 1}, {"b": 2}] Done."#;
        assert_eq!(clean_json_response(json), r#"[{"a": 1}, {"b": 2}]"#);
    }

    #[test]
    fn test_parse_json_topics() {
        let topics: Vec<AnalysisTopic> = parse_json(
            "analyze sources",
            r#"[{"title": "Monsoon session", "summary": "Bills passed."}]"#,
        )
        .unwrap();
        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].title, "Monsoon session");
    }

    #[test]
    fn test_parse_json_errors() {
        let empty: Result<Vec<AnalysisTopic>, _> = parse_json("analyze sources", "   ");
        assert_eq!(empty, Err(AiError::EmptyResponse));

        let garbage: Result<Vec<AnalysisTopic>, _> = parse_json("analyze sources", "not json");
        assert!(matches!(
            garbage,
            Err(AiError::Parse {
                operation: "analyze sources",
                ..
            })
        ));
    }
}
