use crate::ai::AiError;
use serde::{Deserialize, Serialize};

/// A current-affairs topic extracted for a given month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisTopic {
    pub title: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserAnswer {
    pub question: String,
    pub selected_answer: String,
    pub is_correct: bool,
    pub correct_answer: String,
    pub explanation: String,
}

/// Feedback on a set of mains notes. Every field is markdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    pub strengths: String,
    pub weaknesses: String,
    pub suggestions: String,
    pub additional_content: String,
}

/// A section title with what the user wrote under it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteEntry {
    pub title: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PyqArticle {
    pub title: String,
    pub url: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PyqAnalysis {
    pub evaluation: String,
    pub demand_of_question: String,
    pub topics: Vec<String>,
    pub explanation: String,
    pub extra_info: String,
    #[serde(default)]
    pub relevant_articles: Vec<PyqArticle>,
    #[serde(default)]
    pub recommended_topics: Vec<String>,
}

/// Identifies one in-flight AI request so late replies can be matched or dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub enum AiRequest {
    AnalyzeSources { month: String, year: i32 },
    GenerateQuiz { topic: AnalysisTopic },
    GenerateScaffold { topic: String, prompt: String },
    EvaluateNotes { topic: String, notes: String },
    AnalyzePyq {
        question: String,
        user_answer: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum AiOutput {
    Topics(Vec<AnalysisTopic>),
    Quiz(Vec<QuizQuestion>),
    Scaffold(String),
    Evaluation(EvaluationResult),
    Pyq(PyqAnalysis),
}

#[derive(Debug, Clone)]
pub struct AiEnvelope {
    pub id: RequestId,
    pub request: AiRequest,
}

#[derive(Debug, Clone)]
pub struct AiResponse {
    pub id: RequestId,
    pub result: Result<AiOutput, AiError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Prelims,
    Mains,
    NoteMaker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Theme> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Guess from `COLORFGBG` ("fg;bg"); background colours 7 and 15 are light.
    pub fn from_colorfgbg(value: Option<&str>) -> Theme {
        let bg = value
            .and_then(|v| v.rsplit(';').next())
            .and_then(|bg| bg.trim().parse::<u8>().ok());
        match bg {
            Some(7) | Some(15) => Theme::Light,
            _ => Theme::Dark,
        }
    }
}
