use crate::ai::client::{ContentGenerator, GenerateRequest};
use crate::ai::error::AiError;
use crate::ai::parse::parse_json;
use crate::ai::retry::{generate_with_retry, RetryPolicy};
use crate::models::{AnalysisTopic, PyqAnalysis, QuizQuestion};

pub const SOURCES: [&str; 7] = [
    "Press Information Bureau (PIB)",
    "Down to Earth Magazine",
    "The Hindu Newspaper",
    "The Indian Express Newspaper",
    "Economic and Political Weekly (EPW)",
    "Yojana Magazine",
    "Kurukshetra Magazine",
];

pub fn sources_prompt(month: &str, year: i32) -> String {
    let sources = SOURCES
        .iter()
        .map(|s| format!("- {}", s))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"Analyze the following sources for {month} {year} and extract the most important events, updates, and topics for the UPSC Prelims exam:
{sources}

For each topic, provide a concise title and a brief, one-paragraph summary explaining its relevance to the UPSC prelims syllabus.

Respond with a JSON array of objects:
[{{"title": "concise title of the topic", "summary": "one-paragraph summary of its relevance to UPSC prelims"}}]"#
    )
}

pub async fn analyze_sources<G>(
    generator: &G,
    policy: RetryPolicy,
    month: &str,
    year: i32,
) -> Result<Vec<AnalysisTopic>, AiError>
where
    G: ContentGenerator + ?Sized,
{
    tracing::info!(month, year, "Analyzing current-affairs sources");
    let request = GenerateRequest::json(sources_prompt(month, year));
    let response = generate_with_retry(generator, &request, policy).await?;

    let topics: Vec<AnalysisTopic> = parse_json("analyze sources", &response)?;
    let topics: Vec<AnalysisTopic> = topics
        .into_iter()
        .filter(|t| !t.title.trim().is_empty())
        .collect();

    if topics.is_empty() {
        return Err(AiError::Invalid(format!(
            "No topics were found for {} {}. Try another month.",
            month, year
        )));
    }
    Ok(topics)
}

pub fn quiz_prompt(topic: &AnalysisTopic) -> String {
    format!(
        r#"Based on the following topic and summary, generate a 5-question multiple-choice quiz suitable for the UPSC Prelims exam.

Topic: "{}"
Summary: "{}"

For each question, focus on a critical aspect, include four plausible options (one correct), and provide the correct answer and a detailed explanation. The incorrect options should target common misconceptions. The output should be markdown formatted.

Respond with a JSON array of objects:
[{{"question": "the quiz question (markdown)", "options": ["four", "answer", "options", "(markdown)"], "correctAnswer": "the correct answer string copied exactly from options", "explanation": "detailed explanation of the correct answer (markdown)"}}]"#,
        topic.title, topic.summary
    )
}

/// Drops unusable questions and snaps `correct_answer` onto the matching
/// option text when they only differ in whitespace or case.
fn normalize_quiz(questions: Vec<QuizQuestion>) -> Vec<QuizQuestion> {
    questions
        .into_iter()
        .filter(|q| !q.options.is_empty() && !q.question.trim().is_empty())
        .map(|mut q| {
            if !q.options.contains(&q.correct_answer) {
                let wanted = q.correct_answer.trim().to_lowercase();
                if let Some(option) = q
                    .options
                    .iter()
                    .find(|o| o.trim().to_lowercase() == wanted)
                {
                    q.correct_answer = option.clone();
                }
            }
            q
        })
        .collect()
}

pub async fn generate_quiz<G>(
    generator: &G,
    policy: RetryPolicy,
    topic: &AnalysisTopic,
) -> Result<Vec<QuizQuestion>, AiError>
where
    G: ContentGenerator + ?Sized,
{
    tracing::info!(topic = %topic.title, "Generating quiz");
    let request = GenerateRequest::json(quiz_prompt(topic));
    let response = generate_with_retry(generator, &request, policy).await?;

    let quiz = normalize_quiz(parse_json("generate quiz", &response)?);
    if quiz.is_empty() {
        return Err(AiError::Invalid(
            "The AI returned an empty quiz. Please try again.".to_string(),
        ));
    }
    Ok(quiz)
}

pub fn pyq_prompt(question: &str, user_answer: Option<&str>) -> String {
    let answer_line = user_answer
        .map(|a| format!("User's Answer: \"{}\"", a))
        .unwrap_or_default();

    format!(
        r#"You are an expert UPSC Prelims exam analyst. Analyze the following Previous Year Question (PYQ).

Question: "{question}"
{answer_line}

Provide a comprehensive analysis in the following JSON format:
1.  evaluation: If a user's answer is provided, evaluate it as "Correct" or "Incorrect" and briefly explain why in markdown. If no answer is provided, state "No answer provided for evaluation.".
2.  demandOfQuestion: A concise explanation of what the question is asking for, in markdown.
3.  topics: An array of strings listing the core syllabus topics involved (e.g., "Indian Polity", "Modern History", "Environmental Science").
4.  explanation: A clear, foundational explanation of the concepts involved, including common confusion points, in markdown.
5.  extraInfo: Additional, in-depth information relevant to the topic, suitable for a UPSC aspirant, in markdown.
6.  relevantArticles: An array of objects, each representing a relevant news article from The Times of India, The Indian Express, or The Hindu published in the last two years. Each object should have a 'title', 'url' (a valid https link or a google search link if a direct url is not available), and a one-line 'summary'.
7.  recommendedTopics: An array of strings suggesting related topics, reports (national and international), or concepts to study for a holistic understanding. For example, if the question is on BRSR, recommend looking into GRI, TCFD, etc."#
    )
}

pub async fn analyze_pyq<G>(
    generator: &G,
    policy: RetryPolicy,
    question: &str,
    user_answer: Option<&str>,
) -> Result<PyqAnalysis, AiError>
where
    G: ContentGenerator + ?Sized,
{
    if question.trim().is_empty() {
        return Err(AiError::Invalid(
            "Please enter a question to analyze.".to_string(),
        ));
    }
    let user_answer = user_answer.map(str::trim).filter(|a| !a.is_empty());

    tracing::info!(answered = user_answer.is_some(), "Analyzing PYQ");
    let request = GenerateRequest::json(pyq_prompt(question, user_answer));
    let response = generate_with_retry(generator, &request, policy).await?;

    parse_json("analyze the question", &response)
}
