use crate::models::{EvaluationResult, NoteEntry};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub fn slugify(topic: &str) -> String {
    let mut slug = String::new();
    for c in topic.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        "notes".to_string()
    } else {
        slug.chars().take(48).collect()
    }
}

pub fn render_final_notes(topic: &str, sections: &[NoteEntry], evaluation: &EvaluationResult) -> String {
    let mut out = format!("# {}\n\n", topic);

    let written: Vec<&NoteEntry> = sections
        .iter()
        .filter(|s| !s.notes.trim().is_empty())
        .collect();

    if written.is_empty() {
        out.push_str("No notes were written.\n\n");
    }
    for section in written {
        out.push_str(&format!("## {}\n\n{}\n\n", section.title, section.notes.trim_end()));
    }

    out.push_str("---\n\n## Additional Content\n\n");
    out.push_str(evaluation.additional_content.trim_end());
    out.push('\n');
    out
}

/// Writes the final notes to `<dir>/<slug>-<timestamp>.md`.
pub fn export_final_notes(
    dir: &Path,
    topic: &str,
    sections: &[NoteEntry],
    evaluation: &EvaluationResult,
) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let path = dir.join(format!("{}-{}.md", slugify(topic), stamp));

    let mut file = File::create(&path)?;
    file.write_all(render_final_notes(topic, sections, evaluation).as_bytes())?;
    file.flush()?;

    tracing::info!(path = %path.display(), "Exported final notes");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluation() -> EvaluationResult {
        EvaluationResult {
            strengths: String::new(),
            weaknesses: String::new(),
            suggestions: String::new(),
            additional_content: "- Sarkaria Commission".to_string(),
        }
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Cooperative Federalism: Issues & Way Ahead"), "cooperative-federalism-issues-way-ahead");
        assert_eq!(slugify("  ???  "), "notes");
    }

    #[test]
    fn test_render_skips_empty_sections() {
        let sections = vec![
            NoteEntry {
                title: "Introduction".to_string(),
                notes: "Intro text".to_string(),
            },
            NoteEntry {
                title: "Body".to_string(),
                notes: "   ".to_string(),
            },
        ];
        let rendered = render_final_notes("Federalism", &sections, &evaluation());
        assert!(rendered.contains("## Introduction\n\nIntro text"));
        assert!(!rendered.contains("## Body"));
        assert!(rendered.contains("- Sarkaria Commission"));
    }

    #[test]
    fn test_render_with_no_notes() {
        let rendered = render_final_notes("Federalism", &[], &evaluation());
        assert!(rendered.contains("No notes were written."));
    }

    #[test]
    fn test_export_writes_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = export_final_notes(temp_dir.path(), "Federalism", &[], &evaluation()).unwrap();
        assert!(path.file_name().unwrap().to_string_lossy().starts_with("federalism-"));
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.starts_with("# Federalism"));
    }
}
