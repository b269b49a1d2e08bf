//! Best-effort lookups over raw résumé text for chat replies.

const NAME_SCAN_LINES: usize = 5;
const NAME_MAX_CHARS: usize = 50;
const NAME_DIGIT_PREFIX: usize = 10;
const OPENING_LINE_CHARS: usize = 100;

const EXPERIENCE_MARKERS: [&str; 3] = ["experience", "work history", "employment"];
const EDUCATION_MARKERS: [&str; 5] = ["education", "academic", "degree", "university", "college"];
pub const EXPERIENCE_EXCERPT_CHARS: usize = 400;
pub const EDUCATION_EXCERPT_CHARS: usize = 350;

const SUMMARY_SECTIONS: [(&str, &str); 6] = [
    ("experience", "Experience"),
    ("education", "Education"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("certifications", "Certifications"),
    ("summary", "Summary"),
];

/// First short line among the opening non-empty lines that looks like a name:
/// under 50 chars, no digit in its first 10 chars, no '@' and no "http".
pub fn candidate_name(resume_text: &str) -> Option<&str> {
    resume_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(NAME_SCAN_LINES)
        .find(|line| looks_like_name(line))
}

fn looks_like_name(line: &str) -> bool {
    line.chars().count() < NAME_MAX_CHARS
        && !line.chars().take(NAME_DIGIT_PREFIX).any(char::is_numeric)
        && !line.contains('@')
        && !line.to_ascii_lowercase().contains("http")
}

/// First line of the trimmed text, cut to 100 chars.
pub fn opening_line(resume_text: &str) -> String {
    resume_text
        .trim()
        .lines()
        .next()
        .unwrap_or_default()
        .chars()
        .take(OPENING_LINE_CHARS)
        .collect()
}

pub fn experience_excerpt(resume_text: &str) -> Option<String> {
    section_excerpt(resume_text, &EXPERIENCE_MARKERS, EXPERIENCE_EXCERPT_CHARS)
}

pub fn education_excerpt(resume_text: &str) -> Option<String> {
    section_excerpt(resume_text, &EDUCATION_MARKERS, EDUCATION_EXCERPT_CHARS)
}

/// Text starting at the first marker (tried in order) that occurs anywhere.
fn section_excerpt(resume_text: &str, markers: &[&str], max_chars: usize) -> Option<String> {
    // ASCII folding keeps byte offsets aligned with the original text
    let folded = resume_text.to_ascii_lowercase();
    let start = markers.iter().find_map(|marker| folded.find(marker))?;
    Some(resume_text[start..].chars().take(max_chars).collect())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeSummary {
    pub word_count: usize,
    pub sections: Vec<&'static str>,
    pub first_line: String,
    pub second_line: String,
}

pub fn resume_summary(resume_text: &str) -> ResumeSummary {
    let folded = resume_text.to_lowercase();
    let sections = SUMMARY_SECTIONS
        .iter()
        .filter(|(marker, _)| folded.contains(marker))
        .map(|(_, title)| *title)
        .collect();

    let mut lines = resume_text.lines().map(str::trim).filter(|l| !l.is_empty());
    let first_line = lines.next().unwrap_or_default().to_string();
    let second_line = lines.next().unwrap_or_default().to_string();

    ResumeSummary {
        word_count: resume_text.split_whitespace().count(),
        sections,
        first_line,
        second_line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "\n  Jane Doe  \njane@example.com\n\nSUMMARY\nNurse with 5 years on a busy ward.\n\n\
                          Work Experience\nSt. Mary's Hospital, 2019-2024\n\nEducation\nBSc Nursing, 2018\n";

    #[test]
    fn test_candidate_name_first_short_line() {
        assert_eq!(candidate_name(RESUME), Some("Jane Doe"));
    }

    #[test]
    fn test_candidate_name_skips_contact_lines() {
        let text = "2024 curriculum vitae\njohn@mail.com\nhttps://john.dev\nJohn Smith";
        assert_eq!(candidate_name(text), Some("John Smith"));
    }

    #[test]
    fn test_candidate_name_only_scans_five_lines() {
        let text = "1\n2\n3\n4\n5\nJohn Smith";
        assert_eq!(candidate_name(text), None);
    }

    #[test]
    fn test_candidate_name_rejects_non_ascii_digits() {
        let text = "٢٠٢٤ سيرة ذاتية\nLayla Haddad";
        assert_eq!(candidate_name(text), Some("Layla Haddad"));
    }

    #[test]
    fn test_opening_line_truncates() {
        let long = "x".repeat(150);
        assert_eq!(opening_line(&long).len(), OPENING_LINE_CHARS);
        assert_eq!(opening_line("  First\nSecond"), "First");
    }

    #[test]
    fn test_experience_excerpt_starts_at_marker() {
        let excerpt = experience_excerpt(RESUME).unwrap();
        assert!(excerpt.starts_with("Experience\nSt. Mary's"));
    }

    #[test]
    fn test_education_excerpt_is_bounded() {
        let text = format!("Education {}", "a".repeat(1000));
        assert_eq!(education_excerpt(&text).unwrap().chars().count(), EDUCATION_EXCERPT_CHARS);
        assert!(education_excerpt("no schooling listed").is_none());
    }

    #[test]
    fn test_excerpt_handles_non_ascii_text() {
        let text = "Résumé: Zoë\nÉmployment at Café; experience: 3 yrs";
        assert!(experience_excerpt(text).unwrap().starts_with("experience: 3 yrs"));
    }

    #[test]
    fn test_resume_summary() {
        let summary = resume_summary(RESUME);
        assert_eq!(summary.sections, vec!["Experience", "Education", "Summary"]);
        assert_eq!(summary.first_line, "Jane Doe");
        assert_eq!(summary.second_line, "jane@example.com");
        assert!(summary.word_count > 10);
    }
}
