use crate::analysis::sector::Sector;
use crate::lexicon::{sector_skills, FALLBACK_SKILLS};

/// Upper bound on extracted skills. Truncation keeps vocabulary order, not relevance.
pub const MAX_EXTRACTED_SKILLS: usize = 12;

/// Finds the lexicon skills textually present in `text`.
///
/// Sector vocabulary first, then general skills not already found. Never empty:
/// falls back to `FALLBACK_SKILLS` when nothing matches.
pub fn extract_skills(text: &str, sector: Sector) -> Vec<String> {
    let text_lower = text.to_lowercase();
    let mut found: Vec<String> = Vec::new();

    for skill in sector_skills(sector) {
        if text_lower.contains(&skill.to_lowercase()) {
            found.push(skill.to_string());
        }
    }

    for skill in sector_skills(Sector::General) {
        if text_lower.contains(&skill.to_lowercase()) && !found.iter().any(|f| f == skill) {
            found.push(skill.to_string());
        }
    }

    if found.is_empty() {
        return FALLBACK_SKILLS.iter().map(|s| s.to_string()).collect();
    }

    found.truncate(MAX_EXTRACTED_SKILLS);
    found
}

/// Number of the sector's vocabulary skills present in `text`.
pub fn count_sector_skills(text: &str, sector: Sector) -> usize {
    let text_lower = text.to_lowercase();
    sector_skills(sector)
        .iter()
        .filter(|skill| text_lower.contains(&skill.to_lowercase()))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_sector_skills_in_vocabulary_order() {
        let skills = extract_skills("Git, Docker and Python daily", Sector::Tech);
        assert_eq!(skills, vec!["Python", "Docker", "Git"]);
    }

    #[test]
    fn test_general_skills_appended_without_duplicates() {
        let skills = extract_skills(
            "Strong communication and leadership in marketing",
            Sector::Business,
        );
        // Leadership and Communication come from the business list; general adds nothing new
        assert_eq!(skills, vec!["Leadership", "Communication", "Marketing"]);
    }

    #[test]
    fn test_general_skills_follow_sector_skills() {
        let skills = extract_skills("Python developer with great teamwork", Sector::Tech);
        assert_eq!(skills, vec!["Python", "Teamwork"]);
    }

    #[test]
    fn test_fallback_when_nothing_matches() {
        let skills = extract_skills("Enjoys long walks", Sector::Tech);
        assert_eq!(skills, vec!["Communication", "Teamwork", "Problem Solving"]);
        assert_eq!(extract_skills("", Sector::General).len(), 3);
    }

    #[test]
    fn test_truncated_to_twelve() {
        let text = "Python Java JavaScript React Node.js SQL AWS Docker Machine Learning \
                    Data Analysis HTML CSS Git Agile Scrum TypeScript";
        let skills = extract_skills(text, Sector::Tech);
        assert_eq!(skills.len(), MAX_EXTRACTED_SKILLS);
        assert_eq!(skills[0], "Python");
        assert_eq!(skills[11], "CSS");
    }

    #[test]
    fn test_count_sector_skills() {
        assert_eq!(count_sector_skills("python, git", Sector::Tech), 2);
        assert_eq!(count_sector_skills("python, git", Sector::Nursing), 0);
    }
}
