//! ATS scoring: an additive, bounded heuristic over résumé text and target role.
//!
//! Algorithm:
//! 1. base 50
//! 2. +4 per section keyword present (max +28)
//! 3. +8 if any digit appears (quantified achievements)
//! 4. +4 per role word longer than 3 characters found in the text
//! 5. +min(15, 3 × sector vocabulary hits)
//! 6. +8 for 300–1000 words, +4 above 1000
//!
//! The total is clamped to [35, 95]. A text with no words scores the floor.

use serde::Serialize;
use tracing::debug;

use crate::analysis::sector::{classify_sector, Sector};
use crate::analysis::skills::count_sector_skills;

pub const ATS_FLOOR: u32 = 35;
pub const ATS_CEILING: u32 = 95;

const BASE_SCORE: u32 = 50;
const SECTION_KEYWORDS: &[&str] = &[
    "experience",
    "education",
    "skills",
    "summary",
    "objective",
    "qualification",
    "training",
];
const SECTION_POINTS: u32 = 4;
const QUANTIFIED_POINTS: u32 = 8;
const ROLE_WORD_POINTS: u32 = 4;
const ROLE_WORD_MIN_LEN: usize = 4;
const SECTOR_SKILL_POINTS: u32 = 3;
const SECTOR_DENSITY_CAP: u32 = 15;

/// Per-component contributions, kept for logging and tests.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AtsBreakdown {
    pub sector: Sector,
    pub sections: u32,
    pub quantified: u32,
    pub role_keywords: u32,
    pub sector_density: u32,
    pub length: u32,
    pub word_count: usize,
}

impl AtsBreakdown {
    /// Clamped final score.
    pub fn total(&self) -> u32 {
        if self.word_count == 0 {
            return ATS_FLOOR;
        }
        let raw = BASE_SCORE
            + self.sections
            + self.quantified
            + self.role_keywords
            + self.sector_density
            + self.length;
        raw.clamp(ATS_FLOOR, ATS_CEILING)
    }
}

pub fn score_breakdown(resume_text: &str, target_role: &str) -> AtsBreakdown {
    let text_lower = resume_text.to_lowercase();
    let sector = classify_sector(resume_text, target_role);

    let sections = SECTION_KEYWORDS
        .iter()
        .filter(|kw| text_lower.contains(*kw))
        .count() as u32
        * SECTION_POINTS;

    let quantified = if resume_text.chars().any(char::is_numeric) {
        QUANTIFIED_POINTS
    } else {
        0
    };

    let role_keywords = target_role
        .to_lowercase()
        .split_whitespace()
        .filter(|word| word.chars().count() >= ROLE_WORD_MIN_LEN && text_lower.contains(*word))
        .count() as u32
        * ROLE_WORD_POINTS;

    let sector_density =
        (count_sector_skills(resume_text, sector) as u32 * SECTOR_SKILL_POINTS).min(SECTOR_DENSITY_CAP);

    let word_count = resume_text.split_whitespace().count();
    let length = match word_count {
        300..=1000 => 8,
        n if n > 1000 => 4,
        _ => 0,
    };

    AtsBreakdown {
        sector,
        sections,
        quantified,
        role_keywords,
        sector_density,
        length,
        word_count,
    }
}

/// ATS score in [35, 95].
pub fn score_resume(resume_text: &str, target_role: &str) -> u32 {
    let breakdown = score_breakdown(resume_text, target_role);
    debug!("ATS components: {breakdown:?}");
    breakdown.total()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_software_engineer_scenario() {
        let text = "Python, Git, 5 years experience, developed 3 products";
        let breakdown = score_breakdown(text, "Software Engineer");
        assert_eq!(breakdown.sector, Sector::Tech);
        assert_eq!(breakdown.quantified, 8);
        assert_eq!(breakdown.sector_density, 6);
        let score = breakdown.total();
        assert!(score >= 65, "Expected ≥65, got {score}");
    }

    #[test]
    fn test_empty_text_scores_floor() {
        assert_eq!(score_resume("", "Nurse"), ATS_FLOOR);
        assert_eq!(score_resume("   \n\t ", "Software Engineer"), ATS_FLOOR);
    }

    #[test]
    fn test_plain_text_scores_base() {
        assert_eq!(score_resume("hello there", "Chef"), 50);
    }

    #[test]
    fn test_sections_capped_at_28() {
        let text = SECTION_KEYWORDS.join(" ");
        let breakdown = score_breakdown(&text, "");
        assert_eq!(breakdown.sections, 28);
    }

    #[test]
    fn test_short_role_words_ignored() {
        // "dev" is too short, "lead" counts
        let breakdown = score_breakdown("lead dev", "Lead Dev");
        assert_eq!(breakdown.role_keywords, 4);
    }

    #[test]
    fn test_sector_density_capped_at_15() {
        let text = "Python Java React SQL AWS Docker Linux";
        let breakdown = score_breakdown(text, "Software Engineer");
        assert_eq!(breakdown.sector, Sector::Tech);
        assert_eq!(breakdown.sector_density, 15);
    }

    #[test]
    fn test_nursing_marker_inside_word_claims_sector() {
        // "rn" inside "Kubernetes" is a nursing hit, so no tech vocabulary is counted
        let text = "Python Java React SQL AWS Docker Kubernetes";
        let breakdown = score_breakdown(text, "Software Engineer");
        assert_eq!(breakdown.sector, Sector::Nursing);
        assert_eq!(breakdown.sector_density, 0);
    }

    #[test]
    fn test_non_ascii_digits_count_as_quantified() {
        assert_eq!(score_breakdown("managed ٥ teams", "").quantified, QUANTIFIED_POINTS);
        assert_eq!(score_breakdown("managed five teams", "").quantified, 0);
    }

    #[test]
    fn test_length_bands() {
        let mid = "word ".repeat(500);
        assert_eq!(score_breakdown(&mid, "").length, 8);
        let long = "word ".repeat(1500);
        assert_eq!(score_breakdown(&long, "").length, 4);
        let short = "word ".repeat(299);
        assert_eq!(score_breakdown(&short, "").length, 0);
    }

    #[test]
    fn test_score_never_exceeds_ceiling() {
        let mut text = SECTION_KEYWORDS.join(" ");
        text.push_str(" 2019 Python Java React SQL AWS Docker senior software engineer ");
        text.push_str(&"word ".repeat(400));
        let breakdown = score_breakdown(&text, "Senior Software Engineer");
        assert!(50 + breakdown.sections + breakdown.quantified + breakdown.sector_density > 95);
        assert_eq!(breakdown.total(), ATS_CEILING);
    }

    #[test]
    fn test_score_always_within_bounds() {
        let samples = [
            ("", ""),
            ("x", "y"),
            ("Nurse with 10 years of patient care experience", "Registered Nurse"),
            ("education skills summary objective", "Teacher"),
        ];
        for (text, role) in samples {
            let score = score_resume(text, role);
            assert!((ATS_FLOOR..=ATS_CEILING).contains(&score), "{score} out of bounds");
        }
    }
}
