//! Sector classification. Maps résumé text plus target role to one coarse domain tag.

use serde::{Deserialize, Serialize};

/// Coarse domain of a résumé / role. Closed set; `General` when nothing matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sector {
    Tech,
    Medical,
    Nursing,
    Physio,
    Business,
    Education,
    #[default]
    General,
}

impl Sector {
    #[cfg(test)]
    pub const ALL: [Sector; 7] = [
        Sector::Tech,
        Sector::Medical,
        Sector::Nursing,
        Sector::Physio,
        Sector::Business,
        Sector::Education,
        Sector::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sector::Tech => "tech",
            Sector::Medical => "medical",
            Sector::Nursing => "nursing",
            Sector::Physio => "physio",
            Sector::Business => "business",
            Sector::Education => "education",
            Sector::General => "general",
        }
    }

    /// Healthcare sectors share résumé advice (certifications, clinical hours).
    pub fn is_healthcare(&self) -> bool {
        matches!(self, Sector::Medical | Sector::Nursing | Sector::Physio)
    }
}

/// Marker substrings per sector, in evaluation order.
///
/// Order is load-bearing: nursing is checked before medical and tech, so
/// "nurse … developer" is nursing.
const SECTOR_MARKERS: &[(Sector, &[&str])] = &[
    (
        Sector::Nursing,
        &["nurse", "nursing", "rn", "bsc nursing", "patient care", "medication"],
    ),
    (
        Sector::Physio,
        &["physiotherapy", "physio", "physical therapy", "rehabilitation", "therapy"],
    ),
    (
        Sector::Medical,
        &[
            "patient",
            "hospital",
            "clinic",
            "medical",
            "healthcare",
            "doctor",
            "physician",
            "surgery",
            "diagnosis",
            "treatment",
            "mbbs",
            "md",
        ],
    ),
    (
        Sector::Tech,
        &["software", "developer", "programming", "engineer", "data", "code", "web", "app"],
    ),
    (
        Sector::Education,
        &["teacher", "professor", "education", "teaching", "school", "college"],
    ),
    (
        Sector::Business,
        &["manager", "business", "marketing", "sales", "finance", "mba"],
    ),
];

/// Classifies `text` + `target_role` into a sector. First marker set with any hit wins.
pub fn classify_sector(text: &str, target_role: &str) -> Sector {
    let haystack = format!("{} {}", text.to_lowercase(), target_role.to_lowercase());

    SECTOR_MARKERS
        .iter()
        .find(|(_, markers)| markers.iter().any(|m| haystack.contains(m)))
        .map(|(sector, _)| *sector)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nursing_beats_tech() {
        let sector = classify_sector("Registered nurse turned web developer", "");
        assert_eq!(sector, Sector::Nursing);
    }

    #[test]
    fn test_role_alone_classifies() {
        assert_eq!(classify_sector("", "Software Engineer"), Sector::Tech);
        assert_eq!(classify_sector("", "High School Teacher"), Sector::Education);
        assert_eq!(classify_sector("", "Sales Manager"), Sector::Business);
    }

    #[test]
    fn test_physio_before_medical() {
        // "patient" is a medical marker, "rehabilitation" a physio marker
        let sector = classify_sector("Patient rehabilitation programmes", "");
        assert_eq!(sector, Sector::Physio);
    }

    #[test]
    fn test_no_markers_is_general() {
        assert_eq!(classify_sector("Loves hiking", "Chef"), Sector::General);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify_sector("HOSPITAL VOLUNTEER", ""), Sector::Medical);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let text = "Managed a team of developers at a hospital";
        let first = classify_sector(text, "Director");
        for _ in 0..10 {
            assert_eq!(classify_sector(text, "Director"), first);
        }
    }

    #[test]
    fn test_sector_serializes_lowercase() {
        let json = serde_json::to_string(&Sector::Physio).unwrap();
        assert_eq!(json, r#""physio""#);
        for sector in Sector::ALL {
            let json = serde_json::to_string(&sector).unwrap();
            assert_eq!(json, format!("\"{}\"", sector.as_str()));
        }
    }
}
