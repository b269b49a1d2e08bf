use crate::lexicon::{DEFAULT_REQUIREMENTS, ROLE_REQUIREMENTS};

/// Canonical required skills for a role.
///
/// Each role key is tested as a substring of the lowercased role, in declaration
/// order; the first hit wins. Unmatched roles get `DEFAULT_REQUIREMENTS`.
pub fn required_skills(target_role: &str) -> &'static [&'static str] {
    let role_lower = target_role.to_lowercase();

    ROLE_REQUIREMENTS
        .iter()
        .find(|(key, _)| role_lower.contains(key))
        .map(|(_, required)| *required)
        .unwrap_or(DEFAULT_REQUIREMENTS)
}

/// Required skills for `target_role` that are not in `skills_have`, in requirement order.
///
/// When nothing is missing, returns two advanced placeholders so that roadmap
/// generation always receives a non-empty list.
pub fn missing_skills(skills_have: &[String], target_role: &str) -> Vec<String> {
    let required = required_skills(target_role);

    let missing: Vec<String> = required
        .iter()
        .filter(|skill| !skills_have.iter().any(|have| have.as_str() == **skill))
        .map(|skill| skill.to_string())
        .collect();

    if missing.is_empty() {
        return vec![
            format!("Advanced {}", required[0]),
            format!("Specialized {}", required[1]),
        ];
    }

    missing
}
