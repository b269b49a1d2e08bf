//! Argument parsers for roadmap commands.
//!
//! Each parser takes the case-folded message and returns the typed argument, or
//! `None` when nothing usable is left. Command words are removed as whole words,
//! never as substrings, so "python" and "data" survive intact.

const ADD_VERBS: [&str; 3] = ["add", "include", "put"];
const ADD_TRAILERS: [&str; 3] = ["to my roadmap", "to roadmap", "in my roadmap"];
const FOCUS_FILLER: [&str; 5] = ["focus", "on", "my", "roadmap", "learning"];
const CREATE_FILLER: [&str; 6] = ["create", "new", "roadmap", "plan", "for", "a"];

/// Shortest goal phrase accepted by `parse_new_goal`.
pub const MIN_GOAL_CHARS: usize = 3;

/// Skill named after the verb "add", "include" or "put".
///
/// Every verb present in the message is tried in order and the last one wins,
/// including a miss: "add to my roadmap" yields `None`.
pub fn parse_add_skill(text: &str) -> Option<String> {
    let tokens: Vec<&str> = text.split_whitespace().map(clean_token).collect();
    let mut skill = None;

    for verb in ADD_VERBS {
        let Some(at) = tokens.iter().position(|token| *token == verb) else {
            continue;
        };
        let mut remaining = tokens[at + 1..].join(" ");
        for trailer in ADD_TRAILERS {
            remaining = remaining.replace(trailer, "");
        }
        skill = remaining
            .split_whitespace()
            .find(|token| !token.is_empty())
            .map(capitalize);
    }

    skill
}

/// First word left after dropping focus filler words.
pub fn parse_focus_skill(text: &str) -> Option<String> {
    text.split_whitespace()
        .map(clean_token)
        .filter(|token| !token.is_empty() && !FOCUS_FILLER.contains(token))
        .map(capitalize)
        .next()
}

/// Title-cased goal phrase left after dropping creation filler words.
pub fn parse_new_goal(text: &str) -> Option<String> {
    let goal = text
        .split_whitespace()
        .map(clean_token)
        .filter(|token| !token.is_empty() && !CREATE_FILLER.contains(token))
        .collect::<Vec<_>>()
        .join(" ");

    if goal.chars().count() < MIN_GOAL_CHARS {
        return None;
    }
    Some(title_case(&goal))
}

/// Strips sentence punctuation and quotes around a token. Inner symbols stay
/// (`c++`, `node.js`).
fn clean_token(token: &str) -> &str {
    token.trim_matches(|c: char| matches!(c, '.' | ',' | '!' | '?' | ';' | ':' | '"' | '\'' | '(' | ')'))
}

/// First character upper-cased, the rest lower-cased.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Upper-cases every letter that follows a non-letter, lower-cases the rest.
pub fn title_case(phrase: &str) -> String {
    let mut out = String::with_capacity(phrase.len());
    let mut after_letter = false;
    for c in phrase.chars() {
        if after_letter {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        after_letter = c.is_alphabetic();
    }
    out
}
