//! Ordered intent cascade.
//!
//! Rules are evaluated top to bottom against the case-folded message and the
//! first match answers the turn. Order is a contract: an ambiguous message is
//! resolved by position in `INTENT_CASCADE`, never by best match.

use crate::chat::commands::parse_add_skill;
use crate::chat::history::{last_assistant_message, recent_topics, ChatTurn, Topic};
use crate::chat::replies;
use crate::chat::variation::variant_index;
use crate::session::SessionContext;

/// Shown wherever the session has no target role.
pub const DEFAULT_TARGET_ROLE: &str = "your desired career";
/// Affirmative follow-ups must be shorter than this many characters.
const SHORT_FOLLOW_UP_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    Thanks,
    ResumeIdentity,
    ResumeSummary,
    Experience,
    Education,
    ResumeSkills,
    RoadmapShow,
    RoadmapChangeMenu,
    RoadmapAdd,
    RoadmapFocus,
    RoadmapExtend,
    RoadmapCreate,
    RoadmapTips,
    MoreFollowUp,
    ResumeAdvice,
    Interview,
    SkillBuilding,
    CareerPath,
    Salary,
    JobSearch,
    Networking,
    AffirmativeFollowUp,
    Fallback,
}

/// Everything a rule may consult or mutate during one chat turn.
pub struct Turn<'a> {
    /// Trimmed, lower-cased message.
    pub text: String,
    pub variation: usize,
    pub session: &'a mut SessionContext,
    pub history: &'a [ChatTurn],
    pub topics: Vec<Topic>,
    /// The caller attached a résumé payload to this turn.
    pub resume_attached: bool,
}

impl<'a> Turn<'a> {
    pub fn new(
        message: &str,
        session: &'a mut SessionContext,
        history: &'a [ChatTurn],
        resume_attached: bool,
    ) -> Self {
        Self {
            text: message.trim().to_lowercase(),
            variation: variant_index(message),
            session,
            history,
            topics: recent_topics(history),
            resume_attached,
        }
    }

    pub fn mentions(&self, needle: &str) -> bool {
        self.text.contains(needle)
    }

    pub fn mentions_any(&self, needles: &[&str]) -> bool {
        needles.iter().any(|needle| self.text.contains(needle))
    }

    pub fn target_role(&self) -> &str {
        if self.session.target_role.is_empty() {
            DEFAULT_TARGET_ROLE
        } else {
            &self.session.target_role
        }
    }

    pub fn recently_discussed(&self, topic: Topic) -> bool {
        self.topics.contains(&topic)
    }
}

pub struct IntentRule {
    pub intent: Intent,
    pub matches: fn(&Turn<'_>) -> bool,
    pub respond: fn(&mut Turn<'_>) -> String,
}

macro_rules! rule {
    ($intent:ident, $matches:path, $respond:path) => {
        IntentRule {
            intent: Intent::$intent,
            matches: $matches,
            respond: $respond,
        }
    };
}

pub static INTENT_CASCADE: &[IntentRule] = &[
    rule!(Greeting, is_greeting, replies::greeting),
    rule!(Thanks, is_thanks, replies::thanks),
    rule!(ResumeIdentity, is_resume_identity, replies::resume_identity),
    rule!(ResumeSummary, is_resume_summary, replies::resume_summary),
    rule!(Experience, is_experience, replies::experience),
    rule!(Education, is_education, replies::education),
    rule!(ResumeSkills, is_resume_skills, replies::resume_skills),
    rule!(RoadmapShow, is_roadmap_show, replies::roadmap_show),
    rule!(RoadmapChangeMenu, is_roadmap_change_menu, replies::roadmap_change_menu),
    rule!(RoadmapAdd, is_roadmap_add, replies::roadmap_add),
    rule!(RoadmapFocus, is_roadmap_focus, replies::roadmap_focus),
    rule!(RoadmapExtend, is_roadmap_extend, replies::roadmap_extend),
    rule!(RoadmapCreate, is_roadmap_create, replies::roadmap_create),
    rule!(RoadmapTips, is_roadmap_tips, replies::roadmap_tips),
    rule!(MoreFollowUp, is_more_follow_up, replies::more_follow_up),
    rule!(ResumeAdvice, is_resume_advice, replies::resume_advice),
    rule!(Interview, is_interview, replies::interview),
    rule!(SkillBuilding, is_skill_building, replies::skill_building),
    rule!(CareerPath, is_career_path, replies::career_path),
    rule!(Salary, is_salary, replies::salary),
    rule!(JobSearch, is_job_search, replies::job_search),
    rule!(Networking, is_networking, replies::networking),
    rule!(AffirmativeFollowUp, is_affirmative_follow_up, replies::affirmative_follow_up),
    rule!(Fallback, always, replies::fallback),
];

/// Runs the cascade and returns the winning intent with its reply.
pub fn route(turn: &mut Turn<'_>) -> (Intent, String) {
    for rule in INTENT_CASCADE {
        if (rule.matches)(turn) {
            return (rule.intent, (rule.respond)(turn));
        }
    }
    (Intent::Fallback, replies::fallback(turn))
}

// ────────────────────────────────────────────────────────────────────────────
// Predicates
// ────────────────────────────────────────────────────────────────────────────

fn is_greeting(turn: &Turn<'_>) -> bool {
    turn.mentions_any(&["hello", "hi", "hey", "good morning", "good evening"])
}

fn is_thanks(turn: &Turn<'_>) -> bool {
    turn.mentions_any(&["thank", "thanks", "helpful", "great"])
}

fn is_resume_identity(turn: &Turn<'_>) -> bool {
    turn.mentions_any(&["my name", "what is my name", "who am i", "my resume"])
}

fn is_resume_summary(turn: &Turn<'_>) -> bool {
    turn.mentions_any(&[
        "show my resume",
        "what's in my resume",
        "my resume content",
        "resume summary",
        "summarize my resume",
    ])
}

fn is_experience(turn: &Turn<'_>) -> bool {
    turn.mentions_any(&[
        "my experience",
        "work experience",
        "past jobs",
        "previous work",
        "where did i work",
    ])
}

fn is_education(turn: &Turn<'_>) -> bool {
    turn.mentions_any(&[
        "my education",
        "my degree",
        "my school",
        "my university",
        "my college",
        "where did i study",
    ])
}

fn is_resume_skills(turn: &Turn<'_>) -> bool {
    turn.mentions_any(&[
        "my skills",
        "what skills do i have",
        "skills from resume",
        "skills in my resume",
    ])
}

/// "Add Python to my roadmap" also reads as "my roadmap". The show and menu
/// rules yield only when an add command names a skill; focus, extend and
/// create stay behind them.
fn is_explicit_add(turn: &Turn<'_>) -> bool {
    is_roadmap_add(turn) && parse_add_skill(&turn.text).is_some()
}

fn is_roadmap_show(turn: &Turn<'_>) -> bool {
    turn.mentions_any(&[
        "show roadmap",
        "my roadmap",
        "current roadmap",
        "see roadmap",
        "view roadmap",
    ]) && !is_explicit_add(turn)
}

fn is_roadmap_change_menu(turn: &Turn<'_>) -> bool {
    turn.mentions_any(&[
        "change roadmap",
        "modify roadmap",
        "update roadmap",
        "different roadmap",
        "new roadmap",
    ]) && !is_explicit_add(turn)
}

fn is_roadmap_add(turn: &Turn<'_>) -> bool {
    turn.mentions("add") && turn.mentions("roadmap")
}

fn is_roadmap_focus(turn: &Turn<'_>) -> bool {
    turn.mentions("focus") && turn.mentions_any(&["roadmap", "learning"])
}

fn is_roadmap_extend(turn: &Turn<'_>) -> bool {
    turn.mentions_any(&["extend", "longer", "more weeks"]) && turn.mentions("roadmap")
}

fn is_roadmap_create(turn: &Turn<'_>) -> bool {
    turn.mentions("create") && turn.mentions_any(&["roadmap", "plan"])
}

fn is_roadmap_tips(turn: &Turn<'_>) -> bool {
    turn.mentions("roadmap") && turn.mentions_any(&["tip", "advice", "help"])
}

fn is_more_follow_up(turn: &Turn<'_>) -> bool {
    turn.mentions_any(&["more", "else", "another"])
        && (turn.recently_discussed(Topic::Resume) || turn.recently_discussed(Topic::Interview))
}

fn is_resume_advice(turn: &Turn<'_>) -> bool {
    turn.mentions_any(&["resume", "cv", "ats"])
}

fn is_interview(turn: &Turn<'_>) -> bool {
    turn.mentions_any(&["interview", "prepare", "question"])
}

fn is_skill_building(turn: &Turn<'_>) -> bool {
    turn.mentions_any(&["skill", "learn", "course", "improve", "study"])
}

fn is_career_path(turn: &Turn<'_>) -> bool {
    turn.mentions_any(&["career", "path", "switch", "transition", "change", "growth"])
}

fn is_salary(turn: &Turn<'_>) -> bool {
    turn.mentions_any(&["salary", "negotiate", "offer", "compensation", "pay"])
}

fn is_job_search(turn: &Turn<'_>) -> bool {
    turn.mentions_any(&["job", "apply", "search", "find", "hunting", "application"])
}

fn is_networking(turn: &Turn<'_>) -> bool {
    turn.mentions_any(&["network", "connect", "linkedin", "people"])
}

/// Thread a previous assistant turn continues on, if any.
pub(crate) fn follow_up_thread(turn: &Turn<'_>) -> Option<Topic> {
    let last = last_assistant_message(turn.history)?.to_lowercase();
    if last.contains("resume") {
        Some(Topic::Resume)
    } else if last.contains("interview") {
        Some(Topic::Interview)
    } else if last.contains("skill") || last.contains("learn") {
        Some(Topic::Skills)
    } else {
        None
    }
}

fn is_affirmative_follow_up(turn: &Turn<'_>) -> bool {
    turn.history.len() > 2
        && turn.text.chars().count() < SHORT_FOLLOW_UP_CHARS
        && turn.mentions_any(&["yes", "sure", "please"])
        && follow_up_thread(turn).is_some()
}

fn always(_: &Turn<'_>) -> bool {
    true
}
