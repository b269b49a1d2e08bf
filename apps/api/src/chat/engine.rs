//! Conversation entry point: one call per chat turn.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info};

use crate::analysis::sector::classify_sector;
use crate::chat::history::ChatTurn;
use crate::chat::intents::{route, Turn};
use crate::session::SessionStore;

/// Analysis payload a client may attach to seed a user with no session yet.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResumeContext {
    #[serde(default)]
    pub target_role: String,
    #[serde(default)]
    pub resume_content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub user_id: String,
    pub message: String,
    #[serde(default)]
    pub resume_context: Option<ResumeContext>,
    #[serde(default)]
    pub chat_history: Vec<ChatTurn>,
}

#[derive(Clone)]
pub struct ConversationEngine {
    store: Arc<dyn SessionStore>,
}

impl ConversationEngine {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Answers one chat turn. Never fails: every path produces a reply.
    ///
    /// The user's session stays locked for the whole turn, so roadmap commands
    /// from concurrent requests apply one after another.
    pub async fn respond(&self, request: &ChatRequest) -> String {
        let mut session = self.store.checkout(&request.user_id).await;

        if let Some(resume) = &request.resume_context {
            if session.is_blank() {
                session.target_role = resume.target_role.clone();
                session.sector = classify_sector(&resume.resume_content, &resume.target_role);
                session.touch();
                info!(
                    "Seeded session for user {} from resume context (sector={})",
                    request.user_id,
                    session.sector.as_str()
                );
            }
        }

        let mut turn = Turn::new(
            &request.message,
            &mut session,
            &request.chat_history,
            request.resume_context.is_some(),
        );
        let (intent, reply) = route(&mut turn);
        debug!(
            "Chat intent {:?} (variation {}) for user {}",
            intent, turn.variation, request.user_id
        );

        reply
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze_text;
    use crate::analysis::sector::Sector;
    use crate::roadmap::{generate_roadmap, Roadmap, WeekPlan};
    use crate::session::{InMemorySessionStore, SessionContext};

    fn engine() -> (ConversationEngine, Arc<InMemorySessionStore>) {
        let store = Arc::new(InMemorySessionStore::new());
        (ConversationEngine::new(store.clone()), store)
    }

    fn request(user_id: &str, message: &str) -> ChatRequest {
        ChatRequest {
            user_id: user_id.to_string(),
            message: message.to_string(),
            resume_context: None,
            chat_history: Vec::new(),
        }
    }

    fn topics(roadmap: &Roadmap) -> Vec<String> {
        roadmap.weeks().map(|(_, plan)| plan.topic.clone()).collect()
    }

    #[tokio::test]
    async fn test_show_roadmap_without_session() {
        let (engine, store) = engine();
        let reply = engine.respond(&request("new-user", "show my roadmap")).await;
        assert!(reply.starts_with("You don't have a roadmap yet!"));
        assert!(reply.contains("Upload your resume first"));
        assert!(reply.contains("your desired career"));
        assert!(store.get("new-user").await.unwrap().roadmap.is_empty());
    }

    #[tokio::test]
    async fn test_show_roadmap_lists_weeks() {
        let (engine, store) = engine();
        let (_, context) = analyze_text("Python, Git", "Software Engineer");
        store.put("u1", context).await;

        let reply = engine.respond(&request("u1", "show my roadmap")).await;
        assert!(reply.contains("Learning Roadmap for Software Engineer"));
        assert!(reply.contains("**Week 1:** Java Fundamentals"));
        assert!(reply.contains("**Week 4:** Integration & Review"));
    }

    #[tokio::test]
    async fn test_add_skill_appends_week() {
        let (engine, store) = engine();
        let mut roadmap = Roadmap::default();
        for topic in ["SQL Fundamentals", "SQL Practice", "Advanced SQL"] {
            roadmap.push_week(WeekPlan::new(topic, &[]));
        }
        let context = SessionContext {
            target_role: "Data Analyst".to_string(),
            roadmap,
            ..Default::default()
        };
        store.put("u1", context).await;

        let reply = engine.respond(&request("u1", "add Python to my roadmap")).await;
        assert!(reply.contains("I've added **Python** to your roadmap as Week 4"));

        let session = store.get("u1").await.unwrap();
        assert_eq!(session.roadmap.len(), 4);
        let (label, week) = session.roadmap.weeks().last().unwrap();
        assert_eq!(label, "Week 4");
        assert_eq!(week.topic, "Python Fundamentals");
        assert_eq!(week.resources, vec!["Online courses", "Documentation", "Practice projects"]);
    }

    #[tokio::test]
    async fn test_add_without_roadmap_asks_for_one() {
        let (engine, store) = engine();
        let reply = engine.respond(&request("u1", "add Python to my roadmap")).await;
        assert!(reply.starts_with("I can add a skill to your roadmap!"));
        assert!(store.get("u1").await.unwrap().roadmap.is_empty());
    }

    #[tokio::test]
    async fn test_extend_adds_two_advanced_weeks() {
        let (engine, store) = engine();
        let skills_need: Vec<String> = ["Java", "Docker", "AWS"].iter().map(|s| s.to_string()).collect();
        let roadmap = generate_roadmap(&skills_need, "Software Engineer");
        let before = topics(&roadmap);
        store
            .put(
                "u1",
                SessionContext {
                    skills_need,
                    roadmap,
                    ..Default::default()
                },
            )
            .await;

        let reply = engine.respond(&request("u1", "extend the roadmap")).await;
        assert!(reply.contains("**6 weeks** instead of 4"));

        let after = topics(&store.get("u1").await.unwrap().roadmap);
        assert_eq!(after.len(), 6);
        assert_eq!(&after[..4], &before[..]);
        assert_eq!(after[4], "Advanced Docker");
        assert_eq!(after[5], "Advanced AWS");
    }

    #[tokio::test]
    async fn test_extend_needs_skills_to_learn() {
        let (engine, store) = engine();
        store
            .put(
                "u1",
                SessionContext {
                    roadmap: generate_roadmap(&[], ""),
                    ..Default::default()
                },
            )
            .await;
        let reply = engine.respond(&request("u1", "make the roadmap longer")).await;
        assert!(reply.starts_with("I can extend your roadmap once you have one!"));
        assert_eq!(store.get("u1").await.unwrap().roadmap.len(), 4);
    }

    #[tokio::test]
    async fn test_focus_replaces_roadmap() {
        let (engine, store) = engine();
        let (_, context) = analyze_text("Python", "Software Engineer");
        store.put("u1", context).await;

        let reply = engine.respond(&request("u1", "focus my learning on docker")).await;
        assert!(reply.contains("focus on **Docker**"));

        let session = store.get("u1").await.unwrap();
        assert_eq!(session.roadmap, generate_roadmap(&["Docker".to_string()], "Software Engineer"));
        assert_eq!(session.roadmap_goal, "Software Engineer");
    }

    #[tokio::test]
    async fn test_create_sets_new_goal() {
        let (engine, store) = engine();
        let reply = engine
            .respond(&request("u1", "Create a roadmap for data scientist"))
            .await;
        assert!(reply.starts_with("🚀 Created a fresh roadmap for **Data Scientist**!"));

        let session = store.get("u1").await.unwrap();
        assert_eq!(session.roadmap_goal, "Data Scientist");
        assert_eq!(session.roadmap.first().unwrap().topic, "Python Fundamentals");
        assert_eq!(session.roadmap.len(), 4);
    }

    #[tokio::test]
    async fn test_questions_about_roadmap_leave_it_unchanged() {
        let (engine, store) = engine();
        let (_, context) = analyze_text("Python, Git", "Software Engineer");
        let original = context.roadmap.clone();
        store.put("u1", context).await;

        for message in [
            "is my roadmap longer than a month?",
            "show my roadmap, i created it yesterday",
            "can you focus my roadmap?",
            "what did you add to my roadmap",
        ] {
            let reply = engine.respond(&request("u1", message)).await;
            assert!(
                reply.contains("Learning Roadmap for Software Engineer"),
                "{message:?} did not show the roadmap"
            );
            let session = store.get("u1").await.unwrap();
            assert_eq!(session.roadmap, original, "{message:?} changed the roadmap");
            assert_eq!(session.roadmap_goal, "Software Engineer");
        }
    }

    #[tokio::test]
    async fn test_replies_are_deterministic() {
        let (engine, _) = engine();
        for message in ["What salary should I ask for?", "hello", "xyz", "career switch"] {
            let first = engine.respond(&request("u1", message)).await;
            let second = engine.respond(&request("u1", message)).await;
            assert_eq!(first, second, "reply to {message:?} changed");
        }
    }

    #[tokio::test]
    async fn test_resume_context_seeds_blank_session() {
        let (engine, store) = engine();
        let mut req = request("u1", "xyz");
        req.resume_context = Some(ResumeContext {
            target_role: "Registered Nurse".to_string(),
            resume_content: "ICU ward experience".to_string(),
        });

        let reply = engine.respond(&req).await;
        assert!(reply.contains("Registered Nurse"));

        let session = store.get("u1").await.unwrap();
        assert_eq!(session.target_role, "Registered Nurse");
        assert_eq!(session.sector, Sector::Nursing);
        assert!(session.roadmap.is_empty());
    }

    #[tokio::test]
    async fn test_resume_context_ignored_for_existing_session() {
        let (engine, store) = engine();
        let (_, context) = analyze_text("Python", "Software Engineer");
        store.put("u1", context).await;

        let mut req = request("u1", "xyz");
        req.resume_context = Some(ResumeContext {
            target_role: "Nurse".to_string(),
            resume_content: String::new(),
        });
        engine.respond(&req).await;

        let session = store.get("u1").await.unwrap();
        assert_eq!(session.target_role, "Software Engineer");
        assert_eq!(session.sector, Sector::Tech);
    }

    #[tokio::test]
    async fn test_resume_lookups() {
        let (engine, store) = engine();
        let text = "Jane Doe\njane@example.com\nExperience\nStaff Nurse, City Hospital\nEducation\nBSc Nursing";
        let (_, context) = analyze_text(text, "Nurse");
        store.put("u1", context).await;

        let name = engine.respond(&request("u1", "who am i")).await;
        assert!(name.contains("your name is **Jane Doe**"));

        let experience = engine.respond(&request("u1", "where did i work")).await;
        assert!(experience.contains("Experience\nStaff Nurse, City Hospital"));

        let education = engine.respond(&request("u1", "where did i study")).await;
        assert!(education.contains("Education\nBSc Nursing"));
    }

    #[tokio::test]
    async fn test_resume_lookups_without_resume() {
        let (engine, _) = engine();
        let reply = engine.respond(&request("u1", "where did i work")).await;
        assert_eq!(
            reply,
            "I don't have your resume loaded yet. Please upload your resume first!"
        );
    }

    #[tokio::test]
    async fn test_more_follow_up_uses_history() {
        let (engine, _) = engine();
        let mut req = request("u1", "tell me more");
        req.chat_history = vec![
            ChatTurn::user("Can you check my resume?"),
            ChatTurn::assistant("Sure, send it over."),
        ];
        let reply = engine.respond(&req).await;
        assert!(reply.contains("resume") || reply.contains("Key Achievements"));
    }

    #[tokio::test]
    async fn test_affirmative_follow_up_continues_interview_thread() {
        let (engine, _) = engine();
        let mut req = request("u1", "yes");
        req.chat_history = vec![
            ChatTurn::user("x"),
            ChatTurn::assistant("Shall we run a mock interview?"),
            ChatTurn::user("hmm"),
        ];
        let reply = engine.respond(&req).await;
        assert!(reply.starts_with("Great! Let's prepare you for interviews."));
    }

    #[tokio::test]
    async fn test_healthcare_resume_tips() {
        let (engine, store) = engine();
        let (_, context) = analyze_text("patient care on the ward", "Nurse");
        store.put("u1", context).await;
        let reply = engine.respond(&request("u1", "improve my cv")).await;
        assert!(reply.contains("healthcare") || reply.contains("Certifications first"));
    }

    #[tokio::test]
    async fn test_history_with_unknown_roles_still_answers() {
        let (engine, _) = engine();
        let req: ChatRequest = serde_json::from_str(
            r#"{
                "user_id": "u1",
                "message": "yes",
                "chat_history": [
                    {"role": "bot", "content": "beep"},
                    {"role": "assistant", "content": "Shall we run a mock interview?"},
                    {"content": "ok"}
                ]
            }"#,
        )
        .unwrap();
        let reply = engine.respond(&req).await;
        assert!(reply.starts_with("Great! Let's prepare you for interviews."));
    }
}
