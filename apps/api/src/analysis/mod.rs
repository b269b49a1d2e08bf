// Résumé analysis pipeline.
// Flow: document text → sector → ATS score & skills → requirements → roadmap → session.

pub mod ats;
pub mod handlers;
pub mod requirements;
pub mod sector;
pub mod skills;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::analysis::ats::score_resume;
use crate::analysis::requirements::missing_skills;
use crate::analysis::sector::classify_sector;
use crate::analysis::skills::extract_skills;
use crate::document::{DocumentReadError, DocumentReader, DocumentText};
use crate::roadmap::{generate_roadmap, Roadmap};
use crate::session::{SessionContext, SessionStore};

/// Result returned to analysis callers.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub ats_score: u32,
    pub skills_you_have: Vec<String>,
    pub skills_you_need: Vec<String>,
    pub resume_content: String,
    pub roadmap: Roadmap,
}

impl AnalysisReport {
    /// Zeroed result for documents that could not be read.
    pub fn empty() -> Self {
        Self {
            ats_score: 0,
            skills_you_have: Vec::new(),
            skills_you_need: Vec::new(),
            resume_content: String::new(),
            roadmap: Roadmap::default(),
        }
    }
}

/// Runs the pure analysis pipeline over extracted text.
///
/// Returns the caller-facing report and the session context that captures it
/// (with `roadmap_goal` set to the target role).
pub fn analyze_text(text: &str, target_role: &str) -> (AnalysisReport, SessionContext) {
    let sector = classify_sector(text, target_role);
    let ats_score = score_resume(text, target_role);
    let skills_have = extract_skills(text, sector);
    let skills_need = missing_skills(&skills_have, target_role);
    let roadmap = generate_roadmap(&skills_need, target_role);

    info!(
        "Analysis: sector={}, ats_score={}, skills_have={}, skills_need={}",
        sector.as_str(),
        ats_score,
        skills_have.len(),
        skills_need.len()
    );

    let report = AnalysisReport {
        ats_score,
        skills_you_have: skills_have.clone(),
        skills_you_need: skills_need.clone(),
        resume_content: text.to_string(),
        roadmap: roadmap.clone(),
    };

    let context = SessionContext {
        resume_text: text.to_string(),
        target_role: target_role.to_string(),
        sector,
        skills_have,
        skills_need,
        roadmap,
        roadmap_goal: target_role.to_string(),
        ..Default::default()
    };

    (report, context)
}

/// Analysis entry point: document path + target role (+ optional user) → report.
#[derive(Clone)]
pub struct Analyzer {
    reader: Arc<dyn DocumentReader>,
    store: Arc<dyn SessionStore>,
}

impl Analyzer {
    pub fn new(reader: Arc<dyn DocumentReader>, store: Arc<dyn SessionStore>) -> Self {
        Self { reader, store }
    }

    /// Reads the document and analyzes it. An unreadable document yields
    /// `AnalysisReport::empty()` and leaves any stored session untouched.
    pub async fn analyze(
        &self,
        path: &Path,
        target_role: &str,
        user_id: Option<&str>,
    ) -> AnalysisReport {
        let document = match self.read_document(path.to_path_buf()).await {
            Ok(document) => document,
            Err(e) => {
                warn!("Resume analysis failed for {}: {e}", path.display());
                return AnalysisReport::empty();
            }
        };

        info!(
            "Read {} ({} paragraphs, {} chars)",
            path.display(),
            document.chunks.len(),
            document.full_text.len()
        );
        let (report, context) = analyze_text(&document.full_text, target_role);

        if let Some(user_id) = user_id.filter(|id| !id.is_empty()) {
            self.store.put(user_id, context).await;
            info!("Stored analysis session for user {user_id}");
        }

        report
    }

    async fn read_document(&self, path: PathBuf) -> Result<DocumentText, DocumentReadError> {
        let reader = Arc::clone(&self.reader);
        // CPU-bound extraction; a panic inside the extractor counts as unreadable.
        tokio::task::spawn_blocking(move || reader.read(&path))
            .await
            .map_err(|e| DocumentReadError::Extraction(format!("extraction task failed: {e}")))?
    }
}
