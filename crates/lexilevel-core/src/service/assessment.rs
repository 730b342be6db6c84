//! Text submission service.
//!
//! Runs the assessment pipeline on a submitted text, builds the
//! recommendations, and appends the outcome to the user's history.

use lexilevel_types::assessment::{Assessment, RecommendationResult};
use lexilevel_types::error::RepositoryError;
use lexilevel_types::history::HistoryRecord;
use lexilevel_types::user::UserId;
use serde::Serialize;

use crate::analysis::assess_level;
use crate::recommend::{parse_interest_tags, recommendation};
use crate::repository::history::HistoryRepository;

/// Everything computed for one submission, before anything is stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    /// Interest tags parsed from the raw comma-separated list.
    pub tags: Vec<String>,
    pub assessment: Assessment,
    pub result: RecommendationResult,
}

/// Assess `text` and recommend content for the comma-separated `raw_hobbies`.
///
/// Pure: no storage, no clock.
pub fn evaluate(text: &str, raw_hobbies: &str) -> Evaluation {
    let tags = parse_interest_tags(raw_hobbies);
    let assessment = assess_level(text);
    let result = recommendation(assessment.level, &tags);
    Evaluation {
        tags,
        assessment,
        result,
    }
}

/// Service that evaluates submissions and records them per user.
pub struct AssessmentService<H: HistoryRepository> {
    history_repo: H,
}

impl<H: HistoryRepository> AssessmentService<H> {
    pub fn new(history_repo: H) -> Self {
        Self { history_repo }
    }

    /// Evaluate a submission and append it to the user's history.
    ///
    /// A failed append is logged and otherwise ignored: the user still gets
    /// their result.
    pub async fn submit(&self, user_id: &UserId, text: &str, raw_hobbies: &str) -> Evaluation {
        let evaluation = evaluate(text, raw_hobbies);

        let record = HistoryRecord::new(
            text.to_string(),
            evaluation.tags.clone(),
            evaluation.result.level,
        );
        if let Err(e) = self.history_repo.append(user_id, &record).await {
            tracing::warn!(user_id = %user_id, error = %e, "failed to save history record");
        } else {
            tracing::info!(
                user_id = %user_id,
                level = %record.level,
                tags = record.hobbies.len(),
                "saved history record"
            );
        }

        evaluation
    }

    /// The user's previous submissions, newest first.
    pub async fn history(&self, user_id: &UserId) -> Result<Vec<HistoryRecord>, RepositoryError> {
        self.history_repo.list_history(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexilevel_types::level::ProficiencyLevel;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory history store; newest first on read.
    #[derive(Default)]
    struct MemoryHistory {
        records: Mutex<HashMap<UserId, Vec<HistoryRecord>>>,
    }

    impl HistoryRepository for MemoryHistory {
        async fn append(&self, user_id: &UserId, record: &HistoryRecord) -> Result<(), RepositoryError> {
            self.records
                .lock()
                .unwrap()
                .entry(user_id.clone())
                .or_default()
                .push(record.clone());
            Ok(())
        }

        async fn list_history(&self, user_id: &UserId) -> Result<Vec<HistoryRecord>, RepositoryError> {
            let mut records = self
                .records
                .lock()
                .unwrap()
                .get(user_id)
                .cloned()
                .unwrap_or_default();
            records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
            Ok(records)
        }
    }

    struct BrokenHistory;

    impl HistoryRepository for BrokenHistory {
        async fn append(&self, _: &UserId, _: &HistoryRecord) -> Result<(), RepositoryError> {
            Err(RepositoryError::Connection)
        }

        async fn list_history(&self, _: &UserId) -> Result<Vec<HistoryRecord>, RepositoryError> {
            Err(RepositoryError::Connection)
        }
    }

    #[test]
    fn test_evaluate_scenario() {
        let evaluation = evaluate("Cat sat.", "music");
        assert_eq!(evaluation.tags, vec!["music"]);
        assert_eq!(evaluation.result.level, ProficiencyLevel::Beginner);
        assert_eq!(
            evaluation.result.suggestions,
            vec![
                "Basic grammar videos",
                "Simple conversation exercises",
                "English lessons about music",
            ]
        );
    }

    #[test]
    fn test_evaluate_letter_free_text() {
        let evaluation = evaluate("12345 !!!", "");
        assert_eq!(evaluation.result.level, ProficiencyLevel::Unknown);
        // The empty hobby field still parses to one empty tag.
        assert_eq!(evaluation.result.suggestions, vec!["English lessons about "]);
    }

    #[tokio::test]
    async fn test_submit_records_history() {
        let service = AssessmentService::new(MemoryHistory::default());
        let user = UserId::new("user-1");

        let evaluation = service.submit(&user, "Cat sat.", "music, art").await;
        assert_eq!(evaluation.result.suggestions.len(), 4);

        let history = service.history(&user).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].text, "Cat sat.");
        assert_eq!(history[0].hobbies, vec!["music", "art"]);
        assert_eq!(history[0].level, ProficiencyLevel::Beginner);
    }

    #[tokio::test]
    async fn test_history_is_per_user_and_newest_first() {
        let service = AssessmentService::new(MemoryHistory::default());
        let alice = UserId::new("alice");
        let bob = UserId::new("bob");

        service.submit(&alice, "First text.", "a").await;
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        service.submit(&alice, "Second text.", "b").await;
        service.submit(&bob, "Other text.", "c").await;

        let history = service.history(&alice).await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].text, "Second text.");
        assert_eq!(history[1].text, "First text.");
        assert_eq!(service.history(&bob).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_submit_survives_storage_failure() {
        let service = AssessmentService::new(BrokenHistory);
        let evaluation = service
            .submit(&UserId::new("u"), "Cat sat.", "music")
            .await;
        assert_eq!(evaluation.result.level, ProficiencyLevel::Beginner);
        assert!(service.history(&UserId::new("u")).await.is_err());
    }
}
