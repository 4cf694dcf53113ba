//! The exercise detail session.
//!
//! Holds the single currently inspected exercise and the optional AI form
//! analysis scoped to it. At most one analysis request may be in flight per
//! open detail session; a new upload while one is pending is ignored until it
//! resolves or fails.

use std::cell::{Cell, RefCell};

use crate::catalog::ExerciseRecord;
use crate::error::Fault;
use crate::services::{CoachingService, MediaKind};

/// Shown in place of an analysis verdict when the service faults.
pub const ANALYSIS_FALLBACK: &str = "Error during AI analysis. Please try again.";

/// Detail-view session state.
#[derive(Default)]
pub struct SelectionSession {
    selected: RefCell<Option<ExerciseRecord>>,
    analyzing: Cell<bool>,
    last_analysis: RefCell<Option<String>>,
}

impl SelectionSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the detail view on a record. Re-selecting the current record is a
    /// no-op; switching records discards the previous record's analysis.
    pub fn select(&self, record: &ExerciseRecord) {
        let mut selected = self.selected.borrow_mut();
        if selected.as_ref().is_some_and(|current| current.id == record.id) {
            return;
        }
        *selected = Some(record.clone());
        drop(selected);
        *self.last_analysis.borrow_mut() = None;
    }

    /// Close the detail view. Safe to call when nothing is selected.
    pub fn clear(&self) {
        *self.selected.borrow_mut() = None;
        *self.last_analysis.borrow_mut() = None;
    }

    pub fn selected(&self) -> Option<ExerciseRecord> {
        self.selected.borrow().clone()
    }

    pub fn is_analyzing(&self) -> bool {
        self.analyzing.get()
    }

    pub fn last_analysis(&self) -> Option<String> {
        self.last_analysis.borrow().clone()
    }

    /// Start a form analysis for the selected exercise.
    ///
    /// Returns the prompt to send, or `None` when the request is rejected:
    /// nothing selected, or an analysis already in flight.
    pub fn begin_analysis(&self) -> Option<String> {
        if self.analyzing.get() {
            return None;
        }
        let prompt = self
            .selected
            .borrow()
            .as_ref()
            .map(|record| form_check_prompt(&record.name))?;
        self.analyzing.set(true);
        *self.last_analysis.borrow_mut() = None;
        Some(prompt)
    }

    /// Store the analysis outcome and clear the in-flight flag. Faults become
    /// the fixed fallback message so the view always has feedback to show.
    pub fn finish_analysis(&self, outcome: Result<String, Fault>) {
        let text = match outcome {
            Ok(verdict) => verdict,
            Err(_) => ANALYSIS_FALLBACK.to_string(),
        };
        *self.last_analysis.borrow_mut() = Some(text);
        self.analyzing.set(false);
    }

    /// Run a full analysis round-trip against the coaching service.
    pub async fn analyze(
        &self,
        media: &[u8],
        kind: MediaKind,
        mime_type: &str,
        coach: &dyn CoachingService,
    ) {
        let Some(prompt) = self.begin_analysis() else {
            return;
        };
        let mime = if mime_type.is_empty() {
            kind.fallback_mime()
        } else {
            mime_type
        };
        let outcome = coach.analyze_media(media, mime, &prompt).await;
        self.finish_analysis(outcome);
    }
}

/// Prompt for a form check on the named exercise.
fn form_check_prompt(exercise_name: &str) -> String {
    format!(
        "Help me analyze my form for {exercise_name}. Check for key alignment and technique."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::exercise_catalog;
    use crate::services::TurnPayload;
    use std::cell::Cell as StdCell;

    struct ScriptedAnalyzer {
        reply: Result<String, Fault>,
        calls: StdCell<usize>,
        last_mime: RefCell<String>,
        last_prompt: RefCell<String>,
    }

    impl ScriptedAnalyzer {
        fn new(reply: Result<String, Fault>) -> Self {
            Self {
                reply,
                calls: StdCell::new(0),
                last_mime: RefCell::new(String::new()),
                last_prompt: RefCell::new(String::new()),
            }
        }
    }

    #[async_trait::async_trait(?Send)]
    impl CoachingService for ScriptedAnalyzer {
        async fn chat(&self, _: &str, _: &[TurnPayload]) -> Result<String, Fault> {
            unreachable!("selection tests never chat")
        }

        async fn analyze_media(
            &self,
            _media: &[u8],
            mime_type: &str,
            prompt: &str,
        ) -> Result<String, Fault> {
            self.calls.set(self.calls.get() + 1);
            *self.last_mime.borrow_mut() = mime_type.to_string();
            *self.last_prompt.borrow_mut() = prompt.to_string();
            self.reply.clone()
        }
    }

    fn squat() -> &'static ExerciseRecord {
        &exercise_catalog()[0]
    }

    fn deadlift() -> &'static ExerciseRecord {
        &exercise_catalog()[1]
    }

    #[test]
    fn test_select_is_idempotent() {
        let session = SelectionSession::new();
        session.select(squat());
        session.finish_analysis(Ok("verdict".to_string()));

        // Re-selecting the same record keeps selection and analysis intact.
        session.select(squat());
        assert_eq!(session.selected().unwrap().id, squat().id);
        assert_eq!(session.last_analysis().as_deref(), Some("verdict"));
    }

    #[test]
    fn test_switching_records_resets_analysis() {
        let session = SelectionSession::new();
        session.select(squat());
        session.finish_analysis(Ok("verdict".to_string()));

        session.select(deadlift());
        assert_eq!(session.selected().unwrap().id, deadlift().id);
        assert!(session.last_analysis().is_none());
    }

    #[test]
    fn test_clear_is_safe_when_empty() {
        let session = SelectionSession::new();
        session.clear();
        session.clear();
        assert!(session.selected().is_none());
    }

    #[tokio::test]
    async fn test_analysis_stores_verdict() {
        let session = SelectionSession::new();
        session.select(squat());
        let coach = ScriptedAnalyzer::new(Ok("Solid depth, neutral spine.".to_string()));

        session
            .analyze(&[1, 2, 3], MediaKind::Image, "image/png", &coach)
            .await;

        assert_eq!(coach.calls.get(), 1);
        assert_eq!(*coach.last_mime.borrow(), "image/png");
        assert!(coach.last_prompt.borrow().contains("Barbell Back Squat"));
        assert_eq!(
            session.last_analysis().as_deref(),
            Some("Solid depth, neutral spine.")
        );
        assert!(!session.is_analyzing());
    }

    #[tokio::test]
    async fn test_analysis_failure_stores_fallback() {
        let session = SelectionSession::new();
        session.select(squat());
        let coach = ScriptedAnalyzer::new(Err(Fault::Network("down".to_string())));

        session
            .analyze(&[0u8; 4], MediaKind::Video, "video/webm", &coach)
            .await;

        assert_eq!(session.last_analysis().as_deref(), Some(ANALYSIS_FALLBACK));
        assert!(!session.is_analyzing());
    }

    #[tokio::test]
    async fn test_empty_mime_falls_back_by_kind() {
        let session = SelectionSession::new();
        session.select(squat());
        let coach = ScriptedAnalyzer::new(Ok("ok".to_string()));

        session.analyze(&[0u8; 4], MediaKind::Video, "", &coach).await;
        assert_eq!(*coach.last_mime.borrow(), "video/mp4");
    }

    #[test]
    fn test_second_upload_rejected_while_in_flight() {
        let session = SelectionSession::new();
        session.select(squat());

        assert!(session.begin_analysis().is_some());
        assert!(session.is_analyzing());
        assert!(session.begin_analysis().is_none());

        session.finish_analysis(Ok("done".to_string()));
        assert!(session.begin_analysis().is_some());
    }

    #[test]
    fn test_analysis_requires_selection() {
        let session = SelectionSession::new();
        assert!(session.begin_analysis().is_none());
        assert!(!session.is_analyzing());
    }
}
