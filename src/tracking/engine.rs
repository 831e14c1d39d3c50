//! # Document Tracking Engine
//!
//! Owns the selection list and the tracked-document collection for one
//! session, and derives the display sequence and aggregate statistics
//! from them. All operations are synchronous and run to completion;
//! the deferred review transition lives in [`super::review`].
//!
//! ## Invariants
//! - DOC-T1: At most one tracked record per document type id
//! - DOC-T2: Status transitions are monotonic (see [`DocumentStatus`])
//! - DOC-T3: Tracked records are created only by `record_upload`;
//!   selection produces derived placeholders, never stored records
//! - DOC-T4: The display set contains no duplicate ids

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::{Catalog, DocumentType};

use super::errors::{TrackingError, TrackingResult};
use super::status::DocumentStatus;

/// A document the session is tracking, with catalog metadata
/// denormalized at creation time.
#[derive(Debug, Clone, Serialize)]
pub struct TrackedDocument {
    /// Catalog id this record belongs to
    pub id: String,

    pub title: String,
    pub description: String,
    pub icon: String,

    pub status: DocumentStatus,

    /// Meaningful only once `status >= Uploaded`. Pending placeholders
    /// carry the timestamp of the display computation that synthesized
    /// them, which is non-semantic.
    pub uploaded_at: DateTime<Utc>,

    /// Name of the uploaded file; the bytes are never stored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

impl TrackedDocument {
    fn from_catalog(
        entry: &DocumentType,
        status: DocumentStatus,
        file_name: Option<String>,
    ) -> Self {
        Self {
            id: entry.id.to_string(),
            title: entry.title.to_string(),
            description: entry.description.to_string(),
            icon: entry.icon.to_string(),
            status,
            uploaded_at: Utc::now(),
            file_name,
        }
    }
}

/// Aggregate counts over the display set, by status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct VerificationStats {
    pub verified: usize,
    pub uploaded: usize,
    pub pending: usize,
    pub total: usize,
}

impl VerificationStats {
    /// Share of displayed documents that are fully verified, 0..=100.
    pub fn progress_percentage(&self) -> f64 {
        if self.total > 0 {
            self.verified as f64 / self.total as f64 * 100.0
        } else {
            0.0
        }
    }

    /// Whether every displayed document has reached Verified.
    pub fn all_verified(&self) -> bool {
        self.total > 0 && self.verified == self.total
    }
}

/// Per-session document tracking state.
///
/// Selection and upload are independent entry points into the display
/// set: selecting a type shows a Pending placeholder, uploading (with
/// or without prior selection) creates a real tracked record.
#[derive(Debug, Default)]
pub struct TrackingEngine {
    catalog: Catalog,

    /// Ids the user has toggled on, in toggle order
    selected: Vec<String>,

    /// Uploaded documents, in first-upload order
    tracked: Vec<TrackedDocument>,
}

impl TrackingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Toggle `id` in the selection list: add if absent, remove if
    /// present. Returns whether the id is selected afterwards.
    ///
    /// Selection never touches tracked records; it only controls which
    /// un-uploaded placeholders appear in the display set. Toggling an
    /// id twice restores the prior membership.
    pub fn toggle_selection(&mut self, id: &str) -> bool {
        if let Some(pos) = self.selected.iter().position(|s| s == id) {
            self.selected.remove(pos);
            false
        } else {
            self.selected.push(id.to_string());
            true
        }
    }

    /// Record a file upload for `id`.
    ///
    /// Creates the tracked record at Uploaded if none exists (upload
    /// without prior selection is a legitimate entry point), otherwise
    /// raises the existing record to Uploaded without regressing a
    /// Verified one. `uploaded_at` is set on first upload and kept on
    /// re-uploads.
    ///
    /// # Errors
    /// [`TrackingError::UnknownDocumentType`] if `id` is not in the
    /// catalog; state is unchanged.
    pub fn record_upload(&mut self, id: &str, file_name: Option<String>) -> TrackingResult<()> {
        let entry = self
            .catalog
            .get(id)
            .ok_or_else(|| TrackingError::UnknownDocumentType(id.to_string()))?;

        match self.tracked.iter_mut().find(|doc| doc.id == id) {
            Some(doc) => {
                if doc.status.can_step_to(DocumentStatus::Uploaded) {
                    doc.status = DocumentStatus::Uploaded;
                }
                if file_name.is_some() {
                    doc.file_name = file_name;
                }
            }
            None => {
                self.tracked.push(TrackedDocument::from_catalog(
                    entry,
                    DocumentStatus::Uploaded,
                    file_name,
                ));
            }
        }

        Ok(())
    }

    /// Apply the Uploaded -> Verified transition to the record with
    /// `id`, if it still exists.
    ///
    /// This is the target of the deferred review timer. A missing
    /// record (cleared by a reset before the timer fired) is a silent
    /// no-op, as is a record already at Verified. Returns whether a
    /// transition actually happened.
    pub fn complete_review(&mut self, id: &str) -> bool {
        match self.tracked.iter_mut().find(|doc| doc.id == id) {
            Some(doc) if doc.status == DocumentStatus::Uploaded => {
                doc.status = DocumentStatus::Verified;
                true
            }
            _ => false,
        }
    }

    /// Clear the selection list and the tracked collection atomically.
    ///
    /// Review timers already scheduled keep running; their eventual
    /// `complete_review` finds no record and does nothing.
    pub fn reset(&mut self) {
        self.selected.clear();
        self.tracked.clear();
    }

    /// The ordered sequence of documents to render: every tracked
    /// record (any status, first-upload order), followed by a
    /// synthesized Pending placeholder for each selected id that has
    /// no tracked record yet (toggle order).
    ///
    /// Pure derivation over current state; no mutation, no duplicate
    /// ids (DOC-T4).
    pub fn display_set(&self) -> Vec<TrackedDocument> {
        let mut documents = self.tracked.clone();

        for id in &self.selected {
            if self.tracked.iter().any(|doc| &doc.id == id) {
                continue;
            }
            // Selected ids all came through toggle_selection against the
            // closed catalog UI, so a miss here would be a logic error.
            if let Some(entry) = self.catalog.get(id) {
                documents.push(TrackedDocument::from_catalog(
                    entry,
                    DocumentStatus::Pending,
                    None,
                ));
            }
        }

        documents
    }

    /// Counts over [`Self::display_set`] by status. Pure.
    pub fn stats(&self) -> VerificationStats {
        let documents = self.display_set();

        let mut stats = VerificationStats {
            total: documents.len(),
            ..VerificationStats::default()
        };

        for doc in &documents {
            match doc.status {
                DocumentStatus::Pending => stats.pending += 1,
                DocumentStatus::Uploaded => stats.uploaded += 1,
                DocumentStatus::Verified => stats.verified += 1,
            }
        }

        stats
    }

    /// Ids currently in the selection list, in toggle order.
    pub fn selected_ids(&self) -> &[String] {
        &self.selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(documents: &[TrackedDocument]) -> Vec<&str> {
        documents.iter().map(|d| d.id.as_str()).collect()
    }

    #[test]
    fn test_toggle_is_symmetric_difference() {
        let mut engine = TrackingEngine::new();

        assert!(engine.toggle_selection("aadhar"));
        assert!(engine.toggle_selection("pan"));
        assert!(!engine.toggle_selection("aadhar"));
        assert!(engine.toggle_selection("aadhar"));

        assert_eq!(engine.selected_ids(), &["pan", "aadhar"]);

        // Toggling twice restores the prior membership
        engine.toggle_selection("voter");
        engine.toggle_selection("voter");
        assert_eq!(engine.selected_ids(), &["pan", "aadhar"]);
    }

    #[test]
    fn test_selection_shows_pending_placeholders() {
        let mut engine = TrackingEngine::new();
        engine.toggle_selection("aadhar");
        engine.toggle_selection("pan");

        let documents = engine.display_set();
        assert_eq!(ids(&documents), vec!["aadhar", "pan"]);
        assert!(documents
            .iter()
            .all(|d| d.status == DocumentStatus::Pending));

        let stats = engine.stats();
        assert_eq!(
            stats,
            VerificationStats {
                verified: 0,
                uploaded: 0,
                pending: 2,
                total: 2
            }
        );
        assert_eq!(stats.progress_percentage(), 0.0);
    }

    #[test]
    fn test_upload_creates_record_and_overrides_placeholder() {
        let mut engine = TrackingEngine::new();
        engine.toggle_selection("aadhar");
        engine.toggle_selection("pan");

        engine
            .record_upload("aadhar", Some("aadhar.pdf".into()))
            .unwrap();

        let documents = engine.display_set();
        // Tracked record first, remaining placeholder after
        assert_eq!(ids(&documents), vec!["aadhar", "pan"]);
        assert_eq!(documents[0].status, DocumentStatus::Uploaded);
        assert_eq!(documents[0].file_name.as_deref(), Some("aadhar.pdf"));
        assert_eq!(documents[1].status, DocumentStatus::Pending);

        assert_eq!(
            engine.stats(),
            VerificationStats {
                verified: 0,
                uploaded: 1,
                pending: 1,
                total: 2
            }
        );
    }

    #[test]
    fn test_upload_without_selection_enters_tracked_set() {
        let mut engine = TrackingEngine::new();
        engine.record_upload("passport", None).unwrap();

        assert_eq!(
            engine.stats(),
            VerificationStats {
                verified: 0,
                uploaded: 1,
                pending: 0,
                total: 1
            }
        );
    }

    #[test]
    fn test_display_set_has_no_duplicate_ids() {
        let mut engine = TrackingEngine::new();
        engine.toggle_selection("aadhar");
        engine.record_upload("aadhar", None).unwrap();

        let documents = engine.display_set();
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].status, DocumentStatus::Uploaded);
    }

    #[test]
    fn test_unknown_id_is_rejected_without_state_change() {
        let mut engine = TrackingEngine::new();
        engine.toggle_selection("aadhar");
        let before = engine.stats();

        let err = engine.record_upload("not_a_real_id", None).unwrap_err();
        assert!(matches!(err, TrackingError::UnknownDocumentType(_)));

        assert_eq!(engine.stats(), before);
        assert_eq!(ids(&engine.display_set()), vec!["aadhar"]);
    }

    #[test]
    fn test_review_completes_only_uploaded_records() {
        let mut engine = TrackingEngine::new();
        engine.record_upload("aadhar", None).unwrap();

        assert!(engine.complete_review("aadhar"));
        assert_eq!(engine.display_set()[0].status, DocumentStatus::Verified);

        // Second timer firing for the same id is a no-op
        assert!(!engine.complete_review("aadhar"));
        // Absent record is a silent no-op
        assert!(!engine.complete_review("pan"));
    }

    #[test]
    fn test_reupload_does_not_regress_verified() {
        let mut engine = TrackingEngine::new();
        engine.record_upload("aadhar", Some("v1.pdf".into())).unwrap();
        engine.complete_review("aadhar");

        engine.record_upload("aadhar", Some("v2.pdf".into())).unwrap();

        let doc = &engine.display_set()[0];
        assert_eq!(doc.status, DocumentStatus::Verified);
        assert_eq!(doc.file_name.as_deref(), Some("v2.pdf"));
    }

    #[test]
    fn test_reupload_keeps_first_upload_timestamp() {
        let mut engine = TrackingEngine::new();
        engine.record_upload("pan", None).unwrap();
        let first = engine.display_set()[0].uploaded_at;

        engine.record_upload("pan", Some("pan.jpg".into())).unwrap();
        assert_eq!(engine.display_set()[0].uploaded_at, first);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut engine = TrackingEngine::new();
        engine.toggle_selection("aadhar");
        engine.toggle_selection("pan");
        engine.record_upload("voter", None).unwrap();
        engine.complete_review("voter");

        engine.reset();

        assert!(engine.display_set().is_empty());
        assert_eq!(engine.stats(), VerificationStats::default());
        assert_eq!(engine.stats().progress_percentage(), 0.0);
    }

    #[test]
    fn test_progress_percentage() {
        let mut engine = TrackingEngine::new();
        engine.record_upload("aadhar", None).unwrap();
        engine.record_upload("pan", None).unwrap();
        engine.complete_review("aadhar");

        let stats = engine.stats();
        assert_eq!(stats.progress_percentage(), 50.0);
        assert!(!stats.all_verified());

        engine.complete_review("pan");
        let stats = engine.stats();
        assert_eq!(stats.progress_percentage(), 100.0);
        assert!(stats.all_verified());
    }
}
