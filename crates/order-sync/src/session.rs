//! Reorder Session
//!
//! Per-screen state between a load and a save: the local order, the loading
//! and saving flags, the active drag gesture and the last notice. The order
//! only changes through a completed load or a drag; saving never touches it.

use serde::de::DeserializeOwned;

use crate::auth::AuthorizationContext;
use crate::client::{LoadReport, OrderStoreClient};
use crate::error::{SyncError, SyncResult};
use crate::gateway::{Confirmation, OrderGateway};
use crate::gesture::{DragGesture, MoveOutcome};
use crate::model::{OrderableItem, OrderedCollection};
use crate::notice::Notice;
use crate::source::CollectionSource;

const SAVED_MESSAGE: &str = "Order saved successfully";

#[derive(Debug, Clone, Default)]
pub struct ReorderSession {
    collection: OrderedCollection,
    gesture: DragGesture,
    loading: bool,
    saving: bool,
    notice: Option<Notice>,
    /// Why the last load came back empty, until the next load starts
    load_error: Option<String>,
}

impl ReorderSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collection(&self) -> &OrderedCollection {
        &self.collection
    }

    pub fn items(&self) -> &[OrderableItem] {
        self.collection.items()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Set when the last load failed; the collection is then empty
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    pub fn dragging_index(&self) -> Option<usize> {
        self.gesture.source()
    }

    // ========== Load ==========

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.load_error = None;
        self.gesture.cancel();
    }

    /// Replace the local order wholesale with the loaded one
    pub fn finish_load(&mut self, report: LoadReport) {
        self.loading = false;
        self.gesture.cancel();
        self.collection.replace(report.collection);
        self.load_error = report.error.map(|e| e.to_string());
        self.notice = self
            .load_error
            .as_ref()
            .map(|e| Notice::error(format!("Failed to load items: {}", e)));
    }

    // ========== Drag ==========

    pub fn begin_drag(&mut self, source: usize) {
        self.gesture.begin(source);
    }

    pub fn drop_at(&mut self, destination: usize) -> MoveOutcome {
        let outcome = self.gesture.drop_at(destination, &mut self.collection);
        if let MoveOutcome::Moved { from, to } = outcome {
            log::debug!("Moved item {} -> {}", from, to);
        }
        outcome
    }

    pub fn cancel_drag(&mut self) {
        self.gesture.cancel();
    }

    // ========== Save ==========

    /// Whether the save control should be enabled
    pub fn can_save(&self) -> bool {
        !self.loading && !self.saving && !self.collection.is_empty()
    }

    /// Gate checks, then mark a save as in flight and hand back the ids to
    /// send. At most one save is in flight at a time.
    pub fn begin_save(&mut self, required_role: &str, auth: &AuthorizationContext) -> SyncResult<Vec<String>> {
        if self.saving {
            return Err(SyncError::SaveInFlight);
        }
        if self.loading {
            return Err(SyncError::StillLoading);
        }
        auth.authorize(required_role)?;
        if self.collection.is_empty() {
            return Err(SyncError::EmptyCollection);
        }
        self.saving = true;
        Ok(self.collection.ordered_ids())
    }

    /// Re-enable saving and report the outcome. The local order is kept
    /// either way so a failed save can be retried as is.
    pub fn finish_save(&mut self, result: SyncResult<Confirmation>) {
        self.saving = false;
        self.notice = Some(match result {
            Ok(confirmation) => {
                Notice::success(confirmation.message.unwrap_or_else(|| SAVED_MESSAGE.to_string()))
            }
            Err(e) => Notice::error(e.to_string()),
        });
    }

    /// Surface a failure that happened before any request was made
    pub fn record_failure(&mut self, error: &SyncError) {
        self.notice = Some(Notice::error(error.to_string()));
    }

    // ========== Async helpers ==========

    pub async fn refresh<R: DeserializeOwned>(
        &mut self,
        client: &OrderStoreClient,
        source: &CollectionSource<R>,
        auth: &AuthorizationContext,
    ) {
        self.begin_load();
        let report = client.load(source, auth).await;
        self.finish_load(report);
    }

    /// Save the current order; returns whether the server confirmed it
    pub async fn save<R>(
        &mut self,
        gateway: &OrderGateway,
        source: &CollectionSource<R>,
        auth: &AuthorizationContext,
    ) -> bool {
        let ids = match self.begin_save(&source.required_role, auth) {
            Ok(ids) => ids,
            Err(e) => {
                log::warn!("Save of {} refused: {}", source.name, e);
                self.record_failure(&e);
                return false;
            }
        };
        let result = gateway
            .save(&source.patch_url, auth, &ids, &source.required_role)
            .await;
        let saved = result.is_ok();
        self.finish_save(result);
        saved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::ADMIN_ROLE;
    use crate::notice::NoticeKind;

    fn loaded(ids: &[&str]) -> ReorderSession {
        let mut session = ReorderSession::new();
        session.begin_load();
        session.finish_load(LoadReport {
            collection: ids.iter().map(|id| OrderableItem::new(*id, id.to_uppercase())).collect(),
            error: None,
        });
        session
    }

    fn admin() -> AuthorizationContext {
        AuthorizationContext::new("token", "admin")
    }

    #[test]
    fn test_new_session_is_empty_and_unsaveable() {
        let session = ReorderSession::new();
        assert!(session.is_empty());
        assert!(!session.can_save());
    }

    #[test]
    fn test_loading_blocks_save() {
        let mut session = loaded(&["a"]);
        session.begin_load();
        assert!(!session.can_save());
        assert!(matches!(session.begin_save(ADMIN_ROLE, &admin()), Err(SyncError::StillLoading)));
    }

    #[test]
    fn test_failed_load_empties_and_reports() {
        let mut session = loaded(&["a", "b"]);
        session.begin_load();
        session.finish_load(LoadReport {
            collection: OrderedCollection::new(),
            error: Some(SyncError::InvalidResponse("bad".to_string())),
        });
        assert!(session.is_empty());
        assert!(!session.is_loading());
        let notice = session.notice().unwrap();
        assert!(notice.is_error());
        assert!(notice.message.starts_with("Failed to load items"));
    }

    #[test]
    fn test_load_error_persists_until_next_load() {
        let mut session = ReorderSession::new();
        session.begin_load();
        session.finish_load(LoadReport {
            collection: OrderedCollection::new(),
            error: Some(SyncError::InvalidResponse("bad".to_string())),
        });
        // Survives the toast being taken
        session.take_notice();
        assert!(session.load_error().unwrap().contains("bad"));

        session.begin_load();
        assert_eq!(session.load_error(), None);
        session.finish_load(LoadReport::default());
        assert_eq!(session.load_error(), None);
        assert!(session.is_empty());
    }

    #[test]
    fn test_genuinely_empty_load_has_no_error() {
        let session = loaded(&[]);
        assert!(session.is_empty());
        assert_eq!(session.load_error(), None);
    }

    #[test]
    fn test_drag_then_save_ids() {
        let mut session = loaded(&["a", "b", "c"]);
        session.begin_drag(0);
        assert_eq!(session.dragging_index(), Some(0));
        session.drop_at(2);
        let ids = session.begin_save(ADMIN_ROLE, &admin()).unwrap();
        assert_eq!(ids, vec!["b", "c", "a"]);
        assert!(session.is_saving());
        assert!(!session.can_save());
    }

    #[test]
    fn test_second_save_while_in_flight_refused() {
        let mut session = loaded(&["a", "b"]);
        session.begin_save(ADMIN_ROLE, &admin()).unwrap();
        assert!(matches!(session.begin_save(ADMIN_ROLE, &admin()), Err(SyncError::SaveInFlight)));
    }

    #[test]
    fn test_non_admin_denied_without_state_change() {
        let mut session = loaded(&["a", "b", "c"]);
        session.begin_drag(0);
        session.drop_at(2);
        let vendor = AuthorizationContext::new("token", "vendor");
        let err = session.begin_save(ADMIN_ROLE, &vendor).unwrap_err();
        assert_eq!(err.to_string(), "Admin privileges required");
        assert!(!session.is_saving());
        assert_eq!(session.collection().ordered_ids(), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_failed_save_keeps_order_and_reenables() {
        let mut session = loaded(&["a", "b", "c"]);
        session.begin_drag(0);
        session.drop_at(2);
        session.begin_save(ADMIN_ROLE, &admin()).unwrap();
        session.finish_save(Err(SyncError::Rejected {
            status: None,
            message: "DB error".to_string(),
        }));
        assert_eq!(session.collection().ordered_ids(), vec!["b", "c", "a"]);
        assert!(session.can_save());
        assert_eq!(session.notice().unwrap().message, "DB error");
    }

    #[test]
    fn test_successful_save_keeps_order() {
        let mut session = loaded(&["a", "b"]);
        session.begin_save(ADMIN_ROLE, &admin()).unwrap();
        session.finish_save(Ok(Confirmation::default()));
        assert_eq!(session.collection().ordered_ids(), vec!["a", "b"]);
        let notice = session.take_notice().unwrap();
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.message, SAVED_MESSAGE);
        assert!(session.notice().is_none());
    }

    #[test]
    fn test_empty_collection_cannot_save() {
        let mut session = loaded(&[]);
        assert!(!session.can_save());
        assert!(matches!(session.begin_save(ADMIN_ROLE, &admin()), Err(SyncError::EmptyCollection)));
    }

    #[test]
    fn test_release_source_overrides_stale_drag() {
        let mut session = loaded(&["a", "b", "c"]);
        session.begin_drag(0);
        // Mouseup reports the drag that actually happened
        session.begin_drag(2);
        assert_eq!(session.drop_at(0), MoveOutcome::Moved { from: 2, to: 0 });
        assert_eq!(session.collection().ordered_ids(), vec!["c", "a", "b"]);
        assert_eq!(session.dragging_index(), None);
    }

    #[test]
    fn test_reload_cancels_pending_drag() {
        let mut session = loaded(&["a", "b"]);
        session.begin_drag(1);
        session.begin_load();
        assert_eq!(session.dragging_index(), None);
    }
}
