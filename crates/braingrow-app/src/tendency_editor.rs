//! Tendency selection editor.
//!
//! Owns the state behind the topic-preference view: the fetched catalog
//! and the selection entity. Loading seeds the selection exactly once
//! from the stored tendency signal; edits go through the selection's
//! state machine; saving only fires after a user-initiated change.

use std::collections::BTreeSet;

use braingrow_core::error::Result;
use braingrow_core::profile::ProfileRepository;
use braingrow_core::tags::{
    TagCatalog, TagCatalogRepository, TendencyRepository, TendencySelection,
};

/// View-model for the tendency selection screen.
#[derive(Debug, Default)]
pub struct TendencyEditor {
    catalog: Option<TagCatalog>,
    selection: TendencySelection,
}

impl TendencyEditor {
    /// Creates an editor with no catalog and an unseeded selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches the catalog and profile, then seeds the selection.
    ///
    /// A failed catalog fetch propagates: with no catalog there is
    /// nothing to seed or display. A failed profile fetch degrades to an
    /// empty token set. Calling `load` again refreshes the catalog but
    /// never re-seeds a selection that already left `Unset`.
    pub async fn load(
        &mut self,
        catalogs: &dyn TagCatalogRepository,
        profiles: &dyn ProfileRepository,
    ) -> Result<()> {
        let catalog = catalogs.fetch_catalog().await?;

        let tokens: BTreeSet<String> = match profiles.fetch_profile().await {
            Ok(profile) => profile.tendency_tokens(),
            Err(err) => {
                tracing::warn!(error = %err, "profile fetch failed; seeding from empty tokens");
                BTreeSet::new()
            }
        };

        if self.selection.seed(&catalog, &tokens) {
            tracing::debug!(boards = self.selection.boards().len(), "selection seeded");
        }
        self.catalog = Some(catalog);
        Ok(())
    }

    /// The fetched catalog, if loading succeeded.
    pub fn catalog(&self) -> Option<&TagCatalog> {
        self.catalog.as_ref()
    }

    /// The current selection state.
    pub fn selection(&self) -> &TendencySelection {
        &self.selection
    }

    /// Toggles one `(board, topic)` pair on or off.
    pub fn toggle(&mut self, board: &str, topic: &str, enabled: bool) {
        self.selection.toggle(board, topic, enabled);
    }

    /// Selects every topic of a board, in catalog order.
    pub fn select_all(&mut self, board: &str) {
        let topics = match &self.catalog {
            Some(catalog) => catalog.topic_names(board),
            None => return,
        };
        self.selection.select_all(board, &topics);
    }

    /// Clears a board's selection entirely.
    pub fn clear_board(&mut self, board: &str) {
        self.selection.clear_board(board);
    }

    /// True when every topic of the board is currently selected. Drives
    /// the "Select All" control's disabled state.
    pub fn board_fully_selected(&self, board: &str) -> bool {
        let Some(catalog) = &self.catalog else {
            return false;
        };
        let all = catalog.topic_names(board);
        !all.is_empty()
            && all
                .iter()
                .all(|topic| self.selection.is_selected(board, topic))
    }

    /// True when the board has at least one selected topic.
    pub fn board_has_selection(&self, board: &str) -> bool {
        self.selection.topics(board).is_some()
    }

    /// Persists the selection if, and only if, the user modified it.
    /// Returns whether a save was performed.
    pub async fn save(&self, tendencies: &dyn TendencyRepository) -> Result<bool> {
        if !self.selection.is_dirty() {
            tracing::debug!("selection untouched; skipping save");
            return Ok(false);
        }
        tendencies.update_tendency(&self.selection.payload()).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use braingrow_core::error::BraingrowError;
    use braingrow_core::profile::UserProfile;
    use braingrow_core::tags::TendencyPayload;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    struct FixedCatalog(TagCatalog);

    #[async_trait]
    impl TagCatalogRepository for FixedCatalog {
        async fn fetch_catalog(&self) -> Result<TagCatalog> {
            Ok(self.0.clone())
        }
    }

    struct FixedProfile(Option<String>);

    #[async_trait]
    impl ProfileRepository for FixedProfile {
        async fn fetch_profile(&self) -> Result<UserProfile> {
            Ok(UserProfile {
                user_id: 1,
                username: "u".to_string(),
                email: "u@example.com".to_string(),
                tendency: self.0.clone(),
                photo_url: None,
                created_at: "2024-01-01T00:00:00Z".to_string(),
                session_info: None,
            })
        }

        async fn update_profile(
            &self,
            _username: Option<&str>,
            _photo_url: Option<&str>,
        ) -> Result<UserProfile> {
            unimplemented!("not used in these tests")
        }
    }

    struct FailingProfile;

    #[async_trait]
    impl ProfileRepository for FailingProfile {
        async fn fetch_profile(&self) -> Result<UserProfile> {
            Err(BraingrowError::http(500, "boom"))
        }

        async fn update_profile(
            &self,
            _username: Option<&str>,
            _photo_url: Option<&str>,
        ) -> Result<UserProfile> {
            unimplemented!("not used in these tests")
        }
    }

    #[derive(Default)]
    struct RecordingStore {
        saved: Mutex<Vec<TendencyPayload>>,
    }

    #[async_trait]
    impl TendencyRepository for RecordingStore {
        async fn update_tendency(&self, payload: &TendencyPayload) -> Result<()> {
            self.saved.lock().unwrap().push(payload.clone());
            Ok(())
        }
    }

    fn catalog() -> TagCatalog {
        let mut science = BTreeMap::new();
        science.insert("physics".to_string(), Vec::new());
        science.insert("chemistry".to_string(), Vec::new());
        let mut boards = BTreeMap::new();
        boards.insert("science".to_string(), science);
        TagCatalog::from_boards(boards)
    }

    #[tokio::test]
    async fn test_load_seeds_from_profile_tendency() {
        let mut editor = TendencyEditor::new();
        editor
            .load(&FixedCatalog(catalog()), &FixedProfile(Some("science".into())))
            .await
            .unwrap();

        assert!(editor.board_fully_selected("science"));
        assert!(!editor.selection().is_dirty());
    }

    #[tokio::test]
    async fn test_profile_failure_degrades_to_empty_seed() {
        let mut editor = TendencyEditor::new();
        editor
            .load(&FixedCatalog(catalog()), &FailingProfile)
            .await
            .unwrap();

        assert!(editor.selection().is_empty());
        assert!(editor.catalog().is_some());
    }

    #[tokio::test]
    async fn test_reload_never_overwrites_edits() {
        let mut editor = TendencyEditor::new();
        let catalogs = FixedCatalog(catalog());
        editor
            .load(&catalogs, &FixedProfile(None))
            .await
            .unwrap();
        editor.toggle("science", "physics", true);

        editor
            .load(&catalogs, &FixedProfile(Some("science".into())))
            .await
            .unwrap();
        // Second load must not re-seed over the user's edit.
        assert!(!editor.board_fully_selected("science"));
        assert!(editor.selection().is_selected("science", "physics"));
    }

    #[tokio::test]
    async fn test_save_skips_untouched_selection() {
        let mut editor = TendencyEditor::new();
        editor
            .load(&FixedCatalog(catalog()), &FixedProfile(Some("science".into())))
            .await
            .unwrap();

        let store = RecordingStore::default();
        assert!(!editor.save(&store).await.unwrap());
        assert!(store.saved.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_persists_user_edits() {
        let mut editor = TendencyEditor::new();
        editor
            .load(&FixedCatalog(catalog()), &FixedProfile(None))
            .await
            .unwrap();
        editor.select_all("science");

        let store = RecordingStore::default();
        assert!(editor.save(&store).await.unwrap());

        let saved = store.saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0], editor.selection().payload());
    }

    #[tokio::test]
    async fn test_explicit_clear_is_persisted() {
        let mut editor = TendencyEditor::new();
        editor
            .load(&FixedCatalog(catalog()), &FixedProfile(Some("science".into())))
            .await
            .unwrap();
        editor.clear_board("science");

        let store = RecordingStore::default();
        assert!(editor.save(&store).await.unwrap());
        let saved = store.saved.lock().unwrap();
        assert_eq!(
            saved[0],
            TendencyPayload::Selected {
                selected: BTreeMap::new()
            }
        );
    }
}
