//! Board/topic selection entity and its seed-once state machine.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::catalog::TagCatalog;

/// Lifecycle of a selection.
///
/// The transitions make the seed-once invariant explicit: `seed` only
/// applies in `Unset`, and persistence is gated on `UserModified` so an
/// untouched selection can never overwrite server state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionState {
    /// Freshly created; no catalog/profile data applied yet.
    Unset,
    /// Derived once from the stored tendency signal; untouched by the user.
    Seeded,
    /// The user has edited the selection since it was seeded.
    UserModified,
}

/// Structured board -> topics preference state.
///
/// Invariant: every board key maps to a non-empty topic list; a board with
/// no selected topics is absent from the map. Topic order is insertion
/// order of the edits that produced it (persisted order carries no
/// meaning).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TendencySelection {
    boards: BTreeMap<String, Vec<String>>,
    state: SelectionState,
}

impl Default for TendencySelection {
    fn default() -> Self {
        Self::new()
    }
}

impl TendencySelection {
    /// Creates an empty, unseeded selection.
    pub fn new() -> Self {
        Self {
            boards: BTreeMap::new(),
            state: SelectionState::Unset,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// True once the user has edited the selection. Only a dirty selection
    /// is ever persisted.
    pub fn is_dirty(&self) -> bool {
        self.state == SelectionState::UserModified
    }

    /// Returns true when no board has any selected topic.
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// The selected board -> topics map.
    pub fn boards(&self) -> &BTreeMap<String, Vec<String>> {
        &self.boards
    }

    /// Selected topics for a board, if any.
    pub fn topics(&self, board: &str) -> Option<&[String]> {
        self.boards.get(board).map(Vec::as_slice)
    }

    /// Returns true when the given pair is selected.
    pub fn is_selected(&self, board: &str, topic: &str) -> bool {
        self.boards
            .get(board)
            .is_some_and(|topics| topics.iter().any(|t| t == topic))
    }

    /// Seeds the selection from the tokenized tendency signal.
    ///
    /// A token matching a board name (lower-cased) selects every topic of
    /// that board; otherwise individual topics match by lower-cased name.
    /// Boards with no matching topics are omitted. Only applies in
    /// `Unset`; later catalog or profile refreshes can never overwrite an
    /// existing selection. Returns whether seeding ran.
    ///
    /// Note: seeding with an empty token set still transitions to
    /// `Seeded`, so a late-arriving profile cannot re-seed over edits the
    /// user has started from a blank slate.
    pub fn seed(&mut self, catalog: &TagCatalog, tokens: &BTreeSet<String>) -> bool {
        if self.state != SelectionState::Unset {
            return false;
        }

        for (board, topics) in catalog.boards() {
            let selected: Vec<String> = if tokens.contains(&board.to_lowercase()) {
                topics.keys().cloned().collect()
            } else {
                topics
                    .keys()
                    .filter(|topic| tokens.contains(&topic.to_lowercase()))
                    .cloned()
                    .collect()
            };
            if !selected.is_empty() {
                self.boards.insert(board.clone(), selected);
            }
        }

        self.state = SelectionState::Seeded;
        true
    }

    /// Adds or removes exactly one `(board, topic)` pair. A board whose
    /// topic list becomes empty is removed entirely.
    pub fn toggle(&mut self, board: &str, topic: &str, enabled: bool) {
        if enabled {
            let topics = self.boards.entry(board.to_string()).or_default();
            if !topics.iter().any(|t| t == topic) {
                topics.push(topic.to_string());
            }
        } else if let Some(topics) = self.boards.get_mut(board) {
            topics.retain(|t| t != topic);
            if topics.is_empty() {
                self.boards.remove(board);
            }
        }
        self.state = SelectionState::UserModified;
    }

    /// Selects every topic of a board, in the given order.
    pub fn select_all(&mut self, board: &str, all_topics: &[String]) {
        if all_topics.is_empty() {
            self.boards.remove(board);
        } else {
            self.boards.insert(board.to_string(), all_topics.to_vec());
        }
        self.state = SelectionState::UserModified;
    }

    /// Removes the board and all its selected topics; no-op on the map if
    /// the board was absent.
    pub fn clear_board(&mut self, board: &str) {
        self.boards.remove(board);
        self.state = SelectionState::UserModified;
    }

    /// Produces the wire payload for persistence. An explicitly emptied
    /// selection serializes as an empty `selected` object; callers gate
    /// the actual persistence call on [`is_dirty`](Self::is_dirty).
    pub fn payload(&self) -> TendencyPayload {
        TendencyPayload::Selected {
            selected: self.boards.clone(),
        }
    }
}

/// Wire forms accepted by the tendency persistence endpoint.
///
/// The modern form is `Selected`; `Tags` and `Legacy` exist for older
/// callers and are normalized server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TendencyPayload {
    /// Structured board -> topics selection: `{"selected": {...}}`.
    Selected {
        selected: BTreeMap<String, Vec<String>>,
    },
    /// Flat tag list: `{"tags": [...]}`.
    Tags { tags: Vec<String> },
    /// Raw legacy string: `{"tendency": "..."}`.
    Legacy { tendency: String },
}

impl TendencyPayload {
    /// Normalizes a legacy boolean map into the flat tag form, keeping
    /// only enabled entries. (Unlike tokenizing stored data, an outgoing
    /// edit does respect the boolean values.)
    pub fn from_legacy_map(map: &BTreeMap<String, bool>) -> Self {
        Self::Tags {
            tags: map
                .iter()
                .filter(|(_, enabled)| **enabled)
                .map(|(key, _)| key.clone())
                .collect(),
        }
    }
}
