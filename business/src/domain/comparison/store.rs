use std::sync::Arc;

use uuid::Uuid;

use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::SessionKey;

use super::selection::SelectionSet;
use super::storage::SelectionStorage;

/// The canonical comparison selection of one session.
///
/// In-memory state is authoritative. Storage is a best-effort mirror so a
/// returning visitor finds their picks again: the store hydrates from it
/// once when opened and writes back after every mutation. A write failure
/// is logged and swallowed, never surfaced to the visitor.
pub struct SelectionStore {
    key: SessionKey,
    selection: SelectionSet,
    storage: Arc<dyn SelectionStorage>,
    logger: Arc<dyn Logger>,
}

impl SelectionStore {
    /// Opens the selection of a session. A missing, unreadable or malformed
    /// payload starts the session empty.
    pub async fn open(
        key: SessionKey,
        storage: Arc<dyn SelectionStorage>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let selection = match storage.load(&key).await {
            Ok(Some(payload)) => decode_payload(&payload),
            Ok(None) => SelectionSet::new(),
            Err(error) => {
                logger.warn(&format!(
                    "Could not load selection for session {}: {}",
                    key, error
                ));
                SelectionSet::new()
            }
        };
        Self {
            key,
            selection,
            storage,
            logger,
        }
    }

    /// Toggles a product in the selection and mirrors the new state to
    /// storage. Returns whether the product is selected afterwards.
    pub async fn toggle(&mut self, id: Uuid) -> bool {
        let selected = self.selection.toggle(id);
        self.persist().await;
        selected
    }

    pub async fn clear_all(&mut self) {
        self.selection.clear();
        self.persist().await;
    }

    pub fn is_selected(&self, id: Uuid) -> bool {
        self.selection.contains(id)
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    async fn persist(&self) {
        let payload = encode_payload(&self.selection);
        if let Err(error) = self.storage.save(&self.key, &payload).await {
            self.logger.warn(&format!(
                "Could not persist selection for session {}: {}",
                self.key, error
            ));
        }
    }
}

fn encode_payload(selection: &SelectionSet) -> String {
    serde_json::to_string(selection.ids()).unwrap_or_else(|_| "[]".to_string())
}

/// Decodes a stored payload. An unparseable payload yields an empty
/// selection; entries that are not product ids are dropped one by one.
fn decode_payload(payload: &str) -> SelectionSet {
    match serde_json::from_str::<Vec<String>>(payload) {
        Ok(entries) => SelectionSet::from_ids(
            entries
                .iter()
                .filter_map(|entry| Uuid::parse_str(entry.trim()).ok()),
        ),
        Err(_) => SelectionSet::new(),
    }
}
