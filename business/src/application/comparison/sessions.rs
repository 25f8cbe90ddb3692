use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::domain::comparison::storage::SelectionStorage;
use crate::domain::comparison::store::SelectionStore;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::SessionKey;

/// Hands out the one canonical selection store of each session.
///
/// Every caller presenting the same session key gets the same store behind
/// the same mutex, so mutations within a session happen strictly one after
/// the other. Stores hydrate from storage once, on first access.
pub struct SelectionSessions {
    stores: RwLock<HashMap<SessionKey, Arc<Mutex<SelectionStore>>>>,
    storage: Arc<dyn SelectionStorage>,
    logger: Arc<dyn Logger>,
}

impl SelectionSessions {
    pub fn new(storage: Arc<dyn SelectionStorage>, logger: Arc<dyn Logger>) -> Self {
        Self {
            stores: RwLock::new(HashMap::new()),
            storage,
            logger,
        }
    }

    /// Returns the canonical store of a session, opening it when the
    /// session shows up for the first time.
    pub async fn store_for(&self, key: &SessionKey) -> Arc<Mutex<SelectionStore>> {
        if let Some(store) = self.stores.read().await.get(key) {
            return store.clone();
        }

        let opened =
            SelectionStore::open(key.clone(), self.storage.clone(), self.logger.clone()).await;

        let mut stores = self.stores.write().await;
        // A rival request may have opened the same session in the meantime.
        // The entry that got in first wins, so a key never has two stores.
        stores
            .entry(key.clone())
            .or_insert_with(|| Arc::new(Mutex::new(opened)))
            .clone()
    }
}
