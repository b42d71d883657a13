use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use once_cell::sync::OnceCell;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::form_session::{FormCatalogs, FormSession};

static SESSIONS: OnceCell<SessionStore> = OnceCell::new();

/// Ошибки доступа к сессиям формы
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(Uuid),

    #[error("Session store has not been initialized")]
    NotInitialized,

    #[error("Session store lock is poisoned")]
    Poisoned,
}

struct SessionEntry {
    session: FormSession,
    last_access: DateTime<Utc>,
}

/// Хранилище сессий формы в памяти процесса
///
/// Операции над сессией выполняются под блокировкой, поэтому для одной
/// сессии одновременно выполняется не более одной операции.
pub struct SessionStore {
    catalogs: FormCatalogs,
    sessions: Mutex<HashMap<Uuid, SessionEntry>>,
}

impl SessionStore {
    pub fn new(catalogs: FormCatalogs) -> Self {
        Self {
            catalogs,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Создать сессию с каталогами по умолчанию
    pub fn create(&self) -> Result<Uuid, SessionError> {
        let id = Uuid::new_v4();
        let entry = SessionEntry {
            session: FormSession::new(self.catalogs.clone()),
            last_access: Utc::now(),
        };
        let mut sessions = self.sessions.lock().map_err(|_| SessionError::Poisoned)?;
        sessions.insert(id, entry);
        tracing::info!("Form session created: {} ({} active)", id, sessions.len());
        Ok(id)
    }

    /// Выполнить операцию над сессией
    pub fn with_session<T, F>(&self, id: Uuid, f: F) -> Result<T, SessionError>
    where
        F: FnOnce(&mut FormSession) -> T,
    {
        let mut sessions = self.sessions.lock().map_err(|_| SessionError::Poisoned)?;
        let entry = sessions.get_mut(&id).ok_or(SessionError::NotFound(id))?;
        entry.last_access = Utc::now();
        Ok(f(&mut entry.session))
    }

    pub fn remove(&self, id: Uuid) -> Result<bool, SessionError> {
        let mut sessions = self.sessions.lock().map_err(|_| SessionError::Poisoned)?;
        Ok(sessions.remove(&id).is_some())
    }

    /// Удалить сессии, к которым не обращались с момента `cutoff`
    pub fn evict_idle(&self, cutoff: DateTime<Utc>) -> Result<usize, SessionError> {
        let mut sessions = self.sessions.lock().map_err(|_| SessionError::Poisoned)?;
        let before = sessions.len();
        sessions.retain(|_, entry| entry.last_access >= cutoff);
        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::info!("Evicted {} idle form sessions", evicted);
        }
        Ok(evicted)
    }
}

/// Инициализировать глобальное хранилище сессий
pub fn initialize(catalogs: FormCatalogs) -> anyhow::Result<()> {
    SESSIONS
        .set(SessionStore::new(catalogs))
        .map_err(|_| anyhow::anyhow!("Session store is already initialized"))
}

pub fn get_store() -> Result<&'static SessionStore, SessionError> {
    SESSIONS.get().ok_or(SessionError::NotInitialized)
}

/// Фоновая задача: раз в минуту удаляет простаивающие сессии
pub fn spawn_eviction(idle_timeout: chrono::Duration) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(60));
        loop {
            interval.tick().await;
            let result = get_store().and_then(|store| store.evict_idle(Utc::now() - idle_timeout));
            if let Err(e) = result {
                tracing::error!("Session eviction failed: {}", e);
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::catalogs::parse_catalogs;
    use chrono::Duration;

    fn store() -> SessionStore {
        let catalogs = parse_catalogs(
            r#"
            stores = ["Store #001 - Downtown"]
            pickup_types = ["Home Delivery"]
            notifications = ["Refill reminder"]

            [[event_categories]]
            name = "Account Management"
            codes = ["EVT001 - Registration"]
            "#,
        )
        .unwrap();
        SessionStore::new(catalogs)
    }

    #[test]
    fn test_sessions_are_isolated() {
        let store = store();
        let a = store.create().unwrap();
        let b = store.create().unwrap();

        store
            .with_session(a, |s| s.set_stores_string(Some("Store #001 - Downtown")))
            .unwrap();

        let a_display = store.with_session(a, |s| s.stores_display()).unwrap();
        let b_display = store.with_session(b, |s| s.stores_display()).unwrap();
        assert_eq!(a_display, "Store #001 - Downtown");
        assert_eq!(b_display, "None selected");
    }

    #[test]
    fn test_missing_session() {
        let store = store();
        let id = Uuid::new_v4();
        assert!(matches!(
            store.with_session(id, |_| ()),
            Err(SessionError::NotFound(missing)) if missing == id
        ));
        assert!(!store.remove(id).unwrap());
    }

    #[test]
    fn test_evict_idle_sessions() {
        let store = store();
        let id = store.create().unwrap();

        assert_eq!(store.evict_idle(Utc::now() - Duration::hours(1)).unwrap(), 0);
        assert_eq!(store.evict_idle(Utc::now() + Duration::seconds(1)).unwrap(), 1);
        assert!(store.with_session(id, |_| ()).is_err());
    }
}
