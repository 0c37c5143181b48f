//! Session state: the logged-in user and the program-number sequence
//!
//! The browser shell persists the session between visits; this module owns
//! its shape and the sequence logic. Program numbers are preferably
//! allocated by the backend (`ApiClient::next_program_number`); the local
//! counter is the offline fallback and is known to race across concurrent
//! tabs, which the server-side allocator exists to avoid.

use std::sync::Mutex;

use anyhow::anyhow;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shared::{sequence, Section, User};

use crate::error::{AppError, AppResult};

/// Persisted session state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub user: User,
    /// Last locally allocated program sequence value
    pub last_program_number: u32,
}

impl Session {
    pub fn new(user: User) -> Self {
        Self {
            user,
            last_program_number: 0,
        }
    }

    /// Advance the counter and format the next program number
    ///
    /// The incremented counter must be saved back to the store by the
    /// caller; `next_program_number` does both.
    pub fn advance_program_number(&mut self, date: NaiveDate) -> String {
        self.last_program_number += 1;
        sequence::program_number(date, &self.user.code, self.last_program_number)
    }

    /// Whether the logged-in user may open a section
    pub fn can_access(&self, section: Section) -> bool {
        self.user.role.can_access(section)
    }
}

/// Backing storage for the session
pub trait SessionStore {
    fn load(&self) -> AppResult<Option<Session>>;
    fn save(&self, session: &Session) -> AppResult<()>;
    fn clear(&self) -> AppResult<()>;
}

/// In-memory store, used in tests and headless contexts; the browser shell
/// provides the persistent one
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    pub fn with_session(session: Session) -> Self {
        Self {
            session: Mutex::new(Some(session)),
        }
    }

    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, Option<Session>>> {
        self.session
            .lock()
            .map_err(|_| AppError::Internal(anyhow!("session store poisoned")))
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> AppResult<Option<Session>> {
        Ok(self.lock()?.clone())
    }

    fn save(&self, session: &Session) -> AppResult<()> {
        *self.lock()? = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        *self.lock()? = None;
        Ok(())
    }
}

/// Allocate the next program number from the store-backed counter
pub fn next_program_number(store: &dyn SessionStore, date: NaiveDate) -> AppResult<String> {
    let mut session = store
        .load()?
        .ok_or_else(|| AppError::NotFound("Session".to_string()))?;
    let number = session.advance_program_number(date);
    store.save(&session)?;
    tracing::debug!(%number, "program number allocated locally");
    Ok(number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Role;
    use uuid::Uuid;

    fn user(code: &str, role: Role) -> User {
        User {
            id: Uuid::new_v4(),
            name: "Adhira Deshmukh".to_string(),
            code: code.to_string(),
            role,
        }
    }

    #[test]
    fn test_program_number_advances_and_persists() {
        let store = MemorySessionStore::with_session(Session {
            user: user("AD", Role::Programmer),
            last_program_number: 7,
        });
        let date = NaiveDate::from_ymd_opt(2025, 11, 3).unwrap();

        let number = next_program_number(&store, date).unwrap();
        assert_eq!(number, "2511AD-008");

        let saved = store.load().unwrap().unwrap();
        assert_eq!(saved.last_program_number, 8);
    }

    #[test]
    fn test_consecutive_allocations_increment() {
        let store = MemorySessionStore::with_session(Session::new(user("RK", Role::Programmer)));
        let date = NaiveDate::from_ymd_opt(2026, 1, 20).unwrap();

        assert_eq!(next_program_number(&store, date).unwrap(), "2601RK-001");
        assert_eq!(next_program_number(&store, date).unwrap(), "2601RK-002");
    }

    #[test]
    fn test_allocation_without_session_fails() {
        let store = MemorySessionStore::default();
        let date = NaiveDate::from_ymd_opt(2026, 1, 20).unwrap();
        assert!(matches!(
            next_program_number(&store, date),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_section_gating_follows_role() {
        let session = Session::new(user("QA", Role::Qa));
        assert!(session.can_access(Section::Qa));
        assert!(!session.can_access(Section::Accounts));
    }
}
