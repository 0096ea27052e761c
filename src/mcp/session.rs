use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

/// Manages MCP session IDs and the client names that opened them.
#[derive(Debug, Clone, Default)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<String, String>>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new session for a client. Returns the session ID.
    pub fn create_session(&self, client_name: &str) -> String {
        let session_id = Uuid::new_v4().to_string();
        let mut sessions = self.sessions.lock().unwrap();
        sessions.insert(session_id.clone(), client_name.to_string());
        session_id
    }

    /// Look up the client name for a session.
    pub fn get_client_name(&self, session_id: &str) -> Option<String> {
        let sessions = self.sessions.lock().unwrap();
        sessions.get(session_id).cloned()
    }

    /// Remove a session.
    pub fn remove_session(&self, session_id: &str) {
        let mut sessions = self.sessions.lock().unwrap();
        sessions.remove(session_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_get_session() {
        let mgr = SessionManager::new();
        let sid = mgr.create_session("test-client");
        assert_eq!(mgr.get_client_name(&sid), Some("test-client".to_string()));
    }

    #[test]
    fn test_remove_session() {
        let mgr = SessionManager::new();
        let sid = mgr.create_session("test-client");
        mgr.remove_session(&sid);
        assert_eq!(mgr.get_client_name(&sid), None);
    }

    #[test]
    fn test_unknown_session() {
        let mgr = SessionManager::new();
        assert_eq!(mgr.get_client_name("nonexistent"), None);
    }
}
