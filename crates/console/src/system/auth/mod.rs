pub mod api;
pub mod guard;
#[cfg(target_arch = "wasm32")]
pub mod storage;

/// Caller identity threaded explicitly through the CRUD layer: the bearer
/// token plus the role hints used to gate menu entries and mutating actions.
/// Roles are display-layer hints only; the backend enforces authorization.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub token: Option<String>,
    pub roles: Vec<String>,
}

impl Session {
    pub fn new(token: impl Into<String>, roles: Vec<String>) -> Self {
        Self {
            token: Some(token.into()),
            roles,
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn is_admin(&self) -> bool {
        guard::is_admin(&self.roles)
    }
}
