use uuid::Uuid;

use crate::forms::{FormErrors, LoginDraft};

/// Where the token lives between page loads
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&mut self, token: &str);
    fn remove(&mut self);
}

/// Token store for tests and non-browser hosts
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    token: Option<String>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self { token: Some(token.to_string()) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.clone()
    }

    fn save(&mut self, token: &str) {
        self.token = Some(token.to_string());
    }

    fn remove(&mut self) {
        self.token = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    Authenticated,
}

/// The only way views read or change the token
#[derive(Debug, Clone)]
pub struct Session<S: TokenStore> {
    store: S,
}

impl<S: TokenStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Non-empty stored token, if any
    pub fn get_token(&self) -> Option<String> {
        self.store.load().filter(|token| !token.is_empty())
    }

    /// Store a token; an empty token logs out
    pub fn set_token(&mut self, token: &str) {
        if token.is_empty() {
            self.clear_token();
        } else {
            self.store.save(token);
        }
    }

    pub fn clear_token(&mut self) {
        self.store.remove();
    }

    pub fn state(&self) -> AuthState {
        match self.get_token() {
            Some(_) => AuthState::Authenticated,
            None => AuthState::Unauthenticated,
        }
    }

    /// Check the form and issue a fresh token
    pub fn login(&mut self, credentials: &LoginDraft) -> Result<AuthState, FormErrors> {
        credentials.validate()?;
        let token = Uuid::new_v4().to_string();
        self.set_token(&token);
        log::info!("Session started for {}", credentials.email.trim());
        Ok(self.state())
    }

    pub fn logout(&mut self) -> AuthState {
        self.clear_token();
        log::info!("Session ended");
        self.state()
    }
}
