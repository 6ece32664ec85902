//! Signup and login.
//!
//! Passwords are hashed with bcrypt on tokio's blocking pool. Login only
//! answers "do these credentials match"; it issues no token or session, so
//! clients cannot prove on later requests that they logged in.

use std::sync::Arc;

use db::DbError;
use tracing::{info, instrument, warn};

use crate::{BoardError, Credentials, UserStore};

/// bcrypt cost used for new password hashes.
pub const DEFAULT_COST: u32 = 10;

pub struct CredentialManager {
    users: Arc<dyn UserStore>,
    cost: u32,
}

impl CredentialManager {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users, cost: DEFAULT_COST }
    }

    /// Override the bcrypt cost (4..=31). Only tests should go below the default.
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    /// Create an account and return the new user id.
    ///
    /// The existence check and the insert are separate statements, so two
    /// concurrent signups for one email can both pass the check. The loser
    /// then hits the `UNIQUE` constraint, which is reported as
    /// [`BoardError::Conflict`] as well.
    #[instrument(skip_all, fields(email = %credentials.email))]
    pub async fn register(&self, credentials: Credentials) -> Result<i32, BoardError> {
        let Credentials { email, password } = credentials;

        if self.users.find_user_by_email(&email).await?.is_some() {
            warn!("Signup rejected: email already registered");
            return Err(BoardError::Conflict);
        }

        let cost = self.cost;
        let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;

        match self.users.insert_user(&email, &hash).await {
            Ok(id) => {
                info!(user_id = id, "User registered");
                Ok(id)
            }
            Err(DbError::UniqueViolation(constraint)) => {
                warn!(%constraint, "Signup lost a race on the email constraint");
                Err(BoardError::Conflict)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Check an email/password pair.
    ///
    /// Unknown email and wrong password both yield
    /// [`BoardError::InvalidCredentials`].
    #[instrument(skip_all, fields(email = %credentials.email))]
    pub async fn authenticate(&self, credentials: Credentials) -> Result<(), BoardError> {
        let Credentials { email, password } = credentials;

        let Some(user) = self.users.find_user_by_email(&email).await? else {
            warn!("Login failed");
            return Err(BoardError::InvalidCredentials);
        };

        let matched =
            tokio::task::spawn_blocking(move || bcrypt::verify(password, &user.password)).await??;

        if !matched {
            warn!("Login failed");
            return Err(BoardError::InvalidCredentials);
        }

        info!("Login successful");
        Ok(())
    }
}
