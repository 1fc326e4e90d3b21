//! Login, logout, and profile operations.

use log::info;
use serde::Deserialize;

use super::ApiClient;
use crate::error::{ApiError, Result};
use crate::models::User;
use crate::params::Credentials;
use crate::session::Session;

/// Wire shape of a successful login response.
#[derive(Debug, Deserialize)]
struct LoginPayload {
    token: String,
    #[serde(alias = "pengguna")]
    user: User,
}

impl ApiClient {
    /// Logs in and persists the session.
    ///
    /// Replaces any existing session; there is no refresh flow, a new login
    /// is the only way to obtain a fresh token.
    pub async fn login(&self, credentials: &Credentials) -> Result<Session> {
        credentials.validate()?;
        let response = self
            .http
            .post(self.url("/api/login"))
            .json(credentials)
            .send()
            .await?;
        let payload: LoginPayload = self.decode(response).await?;
        let session = Session {
            token: payload.token,
            user: payload.user,
        };
        self.sessions().save(&session)?;
        info!(
            "Logged in as {} ({})",
            session.user.name,
            session.user.role.as_str()
        );
        Ok(session)
    }

    /// Logs out by discarding the stored session.
    ///
    /// Purely local. The backend holds no session state worth revoking, so
    /// this never fails for network reasons.
    pub fn logout(&self) -> Result<User> {
        let session = self.sessions().current()?.ok_or_else(|| {
            ApiError::unauthorized("Tidak ada sesi aktif")
        })?;
        self.sessions().clear()?;
        info!("Logged out {}", session.user.name);
        Ok(session.user)
    }

    /// Fetches the authenticated user's profile from the backend.
    ///
    /// Also refreshes the user half of the stored session, so a role change
    /// made by an admin takes effect without a fresh login.
    pub async fn profile(&self) -> Result<User> {
        let session = self.require_session()?;
        let request = self.http.get(self.url("/api/pengguna/profil"));
        let user: User = self.send(request, &session.token).await?;
        self.sessions().save(&Session {
            token: session.token,
            user: user.clone(),
        })?;
        Ok(user)
    }
}
