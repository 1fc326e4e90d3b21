//! User management operations (admin).

use serde_json::json;

use super::ApiClient;
use crate::error::Result;
use crate::guard::Route;
use crate::models::User;
use crate::params::{CreateUser, UpdateUser};

impl ApiClient {
    /// Lists all users (admin only).
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let session = self.require_route(Route::AdminUsers)?;
        let request = self.http.get(self.url("/api/pengguna"));
        self.send(request, &session.token).await
    }

    /// Fetches a single user by ID (admin only).
    pub async fn get_user(&self, id: u64) -> Result<User> {
        let session = self.require_route(Route::AdminUsers)?;
        let request = self.http.get(self.url(&format!("/api/pengguna/{id}")));
        self.send(request, &session.token).await
    }

    /// Creates a user (admin only).
    pub async fn create_user(&self, params: &CreateUser) -> Result<User> {
        params.validate()?;
        let session = self.require_route(Route::AdminUsers)?;
        let request = self.http.post(self.url("/api/pengguna")).json(&json!({
            "nama_pengguna": params.name,
            "email": params.email,
            "kata_sandi": params.password,
            "peran": params.role.map(|r| r.as_str()),
        }));
        self.send(request, &session.token).await
    }

    /// Updates a user (admin only).
    pub async fn update_user(&self, params: &UpdateUser) -> Result<User> {
        let session = self.require_route(Route::AdminUsers)?;
        let request = self
            .http
            .put(self.url(&format!("/api/pengguna/{}", params.id)))
            .json(&json!({
                "nama_pengguna": params.name,
                "email": params.email,
                "kata_sandi": params.password,
                "peran": params.role.map(|r| r.as_str()),
            }));
        self.send(request, &session.token).await
    }

    /// Deletes a user (admin only).
    pub async fn delete_user(&self, id: u64) -> Result<()> {
        let session = self.require_route(Route::AdminUsers)?;
        let response = self
            .http
            .delete(self.url(&format!("/api/pengguna/{id}")))
            .bearer_auth(&session.token)
            .send()
            .await?;
        self.expect_success(response).await
    }
}
