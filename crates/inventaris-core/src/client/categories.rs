//! Category CRUD.

use serde_json::json;

use super::ApiClient;
use crate::error::Result;
use crate::guard::Route;
use crate::models::Category;
use crate::params::{CreateCategory, UpdateCategory};

impl ApiClient {
    /// Lists all categories.
    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        let session = self.require_session()?;
        let request = self.http.get(self.url("/api/kategori"));
        self.send(request, &session.token).await
    }

    /// Fetches a single category by ID.
    pub async fn get_category(&self, id: u64) -> Result<Category> {
        let session = self.require_session()?;
        let request = self.http.get(self.url(&format!("/api/kategori/{id}")));
        self.send(request, &session.token).await
    }

    /// Creates a category (admin only).
    pub async fn create_category(&self, params: &CreateCategory) -> Result<Category> {
        params.validate()?;
        let session = self.require_route(Route::AdminInventory)?;
        let request = self.http.post(self.url("/api/kategori")).json(&json!({
            "nama": params.name,
            "deskripsi": params.description,
        }));
        self.send(request, &session.token).await
    }

    /// Updates a category (admin only).
    pub async fn update_category(&self, params: &UpdateCategory) -> Result<Category> {
        params.validate()?;
        let session = self.require_route(Route::AdminInventory)?;
        let request = self
            .http
            .put(self.url(&format!("/api/kategori/{}", params.id)))
            .json(&json!({
                "nama": params.name,
                "deskripsi": params.description,
            }));
        self.send(request, &session.token).await
    }

    /// Deletes a category (admin only).
    ///
    /// The backend refuses when products still reference the category; that
    /// surfaces as a 400 with the backend's message.
    pub async fn delete_category(&self, id: u64) -> Result<()> {
        let session = self.require_route(Route::AdminInventory)?;
        let response = self
            .http
            .delete(self.url(&format!("/api/kategori/{id}")))
            .bearer_auth(&session.token)
            .send()
            .await?;
        self.expect_success(response).await
    }
}
