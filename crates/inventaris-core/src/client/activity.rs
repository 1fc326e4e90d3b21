//! Audit-trail queries.

use super::ApiClient;
use crate::error::Result;
use crate::guard::Route;
use crate::models::Activity;

impl ApiClient {
    /// Lists the full activity log (admin only).
    pub async fn list_activity(&self) -> Result<Vec<Activity>> {
        let session = self.require_route(Route::AdminActivity)?;
        let request = self.http.get(self.url("/api/riwayat"));
        self.send(request, &session.token).await
    }

    /// Lists the authenticated user's own activity.
    pub async fn my_activity(&self) -> Result<Vec<Activity>> {
        let session = self.require_session()?;
        let request = self.http.get(self.url("/api/riwayat/saya"));
        self.send(request, &session.token).await
    }

    /// Lists activity touching one row of one table (admin only).
    pub async fn activity_for_row(&self, table: &str, row_id: u64) -> Result<Vec<Activity>> {
        let session = self.require_route(Route::AdminActivity)?;
        let request = self
            .http
            .get(self.url(&format!("/api/riwayat/tabel/{table}/{row_id}")));
        self.send(request, &session.token).await
    }
}
