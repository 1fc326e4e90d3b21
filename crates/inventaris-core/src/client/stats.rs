//! Dashboard statistics queries.

use serde_json::Value;

use super::ApiClient;
use crate::error::Result;
use crate::guard::Route;
use crate::models::DashboardStats;

impl ApiClient {
    /// Fetches the full dashboard statistics (admin only).
    pub async fn dashboard_stats(&self) -> Result<DashboardStats> {
        let session = self.require_route(Route::AdminDashboard)?;
        let request = self.http.get(self.url("/api/stats"));
        self.send(request, &session.token).await
    }

    /// Fetches the lightweight counters used by the user dashboard.
    ///
    /// The shape of this payload varies across backend versions, so it is
    /// surfaced as raw JSON rather than a typed model.
    pub async fn quick_stats(&self) -> Result<Value> {
        let session = self.require_session()?;
        let request = self.http.get(self.url("/api/stats/quick"));
        self.send(request, &session.token).await
    }
}
