//! Report preview and PDF download (admin).

use super::ApiClient;
use crate::error::{ApiError, Result};
use crate::guard::Route;
use crate::params::ReportRequest;

/// A rendered PDF report ready to be written to disk.
#[derive(Debug, Clone)]
pub struct ReportDownload {
    /// Raw PDF bytes as the backend rendered them
    pub bytes: Vec<u8>,
    /// Suggested file name, derived from the report type and window
    pub file_name: String,
}

impl ApiClient {
    /// Previews a report as structured JSON (admin only).
    pub async fn preview_report(&self, params: &ReportRequest) -> Result<serde_json::Value> {
        params.validate()?;
        let session = self.require_route(Route::AdminReports)?;
        let request = self
            .http
            .get(self.url("/api/laporan/preview"))
            .query(&report_query(params));
        self.send(request, &session.token).await
    }

    /// Downloads a report as PDF bytes (admin only).
    ///
    /// The body is passed through untouched; a body that does not start
    /// with the PDF magic is treated as a decode failure rather than saved
    /// as a broken file.
    pub async fn download_report(&self, params: &ReportRequest) -> Result<ReportDownload> {
        params.validate()?;
        let session = self.require_route(Route::AdminReports)?;
        let response = self
            .http
            .get(self.url("/api/laporan/download"))
            .query(&report_query(params))
            .bearer_auth(&session.token)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(self.error_from(status.as_u16(), response).await);
        }
        let bytes = response.bytes().await?.to_vec();
        if !bytes.starts_with(b"%PDF") {
            return Err(ApiError::decode(
                "report download did not return a PDF document",
            ));
        }
        Ok(ReportDownload {
            file_name: suggested_file_name(params),
            bytes,
        })
    }
}

fn report_query(params: &ReportRequest) -> Vec<(&'static str, String)> {
    let mut query = vec![("jenis", params.report_type.as_str().to_string())];
    if let Some(start) = params.start_date {
        query.push(("tanggal_mulai", start.to_string()));
    }
    if let Some(end) = params.end_date {
        query.push(("tanggal_akhir", end.to_string()));
    }
    query
}

/// Builds a file name like `laporan-peminjaman-2025-10-01-2025-10-31.pdf`.
fn suggested_file_name(params: &ReportRequest) -> String {
    let mut name = format!("laporan-{}", params.report_type.as_str());
    if let Some(start) = params.start_date {
        name.push_str(&format!("-{start}"));
    }
    if let Some(end) = params.end_date {
        name.push_str(&format!("-{end}"));
    }
    name.push_str(".pdf");
    name
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use crate::params::ReportType;

    use super::*;

    #[test]
    fn test_suggested_file_name_includes_window() {
        let params = ReportRequest {
            report_type: ReportType::Peminjaman,
            start_date: Some(date(2025, 10, 1)),
            end_date: Some(date(2025, 10, 31)),
        };
        assert_eq!(
            suggested_file_name(&params),
            "laporan-peminjaman-2025-10-01-2025-10-31.pdf"
        );

        let params = ReportRequest::default();
        assert_eq!(suggested_file_name(&params), "laporan-lengkap.pdf");
    }

    #[test]
    fn test_report_query_wire_names() {
        let params = ReportRequest {
            report_type: ReportType::Ringkasan,
            start_date: Some(date(2025, 10, 1)),
            end_date: None,
        };
        let query = report_query(&params);
        assert_eq!(query[0], ("jenis", "ringkasan".to_string()));
        assert_eq!(query[1], ("tanggal_mulai", "2025-10-01".to_string()));
    }
}
