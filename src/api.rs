use crate::error::{ClientError, ClientResult};
use crate::types::{GenerateResponse, HistoryEntry, ReportForm};
use async_trait::async_trait;
use reqwest::multipart::Form;
use reqwest::{Client, Url};

/// Operations the client needs from the report server
#[async_trait]
pub trait ReportApi: Send + Sync {
    /// `GET /historico`
    async fn history(&self) -> ClientResult<Vec<HistoryEntry>>;

    /// `POST /processar`; a decoded body without `pdf_name` is still `Ok`
    async fn generate(&self, form: &ReportForm) -> ClientResult<GenerateResponse>;

    /// `DELETE /remover_pdf/{pdf_name}`; the response body is not inspected
    async fn delete(&self, pdf_name: &str) -> ClientResult<()>;

    /// Absolute address of `GET /download/{pdf_name}`
    fn download_url(&self, pdf_name: &str) -> String;
}

/// reqwest-backed client for the report server
pub struct HttpReportApi {
    client: Client,
    base_url: Url,
}

impl HttpReportApi {
    pub fn new(base_url: Url) -> ClientResult<Self> {
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    /// Join percent-encoded path segments onto the base URL
    fn endpoint(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[async_trait]
impl ReportApi for HttpReportApi {
    async fn history(&self) -> ClientResult<Vec<HistoryEntry>> {
        let url = self.endpoint(&["historico"])?;
        tracing::debug!(%url, "fetching report history");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::Status { status, body });
        }

        Ok(serde_json::from_str(&body)?)
    }

    async fn generate(&self, form: &ReportForm) -> ClientResult<GenerateResponse> {
        let url = self.endpoint(&["processar"])?;
        tracing::debug!(%url, name = %form.name, "submitting report form");

        let multipart = form
            .fields()
            .into_iter()
            .fold(Form::new(), |acc, (key, value)| acc.text(key, value.to_string()));

        let response = self.client.post(url).multipart(multipart).send().await?;
        let status = response.status();
        let body = response.text().await?;

        // Error statuses with a JSON body are application-level failures
        let parsed: GenerateResponse = serde_json::from_str(&body)?;
        if !status.is_success() {
            tracing::warn!(%status, error = ?parsed.error, "report generation rejected");
        }
        Ok(parsed)
    }

    async fn delete(&self, pdf_name: &str) -> ClientResult<()> {
        let url = self.endpoint(&["remover_pdf", pdf_name])?;
        tracing::debug!(%url, "deleting report");

        self.client.delete(url).send().await?;
        Ok(())
    }

    fn download_url(&self, pdf_name: &str) -> String {
        match self.endpoint(&["download", pdf_name]) {
            Ok(url) => url.to_string(),
            Err(_) => crate::types::download_path(pdf_name),
        }
    }
}
