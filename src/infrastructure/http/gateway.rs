//! reqwest implementation of the analytics gateway.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::domain::entities::{
    AppointmentAnalytics, EngagementAnalytics, ReportingPeriod, StatisticsSummary,
};
use crate::domain::gateways::{AnalyticsGateway, CredentialProvider};
use crate::error::{map_reqwest_error, map_status, AppError};

use super::dto::{AppointmentAnalyticsPayload, EngagementAnalyticsPayload, StatisticsEnvelope};

/// HTTP gateway over the admin analytics API.
///
/// Attaches the bearer credential from the injected [`CredentialProvider`] to
/// every request and maps transport, status, and decode failures into the
/// console's error taxonomy.
pub struct HttpAnalyticsGateway {
    client: reqwest::Client,
    base_url: String,
    credentials: Arc<dyn CredentialProvider>,
}

impl HttpAnalyticsGateway {
    /// Creates a gateway for the given API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            credentials,
        })
    }

    /// Issues one authenticated GET and decodes the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<T, AppError> {
        let token = self.credentials.bearer_token().await?;
        let url = format!("{}{}", self.base_url, path_and_query);

        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_status(status.as_u16(), error_message(status, &body)));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::decode(e.to_string()))
    }
}

/// Builds a short error message from a failure response.
///
/// Bodies are truncated so a stray HTML error page does not flood the banner.
fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string();
    }

    const MAX_LEN: usize = 200;
    match trimmed.char_indices().nth(MAX_LEN) {
        Some((idx, _)) => format!("{}…", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}

#[async_trait]
impl AnalyticsGateway for HttpAnalyticsGateway {
    async fn fetch_appointment_analytics(
        &self,
        period: ReportingPeriod,
    ) -> Result<AppointmentAnalytics, AppError> {
        let payload: AppointmentAnalyticsPayload = self
            .get_json(&format!(
                "/admin/analytics/appointments?period={}",
                period.as_query()
            ))
            .await?;

        Ok(payload.into_domain())
    }

    async fn fetch_engagement_analytics(&self) -> Result<EngagementAnalytics, AppError> {
        let payload: EngagementAnalyticsPayload =
            self.get_json("/admin/analytics/engagement").await?;

        Ok(payload.into_domain())
    }

    async fn fetch_statistics(&self) -> Result<StatisticsSummary, AppError> {
        let envelope: StatisticsEnvelope = self.get_json("/admin/statistics").await?;

        Ok(envelope.statistics)
    }
}
