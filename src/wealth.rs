use eyre::WrapErr;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::session::Session;

const WEALTH_PATH: &str = "/rest/web/wealth/summary";

/// Snapshot of the account's wealth, as returned by the summary endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WealthSummary {
    pub name: String,
    pub total_value: f64,
    pub total_performance: f64,
    pub total_return: f64,
}

impl Session {
    pub async fn wealth_summary(&self) -> eyre::Result<WealthSummary> {
        let response = self
            .client
            .get(self.config.url(WEALTH_PATH))
            .headers(self.headers.clone())
            .header("X-Same-Domain", "1")
            .header("TE", "trailers")
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if status != StatusCode::OK {
            eyre::bail!("failed wealth: bad status ({}): {}", status.as_u16(), body);
        }
        let summary =
            serde_json::from_str(&body).wrap_err("failed parsing wealth response")?;
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_summary() {
        let body =
            r#"{"name":"X","totalValue":100.5,"totalPerformance":2.1,"totalReturn":3.3}"#;
        let summary: WealthSummary = serde_json::from_str(body).unwrap();
        assert_eq!(summary.name, "X");
        assert_eq!(summary.total_value, 100.5);
        assert_eq!(summary.total_performance, 2.1);
        assert_eq!(summary.total_return, 3.3);
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let summary = WealthSummary {
            name: "Pillar 3a".to_string(),
            total_value: 100.5,
            total_performance: 2.1,
            total_return: 3.3,
        };
        let line = serde_json::to_string(&summary).unwrap();
        assert_eq!(
            line,
            r#"{"name":"Pillar 3a","totalValue":100.5,"totalPerformance":2.1,"totalReturn":3.3}"#
        );
    }
}
