/// End-to-end panel tests.
///
/// Each test serves a canned IPPure response from a mock server, runs the full
/// fetch → format → report flow through the `reqwest` client, and checks the
/// single payload the reporter received:
/// - full record, empty body, malformed body, HTTP error status
/// - missing HTTP capability
/// - delivery to a channel and a webhook in the same run
use anyhow::Result;
use ippure_panel::{run, Fetcher, PanelOutcome, PanelPayload, ReqwestClient, WebhookReporter};
use std::time::Duration;
use tokio::sync::oneshot;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[cfg(test)]
mod tests {
    use super::*;

    async fn serve(template: ResponseTemplate) -> MockServer {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/info"))
            .respond_with(template)
            .expect(1)
            .mount(&mock_server)
            .await;
        mock_server
    }

    async fn run_against(mock_server: &MockServer) -> Result<(PanelOutcome, PanelPayload)> {
        let client = ReqwestClient::new(Duration::from_secs(5))?;
        let fetcher = Fetcher::new(client, format!("{}/v1/info", mock_server.uri()));
        let (tx, rx) = oneshot::channel();
        let outcome = run(&fetcher, tx).await?;
        Ok((outcome, rx.await?))
    }

    #[tokio::test]
    async fn test_full_record_panel() -> Result<()> {
        let body = serde_json::json!({
            "ip": "1.2.3.4",
            "fraudScore": 10,
            "isResidential": true,
            "isBroadcast": false,
            "asn": 123,
            "asOrganization": "ExampleNet",
            "country": "US",
            "region": "CA",
            "city": "LA"
        });
        let mock_server = serve(ResponseTemplate::new(200).set_body_json(body)).await;

        let (outcome, payload) = run_against(&mock_server).await?;
        assert_eq!(outcome, PanelOutcome::Succeeded);
        assert_eq!(payload.title, "IPPure - IP 纯净度");
        assert_eq!(payload.icon, "shield.lefthalf.filled");
        assert_eq!(payload.icon_color, "#4A90E2");

        let lines: Vec<&str> = payload.content.split('\n').collect();
        assert_eq!(
            lines,
            vec![
                "纯净度：90/100（高）",
                "风险评分：10/100（低风险）",
                "类型：住宅",
                "IP：1.2.3.4",
                "ASN：AS123 · ExampleNet",
                "位置：US / CA / LA",
            ]
        );
        assert!(!payload.content.contains("：-"));
        Ok(())
    }

    #[tokio::test]
    async fn test_empty_body_panel() -> Result<()> {
        let mock_server = serve(ResponseTemplate::new(200)).await;

        let (outcome, payload) = run_against(&mock_server).await?;
        assert_eq!(outcome, PanelOutcome::Succeeded);
        assert_eq!(
            payload.content,
            "纯净度：-\n风险评分：-\n类型：机房/非住宅\nIP：-\nASN：- · -\n位置：-"
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_malformed_body_panel() -> Result<()> {
        let mock_server = serve(ResponseTemplate::new(200).set_body_string("{not json")).await;

        let (outcome, payload) = run_against(&mock_server).await?;
        assert_eq!(outcome, PanelOutcome::Failed);
        assert_eq!(payload.icon, "exclamationmark.triangle");
        assert_eq!(payload.icon_color, "#D0021B");

        let parser_error = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .to_string();
        assert_eq!(payload.content, format!("请求失败：{}", parser_error));
        Ok(())
    }

    #[tokio::test]
    async fn test_error_status_panel() -> Result<()> {
        let mock_server = serve(ResponseTemplate::new(502).set_body_string("bad gateway")).await;

        let (outcome, payload) = run_against(&mock_server).await?;
        assert_eq!(outcome, PanelOutcome::Failed);
        assert_eq!(payload.content, "请求失败：HTTP 502 Bad Gateway");
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_capability_panel() -> Result<()> {
        let fetcher: Fetcher<ReqwestClient> = Fetcher::unavailable("https://my.ippure.com/v1/info");
        let (tx, rx) = oneshot::channel();

        let outcome = run(&fetcher, tx).await?;
        let payload = rx.await?;
        assert_eq!(outcome, PanelOutcome::Failed);
        assert!(payload.content.contains("No HTTP client available"));
        assert!(payload.is_failure());
        Ok(())
    }

    #[tokio::test]
    async fn test_panel_reaches_channel_and_webhook() -> Result<()> {
        let api_server = serve(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "ip": "5.6.7.8" })),
        )
        .await;

        let webhook_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/hook"))
            .and(body_partial_json(serde_json::json!({
                "title": "IPPure - IP 纯净度",
                "icon": "shield.lefthalf.filled",
                "icon-color": "#4A90E2",
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&webhook_server)
            .await;

        let client = ReqwestClient::new(Duration::from_secs(5))?;
        let fetcher = Fetcher::new(client, format!("{}/v1/info", api_server.uri()));
        let webhook = WebhookReporter::new(
            format!("{}/hook", webhook_server.uri()),
            Duration::from_secs(5),
        )?;
        let (tx, rx) = oneshot::channel();

        let outcome = run(&fetcher, (tx, webhook)).await?;
        assert_eq!(outcome, PanelOutcome::Succeeded);

        let payload = rx.await?;
        assert!(payload.content.contains("IP：5.6.7.8"));

        let received = webhook_server.received_requests().await.unwrap_or_default();
        assert_eq!(received.len(), 1);
        let posted: serde_json::Value = serde_json::from_slice(&received[0].body)?;
        assert_eq!(posted["content"], payload.content.as_str());
        Ok(())
    }
}
