//! Tests for the HTTP gateway against a mock endpoint.

use std::time::Duration;

use diagnostico_gateway_http::{GatewayConfig, HttpGateway};
use diagnostico_types::{
    Answer, GENERIC_FAILURE_MESSAGE, GatewayError, Submission, SubmissionAnswers,
    SubmissionGateway, Utms,
};
use url::Url;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn submission() -> Submission {
    Submission {
        name: "Ana".to_string(),
        company: "Empresa".to_string(),
        role: "Gerente de TI".to_string(),
        email: "ana@empresa.com".to_string(),
        country: "Panamá".to_string(),
        phone: "+507 12345678".to_string(),
        answers: SubmissionAnswers {
            utms: Utms::from_query_pairs([("utm_source", "linkedin")]),
            items: vec![
                Answer::new("industria", "retail"),
                Answer::new("erp", "sapb1"),
                Answer::new("busca", "servicio").with_extra_text("Soporte"),
            ],
        },
    }
}

fn gateway(server: &MockServer) -> anyhow::Result<HttpGateway> {
    let endpoint = Url::parse(&format!("{}/api/submit", server.uri()))?;
    Ok(HttpGateway::new(GatewayConfig::new(endpoint))?)
}

#[tokio::test]
async fn test_accepted_submission() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    let payload = submission();
    Mock::given(method("POST"))
        .and(path("/api/submit"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::to_value(&payload)?))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    gateway(&server)?.submit(&payload).await?;
    Ok(())
}

#[tokio::test]
async fn test_success_status_without_body_is_accepted() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    gateway(&server)?.submit(&submission()).await?;
    Ok(())
}

#[tokio::test]
async fn test_explicit_failure_flag() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "ok": false, "error": "Correo duplicado" })),
        )
        .mount(&server)
        .await;

    let err = gateway(&server)?.submit(&submission()).await.unwrap_err();
    assert_eq!(
        err,
        GatewayError::Rejected {
            status: 200,
            message: "Correo duplicado".to_string()
        }
    );
    assert_eq!(err.user_message(), "Correo duplicado");
    Ok(())
}

#[tokio::test]
async fn test_error_status_with_message() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(serde_json::json!({ "error": "Email inválido" })),
        )
        .mount(&server)
        .await;

    let err = gateway(&server)?.submit(&submission()).await.unwrap_err();
    assert_eq!(err.user_message(), "Email inválido");
    Ok(())
}

#[tokio::test]
async fn test_error_status_without_body() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = gateway(&server)?.submit(&submission()).await.unwrap_err();
    assert_eq!(err.user_message(), "Error 500");
    Ok(())
}

#[tokio::test]
async fn test_error_message_survives_non_boolean_ok() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(serde_json::json!({ "ok": 0, "error": "Servicio no disponible" })),
        )
        .mount(&server)
        .await;

    let err = gateway(&server)?.submit(&submission()).await.unwrap_err();
    assert_eq!(err.user_message(), "Servicio no disponible");
    Ok(())
}

#[tokio::test]
async fn test_no_retry_by_default() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    assert!(gateway(&server)?.submit(&submission()).await.is_err());
    Ok(())
}

#[tokio::test]
async fn test_retries_server_errors_when_configured() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "ok": true })))
        .mount(&server)
        .await;

    let endpoint = Url::parse(&server.uri())?;
    let config = GatewayConfig::new(endpoint).with_retries(2, Duration::from_millis(1));
    HttpGateway::new(config)?.submit(&submission()).await?;

    let requests = server.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_client_errors_are_not_retried() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400))
        .expect(1)
        .mount(&server)
        .await;

    let endpoint = Url::parse(&server.uri())?;
    let config = GatewayConfig::new(endpoint).with_retries(3, Duration::from_millis(1));
    let err = HttpGateway::new(config)?.submit(&submission()).await.unwrap_err();
    assert_eq!(err.user_message(), "Error 400");
    Ok(())
}

#[tokio::test]
async fn test_unreachable_endpoint() -> anyhow::Result<()> {
    let port = std::net::TcpListener::bind("127.0.0.1:0")?.local_addr()?.port();
    let endpoint = Url::parse(&format!("http://127.0.0.1:{port}/api/submit"))?;

    let config = GatewayConfig::new(endpoint).with_timeout(Duration::from_secs(2));
    let err = HttpGateway::new(config)?.submit(&submission()).await.unwrap_err();
    assert!(matches!(err, GatewayError::Transport(_)));
    assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
    Ok(())
}
