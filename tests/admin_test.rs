//! Integration tests for the admin client.

use qcs::{AdminClient, AdminConfig, QcsError};
use wiremock::matchers::{body_json, body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn admin_config(uri: &str, runtime_code: Option<&str>) -> AdminConfig {
    let address = uri
        .strip_prefix("http://")
        .expect("mock server uri is plain http");
    let (host, port) = address.split_once(':').expect("mock server uri has a port");

    AdminConfig {
        host: host.to_string(),
        port: port.parse().expect("mock server port is numeric"),
        api_path: "/api/v1".to_string(),
        tls: false,
        access_token: "admin-token".to_string(),
        runtime_code: runtime_code.map(str::to_string),
    }
}

#[tokio::test]
async fn test_create_sn_sends_documented_body_and_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/sn/create"))
        .and(header("X-Access-Token", "admin-token"))
        .and(header("X-Runtime-Code", "rc-7"))
        .and(body_json(serde_json::json!({
            "serial_number": "ABC-123",
            "reason": "none"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "msg": "created",
            "serial_number": "ABC-123"
        })))
        .mount(&mock_server)
        .await;

    let admin = AdminClient::new(admin_config(&mock_server.uri(), Some("rc-7")));

    let created = admin.create_sn("ABC-123", None).await.unwrap();
    assert_eq!(created.msg, "created");
    assert_eq!(created.serial_number, "ABC-123");
}

#[tokio::test]
async fn test_create_sn_with_explicit_reason() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/sn/create"))
        .and(body_json(serde_json::json!({
            "serial_number": "XXXX-XXXX",
            "reason": "For testing."
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "msg": "Successfully uploaded a new S/N.",
            "serial_number": "XXXX-XXXX"
        })))
        .mount(&mock_server)
        .await;

    let admin = AdminClient::new(admin_config(&mock_server.uri(), None));

    let created = admin
        .create_sn("XXXX-XXXX", Some("For testing."))
        .await
        .unwrap();
    assert_eq!(created.serial_number, "XXXX-XXXX");
}

#[tokio::test]
async fn test_create_sn_conflict_keeps_error_contract() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/sn/create"))
        .respond_with(ResponseTemplate::new(409).set_body_json(serde_json::json!({
            "error": "duplicate"
        })))
        .mount(&mock_server)
        .await;

    let admin = AdminClient::new(admin_config(&mock_server.uri(), None));

    let err = admin.create_sn("ABC-123", None).await.unwrap_err();
    assert_eq!(err.to_string(), "QCS::Error:duplicate");
    assert_eq!(err.status_code(), Some(409));
    assert!(matches!(err, QcsError::ServerRejected { status: 409, .. }));
}

#[tokio::test]
async fn test_all_non_200_statuses_share_the_error_contract() {
    for status in [400u16, 401, 404, 429, 500] {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/sn/generate"))
            .respond_with(ResponseTemplate::new(status).set_body_json(serde_json::json!({
                "error": "nope"
            })))
            .mount(&mock_server)
            .await;

        let admin = AdminClient::new(admin_config(&mock_server.uri(), None));

        let err = admin.generate_sn(1, None).await.unwrap_err();
        assert_eq!(err.to_string(), "QCS::Error:nope", "status {status}");
        assert_eq!(err.status_code(), Some(status));
    }
}

#[tokio::test]
async fn test_generate_sn_defaults_reason() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/sn/generate"))
        .and(body_json(serde_json::json!({
            "count": 2,
            "reason": "none"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "msg": "Successfully generated a new S/N.",
            "serial_numbers": ["aaaa-1111", "bbbb-2222"]
        })))
        .mount(&mock_server)
        .await;

    let admin = AdminClient::new(admin_config(&mock_server.uri(), None));

    let generated = admin.generate_sn(2, None).await.unwrap();
    assert_eq!(generated.serial_numbers.len(), 2);
    assert_eq!(generated.serial_numbers[0], "aaaa-1111");
}

#[tokio::test]
async fn test_get_all_records_is_a_bodyless_get() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/sn/get-all"))
        .and(body_string(""))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                {"sn": "779f-4e90", "key": "3266cd6a", "note": "first batch"},
                {"sn": "aebd-4295", "key": "", "note": ""}
            ]
        })))
        .mount(&mock_server)
        .await;

    let admin = AdminClient::new(admin_config(&mock_server.uri(), None));

    let records = admin.get_all_records().await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].serial_number, "779f-4e90");
    assert_eq!(records[0].key, "3266cd6a");
    assert_eq!(records[1].note, "");
}

#[tokio::test]
async fn test_get_available_sn_is_repeatable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/sn/get-available"))
        .and(body_string(""))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": ["779f-4e90", "aebd-4295"]
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let admin = AdminClient::new(admin_config(&mock_server.uri(), None));

    let first = admin.get_available_sn().await.unwrap();
    let second = admin.get_available_sn().await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first, vec!["779f-4e90", "aebd-4295"]);
}

#[tokio::test]
async fn test_runtime_code_header_defaults_to_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/sn/get-available"))
        .and(header("X-Runtime-Code", ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": []
        })))
        .mount(&mock_server)
        .await;

    let admin = AdminClient::new(admin_config(&mock_server.uri(), None));

    let available = admin.get_available_sn().await.unwrap();
    assert!(available.is_empty());
}

#[tokio::test]
async fn test_update_sn_note() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/sn/update"))
        .and(body_json(serde_json::json!({
            "serial_number": "779f-4e90",
            "note": "shipped to lab"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "msg": "Successfully updated the note of specified S/N.",
            "note": "shipped to lab"
        })))
        .mount(&mock_server)
        .await;

    let admin = AdminClient::new(admin_config(&mock_server.uri(), None));

    let updated = admin.update_sn_note("779f-4e90", "shipped to lab").await.unwrap();
    assert_eq!(updated.note, "shipped to lab");
}

#[tokio::test]
async fn test_malformed_success_body_is_a_distinct_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/sn/create"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "unexpected": []
        })))
        .mount(&mock_server)
        .await;

    let admin = AdminClient::new(admin_config(&mock_server.uri(), None));

    let err = admin.create_sn("ABC-123", None).await.unwrap_err();
    assert!(matches!(
        err,
        QcsError::MalformedResponse { status: 200, .. }
    ));
}

#[tokio::test]
async fn test_non_json_error_body_is_a_distinct_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/sn/create"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&mock_server)
        .await;

    let admin = AdminClient::new(admin_config(&mock_server.uri(), None));

    let err = admin.create_sn("ABC-123", None).await.unwrap_err();
    assert!(matches!(
        err,
        QcsError::MalformedResponse { status: 502, .. }
    ));
}
