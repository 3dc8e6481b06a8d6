use openapi::apis::configuration::{ApiKey, Configuration};
use openapi::apis::quick_connect_api;
use openapi::apis::Error;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// The blocking client must be built and used off the async test runtime.
fn test_configuration(base_path: String) -> Configuration {
    Configuration {
        base_path,
        api_key: Some(ApiKey {
            prefix: None,
            key: "test-token".to_owned(),
        }),
        ..Configuration::default()
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn enabled_parses_bare_boolean() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/QuickConnect/Enabled"))
        .and(header(
            "authorization",
            "MediaBrowser Token=\"test-token\"",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(true))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let enabled = tokio::task::spawn_blocking(move || {
        let configuration = test_configuration(uri);
        quick_connect_api::get_quick_connect_enabled(&configuration)
    })
    .await
    .unwrap()
    .unwrap();
    assert!(enabled);
}

#[tokio::test(flavor = "multi_thread")]
async fn initiate_returns_secret_and_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/QuickConnect/Initiate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Authenticated": false,
            "Secret": "0123456789abcdef",
            "Code": "427911",
            "DeviceName": "living room",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let result = tokio::task::spawn_blocking(move || {
        let configuration = test_configuration(uri);
        quick_connect_api::initiate_quick_connect(&configuration)
    })
    .await
    .unwrap()
    .unwrap();
    assert!(!result.authenticated);
    assert_eq!(result.secret.as_deref(), Some("0123456789abcdef"));
    assert_eq!(result.code.as_deref(), Some("427911"));
    assert_eq!(result.device_name.as_deref(), Some("living room"));
}

#[tokio::test(flavor = "multi_thread")]
async fn state_sends_secret_and_reports_authentication() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/QuickConnect/Connect"))
        .and(query_param("secret", "0123456789abcdef"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Authenticated": true,
            "Secret": "0123456789abcdef",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let result = tokio::task::spawn_blocking(move || {
        let configuration = test_configuration(uri);
        quick_connect_api::get_quick_connect_state(&configuration, "0123456789abcdef")
    })
    .await
    .unwrap()
    .unwrap();
    assert!(result.authenticated);
}

#[tokio::test(flavor = "multi_thread")]
async fn unknown_secret_surfaces_problem_details() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/QuickConnect/Connect"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "title": "Not Found",
            "status": 404,
        })))
        .mount(&server)
        .await;

    let uri = server.uri();
    let err = tokio::task::spawn_blocking(move || {
        let configuration = test_configuration(uri);
        quick_connect_api::get_quick_connect_state(&configuration, "nope")
    })
    .await
    .unwrap()
    .unwrap_err();
    match err {
        Error::ResponseError(content) => {
            assert_eq!(content.status, 404);
            let entity = content.entity.unwrap();
            match entity {
                quick_connect_api::GetQuickConnectStateError::Status404(problem) => {
                    assert_eq!(problem.status, Some(404));
                }
                other => panic!("unexpected entity: {other:?}"),
            }
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn authorize_sends_code_and_optional_user() {
    let server = MockServer::start().await;
    let user_id = uuid::Uuid::new_v4();
    Mock::given(method("POST"))
        .and(path("/QuickConnect/Authorize"))
        .and(query_param("code", "427911"))
        .and(query_param("userId", user_id.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(true))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let ok = tokio::task::spawn_blocking(move || {
        let configuration = test_configuration(uri);
        quick_connect_api::authorize_quick_connect(&configuration, "427911", Some(user_id))
    })
    .await
    .unwrap()
    .unwrap();
    assert!(ok);
}
