//! End-to-end client behaviour against a mock management server

use std::time::Duration;

use cloudstack::api::account::{Account, DeleteAccount, ListAccounts};
use cloudstack::api::user::ListUsers;
use cloudstack::api::{HmacSigner, JobResponse, Params, RequestSigner, SuccessResponse};
use cloudstack::{ApiError, Client, ClientConfig};
use mockito::{Matcher, Server};
use serde_json::json;

fn client(server: &Server) -> Client {
    let config = ClientConfig::default()
        .with_poll_interval(Duration::from_millis(10))
        .with_async_timeout(Duration::from_secs(5));
    Client::with_config(
        &format!("{}/client/api", server.url()),
        "integration-key",
        "integration-secret",
        config,
    )
    .unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn signed_get_carries_expected_signature() {
    let mut server = Server::new_async().await;

    let mut expected = Params::new()
        .add("keyword", "web server")
        .add("command", "listAccounts")
        .add("response", "json");
    HmacSigner::new("integration-key", "integration-secret")
        .sign(&mut expected)
        .unwrap();

    let m = server
        .mock("GET", "/client/api")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("command".into(), "listAccounts".into()),
            Matcher::UrlEncoded("keyword".into(), "web server".into()),
            Matcher::UrlEncoded("apiKey".into(), "integration-key".into()),
            Matcher::UrlEncoded(
                "signature".into(),
                expected.get("signature").unwrap().to_string(),
            ),
        ]))
        .with_body(r#"{"listaccountsresponse":{"count":1,"account":[{"id":"a1","name":"web"}]}}"#)
        .create_async()
        .await;

    let accounts = client(&server)
        .account()
        .list_accounts(&ListAccounts {
            keyword: Some("web server".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(accounts.count, 1);
    assert_eq!(accounts.accounts[0].name, "web");
    m.assert_async().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn unauthorized_is_auth_error() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/client/api")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body(
            r#"{"listusersresponse":{"uuidList":[],"errorcode":401,"errortext":"unable to verify user credentials and/or request signature"}}"#,
        )
        .create_async()
        .await;

    let err = client(&server)
        .user()
        .list_users(&ListUsers::default())
        .await
        .unwrap_err();

    match err {
        ApiError::AuthError(message) => assert!(message.contains("request signature")),
        other => panic!("Expected AuthError, got {:?}", other),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn error_envelope_is_server_error() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("POST", "/client/api")
        .with_status(431)
        .with_body(
            r#"{"deleteaccountresponse":{"uuidList":[],"errorcode":431,"cserrorcode":9999,"errortext":"Unable to find account by id"}}"#,
        )
        .create_async()
        .await;

    let err = client(&server)
        .account()
        .delete_account(&DeleteAccount::new("missing"))
        .await
        .unwrap_err();

    match err {
        ApiError::ServerError {
            status,
            error_code,
            cs_error_code,
            message,
        } => {
            assert_eq!(status, 431);
            assert_eq!(error_code, 431);
            assert_eq!(cs_error_code, 9999);
            assert_eq!(message, "Unable to find account by id");
        }
        other => panic!("Expected ServerError, got {:?}", other),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn plain_http_failure_is_http_error() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/client/api")
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body("Service Unavailable")
        .create_async()
        .await;

    let err = client(&server)
        .account()
        .list_accounts(&ListAccounts::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::HttpError { status: 503, .. }));
}

#[tokio::test(flavor = "multi_thread")]
async fn non_json_body_is_invalid_json() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/client/api")
        .match_query(Matcher::Any)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let err = client(&server)
        .account()
        .list_accounts(&ListAccounts::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::InvalidJson { .. }));
}

#[tokio::test(flavor = "multi_thread")]
async fn mismatched_shape_is_decode_error() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/client/api")
        .match_query(Matcher::Any)
        .with_body(r#"{"listaccountsresponse":{"count":"many","account":{}}}"#)
        .create_async()
        .await;

    let err = client(&server)
        .account()
        .list_accounts(&ListAccounts::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::DecodeError { .. }));
}

#[tokio::test(flavor = "multi_thread")]
async fn unreachable_server_is_request_error() {
    let client = Client::new("http://127.0.0.1:1/client/api", "key", "secret").unwrap();

    let err = client
        .account()
        .list_accounts(&ListAccounts::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::RequestError(_)));
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_calls_share_one_client() {
    let mut server = Server::new_async().await;
    let _m = server
        .mock("GET", "/client/api")
        .match_query(Matcher::UrlEncoded("command".into(), "listAccounts".into()))
        .with_body(r#"{"listaccountsresponse":{"count":1,"account":[{"id":"a1","name":"web"}]}}"#)
        .expect(4)
        .create_async()
        .await;

    let client = client(&server);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move {
                client
                    .account()
                    .list_accounts(&ListAccounts::default())
                    .await
            })
        })
        .collect();

    for handle in handles {
        let accounts = handle.await.unwrap().unwrap();
        assert_eq!(accounts.accounts.len(), 1);
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn timeout_can_be_resumed_with_job_id() {
    let mut server = Server::new_async().await;
    let _submit = server
        .mock("POST", "/client/api")
        .with_body(r#"{"deleteaccountresponse":{"jobid":"job-11"}}"#)
        .create_async()
        .await;
    let _pending = server
        .mock("GET", "/client/api")
        .match_query(Matcher::UrlEncoded(
            "command".into(),
            "queryAsyncJobResult".into(),
        ))
        .with_body(r#"{"queryasyncjobresultresponse":{"jobid":"job-11","jobstatus":0}}"#)
        .expect(1)
        .create_async()
        .await;
    let _done = server
        .mock("GET", "/client/api")
        .match_query(Matcher::UrlEncoded(
            "command".into(),
            "queryAsyncJobResult".into(),
        ))
        .with_body(
            json!({
                "queryasyncjobresultresponse": {
                    "jobid": "job-11",
                    "jobstatus": 1,
                    "jobresult": {"success": true}
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let config = ClientConfig::default()
        .with_poll_interval(Duration::from_millis(10))
        .with_async_timeout(Duration::ZERO);
    let client = Client::with_config(
        &format!("{}/client/api", server.url()),
        "integration-key",
        "integration-secret",
        config,
    )
    .unwrap();

    let err = client
        .account()
        .delete_account(&DeleteAccount::new("acc-1"))
        .await
        .unwrap_err();
    assert!(err.is_async_timeout());
    let partial: JobResponse<SuccessResponse> = err.partial_response().unwrap();

    let result = client
        .get_async_job_result(&partial.job_id, Duration::from_secs(5))
        .await
        .unwrap();
    assert_eq!(result, json!({"success": true}));
}

#[test]
fn account_snapshot_tolerates_missing_fields() {
    let account: Account = serde_json::from_value(json!({"id": "a1"})).unwrap();
    assert_eq!(account.id, "a1");
    assert!(account.name.is_empty());
    assert!(account.user.is_empty());
}
