//! Test helpers for the CloudStack API

use std::time::Duration;

use serde_json::Value;

use super::{Client, ClientConfig};

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_SECRET_KEY: &str = "test-secret";

/// Endpoint of a mock server as the client expects it
pub fn api_url(server_url: &str) -> String {
    format!("{}/client/api", server_url)
}

/// Config that polls fast enough for tests
pub fn fast_config() -> ClientConfig {
    ClientConfig::default()
        .with_poll_interval(Duration::from_millis(10))
        .with_async_timeout(Duration::from_secs(5))
}

pub fn create_test_client(server_url: &str) -> Client {
    create_test_client_with(server_url, fast_config())
}

pub fn create_test_client_with(server_url: &str, config: ClientConfig) -> Client {
    Client::with_config(&api_url(server_url), TEST_API_KEY, TEST_SECRET_KEY, config).unwrap()
}

/// Body of a `queryAsyncJobResult` answer
pub fn job_result_body(job_id: &str, status: i32, result: Value) -> String {
    serde_json::json!({
        "queryasyncjobresultresponse": {
            "jobid": job_id,
            "jobstatus": status,
            "jobresultcode": if status == 2 { 530 } else { 0 },
            "jobresulttype": "object",
            "jobresult": result,
            "cmd": "org.apache.cloudstack.api.command.admin.account.CreateAccountCmd",
            "created": "2024-05-01T10:00:00+0000"
        }
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_targets_api_path() {
        let client = create_test_client("http://127.0.0.1:1234");
        assert_eq!(client.base_url().as_str(), "http://127.0.0.1:1234/client/api");
        assert_eq!(client.config().poll_interval, Duration::from_millis(10));
    }

    #[test]
    fn job_result_body_is_enveloped() {
        let body: Value =
            serde_json::from_str(&job_result_body("j1", 1, serde_json::json!({}))).unwrap();
        assert_eq!(body["queryasyncjobresultresponse"]["jobstatus"], 1);
        assert_eq!(body["queryasyncjobresultresponse"]["jobid"], "j1");
    }
}
