#[cfg(test)]
#[allow(unused_mut)]
mod tests {
    use super::super::*;
    use crate::api::test_helpers::{create_test_client, create_test_client_with, fast_config, job_result_body};
    use mockito::{Matcher, Server};
    use serde_json::json;

    #[test]
    fn job_status_codes() {
        assert_eq!(JobStatus::from_code(0), JobStatus::Pending);
        assert_eq!(JobStatus::from_code(1), JobStatus::Succeeded);
        assert_eq!(JobStatus::from_code(2), JobStatus::Failed);
        assert_eq!(JobStatus::from_code(7), JobStatus::Pending);
        assert!(!JobStatus::Pending.is_terminal());
        assert!(JobStatus::Failed.is_terminal());
    }

    #[test]
    fn failure_prefers_job_result_error() {
        let result = AsyncJobResult {
            jobstatus: 2,
            jobresultcode: 530,
            jobresult: json!({"errorcode": 431, "errortext": "Unable to find account"}),
            ..Default::default()
        };
        assert_eq!(result.failure(), (431, "Unable to find account".to_string()));

        let result = AsyncJobResult {
            jobstatus: 2,
            jobresultcode: 530,
            jobresult: json!("plain failure"),
            ..Default::default()
        };
        assert_eq!(result.failure(), (530, "plain failure".to_string()));

        let result = AsyncJobResult {
            jobstatus: 2,
            jobresultcode: 530,
            ..Default::default()
        };
        assert_eq!(result.failure(), (530, "Undefined error".to_string()));
    }

    #[tokio::test]
    async fn test_query_async_job_result_single_poll() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("GET", "/client/api")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("command".into(), "queryAsyncJobResult".into()),
                Matcher::UrlEncoded("jobid".into(), "job-1".into()),
            ]))
            .with_body(
                json!({
                    "queryasyncjobresultresponse": {
                        "jobid": "job-1",
                        "jobstatus": 0,
                        "jobinstanceid": 42,
                        "jobprocstatus": 0
                    }
                })
                .to_string(),
            )
            .expect(1)
            .create_async()
            .await;

        let client = create_test_client(&server.url());
        let result = client
            .async_job()
            .query_async_job_result(&QueryAsyncJobResult::new("job-1"))
            .await
            .unwrap();

        assert_eq!(result.status(), JobStatus::Pending);
        assert_eq!(result.jobinstanceid, "42");

        m.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_async_jobs() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/client/api")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("command".into(), "listAsyncJobs".into()),
                Matcher::UrlEncoded("listall".into(), "true".into()),
            ]))
            .with_body(
                json!({
                    "listasyncjobsresponse": {
                        "count": 2,
                        "asyncjobs": [
                            {"jobid": "job-1", "jobstatus": 1, "cmd": "createAccount"},
                            {"jobid": "job-2", "jobstatus": 0, "removed": "false"}
                        ]
                    }
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = create_test_client(&server.url());
        let jobs = client
            .async_job()
            .list_async_jobs(&ListAsyncJobs {
                listall: Some(true),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(jobs.count, 2);
        assert_eq!(jobs.async_jobs[0].jobid, "job-1");
        assert_eq!(jobs.async_jobs[1].jobstatus, 0);
    }

    #[tokio::test]
    async fn test_wait_for_job_returns_raw_result() {
        let mut server = Server::new_async().await;
        let pending = server
            .mock("GET", "/client/api")
            .match_query(Matcher::UrlEncoded(
                "command".into(),
                "queryAsyncJobResult".into(),
            ))
            .with_body(job_result_body("job-5", 0, json!(null)))
            .expect(1)
            .create_async()
            .await;
        let done = server
            .mock("GET", "/client/api")
            .match_query(Matcher::UrlEncoded(
                "command".into(),
                "queryAsyncJobResult".into(),
            ))
            .with_body(job_result_body("job-5", 1, json!({"success": true})))
            .expect(1)
            .create_async()
            .await;

        let client = create_test_client(&server.url());
        let result = client.async_job().wait_for_job("job-5").await.unwrap();
        assert_eq!(result, json!({"success": true}));

        pending.assert_async().await;
        done.assert_async().await;
    }

    #[tokio::test]
    async fn test_wait_for_job_failure() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/client/api")
            .match_query(Matcher::UrlEncoded(
                "command".into(),
                "queryAsyncJobResult".into(),
            ))
            .with_body(job_result_body(
                "job-6",
                2,
                json!({"errorcode": 530, "errortext": "Failed to delete account"}),
            ))
            .create_async()
            .await;

        let client = create_test_client(&server.url());
        match client.async_job().wait_for_job("job-6").await {
            Err(ApiError::AsyncJobFailed {
                job_id,
                error_code,
                message,
            }) => {
                assert_eq!(job_id, "job-6");
                assert_eq!(error_code, 530);
                assert_eq!(message, "Failed to delete account");
            }
            other => panic!("Expected AsyncJobFailed error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_async_job_result_timeout_has_null_partial() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/client/api")
            .match_query(Matcher::UrlEncoded(
                "command".into(),
                "queryAsyncJobResult".into(),
            ))
            .with_body(job_result_body("job-8", 0, json!(null)))
            .create_async()
            .await;

        let client = create_test_client_with(&server.url(), fast_config());
        let err = client
            .get_async_job_result("job-8", Duration::from_millis(30))
            .await
            .unwrap_err();

        assert!(err.is_async_timeout());
        assert_eq!(err.partial_response::<Value>(), Some(Value::Null));
    }

    #[tokio::test]
    async fn test_deadline_poll_count_is_bounded() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("GET", "/client/api")
            .match_query(Matcher::UrlEncoded(
                "command".into(),
                "queryAsyncJobResult".into(),
            ))
            .with_body(job_result_body("job-9", 0, json!(null)))
            .expect(2)
            .create_async()
            .await;

        // One poll on submission and one when the single sleep reaches the deadline
        let config = fast_config().with_poll_interval(Duration::from_millis(200));
        let client = create_test_client_with(&server.url(), config);
        let err = client
            .get_async_job_result("job-9", Duration::from_millis(200))
            .await
            .unwrap_err();

        assert!(err.is_async_timeout());
        m.assert_async().await;
    }
}
