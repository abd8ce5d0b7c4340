//! Async job API and the poll loop that waits for job completion

use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tokio_util::sync::CancellationToken;

use super::client::JobOutcome;
use super::command::Command;
use super::common::{bool_or_string, string_or_number};
use super::error::ApiError;
use super::params::Params;
use super::response::ResponseDecoder;
use super::Client;

/// State of a job as reported by `jobstatus`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Pending,
    Succeeded,
    Failed,
}

impl JobStatus {
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => Self::Succeeded,
            2 => Self::Failed,
            _ => Self::Pending,
        }
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// queryAsyncJobResult
#[derive(Debug, Clone, Default)]
pub struct QueryAsyncJobResult {
    pub jobid: String,
}

impl QueryAsyncJobResult {
    pub fn new(jobid: impl Into<String>) -> Self {
        Self {
            jobid: jobid.into(),
        }
    }
}

impl Command for QueryAsyncJobResult {
    const NAME: &'static str = "queryAsyncJobResult";
    const MUTATING: bool = false;
    type Response = AsyncJobResult;

    fn to_params(&self) -> Params {
        Params::new().add("jobid", &self.jobid)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AsyncJobResult {
    pub accountid: String,
    pub cmd: String,
    pub completed: String,
    pub created: String,
    pub jobid: String,
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub jobinstanceid: String,
    pub jobinstancetype: String,
    pub jobprocstatus: i32,
    pub jobresult: Value,
    pub jobresultcode: i32,
    pub jobresulttype: String,
    pub jobstatus: i32,
    pub userid: String,
}

impl AsyncJobResult {
    pub fn status(&self) -> JobStatus {
        JobStatus::from_code(self.jobstatus)
    }

    /// Error code and text of a failed job
    pub fn failure(&self) -> (i32, String) {
        #[derive(Default, Deserialize)]
        #[serde(default)]
        struct JobError {
            errorcode: i32,
            errortext: String,
        }

        let error: JobError = serde_json::from_value(self.jobresult.clone()).unwrap_or_default();
        let code = if error.errorcode != 0 {
            error.errorcode
        } else {
            self.jobresultcode
        };

        let message = if !error.errortext.is_empty() {
            error.errortext
        } else {
            match &self.jobresult {
                Value::String(text) => text.clone(),
                Value::Null => "Undefined error".to_string(),
                other => format!("Undefined error: {}", other),
            }
        };

        (code, message)
    }
}

/// listAsyncJobs
#[derive(Debug, Clone, Default)]
pub struct ListAsyncJobs {
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub isrecursive: Option<bool>,
    pub keyword: Option<String>,
    pub listall: Option<bool>,
    pub managementserverid: Option<String>,
    pub page: Option<u32>,
    pub pagesize: Option<u32>,
    pub projectid: Option<String>,
    pub startdate: Option<String>,
}

impl Command for ListAsyncJobs {
    const NAME: &'static str = "listAsyncJobs";
    const MUTATING: bool = false;
    type Response = ListAsyncJobsResponse;

    fn to_params(&self) -> Params {
        Params::new()
            .add_optional("account", self.account.as_ref())
            .add_optional("domainid", self.domainid.as_ref())
            .add_optional("isrecursive", self.isrecursive)
            .add_optional("keyword", self.keyword.as_ref())
            .add_optional("listall", self.listall)
            .add_optional("managementserverid", self.managementserverid.as_ref())
            .add_optional("page", self.page)
            .add_optional("pagesize", self.pagesize)
            .add_optional("projectid", self.projectid.as_ref())
            .add_optional("startdate", self.startdate.as_ref())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListAsyncJobsResponse {
    pub count: usize,
    #[serde(rename = "asyncjobs")]
    pub async_jobs: Vec<AsyncJob>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AsyncJob {
    pub account: String,
    pub accountid: String,
    pub cmd: String,
    pub completed: String,
    pub created: String,
    pub domainid: String,
    pub domainpath: String,
    pub jobid: String,
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub jobinstanceid: String,
    pub jobinstancetype: String,
    pub jobprocstatus: i32,
    pub jobresult: Value,
    pub jobresultcode: i32,
    pub jobresulttype: String,
    pub jobstatus: i32,
    pub managementserverid: String,
    #[serde(deserialize_with = "bool_or_string::deserialize")]
    pub removed: bool,
    pub user: String,
    pub userid: String,
}

impl Client {
    /// Poll `queryAsyncJobResult` until the job is terminal or `timeout`
    /// elapses. The job is queried at least once.
    pub(crate) async fn poll_job(
        &self,
        job_id: &str,
        timeout: Duration,
        cancel: Option<&CancellationToken>,
    ) -> Result<JobOutcome, ApiError> {
        let deadline = Instant::now() + timeout;
        let interval = self.config().poll_interval;
        let query = QueryAsyncJobResult::new(job_id);

        loop {
            let payload = self
                .fetch_payload(
                    QueryAsyncJobResult::NAME,
                    query.to_params(),
                    QueryAsyncJobResult::MUTATING,
                )
                .await?;
            let result: AsyncJobResult =
                ResponseDecoder::decode(QueryAsyncJobResult::NAME, payload)?;
            tracing::debug!(job_id, status = result.jobstatus, "Polled async job");

            match result.status() {
                JobStatus::Succeeded => return Ok(JobOutcome::Succeeded(result.jobresult)),
                JobStatus::Failed => {
                    let (error_code, message) = result.failure();
                    tracing::error!(job_id, error_code, "Async job failed: {}", message);
                    return Err(ApiError::AsyncJobFailed {
                        job_id: job_id.to_string(),
                        error_code,
                        message,
                    });
                }
                JobStatus::Pending => {}
            }

            let now = Instant::now();
            if now >= deadline {
                return Ok(JobOutcome::TimedOut);
            }
            let pause = interval.min(deadline - now);

            match cancel {
                Some(token) => {
                    tokio::select! {
                        _ = token.cancelled() => {
                            return Err(ApiError::Cancelled {
                                job_id: job_id.to_string(),
                            });
                        }
                        _ = sleep(pause) => {}
                    }
                }
                None => sleep(pause).await,
            }
        }
    }

    /// Wait for a job and return its raw `jobresult`.
    ///
    /// Use this to keep polling a job whose wait ended in
    /// [`ApiError::AsyncTimeout`]. A timeout here carries a null partial
    /// response.
    pub async fn get_async_job_result(
        &self,
        job_id: &str,
        timeout: Duration,
    ) -> Result<Value, ApiError> {
        match self.poll_job(job_id, timeout, None).await? {
            JobOutcome::Succeeded(result) => Ok(result),
            JobOutcome::TimedOut => Err(ApiError::AsyncTimeout {
                job_id: job_id.to_string(),
                partial: Box::new(Value::Null),
            }),
        }
    }
}

/// Async job API
pub struct AsyncJobService<'a> {
    client: &'a Client,
}

impl<'a> AsyncJobService<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Single poll of a job, no waiting
    pub async fn query_async_job_result(
        &self,
        params: &QueryAsyncJobResult,
    ) -> Result<AsyncJobResult, ApiError> {
        self.client.execute(params).await
    }

    pub async fn list_async_jobs(
        &self,
        params: &ListAsyncJobs,
    ) -> Result<ListAsyncJobsResponse, ApiError> {
        self.client.execute(params).await
    }

    /// Wait for a job using the client's configured timeout
    pub async fn wait_for_job(&self, job_id: &str) -> Result<Value, ApiError> {
        self.client
            .get_async_job_result(job_id, self.client.config().async_timeout)
            .await
    }
}

#[cfg(test)]
#[path = "./async_job_test.rs"]
mod async_job_test;
