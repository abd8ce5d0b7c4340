use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use url::Url;

use super::command::Command;
use super::error::ApiError;
use super::options::RequestHook;
use super::params::Params;
use super::response::ResponseDecoder;
use super::signer::{HmacSigner, RequestSigner};
use super::transport::{Transport, TransportConfig};

/// CloudStack API client
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    transport: Transport,
    config: ClientConfig,
}

#[derive(Clone)]
pub struct ClientConfig {
    /// Wait for async jobs to finish instead of returning the job id
    pub async_mode: bool,
    pub async_timeout: Duration,
    pub poll_interval: Duration,
    pub insecure: bool,
    /// Send mutating commands as GET as well
    pub http_get_only: bool,
    pub transport: TransportConfig,
    /// Applied to the list query of every lookup helper
    pub hooks: Vec<RequestHook>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            async_mode: true,
            async_timeout: Duration::from_secs(300),
            poll_interval: Duration::from_secs(2),
            insecure: false,
            http_get_only: false,
            transport: TransportConfig::default(),
            hooks: Vec::new(),
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("async_mode", &self.async_mode)
            .field("async_timeout", &self.async_timeout)
            .field("poll_interval", &self.poll_interval)
            .field("insecure", &self.insecure)
            .field("http_get_only", &self.http_get_only)
            .field("transport", &self.transport)
            .field("hooks", &self.hooks.len())
            .finish()
    }
}

impl ClientConfig {
    /// Defaults overridden by `CLOUDSTACK_ASYNC_TIMEOUT` (seconds),
    /// `CLOUDSTACK_INSECURE` and `CLOUDSTACK_HTTP_GET_ONLY`.
    pub fn from_env() -> Result<Self, ApiError> {
        let mut config = Self::default();

        if let Some(timeout) = env_var("CLOUDSTACK_ASYNC_TIMEOUT") {
            let secs = timeout.parse::<u64>().map_err(|e| {
                ApiError::InvalidConfig(format!("CLOUDSTACK_ASYNC_TIMEOUT={}: {}", timeout, e))
            })?;
            config.async_timeout = Duration::from_secs(secs);
        }
        if let Some(insecure) = env_var("CLOUDSTACK_INSECURE") {
            config.insecure = parse_bool("CLOUDSTACK_INSECURE", &insecure)?;
        }
        if let Some(get_only) = env_var("CLOUDSTACK_HTTP_GET_ONLY") {
            config.http_get_only = parse_bool("CLOUDSTACK_HTTP_GET_ONLY", &get_only)?;
        }

        Ok(config)
    }

    pub fn with_async(mut self, async_mode: bool) -> Self {
        self.async_mode = async_mode;
        self
    }

    pub fn with_async_timeout(mut self, timeout: Duration) -> Self {
        self.async_timeout = timeout;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_insecure(mut self, insecure: bool) -> Self {
        self.insecure = insecure;
        self
    }

    pub fn with_http_get_only(mut self, http_get_only: bool) -> Self {
        self.http_get_only = http_get_only;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.transport.request_timeout = timeout;
        self
    }

    pub fn with_hook(mut self, hook: RequestHook) -> Self {
        self.hooks.push(hook);
        self
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ApiError> {
    value
        .parse::<bool>()
        .map_err(|_| ApiError::InvalidConfig(format!("{}={}: expected true or false", name, value)))
}

impl Client {
    /// Create a client that waits for async jobs, with default configuration
    pub fn new(api_url: &str, api_key: &str, secret_key: &str) -> Result<Self, ApiError> {
        Self::with_config(api_url, api_key, secret_key, ClientConfig::default())
    }

    /// Create a client that returns async job ids without waiting
    pub fn new_sync(api_url: &str, api_key: &str, secret_key: &str) -> Result<Self, ApiError> {
        Self::with_config(
            api_url,
            api_key,
            secret_key,
            ClientConfig::default().with_async(false),
        )
    }

    pub fn with_config(
        api_url: &str,
        api_key: &str,
        secret_key: &str,
        config: ClientConfig,
    ) -> Result<Self, ApiError> {
        Self::with_signer(api_url, HmacSigner::new(api_key, secret_key), config)
    }

    /// Create a client with a custom request signer
    pub fn with_signer<S: RequestSigner + 'static>(
        api_url: &str,
        signer: S,
        config: ClientConfig,
    ) -> Result<Self, ApiError> {
        let trimmed = api_url.trim_end_matches('/');
        let base_url =
            Url::parse(trimmed).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", api_url, e)))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ApiError::InvalidUrl(format!(
                "{}: unsupported scheme {}",
                api_url,
                base_url.scheme()
            )));
        }

        let http_client = config.transport.build_client(config.insecure)?;
        let transport = Transport::new(
            http_client,
            base_url,
            Arc::new(signer),
            config.http_get_only,
        );

        Ok(Self {
            inner: Arc::new(ClientInner { transport, config }),
        })
    }

    /// Create a client from `CLOUDSTACK_API_URL`, `CLOUDSTACK_API_KEY`,
    /// `CLOUDSTACK_SECRET_KEY` and [`ClientConfig::from_env`].
    pub fn from_env() -> Result<Self, ApiError> {
        let require = |name: &str| {
            env_var(name).ok_or_else(|| ApiError::InvalidConfig(format!("{} is required", name)))
        };

        let api_url = require("CLOUDSTACK_API_URL")?;
        let api_key = require("CLOUDSTACK_API_KEY")?;
        let secret_key = require("CLOUDSTACK_SECRET_KEY")?;

        Self::with_config(&api_url, &api_key, &secret_key, ClientConfig::from_env()?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    pub fn base_url(&self) -> &Url {
        self.inner.transport.base_url()
    }

    pub fn is_async(&self) -> bool {
        self.inner.config.async_mode
    }

    /// Async job operations
    pub fn async_job(&self) -> crate::api::async_job::AsyncJobService<'_> {
        crate::api::async_job::AsyncJobService::new(self)
    }

    /// Account operations
    pub fn account(&self) -> crate::api::account::AccountService<'_> {
        crate::api::account::AccountService::new(self)
    }

    /// User operations
    pub fn user(&self) -> crate::api::user::UserService<'_> {
        crate::api::user::UserService::new(self)
    }

    /// Load balancer rule operations
    pub fn load_balancer(&self) -> crate::api::load_balancer::LoadBalancerService<'_> {
        crate::api::load_balancer::LoadBalancerService::new(self)
    }

    /// Kubernetes cluster operations
    pub fn kubernetes(&self) -> crate::api::kubernetes::KubernetesService<'_> {
        crate::api::kubernetes::KubernetesService::new(self)
    }

    /// LDAP operations
    pub fn ldap(&self) -> crate::api::ldap::LdapService<'_> {
        crate::api::ldap::LdapService::new(self)
    }

    /// Execute a command, waiting for its job when the client is in async mode
    pub async fn execute<C: Command>(&self, command: &C) -> Result<C::Response, ApiError> {
        self.execute_params::<C>(command.to_params(), None).await
    }

    /// Like [`Client::execute`], but the job wait ends early with
    /// [`ApiError::Cancelled`] once `cancel` fires.
    pub async fn execute_with_cancel<C: Command>(
        &self,
        command: &C,
        cancel: &CancellationToken,
    ) -> Result<C::Response, ApiError> {
        self.execute_params::<C>(command.to_params(), Some(cancel))
            .await
    }

    pub(crate) async fn execute_params<C: Command>(
        &self,
        params: Params,
        cancel: Option<&CancellationToken>,
    ) -> Result<C::Response, ApiError> {
        let payload = self.fetch_payload(C::NAME, params, C::MUTATING).await?;

        if !C::ASYNC {
            let payload = if C::UNWRAP_RAW {
                ResponseDecoder::unwrap_raw(payload)
            } else {
                payload
            };
            return ResponseDecoder::decode(C::NAME, payload);
        }

        if !self.inner.config.async_mode {
            return ResponseDecoder::decode(C::NAME, payload);
        }

        let Some(job_id) = job_id_of(&payload) else {
            return ResponseDecoder::decode(C::NAME, payload);
        };

        match self.poll_job(&job_id, self.inner.config.async_timeout, cancel).await? {
            JobOutcome::Succeeded(result) => {
                let result = if C::UNWRAP_RAW {
                    ResponseDecoder::unwrap_raw(result)
                } else {
                    result
                };
                ResponseDecoder::decode(C::NAME, ResponseDecoder::merge(payload, result))
            }
            JobOutcome::TimedOut => {
                tracing::warn!(command = C::NAME, job_id = %job_id, "Async job still pending at deadline");
                Err(ApiError::AsyncTimeout {
                    job_id,
                    partial: Box::new(payload),
                })
            }
        }
    }

    /// Send a command and return its payload with the envelope stripped
    pub(crate) async fn fetch_payload(
        &self,
        command: &str,
        params: Params,
        mutating: bool,
    ) -> Result<Value, ApiError> {
        let body = self.inner.transport.send(command, params, mutating).await?;
        ResponseDecoder::extract_payload(command, &body)
    }
}

/// How a poll loop ended, other than with an error
#[derive(Debug)]
pub(crate) enum JobOutcome {
    Succeeded(Value),
    TimedOut,
}

fn job_id_of(payload: &Value) -> Option<String> {
    payload
        .get("jobid")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn client_config_defaults() {
        let config = ClientConfig::default();
        assert!(config.async_mode);
        assert_eq!(config.async_timeout, Duration::from_secs(300));
        assert_eq!(config.poll_interval, Duration::from_secs(2));
        assert!(!config.insecure);
        assert!(!config.http_get_only);
        assert_eq!(config.transport.request_timeout, Duration::from_secs(30));
        assert!(config.hooks.is_empty());
    }

    #[test]
    fn client_rejects_invalid_url() {
        let result = Client::new("not a url", "key", "secret");
        assert!(matches!(result, Err(ApiError::InvalidUrl(_))));

        let result = Client::new("ftp://cloud.example.com/client/api", "key", "secret");
        assert!(matches!(result, Err(ApiError::InvalidUrl(_))));
    }

    #[test]
    fn client_strips_trailing_slash() {
        let client = Client::new("https://cloud.example.com/client/api/", "key", "secret").unwrap();
        assert_eq!(client.base_url().path(), "/client/api");
    }

    #[test]
    fn sync_client_does_not_wait() {
        let client = Client::new_sync("https://cloud.example.com/client/api", "key", "secret").unwrap();
        assert!(!client.is_async());
    }

    #[test]
    fn job_id_requires_non_empty_string() {
        assert_eq!(
            job_id_of(&serde_json::json!({"jobid": "j1"})),
            Some("j1".to_string())
        );
        assert_eq!(job_id_of(&serde_json::json!({"jobid": ""})), None);
        assert_eq!(job_id_of(&serde_json::json!({"id": "x"})), None);
    }

    fn clear_env() {
        for name in [
            "CLOUDSTACK_API_URL",
            "CLOUDSTACK_API_KEY",
            "CLOUDSTACK_SECRET_KEY",
            "CLOUDSTACK_ASYNC_TIMEOUT",
            "CLOUDSTACK_INSECURE",
            "CLOUDSTACK_HTTP_GET_ONLY",
        ] {
            std::env::remove_var(name);
        }
    }

    #[test]
    #[serial]
    fn config_from_env_overrides_defaults() {
        clear_env();
        std::env::set_var("CLOUDSTACK_ASYNC_TIMEOUT", "60");
        std::env::set_var("CLOUDSTACK_INSECURE", "true");
        std::env::set_var("CLOUDSTACK_HTTP_GET_ONLY", "true");

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.async_timeout, Duration::from_secs(60));
        assert!(config.insecure);
        assert!(config.http_get_only);
        assert!(config.async_mode);

        clear_env();
    }

    #[test]
    #[serial]
    fn config_from_env_rejects_bad_values() {
        clear_env();
        std::env::set_var("CLOUDSTACK_ASYNC_TIMEOUT", "soon");
        assert!(matches!(
            ClientConfig::from_env(),
            Err(ApiError::InvalidConfig(_))
        ));

        clear_env();
        std::env::set_var("CLOUDSTACK_INSECURE", "yes");
        assert!(matches!(
            ClientConfig::from_env(),
            Err(ApiError::InvalidConfig(_))
        ));

        clear_env();
    }

    #[test]
    #[serial]
    fn client_from_env_requires_credentials() {
        clear_env();
        std::env::set_var("CLOUDSTACK_API_URL", "https://cloud.example.com/client/api");
        std::env::set_var("CLOUDSTACK_API_KEY", "key");

        match Client::from_env() {
            Err(ApiError::InvalidConfig(message)) => {
                assert!(message.contains("CLOUDSTACK_SECRET_KEY"))
            }
            Err(other) => panic!("expected InvalidConfig, got {:?}", other),
            Ok(_) => panic!("expected InvalidConfig, got a client"),
        }

        std::env::set_var("CLOUDSTACK_SECRET_KEY", "secret");
        let client = Client::from_env().unwrap();
        assert_eq!(client.base_url().host_str(), Some("cloud.example.com"));

        clear_env();
    }
}
