//! Kubernetes cluster API implementation

use serde::{Deserialize, Serialize};

use super::command::Command;
use super::common::{bool_or_string, string_or_number, JobResponse, SuccessResponse};
use super::error::ApiError;
use super::lookup::{ListCommand, NamedEntity};
use super::options::RequestHook;
use super::params::Params;
use super::Client;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct KubernetesCluster {
    pub account: String,
    pub associatednetworkname: String,
    #[serde(deserialize_with = "bool_or_string::deserialize")]
    pub autoscalingenabled: bool,
    pub consoleendpoint: String,
    pub controlnodes: i64,
    pub cpunumber: String,
    pub description: String,
    pub domain: String,
    pub domainid: String,
    pub endpoint: String,
    pub id: String,
    pub ipaddress: String,
    pub ipaddressid: String,
    pub keypair: String,
    pub kubernetesversionid: String,
    pub kubernetesversionname: String,
    pub maxsize: i64,
    pub memory: String,
    pub minsize: i64,
    pub name: String,
    pub networkid: String,
    pub project: String,
    pub projectid: String,
    pub serviceofferingid: String,
    pub serviceofferingname: String,
    pub size: i64,
    pub state: String,
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub templateid: String,
    pub virtualmachineids: Vec<String>,
    pub zoneid: String,
    pub zonename: String,
}

impl NamedEntity for KubernetesCluster {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// createKubernetesCluster
#[derive(Debug, Clone, Default)]
pub struct CreateKubernetesCluster {
    pub description: String,
    pub kubernetesversionid: String,
    pub name: String,
    pub serviceofferingid: String,
    pub size: i64,
    pub zoneid: String,
    pub account: Option<String>,
    pub controlnodes: Option<i64>,
    pub dockerregistrypassword: Option<String>,
    pub dockerregistryurl: Option<String>,
    pub dockerregistryusername: Option<String>,
    pub domainid: Option<String>,
    pub externalloadbalanceripaddress: Option<String>,
    pub keypair: Option<String>,
    pub networkid: Option<String>,
    pub noderootdisksize: Option<i64>,
    pub projectid: Option<String>,
}

impl CreateKubernetesCluster {
    pub fn new(
        description: impl Into<String>,
        kubernetesversionid: impl Into<String>,
        name: impl Into<String>,
        serviceofferingid: impl Into<String>,
        size: i64,
        zoneid: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            kubernetesversionid: kubernetesversionid.into(),
            name: name.into(),
            serviceofferingid: serviceofferingid.into(),
            size,
            zoneid: zoneid.into(),
            ..Default::default()
        }
    }
}

impl Command for CreateKubernetesCluster {
    const NAME: &'static str = "createKubernetesCluster";
    const MUTATING: bool = true;
    const ASYNC: bool = true;
    const UNWRAP_RAW: bool = true;
    type Response = JobResponse<KubernetesCluster>;

    fn to_params(&self) -> Params {
        Params::new()
            .add("description", &self.description)
            .add("kubernetesversionid", &self.kubernetesversionid)
            .add("name", &self.name)
            .add("serviceofferingid", &self.serviceofferingid)
            .add("size", self.size)
            .add("zoneid", &self.zoneid)
            .add_optional("account", self.account.as_ref())
            .add_optional("controlnodes", self.controlnodes)
            .add_optional("dockerregistrypassword", self.dockerregistrypassword.as_ref())
            .add_optional("dockerregistryurl", self.dockerregistryurl.as_ref())
            .add_optional("dockerregistryusername", self.dockerregistryusername.as_ref())
            .add_optional("domainid", self.domainid.as_ref())
            .add_optional(
                "externalloadbalanceripaddress",
                self.externalloadbalanceripaddress.as_ref(),
            )
            .add_optional("keypair", self.keypair.as_ref())
            .add_optional("networkid", self.networkid.as_ref())
            .add_optional("noderootdisksize", self.noderootdisksize)
            .add_optional("projectid", self.projectid.as_ref())
    }
}

/// deleteKubernetesCluster
#[derive(Debug, Clone, Default)]
pub struct DeleteKubernetesCluster {
    pub id: String,
    pub cleanup: Option<bool>,
    pub expunge: Option<bool>,
}

impl DeleteKubernetesCluster {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

impl Command for DeleteKubernetesCluster {
    const NAME: &'static str = "deleteKubernetesCluster";
    const MUTATING: bool = true;
    const ASYNC: bool = true;
    type Response = JobResponse<SuccessResponse>;

    fn to_params(&self) -> Params {
        Params::new()
            .add("id", &self.id)
            .add_optional("cleanup", self.cleanup)
            .add_optional("expunge", self.expunge)
    }
}

/// startKubernetesCluster
#[derive(Debug, Clone, Default)]
pub struct StartKubernetesCluster {
    pub id: String,
}

impl StartKubernetesCluster {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Command for StartKubernetesCluster {
    const NAME: &'static str = "startKubernetesCluster";
    const MUTATING: bool = true;
    const ASYNC: bool = true;
    const UNWRAP_RAW: bool = true;
    type Response = JobResponse<KubernetesCluster>;

    fn to_params(&self) -> Params {
        Params::new().add("id", &self.id)
    }
}

/// stopKubernetesCluster
#[derive(Debug, Clone, Default)]
pub struct StopKubernetesCluster {
    pub id: String,
}

impl StopKubernetesCluster {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Command for StopKubernetesCluster {
    const NAME: &'static str = "stopKubernetesCluster";
    const MUTATING: bool = true;
    const ASYNC: bool = true;
    type Response = JobResponse<SuccessResponse>;

    fn to_params(&self) -> Params {
        Params::new().add("id", &self.id)
    }
}

/// scaleKubernetesCluster
#[derive(Debug, Clone, Default)]
pub struct ScaleKubernetesCluster {
    pub id: String,
    pub autoscalingenabled: Option<bool>,
    pub maxsize: Option<i64>,
    pub minsize: Option<i64>,
    /// Nodes to remove when scaling down
    pub nodeids: Option<Vec<String>>,
    pub serviceofferingid: Option<String>,
    pub size: Option<i64>,
}

impl ScaleKubernetesCluster {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

impl Command for ScaleKubernetesCluster {
    const NAME: &'static str = "scaleKubernetesCluster";
    const MUTATING: bool = true;
    const ASYNC: bool = true;
    const UNWRAP_RAW: bool = true;
    type Response = JobResponse<KubernetesCluster>;

    fn to_params(&self) -> Params {
        Params::new()
            .add("id", &self.id)
            .add_optional("autoscalingenabled", self.autoscalingenabled)
            .add_optional("maxsize", self.maxsize)
            .add_optional("minsize", self.minsize)
            .add_optional_list("nodeids", self.nodeids.as_deref())
            .add_optional("serviceofferingid", self.serviceofferingid.as_ref())
            .add_optional("size", self.size)
    }
}

/// upgradeKubernetesCluster
#[derive(Debug, Clone, Default)]
pub struct UpgradeKubernetesCluster {
    pub id: String,
    pub kubernetesversionid: String,
}

impl UpgradeKubernetesCluster {
    pub fn new(id: impl Into<String>, kubernetesversionid: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kubernetesversionid: kubernetesversionid.into(),
        }
    }
}

impl Command for UpgradeKubernetesCluster {
    const NAME: &'static str = "upgradeKubernetesCluster";
    const MUTATING: bool = true;
    const ASYNC: bool = true;
    const UNWRAP_RAW: bool = true;
    type Response = JobResponse<KubernetesCluster>;

    fn to_params(&self) -> Params {
        Params::new()
            .add("id", &self.id)
            .add("kubernetesversionid", &self.kubernetesversionid)
    }
}

/// getKubernetesClusterConfig
#[derive(Debug, Clone, Default)]
pub struct GetKubernetesClusterConfig {
    pub id: Option<String>,
}

impl GetKubernetesClusterConfig {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: Some(id.into()) }
    }
}

impl Command for GetKubernetesClusterConfig {
    const NAME: &'static str = "getKubernetesClusterConfig";
    const MUTATING: bool = false;
    const UNWRAP_RAW: bool = true;
    type Response = KubernetesClusterConfig;

    fn to_params(&self) -> Params {
        Params::new().add_optional("id", self.id.as_ref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct KubernetesClusterConfig {
    /// Kubeconfig of the cluster
    pub configdata: String,
    pub id: String,
    pub name: String,
}

/// listKubernetesClusters
#[derive(Debug, Clone, Default)]
pub struct ListKubernetesClusters {
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub id: Option<String>,
    pub isrecursive: Option<bool>,
    pub keyword: Option<String>,
    pub listall: Option<bool>,
    pub name: Option<String>,
    pub page: Option<u32>,
    pub pagesize: Option<u32>,
    pub projectid: Option<String>,
    pub state: Option<String>,
}

impl Command for ListKubernetesClusters {
    const NAME: &'static str = "listKubernetesClusters";
    const MUTATING: bool = false;
    type Response = ListKubernetesClustersResponse;

    fn to_params(&self) -> Params {
        Params::new()
            .add_optional("account", self.account.as_ref())
            .add_optional("domainid", self.domainid.as_ref())
            .add_optional("id", self.id.as_ref())
            .add_optional("isrecursive", self.isrecursive)
            .add_optional("keyword", self.keyword.as_ref())
            .add_optional("listall", self.listall)
            .add_optional("name", self.name.as_ref())
            .add_optional("page", self.page)
            .add_optional("pagesize", self.pagesize)
            .add_optional("projectid", self.projectid.as_ref())
            .add_optional("state", self.state.as_ref())
    }
}

impl ListCommand for ListKubernetesClusters {
    type Item = KubernetesCluster;
    const ENTITY: &'static str = "kubernetes cluster";

    fn filter_by_name(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    fn filter_by_id(id: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            ..Default::default()
        }
    }

    fn into_items(response: ListKubernetesClustersResponse) -> (usize, Vec<KubernetesCluster>) {
        (response.count, response.clusters)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListKubernetesClustersResponse {
    pub count: usize,
    #[serde(rename = "kubernetescluster")]
    pub clusters: Vec<KubernetesCluster>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct KubernetesSupportedVersion {
    pub id: String,
    pub isoid: String,
    pub isoname: String,
    /// State of the version's ISO, e.g. `Ready`
    pub isostate: String,
    pub mincpunumber: i32,
    pub minimumkubernetesversionid: String,
    pub minmemory: i32,
    pub name: String,
    pub semanticversion: String,
    pub state: String,
    #[serde(deserialize_with = "bool_or_string::deserialize")]
    pub supportsautoscaling: bool,
    #[serde(deserialize_with = "bool_or_string::deserialize")]
    pub supportsha: bool,
    pub zoneid: String,
    pub zonename: String,
}

impl NamedEntity for KubernetesSupportedVersion {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// listKubernetesSupportedVersions
#[derive(Debug, Clone, Default)]
pub struct ListKubernetesSupportedVersions {
    pub id: Option<String>,
    pub keyword: Option<String>,
    pub minimumkubernetesversionid: Option<String>,
    pub minimumsemanticversion: Option<String>,
    pub page: Option<u32>,
    pub pagesize: Option<u32>,
    pub zoneid: Option<String>,
}

impl Command for ListKubernetesSupportedVersions {
    const NAME: &'static str = "listKubernetesSupportedVersions";
    const MUTATING: bool = false;
    type Response = ListKubernetesSupportedVersionsResponse;

    fn to_params(&self) -> Params {
        Params::new()
            .add_optional("id", self.id.as_ref())
            .add_optional("keyword", self.keyword.as_ref())
            .add_optional(
                "minimumkubernetesversionid",
                self.minimumkubernetesversionid.as_ref(),
            )
            .add_optional("minimumsemanticversion", self.minimumsemanticversion.as_ref())
            .add_optional("page", self.page)
            .add_optional("pagesize", self.pagesize)
            .add_optional("zoneid", self.zoneid.as_ref())
    }
}

impl ListCommand for ListKubernetesSupportedVersions {
    type Item = KubernetesSupportedVersion;
    const ENTITY: &'static str = "kubernetes supported version";

    /// Versions have no name filter, so the name goes in as a keyword
    fn filter_by_name(name: &str) -> Self {
        Self {
            keyword: Some(name.to_string()),
            ..Default::default()
        }
    }

    fn filter_by_id(id: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            ..Default::default()
        }
    }

    fn into_items(
        response: ListKubernetesSupportedVersionsResponse,
    ) -> (usize, Vec<KubernetesSupportedVersion>) {
        (response.count, response.versions)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListKubernetesSupportedVersionsResponse {
    pub count: usize,
    #[serde(rename = "kubernetessupportedversion")]
    pub versions: Vec<KubernetesSupportedVersion>,
}

/// Kubernetes API
pub struct KubernetesService<'a> {
    client: &'a Client,
}

impl<'a> KubernetesService<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn create_kubernetes_cluster(
        &self,
        params: &CreateKubernetesCluster,
    ) -> Result<JobResponse<KubernetesCluster>, ApiError> {
        self.client.execute(params).await
    }

    pub async fn delete_kubernetes_cluster(
        &self,
        params: &DeleteKubernetesCluster,
    ) -> Result<JobResponse<SuccessResponse>, ApiError> {
        self.client.execute(params).await
    }

    pub async fn start_kubernetes_cluster(
        &self,
        params: &StartKubernetesCluster,
    ) -> Result<JobResponse<KubernetesCluster>, ApiError> {
        self.client.execute(params).await
    }

    pub async fn stop_kubernetes_cluster(
        &self,
        params: &StopKubernetesCluster,
    ) -> Result<JobResponse<SuccessResponse>, ApiError> {
        self.client.execute(params).await
    }

    pub async fn scale_kubernetes_cluster(
        &self,
        params: &ScaleKubernetesCluster,
    ) -> Result<JobResponse<KubernetesCluster>, ApiError> {
        self.client.execute(params).await
    }

    pub async fn upgrade_kubernetes_cluster(
        &self,
        params: &UpgradeKubernetesCluster,
    ) -> Result<JobResponse<KubernetesCluster>, ApiError> {
        self.client.execute(params).await
    }

    pub async fn get_kubernetes_cluster_config(
        &self,
        params: &GetKubernetesClusterConfig,
    ) -> Result<KubernetesClusterConfig, ApiError> {
        self.client.execute(params).await
    }

    pub async fn list_kubernetes_clusters(
        &self,
        params: &ListKubernetesClusters,
    ) -> Result<ListKubernetesClustersResponse, ApiError> {
        self.client.execute(params).await
    }

    pub async fn list_kubernetes_supported_versions(
        &self,
        params: &ListKubernetesSupportedVersions,
    ) -> Result<ListKubernetesSupportedVersionsResponse, ApiError> {
        self.client.execute(params).await
    }

    pub async fn get_kubernetes_cluster_id(
        &self,
        name: &str,
        opts: &[RequestHook],
    ) -> Result<String, ApiError> {
        self.client
            .lookup_id::<ListKubernetesClusters>(name, opts)
            .await
    }

    pub async fn get_kubernetes_cluster_by_name(
        &self,
        name: &str,
        opts: &[RequestHook],
    ) -> Result<KubernetesCluster, ApiError> {
        self.client
            .lookup_by_name::<ListKubernetesClusters>(name, opts)
            .await
    }

    pub async fn get_kubernetes_cluster_by_id(
        &self,
        id: &str,
        opts: &[RequestHook],
    ) -> Result<KubernetesCluster, ApiError> {
        self.client
            .lookup_by_id::<ListKubernetesClusters>(id, opts)
            .await
    }

    /// Resolve a supported version by keyword
    pub async fn get_kubernetes_supported_version_id(
        &self,
        keyword: &str,
        opts: &[RequestHook],
    ) -> Result<String, ApiError> {
        self.client
            .lookup_id::<ListKubernetesSupportedVersions>(keyword, opts)
            .await
    }
}

#[cfg(test)]
#[path = "./kubernetes_test.rs"]
mod kubernetes_test;
