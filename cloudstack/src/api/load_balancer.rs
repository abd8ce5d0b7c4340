//! Load balancer rule API implementation

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::command::Command;
use super::common::{bool_or_string, string_or_number, JobResponse, SuccessResponse};
use super::error::ApiError;
use super::lookup::{ListCommand, NamedEntity};
use super::options::RequestHook;
use super::params::Params;
use super::Client;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoadBalancerRule {
    pub account: String,
    pub algorithm: String,
    pub cidrlist: String,
    pub description: String,
    pub domain: String,
    pub domainid: String,
    #[serde(deserialize_with = "bool_or_string::deserialize")]
    pub fordisplay: bool,
    pub id: String,
    pub name: String,
    pub networkid: String,
    pub privateport: String,
    pub project: String,
    pub projectid: String,
    pub protocol: String,
    pub publicip: String,
    pub publicipid: String,
    pub publicport: String,
    pub state: String,
    pub tags: Vec<ResourceTag>,
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub zoneid: String,
    pub zonename: String,
}

impl NamedEntity for LoadBalancerRule {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ResourceTag {
    pub key: String,
    pub value: String,
    pub resourceid: String,
    pub resourcetype: String,
}

/// createLoadBalancerRule
#[derive(Debug, Clone, Default)]
pub struct CreateLoadBalancerRule {
    /// One of `source`, `roundrobin` or `leastconn`
    pub algorithm: String,
    pub name: String,
    pub privateport: u16,
    pub publicport: u16,
    pub account: Option<String>,
    pub cidrlist: Option<Vec<String>>,
    pub description: Option<String>,
    pub domainid: Option<String>,
    pub fordisplay: Option<bool>,
    pub networkid: Option<String>,
    pub openfirewall: Option<bool>,
    pub protocol: Option<String>,
    pub publicipid: Option<String>,
    pub zoneid: Option<String>,
}

impl CreateLoadBalancerRule {
    pub fn new(
        algorithm: impl Into<String>,
        name: impl Into<String>,
        privateport: u16,
        publicport: u16,
    ) -> Self {
        Self {
            algorithm: algorithm.into(),
            name: name.into(),
            privateport,
            publicport,
            ..Default::default()
        }
    }
}

impl Command for CreateLoadBalancerRule {
    const NAME: &'static str = "createLoadBalancerRule";
    const MUTATING: bool = true;
    const ASYNC: bool = true;
    const UNWRAP_RAW: bool = true;
    type Response = JobResponse<LoadBalancerRule>;

    fn to_params(&self) -> Params {
        Params::new()
            .add("algorithm", &self.algorithm)
            .add("name", &self.name)
            .add("privateport", self.privateport)
            .add("publicport", self.publicport)
            .add_optional("account", self.account.as_ref())
            .add_optional_list("cidrlist", self.cidrlist.as_deref())
            .add_optional("description", self.description.as_ref())
            .add_optional("domainid", self.domainid.as_ref())
            .add_optional("fordisplay", self.fordisplay)
            .add_optional("networkid", self.networkid.as_ref())
            .add_optional("openfirewall", self.openfirewall)
            .add_optional("protocol", self.protocol.as_ref())
            .add_optional("publicipid", self.publicipid.as_ref())
            .add_optional("zoneid", self.zoneid.as_ref())
    }
}

/// deleteLoadBalancerRule
#[derive(Debug, Clone, Default)]
pub struct DeleteLoadBalancerRule {
    pub id: String,
}

impl DeleteLoadBalancerRule {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Command for DeleteLoadBalancerRule {
    const NAME: &'static str = "deleteLoadBalancerRule";
    const MUTATING: bool = true;
    const ASYNC: bool = true;
    type Response = JobResponse<SuccessResponse>;

    fn to_params(&self) -> Params {
        Params::new().add("id", &self.id)
    }
}

/// updateLoadBalancerRule
#[derive(Debug, Clone, Default)]
pub struct UpdateLoadBalancerRule {
    pub id: String,
    pub algorithm: Option<String>,
    pub customid: Option<String>,
    pub description: Option<String>,
    pub fordisplay: Option<bool>,
    pub name: Option<String>,
    pub protocol: Option<String>,
}

impl UpdateLoadBalancerRule {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

impl Command for UpdateLoadBalancerRule {
    const NAME: &'static str = "updateLoadBalancerRule";
    const MUTATING: bool = true;
    const ASYNC: bool = true;
    const UNWRAP_RAW: bool = true;
    type Response = JobResponse<LoadBalancerRule>;

    fn to_params(&self) -> Params {
        Params::new()
            .add("id", &self.id)
            .add_optional("algorithm", self.algorithm.as_ref())
            .add_optional("customid", self.customid.as_ref())
            .add_optional("description", self.description.as_ref())
            .add_optional("fordisplay", self.fordisplay)
            .add_optional("name", self.name.as_ref())
            .add_optional("protocol", self.protocol.as_ref())
    }
}

/// assignToLoadBalancerRule
#[derive(Debug, Clone, Default)]
pub struct AssignToLoadBalancerRule {
    pub id: String,
    pub virtualmachineids: Option<Vec<String>>,
    /// Each map pairs `vmid` with the `vmip` to balance to
    pub vmidipmap: Option<Vec<HashMap<String, String>>>,
}

impl AssignToLoadBalancerRule {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

impl Command for AssignToLoadBalancerRule {
    const NAME: &'static str = "assignToLoadBalancerRule";
    const MUTATING: bool = true;
    const ASYNC: bool = true;
    type Response = JobResponse<SuccessResponse>;

    fn to_params(&self) -> Params {
        Params::new()
            .add("id", &self.id)
            .add_optional_list("virtualmachineids", self.virtualmachineids.as_deref())
            .add_optional_map_list("vmidipmap", self.vmidipmap.as_deref())
    }
}

/// removeFromLoadBalancerRule
#[derive(Debug, Clone, Default)]
pub struct RemoveFromLoadBalancerRule {
    pub id: String,
    pub virtualmachineids: Option<Vec<String>>,
    pub vmidipmap: Option<Vec<HashMap<String, String>>>,
}

impl RemoveFromLoadBalancerRule {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

impl Command for RemoveFromLoadBalancerRule {
    const NAME: &'static str = "removeFromLoadBalancerRule";
    const MUTATING: bool = true;
    const ASYNC: bool = true;
    type Response = JobResponse<SuccessResponse>;

    fn to_params(&self) -> Params {
        Params::new()
            .add("id", &self.id)
            .add_optional_list("virtualmachineids", self.virtualmachineids.as_deref())
            .add_optional_map_list("vmidipmap", self.vmidipmap.as_deref())
    }
}

/// listLoadBalancerRules
#[derive(Debug, Clone, Default)]
pub struct ListLoadBalancerRules {
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub fordisplay: Option<bool>,
    pub id: Option<String>,
    pub isrecursive: Option<bool>,
    pub keyword: Option<String>,
    pub listall: Option<bool>,
    pub name: Option<String>,
    pub networkid: Option<String>,
    pub page: Option<u32>,
    pub pagesize: Option<u32>,
    pub projectid: Option<String>,
    pub publicipid: Option<String>,
    pub virtualmachineid: Option<String>,
    pub zoneid: Option<String>,
}

impl Command for ListLoadBalancerRules {
    const NAME: &'static str = "listLoadBalancerRules";
    const MUTATING: bool = false;
    type Response = ListLoadBalancerRulesResponse;

    fn to_params(&self) -> Params {
        Params::new()
            .add_optional("account", self.account.as_ref())
            .add_optional("domainid", self.domainid.as_ref())
            .add_optional("fordisplay", self.fordisplay)
            .add_optional("id", self.id.as_ref())
            .add_optional("isrecursive", self.isrecursive)
            .add_optional("keyword", self.keyword.as_ref())
            .add_optional("listall", self.listall)
            .add_optional("name", self.name.as_ref())
            .add_optional("networkid", self.networkid.as_ref())
            .add_optional("page", self.page)
            .add_optional("pagesize", self.pagesize)
            .add_optional("projectid", self.projectid.as_ref())
            .add_optional("publicipid", self.publicipid.as_ref())
            .add_optional("virtualmachineid", self.virtualmachineid.as_ref())
            .add_optional("zoneid", self.zoneid.as_ref())
    }
}

impl ListCommand for ListLoadBalancerRules {
    type Item = LoadBalancerRule;
    const ENTITY: &'static str = "load balancer rule";

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

    fn into_items(response: ListLoadBalancerRulesResponse) -> (usize, Vec<LoadBalancerRule>) {
        (response.count, response.rules)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListLoadBalancerRulesResponse {
    pub count: usize,
    #[serde(rename = "loadbalancerrule")]
    pub rules: Vec<LoadBalancerRule>,
}

/// listLoadBalancerRuleInstances
#[derive(Debug, Clone, Default)]
pub struct ListLoadBalancerRuleInstances {
    pub id: String,
    pub applied: Option<bool>,
    pub keyword: Option<String>,
    pub lbvmips: Option<bool>,
    pub page: Option<u32>,
    pub pagesize: Option<u32>,
}

impl ListLoadBalancerRuleInstances {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

impl Command for ListLoadBalancerRuleInstances {
    const NAME: &'static str = "listLoadBalancerRuleInstances";
    const MUTATING: bool = false;
    type Response = ListLoadBalancerRuleInstancesResponse;

    fn to_params(&self) -> Params {
        Params::new()
            .add("id", &self.id)
            .add_optional("applied", self.applied)
            .add_optional("keyword", self.keyword.as_ref())
            .add_optional("lbvmips", self.lbvmips)
            .add_optional("page", self.page)
            .add_optional("pagesize", self.pagesize)
    }
}

/// Instances are listed under `loadbalancerruleinstance`, or under
/// `lbrulevmidip` when `lbvmips` is set.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListLoadBalancerRuleInstancesResponse {
    pub count: usize,
    #[serde(rename = "loadbalancerruleinstance")]
    pub instances: Vec<LoadBalancerRuleInstance>,
    #[serde(rename = "lbrulevmidip")]
    pub vm_ips: Vec<LoadBalancerRuleVmIp>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoadBalancerRuleInstance {
    pub account: String,
    pub displayname: String,
    pub domain: String,
    pub domainid: String,
    pub id: String,
    pub ipaddress: String,
    pub name: String,
    pub state: String,
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub zoneid: String,
    pub zonename: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoadBalancerRuleVmIp {
    pub lbvmipaddresses: Vec<String>,
    pub loadbalancerruleinstance: LoadBalancerRuleInstance,
}

/// Load balancer API
pub struct LoadBalancerService<'a> {
    client: &'a Client,
}

impl<'a> LoadBalancerService<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn create_load_balancer_rule(
        &self,
        params: &CreateLoadBalancerRule,
    ) -> Result<JobResponse<LoadBalancerRule>, ApiError> {
        self.client.execute(params).await
    }

    pub async fn delete_load_balancer_rule(
        &self,
        params: &DeleteLoadBalancerRule,
    ) -> Result<JobResponse<SuccessResponse>, ApiError> {
        self.client.execute(params).await
    }

    pub async fn update_load_balancer_rule(
        &self,
        params: &UpdateLoadBalancerRule,
    ) -> Result<JobResponse<LoadBalancerRule>, ApiError> {
        self.client.execute(params).await
    }

    pub async fn assign_to_load_balancer_rule(
        &self,
        params: &AssignToLoadBalancerRule,
    ) -> Result<JobResponse<SuccessResponse>, ApiError> {
        self.client.execute(params).await
    }

    pub async fn remove_from_load_balancer_rule(
        &self,
        params: &RemoveFromLoadBalancerRule,
    ) -> Result<JobResponse<SuccessResponse>, ApiError> {
        self.client.execute(params).await
    }

    pub async fn list_load_balancer_rules(
        &self,
        params: &ListLoadBalancerRules,
    ) -> Result<ListLoadBalancerRulesResponse, ApiError> {
        self.client.execute(params).await
    }

    pub async fn list_load_balancer_rule_instances(
        &self,
        params: &ListLoadBalancerRuleInstances,
    ) -> Result<ListLoadBalancerRuleInstancesResponse, ApiError> {
        self.client.execute(params).await
    }

    pub async fn get_load_balancer_rule_id(
        &self,
        name: &str,
        opts: &[RequestHook],
    ) -> Result<String, ApiError> {
        self.client.lookup_id::<ListLoadBalancerRules>(name, opts).await
    }

    pub async fn get_load_balancer_rule_by_name(
        &self,
        name: &str,
        opts: &[RequestHook],
    ) -> Result<LoadBalancerRule, ApiError> {
        self.client
            .lookup_by_name::<ListLoadBalancerRules>(name, opts)
            .await
    }

    pub async fn get_load_balancer_rule_by_id(
        &self,
        id: &str,
        opts: &[RequestHook],
    ) -> Result<LoadBalancerRule, ApiError> {
        self.client
            .lookup_by_id::<ListLoadBalancerRules>(id, opts)
            .await
    }
}

#[cfg(test)]
#[path = "./load_balancer_test.rs"]
mod load_balancer_test;
