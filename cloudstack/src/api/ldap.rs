//! LDAP API implementation

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::account::Account;
use super::command::Command;
use super::common::string_or_number;
use super::error::ApiError;
use super::params::{MapEncoding, Params};
use super::Client;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LdapConfiguration {
    pub domainid: String,
    pub hostname: String,
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub port: String,
}

/// addLdapConfiguration
#[derive(Debug, Clone, Default)]
pub struct AddLdapConfiguration {
    pub hostname: String,
    pub port: u16,
    pub domainid: Option<String>,
}

impl AddLdapConfiguration {
    pub fn new(hostname: impl Into<String>, port: u16) -> Self {
        Self {
            hostname: hostname.into(),
            port,
            ..Default::default()
        }
    }
}

impl Command for AddLdapConfiguration {
    const NAME: &'static str = "addLdapConfiguration";
    const MUTATING: bool = true;
    const UNWRAP_RAW: bool = true;
    type Response = LdapConfiguration;

    fn to_params(&self) -> Params {
        Params::new()
            .add("hostname", &self.hostname)
            .add("port", self.port)
            .add_optional("domainid", self.domainid.as_ref())
    }
}

/// deleteLdapConfiguration
#[derive(Debug, Clone, Default)]
pub struct DeleteLdapConfiguration {
    pub hostname: String,
    pub domainid: Option<String>,
    pub port: Option<u16>,
}

impl DeleteLdapConfiguration {
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            ..Default::default()
        }
    }
}

impl Command for DeleteLdapConfiguration {
    const NAME: &'static str = "deleteLdapConfiguration";
    const MUTATING: bool = true;
    const UNWRAP_RAW: bool = true;
    type Response = LdapConfiguration;

    fn to_params(&self) -> Params {
        Params::new()
            .add("hostname", &self.hostname)
            .add_optional("domainid", self.domainid.as_ref())
            .add_optional("port", self.port)
    }
}

/// listLdapConfigurations
#[derive(Debug, Clone, Default)]
pub struct ListLdapConfigurations {
    pub domainid: Option<String>,
    pub hostname: Option<String>,
    pub keyword: Option<String>,
    pub listall: Option<bool>,
    pub page: Option<u32>,
    pub pagesize: Option<u32>,
    pub port: Option<u16>,
}

impl Command for ListLdapConfigurations {
    const NAME: &'static str = "listLdapConfigurations";
    const MUTATING: bool = false;
    type Response = ListLdapConfigurationsResponse;

    fn to_params(&self) -> Params {
        Params::new()
            .add_optional("domainid", self.domainid.as_ref())
            .add_optional("hostname", self.hostname.as_ref())
            .add_optional("keyword", self.keyword.as_ref())
            .add_optional("listall", self.listall)
            .add_optional("page", self.page)
            .add_optional("pagesize", self.pagesize)
            .add_optional("port", self.port)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListLdapConfigurationsResponse {
    pub count: usize,
    #[serde(rename = "LdapConfiguration", alias = "ldapconfiguration")]
    pub configurations: Vec<LdapConfiguration>,
}

/// ldapCreateAccount, creates an account from an LDAP user
#[derive(Debug, Clone, Default)]
pub struct LdapCreateAccount {
    pub username: String,
    pub account: Option<String>,
    pub accountid: Option<String>,
    pub accounttype: Option<i32>,
    pub details: Option<HashMap<String, String>>,
    pub domainid: Option<String>,
    pub networkdomain: Option<String>,
    pub roleid: Option<String>,
    pub timezone: Option<String>,
    pub userid: Option<String>,
}

impl LdapCreateAccount {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Default::default()
        }
    }
}

impl Command for LdapCreateAccount {
    const NAME: &'static str = "ldapCreateAccount";
    const MUTATING: bool = true;
    const UNWRAP_RAW: bool = true;
    type Response = Account;

    fn to_params(&self) -> Params {
        Params::new()
            .add("username", &self.username)
            .add_optional("account", self.account.as_ref())
            .add_optional("accountid", self.accountid.as_ref())
            .add_optional("accounttype", self.accounttype)
            .add_optional_map("details", self.details.as_ref(), MapEncoding::KeyValue)
            .add_optional("domainid", self.domainid.as_ref())
            .add_optional("networkdomain", self.networkdomain.as_ref())
            .add_optional("roleid", self.roleid.as_ref())
            .add_optional("timezone", self.timezone.as_ref())
            .add_optional("userid", self.userid.as_ref())
    }
}

/// importLdapUsers
#[derive(Debug, Clone, Default)]
pub struct ImportLdapUsers {
    pub account: Option<String>,
    pub accounttype: Option<i32>,
    pub details: Option<HashMap<String, String>>,
    pub domainid: Option<String>,
    pub group: Option<String>,
    pub keyword: Option<String>,
    pub page: Option<u32>,
    pub pagesize: Option<u32>,
    pub roleid: Option<String>,
    pub timezone: Option<String>,
}

impl Command for ImportLdapUsers {
    const NAME: &'static str = "importLdapUsers";
    const MUTATING: bool = true;
    type Response = ImportLdapUsersResponse;

    fn to_params(&self) -> Params {
        Params::new()
            .add_optional("account", self.account.as_ref())
            .add_optional("accounttype", self.accounttype)
            .add_optional_map("details", self.details.as_ref(), MapEncoding::KeyValue)
            .add_optional("domainid", self.domainid.as_ref())
            .add_optional("group", self.group.as_ref())
            .add_optional("keyword", self.keyword.as_ref())
            .add_optional("page", self.page)
            .add_optional("pagesize", self.pagesize)
            .add_optional("roleid", self.roleid.as_ref())
            .add_optional("timezone", self.timezone.as_ref())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ImportLdapUsersResponse {
    pub count: usize,
    #[serde(rename = "LdapUser", alias = "ldapuser")]
    pub users: Vec<LdapUser>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LdapUser {
    pub conflictingusersource: String,
    pub domain: String,
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    pub principal: String,
    pub username: String,
}

/// linkDomainToLdap
#[derive(Debug, Clone, Default)]
pub struct LinkDomainToLdap {
    pub accounttype: i32,
    pub domainid: String,
    /// Either `GROUP` or `OU`
    pub r#type: String,
    pub admin: Option<String>,
    pub ldapdomain: Option<String>,
    pub name: Option<String>,
}

impl LinkDomainToLdap {
    pub fn new(accounttype: i32, domainid: impl Into<String>, r#type: impl Into<String>) -> Self {
        Self {
            accounttype,
            domainid: domainid.into(),
            r#type: r#type.into(),
            ..Default::default()
        }
    }
}

impl Command for LinkDomainToLdap {
    const NAME: &'static str = "linkDomainToLdap";
    const MUTATING: bool = true;
    const UNWRAP_RAW: bool = true;
    type Response = LinkDomainToLdapResponse;

    fn to_params(&self) -> Params {
        Params::new()
            .add("accounttype", self.accounttype)
            .add("domainid", &self.domainid)
            .add("type", &self.r#type)
            .add_optional("admin", self.admin.as_ref())
            .add_optional("ldapdomain", self.ldapdomain.as_ref())
            .add_optional("name", self.name.as_ref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LinkDomainToLdapResponse {
    pub accountid: String,
    pub accounttype: i32,
    pub domainid: String,
    pub ldapdomain: String,
    pub name: String,
    pub r#type: String,
}

/// listLdapUsers
#[derive(Debug, Clone, Default)]
pub struct ListLdapUsers {
    pub domainid: Option<String>,
    pub keyword: Option<String>,
    pub listtype: Option<String>,
    pub page: Option<u32>,
    pub pagesize: Option<u32>,
    pub userfilter: Option<String>,
}

impl Command for ListLdapUsers {
    const NAME: &'static str = "listLdapUsers";
    const MUTATING: bool = false;
    type Response = ListLdapUsersResponse;

    fn to_params(&self) -> Params {
        Params::new()
            .add_optional("domainid", self.domainid.as_ref())
            .add_optional("keyword", self.keyword.as_ref())
            .add_optional("listtype", self.listtype.as_ref())
            .add_optional("page", self.page)
            .add_optional("pagesize", self.pagesize)
            .add_optional("userfilter", self.userfilter.as_ref())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListLdapUsersResponse {
    pub count: usize,
    #[serde(rename = "LdapUser", alias = "ldapuser")]
    pub users: Vec<LdapUser>,
}

/// LDAP API
pub struct LdapService<'a> {
    client: &'a Client,
}

impl<'a> LdapService<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn add_ldap_configuration(
        &self,
        params: &AddLdapConfiguration,
    ) -> Result<LdapConfiguration, ApiError> {
        self.client.execute(params).await
    }

    pub async fn delete_ldap_configuration(
        &self,
        params: &DeleteLdapConfiguration,
    ) -> Result<LdapConfiguration, ApiError> {
        self.client.execute(params).await
    }

    pub async fn list_ldap_configurations(
        &self,
        params: &ListLdapConfigurations,
    ) -> Result<ListLdapConfigurationsResponse, ApiError> {
        self.client.execute(params).await
    }

    pub async fn ldap_create_account(
        &self,
        params: &LdapCreateAccount,
    ) -> Result<Account, ApiError> {
        self.client.execute(params).await
    }

    pub async fn import_ldap_users(
        &self,
        params: &ImportLdapUsers,
    ) -> Result<ImportLdapUsersResponse, ApiError> {
        self.client.execute(params).await
    }

    pub async fn link_domain_to_ldap(
        &self,
        params: &LinkDomainToLdap,
    ) -> Result<LinkDomainToLdapResponse, ApiError> {
        self.client.execute(params).await
    }

    pub async fn list_ldap_users(
        &self,
        params: &ListLdapUsers,
    ) -> Result<ListLdapUsersResponse, ApiError> {
        self.client.execute(params).await
    }
}

#[cfg(test)]
#[path = "./ldap_test.rs"]
mod ldap_test;
