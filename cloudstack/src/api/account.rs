//! Account API implementation

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::command::Command;
use super::common::{bool_or_string, JobResponse, SuccessResponse};
use super::error::ApiError;
use super::lookup::{ListCommand, NamedEntity};
use super::options::RequestHook;
use super::params::{MapEncoding, Params};
use super::user::User;
use super::Client;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Account {
    pub accountdetails: HashMap<String, String>,
    pub accounttype: i32,
    pub created: String,
    pub defaultzoneid: String,
    pub domain: String,
    pub domainid: String,
    pub domainpath: String,
    pub id: String,
    pub ipavailable: String,
    pub iplimit: String,
    pub iptotal: i64,
    #[serde(deserialize_with = "bool_or_string::deserialize")]
    pub iscleanuprequired: bool,
    #[serde(deserialize_with = "bool_or_string::deserialize")]
    pub isdefault: bool,
    pub name: String,
    pub networkdomain: String,
    pub receivedbytes: i64,
    pub roleid: String,
    pub rolename: String,
    pub roletype: String,
    pub sentbytes: i64,
    pub state: String,
    pub user: Vec<User>,
    pub vmavailable: String,
    pub vmlimit: String,
    pub vmrunning: i32,
    pub vmstopped: i32,
    pub vmtotal: i64,
    pub volumetotal: i64,
}

impl NamedEntity for Account {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// createAccount
#[derive(Debug, Clone, Default)]
pub struct CreateAccount {
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    pub password: String,
    pub username: String,
    pub account: Option<String>,
    pub accountdetails: Option<HashMap<String, String>>,
    pub accountid: Option<String>,
    pub accounttype: Option<i32>,
    pub domainid: Option<String>,
    pub networkdomain: Option<String>,
    pub roleid: Option<String>,
    pub timezone: Option<String>,
    pub userid: Option<String>,
}

impl CreateAccount {
    pub fn new(
        email: impl Into<String>,
        firstname: impl Into<String>,
        lastname: impl Into<String>,
        password: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            firstname: firstname.into(),
            lastname: lastname.into(),
            password: password.into(),
            username: username.into(),
            ..Default::default()
        }
    }
}

impl Command for CreateAccount {
    const NAME: &'static str = "createAccount";
    const MUTATING: bool = true;
    const UNWRAP_RAW: bool = true;
    type Response = Account;

    fn to_params(&self) -> Params {
        Params::new()
            .add("email", &self.email)
            .add("firstname", &self.firstname)
            .add("lastname", &self.lastname)
            .add("password", &self.password)
            .add("username", &self.username)
            .add_optional("account", self.account.as_ref())
            .add_optional_map(
                "accountdetails",
                self.accountdetails.as_ref(),
                MapEncoding::KeyValue,
            )
            .add_optional("accountid", self.accountid.as_ref())
            .add_optional("accounttype", self.accounttype)
            .add_optional("domainid", self.domainid.as_ref())
            .add_optional("networkdomain", self.networkdomain.as_ref())
            .add_optional("roleid", self.roleid.as_ref())
            .add_optional("timezone", self.timezone.as_ref())
            .add_optional("userid", self.userid.as_ref())
    }
}

/// deleteAccount
#[derive(Debug, Clone, Default)]
pub struct DeleteAccount {
    pub id: String,
}

impl DeleteAccount {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Command for DeleteAccount {
    const NAME: &'static str = "deleteAccount";
    const MUTATING: bool = true;
    const ASYNC: bool = true;
    type Response = JobResponse<SuccessResponse>;

    fn to_params(&self) -> Params {
        Params::new().add("id", &self.id)
    }
}

/// disableAccount
#[derive(Debug, Clone, Default)]
pub struct DisableAccount {
    /// Lock the account instead of disabling it
    pub lock: bool,
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub id: Option<String>,
}

impl DisableAccount {
    pub fn new(lock: bool) -> Self {
        Self {
            lock,
            ..Default::default()
        }
    }
}

impl Command for DisableAccount {
    const NAME: &'static str = "disableAccount";
    const MUTATING: bool = true;
    const ASYNC: bool = true;
    const UNWRAP_RAW: bool = true;
    type Response = JobResponse<Account>;

    fn to_params(&self) -> Params {
        Params::new()
            .add("lock", self.lock)
            .add_optional("account", self.account.as_ref())
            .add_optional("domainid", self.domainid.as_ref())
            .add_optional("id", self.id.as_ref())
    }
}

/// enableAccount
#[derive(Debug, Clone, Default)]
pub struct EnableAccount {
    pub account: Option<String>,
    pub domainid: Option<String>,
    pub id: Option<String>,
}

impl EnableAccount {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Command for EnableAccount {
    const NAME: &'static str = "enableAccount";
    const MUTATING: bool = true;
    const UNWRAP_RAW: bool = true;
    type Response = Account;

    fn to_params(&self) -> Params {
        Params::new()
            .add_optional("account", self.account.as_ref())
            .add_optional("domainid", self.domainid.as_ref())
            .add_optional("id", self.id.as_ref())
    }
}

/// updateAccount
#[derive(Debug, Clone, Default)]
pub struct UpdateAccount {
    pub account: Option<String>,
    pub accountdetails: Option<HashMap<String, String>>,
    pub domainid: Option<String>,
    pub id: Option<String>,
    pub networkdomain: Option<String>,
    pub newname: Option<String>,
    pub roleid: Option<String>,
}

impl UpdateAccount {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Command for UpdateAccount {
    const NAME: &'static str = "updateAccount";
    const MUTATING: bool = true;
    const UNWRAP_RAW: bool = true;
    type Response = Account;

    fn to_params(&self) -> Params {
        Params::new()
            .add_optional("account", self.account.as_ref())
            .add_optional_map(
                "accountdetails",
                self.accountdetails.as_ref(),
                MapEncoding::Dotted,
            )
            .add_optional("domainid", self.domainid.as_ref())
            .add_optional("id", self.id.as_ref())
            .add_optional("networkdomain", self.networkdomain.as_ref())
            .add_optional("newname", self.newname.as_ref())
            .add_optional("roleid", self.roleid.as_ref())
    }
}

/// listAccounts
#[derive(Debug, Clone, Default)]
pub struct ListAccounts {
    pub accounttype: Option<i32>,
    pub details: Option<Vec<String>>,
    pub domainid: Option<String>,
    pub id: Option<String>,
    pub iscleanuprequired: Option<bool>,
    pub isrecursive: Option<bool>,
    pub keyword: Option<String>,
    pub listall: Option<bool>,
    pub name: Option<String>,
    pub page: Option<u32>,
    pub pagesize: Option<u32>,
    pub state: Option<String>,
}

impl Command for ListAccounts {
    const NAME: &'static str = "listAccounts";
    const MUTATING: bool = false;
    type Response = ListAccountsResponse;

    fn to_params(&self) -> Params {
        Params::new()
            .add_optional("accounttype", self.accounttype)
            .add_optional_list("details", self.details.as_deref())
            .add_optional("domainid", self.domainid.as_ref())
            .add_optional("id", self.id.as_ref())
            .add_optional("iscleanuprequired", self.iscleanuprequired)
            .add_optional("isrecursive", self.isrecursive)
            .add_optional("keyword", self.keyword.as_ref())
            .add_optional("listall", self.listall)
            .add_optional("name", self.name.as_ref())
            .add_optional("page", self.page)
            .add_optional("pagesize", self.pagesize)
            .add_optional("state", self.state.as_ref())
    }
}

impl ListCommand for ListAccounts {
    type Item = Account;
    const ENTITY: &'static str = "account";

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

    fn into_items(response: ListAccountsResponse) -> (usize, Vec<Account>) {
        (response.count, response.accounts)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListAccountsResponse {
    pub count: usize,
    #[serde(rename = "account")]
    pub accounts: Vec<Account>,
}

/// Account API
pub struct AccountService<'a> {
    client: &'a Client,
}

impl<'a> AccountService<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn create_account(&self, params: &CreateAccount) -> Result<Account, ApiError> {
        self.client.execute(params).await
    }

    pub async fn delete_account(
        &self,
        params: &DeleteAccount,
    ) -> Result<JobResponse<SuccessResponse>, ApiError> {
        self.client.execute(params).await
    }

    pub async fn disable_account(
        &self,
        params: &DisableAccount,
    ) -> Result<JobResponse<Account>, ApiError> {
        self.client.execute(params).await
    }

    pub async fn enable_account(&self, params: &EnableAccount) -> Result<Account, ApiError> {
        self.client.execute(params).await
    }

    pub async fn update_account(&self, params: &UpdateAccount) -> Result<Account, ApiError> {
        self.client.execute(params).await
    }

    pub async fn list_accounts(
        &self,
        params: &ListAccounts,
    ) -> Result<ListAccountsResponse, ApiError> {
        self.client.execute(params).await
    }

    pub async fn get_account_id(&self, name: &str, opts: &[RequestHook]) -> Result<String, ApiError> {
        self.client.lookup_id::<ListAccounts>(name, opts).await
    }

    pub async fn get_account_by_name(
        &self,
        name: &str,
        opts: &[RequestHook],
    ) -> Result<Account, ApiError> {
        self.client.lookup_by_name::<ListAccounts>(name, opts).await
    }

    pub async fn get_account_by_id(
        &self,
        id: &str,
        opts: &[RequestHook],
    ) -> Result<Account, ApiError> {
        self.client.lookup_by_id::<ListAccounts>(id, opts).await
    }
}

#[cfg(test)]
#[path = "./account_test.rs"]
mod account_test;
