//! User API implementation

use serde::{Deserialize, Serialize};

use super::command::Command;
use super::common::{bool_or_string, JobResponse, SuccessResponse};
use super::error::ApiError;
use super::lookup::{ListCommand, NamedEntity};
use super::options::RequestHook;
use super::params::Params;
use super::Client;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct User {
    pub account: String,
    pub accountid: String,
    pub accounttype: i32,
    pub apikey: String,
    pub created: String,
    pub domain: String,
    pub domainid: String,
    pub email: String,
    pub firstname: String,
    pub id: String,
    #[serde(deserialize_with = "bool_or_string::deserialize")]
    pub iscallerchilddomain: bool,
    #[serde(deserialize_with = "bool_or_string::deserialize")]
    pub isdefault: bool,
    pub lastname: String,
    pub roleid: String,
    pub rolename: String,
    pub roletype: String,
    pub secretkey: String,
    pub state: String,
    pub timezone: String,
    pub username: String,
    pub usersource: String,
}

impl NamedEntity for User {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.username
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UserKeys {
    pub apikey: String,
    pub secretkey: String,
}

/// createUser
#[derive(Debug, Clone, Default)]
pub struct CreateUser {
    pub account: String,
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    pub password: String,
    pub username: String,
    pub domainid: Option<String>,
    pub timezone: Option<String>,
    pub userid: Option<String>,
}

impl CreateUser {
    pub fn new(
        account: impl Into<String>,
        email: impl Into<String>,
        firstname: impl Into<String>,
        lastname: impl Into<String>,
        password: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            account: account.into(),
            email: email.into(),
            firstname: firstname.into(),
            lastname: lastname.into(),
            password: password.into(),
            username: username.into(),
            ..Default::default()
        }
    }
}

impl Command for CreateUser {
    const NAME: &'static str = "createUser";
    const MUTATING: bool = true;
    const UNWRAP_RAW: bool = true;
    type Response = User;

    fn to_params(&self) -> Params {
        Params::new()
            .add("account", &self.account)
            .add("email", &self.email)
            .add("firstname", &self.firstname)
            .add("lastname", &self.lastname)
            .add("password", &self.password)
            .add("username", &self.username)
            .add_optional("domainid", self.domainid.as_ref())
            .add_optional("timezone", self.timezone.as_ref())
            .add_optional("userid", self.userid.as_ref())
    }
}

/// deleteUser
#[derive(Debug, Clone, Default)]
pub struct DeleteUser {
    pub id: String,
}

impl DeleteUser {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Command for DeleteUser {
    const NAME: &'static str = "deleteUser";
    const MUTATING: bool = true;
    type Response = SuccessResponse;

    fn to_params(&self) -> Params {
        Params::new().add("id", &self.id)
    }
}

/// disableUser
#[derive(Debug, Clone, Default)]
pub struct DisableUser {
    pub id: String,
}

impl DisableUser {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Command for DisableUser {
    const NAME: &'static str = "disableUser";
    const MUTATING: bool = true;
    const ASYNC: bool = true;
    const UNWRAP_RAW: bool = true;
    type Response = JobResponse<User>;

    fn to_params(&self) -> Params {
        Params::new().add("id", &self.id)
    }
}

/// enableUser
#[derive(Debug, Clone, Default)]
pub struct EnableUser {
    pub id: String,
}

impl EnableUser {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Command for EnableUser {
    const NAME: &'static str = "enableUser";
    const MUTATING: bool = true;
    const UNWRAP_RAW: bool = true;
    type Response = User;

    fn to_params(&self) -> Params {
        Params::new().add("id", &self.id)
    }
}

/// getUser, looks a user up by API key
#[derive(Debug, Clone, Default)]
pub struct GetUser {
    pub userapikey: String,
}

impl GetUser {
    pub fn new(userapikey: impl Into<String>) -> Self {
        Self {
            userapikey: userapikey.into(),
        }
    }
}

impl Command for GetUser {
    const NAME: &'static str = "getUser";
    const MUTATING: bool = false;
    const UNWRAP_RAW: bool = true;
    type Response = User;

    fn to_params(&self) -> Params {
        Params::new().add("userapikey", &self.userapikey)
    }
}

/// registerUserKeys
#[derive(Debug, Clone, Default)]
pub struct RegisterUserKeys {
    pub id: String,
}

impl RegisterUserKeys {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Command for RegisterUserKeys {
    const NAME: &'static str = "registerUserKeys";
    const MUTATING: bool = true;
    const UNWRAP_RAW: bool = true;
    type Response = UserKeys;

    fn to_params(&self) -> Params {
        Params::new().add("id", &self.id)
    }
}

/// updateUser
#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    pub id: String,
    pub currentpassword: Option<String>,
    pub email: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub password: Option<String>,
    pub timezone: Option<String>,
    pub userapikey: Option<String>,
    pub username: Option<String>,
    pub usersecretkey: Option<String>,
}

impl UpdateUser {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

impl Command for UpdateUser {
    const NAME: &'static str = "updateUser";
    const MUTATING: bool = true;
    const UNWRAP_RAW: bool = true;
    type Response = User;

    fn to_params(&self) -> Params {
        Params::new()
            .add("id", &self.id)
            .add_optional("currentpassword", self.currentpassword.as_ref())
            .add_optional("email", self.email.as_ref())
            .add_optional("firstname", self.firstname.as_ref())
            .add_optional("lastname", self.lastname.as_ref())
            .add_optional("password", self.password.as_ref())
            .add_optional("timezone", self.timezone.as_ref())
            .add_optional("userapikey", self.userapikey.as_ref())
            .add_optional("username", self.username.as_ref())
            .add_optional("usersecretkey", self.usersecretkey.as_ref())
    }
}

/// listUsers
#[derive(Debug, Clone, Default)]
pub struct ListUsers {
    pub account: Option<String>,
    pub accounttype: Option<i32>,
    pub domainid: Option<String>,
    pub id: Option<String>,
    pub isrecursive: Option<bool>,
    pub keyword: Option<String>,
    pub listall: Option<bool>,
    pub page: Option<u32>,
    pub pagesize: Option<u32>,
    pub state: Option<String>,
    pub username: Option<String>,
    pub usersource: Option<String>,
}

impl Command for ListUsers {
    const NAME: &'static str = "listUsers";
    const MUTATING: bool = false;
    type Response = ListUsersResponse;

    fn to_params(&self) -> Params {
        Params::new()
            .add_optional("account", self.account.as_ref())
            .add_optional("accounttype", self.accounttype)
            .add_optional("domainid", self.domainid.as_ref())
            .add_optional("id", self.id.as_ref())
            .add_optional("isrecursive", self.isrecursive)
            .add_optional("keyword", self.keyword.as_ref())
            .add_optional("listall", self.listall)
            .add_optional("page", self.page)
            .add_optional("pagesize", self.pagesize)
            .add_optional("state", self.state.as_ref())
            .add_optional("username", self.username.as_ref())
            .add_optional("usersource", self.usersource.as_ref())
    }
}

impl ListCommand for ListUsers {
    type Item = User;
    const ENTITY: &'static str = "user";

    fn filter_by_name(name: &str) -> Self {
        Self {
            username: Some(name.to_string()),
            ..Default::default()
        }
    }

    fn filter_by_id(id: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            ..Default::default()
        }
    }

    fn into_items(response: ListUsersResponse) -> (usize, Vec<User>) {
        (response.count, response.users)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListUsersResponse {
    pub count: usize,
    #[serde(rename = "user")]
    pub users: Vec<User>,
}

/// User API
pub struct UserService<'a> {
    client: &'a Client,
}

impl<'a> UserService<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn create_user(&self, params: &CreateUser) -> Result<User, ApiError> {
        self.client.execute(params).await
    }

    pub async fn delete_user(&self, params: &DeleteUser) -> Result<SuccessResponse, ApiError> {
        self.client.execute(params).await
    }

    pub async fn disable_user(&self, params: &DisableUser) -> Result<JobResponse<User>, ApiError> {
        self.client.execute(params).await
    }

    pub async fn enable_user(&self, params: &EnableUser) -> Result<User, ApiError> {
        self.client.execute(params).await
    }

    pub async fn get_user(&self, params: &GetUser) -> Result<User, ApiError> {
        self.client.execute(params).await
    }

    pub async fn register_user_keys(&self, params: &RegisterUserKeys) -> Result<UserKeys, ApiError> {
        self.client.execute(params).await
    }

    pub async fn update_user(&self, params: &UpdateUser) -> Result<User, ApiError> {
        self.client.execute(params).await
    }

    pub async fn list_users(&self, params: &ListUsers) -> Result<ListUsersResponse, ApiError> {
        self.client.execute(params).await
    }

    pub async fn get_user_by_id(&self, id: &str, opts: &[RequestHook]) -> Result<User, ApiError> {
        self.client.lookup_by_id::<ListUsers>(id, opts).await
    }
}

#[cfg(test)]
#[path = "./user_test.rs"]
mod user_test;
