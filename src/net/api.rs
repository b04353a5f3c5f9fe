//! Typed REST client for the evaluation backend.
//!
//! Every endpoint the UI touches is one method here. Paths are built by small
//! free functions so they can be checked without a transport, and responses
//! are decoded by [`decode`] / [`expect_success`] so status classification is
//! identical everywhere.
//!
//! ERROR HANDLING
//! ==============
//! Methods return `Result<_, ApiError>`; callers decide whether a failure is a
//! toast, an inline error, or a logout.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::transport::{ApiRequest, ApiResponse, BrowserTransport, Method, Transport};
use super::types::{
    CreatedTest, CurrentUser, NewTest, RegisterRequest, Role, RoleChangeRequest, Test, TokenResponse, UserSummary,
};
use crate::config::ClientConfig;

fn user_role_path(user_id: &str) -> String {
    format!("/users/{user_id}/role")
}

fn test_path(test_id: &str) -> String {
    format!("/tests/{test_id}")
}

fn publish_path(test_id: &str) -> String {
    format!("/tests/{test_id}/publish")
}

fn token_form(username: &str, password: &str) -> Vec<(String, String)> {
    vec![
        ("username".to_owned(), username.to_owned()),
        ("password".to_owned(), password.to_owned()),
    ]
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode a 2xx JSON body, or classify the failure status.
///
/// # Errors
///
/// Returns the classified [`ApiError`] for non-2xx responses and
/// [`ApiError::Decode`] when the body does not match `T`.
pub fn decode<T: DeserializeOwned>(response: &ApiResponse) -> Result<T, ApiError> {
    expect_success(response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Accept any 2xx response, ignoring the body.
///
/// # Errors
///
/// Returns the classified [`ApiError`] for non-2xx responses.
pub fn expect_success(response: &ApiResponse) -> Result<(), ApiError> {
    if response.is_success() {
        Ok(())
    } else {
        Err(ApiError::from_status(response.status, &response.body))
    }
}

/// REST client bound to one base URL and one transport.
#[derive(Clone, Debug)]
pub struct ApiClient<T = BrowserTransport> {
    config: ClientConfig,
    transport: T,
}

impl ApiClient<BrowserTransport> {
    /// Client used by the running app.
    pub fn browser(config: &ClientConfig) -> Self {
        Self::new(config, BrowserTransport)
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: &ClientConfig, transport: T) -> Self {
        Self { config: config.clone(), transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }

    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.transport.send(request).await
    }

    /// `POST /register`.
    ///
    /// # Errors
    ///
    /// Fails with the backend's detail (e.g. duplicate username).
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        let req = ApiRequest::new(Method::Post, self.url("/register")).json(to_json(request)?);
        expect_success(&self.send(req).await?)
    }

    /// `POST /token` with form-encoded credentials; returns the access token.
    ///
    /// # Errors
    ///
    /// Fails on rejected credentials or an unusable token response.
    pub async fn issue_token(&self, username: &str, password: &str) -> Result<String, ApiError> {
        let req = ApiRequest::new(Method::Post, self.url("/token")).form(token_form(username, password));
        let body: TokenResponse = decode(&self.send(req).await?)?;
        if body.access_token.trim().is_empty() {
            return Err(ApiError::Decode("empty access_token".to_owned()));
        }
        Ok(body.access_token)
    }

    /// `GET /users/me`.
    ///
    /// # Errors
    ///
    /// `Unauthorized` when the token is rejected.
    pub async fn current_user(&self, token: &str) -> Result<CurrentUser, ApiError> {
        let req = ApiRequest::new(Method::Get, self.url("/users/me")).bearer(Some(token));
        decode(&self.send(req).await?)
    }

    /// `GET /users`.
    ///
    /// # Errors
    ///
    /// Fails when the caller may not list users.
    pub async fn list_users(&self, token: Option<&str>) -> Result<Vec<UserSummary>, ApiError> {
        let req = ApiRequest::new(Method::Get, self.url("/users")).bearer(token);
        decode(&self.send(req).await?)
    }

    /// `PUT /users/{id}/role`.
    ///
    /// # Errors
    ///
    /// Fails when the caller is not an admin or the user does not exist.
    pub async fn update_role(&self, token: Option<&str>, user_id: &str, role: Role) -> Result<UserSummary, ApiError> {
        let body = to_json(&RoleChangeRequest { new_role: role })?;
        let req = ApiRequest::new(Method::Put, self.url(&user_role_path(user_id)))
            .bearer(token)
            .json(body);
        decode(&self.send(req).await?)
    }

    /// `POST /tests/create`. The bearer token is attached when present.
    ///
    /// # Errors
    ///
    /// Fails with the backend's validation detail.
    pub async fn create_test(&self, token: Option<&str>, test: &NewTest) -> Result<CreatedTest, ApiError> {
        let req = ApiRequest::new(Method::Post, self.url("/tests/create"))
            .bearer(token)
            .json(to_json(test)?);
        decode(&self.send(req).await?)
    }

    /// `GET /tests`: every test visible to the caller.
    ///
    /// # Errors
    ///
    /// Fails when the caller may not list tests.
    pub async fn list_tests(&self, token: Option<&str>) -> Result<Vec<Test>, ApiError> {
        let req = ApiRequest::new(Method::Get, self.url("/tests")).bearer(token);
        decode(&self.send(req).await?)
    }

    /// `GET /tests/published` (public).
    ///
    /// # Errors
    ///
    /// Fails on transport or server errors.
    pub async fn published_tests(&self) -> Result<Vec<Test>, ApiError> {
        let req = ApiRequest::new(Method::Get, self.url("/tests/published"));
        decode(&self.send(req).await?)
    }

    /// `GET /tests/{id}` (public).
    ///
    /// # Errors
    ///
    /// `Validation { status: 404, .. }` for an unknown id.
    pub async fn fetch_test(&self, test_id: &str) -> Result<Test, ApiError> {
        let req = ApiRequest::new(Method::Get, self.url(&test_path(test_id)));
        decode(&self.send(req).await?)
    }

    /// `DELETE /tests/{id}`.
    ///
    /// # Errors
    ///
    /// Fails when the caller may not delete the test.
    pub async fn delete_test(&self, token: Option<&str>, test_id: &str) -> Result<(), ApiError> {
        let req = ApiRequest::new(Method::Delete, self.url(&test_path(test_id))).bearer(token);
        expect_success(&self.send(req).await?)
    }

    /// `POST /tests/{id}/publish`.
    ///
    /// Returns the updated test when the body decodes as one, `None` when the
    /// backend answered 2xx with some other payload.
    ///
    /// # Errors
    ///
    /// Fails on non-2xx responses.
    pub async fn publish_test(&self, token: Option<&str>, test_id: &str) -> Result<Option<Test>, ApiError> {
        let req = ApiRequest::new(Method::Post, self.url(&publish_path(test_id))).bearer(token);
        let resp = self.send(req).await?;
        expect_success(&resp)?;
        Ok(serde_json::from_str::<Test>(&resp.body).ok())
    }
}
