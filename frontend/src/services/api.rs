use gloo::net::http::{Request, RequestBuilder, Response};
use serde::Deserialize;
use shared::{
    CreateBookingRequest, CreateBookingResponse, LoginRequest, LoginResponse, Package,
    PackageUpsertRequest,
};

use crate::config::AppConfig;
use crate::context::auth::stored_token;

/// API client for the remote booking service. Every call is a fresh round
/// trip: no retries, no caching, no deduplication of concurrent requests.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a client pointing at the configured base URL.
    pub fn new() -> Self {
        Self {
            base_url: AppConfig::from_env().api_base_url,
        }
    }

    /// Create a client with a custom base URL.
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// List all tour packages.
    pub async fn list_packages(&self) -> Result<Vec<Package>, String> {
        let url = format!("{}/packages", self.base_url);
        log::debug!("GET {}", url);

        match with_auth(Request::get(&url)).send().await {
            Ok(response) => {
                if response.ok() {
                    response
                        .json::<Vec<Package>>()
                        .await
                        .map_err(|e| format!("Failed to parse packages: {}", e))
                } else {
                    Err(error_message(response).await)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Fetch a single package by id.
    pub async fn get_package(&self, id: &str) -> Result<Package, String> {
        let url = format!("{}/packages/{}", self.base_url, id);
        log::debug!("GET {}", url);

        match with_auth(Request::get(&url)).send().await {
            Ok(response) => {
                if response.ok() {
                    response
                        .json::<Package>()
                        .await
                        .map_err(|e| format!("Failed to parse package: {}", e))
                } else {
                    Err(error_message(response).await)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Submit a booking. Validation has already happened on the client;
    /// the server still gets the final say.
    pub async fn create_booking(
        &self,
        request: CreateBookingRequest,
    ) -> Result<CreateBookingResponse, String> {
        let url = format!("{}/bookings", self.base_url);
        log::debug!("POST {}", url);

        match with_auth(Request::post(&url))
            .json(&request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    response
                        .json::<CreateBookingResponse>()
                        .await
                        .map_err(|e| format!("Failed to parse response: {}", e))
                } else {
                    Err(error_message(response).await)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Exchange admin credentials for a session token. The one call that
    /// never attaches an Authorization header.
    pub async fn admin_login(&self, request: LoginRequest) -> Result<LoginResponse, String> {
        let url = format!("{}/admin/login", self.base_url);
        log::debug!("POST {}", url);

        match Request::post(&url)
            .json(&request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    response
                        .json::<LoginResponse>()
                        .await
                        .map_err(|e| format!("Failed to parse response: {}", e))
                } else {
                    Err(error_message(response).await)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Create a package (administrator only).
    pub async fn create_package(&self, request: &PackageUpsertRequest) -> Result<(), String> {
        let url = format!("{}/admin/packages", self.base_url);
        log::debug!("POST {}", url);

        match with_auth(Request::post(&url))
            .json(request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    Ok(())
                } else {
                    Err(error_message(response).await)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Update an existing package (administrator only).
    pub async fn update_package(
        &self,
        id: &str,
        request: &PackageUpsertRequest,
    ) -> Result<(), String> {
        let url = format!("{}/admin/packages/{}", self.base_url, id);
        log::debug!("PUT {}", url);

        match with_auth(Request::put(&url))
            .json(request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    Ok(())
                } else {
                    Err(error_message(response).await)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Delete a package (administrator only).
    pub async fn delete_package(&self, id: &str) -> Result<(), String> {
        let url = format!("{}/admin/packages/{}", self.base_url, id);
        log::debug!("DELETE {}", url);

        match with_auth(Request::delete(&url)).send().await {
            Ok(response) => {
                if response.ok() {
                    Ok(())
                } else {
                    Err(error_message(response).await)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Attach `Authorization: Bearer <token>` when a session token is stored,
/// leave the request untouched otherwise.
fn with_auth(request: RequestBuilder) -> RequestBuilder {
    match stored_token() {
        Some(token) => request.header("Authorization", &format!("Bearer {}", token)),
        None => request,
    }
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Prefer the server-provided `{"message": ...}`, then the raw body, then a
/// generic fallback carrying the status code.
async fn error_message(response: Response) -> String {
    let status = response.status();
    match response.text().await {
        Ok(body) => match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(error) => error.message,
            Err(_) if !body.trim().is_empty() => body,
            Err(_) => format!("Request failed with status {}", status),
        },
        Err(_) => format!("Request failed with status {}", status),
    }
}
