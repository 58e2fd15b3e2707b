// ============================================================================
// API CLIENT - HTTP ONLY (stateless)
// ============================================================================
// Thin wrapper over the package backend. No business rules here: the
// backend owns validation, persistence and status transitions.
// ============================================================================

use gloo_net::http::{Request, Response};

use crate::config::CONFIG;
use crate::error::ApiError;
use crate::models::{Package, PackageUpdateForm};

const LIST_FAILED: &str = "Failed to fetch packages";
const UPDATE_FAILED: &str = "Update failed";

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(&CONFIG.server_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn all_packages_url(&self) -> String {
        format!("{}/get-all-packages", self.base_url)
    }

    pub fn package_url(&self, package_id: &str) -> String {
        format!("{}/get-package/{}", self.base_url, package_id)
    }

    pub fn update_url(&self, package_id: &str) -> String {
        format!("{}/update-package/{}", self.base_url, package_id)
    }

    /// `GET /get-all-packages`
    pub async fn get_all_packages(&self) -> Result<Vec<Package>, ApiError> {
        log::info!("📦 Fetching all packages...");

        let response = Request::get(&self.all_packages_url()).send().await?;
        if !response.ok() {
            return Err(error_from_response(response, LIST_FAILED).await);
        }

        let packages = response.json::<Vec<Package>>().await?;
        log::info!("✅ {} packages loaded", packages.len());
        Ok(packages)
    }

    /// `GET /get-package/:id`
    pub async fn get_package(&self, package_id: &str) -> Result<Package, ApiError> {
        log::info!("📦 Fetching package {}", package_id);

        let response = Request::get(&self.package_url(package_id)).send().await?;
        if response.status() == 404 {
            log::warn!("⚠️ Package {} not found", package_id);
            return Err(ApiError::NotFound);
        }
        if !response.ok() {
            return Err(error_from_response(response, "Package not found").await);
        }

        Ok(response.json::<Package>().await?)
    }

    /// `PUT /update-package/:id` with every editable field
    pub async fn update_package(&self, package_id: &str, form: &PackageUpdateForm) -> Result<(), ApiError> {
        log::info!("📝 Updating package {}", package_id);

        let response = Request::put(&self.update_url(package_id))
            .json(form)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await?;

        if !response.ok() {
            return Err(error_from_response(response, UPDATE_FAILED).await);
        }

        log::info!("✅ Package {} updated", package_id);
        Ok(())
    }
}

async fn error_from_response(response: Response, fallback: &str) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = server_message(&body).unwrap_or_else(|| fallback.to_string());
    log::error!("❌ HTTP {}: {}", status, message);
    ApiError::Status { status, message }
}

/// `message` field of a JSON error body, if any
pub fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")?
        .as_str()
        .filter(|m| !m.trim().is_empty())
        .map(str::to_string)
}
