// Copyright 2025 itscheems
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response, StatusCode};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::types::{DocumentUpload, SigningStatus};

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Error types for client operations
#[derive(Debug, Error)]
pub enum ClientError {
	#[error("Network error: {0}")]
	Network(String),
	#[error("Server error: {status}: {body}")]
	Server { status: StatusCode, body: String },
	#[error("Invalid response: {0}")]
	Deserialize(String),
	#[error("package has not been completed (status: {status})")]
	PackageIncomplete { status: String },
}

/// Client for the e-signature service REST API
///
/// Each method issues exactly one HTTP request against a fixed path under
/// the configured base URL and hands the response body back unmodified
/// (text for JSON endpoints, raw bytes for PDF/ZIP endpoints). The one
/// exception is [`Client::download_archive`], which checks the package's
/// signing status before fetching the archive.
///
/// The client holds immutable credentials; it is cheap to clone and safe
/// to share across tasks.
#[derive(Clone)]
pub struct Client {
	base_url: String,
	auth_header: HeaderValue,
	client: ReqwestClient,
}

impl Client {
	/// Create a new client with the given API key and base URL
	pub fn new(api_key: impl AsRef<str>, base_url: impl Into<String>) -> Self {
		Self::with_config(api_key, base_url, DEFAULT_TIMEOUT)
	}

	/// Create a new client with a custom request timeout
	pub fn with_config(
		api_key: impl AsRef<str>,
		base_url: impl Into<String>,
		timeout: Duration,
	) -> Self {
		let client = ReqwestClient::builder()
			.timeout(timeout)
			.build()
			.expect("Failed to create HTTP client");

		// The service expects the raw API key after the "Basic " marker;
		// it is not a base64-encoded user:password pair.
		let mut auth_header = HeaderValue::from_str(&format!("Basic {}", api_key.as_ref()))
			.expect("API key is not a valid header value");
		auth_header.set_sensitive(true);

		let base_url = base_url.into();
		Self {
			base_url: base_url.trim_end_matches('/').to_string(),
			auth_header,
			client,
		}
	}

	/// Create a new client from a [`ClientConfig`]
	pub fn from_config(config: &ClientConfig) -> Self {
		Self::with_config(
			&config.api_key,
			config.base_url.clone(),
			Duration::from_secs(config.timeout_secs),
		)
	}

	fn request(&self, method: Method, path: &str) -> RequestBuilder {
		let url = format!("{}{}", self.base_url, path);
		debug!(%method, %url, "dispatching request");
		self.client
			.request(method, url)
			.header(AUTHORIZATION, self.auth_header.clone())
	}

	/// Surface non-2xx responses as `ClientError::Server` instead of
	/// passing their bodies through as if the call had succeeded.
	async fn check(response: Response) -> Result<Response, ClientError> {
		let status = response.status();
		if status.is_success() {
			return Ok(response);
		}
		let body = response
			.text()
			.await
			.unwrap_or_else(|_| format!("HTTP {}", status));
		warn!(%status, "request rejected by server");
		Err(ClientError::Server { status, body })
	}

	async fn send(&self, method: Method, path: &str) -> Result<Response, ClientError> {
		let response = self
			.request(method, path)
			.send()
			.await
			.map_err(|e| ClientError::Network(format!("Request failed: {}", e)))?;
		Self::check(response).await
	}

	async fn fetch_text(&self, path: &str) -> Result<String, ClientError> {
		self.send(Method::GET, path)
			.await?
			.text()
			.await
			.map_err(|e| ClientError::Network(format!("Failed to read response body: {}", e)))
	}

	async fn fetch_bytes(&self, path: &str) -> Result<Vec<u8>, ClientError> {
		let body = self
			.send(Method::GET, path)
			.await?
			.bytes()
			.await
			.map_err(|e| ClientError::Network(format!("Failed to read response body: {}", e)))?;
		Ok(body.to_vec())
	}

	/// Get details for a package
	pub async fn get_package(&self, package_id: &str) -> Result<String, ClientError> {
		self.fetch_text(&format!("/packages/{}", package_id)).await
	}

	/// Get the evidence summary PDF for a package
	pub async fn get_evidence_summary(&self, package_id: &str) -> Result<Vec<u8>, ClientError> {
		self.fetch_bytes(&format!("/packages/{}/evidence/summary", package_id))
			.await
	}

	/// Get the audit trail for a package
	pub async fn get_audit_trail(&self, package_id: &str) -> Result<String, ClientError> {
		self.fetch_text(&format!("/packages/{}/audit", package_id))
			.await
	}

	/// Get the field summary for a package
	pub async fn get_field_summary(&self, package_id: &str) -> Result<String, ClientError> {
		self.fetch_text(&format!("/packages/{}/fieldSummary", package_id))
			.await
	}

	/// Get the signing status for a package as the raw JSON the service
	/// returned
	pub async fn get_signing_status(&self, package_id: &str) -> Result<String, ClientError> {
		self.fetch_text(&format!("/packages/{}/signingStatus", package_id))
			.await
	}

	/// Get a single document from a package as a PDF
	pub async fn get_document_pdf(
		&self,
		package_id: &str,
		document_id: &str,
	) -> Result<Vec<u8>, ClientError> {
		self.fetch_bytes(&format!(
			"/packages/{}/documents/{}/pdf",
			package_id, document_id
		))
		.await
	}

	/// Download the ZIP archive of a completed package's documents
	///
	/// The signing status is queried first; the archive is only fetched
	/// when the remote status is exactly `COMPLETED`. Any other status,
	/// including a missing status field, fails with
	/// [`ClientError::PackageIncomplete`] without touching the archive
	/// endpoint.
	pub async fn download_archive(&self, package_id: &str) -> Result<Vec<u8>, ClientError> {
		let raw = self.get_signing_status(package_id).await?;
		let status: SigningStatus = serde_json::from_str(&raw)
			.map_err(|e| ClientError::Deserialize(format!("Invalid signing status: {}", e)))?;

		if !status.is_completed() {
			return Err(ClientError::PackageIncomplete {
				status: status.status.unwrap_or_else(|| "missing".to_string()),
			});
		}

		self.fetch_bytes(&format!("/packages/{}/documents/zip", package_id))
			.await
	}

	/// Obtain an authentication token for the configured credentials
	pub async fn create_authentication_token(&self) -> Result<String, ClientError> {
		// POST with an empty body; the key in the auth header is the only input
		self.send(Method::POST, "/authenticationTokens")
			.await?
			.text()
			.await
			.map_err(|e| ClientError::Network(format!("Failed to read response body: {}", e)))
	}

	/// Delete a package
	pub async fn delete_package(&self, package_id: &str) -> Result<(), ClientError> {
		self.send(Method::DELETE, &format!("/packages/{}", package_id))
			.await?;
		Ok(())
	}

	/// Update a package with a caller-supplied JSON payload
	///
	/// The payload is sent verbatim; the client does not validate its shape.
	pub async fn update_package(
		&self,
		package_id: &str,
		payload: impl Into<String>,
	) -> Result<(), ClientError> {
		let response = self
			.request(Method::PUT, &format!("/packages/{}", package_id))
			.body(payload.into())
			.send()
			.await
			.map_err(|e| ClientError::Network(format!("Request failed: {}", e)))?;
		Self::check(response).await?;
		Ok(())
	}

	/// Create a package by cloning a template
	///
	/// The payload typically fills in the template's signer placeholders.
	pub async fn create_package_from_template(
		&self,
		template_id: &str,
		payload: impl Into<String>,
	) -> Result<String, ClientError> {
		let response = self
			.request(Method::POST, &format!("/packages/{}/clone", template_id))
			.body(payload.into())
			.send()
			.await
			.map_err(|e| ClientError::Network(format!("Request failed: {}", e)))?;
		Self::check(response)
			.await?
			.text()
			.await
			.map_err(|e| ClientError::Network(format!("Failed to read response body: {}", e)))
	}

	/// Create a package with attached documents
	///
	/// Sends a multipart form with the JSON payload in a `payload` field
	/// and each document as a `file` part under its file name.
	pub async fn create_package(
		&self,
		payload: impl Into<String>,
		documents: Vec<DocumentUpload>,
	) -> Result<String, ClientError> {
		let mut form = Form::new().text("payload", payload.into());
		for doc in documents {
			let part = Part::bytes(doc.content).file_name(doc.file_name);
			form = form.part("file", part);
		}

		let response = self
			.request(Method::POST, "/packages")
			.multipart(form)
			.send()
			.await
			.map_err(|e| ClientError::Network(format!("Request failed: {}", e)))?;
		Self::check(response)
			.await?
			.text()
			.await
			.map_err(|e| ClientError::Network(format!("Failed to read response body: {}", e)))
	}
}

/// Synchronous client wrapper (for compatibility)
///
/// This wraps the async client and runs each call to completion on an
/// owned tokio runtime. For new code, prefer using the async Client
/// directly.
pub struct SyncClient {
	client: Client,
	runtime: tokio::runtime::Runtime,
}

impl SyncClient {
	/// Create a new synchronous client
	pub fn new(api_key: impl AsRef<str>, base_url: impl Into<String>) -> anyhow::Result<Self> {
		let runtime = tokio::runtime::Runtime::new()
			.map_err(|e| anyhow::anyhow!("Failed to create tokio runtime: {}", e))?;
		Ok(Self {
			client: Client::new(api_key, base_url),
			runtime,
		})
	}

	/// Get details for a package (synchronous)
	pub fn get_package(&self, package_id: &str) -> Result<String, ClientError> {
		self.runtime.block_on(self.client.get_package(package_id))
	}

	/// Get the evidence summary PDF for a package (synchronous)
	pub fn get_evidence_summary(&self, package_id: &str) -> Result<Vec<u8>, ClientError> {
		self.runtime
			.block_on(self.client.get_evidence_summary(package_id))
	}

	/// Get the audit trail for a package (synchronous)
	pub fn get_audit_trail(&self, package_id: &str) -> Result<String, ClientError> {
		self.runtime
			.block_on(self.client.get_audit_trail(package_id))
	}

	/// Get the field summary for a package (synchronous)
	pub fn get_field_summary(&self, package_id: &str) -> Result<String, ClientError> {
		self.runtime
			.block_on(self.client.get_field_summary(package_id))
	}

	/// Get the signing status for a package (synchronous)
	pub fn get_signing_status(&self, package_id: &str) -> Result<String, ClientError> {
		self.runtime
			.block_on(self.client.get_signing_status(package_id))
	}

	/// Get a single document from a package as a PDF (synchronous)
	pub fn get_document_pdf(
		&self,
		package_id: &str,
		document_id: &str,
	) -> Result<Vec<u8>, ClientError> {
		self.runtime
			.block_on(self.client.get_document_pdf(package_id, document_id))
	}

	/// Download the ZIP archive of a completed package (synchronous)
	pub fn download_archive(&self, package_id: &str) -> Result<Vec<u8>, ClientError> {
		self.runtime
			.block_on(self.client.download_archive(package_id))
	}

	/// Obtain an authentication token (synchronous)
	pub fn create_authentication_token(&self) -> Result<String, ClientError> {
		self.runtime
			.block_on(self.client.create_authentication_token())
	}

	/// Delete a package (synchronous)
	pub fn delete_package(&self, package_id: &str) -> Result<(), ClientError> {
		self.runtime
			.block_on(self.client.delete_package(package_id))
	}

	/// Update a package (synchronous)
	pub fn update_package(
		&self,
		package_id: &str,
		payload: impl Into<String>,
	) -> Result<(), ClientError> {
		self.runtime
			.block_on(self.client.update_package(package_id, payload))
	}

	/// Create a package by cloning a template (synchronous)
	pub fn create_package_from_template(
		&self,
		template_id: &str,
		payload: impl Into<String>,
	) -> Result<String, ClientError> {
		self.runtime
			.block_on(self.client.create_package_from_template(template_id, payload))
	}

	/// Create a package with attached documents (synchronous)
	pub fn create_package(
		&self,
		payload: impl Into<String>,
		documents: Vec<DocumentUpload>,
	) -> Result<String, ClientError> {
		self.runtime
			.block_on(self.client.create_package(payload, documents))
	}
}
