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

use serde::{Deserialize, Serialize};

/// Signing status reported by the service for a package.
///
/// This is the only response payload the client decodes. The service may
/// omit the field entirely, so it is optional; an absent status is treated
/// the same as any non-completed status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SigningStatus {
	/// Remote-reported package status (e.g. "DRAFT", "SENT", "COMPLETED")
	#[serde(default)]
	pub status: Option<String>,
}

impl SigningStatus {
	/// Status value the service reports once every signer has finished
	pub const COMPLETED: &'static str = "COMPLETED";

	/// Whether the package has finished signing
	pub fn is_completed(&self) -> bool {
		self.status.as_deref() == Some(Self::COMPLETED)
	}
}

/// A document attached to a multipart package-creation request
#[derive(Debug, Clone)]
pub struct DocumentUpload {
	/// File name reported to the service for this attachment
	pub file_name: String,
	/// Raw document bytes (typically a PDF)
	pub content: Vec<u8>,
}

impl DocumentUpload {
	/// Create a document attachment from a file name and raw bytes
	pub fn new(file_name: impl Into<String>, content: Vec<u8>) -> Self {
		Self {
			file_name: file_name.into(),
			content,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_completed_status() {
		let status: SigningStatus = serde_json::from_str(r#"{"status":"COMPLETED"}"#).unwrap();
		assert!(status.is_completed());
	}

	#[test]
	fn test_other_status_not_completed() {
		let status: SigningStatus = serde_json::from_str(r#"{"status":"SENT"}"#).unwrap();
		assert!(!status.is_completed());
	}

	#[test]
	fn test_status_is_case_sensitive() {
		let status: SigningStatus = serde_json::from_str(r#"{"status":"completed"}"#).unwrap();
		assert!(!status.is_completed());
	}

	#[test]
	fn test_missing_status_field() {
		let status: SigningStatus = serde_json::from_str("{}").unwrap();
		assert!(status.status.is_none());
		assert!(!status.is_completed());
	}

	#[test]
	fn test_null_status_field() {
		let status: SigningStatus = serde_json::from_str(r#"{"status":null}"#).unwrap();
		assert!(!status.is_completed());
	}

	#[test]
	fn test_unknown_fields_ignored() {
		let status: SigningStatus =
			serde_json::from_str(r#"{"status":"COMPLETED","packageId":"abc"}"#).unwrap();
		assert!(status.is_completed());
	}
}
