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

fn default_timeout_secs() -> u64 {
	30
}

/// Client configuration
///
/// The API key and base URL are the only required settings; everything a
/// request needs beyond that is derived from them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
	/// API key sent as `Authorization: Basic <api_key>` on every request
	pub api_key: String,
	/// Base URL of the e-signature service (e.g. "https://sandbox.example.com/api")
	pub base_url: String,
	/// Per-request timeout in seconds
	#[serde(default = "default_timeout_secs")]
	pub timeout_secs: u64,
}

impl ClientConfig {
	/// Load configuration from environment variables
	///
	/// Variables are prefixed with `ESIGN_`, e.g. `ESIGN_API_KEY`,
	/// `ESIGN_BASE_URL`, `ESIGN_TIMEOUT_SECS`.
	pub fn from_env() -> Result<Self, config::ConfigError> {
		let cfg = config::Config::builder()
			.add_source(config::Environment::with_prefix("ESIGN"))
			.build()?;

		cfg.try_deserialize()
	}

	/// Load configuration from file, with environment overrides
	pub fn from_file(path: &str) -> Result<Self, config::ConfigError> {
		let cfg = config::Config::builder()
			.add_source(config::File::with_name(path))
			.add_source(config::Environment::with_prefix("ESIGN"))
			.build()?;

		cfg.try_deserialize()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_timeout_defaults_when_absent() {
		let cfg: ClientConfig = serde_json::from_str(
			r#"{"api_key":"a2V5","base_url":"https://sandbox.example.com/api"}"#,
		)
		.unwrap();
		assert_eq!(cfg.timeout_secs, 30);
	}

	#[test]
	fn test_explicit_timeout() {
		let cfg: ClientConfig = serde_json::from_str(
			r#"{"api_key":"a2V5","base_url":"https://sandbox.example.com/api","timeout_secs":5}"#,
		)
		.unwrap();
		assert_eq!(cfg.timeout_secs, 5);
	}
}
