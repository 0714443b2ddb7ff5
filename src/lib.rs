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

//! esign-sdk - Client library for a remote e-signature service
//!
//! This crate provides a thin, typed client over the service's REST API:
//! package lifecycle (create, fetch, update, delete), audit trails,
//! document PDFs, evidence summaries, signing status, completed-package
//! archives, and authentication tokens.
//!
//! The SDK is designed to be lightweight and embeddable:
//! - No background threads
//! - No runtime initialization (the async [`Client`] runs on the caller's
//!   executor; [`SyncClient`] owns its own)
//! - No environment loading unless [`ClientConfig::from_env`] is called
//!   explicitly
//!
//! Payloads are passed through opaquely. The only response the client
//! decodes is a package's signing status, which gates archive downloads.

pub mod client;
pub mod config;
pub mod types;

pub use client::{Client, ClientError, SyncClient};
pub use config::ClientConfig;
pub use types::{DocumentUpload, SigningStatus};
