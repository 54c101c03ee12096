// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Account client errors

use account_api::ErrorResponse;
use account_auth::AuthError;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Rejected locally, no request was sent
    #[error("{0}")]
    Validation(String),

    /// Neither an embedded token nor an access key was visible to the
    /// credential used
    #[error("Cannot get token using this authentication method")]
    InsufficientCredentials,

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("{status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl Error {
    /// Build a status error from a failed response body
    pub(crate) fn from_response(status: StatusCode, body: &[u8]) -> Self {
        let message = match serde_json::from_slice::<ErrorResponse>(body) {
            Ok(parsed) => parsed.text().map(str::to_string),
            Err(_) => None,
        }
        .or_else(|| {
            let raw = String::from_utf8_lossy(body).trim().to_string();
            (!raw.is_empty()).then_some(raw)
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_string()
        });

        Error::Status { status, message }
    }

    /// HTTP status of the response, for errors that got one
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Status { status, .. } => Some(*status),
            Error::Http(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self.status(),
            Some(StatusCode::UNAUTHORIZED) | Some(StatusCode::FORBIDDEN)
        )
    }
}
