// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! JSON request helpers shared by every endpoint

use account_auth::ScopedCredential;
use reqwest::Method;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{Account, Error};

impl Account {
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        auth: &ScopedCredential,
        path: &str,
    ) -> Result<T, Error> {
        let body = self.send(Method::GET, auth, path, None::<&()>).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    pub(crate) async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        auth: &ScopedCredential,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let body = self.send(Method::POST, auth, path, Some(body)).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    pub(crate) async fn put<B: Serialize>(
        &self,
        auth: &ScopedCredential,
        path: &str,
        body: &B,
    ) -> Result<(), Error> {
        self.send(Method::PUT, auth, path, Some(body)).await?;
        Ok(())
    }

    pub(crate) async fn patch<B: Serialize>(
        &self,
        auth: &ScopedCredential,
        path: &str,
        body: &B,
    ) -> Result<(), Error> {
        self.send(Method::PATCH, auth, path, Some(body)).await?;
        Ok(())
    }

    pub(crate) async fn del(&self, auth: &ScopedCredential, path: &str) -> Result<(), Error> {
        self.send(Method::DELETE, auth, path, None::<&()>).await?;
        Ok(())
    }

    /// Perform one request and return the raw body of a 2xx response
    async fn send<B: Serialize>(
        &self,
        method: Method,
        auth: &ScopedCredential,
        path: &str,
        body: Option<&B>,
    ) -> Result<Vec<u8>, Error> {
        let url = url::Url::parse(&format!("{}{}", self.server, path))?;
        let scope = auth.scope().map(ToString::to_string).unwrap_or_default();

        tracing::debug!(
            %method,
            path,
            scope = %scope,
            credential = auth.credential().kind(),
            "Sending account server request"
        );

        let mut request = self
            .client
            .request(method, url)
            .header(ACCEPT, "application/json");
        if let Some(value) = auth.authorization()? {
            request = request.header(AUTHORIZATION, value);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(Error::from_response(status, &bytes));
        }

        tracing::debug!(status = %status, len = bytes.len(), "Account server responded");
        Ok(bytes.to_vec())
    }
}
