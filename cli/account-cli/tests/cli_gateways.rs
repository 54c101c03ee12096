// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Gateway CLI tests against a mock account server

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::process::Output;

use assert_cmd::Command;
use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn run(mut cmd: Command) -> Output {
    tokio::task::spawn_blocking(move || cmd.output().expect("Failed to run command"))
        .await
        .expect("command task panicked")
}

fn gateway_json(id: &str) -> Value {
    json!({
        "id": id,
        "activated": true,
        "frequency_plan": "EU_863_870",
        "public_rights": ["gateway:status"],
        "location": {"lat": 52.37, "lng": 4.89},
        "collaborators": [],
        "owner": "alice"
    })
}

#[tokio::test(flavor = "multi_thread")]
async fn test_gateways_list_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/gateways"))
        .and(header("authorization", "Bearer user-token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([gateway_json("gw-1"), gateway_json("gw-2")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().expect("failed to create temp dir");
    let mut cmd = common::account_cmd(dir.path());
    cmd.args(["gateways", "-j", "-s", &server.uri(), "--token", "user-token"]);
    let output = run(cmd).await;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let gateways: Vec<Value> = serde_json::from_slice(&output.stdout).expect("Should parse JSON");
    let ids: Vec<&str> = gateways.iter().filter_map(|g| g["id"].as_str()).collect();
    assert_eq!(ids, vec!["gw-1", "gw-2"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_gateway_get_uses_profile() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/gateways/gw-1"))
        .and(header("authorization", "Bearer profile-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gateway_json("gw-1")))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().expect("failed to create temp dir");
    common::write_profile(dir.path(), "mock", &server.uri(), Some("profile-token"));

    let mut cmd = common::account_cmd(dir.path());
    cmd.args(["-p", "mock", "gateway", "get", "gw-1"]);
    let output = run(cmd).await;
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "stdout: {}", stdout);
    assert!(stdout.contains("EU_863_870"));
    assert!(stdout.contains("alice"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_gateway_grant_defaults_to_user_rights() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v2/gateways/gw-1/collaborators/bob"))
        .and(body_json(json!({
            "rights": [
                "gateway:settings",
                "gateway:collaborators",
                "gateway:delete",
                "gateway:location",
                "gateway:status",
                "gateway:owner",
                "gateway:messages"
            ]
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().expect("failed to create temp dir");
    let mut cmd = common::account_cmd(dir.path());
    cmd.args(["gateway", "grant", "gw-1", "bob"])
        .env("ACCOUNT_SERVER", server.uri())
        .env("ACCOUNT_TOKEN", "user-token");
    let output = run(cmd).await;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_gateway_grant_rejects_unknown_right() {
    let server = MockServer::start().await;

    let dir = TempDir::new().expect("failed to create temp dir");
    let mut cmd = common::account_cmd(dir.path());
    cmd.args(["gateway", "grant", "gw-1", "bob", "-r", "messages:up:r"])
        .args(["-s", &server.uri()]);
    let output = run(cmd).await;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown gateway right"));

    let received = server.received_requests().await.unwrap_or_default();
    assert!(received.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_gateway_edit_sends_only_given_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/v2/gateways/gw-1"))
        .and(body_json(json!({"location": {"lat": -33.9, "lng": 18.4}})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().expect("failed to create temp dir");
    let mut cmd = common::account_cmd(dir.path());
    cmd.args(["gateway", "edit", "gw-1", "--lat", "-33.9", "--lng", "18.4"])
        .args(["-s", &server.uri(), "--key", "user-key"]);
    let output = run(cmd).await;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_gateway_register_without_plan_is_rejected_by_clap() {
    let dir = TempDir::new().expect("failed to create temp dir");
    let mut cmd = common::account_cmd(dir.path());
    cmd.args(["gateway", "register", "gw-1", "-s", "http://127.0.0.1:9"]);
    let output = run(cmd).await;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--frequency-plan"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_server_error_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/gateways/gw-1"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"error": "gateway not found"})),
        )
        .mount(&server)
        .await;

    let dir = TempDir::new().expect("failed to create temp dir");
    let mut cmd = common::account_cmd(dir.path());
    cmd.args(["gateway", "delete", "-f", "gw-1", "-s", &server.uri()]);
    let output = run(cmd).await;
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to delete gateway 'gw-1'"), "stderr: {}", stderr);
    assert!(stderr.contains("gateway not found"), "stderr: {}", stderr);
}
