// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Configuration tests for taskpad-sdk.

use taskpad_sdk::SdkConfig;

#[test]
fn test_new_config() {
    let config = SdkConfig::new("http://example.com:9000");

    assert_eq!(config.base_url, "http://example.com:9000");
    assert_eq!(config.api_prefix, "/api");
    assert_eq!(config.connect_timeout_ms, 10_000);
    assert_eq!(config.request_timeout_ms, 30_000);
}

#[test]
fn test_localhost_config() {
    let config = SdkConfig::localhost();

    assert_eq!(config.base_url, "http://127.0.0.1:8080");
    assert_eq!(config.api_prefix, "/api");
}

#[test]
fn test_with_base_url() {
    let config = SdkConfig::localhost().with_base_url("http://10.0.0.5:8080");

    assert_eq!(config.base_url, "http://10.0.0.5:8080");
}

#[test]
fn test_with_api_prefix() {
    let config = SdkConfig::localhost().with_api_prefix("/v1");

    assert_eq!(config.api_prefix, "/v1");
}

#[test]
fn test_with_timeouts() {
    let config = SdkConfig::localhost()
        .with_connect_timeout_ms(500)
        .with_request_timeout_ms(2_000);

    assert_eq!(config.connect_timeout_ms, 500);
    assert_eq!(config.request_timeout_ms, 2_000);
}

#[test]
fn test_api_root_joins_base_and_prefix() {
    assert_eq!(
        SdkConfig::new("http://h:1/").api_root(),
        "http://h:1/api"
    );
    assert_eq!(
        SdkConfig::new("http://h:1").with_api_prefix("v1/").api_root(),
        "http://h:1/v1"
    );
    assert_eq!(SdkConfig::new("http://h:1").with_api_prefix("").api_root(), "http://h:1");
}
