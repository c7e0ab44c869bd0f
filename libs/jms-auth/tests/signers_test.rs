// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Signature tests for jms-auth
//!
//! Checks full Authorization header values against vectors computed with an
//! independent HMAC-SHA256 implementation.

use jms_auth::{RequestSigner, SigningInput};
use pretty_assertions::assert_eq;
use secrecy::SecretString;

const KEY_ID: &str = "b55d354a-3d9c-486b-a4d4-997a8e094f83";
const KEY_SECRET: &str = "3f81551d-ece1-4cf2-99a7-24d09ca26e3e";

/// HMAC-SHA256 over the signing string of `GET /api/v1/users/users/?username=alice`
/// with host `jms.example.com:8080` and the fixed date below
const SIG_USERS_QUERY: &str = "OUDCXbcnE6Xrb1Cpk90fq3zNSCxl64WB5dwGolGQmv0=";

const FIXED_DATE: &str = "Mon, 17 Feb 2014 06:11:05 GMT";

fn signer() -> RequestSigner {
    RequestSigner::new(KEY_ID, SecretString::from(KEY_SECRET)).expect("valid key pair")
}

#[test]
fn test_authorization_header_known_vector() {
    let header = signer()
        .authorization_header(&SigningInput {
            method: "GET",
            path_and_query: "/api/v1/users/users/?username=alice",
            accept: "application/json",
            date: FIXED_DATE,
            host: "jms.example.com:8080",
        })
        .unwrap();

    assert_eq!(
        header,
        format!(
            "Signature keyId=\"{}\",algorithm=\"hmac-sha256\",\
             headers=\"(request-target) accept date host\",signature=\"{}\"",
            KEY_ID, SIG_USERS_QUERY
        )
    );
}

#[test]
fn test_method_case_does_not_change_signature() {
    let make = |method| {
        signer()
            .authorization_header(&SigningInput {
                method,
                path_and_query: "/api/v1/users/users/?username=alice",
                accept: "application/json",
                date: FIXED_DATE,
                host: "jms.example.com:8080",
            })
            .unwrap()
    };
    assert_eq!(make("GET"), make("get"));
}

#[test]
fn test_query_is_part_of_request_target() {
    let base = SigningInput {
        method: "GET",
        path_and_query: "/api/v1/users/users/?username=alice",
        accept: "application/json",
        date: FIXED_DATE,
        host: "jms.example.com:8080",
    };
    let other = SigningInput {
        path_and_query: "/api/v1/users/users/?username=bob",
        ..base
    };
    assert_ne!(
        signer().authorization_header(&base).unwrap(),
        signer().authorization_header(&other).unwrap()
    );
}
