// Copyright (c) 2025, The Ruskit Authors
// MIT License
// All rights reserved.

use crate::config_schema;

config_schema! {
    /// OAuth2 / OpenID Connect identity server settings.
    ///
    /// Client credentials have no defaults; everything else falls back to values suited for a
    /// local identity server.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct IdentityConfigs("Identity") {
        pub url: String => "IDENTITY_SERVER_URL" = "http://localhost",
        pub realm: String => "IDENTITY_SERVER_REALM" = "localhost",
        pub audience: String => "IDENTITY_SERVER_AUDIENCE" = "audience",
        pub issuer: String => "IDENTITY_SERVER_ISSUER" = "issuer",
        pub grant_type: String => "IDENTITY_SERVER_GRANT_TYPE" = "client_credentials",
        pub client_id: String => "IDENTITY_SERVER_CLIENT_ID",
        pub client_secret: String => "IDENTITY_SERVER_CLIENT_SECRET",
    }
}
