//! Stores settings that are not expected to need to change but grouped together
//! for discoverability and reuse. Each constant should be prefixed by the module
//! name to allow importing the constant only and still be readable

pub mod client {
    /// Used when no server address has been configured
    pub const CLIENT_DEFAULT_SERVER_ADDRESS: &str = "http://localhost:8789";
}

pub mod session {
    /// The one well-known key the persisted session lives under
    pub const SESSION_STORAGE_KEY: &str = "erp_session";
    pub const SESSION_AUTH_SCHEME: &str = "Bearer";
}

pub mod path {
    mod path_spec;
    pub use path_spec::PathSpec;
    pub const PATH_API_CHANGE_PASSWORD: PathSpec = PathSpec::post("/api/change_password");
    pub const PATH_API_LOGOUT: PathSpec = PathSpec::post("/api/logout");
    pub const PATH_HEALTH_CHECK: PathSpec = PathSpec::get("/health_check");
    pub const PATH_LOGIN: PathSpec = PathSpec::post("/login");
    pub const PATH_PASSWORD_RESET: PathSpec = PathSpec::post("/password_reset");
}
