//! CLI configuration

/// Settings shared by every command
pub struct Config {
    /// Base URL of the formrelay server
    pub server_url: String,
}
