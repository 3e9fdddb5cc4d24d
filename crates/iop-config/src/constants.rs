/// Parent zone carrying the wildcard record (`*.app.iop.run`) for generated hosts.
pub const SSLIP_PARENT_ZONE: &str = "app.iop.run";

/// Separates the app name from the embedded server host in a generated label.
pub const SSLIP_HOST_MARKER: &str = "iop";

/// Number of hex characters of the SHA-256 digest kept in a generated label.
pub const HASH_LENGTH: usize = 8;

pub const MAX_DNS_LABEL_LENGTH: usize = 63;

pub const DEFAULT_CONFIG_FILE: &str = "iop.toml";
pub const CONFIG_PATH_ENV: &str = "IOP_CONFIG";
