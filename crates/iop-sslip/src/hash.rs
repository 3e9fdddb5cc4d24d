use iop_config::constants::HASH_LENGTH;
use sha2::{Digest, Sha256};

/// First eight hex characters of `SHA-256("{project}:{app}:{host}")`.
pub fn deterministic_hash(project_name: &str, app_name: &str, server_host: &str) -> String {
    let input = format!("{project_name}:{app_name}:{server_host}");

    let mut digest = hex::encode(Sha256::digest(input.as_bytes()));
    digest.truncate(HASH_LENGTH);
    digest
}
