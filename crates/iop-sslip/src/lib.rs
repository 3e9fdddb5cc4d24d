//! Generated hostnames under the `app.iop.run` wildcard zone.
//!
//! Apps deployed without custom hosts are served on
//! `{hash}-{app}-iop-{host}.app.iop.run`, where `hash` is derived from the
//! project, app and server host so the same deployment always lands on the
//! same name.

mod domain;
mod hash;
mod host;
mod resolve;

pub use domain::{check_label_lengths, generate_app_sslip_domain, should_use_sslip};
pub use hash::deterministic_hash;
pub use host::{is_valid_ipv4, sanitize_host_for_dns};
pub use iop_config::constants::SSLIP_PARENT_ZONE;
pub use resolve::{AppHosts, resolve_app_hosts};
