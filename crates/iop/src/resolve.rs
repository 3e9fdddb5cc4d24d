use iop_config::IopConfig;
use iop_sslip::{AppHosts, is_valid_ipv4, resolve_app_hosts};
use tracing::{debug, info};

pub fn resolve_config(config: &IopConfig) -> Vec<AppHosts> {
    if is_valid_ipv4(&config.server_host) {
        debug!("Server host {} is an IPv4 address", config.server_host);
    } else {
        debug!("Server host {} is treated as a hostname", config.server_host);
    }

    let resolved: Vec<AppHosts> = config
        .apps
        .iter()
        .map(|(name, app)| {
            resolve_app_hosts(
                &config.project,
                &config.server_host,
                name,
                app.hosts.as_deref(),
            )
        })
        .collect();

    info!(
        "Resolved hosts for {} app(s) in project {}: {} generated",
        resolved.len(),
        config.project,
        resolved.iter().filter(|r| r.generated).count()
    );

    resolved
}
