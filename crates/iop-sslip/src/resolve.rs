use crate::domain::{check_label_lengths, generate_app_sslip_domain, should_use_sslip};
use serde::Serialize;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppHosts {
    pub app: String,
    pub hosts: Vec<String>,
    /// True when `hosts` holds a single generated `app.iop.run` domain.
    pub generated: bool,
}

/// Hosts an app is served on: its custom hosts when it has any, otherwise the
/// generated domain.
pub fn resolve_app_hosts(
    project_name: &str,
    server_host: &str,
    app_name: &str,
    hosts: Option<&[String]>,
) -> AppHosts {
    if should_use_sslip(hosts) {
        let domain = generate_app_sslip_domain(project_name, app_name, server_host);
        debug!("Generated domain {} for app {}", domain, app_name);

        for label in check_label_lengths(&domain) {
            warn!(
                "Generated domain {} for app {} has a {}-character label, DNS allows 63",
                domain,
                app_name,
                label.len()
            );
        }

        return AppHosts {
            app: app_name.to_string(),
            hosts: vec![domain],
            generated: true,
        };
    }

    let hosts = hosts.unwrap_or_default();
    debug!("App {} uses {} custom host(s)", app_name, hosts.len());

    AppHosts {
        app: app_name.to_string(),
        hosts: hosts.to_vec(),
        generated: false,
    }
}
