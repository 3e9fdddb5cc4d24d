use crate::hash::deterministic_hash;
use crate::host::sanitize_host_for_dns;
use iop_config::constants::{MAX_DNS_LABEL_LENGTH, SSLIP_HOST_MARKER, SSLIP_PARENT_ZONE};

/// Builds `{hash}-{app}-iop-{host}.app.iop.run`.
///
/// The hash covers the raw inputs. Only the server host is sanitized; the app
/// name goes in as given, so callers that need a strictly valid label must
/// pass a DNS-safe app name.
pub fn generate_app_sslip_domain(project_name: &str, app_name: &str, server_host: &str) -> String {
    let hash = deterministic_hash(project_name, app_name, server_host);
    let sanitized_host = sanitize_host_for_dns(server_host);

    format!("{hash}-{app_name}-{SSLIP_HOST_MARKER}-{sanitized_host}.{SSLIP_PARENT_ZONE}")
}

/// Whether an app falls back to a generated host, i.e. it has no custom hosts.
pub fn should_use_sslip<S>(hosts: Option<&[S]>) -> bool {
    hosts.is_none_or(|hosts| hosts.is_empty())
}

/// Labels of `domain` longer than the DNS limit of 63 octets.
pub fn check_label_lengths(domain: &str) -> Vec<String> {
    domain
        .split('.')
        .filter(|label| label.len() > MAX_DNS_LABEL_LENGTH)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_domain() {
        assert_eq!(
            generate_app_sslip_domain("myproj", "web", "10.0.0.5"),
            "4534f4fd-web-iop-10-0-0-5.app.iop.run"
        );
        assert_eq!(
            generate_app_sslip_domain("shop", "api", "deploy.example.net"),
            "fcaef752-api-iop-deploy-example-net.app.iop.run"
        );
    }

    #[test]
    fn test_hash_segment_uses_raw_host() {
        let domain = generate_app_sslip_domain("myproj", "web", "10.0.0.5");
        let hash = deterministic_hash("myproj", "web", "10.0.0.5");
        assert!(domain.starts_with(&format!("{hash}-")));
        assert_ne!(hash, deterministic_hash("myproj", "web", "10-0-0-5"));
    }

    #[test]
    fn test_app_name_is_not_sanitized() {
        let domain = generate_app_sslip_domain("myproj", "My_App.v2", "10.0.0.5");
        assert!(domain.contains("-My_App.v2-iop-10-0-0-5."));
        assert!(domain.ends_with(".app.iop.run"));
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(
            generate_app_sslip_domain("", "", ""),
            "71546855--iop-.app.iop.run"
        );
    }

    #[test]
    fn test_domain_is_deterministic() {
        let first = generate_app_sslip_domain("myproj", "web", "10.0.0.5");
        let second = generate_app_sslip_domain("myproj", "web", "10.0.0.5");
        assert_eq!(first, second);
    }

    #[test]
    fn test_should_use_sslip() {
        assert!(should_use_sslip::<&str>(None));
        assert!(should_use_sslip::<&str>(Some(&[][..])));
        assert!(!should_use_sslip(Some(&["example.com"][..])));

        let hosts = vec![String::from("a.com"), String::from("b.com")];
        assert!(!should_use_sslip(Some(hosts.as_slice())));
    }

    #[test]
    fn test_check_label_lengths() {
        assert!(check_label_lengths("4534f4fd-web-iop-10-0-0-5.app.iop.run").is_empty());

        let at_limit = format!("{}.app.iop.run", "a".repeat(63));
        assert!(check_label_lengths(&at_limit).is_empty());

        let over = "b".repeat(64);
        let too_long = format!("{over}.app.iop.run");
        assert_eq!(check_label_lengths(&too_long), vec![over]);
    }
}
