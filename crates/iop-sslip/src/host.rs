use regex::Regex;
use std::sync::LazyLock;

static IPV4_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$",
    )
    .unwrap()
});

/// Dotted-quad check. Groups may carry leading zeros (`"010.0.0.1"`), unlike
/// [`std::net::Ipv4Addr`] parsing.
pub fn is_valid_ipv4(ip: &str) -> bool {
    IPV4_RE.is_match(ip)
}

/// Turns a hostname or IP into something embeddable in a DNS label: dots become
/// dashes and anything outside `[a-zA-Z0-9-]` is dropped. Length is not capped.
pub fn sanitize_host_for_dns(host: &str) -> String {
    host.chars()
        .map(|c| if c == '.' { '-' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect()
}
