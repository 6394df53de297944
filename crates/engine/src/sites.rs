//! Pad identifier to launch-site resolution.

use traj_config::SiteTableConfig;
use traj_core::Site;

/// Site picked for a pad identifier along with the table key that selected it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSite {
    pub site: Site,
    pub key: String,
    /// False when no key matched and the default was used.
    pub matched: bool,
}

/// Resolve `identifier` against the ordered site table.
///
/// The first entry whose key is a substring of `identifier` wins. Unknown or empty
/// identifiers fall back to the configured default key, then to the first table
/// entry, then to LC-39A.
pub fn resolve_site(identifier: &str, table: &SiteTableConfig) -> ResolvedSite {
    if let Some(entry) = table
        .entries
        .iter()
        .find(|entry| !entry.key.is_empty() && identifier.contains(entry.key.as_str()))
    {
        return ResolvedSite {
            site: entry.site(),
            key: entry.key.clone(),
            matched: true,
        };
    }

    let fallback = table
        .entries
        .iter()
        .find(|entry| entry.key == table.default_key)
        .or_else(|| table.entries.first());

    match fallback {
        Some(entry) => ResolvedSite {
            site: entry.site(),
            key: entry.key.clone(),
            matched: false,
        },
        None => ResolvedSite {
            site: Site {
                name: "Cape Canaveral, FL".to_string(),
                lat: 28.6084,
                lon: -80.6043,
            },
            key: "LC-39A".to_string(),
            matched: false,
        },
    }
}
