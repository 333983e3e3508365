/// Returned when no platform signature matches.
pub const UNKNOWN_PLATFORM: &str = "Unknown";

/// Ordered (display name, signatures) table. The first platform with any
/// matching signature wins, regardless of where in the markup it occurs.
pub const PLATFORM_SIGNATURES: &[(&str, &[&str])] = &[
    ("Merchantpro", &["merchantpro", "mp-"]),
    ("Gomag", &["gomag", "gomag.ro"]),
    ("Shopify", &["shopify", "cdn.shopify"]),
    ("Woocommerce", &["woocommerce", "wp-content/plugins/woocommerce"]),
    ("Magento", &["magento", "mage"]),
    ("Prestashop", &["prestashop", "presta"]),
    ("Opencart", &["opencart"]),
    ("Vtex", &["vtex"]),
];

/// Platforms we have dedicated optimization playbooks for.
pub const ECOMMERCE_PLATFORMS: &[&str] = &["Merchantpro", "Gomag", "Shopify"];

/// Detects the storefront platform by exact substring containment on the
/// lower-cased markup.
pub fn detect_platform(html: &str) -> &'static str {
    let html_lower = html.to_lowercase();

    PLATFORM_SIGNATURES
        .iter()
        .find(|(_, signatures)| signatures.iter().any(|sig| html_lower.contains(sig)))
        .map(|(name, _)| *name)
        .unwrap_or(UNKNOWN_PLATFORM)
}

pub fn is_recognized_ecommerce(platform: &str) -> bool {
    ECOMMERCE_PLATFORMS.contains(&platform)
}
