// src/catalog/mod.rs

use once_cell::sync::Lazy;
use std::collections::BTreeMap;

const PROBLEM_URL_BASE: &str = "https://leetcode.com/problems";

/// Companies LeetCode publishes curated favorite lists for.
pub static COMPANIES: &[&str] = &[
    "meta",
    "uber",
    "amazon",
    "google",
    "tiktok",
    "linkedin",
    "microsoft",
    "bloomberg",
    "airbnb",
    "apple",
    "doordash",
    "oracle",
    "adobe",
    "salesforce",
    "roblox",
];

/// Lookback windows each company list is published for.
pub static DURATIONS: &[&str] = &["thirty-days", "three-months", "six-months"];

/// company -> duration -> favorite slug. Built once at first use and
/// read-only afterwards.
static FAVORITE_SLUGS: Lazy<BTreeMap<&'static str, BTreeMap<&'static str, String>>> =
    Lazy::new(|| {
        COMPANIES
            .iter()
            .map(|&company| {
                // LeetCode still files Meta's lists under the old name.
                let source = if company == "meta" { "facebook" } else { company };
                let by_duration = DURATIONS
                    .iter()
                    .map(|&duration| (duration, format!("{source}-{duration}")))
                    .collect();
                (company, by_duration)
            })
            .collect()
    });

/// Look up the favorite slug for a company/duration pair, e.g.
/// `("meta", "thirty-days")` -> `"facebook-thirty-days"`.
pub fn favorite_slug(company: &str, duration: &str) -> Option<&'static str> {
    FAVORITE_SLUGS
        .get(company)
        .and_then(|durations| durations.get(duration))
        .map(String::as_str)
}

/// Deterministic problem page URL for a title slug.
pub fn problem_url(title_slug: &str) -> String {
    format!("{PROBLEM_URL_BASE}/{title_slug}")
}
