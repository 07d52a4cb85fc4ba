//! Static country reference data for the phone selector.
//!
//! The set is fixed at compile time and never mutated. Region codes are
//! unique; dialing prefixes may be shared (United States and Canada both use
//! `1`).

/// One selectable country.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    /// Display name.
    pub name: &'static str,
    /// ISO 3166-1 alpha-2 region code.
    pub region: &'static str,
    /// Dialing prefix, digits only.
    pub dial_code: &'static str,
    /// Flag glyph.
    pub flag: &'static str,
}

impl Country {
    /// Dialing prefix with its leading `+`.
    pub fn international_prefix(&self) -> String {
        format!("+{}", self.dial_code)
    }
}

/// Curated list in display order; the first entry is the fallback.
pub const COUNTRIES: &[Country] = &[
    Country { name: "Peru", region: "PE", dial_code: "51", flag: "🇵🇪" },
    Country { name: "Mexico", region: "MX", dial_code: "52", flag: "🇲🇽" },
    Country { name: "Colombia", region: "CO", dial_code: "57", flag: "🇨🇴" },
    Country { name: "Chile", region: "CL", dial_code: "56", flag: "🇨🇱" },
    Country { name: "Argentina", region: "AR", dial_code: "54", flag: "🇦🇷" },
    Country { name: "Brazil", region: "BR", dial_code: "55", flag: "🇧🇷" },
    Country { name: "Venezuela", region: "VE", dial_code: "58", flag: "🇻🇪" },
    Country { name: "Ecuador", region: "EC", dial_code: "593", flag: "🇪🇨" },
    Country { name: "Bolivia", region: "BO", dial_code: "591", flag: "🇧🇴" },
    Country { name: "Uruguay", region: "UY", dial_code: "598", flag: "🇺🇾" },
    Country { name: "Paraguay", region: "PY", dial_code: "595", flag: "🇵🇾" },
    Country { name: "United States", region: "US", dial_code: "1", flag: "🇺🇸" },
    Country { name: "Spain", region: "ES", dial_code: "34", flag: "🇪🇸" },
    Country { name: "United Kingdom", region: "GB", dial_code: "44", flag: "🇬🇧" },
    Country { name: "Canada", region: "CA", dial_code: "1", flag: "🇨🇦" },
    Country { name: "France", region: "FR", dial_code: "33", flag: "🇫🇷" },
    Country { name: "Germany", region: "DE", dial_code: "49", flag: "🇩🇪" },
];

/// Country used when nothing better is known.
pub const FALLBACK_COUNTRY: Country = Country {
    name: "Peru",
    region: "PE",
    dial_code: "51",
    flag: "🇵🇪",
};

/// Case-insensitive lookup by region code.
///
/// # Examples
/// ```
/// use breakout_backend::domain::country::find_by_region;
///
/// assert_eq!(find_by_region("mx").map(|c| c.dial_code), Some("52"));
/// assert!(find_by_region("ZZ").is_none());
/// ```
pub fn find_by_region(region: &str) -> Option<&'static Country> {
    COUNTRIES
        .iter()
        .find(|country| country.region.eq_ignore_ascii_case(region))
}

/// Pick the country matching a BCP 47 locale's region subtag (`es-PE`),
/// falling back to Peru.
pub fn default_country(locale: Option<&str>) -> &'static Country {
    locale
        .and_then(|tag| tag.split(['-', '_']).nth(1))
        .and_then(find_by_region)
        .unwrap_or(&FALLBACK_COUNTRY)
}

/// Filter the selector list by a free-text query over name, region, and
/// `+<dial code>`.
pub fn filter_countries(query: &str) -> Vec<&'static Country> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return COUNTRIES.iter().collect();
    }
    let compact: String = needle.chars().filter(|c| !c.is_whitespace()).collect();
    COUNTRIES
        .iter()
        .filter(|country| {
            country.name.to_lowercase().contains(&needle)
                || country.region.to_lowercase().contains(&needle)
                || country.international_prefix().contains(&compact)
        })
        .collect()
}
