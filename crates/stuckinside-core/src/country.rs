//! # Country Code Table
//!
//! Static ISO 3166 table with the two lookups the tracker needs:
//!
//! - [`by_iso3`] — resolve a feed record's alpha-3 code (`"GBR"`) to a
//!   [`Country`]. Records whose code is absent from the table are dropped
//!   by the normalization pass, never errored.
//! - [`by_internet`] — resolve the viewer's subdomain label (`"uk"`,
//!   case-insensitive) to a [`Country`] for the per-country highlight.
//!
//! The `internet` column is the label used for country subdomains. It is
//! the lowercase alpha-2 code everywhere except where the conventional
//! internet code differs from ISO 3166-1 alpha-2 (United Kingdom → `uk`).

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// One row of the country table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    /// ISO 3166-1 alpha-3 code, uppercase (`"GBR"`).
    pub iso3: &'static str,
    /// ISO 3166-1 alpha-2 code, uppercase (`"GB"`).
    pub iso2: &'static str,
    /// Internet-style subdomain label, lowercase (`"uk"`).
    pub internet: &'static str,
    /// English short name.
    pub name: &'static str,
}

/// Resolve an alpha-3 code to its table entry. Case-insensitive.
pub fn by_iso3(code: &str) -> Option<&'static Country> {
    BY_ISO3.get(code.to_ascii_uppercase().as_str()).copied()
}

/// Resolve an internet-style subdomain label to its table entry.
/// Case-insensitive, so `Host: GB.stuckinsi.de` resolves the same as `gb`.
pub fn by_internet(label: &str) -> Option<&'static Country> {
    BY_INTERNET.get(label.to_ascii_lowercase().as_str()).copied()
}

static BY_ISO3: Lazy<HashMap<&'static str, &'static Country>> =
    Lazy::new(|| COUNTRIES.iter().map(|c| (c.iso3, c)).collect());

static BY_INTERNET: Lazy<HashMap<&'static str, &'static Country>> =
    Lazy::new(|| COUNTRIES.iter().map(|c| (c.internet, c)).collect());

macro_rules! country {
    ($iso3:literal, $iso2:literal, $internet:literal, $name:literal) => {
        Country {
            iso3: $iso3,
            iso2: $iso2,
            internet: $internet,
            name: $name,
        }
    };
}

/// The full table, ordered by alpha-3 code.
///
/// Covers every country the OxCGRT feed reports. Entities the feed uses a
/// non-ISO code for (e.g. `RKS` for Kosovo) are intentionally absent and
/// their records are dropped during normalization.
pub static COUNTRIES: &[Country] = &[
    country!("ABW", "AW", "aw", "Aruba"),
    country!("AFG", "AF", "af", "Afghanistan"),
    country!("AGO", "AO", "ao", "Angola"),
    country!("ALB", "AL", "al", "Albania"),
    country!("AND", "AD", "ad", "Andorra"),
    country!("ARE", "AE", "ae", "United Arab Emirates"),
    country!("ARG", "AR", "ar", "Argentina"),
    country!("ARM", "AM", "am", "Armenia"),
    country!("ATG", "AG", "ag", "Antigua and Barbuda"),
    country!("AUS", "AU", "au", "Australia"),
    country!("AUT", "AT", "at", "Austria"),
    country!("AZE", "AZ", "az", "Azerbaijan"),
    country!("BDI", "BI", "bi", "Burundi"),
    country!("BEL", "BE", "be", "Belgium"),
    country!("BEN", "BJ", "bj", "Benin"),
    country!("BFA", "BF", "bf", "Burkina Faso"),
    country!("BGD", "BD", "bd", "Bangladesh"),
    country!("BGR", "BG", "bg", "Bulgaria"),
    country!("BHR", "BH", "bh", "Bahrain"),
    country!("BHS", "BS", "bs", "Bahamas"),
    country!("BIH", "BA", "ba", "Bosnia and Herzegovina"),
    country!("BLR", "BY", "by", "Belarus"),
    country!("BLZ", "BZ", "bz", "Belize"),
    country!("BMU", "BM", "bm", "Bermuda"),
    country!("BOL", "BO", "bo", "Bolivia"),
    country!("BRA", "BR", "br", "Brazil"),
    country!("BRB", "BB", "bb", "Barbados"),
    country!("BRN", "BN", "bn", "Brunei"),
    country!("BTN", "BT", "bt", "Bhutan"),
    country!("BWA", "BW", "bw", "Botswana"),
    country!("CAF", "CF", "cf", "Central African Republic"),
    country!("CAN", "CA", "ca", "Canada"),
    country!("CHE", "CH", "ch", "Switzerland"),
    country!("CHL", "CL", "cl", "Chile"),
    country!("CHN", "CN", "cn", "China"),
    country!("CIV", "CI", "ci", "Cote d'Ivoire"),
    country!("CMR", "CM", "cm", "Cameroon"),
    country!("COD", "CD", "cd", "Democratic Republic of the Congo"),
    country!("COG", "CG", "cg", "Congo"),
    country!("COL", "CO", "co", "Colombia"),
    country!("COM", "KM", "km", "Comoros"),
    country!("CPV", "CV", "cv", "Cape Verde"),
    country!("CRI", "CR", "cr", "Costa Rica"),
    country!("CUB", "CU", "cu", "Cuba"),
    country!("CYP", "CY", "cy", "Cyprus"),
    country!("CZE", "CZ", "cz", "Czech Republic"),
    country!("DEU", "DE", "de", "Germany"),
    country!("DJI", "DJ", "dj", "Djibouti"),
    country!("DMA", "DM", "dm", "Dominica"),
    country!("DNK", "DK", "dk", "Denmark"),
    country!("DOM", "DO", "do", "Dominican Republic"),
    country!("DZA", "DZ", "dz", "Algeria"),
    country!("ECU", "EC", "ec", "Ecuador"),
    country!("EGY", "EG", "eg", "Egypt"),
    country!("ERI", "ER", "er", "Eritrea"),
    country!("ESP", "ES", "es", "Spain"),
    country!("EST", "EE", "ee", "Estonia"),
    country!("ETH", "ET", "et", "Ethiopia"),
    country!("FIN", "FI", "fi", "Finland"),
    country!("FJI", "FJ", "fj", "Fiji"),
    country!("FRA", "FR", "fr", "France"),
    country!("FSM", "FM", "fm", "Micronesia"),
    country!("GAB", "GA", "ga", "Gabon"),
    country!("GBR", "GB", "uk", "United Kingdom"),
    country!("GEO", "GE", "ge", "Georgia"),
    country!("GHA", "GH", "gh", "Ghana"),
    country!("GIN", "GN", "gn", "Guinea"),
    country!("GMB", "GM", "gm", "Gambia"),
    country!("GNB", "GW", "gw", "Guinea-Bissau"),
    country!("GNQ", "GQ", "gq", "Equatorial Guinea"),
    country!("GRC", "GR", "gr", "Greece"),
    country!("GRD", "GD", "gd", "Grenada"),
    country!("GRL", "GL", "gl", "Greenland"),
    country!("GTM", "GT", "gt", "Guatemala"),
    country!("GUY", "GY", "gy", "Guyana"),
    country!("HKG", "HK", "hk", "Hong Kong"),
    country!("HND", "HN", "hn", "Honduras"),
    country!("HRV", "HR", "hr", "Croatia"),
    country!("HTI", "HT", "ht", "Haiti"),
    country!("HUN", "HU", "hu", "Hungary"),
    country!("IDN", "ID", "id", "Indonesia"),
    country!("IND", "IN", "in", "India"),
    country!("IRL", "IE", "ie", "Ireland"),
    country!("IRN", "IR", "ir", "Iran"),
    country!("IRQ", "IQ", "iq", "Iraq"),
    country!("ISL", "IS", "is", "Iceland"),
    country!("ISR", "IL", "il", "Israel"),
    country!("ITA", "IT", "it", "Italy"),
    country!("JAM", "JM", "jm", "Jamaica"),
    country!("JOR", "JO", "jo", "Jordan"),
    country!("JPN", "JP", "jp", "Japan"),
    country!("KAZ", "KZ", "kz", "Kazakhstan"),
    country!("KEN", "KE", "ke", "Kenya"),
    country!("KGZ", "KG", "kg", "Kyrgyzstan"),
    country!("KHM", "KH", "kh", "Cambodia"),
    country!("KIR", "KI", "ki", "Kiribati"),
    country!("KNA", "KN", "kn", "Saint Kitts and Nevis"),
    country!("KOR", "KR", "kr", "South Korea"),
    country!("KWT", "KW", "kw", "Kuwait"),
    country!("LAO", "LA", "la", "Laos"),
    country!("LBN", "LB", "lb", "Lebanon"),
    country!("LBR", "LR", "lr", "Liberia"),
    country!("LBY", "LY", "ly", "Libya"),
    country!("LCA", "LC", "lc", "Saint Lucia"),
    country!("LIE", "LI", "li", "Liechtenstein"),
    country!("LKA", "LK", "lk", "Sri Lanka"),
    country!("LSO", "LS", "ls", "Lesotho"),
    country!("LTU", "LT", "lt", "Lithuania"),
    country!("LUX", "LU", "lu", "Luxembourg"),
    country!("LVA", "LV", "lv", "Latvia"),
    country!("MAC", "MO", "mo", "Macao"),
    country!("MAR", "MA", "ma", "Morocco"),
    country!("MCO", "MC", "mc", "Monaco"),
    country!("MDA", "MD", "md", "Moldova"),
    country!("MDG", "MG", "mg", "Madagascar"),
    country!("MDV", "MV", "mv", "Maldives"),
    country!("MEX", "MX", "mx", "Mexico"),
    country!("MHL", "MH", "mh", "Marshall Islands"),
    country!("MKD", "MK", "mk", "North Macedonia"),
    country!("MLI", "ML", "ml", "Mali"),
    country!("MLT", "MT", "mt", "Malta"),
    country!("MMR", "MM", "mm", "Myanmar"),
    country!("MNE", "ME", "me", "Montenegro"),
    country!("MNG", "MN", "mn", "Mongolia"),
    country!("MOZ", "MZ", "mz", "Mozambique"),
    country!("MRT", "MR", "mr", "Mauritania"),
    country!("MUS", "MU", "mu", "Mauritius"),
    country!("MWI", "MW", "mw", "Malawi"),
    country!("MYS", "MY", "my", "Malaysia"),
    country!("NAM", "NA", "na", "Namibia"),
    country!("NER", "NE", "ne", "Niger"),
    country!("NGA", "NG", "ng", "Nigeria"),
    country!("NIC", "NI", "ni", "Nicaragua"),
    country!("NLD", "NL", "nl", "Netherlands"),
    country!("NOR", "NO", "no", "Norway"),
    country!("NPL", "NP", "np", "Nepal"),
    country!("NRU", "NR", "nr", "Nauru"),
    country!("NZL", "NZ", "nz", "New Zealand"),
    country!("OMN", "OM", "om", "Oman"),
    country!("PAK", "PK", "pk", "Pakistan"),
    country!("PAN", "PA", "pa", "Panama"),
    country!("PER", "PE", "pe", "Peru"),
    country!("PHL", "PH", "ph", "Philippines"),
    country!("PLW", "PW", "pw", "Palau"),
    country!("PNG", "PG", "pg", "Papua New Guinea"),
    country!("POL", "PL", "pl", "Poland"),
    country!("PRI", "PR", "pr", "Puerto Rico"),
    country!("PRK", "KP", "kp", "North Korea"),
    country!("PRT", "PT", "pt", "Portugal"),
    country!("PRY", "PY", "py", "Paraguay"),
    country!("PSE", "PS", "ps", "Palestine"),
    country!("QAT", "QA", "qa", "Qatar"),
    country!("ROU", "RO", "ro", "Romania"),
    country!("RUS", "RU", "ru", "Russia"),
    country!("RWA", "RW", "rw", "Rwanda"),
    country!("SAU", "SA", "sa", "Saudi Arabia"),
    country!("SDN", "SD", "sd", "Sudan"),
    country!("SEN", "SN", "sn", "Senegal"),
    country!("SGP", "SG", "sg", "Singapore"),
    country!("SLB", "SB", "sb", "Solomon Islands"),
    country!("SLE", "SL", "sl", "Sierra Leone"),
    country!("SLV", "SV", "sv", "El Salvador"),
    country!("SMR", "SM", "sm", "San Marino"),
    country!("SOM", "SO", "so", "Somalia"),
    country!("SRB", "RS", "rs", "Serbia"),
    country!("SSD", "SS", "ss", "South Sudan"),
    country!("STP", "ST", "st", "Sao Tome and Principe"),
    country!("SUR", "SR", "sr", "Suriname"),
    country!("SVK", "SK", "sk", "Slovakia"),
    country!("SVN", "SI", "si", "Slovenia"),
    country!("SWE", "SE", "se", "Sweden"),
    country!("SWZ", "SZ", "sz", "Eswatini"),
    country!("SYC", "SC", "sc", "Seychelles"),
    country!("SYR", "SY", "sy", "Syria"),
    country!("TCD", "TD", "td", "Chad"),
    country!("TGO", "TG", "tg", "Togo"),
    country!("THA", "TH", "th", "Thailand"),
    country!("TJK", "TJ", "tj", "Tajikistan"),
    country!("TKM", "TM", "tm", "Turkmenistan"),
    country!("TLS", "TL", "tl", "Timor-Leste"),
    country!("TON", "TO", "to", "Tonga"),
    country!("TTO", "TT", "tt", "Trinidad and Tobago"),
    country!("TUN", "TN", "tn", "Tunisia"),
    country!("TUR", "TR", "tr", "Turkey"),
    country!("TUV", "TV", "tv", "Tuvalu"),
    country!("TWN", "TW", "tw", "Taiwan"),
    country!("TZA", "TZ", "tz", "Tanzania"),
    country!("UGA", "UG", "ug", "Uganda"),
    country!("UKR", "UA", "ua", "Ukraine"),
    country!("URY", "UY", "uy", "Uruguay"),
    country!("USA", "US", "us", "United States"),
    country!("UZB", "UZ", "uz", "Uzbekistan"),
    country!("VAT", "VA", "va", "Vatican City"),
    country!("VCT", "VC", "vc", "Saint Vincent and the Grenadines"),
    country!("VEN", "VE", "ve", "Venezuela"),
    country!("VNM", "VN", "vn", "Vietnam"),
    country!("VUT", "VU", "vu", "Vanuatu"),
    country!("WSM", "WS", "ws", "Samoa"),
    country!("YEM", "YE", "ye", "Yemen"),
    country!("ZAF", "ZA", "za", "South Africa"),
    country!("ZMB", "ZM", "zm", "Zambia"),
    country!("ZWE", "ZW", "zw", "Zimbabwe"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_by_iso3_known_code() {
        let us = by_iso3("USA").unwrap();
        assert_eq!(us.internet, "us");
        assert_eq!(us.name, "United States");
    }

    #[test]
    fn test_by_iso3_case_insensitive() {
        assert_eq!(by_iso3("gbr"), by_iso3("GBR"));
        assert!(by_iso3("gbr").is_some());
    }

    #[test]
    fn test_by_iso3_unknown_code() {
        assert!(by_iso3("ZZZ").is_none());
        assert!(by_iso3("RKS").is_none());
        assert!(by_iso3("").is_none());
    }

    #[test]
    fn test_by_internet_case_insensitive() {
        let uk = by_internet("UK").unwrap();
        assert_eq!(uk.iso3, "GBR");
        assert_eq!(by_internet("uk"), by_internet("Uk"));
    }

    #[test]
    fn test_by_internet_unknown_label() {
        assert!(by_internet("localhost").is_none());
        assert!(by_internet("www").is_none());
    }

    #[test]
    fn test_uk_internet_label_differs_from_iso2() {
        let gb = by_iso3("GBR").unwrap();
        assert_eq!(gb.iso2, "GB");
        assert_eq!(gb.internet, "uk");
        // The alpha-2 form must not also resolve as a label.
        assert!(by_internet("gb").is_none());
    }

    #[test]
    fn test_table_keys_are_unique() {
        let iso3: HashSet<_> = COUNTRIES.iter().map(|c| c.iso3).collect();
        let internet: HashSet<_> = COUNTRIES.iter().map(|c| c.internet).collect();
        assert_eq!(iso3.len(), COUNTRIES.len());
        assert_eq!(internet.len(), COUNTRIES.len());
    }

    #[test]
    fn test_table_shape() {
        for c in COUNTRIES {
            assert_eq!(c.iso3.len(), 3, "{}", c.name);
            assert_eq!(c.iso2.len(), 2, "{}", c.name);
            assert_eq!(c.internet.len(), 2, "{}", c.name);
            assert_eq!(c.iso3, c.iso3.to_ascii_uppercase());
            assert_eq!(c.internet, c.internet.to_ascii_lowercase());
        }
    }
}
