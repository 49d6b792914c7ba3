//! Legacy 2-letter code mappings.
//!
//! The `mwnf3` schema keys languages and countries by 2-character codes
//! that only partially follow ISO 639-1 / 3166-1 alpha-2; several are
//! house-grown. These tables map the codes actually present in the legacy
//! data to the 3-character ISO codes the target schema uses as primary
//! keys. An unmapped code is a per-record error, never a silent pass.

use crate::error::ImportError;

/// Legacy 2-character language codes to ISO 639-3.
pub const LANGUAGE_CODE_MAP: &[(&str, &str)] = &[
    // Codes matching ISO 639-1
    ("ar", "ara"), // Arabic
    ("cs", "ces"), // Czech
    ("de", "deu"), // German
    ("el", "ell"), // Greek
    ("en", "eng"), // English
    ("es", "spa"), // Spanish
    ("fa", "fas"), // Farsi/Persian
    ("fr", "fra"), // French
    ("he", "heb"), // Hebrew
    ("hr", "hrv"), // Croatian
    ("hu", "hun"), // Hungarian
    ("it", "ita"), // Italian
    ("ja", "jpn"), // Japanese
    ("pt", "por"), // Portuguese
    ("ru", "rus"), // Russian
    ("tr", "tur"), // Turkish
    ("zh", "zho"), // Chinese
    // House-grown legacy codes
    ("ch", "zho"), // Chinese (ISO would be 'zh')
    ("se", "swe"), // Swedish (ISO would be 'sv')
    ("si", "slv"), // Slovenian (ISO would be 'sl')
];

/// Legacy 2-character country codes to ISO 3166-1 alpha-3.
pub const COUNTRY_CODE_MAP: &[(&str, &str)] = &[
    // Codes matching ISO 3166-1 alpha-2
    ("at", "aut"), // Austria
    ("az", "aze"), // Azerbaijan
    ("be", "bel"), // Belgium
    ("br", "bra"), // Brazil
    ("ca", "can"), // Canada
    ("cz", "cze"), // Czech Republic
    ("de", "deu"), // Germany
    ("dz", "dza"), // Algeria
    ("eg", "egy"), // Egypt
    ("es", "esp"), // Spain
    ("fr", "fra"), // France
    ("gr", "grc"), // Greece
    ("hr", "hrv"), // Croatia
    ("hu", "hun"), // Hungary
    ("iq", "irq"), // Iraq
    ("jo", "jor"), // Jordan
    ("jp", "jpn"), // Japan
    ("lb", "lbn"), // Lebanon
    ("ly", "lby"), // Libya
    ("ma", "mar"), // Morocco
    ("pl", "pol"), // Poland
    ("pt", "prt"), // Portugal
    ("ro", "rou"), // Romania
    ("ru", "rus"), // Russia
    ("sa", "sau"), // Saudi Arabia
    ("sy", "syr"), // Syria
    ("tn", "tun"), // Tunisia
    ("tr", "tur"), // Turkey
    // House-grown legacy codes
    ("ab", "alb"),   // Albania (ISO would be 'al')
    ("ag", "arg"),   // Argentina (ISO would be 'ar')
    ("al", "aus"),   // Australia (ISO would be 'au')
    ("bg", "bgd"),   // Bangladesh (ISO would be 'bd')
    ("bh", "bhr"),   // Bahrain
    ("bl", "blr"),   // Belarus (ISO would be 'by')
    ("bs", "bih"),   // Bosnia-Herzegovina (ISO would be 'ba')
    ("bu", "bgr"),   // Bulgaria (ISO would be 'bg')
    ("ch", "chn"),   // China (ISO would be 'cn')
    ("co", "com"),   // Comoros (ISO would be 'km')
    ("cy", "cyp"),   // Cyprus
    ("dj", "dji"),   // Djibouti
    ("dn", "dnk"),   // Denmark (ISO would be 'dk')
    ("et", "est"),   // Estonia (ISO would be 'ee')
    ("fn", "fin"),   // Finland (ISO would be 'fi')
    ("ge", "geo"),   // Georgia
    ("ia", "irn"),   // Iran (ISO would be 'ir')
    ("is", "isr"),   // Israel (ISO would be 'il')
    ("ix", "ita"),   // Italy (regional variant)
    ("ln", "ltu"),   // Lithuania (ISO would be 'lt')
    ("lt", "lva"),   // Latvia (ISO would be 'lv')
    ("lx", "lux"),   // Luxembourg (ISO would be 'lu')
    ("mc", "mkd"),   // North Macedonia (ISO would be 'mk')
    ("md", "mda"),   // Moldova
    ("ml", "mlt"),   // Malta (ISO would be 'mt')
    ("mn", "mne"),   // Montenegro (ISO would be 'me')
    ("mt", "mrt"),   // Mauritania (ISO would be 'mr')
    ("nt", "nld"),   // Netherlands (ISO would be 'nl')
    ("on", "omn"),   // Oman (ISO would be 'om')
    ("pa", "pse"),   // Palestine (ISO would be 'ps')
    ("pd", "zzzpd"), // Public domain (no specific country)
    ("px", "pse"),   // Palestinian Territories (alternative)
    ("qt", "qat"),   // Qatar (ISO would be 'qa')
    ("rm", "rou"),   // Romania (alternative)
    ("sb", "srb"),   // Serbia (ISO would be 'rs')
    ("sd", "sdn"),   // Sudan
    ("sf", "zaf"),   // South Africa (ISO would be 'za')
    ("sl", "svk"),   // Slovakia (ISO would be 'sk')
    ("so", "som"),   // Somalia
    ("sw", "che"),   // Switzerland (ISO would be 'ch')
    ("uc", "ukr"),   // Ukraine (ISO would be 'ua')
    ("uk", "gbr"),   // United Kingdom (ISO would be 'gb')
    ("va", "vat"),   // Vatican City
    ("ww", "zzzww"), // Other/Worldwide (no specific country)
    ("ym", "yem"),   // Yemen (ISO would be 'ye')
];

/// Map a legacy 2-character language code to its ISO 639-3 code.
pub fn map_language_code(legacy: &str) -> Result<&'static str, ImportError> {
    let code = legacy.trim().to_lowercase();
    LANGUAGE_CODE_MAP
        .iter()
        .find(|(from, _)| *from == code)
        .map(|(_, to)| *to)
        .ok_or_else(|| ImportError::UnknownLanguageCode(legacy.to_string()))
}

/// Map a legacy 2-character country code to its ISO 3166-1 alpha-3 code.
pub fn map_country_code(legacy: &str) -> Result<&'static str, ImportError> {
    let code = legacy.trim().to_lowercase();
    COUNTRY_CODE_MAP
        .iter()
        .find(|(from, _)| *from == code)
        .map(|(_, to)| *to)
        .ok_or_else(|| ImportError::UnknownCountryCode(legacy.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- language code tests --------------------------------------------------

    #[test]
    fn standard_language_codes() {
        assert_eq!(map_language_code("en").unwrap(), "eng");
        assert_eq!(map_language_code("fr").unwrap(), "fra");
        assert_eq!(map_language_code("ar").unwrap(), "ara");
    }

    #[test]
    fn house_grown_language_codes() {
        assert_eq!(map_language_code("se").unwrap(), "swe");
        assert_eq!(map_language_code("si").unwrap(), "slv");
        assert_eq!(map_language_code("ch").unwrap(), "zho");
    }

    #[test]
    fn language_codes_are_trimmed_and_lower_cased() {
        assert_eq!(map_language_code(" EN ").unwrap(), "eng");
    }

    #[test]
    fn unknown_language_code_is_an_error() {
        let err = map_language_code("xx").unwrap_err();
        assert!(matches!(err, ImportError::UnknownLanguageCode(code) if code == "xx"));
    }

    // -- country code tests ---------------------------------------------------

    #[test]
    fn standard_country_codes() {
        assert_eq!(map_country_code("eg").unwrap(), "egy");
        assert_eq!(map_country_code("de").unwrap(), "deu");
    }

    #[test]
    fn house_grown_country_codes() {
        assert_eq!(map_country_code("uk").unwrap(), "gbr");
        assert_eq!(map_country_code("sw").unwrap(), "che");
        assert_eq!(map_country_code("pd").unwrap(), "zzzpd");
    }

    #[test]
    fn unknown_country_code_is_an_error() {
        let err = map_country_code("zz").unwrap_err();
        assert!(matches!(err, ImportError::UnknownCountryCode(code) if code == "zz"));
    }

    #[test]
    fn map_entries_are_unique() {
        let mut langs: Vec<&str> = LANGUAGE_CODE_MAP.iter().map(|(from, _)| *from).collect();
        langs.sort_unstable();
        langs.dedup();
        assert_eq!(langs.len(), LANGUAGE_CODE_MAP.len());

        let mut countries: Vec<&str> = COUNTRY_CODE_MAP.iter().map(|(from, _)| *from).collect();
        countries.sort_unstable();
        countries.dedup();
        assert_eq!(countries.len(), COUNTRY_CODE_MAP.len());
    }
}
