//! Static reference data for the currencies shown on the board. Not derived
//! from any API response.

/// The base currency all snapshot rates are expressed against.
pub const BASE_CURRENCY: &str = "USD";

/// Currencies rendered in the quotes table and the converter selects.
pub const MAIN_CURRENCIES: [&str; 15] = [
    "USD", "EUR", "JPY", "GBP", "AUD", "CAD", "CHF", "CNY", "HKD", "NZD", "SEK", "KRW", "SGD",
    "NOK", "BRL",
];

/// Display metadata for one currency. `territory` is the lowercase two-letter
/// code used for the flag lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyDescriptor {
    pub code: &'static str,
    pub name: &'static str,
    pub territory: &'static str,
}

const DESCRIPTORS: [CurrencyDescriptor; 15] = [
    CurrencyDescriptor {
        code: "USD",
        name: "US Dollar",
        territory: "us",
    },
    CurrencyDescriptor {
        code: "EUR",
        name: "Euro",
        territory: "eu",
    },
    CurrencyDescriptor {
        code: "JPY",
        name: "Japanese Yen",
        territory: "jp",
    },
    CurrencyDescriptor {
        code: "GBP",
        name: "British Pound",
        territory: "gb",
    },
    CurrencyDescriptor {
        code: "AUD",
        name: "Australian Dollar",
        territory: "au",
    },
    CurrencyDescriptor {
        code: "CAD",
        name: "Canadian Dollar",
        territory: "ca",
    },
    CurrencyDescriptor {
        code: "CHF",
        name: "Swiss Franc",
        territory: "ch",
    },
    CurrencyDescriptor {
        code: "CNY",
        name: "Chinese Yuan",
        territory: "cn",
    },
    CurrencyDescriptor {
        code: "HKD",
        name: "Hong Kong Dollar",
        territory: "hk",
    },
    CurrencyDescriptor {
        code: "NZD",
        name: "New Zealand Dollar",
        territory: "nz",
    },
    CurrencyDescriptor {
        code: "SEK",
        name: "Swedish Krona",
        territory: "se",
    },
    CurrencyDescriptor {
        code: "KRW",
        name: "South Korean Won",
        territory: "kr",
    },
    CurrencyDescriptor {
        code: "SGD",
        name: "Singapore Dollar",
        territory: "sg",
    },
    CurrencyDescriptor {
        code: "NOK",
        name: "Norwegian Krone",
        territory: "no",
    },
    CurrencyDescriptor {
        code: "BRL",
        name: "Brazilian Real",
        territory: "br",
    },
];

/// Looks up the descriptor for a code. Main currencies without one are
/// silently skipped by the renderer.
pub fn descriptor(code: &str) -> Option<&'static CurrencyDescriptor> {
    DESCRIPTORS.iter().find(|d| d.code == code)
}

/// Regional-indicator flag for a two-letter territory code, e.g. "br" → 🇧🇷.
pub fn flag(territory: &str) -> String {
    territory
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .filter_map(|c| char::from_u32(0x1F1E6 + (c.to_ascii_uppercase() as u32 - 'A' as u32)))
        .collect()
}
