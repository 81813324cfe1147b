// ==========================================
// Luggage Fulfillment Tracking - Brand Registry
// ==========================================
// Known customer brands and the Drive folder holding each brand's generated
// packing lists. Stuffing lists live in one shared folder.
// ==========================================

/// Brand name -> packing-list folder id.
pub const BRAND_FOLDERS: &[(&str, &str)] = &[
    ("BRIC'S", "1EAqFfId2tVsXQ4QprGAE1TWUpPIO9afe"),
    ("AWAY", "1y2EF3y6Bx_KFFFgpkeuXKWqcGADKqWln"),
    ("BAGASI", "1Jo15eAOwFFijNpSVS-bS2QZ3yVLQBXxd"),
    ("JULY", "1aupWedqxz4pU_74R1dVJNAf9c47rrRft"),
    ("LOJEL", "1jPjJm49g37uQtd7lwsa0Gyx1hrqeAylU"),
    ("MOUS", "1zjO6WUHiPs6wSe9UneUtk6UMUvuDyf3A"),
    ("STERLING PACIFIC", "1AYOgEygwimmdCJDbdCWVVnYnb7f_r_2I"),
    ("TIMBUK2", "1Lm94iOTqfpJMtn40aeTloC9yiSpatyDN"),
    ("TUMI", "1VLy_RXhQuOyin1e7ivu0-lRUr4KYxOrv"),
    ("VICTORINOX", "15uLz4zccRUiRBV4uAD91NhhkcR3jeO2a"),
];

/// Shared folder holding finalized stuffing lists.
pub const STUFFING_FOLDER: &str = "1bRklwcS6vvNTtTMF6BFObpyLT4VyDkZm";

/// Look up a brand's packing-list folder, case-insensitively.
pub fn folder_for_brand(brand: &str) -> Option<&'static str> {
    let needle = brand.trim();
    BRAND_FOLDERS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(needle))
        .map(|(_, folder)| *folder)
}

/// True when the brand is one the registry knows about.
pub fn is_known_brand(brand: &str) -> bool {
    folder_for_brand(brand).is_some()
}

/// All registered brand names, registry order.
pub fn brand_names() -> impl Iterator<Item = &'static str> {
    BRAND_FOLDERS.iter().map(|(name, _)| *name)
}
