// geos.rs

/// Counties covered by the listing search, in selector order.
pub const COUNTIES: &[&str] = &["Palm Beach", "Broward", "Miami-Dade"];

/// Incorporated municipalities per county. Each list is kept in the order it
/// is shown in the city selector.
pub const CITIES_BY_COUNTY: &[(&str, &[&str])] = &[
    (
        "Palm Beach",
        &[
            "Atlantis",
            "Belle Glade",
            "Boca Raton",
            "Boynton Beach",
            "Briny Breezes",
            "Cloud Lake",
            "Delray Beach",
            "Glen Ridge",
            "Golf",
            "Greenacres",
            "Gulf Stream",
            "Haverhill",
            "Highland Beach",
            "Hypoluxo",
            "Juno Beach",
            "Jupiter",
            "Jupiter Inlet Colony",
            "Lake Clarke Shores",
            "Lake Park",
            "Lake Worth Beach",
            "Lantana",
            "Loxahatchee Groves",
            "Manalapan",
            "Mangonia Park",
            "North Palm Beach",
            "Ocean Ridge",
            "Pahokee",
            "Palm Beach",
            "Palm Beach Gardens",
            "Palm Beach Shores",
            "Palm Springs",
            "Riviera Beach",
            "Royal Palm Beach",
            "South Bay",
            "South Palm Beach",
            "Tequesta",
            "Wellington",
            "West Palm Beach",
            "Westlake",
        ],
    ),
    (
        "Broward",
        &[
            "Coconut Creek",
            "Cooper City",
            "Coral Springs",
            "Dania Beach",
            "Davie",
            "Deerfield Beach",
            "Fort Lauderdale",
            "Hallandale Beach",
            "Hillsboro Beach",
            "Hollywood",
            "Lauderdale Lakes",
            "Lauderdale-by-the-Sea",
            "Lauderhill",
            "Lazy Lake",
            "Lighthouse Point",
            "Margate",
            "Miramar",
            "North Lauderdale",
            "Oakland Park",
            "Parkland",
            "Pembroke Park",
            "Pembroke Pines",
            "Plantation",
            "Pompano Beach",
            "Sea Ranch Lakes",
            "Southwest Ranches",
            "Sunrise",
            "Tamarac",
            "West Park",
            "Weston",
            "Wilton Manors",
        ],
    ),
    (
        "Miami-Dade",
        &[
            "Aventura",
            "Bal Harbour",
            "Bay Harbor Islands",
            "Biscayne Park",
            "Coral Gables",
            "Cutler Bay",
            "Doral",
            "El Portal",
            "Florida City",
            "Golden Beach",
            "Hialeah",
            "Hialeah Gardens",
            "Homestead",
            "Indian Creek",
            "Key Biscayne",
            "Medley",
            "Miami",
            "Miami Beach",
            "Miami Gardens",
            "Miami Lakes",
            "Miami Shores",
            "Miami Springs",
            "North Bay Village",
            "North Miami",
            "North Miami Beach",
            "Opa-locka",
            "Palmetto Bay",
            "Pinecrest",
            "South Miami",
            "Sunny Isles Beach",
            "Surfside",
            "Sweetwater",
            "Virginia Gardens",
            "West Miami",
        ],
    ),
];

pub fn cities_in(county: &str) -> Option<&'static [&'static str]> {
    CITIES_BY_COUNTY
        .iter()
        .find(|(name, _)| *name == county)
        .map(|(_, cities)| *cities)
}
