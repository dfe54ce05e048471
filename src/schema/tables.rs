//! Table names and column layouts of the NeoFly and Little Navmap databases

pub const AIRPORT: &str = "airport";
pub const COMMERCIAL_HUBS: &str = "commercialHubs";
pub const MISSIONS: &str = "missions";
pub const CAREER: &str = "career";
pub const HANGAR: &str = "hangar";
pub const LOG: &str = "log";
pub const AIRCRAFT_DATA: &str = "aircraftData";

/// Airport columns shared by navdatareader, Little Navmap and NeoFly
pub const AIRPORT_COLUMNS: &[&str] = &[
    "airport_id",
    "file_id",
    "ident",
    "icao",
    "iata",
    "xpident",
    "name",
    "city",
    "state",
    "country",
    "region",
    "flatten",
    "fuel_flags",
    "has_avgas",
    "has_jetfuel",
    "has_tower_object",
    "tower_frequency",
    "atis_frequency",
    "awos_frequency",
    "asos_frequency",
    "unicom_frequency",
    "is_closed",
    "is_military",
    "is_addon",
    "num_com",
    "num_parking_gate",
    "num_parking_ga_ramp",
    "num_parking_cargo",
    "num_parking_mil_cargo",
    "num_parking_mil_combat",
    "num_approach",
    "num_runway_hard",
    "num_runway_soft",
    "num_runway_water",
    "num_runway_light",
    "num_runway_end_closed",
    "num_runway_end_vasi",
    "num_runway_end_als",
    "num_runway_end_ils",
    "num_apron",
    "num_taxi_path",
    "num_helipad",
    "num_jetway",
    "num_starts",
    "longest_runway_length",
    "longest_runway_width",
    "longest_runway_heading",
    "longest_runway_surface",
    "num_runways",
    "largest_parking_ramp",
    "largest_parking_gate",
    "rating",
    "is_3d",
    "scenery_local_path",
    "bgl_filename",
    "left_lonx",
    "top_laty",
    "right_lonx",
    "bottom_laty",
    "mag_var",
    "tower_altitude",
    "tower_lonx",
    "tower_laty",
    "transition_altitude",
    "altitude",
    "lonx",
    "laty",
];

/// Mission icon file names used by NeoFly 1.3 and the category codes 1.4 stores instead
pub const ICON_CODES: &[(&str, u8)] = &[
    ("partner.png", 1),
    ("freight.png", 2),
    ("mail.png", 3),
    ("sensfreight.png", 4),
    ("vip.png", 5),
    ("secretpax.png", 6),
    ("emergency.png", 7),
    ("susfreight.png", 8),
    ("transit.png", 9),
    ("humanitarian.png", 12),
];

/// Leading ICAO letters of the world regions seeded by the global sandbox
pub const SANDBOX_REGIONS: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'K', 'L', 'M', 'N', 'O', 'P', 'R', 'S', 'T', 'U',
    'V', 'W', 'Y', 'Z',
];
