/// Defaults shared by the config layer and the CLI.

// Input/output locations used when nothing else is configured
pub const DEFAULT_INPUT_GLOB: &str = "./dataset_redfin-search_*.json";
pub const DEFAULT_OUTPUT_PATH: &str = "./quick_deal_import.csv";
pub const DEFAULT_CONFIG_FILE: &str = "deal_csv.toml";

// Environment overrides
pub const ENV_INPUT: &str = "DEAL_CSV_INPUT";
pub const ENV_OUTPUT: &str = "DEAL_CSV_OUTPUT";
pub const ENV_LAYOUT: &str = "DEAL_CSV_LAYOUT";

/// `uiPropertyType` codes treated as multi-family for unit inference.
/// 4 is the multi-family listing type; 13 is the duplex/triplex type.
pub const DEFAULT_MULTI_FAMILY_CODES: &[i64] = &[4, 13];

/// Static `uiPropertyType` label table.
pub const PROPERTY_TYPE_LABELS: &[(i64, &str)] = &[
    (1, "Single-family"),
    (3, "Townhouse/Row"),
    (4, "Multi-family"),
    (5, "Vacant Land"),
    (6, "Single-family"),
    (13, "Duplex/Triplex"),
];

/// Number of per-unit bedroom columns in every layout.
pub const UNIT_BED_SLOTS: usize = 4;
