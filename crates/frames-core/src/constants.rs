//! Built-in category lists and resolution constants.

/// Long-lived reference files served by the static registry.
pub const STATIC_FRAMES: &[&str] = &[
    "ASTROMETRY_WCS",
    "BADPIX_TABLE",
    "EXTINCT_TABLE",
    "FILTER_LIST",
    "GEOMETRY_TABLE",
    "LINE_CATALOG",
    "RAMAN_LINES",
    "SKY_LINES",
    "STD_FLUX_TABLE",
    "VIGNETTING_MASK",
];

/// Optional frames set per run in the `frames` block.
pub const SPECIAL_FRAMES: &[&str] = &["OUTPUT_WCS", "OFFSET_LIST", "SKY_MASK", "AUTOCAL_FACTORS"];

/// The special category that may name a catalog record instead of a path.
pub const OFFSET_LIST: &str = "OFFSET_LIST";

/// Categories a processing step drops unless its run config includes them.
pub const DEFAULT_EXCLUDED_FRAMES: &[&str] = &["MASTER_DARK", "NONLINEARITY_GAIN"];

/// Day-offset tolerances wider than the default.
pub const DEFAULT_DAY_OFFSETS: &[(&str, u32)] =
    &[("STD_TELLURIC", 5), ("STD_RESPONSE", 5), ("TWILIGHT_CUBE", 3)];

/// Tolerance for every category missing from the offsets table.
pub const DEFAULT_DAY_OFFSET: u32 = 1;

/// Allowed payload counts for a catalog-resolved frame: a single file or one
/// file per IFU.
pub const ALLOWED_FILE_COUNTS: &[usize] = &[1, 24];

/// Extensions recognized as FITS files.
pub const FITS_EXTENSIONS: &[&str] = &[".fits", ".fits.fz", ".fits.gz"];

/// Extensions the static registry can classify from the primary header.
pub const CLASSIFIABLE_EXTENSIONS: &[&str] = &[".fits", ".fits.fz"];

/// Header keyword holding the product category.
pub const CATEGORY_KEYWORD: &str = "HIERARCH ESO PRO CATG";

/// Exclusion block applied to every category.
pub const RAW_BLOCK: &str = "raw";

/// Reserved keys of a run `frames` block.
pub const KEY_EXCLUDE: &str = "exclude";
pub const KEY_INCLUDE: &str = "include";
pub const KEY_OFFSETS: &str = "offsets";

/// Environment variable read by `init_tracing`.
pub const LOG_ENV: &str = "FRAMES_LOG";
