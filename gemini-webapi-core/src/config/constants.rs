/// Configuration file lookup constants
pub mod files {
    pub const CONFIG_FILE_NAME: &str = "gemini-webapi.toml";
    pub const CONFIG_DIR_NAME: &str = ".gemini-webapi";
}

/// Defaults shared by the response data model
pub mod model {
    /// Title given to images the upstream service did not label
    pub const DEFAULT_IMAGE_TITLE: &str = "[Image]";
    /// Continuation metadata is at most `[cid, rid, rcid]`
    pub const MAX_METADATA_TOKENS: usize = 3;
}

/// Display and logging defaults
pub mod defaults {
    pub const LOG_LEVEL: &str = "warn";
    pub const SHOW_THOUGHTS: bool = true;
    pub const SHOW_IMAGES: bool = true;
    pub const SHOW_METADATA: bool = false;
    /// URLs longer than this are shortened when an image is displayed
    pub const IMAGE_URL_DISPLAY_LIMIT: usize = 20;
}
