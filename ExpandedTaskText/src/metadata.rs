//! Mod identity and bundled resource locations

use std::path::{Path, PathBuf};

/// Reverse-domain identifier the host uses to register the mod
pub const MOD_GUID: &str = "com.cj.ett";

/// Display name, also used as the log prefix
pub const MOD_NAME: &str = "Expanded Task Text";

/// Prefix applied to every log line emitted by the mod
pub const LOG_PREFIX: &str = "[Expanded Task Text]";

/// Mod author
pub const MOD_AUTHOR: &str = "Cj";

/// Server versions this mod is built against (semver range)
pub const SERVER_VERSION_RANGE: &str = "~4.0";

/// License identifier
pub const MOD_LICENSE: &str = "MIT";

/// Name of the directory holding the bundled data files
pub const RESOURCES_DIR_NAME: &str = "Resources";

/// Static description of the mod, as reported to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModMetadata {
    pub guid: &'static str,
    pub name: &'static str,
    pub author: &'static str,
    pub version: &'static str,
    pub server_version: &'static str,
    pub license: &'static str,
}

impl ModMetadata {
    /// Metadata for this build
    #[must_use]
    pub fn current() -> Self {
        Self {
            guid: MOD_GUID,
            name: MOD_NAME,
            author: MOD_AUTHOR,
            version: crate::VERSION,
            server_version: SERVER_VERSION_RANGE,
            license: MOD_LICENSE,
        }
    }

    /// The `Resources` directory that sits next to the running executable
    ///
    /// Falls back to a relative `Resources` path when the executable location
    /// cannot be determined.
    #[must_use]
    pub fn resources_directory() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .map_or_else(
                || PathBuf::from(RESOURCES_DIR_NAME),
                |dir| dir.join(RESOURCES_DIR_NAME),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_metadata() {
        let meta = ModMetadata::current();
        assert_eq!(meta.guid, "com.cj.ett");
        assert_eq!(meta.version, crate::VERSION);
        assert_eq!(LOG_PREFIX, format!("[{}]", meta.name));
    }

    #[test]
    fn test_resources_directory_name() {
        let dir = ModMetadata::resources_directory();
        assert!(dir.ends_with(RESOURCES_DIR_NAME));
    }
}
