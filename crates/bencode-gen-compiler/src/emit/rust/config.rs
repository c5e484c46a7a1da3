//! Configuration for Rust emission.

/// Path of the runtime helpers in the default setup.
pub const DEFAULT_RUNTIME: &str = "bencode_gen_core::runtime";

/// Configuration for Rust emission.
#[derive(Clone, Debug)]
pub struct Config {
    /// Module path that provides `Bencode` and the write helpers
    pub(crate) runtime: String,
    /// Whether to emit the "Code generated" header
    pub(crate) header: bool,
    /// Generator version recorded in the header
    pub(crate) version: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            runtime: DEFAULT_RUNTIME.to_string(),
            header: true,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the runtime module path, e.g. `crate::bencode`.
    pub fn runtime(mut self, path: impl Into<String>) -> Self {
        self.runtime = path.into();
        self
    }

    /// Set whether to emit the generated-file header.
    pub fn header(mut self, value: bool) -> Self {
        self.header = value;
        self
    }

    /// Override the version in the header (stable snapshots).
    pub fn version(mut self, value: impl Into<String>) -> Self {
        self.version = value.into();
        self
    }
}
