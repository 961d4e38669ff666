use std::path::Path;

/// Sink for advisory diagnostics. Implementations must not feed back into scan results.
pub trait Notes {
    fn note(&self, message: &str);
}

/// Discovery settings, whatever their source.
pub trait ConfigProvider {
    fn manifest_path(&self) -> &Path;
    /// Overrides the manifest's `extra.discover-d7-contrib` option when set.
    fn contrib_dir(&self) -> Option<&Path>;
    fn namespace(&self) -> &str;
}
