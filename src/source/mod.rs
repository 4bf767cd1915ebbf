pub mod document;

use std::collections::BTreeMap;
use std::collections::HashMap;

pub use document::HostDocument;

/// Where raw path attributes come from.
///
/// The hosting environment hands one of these to the registry at startup.
/// Returning `None` means the key is absent; an empty string is a present
/// but empty value.
pub trait ConfigSource {
    fn read_config_value(&self, key: &str) -> Option<String>;
}

impl ConfigSource for HashMap<String, String> {
    fn read_config_value(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl ConfigSource for BTreeMap<String, String> {
    fn read_config_value(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<T: ConfigSource + ?Sized> ConfigSource for &T {
    fn read_config_value(&self, key: &str) -> Option<String> {
        (**self).read_config_value(key)
    }
}
