use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::error::{InvalidReason, PathError};
use crate::model::name::{LogicalName, Origin};
use crate::source::ConfigSource;

/// Read a directly-configured attribute and check it is root-relative.
///
/// The value is returned unmodified. Anything that does not start with `/`
/// (absolute URLs, `javascript:` and similar schemes) is rejected.
pub fn resolve_path<S: ConfigSource + ?Sized>(
    source: &S,
    attribute: &str,
) -> Result<String, PathError> {
    let value = source
        .read_config_value(attribute)
        .ok_or_else(|| PathError::invalid(attribute, InvalidReason::Missing))?;

    if value.is_empty() {
        return Err(PathError::invalid(attribute, InvalidReason::Empty));
    }
    if !value.starts_with('/') {
        return Err(PathError::invalid(
            attribute,
            InvalidReason::NotRootRelative(value),
        ));
    }

    tracing::debug!(attribute, path = %value, "resolved path reference");
    Ok(value)
}

/// The resolved, immutable set of client path prefixes.
///
/// Only [`PathSet::resolve`] builds one, so every instance has passed
/// validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSet {
    values: [String; LogicalName::COUNT],
}

impl PathSet {
    /// Resolve all paths from `source`. The first invalid attribute aborts.
    pub fn resolve<S: ConfigSource + ?Sized>(source: &S) -> Result<Self, PathError> {
        let mut values: [String; LogicalName::COUNT] = Default::default();

        for name in LogicalName::ALL {
            values[name.index()] = match name.origin() {
                Origin::Attribute(attribute) => resolve_path(source, attribute)?,
                Origin::Derived(base, suffix) => format!("{}{suffix}", values[base.index()]),
            };
        }

        Ok(Self { values })
    }

    pub fn get(&self, name: LogicalName) -> &str {
        &self.values[name.index()]
    }

    /// All paths in logical order.
    pub fn iter(&self) -> impl Iterator<Item = (LogicalName, &str)> {
        LogicalName::ALL.into_iter().map(|name| (name, self.get(name)))
    }

    pub fn data(&self) -> &str {
        self.get(LogicalName::Data)
    }

    pub fn font(&self) -> &str {
        self.get(LogicalName::Font)
    }

    pub fn gui(&self) -> &str {
        self.get(LogicalName::Gui)
    }

    pub fn music(&self) -> &str {
        self.get(LogicalName::Music)
    }

    pub fn sounds(&self) -> &str {
        self.get(LogicalName::Sounds)
    }

    pub fn sprites(&self) -> &str {
        self.get(LogicalName::Sprites)
    }

    pub fn weather(&self) -> &str {
        self.get(LogicalName::Weather)
    }

    pub fn achievements(&self) -> &str {
        self.get(LogicalName::Achievements)
    }

    pub fn tileset(&self) -> &str {
        self.get(LogicalName::Tileset)
    }

    pub fn ws(&self) -> &str {
        self.get(LogicalName::Ws)
    }
}

impl Serialize for PathSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(LogicalName::COUNT))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name.as_str(), value)?;
        }
        map.end()
    }
}
