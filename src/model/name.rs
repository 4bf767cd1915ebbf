use std::fmt;
use std::str::FromStr;

use crate::error::PathError;

pub const DATA_ATTRIBUTE: &str = "data-data-path";
pub const TILESET_ATTRIBUTE: &str = "data-tileset-path";
pub const WS_ATTRIBUTE: &str = "data-ws";

/// The closed set of path names a `PathSet` exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LogicalName {
    Data,
    Font,
    Gui,
    Music,
    Sounds,
    Sprites,
    Weather,
    Achievements,
    Tileset,
    Ws,
}

impl LogicalName {
    pub const COUNT: usize = 10;

    pub const ALL: [LogicalName; Self::COUNT] = [
        LogicalName::Data,
        LogicalName::Font,
        LogicalName::Gui,
        LogicalName::Music,
        LogicalName::Sounds,
        LogicalName::Sprites,
        LogicalName::Weather,
        LogicalName::Achievements,
        LogicalName::Tileset,
        LogicalName::Ws,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalName::Data => "data",
            LogicalName::Font => "font",
            LogicalName::Gui => "gui",
            LogicalName::Music => "music",
            LogicalName::Sounds => "sounds",
            LogicalName::Sprites => "sprites",
            LogicalName::Weather => "weather",
            LogicalName::Achievements => "achievements",
            LogicalName::Tileset => "tileset",
            LogicalName::Ws => "ws",
        }
    }

    /// Where the value for this name comes from.
    pub fn origin(&self) -> Origin {
        match self {
            LogicalName::Data => Origin::Attribute(DATA_ATTRIBUTE),
            LogicalName::Font => Origin::Derived(LogicalName::Data, "/font"),
            LogicalName::Gui => Origin::Derived(LogicalName::Data, "/gui"),
            LogicalName::Music => Origin::Derived(LogicalName::Data, "/music"),
            LogicalName::Sounds => Origin::Derived(LogicalName::Data, "/sounds"),
            LogicalName::Sprites => Origin::Derived(LogicalName::Data, "/sprites"),
            LogicalName::Weather => Origin::Derived(LogicalName::Sprites, "/weather"),
            LogicalName::Achievements => Origin::Derived(LogicalName::Sprites, "/achievements"),
            LogicalName::Tileset => Origin::Attribute(TILESET_ATTRIBUTE),
            LogicalName::Ws => Origin::Attribute(WS_ATTRIBUTE),
        }
    }

    /// Host attribute for names read directly from the document.
    pub fn attribute(&self) -> Option<&'static str> {
        match self.origin() {
            Origin::Attribute(attribute) => Some(attribute),
            Origin::Derived(..) => None,
        }
    }

    /// Base name and suffix for derived names.
    pub fn derivation(&self) -> Option<(LogicalName, &'static str)> {
        match self.origin() {
            Origin::Attribute(_) => None,
            Origin::Derived(base, suffix) => Some((base, suffix)),
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Read from the host attribute and validated.
    Attribute(&'static str),
    /// Base value with a fixed suffix appended. Not re-validated.
    Derived(LogicalName, &'static str),
}

impl fmt::Display for LogicalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogicalName {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogicalName::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| PathError::UnknownName(s.to_string()))
    }
}
