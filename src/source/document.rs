use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::PathError;
use crate::source::ConfigSource;

// Comments and the root tag in one pass, so a `<!--` inside a quoted value
// cannot hide the rest of the tag.
static ROOT_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)(?P<comment><!--.*?-->)|<html(?P<attrs>\s(?:[^>"']|"[^"]*"|'[^']*')*)?>"#)
        .expect("valid root tag regex")
});
static ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:#([0-9]+)|#[xX]([0-9a-fA-F]+)|(quot|apos|lt|gt|amp));")
        .expect("valid entity regex")
});
static ATTRIBUTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([^\s"'<>/=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#)
        .expect("valid attribute regex")
});

/// Attributes of a markup document's root `<html>` element.
#[derive(Debug, Clone, Default)]
pub struct HostDocument {
    attributes: HashMap<String, String>,
}

impl HostDocument {
    pub fn parse(markup: &str) -> Self {
        let root = ROOT_TAG_RE
            .captures_iter(markup)
            .find(|captures| captures.name("comment").is_none());

        let Some(captures) = root else {
            tracing::warn!("host document has no <html> root element");
            return Self::default();
        };

        let mut attributes = HashMap::new();
        if let Some(raw) = captures.name("attrs") {
            for attr in ATTRIBUTE_RE.captures_iter(raw.as_str()) {
                let name = attr[1].to_ascii_lowercase();
                let value = attr
                    .get(2)
                    .or_else(|| attr.get(3))
                    .or_else(|| attr.get(4))
                    .map(|m| decode_entities(m.as_str()))
                    .unwrap_or_default();

                // Duplicates are ignored, as browsers do.
                attributes.entry(name).or_insert(value);
            }
        }

        tracing::debug!(count = attributes.len(), "parsed root element attributes");
        Self { attributes }
    }

    pub fn read(path: &Path) -> Result<Self, PathError> {
        let markup = fs::read_to_string(path).map_err(|source| PathError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&markup))
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

impl ConfigSource for HostDocument {
    fn read_config_value(&self, key: &str) -> Option<String> {
        self.attribute(key).map(str::to_string)
    }
}

fn decode_entities(value: &str) -> String {
    if !value.contains('&') {
        return value.to_string();
    }

    ENTITY_RE
        .replace_all(value, |caps: &regex::Captures| {
            let code_point = if let Some(dec) = caps.get(1) {
                dec.as_str().parse::<u32>().ok()
            } else if let Some(hex) = caps.get(2) {
                u32::from_str_radix(hex.as_str(), 16).ok()
            } else {
                let named = match &caps[3] {
                    "quot" => '"',
                    "apos" => '\'',
                    "lt" => '<',
                    "gt" => '>',
                    _ => '&',
                };
                return named.to_string();
            };

            // Invalid code points stay as written.
            match code_point.and_then(char::from_u32) {
                Some(c) => c.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
