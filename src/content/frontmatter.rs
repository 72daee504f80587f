//! Front-matter parsing

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use crate::error::{ContentError, Result};

/// Untyped metadata from a front-matter block, in document order
pub type Metadata = IndexMap<String, serde_yaml::Value>;

/// Custom deserializer that handles both a single string and a list of strings
pub(crate) fn string_or_vec<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_string<E>(self, value: String) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value])
        }

        fn visit_seq<S>(self, mut seq: S) -> std::result::Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// A list of strings that also accepts a bare string
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub(crate) struct StringList(#[serde(deserialize_with = "string_or_vec")] pub Vec<String>);

/// Front-matter splitter
pub struct FrontMatter;

impl FrontMatter {
    /// Split content into metadata and body.
    ///
    /// Never fails: content without a front-matter block yields empty
    /// metadata and the whole input as body, and a block that cannot be
    /// parsed yields empty metadata and the text after the block.
    pub fn parse(content: &str) -> (Metadata, &str) {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        let (fence, format) = if content.starts_with("---") {
            ("---", BlockFormat::Yaml)
        } else if content.starts_with(";;;") {
            (";;;", BlockFormat::Json)
        } else {
            return (Metadata::new(), content);
        };

        let Some((block, body)) = split_fenced(content, fence) else {
            // No closing fence, treat as no front-matter
            return (Metadata::new(), content);
        };

        if format == BlockFormat::Yaml && !block.trim().is_empty() && !looks_like_yaml(block) {
            // A leading thematic break followed by prose
            return (Metadata::new(), content);
        }

        match parse_block(block, format) {
            Ok(metadata) => (metadata, body),
            Err(e) => {
                tracing::warn!("Ignoring front-matter: {}", e);
                (Metadata::new(), body)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockFormat {
    Yaml,
    Json,
}

/// Find the block between an opening fence line and the next line equal to
/// the fence. Returns (block, body after the closing line). Only the closing
/// line's own line break is consumed.
fn split_fenced<'a>(content: &'a str, fence: &str) -> Option<(&'a str, &'a str)> {
    let rest = content.strip_prefix(fence)?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == fence {
            let block = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Some((block, body));
        }
        offset += line.len();
    }

    None
}

/// Valid YAML front-matter has at least one line with a `key: value` shape
fn looks_like_yaml(block: &str) -> bool {
    block.lines().any(|line| {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return false;
        }
        let Some(colon_pos) = trimmed.find(':') else {
            return false;
        };
        let key = &trimmed[..colon_pos];
        let is_valid_key = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
            && !matches!(key, "http" | "https" | "ftp" | "mailto");
        let after_colon = &trimmed[colon_pos + 1..];
        is_valid_key && (after_colon.is_empty() || after_colon.starts_with(' '))
    })
}

fn parse_block(block: &str, format: BlockFormat) -> Result<Metadata> {
    if block.trim().is_empty() {
        return Ok(Metadata::new());
    }

    match format {
        BlockFormat::Yaml => serde_yaml::from_str::<Option<Metadata>>(block)
            .map(Option::unwrap_or_default)
            .map_err(|e| ContentError::MalformedFrontmatter(e.to_string())),
        BlockFormat::Json => serde_json::from_str::<Metadata>(block)
            .map_err(|e| ContentError::MalformedFrontmatter(e.to_string())),
    }
}
