//! Textual conversion of a collection's contents

use crate::{RenderConfig, RenderStyle, Result, SequenceError, ValueCollection};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fmt;
use tracing::debug;
use valseq_domain::{DeepClone, ValueEquality};

impl<T> ValueCollection<T>
where
    T: ValueEquality + DeepClone + Serialize,
{
    /// Render the contents as a compact JSON array
    pub fn to_json_string(&self) -> Result<String> {
        self.render(&RenderConfig::compact())
    }

    /// Render the contents using `config`
    ///
    /// # Errors
    /// Returns an error if `config` is invalid or an element fails to serialize.
    pub fn to_locale_string(&self, config: &RenderConfig) -> Result<String> {
        config.validate()?;
        self.render(config)
    }

    fn render(&self, config: &RenderConfig) -> Result<String> {
        let items = self.as_slice();
        let rendered = match config.style {
            RenderStyle::Compact => serde_json::to_string(items)?,
            RenderStyle::Pretty => {
                let indent = " ".repeat(config.indent_width);
                let mut buffer = Vec::new();
                let formatter = PrettyFormatter::with_indent(indent.as_bytes());
                let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
                items.serialize(&mut serializer)?;
                String::from_utf8(buffer).map_err(|e| SequenceError::Render(e.to_string()))?
            }
        };
        debug!("Rendered {} elements as {:?}", items.len(), config.style);
        Ok(rendered)
    }
}

/// Compact JSON, same as [`ValueCollection::to_json_string`]
impl<T> fmt::Display for ValueCollection<T>
where
    T: ValueEquality + DeepClone + Serialize,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.to_json_string().map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Debug, Clone, Serialize)]
    struct Entry {
        title: String,
    }

    impl ValueEquality for Entry {
        fn compare(&self, other: &Self) -> bool {
            self.title == other.title
        }
    }

    valseq_domain::deep_clone_via_clone!(Entry);

    #[derive(Debug, Clone)]
    struct Unrenderable;

    impl Serialize for Unrenderable {
        fn serialize<S: serde::Serializer>(&self, _serializer: S) -> std::result::Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("not renderable"))
        }
    }

    impl ValueEquality for Unrenderable {
        fn compare(&self, _other: &Self) -> bool {
            true
        }
    }

    valseq_domain::deep_clone_via_clone!(Unrenderable);

    #[test]
    fn test_compact_rendering() {
        let collection = ValueCollection::new(&[
            Entry { title: "a".into() },
            Entry { title: "b".into() },
        ]);
        assert_eq!(collection.to_json_string().unwrap(), r#"[{"title":"a"},{"title":"b"}]"#);
        assert_eq!(collection.to_string(), r#"[{"title":"a"},{"title":"b"}]"#);
    }

    #[test]
    fn test_empty_rendering() {
        let collection: ValueCollection<i32> = ValueCollection::default();
        assert_eq!(collection.to_json_string().unwrap(), "[]");
    }

    #[test]
    fn test_pretty_rendering_uses_indent() {
        let collection = ValueCollection::new(&[1, 2]);
        let rendered = collection.to_locale_string(&RenderConfig::pretty(4)).unwrap();
        assert_eq!(rendered, "[\n    1,\n    2\n]");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let collection = ValueCollection::new(&[1]);
        let result = collection.to_locale_string(&RenderConfig::pretty(0));
        assert!(matches!(result, Err(SequenceError::Config(_))));
    }

    #[test]
    fn test_serialization_failure_is_reported() {
        let collection = ValueCollection::new(&[Unrenderable]);
        assert!(matches!(collection.to_json_string(), Err(SequenceError::Render(_))));
    }

    #[test]
    fn test_rendering_reflects_latest_state() {
        let mut collection = ValueCollection::new(&[1]);
        collection.push([2]);
        assert_eq!(collection.to_json_string().unwrap(), "[1,2]");

        let by_key: HashMap<&str, ValueCollection<i32>> = HashMap::from([("k", collection)]);
        assert_eq!(serde_json::to_string(&by_key).unwrap(), r#"{"k":[1,2]}"#);
    }
}
