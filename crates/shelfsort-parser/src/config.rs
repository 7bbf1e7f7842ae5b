//! Parser configuration.

/// Knobs controlling how raw names are normalized before parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParserConfig {
    /// Replace underscores with spaces before zone splitting. Scan releases
    /// routinely use `_` as a word separator.
    pub replace_underscores: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            replace_underscores: true,
        }
    }
}

impl ParserConfig {
    pub fn builder() -> ParserConfigBuilder {
        ParserConfigBuilder::default()
    }
}

/// Builder for [`ParserConfig`].
#[derive(Debug, Default)]
pub struct ParserConfigBuilder {
    replace_underscores: Option<bool>,
}

impl ParserConfigBuilder {
    pub fn replace_underscores(mut self, value: bool) -> Self {
        self.replace_underscores = Some(value);
        self
    }

    pub fn build(self) -> ParserConfig {
        let defaults = ParserConfig::default();
        ParserConfig {
            replace_underscores: self
                .replace_underscores
                .unwrap_or(defaults.replace_underscores),
        }
    }
}
