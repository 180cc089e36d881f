use serde::Deserialize;

/// Options for route-text parsing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseOptions {
    /// Extract the prose overview preceding the section marker (default: true)
    #[serde(default = "default_true")]
    pub include_overview: bool,

    /// Override the section marker literal (default: the generator's
    /// "📍 ДЕТАЛЬНЫЙ МАРШРУТ:" delimiter)
    #[serde(default)]
    pub section_marker: Option<String>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            include_overview: true,
            section_marker: None,
        }
    }
}

fn default_true() -> bool {
    true
}
