use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_LINKS_PER_TASK: usize = 10;

/// Runtime switches for link handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkSettings {
    pub validate_urls: bool,
    pub show_link_icons: bool,
    pub max_links_per_task: usize,
}

impl Default for LinkSettings {
    fn default() -> Self {
        Self {
            validate_urls: true,
            show_link_icons: true,
            max_links_per_task: DEFAULT_MAX_LINKS_PER_TASK,
        }
    }
}
