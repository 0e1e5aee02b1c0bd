use serde::{Deserialize, Serialize};
use toml;
use tracing::{Level, debug, instrument};

pub const FOLD_CONTROL_ID: &str = "controls-fold-img-container";
pub const FOLD_BUTTON_ID: &str = "controls-fold-button";
pub const CONTENT_ID: &str = "controls-side-bar-content";
pub const CONTAINER_ID: &str = "controls-side-bar";

// sidebar configuration
//
// the ids the host page must provide before the toggle is initialized.  every field
// falls back to the stock controls layout, so an empty table is a valid config
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default)]
pub struct SidebarConfig {
    // clickable fold/unfold control; receives the margin override
    pub fold_control: String,

    // arrow inside the control; receives the rotation
    pub fold_button: String,

    // sidebar content region; receives display
    pub content: String,

    // outer sidebar container; receives the flex allocation
    pub container: String,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        SidebarConfig {
            fold_control: String::from(FOLD_CONTROL_ID),
            fold_button: String::from(FOLD_BUTTON_ID),
            content: String::from(CONTENT_ID),
            container: String::from(CONTAINER_ID),
        }
    }
}

// in order to extract the sidebar table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Default, Deserialize, Serialize)]
struct TomlConfigFile {
    #[serde(default)]
    sidebar: SidebarConfig,
}

impl SidebarConfig {
    #[instrument(level=Level::DEBUG, skip(doc))]
    pub fn from_toml(doc: &str) -> anyhow::Result<Self> {
        debug!("parsing sidebar config");

        let data: TomlConfigFile = toml::from_str(doc)
            .map_err(|err| anyhow::Error::msg(format!("failed to parse sidebar config: {err}")))?;

        Ok(data.sidebar)
    }

    // order matters: initialization reports the first id that fails to resolve
    pub fn ids(&self) -> [&str; 4] {
        [
            &self.fold_control,
            &self.fold_button,
            &self.content,
            &self.container,
        ]
    }
}
