#![allow(non_snake_case)]
use dioxus::prelude::*;

use tracing::{Level, warn};

use common::SidebarConfig;

mod components;
use components::controls::ControlsLayout;

mod dom;
mod style;
mod toggle;

const SIDEBAR_TOML: &str = include_str!("../sidebar.toml");

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

// a broken embedded config should not take the page down; the stock ids still work
fn sidebar_config() -> SidebarConfig {
    SidebarConfig::from_toml(SIDEBAR_TOML).unwrap_or_else(|err| {
        warn!(%err, "falling back to default sidebar ids");
        SidebarConfig::default()
    })
}

#[component]
pub fn App() -> Element {
    let config = use_hook(sidebar_config);
    let mut status = use_signal(|| None::<String>);

    // runs once, after the layout is in the document
    let install_config = config.clone();
    use_effect(move || {
        if let Err(err) = toggle::install(&install_config) {
            status.set(Some(err.to_string()));
        }
    });

    rsx! {
        style { "{style::CONTROLS}" }
        ControlsLayout { config, status: status(),
            p { "Select a metric in the controls sidebar, or fold it away to widen this panel." }
        }
    }
}
