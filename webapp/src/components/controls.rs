use dioxus::prelude::*;

use common::SidebarConfig;

#[derive(Clone, PartialEq, Props)]
pub struct ControlsSideBarProps {
    config: SidebarConfig,
    title: String,
    children: Element,
}

// the sidebar markup the toggle is bound to
//
// dioxus never writes inline styles on these nodes, so the toggle's overrides survive
// re-renders
#[component]
pub fn ControlsSideBar(props: ControlsSideBarProps) -> Element {
    let config = props.config;

    rsx! {
        div { id: "{config.container}", class: "controls-side-bar",
            div { id: "{config.content}", class: "controls-side-bar-content",
                h2 { "{props.title}" }
                {props.children}
            }
            div {
                id: "{config.fold_control}",
                class: "controls-fold-img-container",
                title: "Fold or unfold the controls",
                span { id: "{config.fold_button}", class: "controls-fold-button", "«" }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ControlsLayoutProps {
    config: SidebarConfig,
    status: Option<String>,
    children: Element,
}

#[component]
pub fn ControlsLayout(props: ControlsLayoutProps) -> Element {
    rsx! {
        div { class: "controls-layout",
            ControlsSideBar { config: props.config, title: "Controls".to_owned(),
                label { "Metric" }
                select {
                    option { "Pages" }
                    option { "Editors" }
                    option { "Edits" }
                }
            }
            main { class: "controls-main",
                match props.status {
                    Some(status) => rsx! {
                        p { class: "controls-status", "{status}" }
                    },
                    None => rsx! {},
                }
                {props.children}
            }
        }
    }
}
