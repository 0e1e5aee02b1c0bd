use std::{cell::RefCell, rc::Rc};

use gloo_console::error as console_error;
use tracing::{Level, debug, error, instrument};
use wasm_bindgen::{JsCast, closure::Closure};

use common::{SidebarConfig, SidebarError, SidebarToggle};

use crate::dom::WebPage;

// hook the sidebar toggle into the live page
//
// the component is shared between this function and the click listener, which is
// leaked on purpose: it has to outlive the dioxus effect that calls us and should
// only go away with the page
#[instrument(level=Level::DEBUG)]
pub fn install(config: &SidebarConfig) -> Result<(), SidebarError> {
    let result = attach(config);

    if let Err(err) = &result {
        console_error!(format!("Failed to set up the controls sidebar: {err}"));
    }

    result
}

fn attach(config: &SidebarConfig) -> Result<(), SidebarError> {
    let page = WebPage::current()?;

    let toggle = SidebarToggle::initialize(&page, config)?;
    let target = toggle.fold_control().0.clone();
    let toggle = Rc::new(RefCell::new(toggle));

    let on_click = Closure::wrap(Box::new(move || {
        // transitions are synchronous, so a click can never land mid-borrow
        match toggle.borrow_mut().on_click() {
            Ok(state) => debug!(hidden = state.is_hidden(), "sidebar toggled"),
            Err(err) => {
                error!(%err, "sidebar toggle failed");
                console_error!(format!("Failed to toggle the controls sidebar: {err}"));
            }
        }
    }) as Box<dyn FnMut()>);

    target
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|err| SidebarError::Listener {
            id: config.fold_control.clone(),
            reason: format!("{err:?}"),
        })?;

    on_click.forget();

    Ok(())
}
