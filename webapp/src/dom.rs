use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use common::{
    SidebarError,
    sidebar::{SidebarPage, StyleElement},
};

// the live page, resolved through the global document
pub struct WebPage {
    document: Document,
}

impl WebPage {
    pub fn current() -> Result<Self, SidebarError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(SidebarError::NoDocument)?;

        Ok(WebPage { document })
    }
}

impl SidebarPage for WebPage {
    type Element = WebElement;

    // anything that is not an HtmlElement has no inline style to toggle
    fn lookup(&self, id: &str) -> Option<WebElement> {
        self.document
            .get_element_by_id(id)
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            .map(WebElement)
    }
}

#[derive(Clone, Debug)]
pub struct WebElement(pub HtmlElement);

impl StyleElement for WebElement {
    fn get_style(&self, property: &str) -> anyhow::Result<String> {
        self.0
            .style()
            .get_property_value(property)
            .map_err(|err| anyhow::Error::msg(format!("{err:?}")))
    }

    fn set_style(&self, property: &str, value: &str) -> anyhow::Result<()> {
        self.0
            .style()
            .set_property(property, value)
            .map_err(|err| anyhow::Error::msg(format!("{err:?}")))
    }

    fn clear_style(&self, property: &str) -> anyhow::Result<()> {
        self.0
            .style()
            .remove_property(property)
            .map(|_| ())
            .map_err(|err| anyhow::Error::msg(format!("{err:?}")))
    }
}
