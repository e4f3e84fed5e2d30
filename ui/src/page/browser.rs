use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::{PageHost, Surface};

/// The live `window.document`. Looked up on every call so the handle stays
/// `Send + Sync`.
#[derive(Copy, Clone, Debug, Default)]
pub struct BrowserPage;

fn element(surface: Surface) -> anyhow::Result<HtmlElement> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| anyhow!("no document"))?;

    match surface {
        Surface::Body => document.body().ok_or_else(|| anyhow!("document has no body")),
        Surface::Root => document
            .document_element()
            .ok_or_else(|| anyhow!("document has no root element"))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| anyhow!("root element is not an HtmlElement")),
    }
}

impl PageHost for BrowserPage {
    fn style(&self, surface: Surface, property: &str) -> anyhow::Result<String> {
        element(surface)?
            .style()
            .get_property_value(property)
            .map_err(|e| anyhow!("reading {property}: {e:?}"))
    }

    fn set_style(&self, surface: Surface, property: &str, value: &str) -> anyhow::Result<()> {
        let style = element(surface)?.style();
        if value.is_empty() {
            style
                .remove_property(property)
                .map(|_| ())
                .map_err(|e| anyhow!("removing {property}: {e:?}"))
        } else {
            style
                .set_property(property, value)
                .map_err(|e| anyhow!("setting {property}: {e:?}"))
        }
    }
}
