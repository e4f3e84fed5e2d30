//! The few document-level style properties the site touches outside its own
//! subtree, behind a host trait so they can be swapped for an in-memory page.

#[cfg(feature = "web")]
mod browser;
mod guard;
mod memory;

use std::sync::Arc;

use leptos::prelude::use_context;

#[cfg(feature = "web")]
pub use browser::BrowserPage;
pub use guard::{ScrollLock, SmoothScroll, StyleOverride};
pub use memory::MemoryPage;

/// Element whose inline style is read or written.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Surface {
    /// `document.body`
    Body,
    /// `document.documentElement`
    Root,
}

pub trait PageHost: Send + Sync {
    /// Current inline value, empty when unset.
    fn style(&self, surface: Surface, property: &str) -> anyhow::Result<String>;

    /// An empty `value` removes the property.
    fn set_style(&self, surface: Surface, property: &str, value: &str) -> anyhow::Result<()>;
}

#[derive(Clone)]
pub struct PageHandle(Arc<dyn PageHost>);

impl PageHandle {
    pub fn new(host: impl PageHost + 'static) -> Self {
        Self(Arc::new(host))
    }

    #[cfg(all(feature = "web", target_arch = "wasm32"))]
    fn fallback() -> Self {
        Self::new(BrowserPage)
    }

    #[cfg(not(all(feature = "web", target_arch = "wasm32")))]
    fn fallback() -> Self {
        Self::new(MemoryPage::default())
    }

    pub fn style(&self, surface: Surface, property: &str) -> anyhow::Result<String> {
        self.0.style(surface, property)
    }

    pub fn set_style(&self, surface: Surface, property: &str, value: &str) -> anyhow::Result<()> {
        self.0.set_style(surface, property, value)
    }
}

/// Host provided through context. Without one, the live document in the
/// browser, or a detached in-memory page on native targets.
pub fn use_page() -> PageHandle {
    use_context::<PageHandle>().unwrap_or_else(PageHandle::fallback)
}
