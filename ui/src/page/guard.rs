use leptos::logging::warn;

use super::{PageHandle, Surface};

/// Sets one inline style property for as long as it lives, then puts back
/// whatever was there before.
pub struct StyleOverride {
    page: PageHandle,
    surface: Surface,
    property: &'static str,
    prior: String,
}

impl StyleOverride {
    pub fn apply(page: PageHandle, surface: Surface, property: &'static str, value: &str) -> Self {
        let prior = page.style(surface, property).unwrap_or_else(|e| {
            warn!("could not read {property}: {e:#}");
            String::new()
        });

        if let Err(e) = page.set_style(surface, property, value) {
            warn!("could not set {property}: {e:#}");
        }

        Self { page, surface, property, prior }
    }
}

impl Drop for StyleOverride {
    fn drop(&mut self) {
        if let Err(e) = self.page.set_style(self.surface, self.property, &self.prior) {
            warn!("could not restore {}: {e:#}", self.property);
        }
    }
}

/// Body scrolling suspended while held.
pub struct ScrollLock(#[allow(dead_code)] StyleOverride);

impl ScrollLock {
    pub fn acquire(page: PageHandle) -> Self {
        Self(StyleOverride::apply(page, Surface::Body, "overflow", "hidden"))
    }
}

/// Smooth in-page anchor scrolling while held.
pub struct SmoothScroll(#[allow(dead_code)] StyleOverride);

impl SmoothScroll {
    pub fn acquire(page: PageHandle) -> Self {
        Self(StyleOverride::apply(page, Surface::Root, "scroll-behavior", "smooth"))
    }
}
