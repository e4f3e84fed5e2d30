use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::pages::{
    collective::Collective, cta::Cta, footer::Footer, hero::Hero, projects::ProjectsSection,
};
use crate::page::{SmoothScroll, use_page};

/// Whole page. Smooth anchor scrolling is switched on for as long as this
/// is mounted and switched back to whatever it was on unmount.
#[component]
pub fn App() -> impl IntoView {
    let smooth = StoredValue::new(Some(SmoothScroll::acquire(use_page())));
    on_cleanup(move || {
        smooth.try_update_value(Option::take);
    });

    view! {
        <div class="relative w-full min-h-screen bg-transparent">
            <Navbar/>
            <Hero/>
            <ProjectsSection/>
            <Collective/>
            <Cta/>
            <Footer/>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{MemoryPage, PageHandle, PageHost, Surface};
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    fn mount(page: &MemoryPage) -> (Owner, String) {
        let owner = Owner::new();
        let html = owner.with(|| {
            provide_context(PageHandle::new(page.clone()));
            view! { <App/> }.to_html()
        });
        (owner, html)
    }

    #[test]
    fn smooth_scroll_lasts_for_mount_lifetime() {
        let page = MemoryPage::default().with_style(Surface::Root, "scroll-behavior", "auto").unwrap();

        let (owner, _) = mount(&page);
        assert_eq!(page.style(Surface::Root, "scroll-behavior").unwrap(), "smooth");

        owner.cleanup();
        assert_eq!(page.style(Surface::Root, "scroll-behavior").unwrap(), "auto");
    }

    #[test]
    fn sections_render_in_fixed_order() {
        let page = MemoryPage::default();
        let (owner, html) = mount(&page);

        let markers = [
            "<nav",
            "Explore Work",
            r#"id="main""#,
            r#"id="side-tracks""#,
            r#"id="collective""#,
            "Start Now",
            "<footer",
        ];
        let positions: Vec<_> = markers.iter().map(|m| html.find(m).unwrap()).collect();
        let mut sorted = positions.clone();
        sorted.sort();
        assert_eq!(positions, sorted);

        owner.cleanup();
    }

    #[test]
    fn mounting_leaves_body_scrollable() {
        let page = MemoryPage::default();
        let (owner, _) = mount(&page);

        assert_eq!(page.style(Surface::Body, "overflow").unwrap(), "");
        owner.cleanup();
    }
}
