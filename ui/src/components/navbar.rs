use leptos::prelude::*;

use crate::data::{BRAND, NAV_LINKS, NavLink};
use crate::page::{PageHandle, ScrollLock, use_page};

/// Mobile menu state. Open exactly while it holds the page scroll lock, so
/// closing or dropping it always gives scrolling back.
pub struct Menu {
    page: PageHandle,
    lock: Option<ScrollLock>,
}

impl Menu {
    pub fn new(page: PageHandle) -> Self {
        Self { page, lock: None }
    }

    pub fn is_open(&self) -> bool {
        self.lock.is_some()
    }

    /// Returns the new state.
    pub fn toggle(&mut self) -> bool {
        match self.lock {
            Some(_) => self.lock = None,
            None => self.lock = Some(ScrollLock::acquire(self.page.clone())),
        }
        self.is_open()
    }

    pub fn close(&mut self) {
        self.lock = None;
    }
}

/// What the navbar's handlers drive: the `Menu` plus a signal mirroring its
/// state for the view. Closes the menu when its owner is cleaned up.
#[derive(Copy, Clone)]
pub struct MenuControl {
    menu: StoredValue<Menu>,
    open: RwSignal<bool>,
}

impl MenuControl {
    pub fn new(page: PageHandle) -> Self {
        let menu = StoredValue::new(Menu::new(page));
        on_cleanup(move || {
            menu.try_update_value(Menu::close);
        });
        Self { menu, open: RwSignal::new(false) }
    }

    /// Tracked read for the view.
    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn toggle(&self) {
        if let Some(now) = self.menu.try_update_value(Menu::toggle) {
            self.open.set(now);
        }
    }

    pub fn close(&self) {
        self.menu.try_update_value(Menu::close);
        self.open.set(false);
    }

    /// Overlay link handler. No prevent_default, so the anchor still
    /// navigates.
    pub fn follow_link(&self) {
        self.close();
    }
}

pub fn overlay_class(open: bool) -> String {
    format!(
        "fixed inset-0 z-[105] md:hidden transition-all duration-500 ease-in-out {}",
        if open { "opacity-100 pointer-events-auto" } else { "opacity-0 pointer-events-none" }
    )
}

pub fn overlay_link_class(open: bool) -> String {
    format!(
        "text-5xl font-[100] tracking-tighter hover:text-primary transition-all duration-300 transform {}",
        if open { "translate-y-0 opacity-100" } else { "translate-y-10 opacity-0" }
    )
}

/// Staggered entrance, 100ms per link.
pub fn transition_delay(index: usize) -> String {
    format!("transition-delay: {}ms", index * 100)
}

pub fn toggle_glyph(open: bool) -> &'static str {
    if open { "close" } else { "menu" }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let menu = MenuControl::new(use_page());

    view! {
        <nav class="fixed top-6 left-1/2 -translate-x-1/2 z-[110] w-[90%] max-w-[1200px]">
            <div class="glass rounded-full px-6 py-3 flex items-center justify-between shadow-2xl">
                <div class="flex items-center gap-3">
                    <div class="size-8 bg-primary rounded-full flex items-center justify-center">
                        <span class="material-symbols-outlined text-white text-sm">"rocket_launch"</span>
                    </div>
                    <span class="font-bold tracking-tight text-lg">{BRAND}</span>
                </div>

                <div class="hidden md:flex items-center gap-8">
                    <For
                        each=|| NAV_LINKS.iter()
                        key=|link| link.href
                        children=|link: &'static NavLink| view! {
                            <a
                                class="text-xs uppercase tracking-widest font-semibold hover:text-primary transition-colors"
                                href=link.href
                            >
                                {link.label}
                            </a>
                        }
                    />
                </div>

                <div class="flex items-center gap-3">
                    <button class="hidden sm:block bg-primary hover:bg-primary/80 text-white px-6 py-2 rounded-full text-xs font-bold transition-all transform active:scale-95 shadow-lg shadow-primary/20 uppercase tracking-wider">
                        "Connect"
                    </button>
                    <button
                        class="md:hidden size-10 flex items-center justify-center rounded-full hover:bg-white/5 transition-colors"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu.is_open().to_string()
                        on:click=move |_| menu.toggle()
                    >
                        <span class="material-symbols-outlined text-white">
                            {move || toggle_glyph(menu.is_open())}
                        </span>
                    </button>
                </div>
            </div>
        </nav>

        <div class=move || overlay_class(menu.is_open())>
            <div class="absolute inset-0 bg-background-dark/95 backdrop-blur-2xl"></div>
            <div class="relative h-full flex flex-col items-center justify-center p-8">
                <div class="flex flex-col items-center gap-10 text-center">
                    <For
                        each=|| NAV_LINKS.iter().enumerate()
                        key=|(_, link)| link.href
                        children=move |(i, link): (usize, &'static NavLink)| view! {
                            <a
                                href=link.href
                                on:click=move |_| menu.follow_link()
                                class=move || overlay_link_class(menu.is_open())
                                style=transition_delay(i)
                            >
                                {link.label}
                            </a>
                        }
                    />
                </div>
            </div>
        </div>
    }
}
