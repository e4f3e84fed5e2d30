use leptos::prelude::*;

use crate::data::{BRAND, FOOTER_NETWORK, NavLink};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="relative pt-40 pb-16 px-6 overflow-hidden border-t border-white/5 bg-transparent">
            <div class="max-w-[1400px] mx-auto grid grid-cols-1 md:grid-cols-4 gap-20 mb-32 relative z-10">
                <div class="md:col-span-1">
                    <div class="flex items-center gap-4 mb-10">
                        <div class="size-8 bg-primary rounded-full"></div>
                        <span class="font-bold tracking-tight text-2xl">{BRAND}</span>
                    </div>
                    <p class="text-slate-500 text-base font-[200] leading-relaxed">
                        "Leading the charge in premium digital solutions."
                    </p>
                </div>
                <div>
                    <h4 class="font-bold text-[10px] uppercase tracking-[0.4em] mb-10 text-white/40">"Network"</h4>
                    <ul class="space-y-6">
                        {FOOTER_NETWORK
                            .iter()
                            .map(|link: &'static NavLink| view! {
                                <li>
                                    <a class="text-sm text-slate-500 hover:text-primary transition-colors font-[200]" href=link.href>
                                        {link.label}
                                    </a>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
            <div class="max-w-[1400px] mx-auto pt-16 border-t border-white/5 flex flex-col md:flex-row items-center justify-between gap-8 text-white/20 text-[10px] font-bold tracking-widest relative z-10">
                <p>"© 2024 MILYAR GROUP. ALL RIGHTS RESERVED."</p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn lists_network_links_and_copyright() {
        let html = view! { <Footer/> }.to_html();

        for link in FOOTER_NETWORK {
            assert!(html.contains(link.label));
        }
        assert!(html.contains("Network"));
        assert!(html.contains("ALL RIGHTS RESERVED"));
    }
}
