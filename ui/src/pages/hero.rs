use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="relative min-h-screen flex flex-col items-start justify-center pt-32 px-8 md:px-24 bg-transparent">
            <div class="max-w-[1100px] z-10 text-left">
                <div class="inline-flex items-center gap-3 glass border border-white/10 rounded-full px-4 py-1.5 mb-10">
                    <span class="size-1.5 bg-primary rounded-full animate-pulse"></span>
                    <span class="text-[10px] font-bold uppercase tracking-[0.3em] text-white/80">
                        "Innovating the Digital Frontier"
                    </span>
                </div>

                <h1 class="text-7xl md:text-[9.5rem] font-[100] leading-[0.85] md:leading-[0.95] tracking-tighter mb-10">
                    "Innovating " <br class="hidden md:block"/>
                    <span class="font-accent italic text-primary/90 font-[300]">"Digital"</span> " " <br/>
                    "Frontier"
                </h1>

                <p class="text-lg md:text-2xl text-slate-400 font-[200] max-w-2xl mb-14 leading-relaxed">
                    "Crafting the future through sophisticated design, high-precision engineering, and strategic global business solutions."
                </p>

                <div class="flex flex-col sm:flex-row items-center gap-6">
                    <a
                        href="#main"
                        class="w-full sm:w-auto bg-primary text-white h-16 px-12 rounded-full font-medium text-lg hover:shadow-[0_0_40px_rgba(55,19,236,0.3)] transition-all flex items-center justify-center gap-3 group"
                    >
                        "Explore Work"
                        <span class="material-symbols-outlined transition-transform group-hover:translate-x-1">"arrow_forward"</span>
                    </a>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn action_scrolls_to_main() {
        let html = view! { <Hero/> }.to_html();

        assert!(html.contains(r##"href="#main""##));
        assert!(html.contains("Explore Work"));
        assert!(html.contains("<h1"));
    }
}
