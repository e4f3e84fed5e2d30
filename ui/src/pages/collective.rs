use leptos::prelude::*;

use crate::data::{CAPABILITIES, Capability};

const CARD: &str = "glass p-14 rounded-[2.5rem] group transition-all duration-700 hover:-translate-y-4 border-t-primary/20";

#[component]
fn CapabilityCard(capability: &'static Capability) -> impl IntoView {
    view! {
        <div class=CARD>
            <div class="size-20 bg-primary/5 border border-white/5 rounded-full flex items-center justify-center mx-auto mb-12 transition-all group-hover:bg-primary group-hover:shadow-[0_0_50px_rgba(55,19,236,0.4)]">
                <span class="material-symbols-outlined text-primary group-hover:text-white text-4xl transition-colors">
                    {capability.icon}
                </span>
            </div>
            <h3 class="text-2xl font-[300] mb-6 tracking-tight">{capability.title}</h3>
            <p class="text-slate-400 text-base font-[200] leading-relaxed mb-12">{capability.description}</p>
            // decorative, nothing is bound to it
            <button class="w-full h-14 rounded-full border border-white/5 hover:border-primary/50 text-[10px] font-bold transition-all uppercase tracking-[0.3em] text-white/40 hover:text-white">
                "View Openings"
            </button>
        </div>
    }
}

#[component]
pub fn Collective() -> impl IntoView {
    view! {
        <section id="collective" class="py-40 px-6 max-w-[1400px] mx-auto text-center relative z-10 bg-transparent scroll-mt-32">
            <h2 class="text-5xl md:text-7xl font-[100] tracking-tighter mb-8">
                "The " <span class="font-accent italic text-primary/80 font-[300]">"Collective"</span>
            </h2>
            <p class="text-slate-400 font-[200] text-xl max-w-2xl mx-auto mb-24">
                "We are always looking for visionary talent to help us redefine the limits of technology."
            </p>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                // capabilities have no id; index keys only hold while the list is static
                <For
                    each=|| CAPABILITIES.iter().enumerate()
                    key=|(idx, _)| *idx
                    children=|(_, capability): (usize, &'static Capability)| view! { <CapabilityCard capability/> }
                />
            </div>
        </section>
    }
}
