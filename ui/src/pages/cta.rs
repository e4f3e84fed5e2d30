use leptos::prelude::*;

#[component]
pub fn Cta() -> impl IntoView {
    view! {
        <section class="py-40 px-6 relative z-10 bg-transparent">
            <div class="max-w-[1400px] mx-auto glass rounded-[4rem] p-16 md:p-32 relative overflow-hidden flex flex-col md:flex-row items-center justify-between gap-16 border-white/5 shadow-2xl">
                <div class="absolute inset-0 bg-primary/5"></div>
                <div class="relative z-10 max-w-2xl text-center md:text-left">
                    <h2 class="text-5xl md:text-8xl font-[100] text-white mb-10 leading-[0.9] tracking-tight">
                        "Let's craft the " <span class="font-accent italic font-[300] text-primary">"future"</span> "."
                    </h2>
                    <p class="text-slate-400 text-2xl font-[200]">
                        "Accelerate your next big initiative with our high-precision innovation team."
                    </p>
                </div>
                <div class="relative z-10">
                    <button class="bg-primary text-white h-16 px-12 rounded-full font-bold text-lg hover:shadow-[0_20px_60px_rgba(55,19,236,0.4)] transition-all hover:-translate-y-2 uppercase tracking-widest whitespace-nowrap">
                        "Start Now"
                    </button>
                </div>
            </div>
        </section>
    }
}
