use leptos::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::data::{MAIN_PROJECTS, Project, SIDE_PROJECTS};

/// "Flagship Series" then "Side Tracks". Cards are keyed by project id.
#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <div class="max-w-[1400px] mx-auto px-6 relative z-10 bg-transparent">
            <section id="main" class="pt-24 pb-10 scroll-mt-32">
                <div class="max-w-xl mb-16">
                    <h2 class="text-4xl md:text-6xl font-[100] tracking-tighter mb-4">
                        "Flagship " <span class="font-accent italic text-primary/80 font-[300]">"Series"</span>
                    </h2>
                    <p class="text-slate-400 font-[200] text-lg">
                        "Our core architectural breakthroughs in AI and financial systems."
                    </p>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-4 gap-6">
                    <For
                        each=|| MAIN_PROJECTS.iter()
                        key=|project| project.id
                        children=|project: &'static Project| view! { <ProjectCard project is_main=true/> }
                    />
                </div>
            </section>

            <section id="side-tracks" class="py-24 border-t border-white/5 scroll-mt-32">
                <div class="max-w-xl mb-16">
                    <h2 class="text-4xl md:text-5xl font-[100] tracking-tighter mb-4">
                        "Side " <span class="font-accent italic text-primary/80 font-[300]">"Tracks"</span>
                    </h2>
                    <p class="text-slate-400 font-[200] text-lg">
                        "Exploring niche solutions and experimental tech integrations."
                    </p>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    <For
                        each=|| SIDE_PROJECTS.iter()
                        key=|project| project.id
                        children=|project: &'static Project| view! { <ProjectCard project/> }
                    />
                </div>
            </section>
        </div>
    }
}
