use leptos::prelude::*;

use crate::data::Project;

/// Shared by every card, regardless of size.
pub const CARD_BASE: &str = "group relative overflow-hidden rounded-[2rem] bg-zinc-900/40 \
     border border-white/5 cursor-pointer outline-none shadow-2xl";

const GRADIENT: &str = "linear-gradient(to top, rgba(5,5,5,0.85) 0%, rgba(5,5,5,0.1) 100%)";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CardVariant {
    Main,
    Side,
}

impl From<bool> for CardVariant {
    fn from(is_main: bool) -> Self {
        if is_main { Self::Main } else { Self::Side }
    }
}

impl CardVariant {
    pub fn size(self) -> &'static str {
        match self {
            Self::Main => "h-[500px] md:h-[600px] md:col-span-2",
            Self::Side => "h-[400px] md:h-[450px] col-span-1",
        }
    }

    pub fn container(self) -> String {
        format!("{CARD_BASE} {}", self.size())
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Main => "text-4xl md:text-5xl",
            Self::Side => "text-2xl md:text-3xl",
        }
    }

    pub fn detail_title(self) -> &'static str {
        match self {
            Self::Main => "text-5xl md:text-6xl",
            Self::Side => "text-3xl md:text-4xl",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Main => "text-xl max-w-xl",
            Self::Side => "text-base max-w-sm",
        }
    }
}

/// Inline style for the image layer. No image means gradient only.
pub fn background_style(image_url: &str) -> String {
    let image = if image_url.is_empty() {
        GRADIENT.to_owned()
    } else {
        format!("{GRADIENT}, url(\"{image_url}\")")
    };
    format!(
        "background-image: {image}; background-size: contain; \
         background-repeat: no-repeat; background-position: center;"
    )
}

/// One showcased project. The detail layer is revealed purely through the
/// `group-hover`/`group-focus` classes, so the card holds no state.
#[component]
pub fn ProjectCard(project: &'static Project, #[prop(optional)] is_main: bool) -> impl IntoView {
    let variant = CardVariant::from(is_main);

    view! {
        <div tabindex="0" class=variant.container()>
            <div
                class="absolute inset-0 transition-all duration-1000 ease-out group-hover:scale-110 group-focus:scale-110 bg-zinc-900"
                style=background_style(project.image_url)
            ></div>

            <div class="absolute bottom-0 left-0 p-8 md:p-10 w-full z-10 transition-all duration-500 group-hover:opacity-0 group-hover:translate-y-8 group-focus:opacity-0 group-focus:translate-y-8">
                <span class="text-primary font-bold text-[10px] tracking-[0.4em] uppercase mb-4 block">
                    {project.category}
                </span>
                <h3 class=format!("font-[100] text-white tracking-tight {}", variant.title())>
                    {project.title}
                </h3>
            </div>

            <div class="absolute inset-0 bg-black/80 backdrop-blur-2xl opacity-0 group-hover:opacity-100 group-focus:opacity-100 transition-all duration-500 flex flex-col justify-center p-8 md:p-12">
                <div class="transform translate-y-8 group-hover:translate-y-0 group-focus:translate-y-0 transition-transform duration-500 ease-out">
                    <span class="text-primary font-bold text-[10px] tracking-[0.4em] uppercase mb-4 block">
                        {project.category}
                    </span>
                    <h3 class=format!("font-[100] text-white tracking-tight mb-6 {}", variant.detail_title())>
                        {project.title}
                    </h3>
                    <p class=format!("text-slate-300 font-[200] leading-relaxed mb-10 {}", variant.description())>
                        {project.description}
                    </p>
                    <div class="flex items-center gap-4 group/btn">
                        <button class="bg-primary/20 border border-primary/40 text-primary px-8 py-3 rounded-full text-[10px] font-bold uppercase tracking-widest hover:bg-primary hover:text-white transition-all">
                            "Details"
                        </button>
                        <span class="material-symbols-outlined text-white/20 group-hover/btn:text-white group-hover/btn:translate-x-1 transition-all">
                            "arrow_forward"
                        </span>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{MAIN_PROJECTS, SIDE_PROJECTS};
    use leptos::tachys::view::RenderHtml;
    use pretty_assertions::assert_eq;

    #[test]
    fn flag_picks_variant() {
        assert_eq!(CardVariant::from(true), CardVariant::Main);
        assert_eq!(CardVariant::from(false), CardVariant::Side);
    }

    #[test]
    fn main_card_renders_large_classes() {
        let html = view! { <ProjectCard project=&MAIN_PROJECTS[0] is_main=true/> }.to_html();

        assert!(html.contains(CardVariant::Main.size()));
        assert!(html.contains(CardVariant::Main.detail_title()));
        assert!(!html.contains(CardVariant::Side.size()));
    }

    #[test]
    fn omitted_flag_renders_small_classes() {
        let html = view! { <ProjectCard project=&SIDE_PROJECTS[1]/> }.to_html();

        assert!(html.contains(CardVariant::Side.size()));
        assert!(html.contains(CardVariant::Side.description()));
        assert!(!html.contains(CardVariant::Main.size()));
    }

    #[test]
    fn card_shows_project_content_and_is_focusable() {
        let project = &SIDE_PROJECTS[2];
        let html = view! { <ProjectCard project/> }.to_html();

        assert!(html.contains(r#"tabindex="0""#));
        assert!(html.contains(project.title));
        assert!(html.contains(project.category));
        assert!(html.contains(project.description));
        assert!(html.contains(project.image_url));
        assert!(html.contains("Details"));
    }

    #[test]
    fn empty_image_leaves_gradient_only() {
        assert_eq!(
            background_style(""),
            format!(
                "background-image: {GRADIENT}; background-size: contain; \
                 background-repeat: no-repeat; background-position: center;"
            )
        );
        assert!(background_style("/images/x.png").contains(r#"url("/images/x.png")"#));
    }
}
