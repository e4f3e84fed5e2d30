//! Static site content. Everything here lives for the whole process and is
//! never mutated.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capability {
    /// Material Symbols glyph name
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const BRAND: &str = "Milyar Group";

pub static MAIN_PROJECTS: &[Project] = &[
    Project {
        id: "m1",
        title: "A.B.F.A.M.",
        category: "Education",
        description: "Un progetto dedicato a rendere l’istruzione più accessibile per chi è in difficoltà, grazie alla raccolta, scambio e rivendita di libri usati.",
        image_url: "/images/abfam.png",
    },
    Project {
        id: "m2",
        title: "Movida",
        category: "Hospitality",
        description: "Soluzioni e strumenti per il mondo dell’ospitalità: gestione, formazione e innovazione per ristoranti, hotel e attività.",
        image_url: "/images/movida.png",
    },
];

pub static SIDE_PROJECTS: &[Project] = &[
    Project {
        id: "s1",
        title: "Eco-Tech API",
        category: "Sustainability",
        description: "Greentech monitoring solutions providing real-time carbon footprint metrics.",
        image_url: "/images/ailearn.png",
    },
    Project {
        id: "s2",
        title: "VR Workspace",
        category: "Mixed Reality",
        description: "Immersive collaboration environment for spatial computing.",
        image_url: "/images/mpay.png",
    },
    Project {
        id: "s3",
        title: "Neural Node",
        category: "Machine Learning",
        description: "Micro-service orchestration for distributed neural networks.",
        image_url: "/images/planey.png",
    },
];

pub static CAPABILITIES: &[Capability] = &[
    Capability {
        icon: "brush",
        title: "Design Architecture",
        description: "Creating intuitive, visually stunning interfaces that blend art with high functionality.",
    },
    Capability {
        icon: "terminal",
        title: "Systems Engineering",
        description: "Building scalable, resilient infrastructure for the most demanding digital ecosystems.",
    },
    Capability {
        icon: "insights",
        title: "Growth Strategy",
        description: "Strategizing growth and high-level partnerships to drive global tech impact.",
    },
];

pub static NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Main", href: "#main" },
    NavLink { label: "Side-Tracks", href: "#side-tracks" },
    NavLink { label: "Collective", href: "#collective" },
];

pub static FOOTER_NETWORK: &[NavLink] = &[
    NavLink { label: "LinkedIn", href: "#" },
    NavLink { label: "Instagram", href: "#" },
];

/// Main projects first, then side projects, both in declaration order.
pub fn all_projects() -> impl Iterator<Item = &'static Project> {
    MAIN_PROJECTS.iter().chain(SIDE_PROJECTS.iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn project_ids_are_unique_across_both_lists() {
        let mut seen = HashSet::new();
        for p in all_projects() {
            assert!(seen.insert(p.id), "duplicate project id {}", p.id);
        }
        assert_eq!(seen.len(), MAIN_PROJECTS.len() + SIDE_PROJECTS.len());
    }

    #[test]
    fn all_projects_keeps_main_before_side() {
        let ids: Vec<_> = all_projects().map(|p| p.id).collect();
        assert_eq!(ids, ["m1", "m2", "s1", "s2", "s3"]);
    }

    #[test]
    fn nav_links_target_rendered_anchors() {
        let hrefs: Vec<_> = NAV_LINKS.iter().map(|l| l.href).collect();
        assert_eq!(hrefs, ["#main", "#side-tracks", "#collective"]);
    }
}
