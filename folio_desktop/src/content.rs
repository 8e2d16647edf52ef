//! Static page content: section structure, hero copy, projects and skills.

/// Page sections in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Projects,
    Skills,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    /// Returns the navigation label for the section.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }
}

pub const NAV_BRAND: &str = "AV";

pub const HERO_TITLE: &str = "Hi, I'm Adrian Vasquez";
pub const HERO_SUBTITLE: &str = "Systems Engineer & Creative Coder";
pub const HERO_TAGLINE: &str =
    "I build fast, reliable infrastructure and the occasional generative artwork. \
     Most of my days are spent somewhere between a profiler and a particle system.";
pub const HERO_PRIMARY_CTA: &str = "View My Work";
pub const HERO_SECONDARY_CTA: &str = "Get In Touch";

pub const ABOUT_HEADING: &str = "About Me";
pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "I'm a software engineer with a background in distributed systems and real-time \
     rendering. I care about the whole stack: the protocol on the wire, the cache line \
     in the hot loop, and the pixel that finally lands on screen.",
    "Away from production code I prototype simulations and visual experiments, a habit \
     that keeps sneaking back into my day job whenever a dashboard needs to feel alive.",
];

/// Headline figures shown beside the about copy.
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: [Stat; 3] = [
    Stat {
        value: "8+",
        label: "Years Shipping Software",
    },
    Stat {
        value: "30",
        label: "Projects Delivered",
    },
    Stat {
        value: "400K",
        label: "Requests/s Served",
    },
];

pub const PROJECTS_HEADING: &str = "Selected Work";

/// One project card.
pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub stack: &'static [&'static str],
    pub link: &'static str,
}

pub const PROJECTS: [Project; 4] = [
    Project {
        title: "Meshline",
        summary: "Edge message broker with at-least-once delivery and sub-millisecond \
                  fan-out, deployed across three regions.",
        stack: &["Rust", "Tokio", "Raft"],
        link: "https://github.com/avasquez-dev/meshline",
    },
    Project {
        title: "Glimmer",
        summary: "GPU-driven particle playground that renders a quarter million agents \
                  at 144 Hz, with live-tunable flocking rules.",
        stack: &["Rust", "wgpu", "WGSL"],
        link: "https://github.com/avasquez-dev/glimmer",
    },
    Project {
        title: "Ledgerline",
        summary: "Append-only storage engine with tiered compaction and point-in-time \
                  snapshots, powering an internal metrics platform.",
        stack: &["Rust", "io_uring", "Prometheus"],
        link: "https://github.com/avasquez-dev/ledgerline",
    },
    Project {
        title: "Cartograph",
        summary: "Interactive network topology explorer that lays out ten thousand \
                  nodes with a force simulation tuned for readability.",
        stack: &["TypeScript", "WebGL", "d3"],
        link: "https://github.com/avasquez-dev/cartograph",
    },
];

pub const SKILLS_HEADING: &str = "Skills";

/// One titled group of skills.
pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_GROUPS: [SkillGroup; 3] = [
    SkillGroup {
        title: "Languages",
        skills: &["Rust", "Go", "TypeScript", "Python", "C"],
    },
    SkillGroup {
        title: "Systems",
        skills: &["Distributed Consensus", "Storage Engines", "Async Runtimes", "Profiling"],
    },
    SkillGroup {
        title: "Graphics",
        skills: &["wgpu", "Shader Pipelines", "Procedural Animation", "UI Frameworks"],
    },
];

pub const CONTACT_HEADING: &str = "Get In Touch";
pub const CONTACT_BLURB: &str =
    "Have a project in mind, a gnarly performance mystery, or just want to talk shop? \
     Drop me a line.";
pub const CONTACT_EMAIL: &str = "adrian@vasquez.dev";
pub const CONTACT_LOCATION: &str = "Lisbon, Portugal";

/// External profile link.
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "GitHub",
        url: "https://github.com/avasquez-dev",
    },
    SocialLink {
        label: "Mastodon",
        url: "https://hachyderm.io/@avasquez",
    },
    SocialLink {
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/adrian-vasquez-dev",
    },
];

pub const FOOTER_NOTE: &str = "Designed and built by Adrian Vasquez.";
