pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
}

pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
    pub link: &'static str,
}

pub struct Certificate {
    pub thumbnail: &'static str,
    pub full_image: Option<&'static str>,
    pub alt: Option<&'static str>,
}

pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub avatar: &'static str,
    pub about: &'static [&'static str],
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Jordan Lee",
    tagline: "Software engineer building reliable web and systems tooling.",
    avatar: "images/avatar.jpg",
    about: &[
        "I design and ship backend services, developer tools and the occasional frontend.",
        "Lately I have been writing Rust for WebAssembly and data pipelines.",
    ],
    email: "hello@example.com",
    github: "https://github.com/",
    linkedin: "https://www.linkedin.com/",
};

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        href: "#header",
        label: "Home",
    },
    NavItem {
        href: "#about",
        label: "About",
    },
    NavItem {
        href: "#skills",
        label: "Skills",
    },
    NavItem {
        href: "#projects",
        label: "Projects",
    },
    NavItem {
        href: "#certificates",
        label: "Certificates",
    },
    NavItem {
        href: "#contact",
        label: "Contact",
    },
];

pub const SKILLS: &[&str] = &[
    "Rust",
    "TypeScript",
    "Python",
    "PostgreSQL",
    "WebAssembly",
    "Docker",
    "Linux",
    "Git",
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Trailhead",
        summary: "Offline-first trail map with vector tiles rendered in the browser.",
        tags: &["Rust", "WebAssembly", "Canvas"],
        link: "https://github.com/",
    },
    Project {
        title: "Ledgerline",
        summary: "Double-entry bookkeeping API with audit trails and CSV import.",
        tags: &["Python", "PostgreSQL"],
        link: "https://github.com/",
    },
    Project {
        title: "Pulse",
        summary: "Lightweight uptime checker that posts incidents to chat.",
        tags: &["TypeScript", "Docker"],
        link: "https://github.com/",
    },
];

pub const CERTIFICATES: &[Certificate] = &[
    Certificate {
        thumbnail: "images/certificates/cloud-thumb.jpg",
        full_image: Some("images/certificates/cloud.jpg"),
        alt: Some("Cloud Practitioner certificate"),
    },
    Certificate {
        thumbnail: "images/certificates/database-thumb.jpg",
        full_image: Some("images/certificates/database.jpg"),
        alt: Some("Database Fundamentals certificate"),
    },
    Certificate {
        thumbnail: "images/certificates/security.jpg",
        full_image: None,
        alt: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::fragment_target;

    #[test]
    fn every_nav_item_targets_a_fragment() {
        for item in NAV_ITEMS {
            assert!(fragment_target(item.href).is_some(), "{}", item.href);
        }
        assert_eq!(NAV_ITEMS.first().map(|item| item.href), Some("#header"));
    }
}
