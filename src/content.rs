//! Static site content: profile, tech stack, projects, and contact channels.
//!
//! Pure data, no behavior. Kept out of the components so copy edits never
//! touch markup.

/// Icon CDN serving the tech and social SVGs.
pub const ICON_CDN: &str =
    "https://raw.githubusercontent.com/onemarc/tech-icons/292cfceecce6a863e9a10216c1c730d3a1a02ff5/icons";

pub struct Profile {
    pub name: &'static str,
    pub brand: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub location: &'static str,
    pub avatar: &'static str,
    pub email: &'static str,
    pub linkedin_url: &'static str,
    pub linkedin_label: &'static str,
    pub github_url: &'static str,
    pub github_label: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Yousef Alboshra",
    brand: "YOUSEF ALBUSHRA",
    headline: "I'm a Frontend Software Developer",
    tagline: "With 2+ years of experience building web applications and delivering seamless user experiences.",
    location: "Sudan, Sennar",
    avatar: "logo.jpg",
    email: "yousefalboshra@gmail.com",
    linkedin_url: "https://www.linkedin.com/in/yousef-alboshra-79509b235",
    linkedin_label: "linkedin.com/yousef-alboshra",
    github_url: "https://github.com/JoeMicro240528",
    github_label: "github.com/JoeMicro",
};

pub struct Tech {
    pub name: &'static str,
    /// Icon slug under [`ICON_CDN`].
    pub icon: &'static str,
}

pub const TECH_STACK: &[Tech] = &[
    Tech { name: "React", icon: "react-light" },
    Tech { name: "Next.js", icon: "nextjs-light" },
    Tech { name: "JavaScript", icon: "javascript" },
    Tech { name: "TypeScript", icon: "typescript" },
    Tech { name: "Tailwind CSS", icon: "tailwindcss-light" },
    Tech { name: "Bootstrap", icon: "bootstrap-light" },
    Tech { name: "Material UI", icon: "materialui" },
    Tech { name: "shadcn/ui", icon: "shadcnui" },
    Tech { name: "HTML", icon: "html" },
    Tech { name: "CSS", icon: "css" },
    Tech { name: "Figma", icon: "figma-light" },
];

pub struct Project {
    pub name: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
    pub badges: &'static [&'static str],
    pub live_demo: &'static str,
    pub source_code: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        name: "MoviesDB",
        emoji: "🎬",
        description: "A movie database application that allows users to browse, search, and discover movies with detailed information and user reviews.",
        badges: &["Reactjs", "Typescript", "ReduxToolKit", "Tailwind CSS"],
        live_demo: "https://movies-db-b5co.vercel.app/",
        source_code: "https://github.com/JoeMicro240528/Movies_DB",
    },
    Project {
        name: "Real Estate",
        emoji: "🏠",
        description: "A real estate listing platform with interactive maps and property details.",
        badges: &["React", "aos animation", "Tailwind CSS"],
        live_demo: "https://real-estate-lyart-one-31.vercel.app/",
        source_code: "https://github.com/JoeMicro240528/Real_Estate.git",
    },
    Project {
        name: "Landing Page",
        emoji: "🌐",
        description: "A landing page with interactive typing animation and responsive design.",
        badges: &["React", "React-typed", "Tailwind CSS"],
        live_demo: "https://tailwindcss-app-sepia.vercel.app/",
        source_code: "https://github.com/JoeMicro240528/tailwindcss-app.git",
    },
];

/// Builds an icon URL for a slug from [`ICON_CDN`].
pub fn icon_url(slug: &str) -> String {
    format!("{ICON_CDN}/{slug}.svg")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_project_links_out() {
        for project in PROJECTS {
            assert!(project.live_demo.starts_with("https://"), "{}", project.name);
            assert!(project.source_code.starts_with("https://"), "{}", project.name);
            assert!(!project.badges.is_empty(), "{}", project.name);
        }
    }

    #[test]
    fn test_icon_url_shape() {
        let url = icon_url("react-light");
        assert!(url.starts_with("https://"));
        assert!(url.ends_with("/react-light.svg"));
    }
}
