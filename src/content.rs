//! Everything the page says about its owner.

use chrono::{DateTime, Datelike};

pub struct Profile {
    pub first_name: &'static str,
    pub other_names: &'static [&'static str],
    pub tagline: &'static str,
    pub location_line: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub logo: &'static str,
    pub portrait: &'static str,
}

impl Profile {
    pub fn full_name(&self) -> String {
        std::iter::once(self.first_name)
            .chain(self.other_names.iter().copied())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub const PROFILE: Profile = Profile {
    first_name: "Seelam",
    other_names: &["Naveen", "Reddy"],
    tagline: "Front-End Developer | UI/UX Designer | Food & Travel Enthusiast",
    location_line: "Crafting digital experiences with passion from Hyderabad, India",
    email: "naveen.seelam183@gmail.com",
    phone: "+91 7672061316",
    location: "Hyderabad, India",
    logo: "/images/logo.png",
    portrait: "/images/portrait.png",
};

pub const ABOUT: [&str; 3] = [
    "I'm Seelam Naveen Reddy, a passionate Front-End Developer and UI/UX Designer with expertise in creating seamless digital experiences. With a strong foundation in modern web technologies and design principles, I specialize in building responsive, user-centric applications that bridge functionality with aesthetic appeal.",
    "My professional journey spans developing scalable React applications, crafting intuitive user interfaces, and implementing design systems that enhance user engagement. I'm proficient in JavaScript, TypeScript, React, Node.js, and modern CSS frameworks, with a keen eye for detail in both code quality and visual design.",
    "Beyond technology, I'm the creator of SNR FoodleR, a food and travel blog where I share my culinary adventures and cultural discoveries. This passion project showcases my content creation skills and reflects my belief that great experiences, whether digital or culinary, require the same attention to craftsmanship and user experience.",
];

pub const SKILLS: &[&str] = &[
    "HTML",
    "CSS",
    "JavaScript",
    "React",
    "TypeScript",
    "Node.js",
    "UI/UX Design",
    "Figma",
    "Adobe XD",
    "Photoshop",
    "Responsive Design",
    "Git",
    "GitHub",
    "MySQL",
    "Tailwind CSS",
];

pub struct Interest {
    pub category: &'static str,
    pub icon: &'static str,
    pub items: &'static [&'static str],
    pub class: &'static str,
}

pub const INTERESTS: &[Interest] = &[
    Interest {
        category: "Food",
        icon: "❤️",
        items: &[
            "Recipe Development",
            "Food Photography",
            "Culinary Traditions",
            "Restaurant Reviews",
        ],
        class: "bg-red-50 border-red-200 hover:bg-red-100",
    },
    Interest {
        category: "Travel",
        icon: "✈️",
        items: &[
            "Cultural Exploration",
            "Local Cuisines",
            "Travel Photography",
            "Adventure Planning",
        ],
        class: "bg-blue-50 border-blue-200 hover:bg-blue-100",
    },
    Interest {
        category: "Technology",
        icon: "💻",
        items: &[
            "Web Development",
            "Design Systems",
            "UX Research",
            "Mobile Apps",
        ],
        class: "bg-green-50 border-green-200 hover:bg-green-100",
    },
    Interest {
        category: "Creative",
        icon: "📷",
        items: &[
            "Content Creation",
            "Video Editing",
            "Digital Art",
            "Blogging",
        ],
        class: "bg-purple-50 border-purple-200 hover:bg-purple-100",
    },
];

pub struct ExternalLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub struct Project {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub role: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub links: &'static [ExternalLink],
}

pub const PROFESSIONAL_WORK: &[Project] = &[
    Project {
        title: "Real-Time Financial Insights Dashboard",
        company: "FactSet (Offsite)",
        period: "Jan 2024 – April 2025 | Full Time",
        role: "Frontend Developer",
        description: "Developed a comprehensive real-time data dashboard for internal use, integrating live financial data using Node.js APIs. Built responsive UI with React.js and dynamic data visualization, ensuring seamless data sync and real-time updates. Collaborated with backend teams to design scalable API integrations and maintain performance under live data streams.",
        technologies: &[
            "React.js",
            "HTML",
            "CSS",
            "Node.js",
            "JavaScript",
            "API Integration",
        ],
        links: &[],
    },
    Project {
        title: "Chipotle (Mexican Grill Restaurant Interface)",
        company: "PayodSoft Consulting Services (Offsite)",
        period: "March 2022 – Nov 2023 | Part of Full Time",
        role: "UI Developer",
        description: "An internal web interface for restaurant kitchen crews to track food quantities and requirements in real time using smart camera integration. This system helped streamline the food prep process. Developed modular, responsive React components and integrated Redux for state management with Redux Saga for handling side effects. Collaborated with designers and backend teams to ensure data accuracy and applied SCSS for custom styling.",
        technologies: &[
            "React.js",
            "HTML",
            "CSS",
            "Tailwind CSS",
            "JavaScript",
            "Redux",
            "Redux Saga",
        ],
        links: &[],
    },
];

const TRAINING_LINKS: &[ExternalLink] = &[
    ExternalLink {
        label: "Behance",
        href: "https://www.behance.net/naveen_seelam",
    },
    ExternalLink {
        label: "Medium",
        href: "https://medium.com/@snrdesigns",
    },
];

pub const DESIGN_TRAINING: &[Project] = &[
    Project {
        title: "XpressEats – Rail Food Delivery App",
        company: "Designers Academy (Offsite)",
        period: "Jan 2025 – Mar 2025 | As a trainee",
        role: "UX/UI Designer",
        description: "Designed an end-to-end mobile experience to solve real train travel food issues like hygiene, limited options, and lack of customisation. Created comprehensive user flows, wireframes, high-fidelity mockups, and conducted extensive usability testing to ensure seamless ordering and delivery experience.",
        technologies: &[
            "User Research",
            "Wireframing",
            "Prototyping",
            "Usability Testing",
            "Mobile Design",
        ],
        links: TRAINING_LINKS,
    },
    Project {
        title: "TNV Collection – Fashion E-commerce App",
        company: "Designers Academy (Offsite)",
        period: "Jan 2025 – Mar 2025 | As a trainee",
        role: "UX/UI Designer",
        description: "Reimagined an existing fashion website into a mobile-first shopping experience tailored for a modern, style-conscious audience. Conducted comprehensive user research, defined personas, built user flows, and developed a clean, elegant UI with strong visual hierarchy and improved conversion rates.",
        technologies: &[
            "User Research",
            "Persona Development",
            "Style Guide",
            "Mobile-First Design",
            "Visual Hierarchy",
        ],
        links: TRAINING_LINKS,
    },
];

pub struct MediaChannel {
    pub platform: &'static str,
    pub handle: &'static str,
    pub description: &'static str,
    pub gradient: &'static str,
    pub link: &'static str,
}

impl MediaChannel {
    /// First two letters of the platform, upper-cased.
    pub fn monogram(&self) -> String {
        self.platform
            .chars()
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

pub const MEDIA_CHANNELS: &[MediaChannel] = &[
    MediaChannel {
        platform: "LinkedIn",
        handle: "@snrdesigns",
        description: "Professional updates and industry insights",
        gradient: "from-blue-600 to-blue-700",
        link: "https://www.linkedin.com/in/snrdesigns",
    },
    MediaChannel {
        platform: "Twitter",
        handle: "@SNR_Foodler",
        description: "Quick thoughts and daily updates",
        gradient: "from-gray-800 to-black",
        link: "https://twitter.com/SNR_Foodler",
    },
    MediaChannel {
        platform: "Instagram",
        handle: "@snr_foodler",
        description: "Food photography and travel stories",
        gradient: "from-purple-500 to-pink-500",
        link: "https://www.instagram.com/snr_foodler/",
    },
    MediaChannel {
        platform: "YouTube",
        handle: "@SNR_FoodleR",
        description: "Recipe tutorials and travel vlogs",
        gradient: "from-red-600 to-red-700",
        link: "https://www.youtube.com/@SNR_FoodleR",
    },
];

pub const FULL_BLOG_URL: &str = "https://snrfoodler.com";

/// Sections reachable from the navigation bar, as `(id, label)`.
pub const SECTIONS: &[(&str, &str)] = &[
    ("about", "About"),
    ("work", "Work"),
    ("interests", "Interests"),
    ("blog", "Blog"),
    ("contact", "Contact"),
];

/// Year the site was built, for the copyright line.
pub fn build_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.year())
        .unwrap_or(2024)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monogram() {
        let monograms = MEDIA_CHANNELS
            .iter()
            .map(MediaChannel::monogram)
            .collect::<Vec<_>>();
        assert_eq!(monograms, ["LI", "TW", "IN", "YO"]);
    }

    #[test]
    fn test_build_year() {
        assert!(build_year() >= 2024);
    }

    #[test]
    fn test_full_name() {
        assert_eq!(PROFILE.full_name(), "Seelam Naveen Reddy");
    }

    #[test]
    fn test_external_links_are_https() {
        let links = DESIGN_TRAINING
            .iter()
            .chain(PROFESSIONAL_WORK)
            .flat_map(|p| p.links.iter().map(|l| l.href))
            .chain(MEDIA_CHANNELS.iter().map(|c| c.link))
            .chain([FULL_BLOG_URL]);
        for link in links {
            assert!(link.starts_with("https://"), "{link}");
        }
    }

    #[test]
    fn test_section_ids_unique() {
        let mut ids = SECTIONS.iter().map(|(id, _)| *id).collect::<Vec<_>>();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SECTIONS.len());
    }
}
