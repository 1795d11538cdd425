#[derive(Debug, PartialEq, Eq)]
pub struct ProjectSection {
    pub heading: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, PartialEq, Eq)]
pub struct ProjectLink {
    pub label: &'static str,
    pub href: &'static str,
    pub primary: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: &'static str,
    pub title: &'static str,
    /// SVG path drawn in a 24x24 view box.
    pub icon_path: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
    /// Space-separated filter tokens for the card's `data-category`.
    pub categories: &'static str,
    pub challenge: &'static str,
    pub sections: &'static [ProjectSection],
    pub code_sample: Option<&'static str>,
    pub links: &'static [ProjectLink],
}

const DEMO_LINKS: &[ProjectLink] = &[
    ProjectLink {
        label: "View Live Demo",
        href: "#",
        primary: true,
    },
    ProjectLink {
        label: "GitHub Repository",
        href: "#",
        primary: false,
    },
];

pub static PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        id: "ai-generator",
        title: "AI Content Generator",
        icon_path: "M12 2L2 7l10 5 10-5-10-5zM2 17l10 5 10-5M2 12l10 5 10-5",
        summary: "Marketing copy on demand for small businesses, powered by large language models.",
        tags: &["React", "Node.js", "OpenAI"],
        categories: "web ai",
        challenge: "Small businesses needed an affordable way to create high-quality marketing content without hiring expensive copywriters or spending hours writing.",
        sections: &[
            ProjectSection {
                heading: "Solution",
                items: &[
                    "Built a full-stack application using React and Node.js",
                    "Integrated OpenAI's GPT API for content generation",
                    "Created templates for different content types (emails, social posts, ads)",
                    "Implemented user authentication and content history",
                ],
            },
            ProjectSection {
                heading: "Results",
                items: &[
                    "500+ active users in the first 3 months",
                    "Generated over 10,000 pieces of content",
                    "Average time savings of 80% reported by users",
                    "4.8/5 star rating on Product Hunt",
                ],
            },
        ],
        code_sample: Some(
            r#"// Example API integration
const generateContent = async (prompt, type) => {
  const response = await openai.createCompletion({
    model: "text-davinci-003",
    prompt: `Generate ${type}: ${prompt}`,
    max_tokens: 200,
    temperature: 0.7
  });

  return response.data.choices[0].text.trim();
};"#,
        ),
        links: DEMO_LINKS,
    },
    ProjectRecord {
        id: "dashboard",
        title: "E-commerce Dashboard",
        icon_path: "M3 3h18v18H3V3zm16 16V5H5v14h14zM11 7h2v2h-2V7zm0 4h2v6h-2v-6z",
        summary: "Inventory, orders and analytics in one real-time view.",
        tags: &["Vue.js", "Firebase", "Chart.js"],
        categories: "web",
        challenge: "E-commerce businesses needed a comprehensive dashboard to manage inventory, orders, and analytics in real-time without switching between multiple tools.",
        sections: &[
            ProjectSection {
                heading: "Approach",
                items: &[
                    "Designed a responsive Vue.js application with modular components",
                    "Integrated with Firebase for real-time data synchronization",
                    "Used Chart.js for interactive data visualizations",
                    "Implemented role-based access control",
                ],
            },
            ProjectSection {
                heading: "Impact",
                items: &[
                    "Reduced order processing time by 60%",
                    "Improved inventory accuracy to 99.2%",
                    "Increased team productivity by 40%",
                    "Currently used by 50+ e-commerce businesses",
                ],
            },
        ],
        code_sample: None,
        links: DEMO_LINKS,
    },
    ProjectRecord {
        id: "fitness-app",
        title: "Fitness Tracking App",
        icon_path: "M17 2H7c-1.1 0-2 .9-2 2v16c0 1.1.9 2 2 2h10c1.1 0 2-.9 2-2V4c0-1.1-.9-2-2-2zM7 4h10v13H7V4z",
        summary: "Workout tracking, training plans and social motivation on iOS and Android.",
        tags: &["React Native", "SQLite", "HealthKit"],
        categories: "mobile",
        challenge: "Fitness enthusiasts wanted a mobile app that could track workouts, provide social motivation, and offer personalized training plans all in one place.",
        sections: &[
            ProjectSection {
                heading: "Solution",
                items: &[
                    "Built cross-platform app using React Native",
                    "Implemented offline-first architecture with SQLite",
                    "Created social features for sharing progress",
                    "Integrated with wearable devices via HealthKit/Google Fit",
                ],
            },
            ProjectSection {
                heading: "Results",
                items: &[
                    "25,000+ downloads in the first year",
                    "4.7/5 star rating on App Store",
                    "85% user retention rate after 30 days",
                    "Featured in \"Best Health Apps\" by major tech publications",
                ],
            },
        ],
        code_sample: None,
        links: &[
            ProjectLink {
                label: "Download from App Store",
                href: "#",
                primary: true,
            },
            ProjectLink {
                label: "View on GitHub",
                href: "#",
                primary: false,
            },
        ],
    },
    ProjectRecord {
        id: "task-manager",
        title: "Task Management Platform",
        icon_path: "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm-2 15l-5-5 1.41-1.41L10 14.17l7.59-7.59L19 8l-9 9z",
        summary: "Real-time project management with chat and reporting for remote teams.",
        tags: &["Next.js", "Socket.io", "PostgreSQL"],
        categories: "web",
        challenge: "Remote teams needed a collaborative project management tool with real-time updates, integrated chat, and advanced reporting capabilities.",
        sections: &[
            ProjectSection {
                heading: "Approach",
                items: &[
                    "Developed with Next.js for optimal performance and SEO",
                    "Used Socket.io for real-time collaboration features",
                    "Implemented PostgreSQL with complex query optimization",
                    "Created custom reporting dashboard with data visualization",
                ],
            },
            ProjectSection {
                heading: "Impact",
                items: &[
                    "Improved team productivity by 55%",
                    "Reduced project delivery time by 30%",
                    "Used by 200+ teams across 15 countries",
                    "Processed over 1 million tasks and messages",
                ],
            },
        ],
        code_sample: None,
        links: DEMO_LINKS,
    },
];

pub fn find_project(id: &str) -> Option<&'static ProjectRecord> {
    PROJECTS.iter().find(|project| project.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn dashboard_record_is_found_by_id() {
        let project = find_project("dashboard").expect("dashboard record");

        assert_eq!(project.title, "E-commerce Dashboard");
    }

    #[test]
    fn unknown_id_is_absent() {
        assert_eq!(find_project("nonexistent-id"), None);
    }

    #[test]
    fn ids_are_unique_and_records_are_complete() {
        let ids: HashSet<_> = PROJECTS.iter().map(|project| project.id).collect();
        assert_eq!(ids.len(), PROJECTS.len());

        for project in PROJECTS {
            assert!(!project.challenge.is_empty(), "{}", project.id);
            assert!(!project.sections.is_empty(), "{}", project.id);
            assert!(!project.categories.is_empty(), "{}", project.id);
            assert!(project.links.iter().any(|link| link.primary), "{}", project.id);
        }
    }
}
