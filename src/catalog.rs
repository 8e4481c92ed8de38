//! Static seed data behind the skills and projects showcase.
//!
//! The tables here are defined once and never mutated; everything the
//! projects section renders is a reference into them.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    FullStack,
    Mobile,
    Backend,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::FullStack => "Full Stack",
            Category::Mobile => "Mobile",
            Category::Backend => "Backend",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    /// Stable filter over the project table: original relative order is
    /// preserved, `All` returns every record.
    pub fn apply(self) -> Vec<&'static ProjectRecord> {
        PROJECTS
            .iter()
            .filter(|project| match self {
                CategoryFilter::All => true,
                CategoryFilter::Only(category) => project.category == category,
            })
            .collect()
    }
}

/// The filter row, in display order.
pub const CATEGORY_FILTERS: [CategoryFilter; 4] = [
    CategoryFilter::All,
    CategoryFilter::Only(Category::FullStack),
    CategoryFilter::Only(Category::Mobile),
    CategoryFilter::Only(Category::Backend),
];

/// External repository links for one project, keyed by role. Absent roles
/// must render nothing, never a dead button.
#[derive(Debug, PartialEq, Eq)]
pub struct ProjectLinks {
    pub frontend: Option<&'static str>,
    pub backend: Option<&'static str>,
    pub fullstack: Option<&'static str>,
    pub mobile: Option<&'static str>,
}

impl ProjectLinks {
    /// Present links as `(label, glyph, url)` triples, in display order.
    pub fn entries(&self) -> Vec<(&'static str, &'static str, &'static str)> {
        [
            ("Frontend", "🌐", self.frontend),
            ("Backend", "🗄️", self.backend),
            ("Code", "💻", self.fullstack),
            ("Mobile", "📱", self.mobile),
        ]
        .into_iter()
        .filter_map(|(label, glyph, url)| url.map(|url| (label, glyph, url)))
        .collect()
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub backend: &'static str,
    pub frontend: &'static str,
    pub technologies: &'static [&'static str],
    pub links: ProjectLinks,
    pub category: Category,
    pub icon: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Debug, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: &'static str,
    pub skills: &'static [&'static str],
}

pub static SKILL_CATEGORIES: [SkillCategory; 5] = [
    SkillCategory {
        title: "Programming Languages",
        icon: "💻",
        skills: &["Java", "SQL", "JavaScript", "React JS", "Spring Boot", "Postman"],
    },
    SkillCategory {
        title: "Libraries / Frameworks",
        icon: "⚡",
        skills: &[
            "Node.js",
            "Express",
            "ReactJS",
            "PostgreSQL",
            "Spring Framework",
            "Servlet & JSP",
            "JDBC",
            "Hibernate / JPA",
            "Bootstrap",
            "Tailwind CSS",
            "Apache Tomcat",
        ],
    },
    SkillCategory {
        title: "Fundamentals",
        icon: "🔧",
        skills: &[
            "OOPs",
            "Exception Handling",
            "Collections",
            "Multithreading",
            "HTML",
            "CSS",
            "JavaScript",
            "DBMS",
            "Data Structures & Algorithms",
        ],
    },
    SkillCategory {
        title: "Platforms / Tools",
        icon: "🛠️",
        skills: &[
            "Windows",
            "IntelliJ IDEA",
            "Eclipse",
            "VS Code",
            "Git",
            "GitHub",
            "Apache Tomcat",
            "MySQL",
            "Postman",
        ],
    },
    SkillCategory {
        title: "Interests",
        icon: "🎯",
        skills: &["Playing Cricket", "Watching Cricket Matches", "Reading Books"],
    },
];

pub static PROJECTS: [ProjectRecord; 6] = [
    ProjectRecord {
        id: 1,
        title: "Fashion Studio",
        description: "Complete fashion e-commerce platform with modern UI",
        backend: "Node.js with Express, PostgreSQL, pgAdmin",
        frontend: "React.js with modern hooks and state management",
        technologies: &["React", "Node.js", "Express", "PostgreSQL", "JavaScript", "CSS3", "REST API"],
        links: ProjectLinks {
            frontend: Some("https://github.com/md-raza-75/Fashion-Studio"),
            backend: Some("https://github.com/md-raza-75/Fashion-Studio"),
            fullstack: None,
            mobile: None,
        },
        category: Category::FullStack,
        icon: "🛍️",
        features: &["Product Catalog", "User Auth", "Shopping Cart", "Order Management"],
    },
    ProjectRecord {
        id: 2,
        title: "College Complaint System",
        description: "College grievance management with real-time tracking",
        backend: "Spring Boot, REST API, File Upload, CRUD Operations",
        frontend: "React.js with responsive design",
        technologies: &["React", "Spring Boot", "Java", "REST API", "File Upload", "CRUD"],
        links: ProjectLinks {
            frontend: Some("https://github.com/md-raza-75/college-complaint-frontend"),
            backend: Some("https://github.com/md-raza-75/college-complaint-backend"),
            fullstack: None,
            mobile: None,
        },
        category: Category::FullStack,
        icon: "🎓",
        features: &["Complaint Submission", "Status Tracking", "Admin Panel", "File Upload"],
    },
    ProjectRecord {
        id: 3,
        title: "Email Writer AI",
        description: "AI-powered email composition and automation tool",
        backend: "Spring Boot, Java, Maven, AI Integration",
        frontend: "React.js with Material UI",
        technologies: &["React", "Material UI", "Spring Boot", "Java", "AI", "Maven", "REST"],
        links: ProjectLinks {
            frontend: Some("https://github.com/md-raza-75/Email-Writer-AI-frontend"),
            backend: Some("https://github.com/md-raza-75/Email-Writer-AI-backend"),
            fullstack: None,
            mobile: None,
        },
        category: Category::FullStack,
        icon: "✉️",
        features: &["AI Email Generation", "Customization", "Extensions", "Material UI"],
    },
    ProjectRecord {
        id: 4,
        title: "Hotel Booking System",
        description: "Complete hotel reservation platform",
        backend: "Node.js, Express, MongoDB, REST API",
        frontend: "JavaScript, HTML5, CSS3",
        technologies: &["JavaScript", "Node.js", "Express", "MongoDB", "REST API", "JWT"],
        links: ProjectLinks {
            frontend: None,
            backend: None,
            fullstack: Some("https://github.com/md-raza-75/hotel_booking"),
            mobile: None,
        },
        category: Category::FullStack,
        icon: "🏨",
        features: &["Room Booking", "User Auth", "Payment Integration", "Admin Dashboard"],
    },
    ProjectRecord {
        id: 5,
        title: "Coffee Shop App",
        description: "Mobile application for coffee shop management",
        backend: "Database integration for data management",
        frontend: "Flutter with Dart for cross-platform",
        technologies: &["Flutter", "Dart", "Database", "Mobile", "REST API"],
        links: ProjectLinks {
            frontend: None,
            backend: None,
            fullstack: None,
            mobile: Some("https://github.com/md-raza-75/coffee_shop"),
        },
        category: Category::Mobile,
        icon: "☕",
        features: &["Menu Browsing", "Order Placement", "Customer Management", "Mobile First"],
    },
    ProjectRecord {
        id: 6,
        title: "Fashion Studio Java",
        description: "Java-based e-commerce with Eclipse and pgAdmin",
        backend: "Java Servlets, JSP, PostgreSQL, Eclipse",
        frontend: "JSP, HTML, CSS, JavaScript",
        technologies: &["Java", "Servlet", "JSP", "PostgreSQL", "Eclipse", "pgAdmin"],
        links: ProjectLinks {
            frontend: None,
            backend: Some("https://github.com/md-raza-75/FashionStudio-Java"),
            fullstack: None,
            mobile: None,
        },
        category: Category::Backend,
        icon: "☕",
        features: &["Product Management", "User Auth", "Database CRUD", "Server-side Rendering"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_ids_are_unique() {
        let mut ids: Vec<u32> = PROJECTS.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn all_filter_returns_every_record_in_order() {
        let all = CategoryFilter::All.apply();
        assert_eq!(all.len(), PROJECTS.len());
        for (got, expected) in all.iter().zip(PROJECTS.iter()) {
            assert_eq!(got.id, expected.id);
        }
    }

    #[test]
    fn category_filters_match_exactly_and_keep_order() {
        for filter in CATEGORY_FILTERS {
            let CategoryFilter::Only(category) = filter else {
                continue;
            };

            let filtered = filter.apply();
            assert!(filtered.iter().all(|p| p.category == category));

            let expected: Vec<u32> = PROJECTS
                .iter()
                .filter(|p| p.category == category)
                .map(|p| p.id)
                .collect();
            let got: Vec<u32> = filtered.iter().map(|p| p.id).collect();
            assert_eq!(got, expected);
        }
    }

    #[test]
    fn absent_link_roles_produce_no_entries() {
        let hotel = PROJECTS.iter().find(|p| p.id == 4).unwrap();
        let entries = hotel.links.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0, "Code");

        let coffee = PROJECTS.iter().find(|p| p.id == 5).unwrap();
        let entries = coffee.links.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0, "Mobile");
    }
}
