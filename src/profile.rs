//! Static portfolio content.
//!
//! Literal data, fixed at compile time. Nothing here is mutated at runtime;
//! the carousel and renderers borrow these tables for the whole session.

use crate::types::{
    Accent, Category, ContactKind, ContactMethod, Experience, Highlight, Impact, Level, Profile,
    Rgb, Skill,
};

// ============================================================================
// SKILLS
// ============================================================================

const fn skill(name: &'static str, level: Level, description: &'static str) -> Skill {
    Skill {
        name,
        level,
        description,
    }
}

const BACKEND: &[Skill] = &[
    skill("Java", Level::Expert, "Core Java, Java 8+ features, Collections, Streams API"),
    skill("Spring Boot", Level::Expert, "REST APIs, Dependency Injection, Spring Security"),
    skill("Microservices", Level::Advanced, "Service discovery, API Gateway, Circuit breakers"),
    skill("Resilience4j", Level::Advanced, "Fault tolerance, retry mechanisms, bulkhead pattern"),
    skill("Eureka", Level::Advanced, "Service registry, load balancing, health checks"),
    skill("API Gateway", Level::Advanced, "Zuul, routing, filtering, rate limiting"),
];

const DATABASES: &[Skill] = &[
    skill("PostgreSQL", Level::Expert, "Schema design, query optimization, transactions, indexing"),
    skill("MySQL", Level::Advanced, "Database administration, performance tuning, replication"),
];

const FRONTEND: &[Skill] = &[
    skill(
        "React",
        Level::Advanced,
        "Hooks, Context API, Component lifecycle, Performance optimization",
    ),
    skill("TypeScript", Level::Advanced, "Type safety, Interfaces, Generics, Advanced types"),
    skill("Redux Toolkit", Level::Intermediate, "State management, RTK Query, DevTools"),
    skill("HTML/CSS", Level::Advanced, "Semantic HTML, CSS Grid, Flexbox, Responsive design"),
];

const WORKFLOW: &[Skill] = &[skill(
    "Camunda BPM",
    Level::Advanced,
    "BPMN workflows, DMN decision tables, Process automation",
)];

const TOOLS: &[Skill] = &[
    skill("Git", Level::Advanced, "Version control, branching strategies, CI/CD integration"),
    skill("Maven", Level::Advanced, "Build automation, dependency management, plugins"),
    skill("JIRA", Level::Advanced, "Project management, Agile methodologies, Issue tracking"),
    skill("Postman", Level::Advanced, "API testing, Collections, Automated testing"),
    skill("Agile", Level::Advanced, "Scrum, Sprint planning, Retrospectives, User stories"),
];

/// Skill categories in carousel order.
pub const CATEGORIES: &[Category] = &[
    Category {
        name: "Backend",
        accent: Accent {
            from: Rgb(0x3B, 0x82, 0xF6),
            to: Rgb(0x06, 0xB6, 0xD4),
        },
        icon: "⚙",
        skills: BACKEND,
    },
    Category {
        name: "Databases",
        accent: Accent {
            from: Rgb(0x22, 0xC5, 0x5E),
            to: Rgb(0x10, 0xB9, 0x81),
        },
        icon: "▤",
        skills: DATABASES,
    },
    Category {
        name: "Frontend",
        accent: Accent {
            from: Rgb(0xA8, 0x55, 0xF7),
            to: Rgb(0xEC, 0x48, 0x99),
        },
        icon: "◆",
        skills: FRONTEND,
    },
    Category {
        name: "Workflow Automation",
        accent: Accent {
            from: Rgb(0xF9, 0x73, 0x16),
            to: Rgb(0xEF, 0x44, 0x44),
        },
        icon: "↻",
        skills: WORKFLOW,
    },
    Category {
        name: "Tools & Practices",
        accent: Accent {
            from: Rgb(0x6B, 0x72, 0x80),
            to: Rgb(0x64, 0x74, 0x8B),
        },
        icon: "⚒",
        skills: TOOLS,
    },
];

// ============================================================================
// EXPERIENCE
// ============================================================================

/// Employment history, most recent first.
pub const EXPERIENCE: &[Experience] = &[
    Experience {
        period: "2024 – Present",
        title: "Associate Consultant",
        company: "Infosys",
        location: "Bangalore, India",
        project: Some("Danske Bank"),
        achievements: &[
            "Led migration to Java 21 and modernized service stack with zero functional regressions.",
            "Introduced service hardening: circuit breakers, timeouts, and graceful fallbacks.",
            "Optimized critical paths and database access patterns for lower latency and higher reliability.",
            "Partnered with QA on test strategy (contract tests, integration flows) to improve release confidence.",
        ],
        technologies: &[
            "Java 21",
            "Spring Boot",
            "Microservices",
            "PostgreSQL",
            "Docker",
            "Kubernetes",
        ],
        impact: Some(Impact::High),
    },
    Experience {
        period: "2021 – 2024",
        title: "Java Full-Stack Developer",
        company: "DBQ",
        location: "Bangalore, India",
        project: Some("Crypto Trading Automation & Workflow Systems"),
        achievements: &[
            "Built distributed microservices and resilient APIs powering trading and workflow execution.",
            "Automated operational flows with Camunda BPM (BPMN/DMN) to reduce manual effort and errors.",
            "Designed frontend modules in React + TypeScript to streamline operator workflows.",
            "Improved database schema design and query performance for consistent throughput.",
        ],
        technologies: &[
            "Java",
            "Spring Boot",
            "React",
            "TypeScript",
            "PostgreSQL",
            "Camunda BPM",
            "Redis",
        ],
        impact: Some(Impact::High),
    },
    Experience {
        period: "2021",
        title: "Intern",
        company: "DBQ",
        location: "Bangalore, India",
        project: Some("UI Improvements & Foundations"),
        achievements: &[
            "Learned Java and React fundamentals through hands-on feature work.",
            "Contributed UI fixes and small enhancements under mentorship.",
            "Participated in code reviews and agile ceremonies; shipped incremental improvements.",
        ],
        technologies: &["Java", "React", "HTML/CSS", "Git"],
        impact: Some(Impact::Medium),
    },
];

// ============================================================================
// CONTACT
// ============================================================================

/// Primary email address. Hire-me links are composed against it.
pub const EMAIL: &str = "yadanaparthivineethreddy@gmail.com";

pub const CONTACTS: &[ContactMethod] = &[
    ContactMethod {
        kind: ContactKind::Email,
        label: "Email",
        value: EMAIL,
        action: Some("Send Email"),
    },
    ContactMethod {
        kind: ContactKind::Phone,
        label: "Phone",
        value: "+91 7036546590",
        action: Some("Call Now"),
    },
    ContactMethod {
        kind: ContactKind::LinkedIn,
        label: "LinkedIn",
        value: "linkedin.com/in/vineeth-reddy-y",
        action: Some("Open Profile"),
    },
    ContactMethod {
        kind: ContactKind::Location,
        label: "Location",
        value: "Bangalore, India",
        action: None,
    },
];

// ============================================================================
// PROFILE
// ============================================================================

pub static PROFILE: Profile = Profile {
    name: "VINEETH REDDY YADANAPARTHI",
    headline: &["Building Resilient,", "Scalable, and", "High-Performance", "Systems"],
    tech_line: "Java • Spring Boot • React • PostgreSQL • Microservices",
    roles: &[
        "Backend Engineer",
        "Full Stack Developer",
        "Workflow Automator",
        "Problem Solver",
    ],
    summary: &[
        "Backend-focused full-stack developer with 4+ years in Java, Spring Boot, Microservices, and \
         PostgreSQL. I design resilient enterprise architectures, automate workflows with Camunda BPM, \
         and build modern UIs with React + TypeScript.",
        "Proven improvements in scalability, performance, and reliability for banking and fintech \
         platforms, handling high-volume transactions with strong data integrity and observability.",
        "Strengths: microservices, database optimization, API design, workflow automation. Delivered \
         with clean code, thoughtful DX, and production-grade rigor.",
    ],
    highlights: &[
        Highlight {
            label: "Experience",
            value: "4+ Years",
            icon: "◷",
        },
        Highlight {
            label: "Projects",
            value: "20+",
            icon: "➚",
        },
        Highlight {
            label: "Technologies",
            value: "15+",
            icon: "⚒",
        },
        Highlight {
            label: "Industries",
            value: "Banking, Fintech",
            icon: "⌂",
        },
    ],
    email: EMAIL,
    resume_url: "https://vineethreddyy.github.io/vineeth_resume.pdf",
    site_url: "https://vineethreddyy.github.io",
    contacts: CONTACTS,
    experience: EXPERIENCE,
    categories: CATEGORIES,
};

// ============================================================================
// TESTS
// ============================================================================
