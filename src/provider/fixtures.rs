//! Immutable site content served by the fixture provider

use crate::state::{Project, Service, Stat, TeamMember, Testimonial};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn stats() -> Vec<Stat> {
    [
        ("50+", "Projects Delivered"),
        ("120+", "Network Developers"),
        ("35+", "Satisfied Clients"),
        ("98%", "On-Time Delivery"),
    ]
    .into_iter()
    .map(|(value, label)| Stat {
        value: value.to_string(),
        label: label.to_string(),
    })
    .collect()
}

struct ServiceRow {
    id: &'static str,
    title: &'static str,
    short_desc: &'static str,
    full_desc: &'static str,
    stack: &'static str,
    features: [&'static str; 6],
}

const SERVICES: &[ServiceRow] = &[
    ServiceRow {
        id: "web",
        title: "Website Development",
        short_desc: "Responsive, high-performance websites optimized for SEO, security, and scalability",
        full_desc: "We design and engineer responsive, high-performance websites optimized for SEO, security, and scalability.",
        stack: "React · Next.js · Node.js · PostgreSQL · Tailwind",
        features: ["UI/UX Design", "Frontend Development", "Backend Integration", "Admin Dashboard", "Deployment & Optimization", "SEO Configuration"],
    },
    ServiceRow {
        id: "webapp",
        title: "Custom Web Applications",
        short_desc: "Full-stack enterprise web apps with complex logic and scalable architecture",
        full_desc: "End-to-end custom web application development with complex business logic, APIs, and scalable infrastructure.",
        stack: "Next.js · Node.js · MongoDB · Redis · AWS",
        features: ["System Architecture", "REST & GraphQL APIs", "Auth & Permissions", "Real-time Features", "Cloud Deployment", "Performance Tuning"],
    },
    ServiceRow {
        id: "ai",
        title: "AI & Data Analytics Systems",
        short_desc: "Intelligent automation, ML models, and data pipelines that drive business decisions",
        full_desc: "AI-powered systems, predictive analytics, and data pipelines that give your business a decisive edge.",
        stack: "Python · TensorFlow · OpenAI · FastAPI · PostgreSQL",
        features: ["ML Model Development", "NLP & Chatbot Integration", "Predictive Analytics", "Data Pipelines", "LLM Integration", "Dashboard & Reporting"],
    },
    ServiceRow {
        id: "saas",
        title: "SaaS Platforms",
        short_desc: "Multi-tenant SaaS products with subscription billing, dashboards, and role-based access",
        full_desc: "Complete SaaS platform development from architecture to deployment, built to scale from Day 1.",
        stack: "Next.js · Stripe · Docker · Kubernetes · AWS",
        features: ["Multi-tenant Architecture", "Subscription Billing", "Role-Based Access", "Analytics Dashboard", "API Marketplace", "99.9% Uptime SLA"],
    },
    ServiceRow {
        id: "admin",
        title: "Admin & Dashboard Systems",
        short_desc: "Internal tools, ops dashboards, and control panels with real-time data and access control",
        full_desc: "Custom admin panels and operational dashboards that give you full visibility and control over your business.",
        stack: "React · Node.js · PostgreSQL · WebSocket · Redis",
        features: ["Real-time Data", "Advanced Filtering", "Role Management", "Export & Reporting", "Audit Logs", "Mobile Responsive"],
    },
    ServiceRow {
        id: "game",
        title: "Game & Interactive Platforms",
        short_desc: "Engaging interactive experiences, game backends, and real-time multiplayer infrastructure",
        full_desc: "From browser-based games to full multiplayer backends, we build interactive platforms that scale.",
        stack: "Unity · WebGL · Node.js · Socket.io · Redis",
        features: ["Game Architecture", "Real-time Multiplayer", "Leaderboards & Analytics", "In-app Purchases", "Cloud Save", "Cross-platform Support"],
    },
    ServiceRow {
        id: "auto",
        title: "Automation & API Integration",
        short_desc: "Workflow automation, third-party integrations, and API ecosystems that eliminate manual work",
        full_desc: "End-to-end workflow automation and API integration services that eliminate manual operations.",
        stack: "Node.js · Python · Zapier · REST · Webhooks",
        features: ["Workflow Automation", "Third-party Integrations", "API Development", "Webhook Systems", "Scheduled Jobs", "Error Monitoring"],
    },
];

pub fn services() -> Vec<Service> {
    SERVICES
        .iter()
        .map(|row| Service {
            id: row.id.to_string(),
            title: row.title.to_string(),
            short_desc: row.short_desc.to_string(),
            full_desc: row.full_desc.to_string(),
            stack: row.stack.to_string(),
            features: strings(&row.features),
        })
        .collect()
}

struct ProjectRow {
    id: &'static str,
    title: &'static str,
    category: &'static str,
    year: &'static str,
    status: &'static str,
    description: &'static str,
    impact: &'static str,
    tags: &'static [&'static str],
    client: &'static str,
    duration: &'static str,
    team: u32,
}

const PROJECTS: &[ProjectRow] = &[
    ProjectRow {
        id: "nexuspay",
        title: "NexusPay",
        category: "FinTech",
        year: "2024",
        status: "Live",
        description: "Real-time payment processing platform with AI fraud detection. Handles 10K+ transactions/day with 99.98% uptime.",
        impact: "₹2Cr+ processed daily",
        tags: &["React", "Node.js", "ML", "MongoDB"],
        client: "FinEdge Inc.",
        duration: "4 months",
        team: 6,
    },
    ProjectRow {
        id: "healthos",
        title: "HealthOS",
        category: "HealthTech",
        year: "2024",
        status: "Live",
        description: "HIPAA-compliant patient management system deployed across 200+ hospitals. Reduced admin overhead by 60%.",
        impact: "200+ hospitals live",
        tags: &["Next.js", "PostgreSQL", "Docker"],
        client: "MedCore Systems",
        duration: "6 months",
        team: 8,
    },
    ProjectRow {
        id: "eduforge",
        title: "EduForge",
        category: "EdTech",
        year: "2023",
        status: "Live",
        description: "AI-adaptive learning platform personalizing curriculum for 50K+ students. 40% improvement in learning outcomes.",
        impact: "50K+ active learners",
        tags: &["Python", "React", "TensorFlow"],
        client: "LearnNow",
        duration: "5 months",
        team: 7,
    },
    ProjectRow {
        id: "shopmatrix",
        title: "ShopMatrix",
        category: "E-Commerce",
        year: "2024",
        status: "Live",
        description: "Multi-vendor marketplace with AI recommendation engine. 99.9% uptime SLA and mobile-first design.",
        impact: "₹50L+ monthly GMV",
        tags: &["Next.js", "Stripe", "Redis"],
        client: "RetailX Group",
        duration: "3 months",
        team: 5,
    },
    ProjectRow {
        id: "taskflow",
        title: "TaskFlow AI",
        category: "SaaS",
        year: "2024",
        status: "Beta",
        description: "AI project management that auto-assigns tasks, predicts bottlenecks, and reduces project delays by 35%.",
        impact: "35% faster delivery",
        tags: &["React", "FastAPI", "OpenAI"],
        client: "Internal",
        duration: "Ongoing",
        team: 4,
    },
    ProjectRow {
        id: "visioniq",
        title: "VisionIQ",
        category: "AI/ML",
        year: "2023",
        status: "Live",
        description: "Computer vision QC platform for manufacturing. 98.7% defect detection accuracy, replacing manual inspection.",
        impact: "98.7% detection rate",
        tags: &["Python", "PyTorch", "OpenCV"],
        client: "ManufacturePro",
        duration: "4 months",
        team: 5,
    },
];

pub fn projects() -> Vec<Project> {
    PROJECTS
        .iter()
        .map(|row| Project {
            id: row.id.to_string(),
            title: row.title.to_string(),
            category: row.category.to_string(),
            year: row.year.to_string(),
            status: row.status.to_string(),
            description: row.description.to_string(),
            impact: row.impact.to_string(),
            tags: strings(row.tags),
            client: row.client.to_string(),
            duration: row.duration.to_string(),
            team: row.team,
        })
        .collect()
}

pub fn team() -> Vec<TeamMember> {
    [
        ("Arjun Mehta", "Founder & CEO", ["React", "System Design", "Strategy"]),
        ("Priya Sharma", "Lead ML Engineer", ["Python", "TensorFlow", "Data Science"]),
        ("Ravi Kumar", "Design Lead", ["Figma", "UI/UX", "Framer"]),
        ("Sneha Patel", "Backend Architect", ["Node.js", "PostgreSQL", "AWS"]),
        ("Karan Singh", "Mobile Developer", ["Flutter", "Swift", "Firebase"]),
        ("Aisha Nair", "DevOps Engineer", ["Kubernetes", "Docker", "Terraform"]),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, role, skills), id)| TeamMember {
        id,
        name: name.to_string(),
        role: role.to_string(),
        avatar: name.chars().take(1).collect(),
        skills: strings(&skills),
    })
    .collect()
}

pub fn testimonials() -> Vec<Testimonial> {
    [
        (
            "Rajesh Kumar",
            "RetailX Group",
            "E-Commerce Platform",
            "XSTN delivered our web platform with excellent structure and speed. Their project clarity and execution discipline exceeded expectations.",
            "RK",
        ),
        (
            "Meera Iyer",
            "MedCore Systems",
            "Healthcare Software",
            "The HealthOS system transformed our hospital operations. XSTN's structured milestone delivery gave us complete confidence throughout the project.",
            "MI",
        ),
        (
            "Siddharth Joshi",
            "FinEdge Inc.",
            "FinTech Platform",
            "Exceptional technical depth and communication. They built a payment system that handles peak loads flawlessly. Highly recommend XSTN.",
            "SJ",
        ),
    ]
    .into_iter()
    .map(|(name, company, kind, quote, initials)| Testimonial {
        name: name.to_string(),
        company: company.to_string(),
        kind: kind.to_string(),
        quote: quote.to_string(),
        initials: initials.to_string(),
    })
    .collect()
}
