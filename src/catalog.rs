//! Static module catalog and learning-path definitions.
//!
//! The catalog is fixed at build time: a flat list of learning-module
//! descriptors grouped into five categories, plus four curated learning
//! paths that sequence those modules. Nothing here is ever mutated at
//! runtime; progress against these modules lives in the
//! [`ProgressStore`](crate::progress_store::ProgressStore).

use serde::{Deserialize, Serialize};

/// Number of modules the dashboard and achievement math count against.
pub const TOTAL_MODULES: usize = 25;

/// Topic grouping for catalog modules and progress records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Fundamentals,
    Components,
    Patterns,
    Advanced,
    CaseStudies,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Fundamentals,
        Category::Components,
        Category::Patterns,
        Category::Advanced,
        Category::CaseStudies,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fundamentals => "fundamentals",
            Category::Components => "components",
            Category::Patterns => "patterns",
            Category::Advanced => "advanced",
            Category::CaseStudies => "case_studies",
        }
    }
}

/// Difficulty rating shown on module cards and path headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

/// One learning module. Static descriptive metadata only; the module body
/// content is opaque display data keyed by `id` and rendered by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModuleDescriptor {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub difficulty: Difficulty,
    pub estimated_minutes: u32,
}

/// An ordered curriculum grouping of catalog modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LearningPath {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
    pub estimated_weeks: u32,
    pub modules: &'static [&'static str],
}

/// All catalog modules, grouped by category.
pub fn modules() -> &'static [ModuleDescriptor] {
    CATALOG
}

/// All learning paths, easiest first.
pub fn paths() -> &'static [LearningPath] {
    PATHS
}

/// Looks up a module by its unique id.
pub fn module_by_id(id: &str) -> Option<&'static ModuleDescriptor> {
    CATALOG.iter().find(|m| m.id == id)
}

/// Looks up a learning path by its unique id.
pub fn path_by_id(id: &str) -> Option<&'static LearningPath> {
    PATHS.iter().find(|p| p.id == id)
}

static CATALOG: &[ModuleDescriptor] = &[
    // Fundamentals
    ModuleDescriptor {
        id: "scalability-basics",
        title: "Scalability Fundamentals",
        description: "Learn the core principles of building scalable systems, including horizontal vs vertical scaling, load distribution, and capacity planning.",
        category: Category::Fundamentals,
        difficulty: Difficulty::Beginner,
        estimated_minutes: 45,
    },
    ModuleDescriptor {
        id: "reliability-availability",
        title: "Reliability & Availability",
        description: "Understand how to design systems for high availability, fault tolerance, and disaster recovery.",
        category: Category::Fundamentals,
        difficulty: Difficulty::Beginner,
        estimated_minutes: 60,
    },
    ModuleDescriptor {
        id: "consistency-patterns",
        title: "Consistency Patterns",
        description: "Explore different consistency models: strong, eventual, weak consistency and their trade-offs.",
        category: Category::Fundamentals,
        difficulty: Difficulty::Intermediate,
        estimated_minutes: 50,
    },
    ModuleDescriptor {
        id: "performance-metrics",
        title: "Performance & Metrics",
        description: "Learn about latency, throughput, response time, and how to measure system performance.",
        category: Category::Fundamentals,
        difficulty: Difficulty::Beginner,
        estimated_minutes: 40,
    },
    // Components
    ModuleDescriptor {
        id: "database-fundamentals",
        title: "Database Design",
        description: "SQL vs NoSQL, ACID properties, database sharding, replication, and choosing the right database.",
        category: Category::Components,
        difficulty: Difficulty::Intermediate,
        estimated_minutes: 75,
    },
    ModuleDescriptor {
        id: "caching-strategies",
        title: "Caching Systems",
        description: "Learn caching patterns, cache eviction policies, distributed caching with Redis and Memcached.",
        category: Category::Components,
        difficulty: Difficulty::Intermediate,
        estimated_minutes: 55,
    },
    ModuleDescriptor {
        id: "load-balancers",
        title: "Load Balancing",
        description: "Types of load balancers, algorithms, health checks, and implementing high availability.",
        category: Category::Components,
        difficulty: Difficulty::Intermediate,
        estimated_minutes: 50,
    },
    ModuleDescriptor {
        id: "message-queues",
        title: "Message Queues & Pub/Sub",
        description: "Asynchronous communication, message brokers, Apache Kafka, RabbitMQ, and event streaming.",
        category: Category::Components,
        difficulty: Difficulty::Intermediate,
        estimated_minutes: 65,
    },
    ModuleDescriptor {
        id: "cdn-content-delivery",
        title: "Content Delivery Networks",
        description: "CDN architecture, edge servers, content caching, and global content distribution strategies.",
        category: Category::Components,
        difficulty: Difficulty::Beginner,
        estimated_minutes: 35,
    },
    // Patterns
    ModuleDescriptor {
        id: "microservices-architecture",
        title: "Microservices Architecture",
        description: "Design principles, service decomposition, inter-service communication, and microservices challenges.",
        category: Category::Patterns,
        difficulty: Difficulty::Advanced,
        estimated_minutes: 90,
    },
    ModuleDescriptor {
        id: "event-driven-architecture",
        title: "Event-Driven Architecture",
        description: "Event sourcing, CQRS, saga patterns, and building reactive systems.",
        category: Category::Patterns,
        difficulty: Difficulty::Advanced,
        estimated_minutes: 80,
    },
    ModuleDescriptor {
        id: "api-design-patterns",
        title: "API Design Patterns",
        description: "REST vs GraphQL, API versioning, rate limiting, authentication, and API gateway patterns.",
        category: Category::Patterns,
        difficulty: Difficulty::Intermediate,
        estimated_minutes: 60,
    },
    ModuleDescriptor {
        id: "data-modeling-patterns",
        title: "Data Modeling Patterns",
        description: "Normalized vs denormalized data, data warehousing, ETL pipelines, and schema design.",
        category: Category::Patterns,
        difficulty: Difficulty::Intermediate,
        estimated_minutes: 70,
    },
    // Advanced
    ModuleDescriptor {
        id: "distributed-consensus",
        title: "Distributed Consensus",
        description: "Raft, Paxos algorithms, Byzantine fault tolerance, and achieving consensus in distributed systems.",
        category: Category::Advanced,
        difficulty: Difficulty::Expert,
        estimated_minutes: 120,
    },
    ModuleDescriptor {
        id: "cap-theorem",
        title: "CAP Theorem Deep Dive",
        description: "Consistency, Availability, Partition tolerance trade-offs with real-world examples and implications.",
        category: Category::Advanced,
        difficulty: Difficulty::Advanced,
        estimated_minutes: 75,
    },
    ModuleDescriptor {
        id: "distributed-transactions",
        title: "Distributed Transactions",
        description: "Two-phase commit, saga pattern, eventual consistency, and handling transactions across services.",
        category: Category::Advanced,
        difficulty: Difficulty::Expert,
        estimated_minutes: 100,
    },
    ModuleDescriptor {
        id: "system-monitoring",
        title: "Monitoring & Observability",
        description: "Metrics, logging, tracing, alerting systems, and building observable distributed systems.",
        category: Category::Advanced,
        difficulty: Difficulty::Advanced,
        estimated_minutes: 85,
    },
    // Case studies
    ModuleDescriptor {
        id: "design-twitter",
        title: "Design Twitter",
        description: "Complete system design case study: timeline generation, user relationships, and scaling strategies.",
        category: Category::CaseStudies,
        difficulty: Difficulty::Advanced,
        estimated_minutes: 150,
    },
    ModuleDescriptor {
        id: "design-uber",
        title: "Design Uber",
        description: "Location-based services, real-time matching, GPS tracking, and handling millions of rides.",
        category: Category::CaseStudies,
        difficulty: Difficulty::Advanced,
        estimated_minutes: 140,
    },
    ModuleDescriptor {
        id: "design-netflix",
        title: "Design Netflix",
        description: "Video streaming architecture, content delivery, recommendation systems, and global scaling.",
        category: Category::CaseStudies,
        difficulty: Difficulty::Advanced,
        estimated_minutes: 135,
    },
    ModuleDescriptor {
        id: "design-whatsapp",
        title: "Design WhatsApp",
        description: "Real-time messaging, end-to-end encryption, presence indicators, and handling billions of messages.",
        category: Category::CaseStudies,
        difficulty: Difficulty::Advanced,
        estimated_minutes: 130,
    },
    ModuleDescriptor {
        id: "design-youtube",
        title: "Design YouTube",
        description: "Video upload pipeline, transcoding, storage optimization, and serving billions of video views.",
        category: Category::CaseStudies,
        difficulty: Difficulty::Expert,
        estimated_minutes: 160,
    },
    ModuleDescriptor {
        id: "design-amazon",
        title: "Design Amazon E-commerce",
        description: "Product catalog, inventory management, order processing, payment systems, and recommendation engine.",
        category: Category::CaseStudies,
        difficulty: Difficulty::Expert,
        estimated_minutes: 145,
    },
    ModuleDescriptor {
        id: "design-dropbox",
        title: "Design Dropbox",
        description: "File synchronization, conflict resolution, delta sync, and distributed file storage systems.",
        category: Category::CaseStudies,
        difficulty: Difficulty::Advanced,
        estimated_minutes: 125,
    },
];

static PATHS: &[LearningPath] = &[
    LearningPath {
        id: "beginner-path",
        title: "System Design Fundamentals",
        description: "Start your system design journey with core concepts",
        difficulty: Difficulty::Beginner,
        estimated_weeks: 4,
        modules: &[
            "scalability-basics",
            "reliability-availability",
            "performance-metrics",
            "database-fundamentals",
            "caching-strategies",
        ],
    },
    LearningPath {
        id: "intermediate-path",
        title: "Building Distributed Systems",
        description: "Learn to design and implement distributed architectures",
        difficulty: Difficulty::Intermediate,
        estimated_weeks: 6,
        modules: &[
            "consistency-patterns",
            "load-balancers",
            "message-queues",
            "api-design-patterns",
            "data-modeling-patterns",
            "microservices-architecture",
        ],
    },
    LearningPath {
        id: "advanced-path",
        title: "Expert System Architect",
        description: "Master complex distributed system concepts and patterns",
        difficulty: Difficulty::Advanced,
        estimated_weeks: 8,
        modules: &[
            "distributed-consensus",
            "cap-theorem",
            "distributed-transactions",
            "system-monitoring",
            "event-driven-architecture",
        ],
    },
    LearningPath {
        id: "case-studies-path",
        title: "Real-World System Design",
        description: "Apply your knowledge to design real systems",
        difficulty: Difficulty::Expert,
        estimated_weeks: 10,
        modules: &[
            "design-twitter",
            "design-uber",
            "design-netflix",
            "design-whatsapp",
            "design-youtube",
            "design-amazon",
            "design-dropbox",
        ],
    },
];
