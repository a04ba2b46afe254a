//! Hardcoded demo data seeded into the stores at construction.

use dshield_shared::{
    Entity, EntityKind, GeoPoint, GraphData, GraphEdge, GraphNode, NodeType, Post, Relation,
    Score, SolutionItem,
};

/// The four demo products, in display order.
pub fn solutions() -> Vec<SolutionItem> {
    vec![
        SolutionItem::new(
            "embrain",
            "EmBrain",
            "Secure, scalable POI repository for researchers — store, tag, enrich and prioritize people and organizations.",
        ),
        SolutionItem::new(
            "social-dome",
            "Social Dome",
            "Real-time social monitoring and scoring that surfaces operational signals and feeds analyst workflows.",
        ),
        SolutionItem::new(
            "napoleon",
            "Napoleon",
            "Automated multi-model research engine that produces source‑tracked investigative reports from POIs.",
        ),
        SolutionItem::new(
            "relationships",
            "Relationship Analysis",
            "Graph‑powered map of entity relationships — explore connections, filter relations, reveal escalation paths.",
        ),
    ]
}

pub fn entities() -> Vec<Entity> {
    vec![
        Entity::new(
            "p_001",
            "Alex Rivera",
            EntityKind::Person,
            &["priority", "us"],
            Some("Analyst‑verified."),
        ),
        Entity::new(
            "o_101",
            "Northwind Analytics",
            EntityKind::Organization,
            &["vendor"],
            Some("Enriched from filings."),
        ),
        Entity::new("p_002", "Jordan Lee", EntityKind::Person, &["watch"], None),
    ]
}

/// Feed posts dated relative to `now` (seconds since the Unix epoch).
pub fn posts(now: f64) -> Vec<Post> {
    let post = |id: &str, author: &str, text: &str, score, age_secs: f64, geo| Post {
        id: id.to_string(),
        author: author.to_string(),
        text: text.to_string(),
        score,
        created_at: now - age_secs,
        geo,
    };

    vec![
        post(
            "t1",
            "@k12_watch",
            "School event delayed due to weather.",
            Score::Green,
            5400.0,
            None,
        ),
        post(
            "t2",
            "@city_updates",
            "Road closure near central hub tonight.",
            Score::Yellow,
            3200.0,
            Some(GeoPoint {
                lat: 40.71,
                lng: -74.0,
            }),
        ),
        post(
            "t3",
            "@alerts_bot",
            "Verified threat rumor is false; standing down.",
            Score::Green,
            1200.0,
            None,
        ),
        post(
            "t4",
            "@ops_team",
            "Escalation candidate: coordinated disruption chatter.",
            Score::Red,
            300.0,
            Some(GeoPoint {
                lat: 34.05,
                lng: -118.24,
            }),
        ),
    ]
}

pub fn graph() -> GraphData {
    let node = |id: &str, label: &str, node_type| GraphNode {
        id: id.to_string(),
        label: label.to_string(),
        node_type,
    };
    let edge = |id: &str, source: &str, target: &str, relation| GraphEdge {
        id: id.to_string(),
        source: source.to_string(),
        target: target.to_string(),
        relation,
    };

    GraphData {
        nodes: vec![
            node("n1", "Alex Rivera", NodeType::Person),
            node("n2", "Northwind Analytics", NodeType::Org),
            node("n3", "Jordan Lee", NodeType::Person),
            node("n4", "Los Angeles", NodeType::Location),
        ],
        edges: vec![
            edge("e1", "n1", "n2", Relation::WorksAt),
            edge("e2", "n3", "n2", Relation::WorksAt),
            edge("e3", "n2", "n4", Relation::LocatedIn),
            edge("e4", "n1", "n3", Relation::Knows),
        ],
    }
}
