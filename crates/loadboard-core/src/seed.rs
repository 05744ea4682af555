//! Demo records loaded by `loadboard --seed`.

use loadboard_types::{AiIntegration, UpgradeRequest};

fn upgrade_request(
    id: &str,
    kind: &str,
    title: &str,
    status: &str,
    priority: &str,
    description: &str,
    estimated_cost: &str,
) -> UpgradeRequest {
    UpgradeRequest {
        id: id.to_string(),
        kind: kind.to_string(),
        title: title.to_string(),
        status: status.to_string(),
        priority: priority.to_string(),
        description: description.to_string(),
        estimated_cost: estimated_cost.to_string(),
    }
}

fn ai_integration(name: &str, status: &str, usage: &str, performance: &str) -> AiIntegration {
    AiIntegration {
        name: name.to_string(),
        status: status.to_string(),
        usage: usage.to_string(),
        performance: performance.to_string(),
    }
}

pub fn upgrade_requests() -> Vec<UpgradeRequest> {
    vec![
        upgrade_request(
            "1",
            "AI Integration",
            "GPT-4 Turbo Integration",
            "Pending",
            "High",
            "Advanced AI processing for load matching",
            "$2,500/month",
        ),
        upgrade_request(
            "2",
            "Synthetic AI",
            "Neural Network Optimization",
            "In Progress",
            "Critical",
            "Real-time decision making AI",
            "$5,000/month",
        ),
        upgrade_request(
            "3",
            "API Enhancement",
            "Quantum Computing API",
            "Approved",
            "Medium",
            "Ultra-fast computational processing",
            "$10,000/month",
        ),
    ]
}

pub fn ai_integrations() -> Vec<AiIntegration> {
    vec![
        ai_integration("OpenAI GPT-4", "Active", "85%", "Excellent"),
        ai_integration("Claude AI Assistant", "Active", "72%", "Good"),
        ai_integration("Synthetic Neural Network", "Deploying", "0%", "Testing"),
    ]
}
