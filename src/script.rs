//! Council personas and the scripted debate
//!
//! The five personas and the eight-message transcript are fixed data. The
//! debate is a demonstration reel for "Quantum AI Solutions", not a product
//! of any analysis - the simulator in `council` only controls pacing,
//! confidence drift, and consensus.

use crate::types::{Persona, TablePosition};

/// Subject startup of the scripted debate
pub const STARTUP_NAME: &str = "Quantum AI Solutions";

/// One (agent, text) pair in the fixed debate script
#[derive(Debug, Clone)]
pub struct ScriptLine {
    /// Persona id of the speaker
    pub agent: &'static str,
    pub text: &'static str,
}

/// The five fixed council personas, in table order
pub fn council_personas() -> Vec<Persona> {
    vec![
        Persona {
            id: "visionary".to_string(),
            name: "Visionary".to_string(),
            role: "Identifies opportunities and future potential".to_string(),
            color: "#3B82F6".to_string(),
            position: TablePosition { x: 0, y: -120 },
        },
        Persona {
            id: "skeptic".to_string(),
            name: "Skeptic".to_string(),
            role: "Questions assumptions and identifies risks".to_string(),
            color: "#EF4444".to_string(),
            position: TablePosition { x: 114, y: -37 },
        },
        Persona {
            id: "analyst".to_string(),
            name: "Analyst".to_string(),
            role: "Evaluates financials and market metrics".to_string(),
            color: "#10B981".to_string(),
            position: TablePosition { x: 70, y: 97 },
        },
        Persona {
            id: "scout".to_string(),
            name: "Scout".to_string(),
            role: "Researches market trends and competitors".to_string(),
            color: "#8B5CF6".to_string(),
            position: TablePosition { x: -70, y: 97 },
        },
        Persona {
            id: "oracle".to_string(),
            name: "Oracle".to_string(),
            role: "Synthesizes insights and predicts outcomes".to_string(),
            color: "#F59E0B".to_string(),
            position: TablePosition { x: -114, y: -37 },
        },
    ]
}

/// The fixed eight-message debate, in reveal order
pub fn council_script() -> Vec<ScriptLine> {
    vec![
        ScriptLine {
            agent: "visionary",
            text: "Quantum AI Solutions is positioned at the intersection of quantum computing and artificial intelligence, two exponentially growing markets. Their patented algorithms could revolutionize data processing for enterprise clients.",
        },
        ScriptLine {
            agent: "skeptic",
            text: "I'm concerned about the timeline. Quantum computing is still in its infancy for commercial applications. How realistic is their 18-month roadmap to market?",
        },
        ScriptLine {
            agent: "analyst",
            text: "They've secured $8M in funding with a $40M valuation. Burn rate is approximately $400K/month, giving them a 20-month runway. Their financial projections show breakeven in month 22, which is cutting it close.",
        },
        ScriptLine {
            agent: "scout",
            text: "There are three major competitors in this space: QuantumLeap, Qubits Inc, and AI Quantum Systems. Quantum AI's technology appears to have a 2x performance advantage based on published benchmarks.",
        },
        ScriptLine {
            agent: "oracle",
            text: "Synthesizing our inputs, this venture has a 68% probability of reaching Series B within 24 months. The quantum computing market is projected to grow at 56% CAGR over the next 5 years.",
        },
        ScriptLine {
            agent: "visionary",
            text: "Their founding team has exceptional credentials. The CEO previously sold a machine learning startup to Google, and their CTO published groundbreaking research on quantum algorithms.",
        },
        ScriptLine {
            agent: "skeptic",
            text: "The regulatory landscape for quantum technologies is uncertain. Several countries are implementing export controls on advanced computing technologies, which could impact their global expansion plans.",
        },
        ScriptLine {
            agent: "analyst",
            text: "Customer acquisition costs are estimated at $85K per enterprise client, with a projected lifetime value of $1.2M per client. This 14:1 LTV:CAC ratio is extremely promising if their assumptions hold.",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_personas_with_unique_ids() {
        let personas = council_personas();
        assert_eq!(personas.len(), 5);
        let mut ids: Vec<&str> = personas.iter().map(|p| p.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn script_has_eight_lines_by_known_personas() {
        let script = council_script();
        let personas = council_personas();
        assert_eq!(script.len(), 8);
        for line in &script {
            assert!(
                personas.iter().any(|p| p.id == line.agent),
                "unknown speaker {}",
                line.agent
            );
        }
    }

    #[test]
    fn script_opens_with_visionary_and_closes_with_analyst() {
        let script = council_script();
        assert_eq!(script.first().unwrap().agent, "visionary");
        assert_eq!(script.last().unwrap().agent, "analyst");
    }
}
