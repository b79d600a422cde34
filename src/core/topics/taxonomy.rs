//! Fixed project-management topic taxonomy.
//!
//! Nine topics, each with a static list of lowercase keyword phrases.
//! Declaration order is significant: classification and aggregation
//! both iterate topics in the order of [`Topic::ALL`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::PmlensError;

/// A project-management topic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    RiskManagement,
    StakeholderManagement,
    QualityManagement,
    ScopeManagement,
    TimeManagement,
    CostManagement,
    ProjectLifecycle,
    TeamManagement,
    ChangeManagement,
}

impl Topic {
    /// All topics in taxonomy declaration order
    pub const ALL: [Topic; 9] = [
        Topic::RiskManagement,
        Topic::StakeholderManagement,
        Topic::QualityManagement,
        Topic::ScopeManagement,
        Topic::TimeManagement,
        Topic::CostManagement,
        Topic::ProjectLifecycle,
        Topic::TeamManagement,
        Topic::ChangeManagement,
    ];

    /// Stable identifier used as the persisted map key
    pub fn id(self) -> &'static str {
        match self {
            Topic::RiskManagement => "risk_management",
            Topic::StakeholderManagement => "stakeholder_management",
            Topic::QualityManagement => "quality_management",
            Topic::ScopeManagement => "scope_management",
            Topic::TimeManagement => "time_management",
            Topic::CostManagement => "cost_management",
            Topic::ProjectLifecycle => "project_lifecycle",
            Topic::TeamManagement => "team_management",
            Topic::ChangeManagement => "change_management",
        }
    }

    /// Human-readable title: the id with underscores as spaces, title-cased
    pub fn title(self) -> String {
        self.id()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Lowercase keyword phrases matched against chapter bodies
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Topic::RiskManagement => &[
                "risk",
                "risk assessment",
                "risk analysis",
                "risk mitigation",
                "risk register",
                "risk planning",
                "risk monitoring",
            ],
            Topic::StakeholderManagement => &[
                "stakeholder",
                "stakeholder engagement",
                "stakeholder analysis",
                "communication",
                "communication management",
                "engagement",
            ],
            Topic::QualityManagement => &[
                "quality",
                "quality assurance",
                "quality control",
                "quality management",
                "quality planning",
                "testing",
                "verification",
                "validation",
            ],
            Topic::ScopeManagement => &[
                "scope",
                "scope definition",
                "scope planning",
                "requirements",
                "work breakdown",
                "wbs",
                "deliverables",
            ],
            Topic::TimeManagement => &[
                "schedule",
                "scheduling",
                "time",
                "timeline",
                "milestones",
                "critical path",
                "resource allocation",
                "duration",
            ],
            Topic::CostManagement => &[
                "cost",
                "budget",
                "budgeting",
                "cost planning",
                "financial",
                "resource management",
                "procurement",
            ],
            Topic::ProjectLifecycle => &[
                "project lifecycle",
                "project phases",
                "initiation",
                "planning",
                "execution",
                "monitoring",
                "closure",
                "project closure",
            ],
            Topic::TeamManagement => &[
                "team",
                "team management",
                "leadership",
                "human resources",
                "team building",
                "motivation",
                "performance",
            ],
            Topic::ChangeManagement => &[
                "change",
                "change management",
                "configuration management",
                "version control",
                "change control",
                "modifications",
            ],
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Topic {
    type Err = PmlensError;

    /// Accepts `risk_management`, `risk-management` or `Risk Management`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        Topic::ALL
            .into_iter()
            .find(|topic| topic.id() == normalized)
            .ok_or_else(|| PmlensError::UnknownTopic(s.to_string()))
    }
}
