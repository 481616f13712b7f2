//! Domain catalog.
//!
//! # Responsibility
//! - Define the closed set of idea categories.
//! - Carry static display metadata (title, guideline description).
//!
//! # Invariants
//! - Wire names are stable; they are the keys of the persisted mapping.
//! - `Domain::ALL` order is the display order of every domain picker.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// One of the six fixed idea categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Domain {
    #[serde(rename = "Product")]
    Product,
    #[serde(rename = "Research")]
    Research,
    #[serde(rename = "Art")]
    Art,
    #[serde(rename = "Startup")]
    Startup,
    #[serde(rename = "Tech features improvement")]
    TechFeaturesImprovement,
    #[serde(rename = "Environment related")]
    EnvironmentRelated,
}

/// Static guideline copy shown next to a selected domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainGuideline {
    pub title: &'static str,
    pub description: &'static str,
}

impl Domain {
    /// Every domain in picker order.
    pub const ALL: [Domain; 6] = [
        Domain::Product,
        Domain::Research,
        Domain::Art,
        Domain::Startup,
        Domain::TechFeaturesImprovement,
        Domain::EnvironmentRelated,
    ];

    /// Stable wire name used in storage and at host boundaries.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Product => "Product",
            Self::Research => "Research",
            Self::Art => "Art",
            Self::Startup => "Startup",
            Self::TechFeaturesImprovement => "Tech features improvement",
            Self::EnvironmentRelated => "Environment related",
        }
    }

    /// Parses a wire name.
    ///
    /// Surrounding whitespace is ignored; matching is exact otherwise.
    /// Returns `None` for blank input, which hosts use for "no selection".
    pub fn parse(value: &str) -> Option<Self> {
        Self::from_wire(value.trim())
    }

    /// Exact wire-name match. Stored mapping keys go through here so that a
    /// key like `" Art "` is never folded into `"Art"`.
    pub fn from_wire(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|domain| domain.as_str() == name)
    }

    pub fn guideline(self) -> DomainGuideline {
        match self {
            Self::Product => DomainGuideline {
                title: "Product Ideas",
                description: "Share innovative concepts for new products or enhancements to existing ones. Focus on user problems, proposed solutions, and potential features. Think about mobile apps, software, gadgets, or even physical products.",
            },
            Self::Research => DomainGuideline {
                title: "Research Topics",
                description: "Propose areas for academic or scientific inquiry. Outline the core question, potential methodologies, expected outcomes, or hypotheses. This is for deep dives into specific subjects or new theories.",
            },
            Self::Art => DomainGuideline {
                title: "Artistic Concepts",
                description: "Describe ideas for creative projects, installations, performances, or digital art. Explain the artistic vision, medium, and the message or emotion you wish to convey. From painting to interactive experiences.",
            },
            Self::Startup => DomainGuideline {
                title: "Startup Ventures",
                description: "Detail concepts for a new business or venture. Include the problem you're solving, your unique value proposition, target market, and a brief overview of the business model. Think big, scalable ideas.",
            },
            Self::TechFeaturesImprovement => DomainGuideline {
                title: "Tech Feature Enhancements",
                description: "Suggest improvements or new features for existing software, hardware, or platforms. Focus on specific functionality, user experience (UX) enhancements, or technical optimizations. How can current tech be better?",
            },
            Self::EnvironmentRelated => DomainGuideline {
                title: "Environmental Initiatives",
                description: "Propose ideas for sustainability, conservation, green tech, or ecological solutions. Describe the environmental challenge addressed, the proposed action, and potential impact. From local initiatives to global solutions.",
            },
        }
    }
}

impl Display for Domain {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
