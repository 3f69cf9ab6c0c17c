//! Stage 6: stakeholder, type, and category classification

use crate::lexicon::{contains_any, Lexicon};
use serde::Serialize;
use std::fmt;

/// Stakeholder a requirement is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Stakeholder {
    /// Customer-facing requirement
    Customer,
    /// Administrator-facing requirement
    Administrator,
    /// System-internal requirement (the default)
    System,
}

impl Stakeholder {
    /// Display name
    pub fn as_str(self) -> &'static str {
        match self {
            Stakeholder::Customer => "Customer",
            Stakeholder::Administrator => "Administrator",
            Stakeholder::System => "System",
        }
    }
}

impl fmt::Display for Stakeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Functional / non-functional requirement type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RequirementKind {
    /// Describes behavior the system must provide
    Functional,
    /// Describes a quality attribute
    #[serde(rename = "Non-functional")]
    NonFunctional,
}

impl RequirementKind {
    /// Display name
    pub fn as_str(self) -> &'static str {
        match self {
            RequirementKind::Functional => "Functional",
            RequirementKind::NonFunctional => "Non-functional",
        }
    }
}

impl fmt::Display for RequirementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A refined requirement with its classification
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedRequirement {
    /// The requirement text
    #[serde(rename = "requirement")]
    pub text: String,
    /// Attributed stakeholder
    pub stakeholder: Stakeholder,
    /// Functional or non-functional
    #[serde(rename = "type")]
    pub kind: RequirementKind,
    /// Matched feature categories, in taxonomy order; never empty
    pub categories: Vec<String>,
}

/// Classify one refined requirement.
///
/// Customer terms take priority over administrator terms; requirements with
/// no taxonomy match fall into the "General" category.
pub fn classify_text(text: String, lexicon: &Lexicon) -> ClassifiedRequirement {
    let lower = text.to_lowercase();

    let stakeholder = if contains_any(&lower, lexicon.customer_terms()) {
        Stakeholder::Customer
    } else if contains_any(&lower, lexicon.administrator_terms()) {
        Stakeholder::Administrator
    } else {
        Stakeholder::System
    };

    let kind = if contains_any(&lower, lexicon.nonfunctional_keywords()) {
        RequirementKind::NonFunctional
    } else {
        RequirementKind::Functional
    };

    let mut categories: Vec<String> = lexicon
        .categories()
        .iter()
        .filter(|category| contains_any(&lower, &category.keywords))
        .map(|category| category.name.clone())
        .collect();
    if categories.is_empty() {
        categories.push("General".to_string());
    }

    ClassifiedRequirement {
        text,
        stakeholder,
        kind,
        categories,
    }
}

/// Regroup requirements by stakeholder for presentation: Customer first,
/// then Administrator, then System, stable within each group.
pub fn group_by_stakeholder(
    requirements: Vec<ClassifiedRequirement>,
) -> Vec<ClassifiedRequirement> {
    let (customer, rest): (Vec<_>, Vec<_>) = requirements
        .into_iter()
        .partition(|r| r.stakeholder == Stakeholder::Customer);
    let (administrator, system): (Vec<_>, Vec<_>) = rest
        .into_iter()
        .partition(|r| r.stakeholder == Stakeholder::Administrator);

    customer
        .into_iter()
        .chain(administrator)
        .chain(system)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> ClassifiedRequirement {
        classify_text(text.to_string(), Lexicon::embedded())
    }

    #[test]
    fn test_customer_takes_priority() {
        let req = classify("The system shall let the customer contact the administrator.");
        assert_eq!(req.stakeholder, Stakeholder::Customer);
    }

    #[test]
    fn test_administrator_and_system_detection() {
        let admin = classify("The administrator shall monitor payment system for fraud.");
        assert_eq!(admin.stakeholder, Stakeholder::Administrator);

        let system = classify("The system shall generate maintenance schedules.");
        assert_eq!(system.stakeholder, Stakeholder::System);
    }

    #[test]
    fn test_nonfunctional_keywords() {
        let req = classify("The system shall meet strict performance targets.");
        assert_eq!(req.kind, RequirementKind::NonFunctional);

        let functional = classify("The customer shall book washing machine.");
        assert_eq!(functional.kind, RequirementKind::Functional);
    }

    #[test]
    fn test_categories_in_taxonomy_order() {
        let req = classify("The customer shall book washing machine.");
        assert_eq!(req.categories, vec!["Washing/Drying", "Scheduling"]);
    }

    #[test]
    fn test_general_category_when_nothing_matches() {
        let req = classify("The system shall remain simple to extend later.");
        assert_eq!(req.categories, vec!["General"]);
    }

    #[test]
    fn test_grouping_order_and_stability() {
        let reqs = vec![
            classify("The system shall generate maintenance schedules."),
            classify("The administrator shall monitor payment system for fraud."),
            classify("The customer shall book washing machine."),
            classify("The customer should receive a pickup notification."),
        ];
        let grouped = group_by_stakeholder(reqs);
        let stakeholders: Vec<_> = grouped.iter().map(|r| r.stakeholder).collect();
        assert_eq!(
            stakeholders,
            vec![
                Stakeholder::Customer,
                Stakeholder::Customer,
                Stakeholder::Administrator,
                Stakeholder::System,
            ]
        );
        assert!(grouped[0].text.contains("book"));
        assert!(grouped[1].text.contains("notification"));
    }
}
