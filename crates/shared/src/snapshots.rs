//! Persisted state of the two client stores

use serde::{Deserialize, Serialize};

use gcms_domain::{
    builtin_templates, BidAnalysis, CollectionKind, Milestone, Opportunity, PricingCalculation,
    Proposal, Subcontractor, Template, User,
};

/// Envelope version written for the session namespace
pub const SESSION_SNAPSHOT_VERSION: u32 = 0;

/// Envelope version written for the collections namespace
pub const COLLECTIONS_SNAPSHOT_VERSION: u32 = 0;

/// `{ user, isAuthenticated }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub is_authenticated: bool,
}

impl SessionSnapshot {
    pub fn signed_in(user: User) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
        }
    }

    /// The flag must be true exactly when a user is present
    pub fn is_consistent(&self) -> bool {
        self.is_authenticated == self.user.is_some()
    }
}

/// All seven collections. Missing keys load as empty collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionsSnapshot {
    #[serde(default)]
    pub opportunities: Vec<Opportunity>,
    #[serde(default)]
    pub bid_analyses: Vec<BidAnalysis>,
    #[serde(default)]
    pub templates: Vec<Template>,
    #[serde(default)]
    pub pricing_calculations: Vec<PricingCalculation>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    #[serde(default)]
    pub subcontractors: Vec<Subcontractor>,
    #[serde(default)]
    pub proposals: Vec<Proposal>,
}

impl CollectionsSnapshot {
    /// State of a store that has never been persisted: built-in templates only
    pub fn initial() -> Self {
        Self {
            templates: builtin_templates(),
            ..Self::default()
        }
    }

    pub fn len_of(&self, kind: CollectionKind) -> usize {
        match kind {
            CollectionKind::Opportunities => self.opportunities.len(),
            CollectionKind::BidAnalyses => self.bid_analyses.len(),
            CollectionKind::Templates => self.templates.len(),
            CollectionKind::PricingCalculations => self.pricing_calculations.len(),
            CollectionKind::Milestones => self.milestones.len(),
            CollectionKind::Subcontractors => self.subcontractors.len(),
            CollectionKind::Proposals => self.proposals.len(),
        }
    }
}
