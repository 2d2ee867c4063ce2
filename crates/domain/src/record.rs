//! The contract shared by every record kept in a collection.

use std::fmt;
use std::str::FromStr;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::DomainError;

/// A domain record that lives in one of the store's collections.
///
/// `Update` is the record's partial form: every field optional, applied by
/// [`Record::apply_update`] as a shallow overwrite of the present fields.
/// The identifier is never part of an update.
pub trait Record: Clone + fmt::Debug + PartialEq + Serialize + DeserializeOwned {
    type Id: Clone + fmt::Debug + fmt::Display + PartialEq + Eq;
    type Update: Clone + fmt::Debug + Default;

    const KIND: CollectionKind;

    fn id(&self) -> &Self::Id;

    fn apply_update(&mut self, update: &Self::Update);
}

/// The seven collections held by the domain store
///
/// Serialized and displayed as the snapshot field name (`bidAnalyses`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CollectionKind {
    Opportunities,
    BidAnalyses,
    Templates,
    PricingCalculations,
    Milestones,
    Subcontractors,
    Proposals,
}

impl CollectionKind {
    pub fn all() -> &'static [CollectionKind] {
        &[
            CollectionKind::Opportunities,
            CollectionKind::BidAnalyses,
            CollectionKind::Templates,
            CollectionKind::PricingCalculations,
            CollectionKind::Milestones,
            CollectionKind::Subcontractors,
            CollectionKind::Proposals,
        ]
    }

    /// Field name of the collection in the persisted snapshot
    pub fn snapshot_field(&self) -> &'static str {
        match self {
            CollectionKind::Opportunities => "opportunities",
            CollectionKind::BidAnalyses => "bidAnalyses",
            CollectionKind::Templates => "templates",
            CollectionKind::PricingCalculations => "pricingCalculations",
            CollectionKind::Milestones => "milestones",
            CollectionKind::Subcontractors => "subcontractors",
            CollectionKind::Proposals => "proposals",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CollectionKind::Opportunities => "Opportunities",
            CollectionKind::BidAnalyses => "Bid Analyses",
            CollectionKind::Templates => "Templates",
            CollectionKind::PricingCalculations => "Pricing Calculations",
            CollectionKind::Milestones => "Milestones",
            CollectionKind::Subcontractors => "Subcontractors",
            CollectionKind::Proposals => "Proposals",
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.snapshot_field())
    }
}

impl FromStr for CollectionKind {
    type Err = DomainError;

    /// Accepts the snapshot field name or its snake_case spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "opportunities" => Ok(CollectionKind::Opportunities),
            "bidAnalyses" | "bid_analyses" => Ok(CollectionKind::BidAnalyses),
            "templates" => Ok(CollectionKind::Templates),
            "pricingCalculations" | "pricing_calculations" => {
                Ok(CollectionKind::PricingCalculations)
            }
            "milestones" => Ok(CollectionKind::Milestones),
            "subcontractors" => Ok(CollectionKind::Subcontractors),
            "proposals" => Ok(CollectionKind::Proposals),
            _ => Err(DomainError::parse(format!("Unknown collection: '{}'", s))),
        }
    }
}
