//! BidAnalysis entity - bid/no-bid evaluation of an opportunity

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::finite_f64;
use crate::error::DomainError;
use crate::record::{CollectionKind, Record};
use crate::{BidAnalysisId, OpportunityId};

/// Outcome of a bid/no-bid review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BidRecommendation {
    Bid,
    NoBid,
    #[default]
    Undecided,
}

impl fmt::Display for BidRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BidRecommendation::Bid => f.write_str("bid"),
            BidRecommendation::NoBid => f.write_str("no_bid"),
            BidRecommendation::Undecided => f.write_str("undecided"),
        }
    }
}

impl FromStr for BidRecommendation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bid" => Ok(BidRecommendation::Bid),
            "no_bid" => Ok(BidRecommendation::NoBid),
            "undecided" => Ok(BidRecommendation::Undecided),
            _ => Err(DomainError::parse(format!(
                "Unknown bid recommendation: '{}'. Valid values: bid, no_bid, undecided",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidAnalysis {
    pub id: BidAnalysisId,
    pub opportunity_id: OpportunityId,
    /// Estimated chance of award (0.0 = no chance, 1.0 = certain)
    #[serde(serialize_with = "finite_f64")]
    pub win_probability: f64,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    pub recommendation: BidRecommendation,
    #[serde(default)]
    pub notes: String,
}

impl BidAnalysis {
    pub fn new(opportunity_id: OpportunityId) -> Self {
        Self {
            id: BidAnalysisId::new(),
            opportunity_id,
            win_probability: 0.0,
            strengths: Vec::new(),
            weaknesses: Vec::new(),
            recommendation: BidRecommendation::Undecided,
            notes: String::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<BidAnalysisId>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the win probability, rejecting values outside `0.0..=1.0`.
    pub fn with_win_probability(mut self, probability: f64) -> Result<Self, DomainError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(DomainError::validation(format!(
                "Win probability must be within 0.0..=1.0, got {}",
                probability
            )));
        }
        self.win_probability = probability;
        Ok(self)
    }

    pub fn with_strengths(mut self, strengths: Vec<String>) -> Self {
        self.strengths = strengths;
        self
    }

    pub fn with_weaknesses(mut self, weaknesses: Vec<String>) -> Self {
        self.weaknesses = weaknesses;
        self
    }

    pub fn with_recommendation(mut self, recommendation: BidRecommendation) -> Self {
        self.recommendation = recommendation;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidAnalysisUpdate {
    #[serde(default)]
    pub opportunity_id: Option<OpportunityId>,
    #[serde(default)]
    pub win_probability: Option<f64>,
    #[serde(default)]
    pub strengths: Option<Vec<String>>,
    #[serde(default)]
    pub weaknesses: Option<Vec<String>>,
    #[serde(default)]
    pub recommendation: Option<BidRecommendation>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Record for BidAnalysis {
    type Id = BidAnalysisId;
    type Update = BidAnalysisUpdate;

    const KIND: CollectionKind = CollectionKind::BidAnalyses;

    fn id(&self) -> &BidAnalysisId {
        &self.id
    }

    fn apply_update(&mut self, update: &BidAnalysisUpdate) {
        if let Some(opportunity_id) = &update.opportunity_id {
            self.opportunity_id = opportunity_id.clone();
        }
        if let Some(probability) = update.win_probability {
            self.win_probability = probability;
        }
        if let Some(strengths) = &update.strengths {
            self.strengths = strengths.clone();
        }
        if let Some(weaknesses) = &update.weaknesses {
            self.weaknesses = weaknesses.clone();
        }
        if let Some(recommendation) = update.recommendation {
            self.recommendation = recommendation;
        }
        if let Some(notes) = &update.notes {
            self.notes = notes.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_probability_range() {
        let base = BidAnalysis::new(OpportunityId::from("opp-1"));
        assert!(base.clone().with_win_probability(0.65).is_ok());
        assert!(base.clone().with_win_probability(1.2).is_err());
        assert!(base.with_win_probability(f64::NAN).is_err());
    }

    #[test]
    fn test_update_replaces_lists_wholesale() {
        let mut analysis = BidAnalysis::new(OpportunityId::from("opp-1"))
            .with_strengths(vec!["Incumbent".to_string(), "Cleared staff".to_string()]);

        analysis.apply_update(&BidAnalysisUpdate {
            strengths: Some(vec!["Incumbent".to_string()]),
            recommendation: Some(BidRecommendation::Bid),
            ..Default::default()
        });

        assert_eq!(analysis.strengths, vec!["Incumbent".to_string()]);
        assert_eq!(analysis.recommendation, BidRecommendation::Bid);
        assert_eq!(analysis.opportunity_id, "opp-1");
    }

    #[test]
    fn test_recommendation_parse() {
        assert_eq!("no_bid".parse::<BidRecommendation>(), Ok(BidRecommendation::NoBid));
        assert_eq!(BidRecommendation::NoBid.to_string(), "no_bid");
        assert!("maybe".parse::<BidRecommendation>().is_err());
    }
}
