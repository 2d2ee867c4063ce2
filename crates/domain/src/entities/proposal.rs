//! Proposal entity - a response volume being written for an opportunity

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::double_option;
use crate::error::DomainError;
use crate::record::{CollectionKind, Record};
use crate::{OpportunityId, ProposalId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProposalStatus {
    #[default]
    Draft,
    InReview,
    Submitted,
    Awarded,
    Rejected,
}

impl fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProposalStatus::Draft => f.write_str("draft"),
            ProposalStatus::InReview => f.write_str("in_review"),
            ProposalStatus::Submitted => f.write_str("submitted"),
            ProposalStatus::Awarded => f.write_str("awarded"),
            ProposalStatus::Rejected => f.write_str("rejected"),
        }
    }
}

impl FromStr for ProposalStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(ProposalStatus::Draft),
            "in_review" => Ok(ProposalStatus::InReview),
            "submitted" => Ok(ProposalStatus::Submitted),
            "awarded" => Ok(ProposalStatus::Awarded),
            "rejected" => Ok(ProposalStatus::Rejected),
            _ => Err(DomainError::parse(format!("Unknown proposal status: '{}'", s))),
        }
    }
}

/// One titled section of a proposal volume
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalSection {
    pub title: String,
    pub content: String,
}

impl ProposalSection {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    pub id: ProposalId,
    pub opportunity_id: OpportunityId,
    pub title: String,
    pub status: ProposalStatus,
    #[serde(default)]
    pub sections: Vec<ProposalSection>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

impl Proposal {
    pub fn new(opportunity_id: OpportunityId, title: impl Into<String>) -> Self {
        Self {
            id: ProposalId::new(),
            opportunity_id,
            title: title.into(),
            status: ProposalStatus::Draft,
            sections: Vec::new(),
            due_date: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<ProposalId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_section(mut self, section: ProposalSection) -> Self {
        self.sections.push(section);
        self
    }

    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalUpdate {
    #[serde(default)]
    pub opportunity_id: Option<OpportunityId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub status: Option<ProposalStatus>,
    #[serde(default)]
    pub sections: Option<Vec<ProposalSection>>,
    #[serde(default, deserialize_with = "double_option")]
    pub due_date: Option<Option<NaiveDate>>,
}

impl Record for Proposal {
    type Id = ProposalId;
    type Update = ProposalUpdate;

    const KIND: CollectionKind = CollectionKind::Proposals;

    fn id(&self) -> &ProposalId {
        &self.id
    }

    fn apply_update(&mut self, update: &ProposalUpdate) {
        if let Some(opportunity_id) = &update.opportunity_id {
            self.opportunity_id = opportunity_id.clone();
        }
        if let Some(title) = &update.title {
            self.title = title.clone();
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(sections) = &update.sections {
            self.sections = sections.clone();
        }
        if let Some(due_date) = update.due_date {
            self.due_date = due_date;
        }
    }
}
