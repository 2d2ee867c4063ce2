//! Milestone entity - contract tracking checkpoint

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::double_option;
use crate::error::DomainError;
use crate::record::{CollectionKind, Record};
use crate::{MilestoneId, OpportunityId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Overdue,
}

impl fmt::Display for MilestoneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MilestoneStatus::Pending => f.write_str("pending"),
            MilestoneStatus::InProgress => f.write_str("in_progress"),
            MilestoneStatus::Completed => f.write_str("completed"),
            MilestoneStatus::Overdue => f.write_str("overdue"),
        }
    }
}

impl FromStr for MilestoneStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(MilestoneStatus::Pending),
            "in_progress" => Ok(MilestoneStatus::InProgress),
            "completed" => Ok(MilestoneStatus::Completed),
            "overdue" => Ok(MilestoneStatus::Overdue),
            _ => Err(DomainError::parse(format!(
                "Unknown milestone status: '{}'",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: MilestoneId,
    pub opportunity_id: OpportunityId,
    pub title: String,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    pub status: MilestoneStatus,
    #[serde(default)]
    pub description: String,
}

impl Milestone {
    pub fn new(opportunity_id: OpportunityId, title: impl Into<String>) -> Self {
        Self {
            id: MilestoneId::new(),
            opportunity_id,
            title: title.into(),
            due_date: None,
            status: MilestoneStatus::Pending,
            description: String::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<MilestoneId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneUpdate {
    #[serde(default)]
    pub opportunity_id: Option<OpportunityId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub due_date: Option<Option<NaiveDate>>,
    #[serde(default)]
    pub status: Option<MilestoneStatus>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Record for Milestone {
    type Id = MilestoneId;
    type Update = MilestoneUpdate;

    const KIND: CollectionKind = CollectionKind::Milestones;

    fn id(&self) -> &MilestoneId {
        &self.id
    }

    fn apply_update(&mut self, update: &MilestoneUpdate) {
        if let Some(opportunity_id) = &update.opportunity_id {
            self.opportunity_id = opportunity_id.clone();
        }
        if let Some(title) = &update.title {
            self.title = title.clone();
        }
        if let Some(due_date) = update.due_date {
            self.due_date = due_date;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(description) = &update.description {
            self.description = description.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_update_can_clear_due_date() {
        let mut milestone = Milestone::new(OpportunityId::from("opp-1"), "Kickoff meeting")
            .with_due_date(date(2025, 1, 10));

        let update: MilestoneUpdate =
            serde_json::from_str(r#"{"status":"completed","dueDate":null}"#).unwrap();
        milestone.apply_update(&update);

        assert_eq!(milestone.status, MilestoneStatus::Completed);
        assert_eq!(milestone.due_date, None);
        assert_eq!(milestone.title, "Kickoff meeting");
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("in_progress".parse::<MilestoneStatus>(), Ok(MilestoneStatus::InProgress));
        assert_eq!(MilestoneStatus::InProgress.to_string(), "in_progress");
    }
}
