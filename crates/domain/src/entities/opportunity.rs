//! Opportunity entity - a solicitation the company may bid on

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::{double_option, finite_f64};
use crate::error::DomainError;
use crate::record::{CollectionKind, Record};
use crate::OpportunityId;

/// Where an opportunity sits in the capture pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpportunityStatus {
    /// Found on a notice board, not yet evaluated
    #[default]
    Identified,
    /// Decided to pursue, proposal in preparation
    Pursuing,
    Submitted,
    Won,
    Lost,
    /// Evaluated and declined
    NoBid,
}

impl OpportunityStatus {
    pub fn all() -> &'static [OpportunityStatus] {
        &[
            OpportunityStatus::Identified,
            OpportunityStatus::Pursuing,
            OpportunityStatus::Submitted,
            OpportunityStatus::Won,
            OpportunityStatus::Lost,
            OpportunityStatus::NoBid,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OpportunityStatus::Identified => "identified",
            OpportunityStatus::Pursuing => "pursuing",
            OpportunityStatus::Submitted => "submitted",
            OpportunityStatus::Won => "won",
            OpportunityStatus::Lost => "lost",
            OpportunityStatus::NoBid => "no_bid",
        }
    }
}

impl fmt::Display for OpportunityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OpportunityStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OpportunityStatus::all()
            .iter()
            .find(|status| status.as_str() == s)
            .copied()
            .ok_or_else(|| DomainError::parse(format!("Unknown opportunity status: '{}'", s)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub id: OpportunityId,
    pub title: String,
    /// Issuing agency (e.g., "Department of Veterans Affairs")
    pub agency: String,
    pub solicitation_number: String,
    pub naics_code: String,
    /// Small-business set-aside program, if any (e.g., "8(a)", "SDVOSB")
    #[serde(default)]
    pub set_aside: Option<String>,
    /// Estimated contract value in dollars
    #[serde(serialize_with = "finite_f64")]
    pub estimated_value: f64,
    /// Response deadline
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    pub status: OpportunityStatus,
    #[serde(default)]
    pub description: String,
}

impl Opportunity {
    pub fn new(
        title: impl Into<String>,
        agency: impl Into<String>,
        solicitation_number: impl Into<String>,
    ) -> Self {
        Self {
            id: OpportunityId::new(),
            title: title.into(),
            agency: agency.into(),
            solicitation_number: solicitation_number.into(),
            naics_code: String::new(),
            set_aside: None,
            estimated_value: 0.0,
            due_date: None,
            status: OpportunityStatus::Identified,
            description: String::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<OpportunityId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_naics_code(mut self, naics_code: impl Into<String>) -> Self {
        self.naics_code = naics_code.into();
        self
    }

    pub fn with_set_aside(mut self, set_aside: impl Into<String>) -> Self {
        self.set_aside = Some(set_aside.into());
        self
    }

    pub fn with_estimated_value(mut self, value: f64) -> Self {
        self.estimated_value = value;
        self
    }

    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_status(mut self, status: OpportunityStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Partial opportunity; present fields overwrite, absent fields are kept
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub agency: Option<String>,
    #[serde(default)]
    pub solicitation_number: Option<String>,
    #[serde(default)]
    pub naics_code: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub set_aside: Option<Option<String>>,
    #[serde(default)]
    pub estimated_value: Option<f64>,
    #[serde(default, deserialize_with = "double_option")]
    pub due_date: Option<Option<NaiveDate>>,
    #[serde(default)]
    pub status: Option<OpportunityStatus>,
    #[serde(default)]
    pub description: Option<String>,
}

impl OpportunityUpdate {
    pub fn status(status: OpportunityStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

impl Record for Opportunity {
    type Id = OpportunityId;
    type Update = OpportunityUpdate;

    const KIND: CollectionKind = CollectionKind::Opportunities;

    fn id(&self) -> &OpportunityId {
        &self.id
    }

    fn apply_update(&mut self, update: &OpportunityUpdate) {
        if let Some(title) = &update.title {
            self.title = title.clone();
        }
        if let Some(agency) = &update.agency {
            self.agency = agency.clone();
        }
        if let Some(solicitation_number) = &update.solicitation_number {
            self.solicitation_number = solicitation_number.clone();
        }
        if let Some(naics_code) = &update.naics_code {
            self.naics_code = naics_code.clone();
        }
        if let Some(set_aside) = &update.set_aside {
            self.set_aside = set_aside.clone();
        }
        if let Some(value) = update.estimated_value {
            self.estimated_value = value;
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

    fn sample() -> Opportunity {
        Opportunity::new("Help Desk Support", "GSA", "47QTCA-25-R-0001")
            .with_id("x")
            .with_naics_code("541512")
            .with_set_aside("8(a)")
            .with_estimated_value(1_250_000.0)
            .with_due_date(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap())
    }

    #[test]
    fn test_status_update_keeps_other_fields() {
        let mut opportunity = sample();
        let before = opportunity.clone();

        opportunity.apply_update(&OpportunityUpdate::status(OpportunityStatus::Won));

        assert_eq!(opportunity.status, OpportunityStatus::Won);
        assert_eq!(
            Opportunity {
                status: before.status,
                ..opportunity.clone()
            },
            before
        );
    }

    #[test]
    fn test_explicit_null_clears_set_aside() {
        let mut opportunity = sample();
        let update: OpportunityUpdate = serde_json::from_str(r#"{"setAside":null}"#).unwrap();

        opportunity.apply_update(&update);

        assert_eq!(opportunity.set_aside, None);
        assert_eq!(opportunity.naics_code, "541512");
    }

    #[test]
    fn test_empty_update_is_identity() {
        let mut opportunity = sample();
        opportunity.apply_update(&OpportunityUpdate::default());
        assert_eq!(opportunity, sample());
    }

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&OpportunityStatus::NoBid).unwrap();
        assert_eq!(json, r#""no_bid""#);
        assert_eq!("won".parse::<OpportunityStatus>(), Ok(OpportunityStatus::Won));
        assert!("awarded".parse::<OpportunityStatus>().is_err());
    }

    #[test]
    fn test_fields_serialize_camel_case() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["solicitationNumber"], "47QTCA-25-R-0001");
        assert_eq!(value["dueDate"], "2025-03-14");
        assert_eq!(value["status"], "identified");
    }
}
