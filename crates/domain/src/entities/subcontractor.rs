//! Subcontractor entity - teaming partner or vendor

use serde::{Deserialize, Serialize};

use crate::common::double_option;
use crate::record::{CollectionKind, Record};
use crate::SubcontractorId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subcontractor {
    pub id: SubcontractorId,
    pub company_name: String,
    #[serde(default)]
    pub contact_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub capabilities: Vec<String>,
    /// Socio-economic certifications (e.g., "HUBZone", "WOSB")
    #[serde(default)]
    pub certifications: Vec<String>,
    /// Past-performance rating as entered; not range-checked
    #[serde(default)]
    pub rating: Option<u8>,
}

impl Subcontractor {
    pub fn new(company_name: impl Into<String>) -> Self {
        Self {
            id: SubcontractorId::new(),
            company_name: company_name.into(),
            contact_name: String::new(),
            email: String::new(),
            phone: String::new(),
            capabilities: Vec::new(),
            certifications: Vec::new(),
            rating: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<SubcontractorId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_contact(
        mut self,
        contact_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        self.contact_name = contact_name.into();
        self.email = email.into();
        self.phone = phone.into();
        self
    }

    pub fn with_capabilities(mut self, capabilities: Vec<String>) -> Self {
        self.capabilities = capabilities;
        self
    }

    pub fn with_certifications(mut self, certifications: Vec<String>) -> Self {
        self.certifications = certifications;
        self
    }

    pub fn with_rating(mut self, rating: u8) -> Self {
        self.rating = Some(rating);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubcontractorUpdate {
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub capabilities: Option<Vec<String>>,
    #[serde(default)]
    pub certifications: Option<Vec<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub rating: Option<Option<u8>>,
}

impl Record for Subcontractor {
    type Id = SubcontractorId;
    type Update = SubcontractorUpdate;

    const KIND: CollectionKind = CollectionKind::Subcontractors;

    fn id(&self) -> &SubcontractorId {
        &self.id
    }

    fn apply_update(&mut self, update: &SubcontractorUpdate) {
        if let Some(company_name) = &update.company_name {
            self.company_name = company_name.clone();
        }
        if let Some(contact_name) = &update.contact_name {
            self.contact_name = contact_name.clone();
        }
        if let Some(email) = &update.email {
            self.email = email.clone();
        }
        if let Some(phone) = &update.phone {
            self.phone = phone.clone();
        }
        if let Some(capabilities) = &update.capabilities {
            self.capabilities = capabilities.clone();
        }
        if let Some(certifications) = &update.certifications {
            self.certifications = certifications.clone();
        }
        if let Some(rating) = update.rating {
            self.rating = rating;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_update_store_rating_as_given() {
        let mut sub = Subcontractor::new("Acme").with_rating(9);
        assert_eq!(sub.rating, Some(9));

        sub.apply_update(&SubcontractorUpdate {
            rating: Some(Some(0)),
            ..Default::default()
        });
        assert_eq!(sub.rating, Some(0));

        let parsed: Subcontractor =
            serde_json::from_str(r#"{"id":"s-1","companyName":"Acme","rating":7}"#).unwrap();
        assert_eq!(parsed.rating, Some(7));
    }

    #[test]
    fn test_update_can_clear_rating() {
        let mut sub = Subcontractor::new("Acme").with_rating(4);
        sub.apply_update(&SubcontractorUpdate {
            rating: Some(None),
            ..Default::default()
        });
        assert_eq!(sub.rating, None);
        assert_eq!(sub.company_name, "Acme");
    }
}
