//! Template entity - reusable proposal boilerplate
//!
//! Template bodies are markdown-like text with `[Placeholder]` markers that
//! the author fills in when copying a template into a proposal.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::record::{CollectionKind, Record};
use crate::TemplateId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateCategory {
    Technical,
    PastPerformance,
    CoverLetter,
    CapabilityStatement,
    /// Unknown category (for forward compatibility)
    #[serde(other)]
    Unknown,
}

impl TemplateCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            TemplateCategory::Technical => "Technical",
            TemplateCategory::PastPerformance => "Past Performance",
            TemplateCategory::CoverLetter => "Cover Letter",
            TemplateCategory::CapabilityStatement => "Capability Statement",
            TemplateCategory::Unknown => "Unknown",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateCategory::Technical => "technical",
            TemplateCategory::PastPerformance => "past_performance",
            TemplateCategory::CoverLetter => "cover_letter",
            TemplateCategory::CapabilityStatement => "capability_statement",
            TemplateCategory::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateCategory {
    type Err = DomainError;

    /// Unlike serde (which maps unrecognized tags to `Unknown`), this rejects them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "technical" => Ok(TemplateCategory::Technical),
            "past_performance" => Ok(TemplateCategory::PastPerformance),
            "cover_letter" => Ok(TemplateCategory::CoverLetter),
            "capability_statement" => Ok(TemplateCategory::CapabilityStatement),
            "unknown" => Ok(TemplateCategory::Unknown),
            _ => Err(DomainError::parse(format!(
                "Unknown template category: '{}'",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: TemplateId,
    pub name: String,
    pub category: TemplateCategory,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Template {
    pub fn new(
        name: impl Into<String>,
        category: TemplateCategory,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: TemplateId::new(),
            name: name.into(),
            category,
            content: content.into(),
            tags: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<TemplateId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<TemplateCategory>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl Record for Template {
    type Id = TemplateId;
    type Update = TemplateUpdate;

    const KIND: CollectionKind = CollectionKind::Templates;

    fn id(&self) -> &TemplateId {
        &self.id
    }

    fn apply_update(&mut self, update: &TemplateUpdate) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(content) = &update.content {
            self.content = content.clone();
        }
        if let Some(tags) = &update.tags {
            self.tags = tags.clone();
        }
    }
}

/// Templates every fresh installation starts with.
pub mod builtin_templates {
    use super::{Template, TemplateCategory};

    /// Built-in template definition
    pub struct BuiltinTemplateDef {
        pub id: &'static str,
        pub name: &'static str,
        pub category: TemplateCategory,
        pub content: &'static str,
        pub tags: &'static [&'static str],
    }

    pub const BUILTIN_TEMPLATES: &[BuiltinTemplateDef] = &[
        BuiltinTemplateDef {
            id: "1",
            name: "Technical Approach Template",
            category: TemplateCategory::Technical,
            content: TECHNICAL_APPROACH,
            tags: &["technical", "approach", "methodology"],
        },
        BuiltinTemplateDef {
            id: "2",
            name: "Past Performance Template",
            category: TemplateCategory::PastPerformance,
            content: PAST_PERFORMANCE,
            tags: &["past performance", "references", "experience"],
        },
        BuiltinTemplateDef {
            id: "3",
            name: "Professional Cover Letter",
            category: TemplateCategory::CoverLetter,
            content: COVER_LETTER,
            tags: &["cover letter", "introduction", "executive"],
        },
        BuiltinTemplateDef {
            id: "4",
            name: "Capability Statement",
            category: TemplateCategory::CapabilityStatement,
            content: CAPABILITY_STATEMENT,
            tags: &["capabilities", "qualifications", "company profile"],
        },
    ];

    /// Materialize the built-in templates as records
    pub fn builtin_templates() -> Vec<Template> {
        BUILTIN_TEMPLATES
            .iter()
            .map(|def| {
                Template::new(def.name, def.category, def.content)
                    .with_id(def.id)
                    .with_tags(def.tags.iter().copied())
            })
            .collect()
    }

    const TECHNICAL_APPROACH: &str = "# Technical Approach

## 1. Understanding of Requirements
[Company Name] thoroughly understands the requirements outlined in the Statement of Work...

## 2. Technical Solution
Our approach incorporates industry best practices and proven methodologies...

## 3. Management Approach
Our management approach ensures efficient delivery through:
- Dedicated Project Manager
- Regular status meetings
- Quality control procedures
- Risk management strategies

## 4. Implementation Plan
The implementation will be executed in phases:
1. Planning and Setup
2. Development/Execution
3. Testing and Quality Assurance
4. Deployment
5. Ongoing Support";

    const PAST_PERFORMANCE: &str = "# Past Performance Reference

## Contract Information
- Contract Number: [Contract #]
- Client: [Agency Name]
- Period of Performance: [Dates]
- Contract Value: [Amount]
- Point of Contact: [Name, Title, Contact Info]

## Project Description
[Detailed description of the work performed...]

## Relevance to Current Opportunity
[Explanation of how this past performance relates...]

## Performance Details
- Technical Achievement
- Schedule Performance
- Cost Control
- Management Effectiveness
- Customer Satisfaction";

    const COVER_LETTER: &str = "[Company Letterhead]
[Date]

[Contracting Officer Name]
[Agency Name]
[Address]

RE: [Solicitation Number] - [Project Title]

Dear [Contracting Officer Name],

We are pleased to submit our proposal for [Project Title] under solicitation [Number].

[Company Name] is uniquely qualified to perform this work because:
- [Key Qualification 1]
- [Key Qualification 2]
- [Key Qualification 3]

We have carefully reviewed all requirements and confirm our ability to deliver exceptional results.

Sincerely,
[Name]
[Title]
[Company Name]";

    const CAPABILITY_STATEMENT: &str = "# Capability Statement

## Core Competencies
- [Core Competency 1]
- [Core Competency 2]
- [Core Competency 3]

## Past Performance
Brief overview of relevant past performance...

## Differentiators
What sets us apart from competitors...

## Company Data
- DUNS: [Number]
- CAGE Code: [Code]
- NAICS Codes: [Codes]
- Certifications: [List]

## Contact Information
[Company Name]
[Address]
[Phone]
[Email]
[Website]";
}
