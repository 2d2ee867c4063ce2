//! GCMS Domain - records, identifiers and partial updates for the contract
//! management client.

extern crate self as gcms_domain;

pub mod common;
pub mod entities;
pub mod error;
pub mod ids;
pub mod record;

// Re-export all entities (explicit list in entities/mod.rs)
pub use entities::{
    builtin_templates, BidAnalysis, BidAnalysisUpdate, BidRecommendation, BuiltinTemplateDef,
    LoginCredentials, Milestone, MilestoneStatus, MilestoneUpdate, Opportunity,
    OpportunityStatus, OpportunityUpdate, PricingCalculation, PricingCalculationUpdate, Proposal,
    ProposalSection, ProposalStatus, ProposalUpdate, RegisterData, Subcontractor,
    SubcontractorUpdate, Template, TemplateCategory, TemplateUpdate, User, UserRole,
    BUILTIN_TEMPLATES, PLACEHOLDER_COMPANY,
};

pub use error::DomainError;
pub use record::{CollectionKind, Record};

// Re-export ID types
pub use ids::{
    BidAnalysisId, MilestoneId, OpportunityId, PricingCalculationId, ProposalId, SubcontractorId,
    TemplateId, UserId,
};
