//! Domain entities held by the session and collection stores

pub mod bid_analysis;
pub mod milestone;
pub mod opportunity;
pub mod pricing_calculation;
pub mod proposal;
pub mod subcontractor;
pub mod template;
pub mod user;

pub use bid_analysis::{BidAnalysis, BidAnalysisUpdate, BidRecommendation};
pub use milestone::{Milestone, MilestoneStatus, MilestoneUpdate};
pub use opportunity::{Opportunity, OpportunityStatus, OpportunityUpdate};
pub use pricing_calculation::{PricingCalculation, PricingCalculationUpdate};
pub use proposal::{Proposal, ProposalSection, ProposalStatus, ProposalUpdate};
pub use subcontractor::{Subcontractor, SubcontractorUpdate};
pub use template::builtin_templates::{builtin_templates, BuiltinTemplateDef, BUILTIN_TEMPLATES};
pub use template::{Template, TemplateCategory, TemplateUpdate};
pub use user::{LoginCredentials, RegisterData, User, UserRole, PLACEHOLDER_COMPANY};
