use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Defines an opaque string identifier.
///
/// Identifiers are plain strings on the wire so that stored data written with
/// hand-picked ids (the built-in templates use `"1"`..`"4"`) round-trips
/// unchanged. Fresh ids are UUID v4 strings.
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value.to_string())
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

// Session
define_id!(UserId);

// Collection records
define_id!(OpportunityId);
define_id!(BidAnalysisId);
define_id!(TemplateId);
define_id!(PricingCalculationId);
define_id!(MilestoneId);
define_id!(SubcontractorId);
define_id!(ProposalId);
