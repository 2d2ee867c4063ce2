//! Sidebar navigation model
//!
//! Sections, in display order:
//! - `/` - Dashboard
//! - `/opportunities` - Opportunities
//! - `/bid-analysis` - Bid Analysis
//! - `/vendors` - Vendors
//! - `/proposals` - Proposals
//! - `/contract-tracking` - Contract Tracking
//! - `/templates` - Templates
//! - `/resources` - Resources

use std::fmt;

pub const APP_TITLE: &str = "GCMS";
pub const APP_SUBTITLE: &str = "Contract Management";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavSection {
    Dashboard,
    Opportunities,
    BidAnalysis,
    Vendors,
    Proposals,
    ContractTracking,
    Templates,
    Resources,
}

impl NavSection {
    pub fn all() -> &'static [NavSection] {
        &[
            NavSection::Dashboard,
            NavSection::Opportunities,
            NavSection::BidAnalysis,
            NavSection::Vendors,
            NavSection::Proposals,
            NavSection::ContractTracking,
            NavSection::Templates,
            NavSection::Resources,
        ]
    }

    pub fn path(&self) -> &'static str {
        match self {
            NavSection::Dashboard => "/",
            NavSection::Opportunities => "/opportunities",
            NavSection::BidAnalysis => "/bid-analysis",
            NavSection::Vendors => "/vendors",
            NavSection::Proposals => "/proposals",
            NavSection::ContractTracking => "/contract-tracking",
            NavSection::Templates => "/templates",
            NavSection::Resources => "/resources",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavSection::Dashboard => "Dashboard",
            NavSection::Opportunities => "Opportunities",
            NavSection::BidAnalysis => "Bid Analysis",
            NavSection::Vendors => "Vendors",
            NavSection::Proposals => "Proposals",
            NavSection::ContractTracking => "Contract Tracking",
            NavSection::Templates => "Templates",
            NavSection::Resources => "Resources",
        }
    }

    /// Whether this section should be highlighted for `current_path`.
    ///
    /// Dashboard matches `/` exactly. Other sections also match nested paths.
    pub fn is_active(&self, current_path: &str) -> bool {
        let current = normalize(current_path);
        match self {
            NavSection::Dashboard => current == "/",
            _ => {
                let own = self.path();
                current == own
                    || current
                        .strip_prefix(own)
                        .is_some_and(|rest| rest.starts_with('/'))
            }
        }
    }

    /// Section whose path is exactly `path`, ignoring trailing slashes
    pub fn from_path(path: &str) -> Option<NavSection> {
        let path = normalize(path);
        Self::all()
            .iter()
            .copied()
            .find(|section| section.path() == path)
    }
}

impl fmt::Display for NavSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The highlighted section for `current_path`, if any
pub fn active_section(current_path: &str) -> Option<NavSection> {
    NavSection::all()
        .iter()
        .copied()
        .find(|section| section.is_active(current_path))
}

fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}
