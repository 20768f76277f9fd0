//! Filters over the resident directory.

use crate::traits::Filter;
use model::Resident;

/// Free-text search over a resident's name, city, and email.
///
/// Case-insensitive substring match; an item passes if any one of the
/// three facets contains the query. The empty query matches everything.
pub struct ResidentSearchFilter {
    query: String,
}

impl ResidentSearchFilter {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into().to_lowercase(),
        }
    }
}

impl Filter<Resident> for ResidentSearchFilter {
    fn name(&self) -> &str {
        "ResidentSearchFilter"
    }

    fn is_active(&self) -> bool {
        !self.query.is_empty()
    }

    fn matches(&self, resident: &Resident) -> bool {
        resident.name.to_lowercase().contains(&self.query)
            || resident.city.to_lowercase().contains(&self.query)
            || resident.email.to_lowercase().contains(&self.query)
    }
}

/// Role search over a resident's company and line of business.
///
/// Same substring semantics as the free-text search, applied to the two
/// work-related facets.
pub struct ResidentRoleFilter {
    query: String,
}

impl ResidentRoleFilter {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into().to_lowercase(),
        }
    }
}

impl Filter<Resident> for ResidentRoleFilter {
    fn name(&self) -> &str {
        "ResidentRoleFilter"
    }

    fn is_active(&self) -> bool {
        !self.query.is_empty()
    }

    fn matches(&self, resident: &Resident) -> bool {
        resident.company.to_lowercase().contains(&self.query)
            || resident.business.to_lowercase().contains(&self.query)
    }
}
