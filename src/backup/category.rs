//! Configuration categories that are backed up and restored

use std::fmt;

/// A slice of the manager's policy tree saved to its own file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// L4 services
    Services,
    /// L7 context profiles
    ContextProfiles,
    /// Domains with their security policies, rules and groups
    PolicyAndGroups,
}

impl Category {
    /// All categories in the order they are backed up and restored
    pub const ALL: [Category; 3] = [
        Category::Services,
        Category::ContextProfiles,
        Category::PolicyAndGroups,
    ];

    /// Inventory filter passed to `GET /policy/api/v1/infra`
    pub fn filter(self) -> &'static str {
        match self {
            Self::Services => "Type-Service",
            Self::ContextProfiles => "Type-ContextProfile",
            Self::PolicyAndGroups => "Type-Domain|SecurityPolicy|Rule|Group",
        }
    }

    /// Middle part of the backup file name
    pub fn file_suffix(self) -> &'static str {
        match self {
            Self::Services => "services",
            Self::ContextProfiles => "context-profiles",
            Self::PolicyAndGroups => "policy-n-group",
        }
    }

    /// Label used in backup messages
    pub fn backup_label(self) -> &'static str {
        match self {
            Self::Services => "NSX DFW L4 services",
            Self::ContextProfiles => "NSX DFW L7 context-profiles",
            Self::PolicyAndGroups => "NSX DFW Policy & Group",
        }
    }

    /// Label used in restore messages
    pub fn restore_label(self) -> &'static str {
        match self {
            Self::Services => "NSX DFW L4 Services",
            Self::ContextProfiles => "NSX DFW L7 Services Restore",
            Self::PolicyAndGroups => "NSX DFW Policy & Group Restore",
        }
    }

    /// Whether backups of this category get an object count summary
    pub fn is_counted(self) -> bool {
        matches!(self, Self::PolicyAndGroups)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_suffix())
    }
}
