//! Accessibility roles of the tree view parts.

/// The accessibility role of a tree view part.
///
/// Each role has a WAI-ARIA name used in the rendered attributes and, with
/// the `accessibility` feature, an AccessKit equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum AccessibleRole {
    /// No specific role.
    #[default]
    Unknown,

    /// The tree container.
    Tree,

    /// One node of the tree.
    TreeItem,

    /// The container of a node's children.
    Group,

    /// A checkbox that can be checked, unchecked or mixed.
    CheckBox,
}

impl AccessibleRole {
    /// The `role` attribute value, `None` for [`Unknown`](Self::Unknown).
    pub fn as_aria_role(self) -> Option<&'static str> {
        match self {
            AccessibleRole::Unknown => None,
            AccessibleRole::Tree => Some("tree"),
            AccessibleRole::TreeItem => Some("treeitem"),
            AccessibleRole::Group => Some("group"),
            AccessibleRole::CheckBox => Some("checkbox"),
        }
    }

    /// Convert to AccessKit's Role enum.
    #[cfg(feature = "accessibility")]
    pub fn to_accesskit_role(self) -> accesskit::Role {
        use accesskit::Role;
        match self {
            AccessibleRole::Unknown => Role::Unknown,
            AccessibleRole::Tree => Role::Tree,
            AccessibleRole::TreeItem => Role::TreeItem,
            AccessibleRole::Group => Role::Group,
            AccessibleRole::CheckBox => Role::CheckBox,
        }
    }
}

#[cfg(feature = "accessibility")]
impl From<AccessibleRole> for accesskit::Role {
    fn from(role: AccessibleRole) -> Self {
        role.to_accesskit_role()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aria_roles() {
        assert_eq!(AccessibleRole::Tree.as_aria_role(), Some("tree"));
        assert_eq!(AccessibleRole::TreeItem.as_aria_role(), Some("treeitem"));
        assert_eq!(AccessibleRole::default().as_aria_role(), None);
    }

    #[cfg(feature = "accessibility")]
    #[test]
    fn test_accesskit_roles() {
        assert_eq!(AccessibleRole::Group.to_accesskit_role(), accesskit::Role::Group);
        assert_eq!(accesskit::Role::from(AccessibleRole::CheckBox), accesskit::Role::CheckBox);
    }
}
