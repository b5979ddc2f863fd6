mod admin;
mod merchant;

use serde::Serialize;

use crate::authority::{Action, AuthoritySet};
use crate::tenant::TenantKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKind {
    SectionHeader,
    MenuItem,
    SubmenuItem,
}

/// One entry of the static navigation tree. Built once per role and
/// immutable afterwards; not user-editable at runtime.
#[derive(Debug)]
pub struct MenuNode {
    pub kind: MenuKind,
    pub label: &'static str,
    /// In-tenant path. Nodes with children are never directly navigable.
    pub path: Option<&'static str>,
    /// Privilege resource guarding the entry, matched via `resource:get`.
    pub privilege: Option<&'static str>,
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    fn header(label: &'static str) -> Self {
        Self {
            kind: MenuKind::SectionHeader,
            label,
            path: None,
            privilege: None,
            children: Vec::new(),
        }
    }

    fn item(label: &'static str, path: &'static str, privilege: Option<&'static str>) -> Self {
        Self {
            kind: MenuKind::MenuItem,
            label,
            path: Some(path),
            privilege,
            children: Vec::new(),
        }
    }

    fn group(label: &'static str, children: Vec<MenuNode>) -> Self {
        Self {
            kind: MenuKind::MenuItem,
            label,
            path: None,
            privilege: None,
            children,
        }
    }

    fn sub(label: &'static str, path: &'static str, privilege: &'static str) -> Self {
        Self {
            kind: MenuKind::SubmenuItem,
            label,
            path: Some(path),
            privilege: Some(privilege),
            children: Vec::new(),
        }
    }
}

/// The declared menu for a tenant kind.
pub fn menu_for(kind: TenantKind) -> &'static [MenuNode] {
    match kind {
        TenantKind::Administrator => admin::MENU.as_slice(),
        TenantKind::Merchant => merchant::MENU.as_slice(),
    }
}

/// Whether a node should render for the given grants.
///
/// Section headers are structural and carry no access semantics. A node with
/// children renders iff at least one child does, so empty groups never show.
/// A leaf guarded by a privilege needs `resource:get`.
pub fn is_visible(node: &MenuNode, authorities: &AuthoritySet) -> bool {
    if node.kind == MenuKind::SectionHeader {
        return true;
    }
    if !node.children.is_empty() {
        return node.children.iter().any(|c| is_visible(c, authorities));
    }
    match node.privilege {
        Some(resource) => authorities.check(resource, Action::Get),
        None => true,
    }
}

/// Page-level gate for a direct navigation inside the tenant space.
///
/// The tenant root is always reachable so a fresh session lands somewhere.
/// Paths with no menu entry fail closed.
pub fn is_page_allowed(page_path: &str, kind: TenantKind, authorities: &AuthoritySet) -> bool {
    if page_path.is_empty() || page_path == "/" {
        return true;
    }
    find_leaf(menu_for(kind), page_path)
        .map(|node| match node.privilege {
            Some(resource) => authorities.check(resource, Action::Get),
            None => true,
        })
        .unwrap_or(false)
}

fn find_leaf<'a>(nodes: &'a [MenuNode], path: &str) -> Option<&'a MenuNode> {
    for node in nodes {
        if node.children.is_empty() {
            if node.path == Some(path) {
                return Some(node);
            }
        } else if let Some(found) = find_leaf(&node.children, path) {
            return Some(found);
        }
    }
    None
}

/// Serializable projection of the visible part of a menu, for page chrome.
#[derive(Debug, Serialize)]
pub struct MenuEntry {
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuEntry>,
}

pub fn visible_entries(nodes: &'static [MenuNode], authorities: &AuthoritySet) -> Vec<MenuEntry> {
    nodes
        .iter()
        .filter(|n| is_visible(n, authorities))
        .map(|n| MenuEntry {
            label: n.label,
            path: n.path,
            children: visible_entries(&n.children, authorities),
        })
        .collect()
}
