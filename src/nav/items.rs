// Navigation item registry
//
// The static, ordered list of navigation entries. Display order is list order
// and every layout variant (desktop, tablet, mobile) renders from it.

/// Symbolic icon reference; the renderer picks the glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Home,
    UserCheck,
    BookOpen,
    Folder,
    Mail,
}

impl Icon {
    /// Terminal glyph for this icon
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Home => "⌂",
            Icon::UserCheck => "✓",
            Icon::BookOpen => "❏",
            Icon::Folder => "▤",
            Icon::Mail => "✉",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationItem {
    pub label: &'static str,
    /// Link target, `#id` for in-page anchors
    pub anchor: &'static str,
    pub icon: Icon,
}

impl NavigationItem {
    /// Element id for in-page anchors, None for anything else
    pub fn section_id(&self) -> Option<&'static str> {
        self.anchor.strip_prefix('#').filter(|id| !id.is_empty())
    }
}

pub const NAV_ITEMS: &[NavigationItem] = &[
    NavigationItem {
        label: "Home",
        anchor: "#top",
        icon: Icon::Home,
    },
    NavigationItem {
        label: "Experience",
        anchor: "#experience",
        icon: Icon::UserCheck,
    },
    NavigationItem {
        label: "Certificates",
        anchor: "#certifications",
        icon: Icon::BookOpen,
    },
    NavigationItem {
        label: "Projects",
        anchor: "#projects",
        icon: Icon::Folder,
    },
    NavigationItem {
        label: "Contact me",
        anchor: "#contact",
        icon: Icon::Mail,
    },
];

/// Section ids of every in-page item, in display order
pub fn section_ids(items: &[NavigationItem]) -> Vec<&'static str> {
    items.iter().filter_map(NavigationItem::section_id).collect()
}

/// Find the item whose anchor matches `anchor` (with or without the `#`)
pub fn find(items: &[NavigationItem], anchor: &str) -> Option<NavigationItem> {
    let id = anchor.strip_prefix('#').unwrap_or(anchor);
    items.iter().copied().find(|item| item.section_id() == Some(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_order_is_display_order() {
        assert_eq!(
            section_ids(NAV_ITEMS),
            vec!["top", "experience", "certifications", "projects", "contact"]
        );
    }

    #[test]
    fn only_fragment_links_have_section_ids() {
        let external = NavigationItem {
            label: "Resume",
            anchor: "https://example.com/resume",
            icon: Icon::BookOpen,
        };
        assert_eq!(external.section_id(), None);

        let bare_hash = NavigationItem {
            label: "Nowhere",
            anchor: "#",
            icon: Icon::Home,
        };
        assert_eq!(bare_hash.section_id(), None);
    }

    #[test]
    fn find_accepts_either_form() {
        assert_eq!(find(NAV_ITEMS, "#contact").map(|i| i.label), Some("Contact me"));
        assert_eq!(find(NAV_ITEMS, "projects").map(|i| i.label), Some("Projects"));
        assert!(find(NAV_ITEMS, "#expertise").is_none());
    }
}
