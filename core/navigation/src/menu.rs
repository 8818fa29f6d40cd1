//! FILENAME: core/navigation/src/menu.rs
//! PURPOSE: Data description of the native application menu.
//! CONTEXT: Rebuilt in full from the stored entries on every change; the app
//! crate turns it into real menu items.

use serde::Serialize;
use store::Entry;

pub const LOCAL_INDEX_ID: &str = "local-index";
pub const LOCAL_INDEX_LABEL: &str = "OneAI";
pub const DEFAULT_AI_ID: &str = "default-ai";
pub const DEFAULT_AI_LABEL: &str = "Chatgpt";
pub const ENTRY_ID_PREFIX: &str = "entry:";

/// What a menu item does when clicked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "url", rename_all = "camelCase")]
pub enum MenuTarget {
    /// Show the bundled index page.
    LocalIndex,
    /// Load the default AI site.
    DefaultAi,
    /// Load a saved entry's website.
    Website(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MenuSlot {
    Item {
        id: String,
        label: String,
        target: MenuTarget,
    },
    Separator,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MenuPlan {
    slots: Vec<MenuSlot>,
}

impl MenuPlan {
    /// Fixed items first, then one item per entry that has both a label and
    /// a website. Entry item ids are positional (`entry:0`, `entry:1`, ...)
    /// so duplicate entry ids still map to distinct items.
    pub fn build(entries: &[Entry]) -> Self {
        let mut slots = vec![
            MenuSlot::Item {
                id: LOCAL_INDEX_ID.to_string(),
                label: LOCAL_INDEX_LABEL.to_string(),
                target: MenuTarget::LocalIndex,
            },
            MenuSlot::Separator,
            MenuSlot::Item {
                id: DEFAULT_AI_ID.to_string(),
                label: DEFAULT_AI_LABEL.to_string(),
                target: MenuTarget::DefaultAi,
            },
            MenuSlot::Separator,
        ];

        let mut skipped = 0usize;
        for entry in entries {
            if !entry.is_menu_ready() {
                skipped += 1;
                continue;
            }
            let n = slots.len();
            slots.push(MenuSlot::Item {
                id: format!("{}{}", ENTRY_ID_PREFIX, n),
                label: entry.label.clone(),
                target: MenuTarget::Website(entry.website.clone()),
            });
        }
        if skipped > 0 {
            log::debug!(target: "menu", "skipped {} incomplete entries", skipped);
        }

        Self { slots }
    }

    pub fn slots(&self) -> &[MenuSlot] {
        &self.slots
    }

    /// Action bound to a menu item id.
    pub fn target(&self, id: &str) -> Option<&MenuTarget> {
        self.slots.iter().find_map(|slot| match slot {
            MenuSlot::Item { id: item_id, target, .. } if item_id == id => Some(target),
            _ => None,
        })
    }

    /// Labels of the items produced from entries, in menu order.
    pub fn entry_labels(&self) -> Vec<&str> {
        self.slots
            .iter()
            .filter_map(|slot| match slot {
                MenuSlot::Item {
                    label,
                    target: MenuTarget::Website(_),
                    ..
                } => Some(label.as_str()),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_gives_fixed_items_only() {
        let plan = MenuPlan::build(&[]);
        assert_eq!(plan.slots().len(), 4);
        assert_eq!(plan.target(LOCAL_INDEX_ID), Some(&MenuTarget::LocalIndex));
        assert_eq!(plan.target(DEFAULT_AI_ID), Some(&MenuTarget::DefaultAi));
        assert_eq!(plan.slots()[1], MenuSlot::Separator);
        assert_eq!(plan.slots()[3], MenuSlot::Separator);
        assert!(plan.entry_labels().is_empty());
    }

    #[test]
    fn test_entries_follow_fixed_items_in_order() {
        let plan = MenuPlan::build(&[
            Entry::new("1", "Claude", "https://claude.ai"),
            Entry::new("2", "Gemini", "https://gemini.google.com"),
        ]);

        assert_eq!(plan.entry_labels(), vec!["Claude", "Gemini"]);
        assert_eq!(
            plan.target("entry:4"),
            Some(&MenuTarget::Website("https://claude.ai".to_string()))
        );
        assert_eq!(
            plan.target("entry:5"),
            Some(&MenuTarget::Website("https://gemini.google.com".to_string()))
        );
    }

    #[test]
    fn test_incomplete_entries_are_skipped() {
        let plan = MenuPlan::build(&[
            Entry::new("1", "", "http://x"),
            Entry::new("2", "No site", ""),
            Entry::new("3", "Kept", "https://kept.example"),
        ]);

        assert_eq!(plan.entry_labels(), vec!["Kept"]);
        assert_eq!(plan.slots().len(), 5);
    }

    #[test]
    fn test_duplicate_entry_ids_get_distinct_items() {
        let plan = MenuPlan::build(&[
            Entry::new("1", "A", "https://a.example"),
            Entry::new("1", "B", "https://b.example"),
        ]);
        assert_ne!(plan.target("entry:4"), plan.target("entry:5"));
    }

    #[test]
    fn test_unknown_id_has_no_target() {
        let plan = MenuPlan::build(&[]);
        assert_eq!(plan.target("entry:4"), None);
        assert_eq!(plan.target("nope"), None);
    }
}
