//! Route table: exact URL path → page

use crate::pages::PageId;
use anyhow::{bail, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub page: PageId,
    /// Name shown on the home grid
    pub name: &'static str,
    pub description: &'static str,
}

pub const HOME: &str = "/";

/// All routes, home first then demos in grid order
pub const ROUTES: &[Route] = &[
    Route {
        path: HOME,
        page: PageId::Home,
        name: "Showcase",
        description: "Pick a demo",
    },
    Route {
        path: "/demo/buttons",
        page: PageId::Buttons,
        name: "Buttons",
        description: "All button variants & states",
    },
    Route {
        path: "/demo/dialog",
        page: PageId::Dialog,
        name: "Dialog",
        description: "Modal / Alerts / Confirm",
    },
    Route {
        path: "/demo/form",
        page: PageId::Form,
        name: "Form",
        description: "Inputs, selects, switches and dates",
    },
    Route {
        path: "/demo/data-display",
        page: PageId::DataDisplay,
        name: "Data Display",
        description: "Tables, Cards, Carousels",
    },
    Route {
        path: "/demo/fragments",
        page: PageId::Fragments,
        name: "Fragments",
        description: "Combobox, data table, toggles, resizable panels",
    },
    Route {
        path: "/demo/sidebar",
        page: PageId::Sidebar,
        name: "Sidebar",
        description: "Sidebar with nested navigation",
    },
];

/// Page for an exact path match
pub fn resolve(path: &str) -> Option<PageId> {
    ROUTES.iter().find(|r| r.path == path).map(|r| r.page)
}

/// Like [`resolve`], but an unknown path is an error naming the valid ones
pub fn require(path: &str) -> Result<PageId> {
    match resolve(path) {
        Some(page) => Ok(page),
        None => bail!(
            "Unknown route '{}'. Valid routes: {}",
            path,
            ROUTES.iter().map(|r| r.path).collect::<Vec<_>>().join(", ")
        ),
    }
}

pub fn route_for(page: PageId) -> &'static Route {
    // Every PageId variant has exactly one entry
    ROUTES
        .iter()
        .find(|r| r.page == page)
        .unwrap_or(&ROUTES[0])
}

pub fn path_for(page: PageId) -> &'static str {
    route_for(page).path
}

/// Demo routes (everything but home), in the order digit keys jump to them
pub fn demos() -> impl Iterator<Item = &'static Route> {
    ROUTES.iter().filter(|r| r.page != PageId::Home)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_every_listed_path() {
        assert_eq!(resolve("/"), Some(PageId::Home));
        assert_eq!(resolve("/demo/buttons"), Some(PageId::Buttons));
        assert_eq!(resolve("/demo/dialog"), Some(PageId::Dialog));
        assert_eq!(resolve("/demo/form"), Some(PageId::Form));
        assert_eq!(resolve("/demo/data-display"), Some(PageId::DataDisplay));
        assert_eq!(resolve("/demo/fragments"), Some(PageId::Fragments));
        assert_eq!(resolve("/demo/sidebar"), Some(PageId::Sidebar));
    }

    #[test]
    fn matching_is_exact() {
        assert_eq!(resolve("/demo/buttons/"), None);
        assert_eq!(resolve("/Demo/Buttons"), None);
        assert_eq!(resolve("/demo"), None);
        assert_eq!(resolve(""), None);
        assert_eq!(resolve("/demo/buttons?x=1"), None);
    }

    #[test]
    fn require_lists_valid_routes() {
        let err = require("/nope").unwrap_err().to_string();
        assert!(err.contains("/nope"));
        assert!(err.contains("/demo/sidebar"));
    }

    #[test]
    fn path_for_round_trips() {
        for route in ROUTES {
            assert_eq!(resolve(path_for(route.page)), Some(route.page));
        }
    }

    #[test]
    fn demos_match_page_order() {
        let pages: Vec<_> = demos().map(|r| r.page).collect();
        assert_eq!(pages, PageId::DEMOS.to_vec());
    }
}
