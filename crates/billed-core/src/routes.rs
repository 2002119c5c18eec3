//! Route table for the employee pages

use serde::{Deserialize, Serialize};

/// Page identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoutePath {
    Login,
    Bills,
    NewBill,
}

impl RoutePath {
    pub const ALL: [RoutePath; 3] = [RoutePath::Login, RoutePath::Bills, RoutePath::NewBill];

    /// URL path of the page
    pub fn path(&self) -> &'static str {
        match self {
            RoutePath::Login => "/",
            RoutePath::Bills => "/bills",
            RoutePath::NewBill => "/bills/new",
        }
    }

    /// Page title
    pub fn title(&self) -> &'static str {
        match self {
            RoutePath::Login => "Connexion",
            RoutePath::Bills => "Mes notes de frais",
            RoutePath::NewBill => "Envoyer une note de frais",
        }
    }

    /// Look up the page served at `path`
    pub fn from_path(path: &str) -> Option<Self> {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        Self::ALL.into_iter().find(|r| r.path() == path)
    }
}

impl std::fmt::Display for RoutePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(RoutePath::from_path("/"), Some(RoutePath::Login));
        assert_eq!(RoutePath::from_path("/bills"), Some(RoutePath::Bills));
        assert_eq!(RoutePath::from_path("/bills/"), Some(RoutePath::Bills));
        assert_eq!(RoutePath::from_path("/bills/new"), Some(RoutePath::NewBill));
        assert_eq!(RoutePath::from_path("/admin"), None);
    }

    #[test]
    fn test_paths_are_unique() {
        for route in RoutePath::ALL {
            assert_eq!(RoutePath::from_path(route.path()), Some(route));
        }
    }
}
