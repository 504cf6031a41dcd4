//! Where a page action wants the app to go next. The router itself is the
//! renderer's business; pages only hand back one of these.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Home,
    Gallery,
    /// Layout designer, optionally opening or cloning a saved layout, or
    /// seeded with a house type
    Designer {
        view: Option<i64>,
        clone: Option<i64>,
        house_type: Option<i64>,
    },
    VirtualTour {
        house_type: Option<i64>,
    },
}

impl Navigation {
    pub fn designer() -> Self {
        Navigation::Designer {
            view: None,
            clone: None,
            house_type: None,
        }
    }

    pub fn view_layout(id: i64) -> Self {
        Navigation::Designer {
            view: Some(id),
            clone: None,
            house_type: None,
        }
    }

    pub fn clone_layout(id: i64) -> Self {
        Navigation::Designer {
            view: None,
            clone: Some(id),
            house_type: None,
        }
    }

    /// URL path for the intent. House type context travels as router state
    /// rather than in the URL, so it does not show up here.
    pub fn path(&self) -> String {
        match self {
            Navigation::Home => "/".to_string(),
            Navigation::Gallery => "/gallery".to_string(),
            Navigation::Designer { view: Some(id), .. } => format!("/app?view={}", id),
            Navigation::Designer { clone: Some(id), .. } => format!("/app?clone={}", id),
            Navigation::Designer { .. } => "/app".to_string(),
            Navigation::VirtualTour { .. } => "/virtual-tour".to_string(),
        }
    }

    /// House type handed to the next page, if any
    pub fn house_type(&self) -> Option<i64> {
        match self {
            Navigation::Designer { house_type, .. } | Navigation::VirtualTour { house_type } => *house_type,
            _ => None,
        }
    }
}

impl fmt::Display for Navigation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
