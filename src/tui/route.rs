//! Navigation routes
//!
//! Routes format as paths so they can be passed on the command line:
//! `/`, `/create` and `/edit/<item id>`.

use std::fmt;
use std::str::FromStr;

use crate::error::PocketbookError;
use crate::models::ItemId;

/// A screen the TUI can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Listing,
    Create,
    Edit(ItemId),
}

impl Route {
    /// Whether this route mounts the item editor
    pub fn is_editor(&self) -> bool {
        matches!(self, Self::Create | Self::Edit(_))
    }

    /// The item being edited, if any
    pub fn edit_id(&self) -> Option<ItemId> {
        match self {
            Self::Edit(id) => Some(*id),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Listing => write!(f, "/"),
            Self::Create => write!(f, "/create"),
            Self::Edit(id) => write!(f, "/edit/{}", id.to_full_string()),
        }
    }
}

impl FromStr for Route {
    type Err = PocketbookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let path = s.trim();
        let path = path.strip_suffix('/').filter(|p| !p.is_empty()).unwrap_or(path);

        match path {
            "/" | "" => Ok(Self::Listing),
            "/create" => Ok(Self::Create),
            _ => {
                let id = path
                    .strip_prefix("/edit/")
                    .ok_or_else(|| PocketbookError::Validation(format!("Unknown route: {}", s)))?;
                id.parse::<ItemId>()
                    .map(Self::Edit)
                    .map_err(|_| PocketbookError::Validation(format!("Invalid item id in route: {}", id)))
            }
        }
    }
}
