//! The three dashboard views and the page shell around them
//!
//! Each view is a plain function from its inputs to an HTML string and is
//! executed from scratch on every request.

pub mod exploration;
pub mod layout;
pub mod overview;
pub mod prediction;

use std::fmt;

use serde::{Deserialize, Serialize};

/// View selected in the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Overview,
    Exploration,
    Prediction,
}

impl Page {
    /// Sidebar options, top to bottom
    pub const ALL: [Self; 3] = [Self::Overview, Self::Exploration, Self::Prediction];

    /// Sidebar label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Exploration => "Exploration",
            Self::Prediction => "Prediction",
        }
    }

    /// URL path of the view
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Overview => "/overview",
            Self::Exploration => "/exploration",
            Self::Prediction => "/prediction",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub use exploration::render_exploration;
pub use overview::render_overview;
pub use prediction::{render_prediction, render_prediction_form};
