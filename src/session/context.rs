//! Session context passed between commands
//!
//! Holds the chosen category and the latest progress record. Commands take
//! the context as a parameter and hand back an updated one; only
//! `load`/`save` touch the scratch store.

use crate::assessment::Category;
use crate::errors::Result;
use crate::planning::{adjust_plan, generate_plan, AdjustedPlan, ProgressRecord};
use crate::session::persistence::ScratchStore;

/// Scratch key holding the category label
pub const CATEGORY_KEY: &str = "huidong.personality";

/// Scratch key holding the serialized progress record
pub const PROGRESS_KEY: &str = "huidong.progress";

/// State carried across commands
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionContext {
    pub category: Option<Category>,
    pub progress: Option<ProgressRecord>,
}

impl SessionContext {
    /// Read the context from the scratch store
    ///
    /// Unreadable values are logged and treated as absent.
    pub fn load(store: &ScratchStore) -> Result<Self> {
        let entries = store.load_all()?;

        let category = entries.get(CATEGORY_KEY).and_then(|label| match label.parse::<Category>() {
            Ok(category) => Some(category),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring stored category");
                None
            }
        });

        let progress = entries.get(PROGRESS_KEY).and_then(|json| {
            match serde_json::from_str::<ProgressRecord>(json) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(error = %e, "ignoring stored progress record");
                    None
                }
            }
        });

        Ok(Self { category, progress })
    }

    /// Write the context back; absent fields remove their keys
    pub fn save(&self, store: &ScratchStore) -> Result<()> {
        match self.category {
            Some(category) => store.set(CATEGORY_KEY, category.as_str())?,
            None => store.remove(CATEGORY_KEY)?,
        }
        match &self.progress {
            Some(record) => {
                let json = serde_json::to_string(record)?;
                store.set(PROGRESS_KEY, &json)?;
            }
            None => store.remove(PROGRESS_KEY)?,
        }
        Ok(())
    }

    /// Category to plan for; Explorer when no assessment was stored
    pub fn category_or_default(&self) -> Category {
        self.category.unwrap_or_default()
    }

    /// Context with a newly assessed category
    pub fn with_category(self, category: Category) -> Self {
        Self {
            category: Some(category),
            ..self
        }
    }

    /// Context with a new progress record, replacing the old one
    pub fn with_progress(self, progress: ProgressRecord) -> Self {
        Self {
            progress: Some(progress),
            ..self
        }
    }

    /// Base plan for the current category adjusted by the stored progress
    pub fn current_plan(&self) -> AdjustedPlan {
        let category = self.category_or_default();
        let base = generate_plan(category);
        adjust_plan(category, &base, self.progress.as_ref())
    }
}
