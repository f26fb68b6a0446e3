//! Categories and the resolver that maps category IDs to display attributes.
//!
//! A category acts like a tag for a transaction, however a transaction may only
//! have one category. Resolution never fails: a missing or unknown ID resolves
//! to [ResolvedCategory::Unknown], which has fixed display attributes.

use serde::{Deserialize, Serialize};

use crate::transaction::TransactionKind;

/// Identifier for a category.
pub type CategoryId = i64;

/// The name shown for a transaction whose category could not be resolved.
pub const UNKNOWN_CATEGORY_NAME: &str = "N/A";
/// The icon shown for a transaction whose category could not be resolved.
pub const UNKNOWN_CATEGORY_ICON: &str = "❓";
/// The bucket that unresolved transactions are grouped under in aggregations.
pub const UNCATEGORIZED_LABEL: &str = "Other";

/// The colour a category is drawn with in charts and legends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum ColorKey {
    Blue,
    Green,
    Purple,
    Amber,
    Red,
    Gray,
}

impl ColorKey {
    /// The hex colour code for the key, e.g. `"#3b82f6"`.
    pub fn hex(self) -> &'static str {
        match self {
            ColorKey::Blue => "#3b82f6",
            ColorKey::Green => "#10b981",
            ColorKey::Purple => "#a855f7",
            ColorKey::Amber => "#f59e0b",
            ColorKey::Red => "#ef4444",
            ColorKey::Gray => "#6b7280",
        }
    }

    /// The default palette entry for categories that do not set a colour.
    pub fn for_category_name(name: &str) -> Self {
        match name {
            "Rent" => ColorKey::Blue,
            "Fees Payment" => ColorKey::Green,
            "Transport" => ColorKey::Purple,
            "Entertainment" => ColorKey::Amber,
            "Utilities" => ColorKey::Red,
            _ => ColorKey::Gray,
        }
    }
}

/// A user defined category, e.g. "Rent" or "Salary".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// The ID of the category.
    pub id: CategoryId,
    /// The display name, e.g. "Rent".
    pub name: String,
    /// The kind of transaction this category is meant for. Not enforced by the
    /// resolver.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// An emoji glyph.
    #[serde(default)]
    pub icon: String,
    /// Overrides the default palette colour for the category name.
    #[serde(default)]
    pub color_key: Option<ColorKey>,
}

impl Category {
    /// The colour to draw the category with.
    pub fn color(&self) -> ColorKey {
        self.color_key
            .unwrap_or_else(|| ColorKey::for_category_name(&self.name))
    }
}

/// The display attributes of a transaction's category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ResolvedCategory {
    /// The category ID matched a known category.
    #[allow(missing_docs)]
    Known {
        id: CategoryId,
        name: String,
        icon: String,
        color: ColorKey,
    },
    /// The category ID was missing or did not match any category.
    Unknown,
}

impl ResolvedCategory {
    /// The name to display next to a transaction.
    pub fn name(&self) -> &str {
        match self {
            ResolvedCategory::Known { name, .. } => name,
            ResolvedCategory::Unknown => UNKNOWN_CATEGORY_NAME,
        }
    }

    /// The icon to display next to a transaction.
    pub fn icon(&self) -> &str {
        match self {
            ResolvedCategory::Known { icon, .. } => icon,
            ResolvedCategory::Unknown => UNKNOWN_CATEGORY_ICON,
        }
    }

    /// The label to group the transaction under when aggregating.
    pub fn group_label(&self) -> &str {
        match self {
            ResolvedCategory::Known { name, .. } => name,
            ResolvedCategory::Unknown => UNCATEGORIZED_LABEL,
        }
    }

    /// The colour to draw the category with.
    pub fn color(&self) -> ColorKey {
        match self {
            ResolvedCategory::Known { color, .. } => *color,
            ResolvedCategory::Unknown => ColorKey::Gray,
        }
    }
}

impl From<&Category> for ResolvedCategory {
    fn from(category: &Category) -> Self {
        ResolvedCategory::Known {
            id: category.id,
            name: category.name.clone(),
            icon: category.icon.clone(),
            color: category.color(),
        }
    }
}

/// Resolve the category with `id` in `categories`.
///
/// `categories` does not need to be sorted or deduplicated, the first match
/// wins. A missing `id`, an `id` that is not found and an empty list all
/// resolve to [ResolvedCategory::Unknown].
pub fn resolve(categories: &[Category], id: Option<CategoryId>) -> ResolvedCategory {
    id.and_then(|id| categories.iter().find(|category| category.id == id))
        .map(ResolvedCategory::from)
        .unwrap_or(ResolvedCategory::Unknown)
}

/// The categories that are meant for transactions of `kind`, in their original order.
pub fn categories_of_kind(categories: &[Category], kind: TransactionKind) -> Vec<&Category> {
    categories
        .iter()
        .filter(|category| category.kind == kind)
        .collect()
}
