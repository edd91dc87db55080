//! Category selection and weight validation
//!
//! Validity is recomputed on every read from the current weights; there is
//! no cached flag that could go stale between edits.

use super::roster::Category;
use crate::error::ValidationError;

/// Absolute tolerance for the "weights sum to 1.0" check
pub const WEIGHT_TOLERANCE: f64 = 0.001;

// Absorbs binary representation error at the tolerance boundary (0.999, 1.001).
const BOUNDARY_SLACK: f64 = 1e-9;

/// The category set of one configuration session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategorySet {
    categories: Vec<Category>,
}

impl CategorySet {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Resolve a category by its header label, falling back to a numeric index
    pub fn find_by_name(&self, name: &str) -> Result<usize, ValidationError> {
        let wanted = name.trim();
        if let Some(category) = self.categories.iter().find(|c| c.name == wanted) {
            return Ok(category.index);
        }
        match wanted.parse::<usize>() {
            Ok(index) if index < self.categories.len() => Ok(index),
            _ => Err(ValidationError::UnknownCategoryName {
                name: wanted.to_string(),
            }),
        }
    }

    /// Toggle membership in the selection set; deselecting resets the weight to 0
    pub fn set_selected(&mut self, index: usize, selected: bool) -> Result<(), ValidationError> {
        let category = self.category_mut(index)?;
        category.selected = selected;
        if !selected {
            category.weight = 0.0;
        }
        Ok(())
    }

    /// Set a selected category's weight, clamped to [0, 1]
    ///
    /// Non-finite and negative values become 0. Unselected categories keep
    /// weight 0; the edit is ignored.
    pub fn set_weight(&mut self, index: usize, value: f64) -> Result<(), ValidationError> {
        let category = self.category_mut(index)?;
        if !category.selected {
            return Ok(());
        }
        category.weight = sanitize_weight(value);
        Ok(())
    }

    /// Set a weight from raw user input; unparseable text counts as 0
    pub fn set_weight_input(&mut self, index: usize, input: &str) -> Result<(), ValidationError> {
        let value = input.trim().parse::<f64>().unwrap_or(0.0);
        self.set_weight(index, value)
    }

    /// Categories currently in the selection set, in index order
    pub fn selected(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(|c| c.selected)
    }

    pub fn has_selection(&self) -> bool {
        self.categories.iter().any(|c| c.selected)
    }

    /// Sum of the weights of selected categories
    pub fn current_sum(&self) -> f64 {
        self.selected().map(|c| c.weight).sum()
    }

    /// True when nothing is selected, or the selected weights sum to 1.0 within tolerance
    pub fn is_valid(&self) -> bool {
        !self.has_selection() || (self.current_sum() - 1.0).abs() <= WEIGHT_TOLERANCE + BOUNDARY_SLACK
    }

    fn category_mut(&mut self, index: usize) -> Result<&mut Category, ValidationError> {
        self.categories
            .get_mut(index)
            .ok_or(ValidationError::UnknownCategory { index })
    }
}

fn sanitize_weight(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
