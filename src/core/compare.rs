//! Compare model - two independent counting areas and their relation
//!
//! Unlike the Ten/Twenty screens there is no reconciliation here: each side
//! keeps its own number, and the model only derives how the two compare.

use crate::core::area::CountingArea;
use crate::types::{CompareSide, ComparisonRelation};

/// Model for the Compare screen
#[derive(Debug, Clone)]
pub struct CompareModel {
    left_area: CountingArea,
    right_area: CountingArea,
}

impl CompareModel {
    /// Create a model with both sides empty, each capped at `max_sum`
    pub fn new(max_sum: u32) -> Self {
        Self {
            left_area: CountingArea::new(max_sum),
            right_area: CountingArea::new(max_sum),
        }
    }

    pub fn area(&self, side: CompareSide) -> &CountingArea {
        match side {
            CompareSide::Left => &self.left_area,
            CompareSide::Right => &self.right_area,
        }
    }

    pub fn number(&self, side: CompareSide) -> u32 {
        self.area(side).sum()
    }

    /// How the left number relates to the right one
    pub fn comparison(&self) -> ComparisonRelation {
        ComparisonRelation::of(
            self.number(CompareSide::Left),
            self.number(CompareSide::Right),
        )
    }

    /// Add one object to `side`; refused at capacity
    pub fn add_object(&mut self, side: CompareSide) -> bool {
        if self.area(side).is_at_capacity() {
            return false;
        }
        self.area_mut(side).create_object_from_source();
        true
    }

    /// Remove one object from `side`; refused when empty
    pub fn remove_object(&mut self, side: CompareSide) -> bool {
        if self.number(side) == 0 {
            return false;
        }
        self.area_mut(side).return_objects_to_source(1);
        true
    }

    /// Empty both sides
    pub fn reset(&mut self) {
        self.left_area.reset();
        self.right_area.reset();
    }

    fn area_mut(&mut self, side: CompareSide) -> &mut CountingArea {
        match side {
            CompareSide::Left => &mut self.left_area,
            CompareSide::Right => &mut self.right_area,
        }
    }
}
