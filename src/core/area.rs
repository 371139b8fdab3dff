//! Counting area module - an owned collection of countable objects
//!
//! The area's `sum` is always derived from its live objects, never stored.
//! Mutations return `(new_sum, old_sum)` pairs so the reconciler can react
//! to each change without the area knowing who is listening.

/// A single countable entity
///
/// A grouped object counts as `group_size` units; an ungrouped object always
/// counts as a single unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountingObject {
    id: u32,
    grouped: bool,
    group_size: u32,
}

impl CountingObject {
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn grouped(&self) -> bool {
        self.grouped
    }

    pub fn group_size(&self) -> u32 {
        self.group_size
    }

    /// How many units this object contributes to the area sum
    pub fn value(&self) -> u32 {
        if self.grouped {
            self.group_size
        } else {
            1
        }
    }
}

/// An owned set of counting objects with a derived sum
#[derive(Debug, Clone)]
pub struct CountingArea {
    objects: Vec<CountingObject>,
    next_object_id: u32,
    grouping_enabled: bool,
    max_sum: u32,
    initial_sum: u32,
}

impl CountingArea {
    /// Create an empty area that can hold up to `max_sum` units
    pub fn new(max_sum: u32) -> Self {
        Self::with_initial_sum(max_sum, 0)
    }

    /// Create an area pre-populated with `initial_sum` individual units
    pub fn with_initial_sum(max_sum: u32, initial_sum: u32) -> Self {
        debug_assert!(initial_sum <= max_sum);
        let mut area = Self {
            objects: Vec::new(),
            next_object_id: 0,
            grouping_enabled: false,
            max_sum,
            initial_sum,
        };
        area.populate_initial();
        area
    }

    /// Total units over all live objects
    pub fn sum(&self) -> u32 {
        self.objects.iter().map(|o| o.value()).sum()
    }

    pub fn max_sum(&self) -> u32 {
        self.max_sum
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn objects(&self) -> &[CountingObject] {
        &self.objects
    }

    pub fn is_at_capacity(&self) -> bool {
        self.sum() >= self.max_sum
    }

    pub fn grouping_enabled(&self) -> bool {
        self.grouping_enabled
    }

    /// Toggle whether newly created objects join as groups
    pub fn set_grouping_enabled(&mut self, enabled: bool) {
        self.grouping_enabled = enabled;
    }

    /// Add exactly one unit, raising `sum` by 1
    ///
    /// The new object is a size-1 group when grouping is enabled, a plain
    /// unit otherwise. Capacity violations cannot happen when callers honor
    /// the screen's sum range; guarded in debug builds only.
    pub fn create_object_from_source(&mut self) -> (u32, u32) {
        let old_sum = self.sum();
        debug_assert!(old_sum < self.max_sum, "counting area is at capacity");

        self.objects.push(CountingObject {
            id: self.next_object_id,
            grouped: self.grouping_enabled,
            group_size: 1,
        });
        self.next_object_id += 1;

        (old_sum + 1, old_sum)
    }

    /// Remove objects totalling exactly `n` units
    ///
    /// Whole objects are removed newest-first; if the last object removed
    /// would overshoot, its group is shrunk in place so the total removed is
    /// exact. `n` must not exceed the current sum (debug-asserted).
    pub fn return_objects_to_source(&mut self, n: u32) -> (u32, u32) {
        let old_sum = self.sum();
        debug_assert!(n <= old_sum, "cannot return {} of {} units", n, old_sum);

        let mut remaining = n.min(old_sum);
        while remaining > 0 {
            let Some(last) = self.objects.last_mut() else {
                break;
            };
            let value = last.value();
            if value <= remaining {
                remaining -= value;
                self.objects.pop();
            } else {
                last.group_size -= remaining;
                remaining = 0;
            }
        }

        (self.sum(), old_sum)
    }

    /// Empty the area back to its configured initial state
    pub fn reset(&mut self) -> (u32, u32) {
        let old_sum = self.sum();
        self.populate_initial();
        (self.sum(), old_sum)
    }

    fn populate_initial(&mut self) {
        self.objects.clear();
        self.next_object_id = 0;
        for _ in 0..self.initial_sum {
            self.objects.push(CountingObject {
                id: self.next_object_id,
                grouped: false,
                group_size: 1,
            });
            self.next_object_id += 1;
        }
    }
}
