//! Number Play model - keeps two counting areas and one shared number in sync
//!
//! Both areas can be manipulated independently, so every sum change runs a
//! synchronization pass that drives the other area and the shared current
//! number into agreement. A pair of "leading" flags gives the pass mutual
//! exclusion: the follower's own change notification is recognized as an echo
//! and dropped instead of triggering a second pass.

use log::{debug, trace};

use crate::core::area::CountingArea;
use crate::core::snapshot::ModelSnapshot;
use crate::speech::NumberSpeaker;
use crate::types::AreaId;

type NumberListener = Box<dyn FnMut(u32)>;

/// Model for the Ten and Twenty screens: two reconciled counting areas
pub struct NumberPlayModel {
    max_sum: u32,
    current_number: u32,
    ones_area: CountingArea,
    objects_area: CountingArea,
    ones_leading: bool,
    objects_leading: bool,
    is_resetting: bool,
    speaker: NumberSpeaker,
    number_listeners: Vec<NumberListener>,
}

impl NumberPlayModel {
    /// Create a model whose shared number ranges over `[0, max_sum]`
    pub fn new(max_sum: u32) -> Self {
        let mut model = Self {
            max_sum,
            current_number: 0,
            ones_area: CountingArea::new(max_sum),
            objects_area: CountingArea::new(max_sum),
            ones_leading: false,
            objects_leading: false,
            is_resetting: false,
            speaker: NumberSpeaker::new(),
            number_listeners: Vec::new(),
        };
        model.speaker.speak_number(0);
        model
    }

    pub fn max_sum(&self) -> u32 {
        self.max_sum
    }

    pub fn current_number(&self) -> u32 {
        self.current_number
    }

    pub fn area(&self, id: AreaId) -> &CountingArea {
        match id {
            AreaId::Ones => &self.ones_area,
            AreaId::Objects => &self.objects_area,
        }
    }

    pub fn ones_sum(&self) -> u32 {
        self.ones_area.sum()
    }

    pub fn objects_sum(&self) -> u32 {
        self.objects_area.sum()
    }

    pub fn is_leading(&self, id: AreaId) -> bool {
        match id {
            AreaId::Ones => self.ones_leading,
            AreaId::Objects => self.objects_leading,
        }
    }

    pub fn is_resetting(&self) -> bool {
        self.is_resetting
    }

    /// The spoken-text sink fed by current-number changes
    pub fn speaker(&self) -> &NumberSpeaker {
        &self.speaker
    }

    /// Register a callback invoked with every new current number
    pub fn subscribe_number_changed(&mut self, listener: NumberListener) {
        self.number_listeners.push(listener);
    }

    /// Add one object to `id` as a user action
    ///
    /// Returns false (and changes nothing) when the area is already at the
    /// screen's maximum.
    pub fn add_object(&mut self, id: AreaId) -> bool {
        if self.area(id).is_at_capacity() {
            return false;
        }
        let (new_sum, old_sum) = self.area_mut(id).create_object_from_source();
        self.on_sum_changed(id, new_sum, old_sum);
        true
    }

    /// Remove one object from `id` as a user action
    pub fn remove_object(&mut self, id: AreaId) -> bool {
        self.return_objects(id, 1)
    }

    /// Remove `n` units from `id` at once (a grouped-object return)
    ///
    /// Returns false when the area holds fewer than `n` units.
    pub fn return_objects(&mut self, id: AreaId, n: u32) -> bool {
        if n > self.area(id).sum() {
            return false;
        }
        let (new_sum, old_sum) = self.area_mut(id).return_objects_to_source(n);
        self.on_sum_changed(id, new_sum, old_sum);
        true
    }

    pub fn set_grouping_enabled(&mut self, id: AreaId, enabled: bool) {
        self.area_mut(id).set_grouping_enabled(enabled);
    }

    /// Empty both areas and the shared number, areas first
    pub fn reset(&mut self) {
        self.is_resetting = true;
        self.ones_area.reset();
        self.objects_area.reset();
        self.set_current_number(0);
        self.is_resetting = false;
    }

    pub fn snapshot(&self) -> ModelSnapshot {
        ModelSnapshot {
            current_number: self.current_number,
            ones_sum: self.ones_sum(),
            objects_sum: self.objects_sum(),
            max_sum: self.max_sum,
            is_resetting: self.is_resetting,
            spoken_text: self.speaker.text().to_string(),
        }
    }

    fn area_mut(&mut self, id: AreaId) -> &mut CountingArea {
        match id {
            AreaId::Ones => &mut self.ones_area,
            AreaId::Objects => &mut self.objects_area,
        }
    }

    fn set_leading(&mut self, id: AreaId, leading: bool) {
        match id {
            AreaId::Ones => self.ones_leading = leading,
            AreaId::Objects => self.objects_leading = leading,
        }
    }

    fn set_current_number(&mut self, n: u32) {
        self.current_number = n;
        self.speaker.speak_number(n);
        for listener in &mut self.number_listeners {
            listener(n);
        }
    }

    /// Synchronization pass, run on every area sum-change notification
    ///
    /// Exactly one area may lead at a time. The follower's own change comes
    /// back through here and is dropped as an echo; a second notification
    /// from the leading area itself would mean reentrant mutation and is a
    /// broken caller contract.
    fn on_sum_changed(&mut self, id: AreaId, new_sum: u32, old_sum: u32) {
        if self.is_resetting {
            return;
        }
        if self.is_leading(id.other()) {
            trace!("{} echo dropped ({} -> {})", id.as_str(), old_sum, new_sum);
            return;
        }
        assert!(
            !self.is_leading(id),
            "reentrant synchronization pass led by {} area",
            id.as_str()
        );

        self.set_leading(id, true);
        debug!("{} leads: {} -> {}", id.as_str(), old_sum, new_sum);
        self.set_current_number(new_sum);

        if new_sum > old_sum {
            // An area may only ever grow one unit per notification.
            assert_eq!(
                new_sum - old_sum,
                1,
                "{} area sum jumped by more than one unit",
                id.as_str()
            );
            let (n, o) = self.area_mut(id.other()).create_object_from_source();
            self.on_sum_changed(id.other(), n, o);
        } else {
            let (n, o) = self
                .area_mut(id.other())
                .return_objects_to_source(old_sum - new_sum);
            self.on_sum_changed(id.other(), n, o);
        }

        self.set_leading(id, false);
    }
}

impl std::fmt::Debug for NumberPlayModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NumberPlayModel")
            .field("max_sum", &self.max_sum)
            .field("current_number", &self.current_number)
            .field("ones_area", &self.ones_area)
            .field("objects_area", &self.objects_area)
            .field("ones_leading", &self.ones_leading)
            .field("objects_leading", &self.objects_leading)
            .field("is_resetting", &self.is_resetting)
            .finish()
    }
}
