//! One picker per bound element.
//!
//! Elements are identified by any hashable key (a widget id, a form field
//! name). Initialising an element that already has a picker replaces it.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::PickerResult;
use crate::models::settings::PickerSettings;
use crate::services::picker::DatePicker;

#[derive(Debug)]
pub struct PickerRegistry<K> {
    pickers: HashMap<K, DatePicker>,
}

impl<K> Default for PickerRegistry<K> {
    fn default() -> Self {
        Self {
            pickers: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Debug> PickerRegistry<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `picker` to `key`, returning the picker it replaced.
    pub fn init(&mut self, key: K, picker: DatePicker) -> Option<DatePicker> {
        let replaced = self.pickers.insert(key, picker);
        if replaced.is_some() {
            log::debug!("Replaced existing picker");
        }
        replaced
    }

    /// Build a default-strategy picker for each `(key, input text)` pair
    /// sharing one configuration.
    pub fn init_all<I>(&mut self, inputs: I, settings: &PickerSettings) -> PickerResult<usize>
    where
        I: IntoIterator<Item = (K, String)>,
    {
        let mut count = 0;
        for (key, input_value) in inputs {
            let picker = DatePicker::builder(settings.clone())
                .input_value(input_value)
                .build()?;
            self.init(key, picker);
            count += 1;
        }
        Ok(count)
    }

    pub fn get(&self, key: &K) -> Option<&DatePicker> {
        self.pickers.get(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut DatePicker> {
        self.pickers.get_mut(key)
    }

    /// Detach and return the picker bound to `key`.
    pub fn remove(&mut self, key: &K) -> Option<DatePicker> {
        self.pickers.remove(key)
    }

    pub fn len(&self) -> usize {
        self.pickers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pickers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &DatePicker)> {
        self.pickers.iter()
    }
}
