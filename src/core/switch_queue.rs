//! Switch queue
//!
//! Maps each switch letter to the values supplied for it, in the order they
//! appeared on the command line. Commands consume values with
//! [`SwitchQueue::take_next`]; a letter stays present after its values are
//! exhausted, so presence reflects what the user typed rather than what is
//! left.

use crate::types::Switch;
use std::collections::{BTreeMap, VecDeque};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwitchQueue {
    values: BTreeMap<char, VecDeque<String>>,
}

impl SwitchQueue {
    pub fn new() -> Self {
        SwitchQueue::default()
    }

    /// Append a value for `letter`
    ///
    /// Unknown letters are kept so that presence checks reflect the raw
    /// input, but no command ever reads them.
    pub fn push(&mut self, letter: char, value: impl Into<String>) {
        self.values.entry(letter).or_default().push_back(value.into());
    }

    /// Consume and return the oldest unconsumed value for `switch`
    ///
    /// Returns `None` when the switch was never supplied or all of its
    /// values have been taken. An empty string is a supplied value.
    pub fn take_next(&mut self, switch: Switch) -> Option<String> {
        self.values.get_mut(&switch.letter())?.pop_front()
    }

    /// The most recently supplied value for `switch`, without consuming it
    pub fn last(&self, switch: Switch) -> Option<&str> {
        self.values
            .get(&switch.letter())
            .and_then(|values| values.back())
            .map(String::as_str)
    }

    /// Whether `switch` was supplied at least once
    pub fn contains(&self, switch: Switch) -> bool {
        self.values.contains_key(&switch.letter())
    }

    /// Whether no switches at all were supplied
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(char, S)> for SwitchQueue {
    fn from_iter<I: IntoIterator<Item = (char, S)>>(iter: I) -> Self {
        let mut queue = SwitchQueue::new();
        for (letter, value) in iter {
            queue.push(letter, value);
        }
        queue
    }
}
