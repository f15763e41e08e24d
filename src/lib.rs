mod entry;
pub use entry::Entry;

mod counter_map;
pub use counter_map::{CounterMap, ABSENT, CAPACITY_MULTIPLIER, DEFAULT_CAPACITY};

// core map impl
mod sorted_map;
pub use sorted_map::SortedCounterMap;

mod linear_map;
pub use linear_map::LinearCounterMap;

pub mod key_search;
