mod store;

pub use store::{copy_atomically, move_into_place, write_atomically, CacheStore};
