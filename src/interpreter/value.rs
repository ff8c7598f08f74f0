/// The `Value` enum and its rendering, truthiness and equality rules.
///
/// Arrays and hashes are shared through `Rc<RefCell<..>>`, so every binding
/// of one collection observes mutations made through any other.
pub mod core;
/// Hash keys: a kind tag plus a content digest for each hashable value.
pub mod hash_key;
