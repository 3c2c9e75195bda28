pub(crate) mod counter;
pub(crate) mod tree;
