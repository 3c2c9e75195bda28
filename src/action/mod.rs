pub(crate) mod directive;
pub(crate) mod pair;
pub(crate) mod scene_action;
pub(crate) mod transform;
