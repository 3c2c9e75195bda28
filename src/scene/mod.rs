pub(crate) mod customize;
pub(crate) mod pipeline;
pub(crate) mod recorder;
pub(crate) mod state;
