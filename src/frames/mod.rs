pub(crate) mod builders;
pub(crate) mod shift;
pub(crate) mod synth;
