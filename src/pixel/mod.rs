pub(crate) mod argb;
pub(crate) mod convert;
