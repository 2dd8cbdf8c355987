pub(crate) mod arrange;
pub(crate) mod cover;
pub(crate) mod geometry;
