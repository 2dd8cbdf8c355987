pub(crate) mod compose;
pub(crate) mod perspective;
pub(crate) mod rays;
pub(crate) mod surface;
