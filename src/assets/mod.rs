pub(crate) mod decode;
pub(crate) mod reflect;
pub(crate) mod visual;
