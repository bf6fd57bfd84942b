pub(crate) mod icons;
pub(crate) mod page;
pub(crate) mod style;
pub(crate) mod templates;
