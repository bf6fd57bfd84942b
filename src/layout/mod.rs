pub(crate) mod blend;
pub(crate) mod breakpoint;
pub(crate) mod descriptor;
pub(crate) mod scroll;
