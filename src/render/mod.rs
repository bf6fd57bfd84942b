pub(crate) mod assets;
pub(crate) mod blur;
pub(crate) mod composite;
pub(crate) mod frame;
pub(crate) mod preview;
pub(crate) mod raster;
