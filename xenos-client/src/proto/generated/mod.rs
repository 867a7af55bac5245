#[rustfmt::skip]
#[allow(clippy::all)]
#[path = "scrayosnet.xenos.rs"]
pub mod scrayosnet_xenos;
