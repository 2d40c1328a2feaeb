#[cfg(feature = "core")]
#[doc(inline)]
pub use svpath_core as core;

#[cfg(feature = "io")]
#[doc(inline)]
pub use svpath_io as io;

#[cfg(feature = "charts")]
#[doc(inline)]
pub use svpath_charts as charts;

#[cfg(feature = "table")]
#[doc(inline)]
pub use svpath_table as table;

#[cfg(feature = "dashboard")]
#[doc(inline)]
pub use svpath_dashboard as dashboard;
