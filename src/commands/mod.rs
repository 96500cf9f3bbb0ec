// Desnative Command Modules — Systems Layer
//
// Each sub-module is a thin Tauri command wrapper.
// Logic lives in desnative-core; these modules only
// deserialise, delegate, and serialise.

pub mod history;
pub mod state;
pub mod updates;
pub mod window;
