// Configuration for the member rpc server and client
pub mod settings;
/// Types for the `[rpc]` and `[client]` sections of the settings file.
pub mod types;
pub mod util;

use once_cell::sync::OnceCell;

// Re-export for convenience
pub use settings::{init_global_settings, Settings};
pub use types::{ClientSettings, RpcSettings};
pub use util::{init_default_dir, load_settings};

/// Process wide settings, set once at startup
pub static MEMBER_CONFIG: OnceCell<Settings> = OnceCell::new();
