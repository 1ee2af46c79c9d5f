pub mod access_log;
pub mod extract;
pub mod listen;
pub mod respond;
pub mod router;
pub mod routes;
pub mod static_assets;

pub use listen::bind_listener;
pub use router::{AppState, build_router};
pub use static_assets::{AssetDir, StaticAssets};
