pub mod cors;
pub mod router;
pub mod state;

pub use cors::apply_cors;
pub use router::build_router;
pub use state::AppState;
