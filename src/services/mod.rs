//! API services.
//!
//! The business logic lives in services. Each service is constructed once at startup and
//! provides methods of the following shape:
//!
//! ```ignore
//! async fn(&self, request: Request) -> Result<Response, Error>;
//! ```
//!
//! Services that map to HTTP endpoints also export an `http` module with a `router` function
//! returning an [`axum::Router`].

pub mod students;
pub use students::StudentService;
