pub mod api;
pub mod copy;
pub mod error;
pub mod form;

#[cfg(not(target_arch = "wasm32"))]
pub mod client;

pub use api::{TourismRequest, TourismResponse, TOURISM_ENDPOINT};
#[cfg(not(target_arch = "wasm32"))]
pub use client::TourismClient;
pub use error::{FormError, RequestError};
pub use form::{
    Completion, Controls, FormView, Generation, Key, Panel, PendingRequest, Phase, SubmitOutcome,
};
