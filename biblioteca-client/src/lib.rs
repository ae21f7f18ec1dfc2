//! Biblioteca Client Library
//!
//! Talks to the book catalog REST backend and drives the application state
//! from UI events. The [`App`] controller owns the state; hosts feed it
//! [`events::DomEvent`]s and receive rendered [`biblioteca_core::PageView`]s
//! through a [`Surface`].

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod surface;

pub use api::{ApiClient, HttpClient, LivrosApi};
pub use app::App;
pub use config::ClientConfig;
pub use error::{ApiError, HttpError};
pub use events::{Bindings, DomEvent, ElementId, EventDetail, EventKind, UiEvent};
pub use surface::{RecordingSurface, Surface};
