//! Biblioteca Core Library
//!
//! This crate provides the domain types, form handling, search/filter logic and
//! rendering for the Biblioteca book catalog client. Everything here is pure:
//! state goes in, view models and markup come out. Network access lives in
//! `biblioteca-client`.

pub mod error;
pub mod filter;
pub mod form;
pub mod notify;
pub mod render;
pub mod state;
pub mod types;

pub use error::{Result, ValidationError};
pub use filter::{filter_livros, SearchAction, SearchFilter};
pub use form::{FormController, FormInput, FormMode, Submission};
pub use notify::{ConfirmModal, Severity, Toast, ToastSlot};
pub use render::{escape_html, render_card, render_list, ListView, PageView};
pub use state::AppState;
pub use types::{Estatisticas, Livro, LivroPayload, ANO_MAXIMO, ANO_MINIMO};
