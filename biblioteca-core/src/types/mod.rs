//! Core types for the book catalog

mod estatisticas;
mod livro;

pub use estatisticas::Estatisticas;
pub use livro::{Livro, LivroPayload, ANO_MAXIMO, ANO_MINIMO};
