//! Search and availability filtering
//!
//! Two mechanisms feed the filtered view. An explicit search with a non-empty
//! term is delegated to the server; everything else is a client-side filter
//! over the authoritative list.

use crate::types::Livro;

/// Search controls: the search field and the "only available" checkbox
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    /// Raw search field contents
    pub termo: String,
    pub somente_disponiveis: bool,
}

/// What an explicit search action should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    /// Ask the server, with the trimmed term as typed
    Server(String),
    /// Filter the authoritative list locally
    Client,
}

impl SearchFilter {
    pub fn new(termo: impl Into<String>, somente_disponiveis: bool) -> Self {
        Self {
            termo: termo.into(),
            somente_disponiveis,
        }
    }

    /// Decide between a server search and a client filter
    pub fn search_action(&self) -> SearchAction {
        let termo = self.termo.trim();
        if termo.is_empty() {
            SearchAction::Client
        } else {
            SearchAction::Server(termo.to_string())
        }
    }

    /// Client-side filter over the full list
    pub fn apply(&self, livros: &[Livro]) -> Vec<Livro> {
        filter_livros(livros, &self.termo, self.somente_disponiveis)
    }

    /// Empty the search field and uncheck the availability filter
    pub fn clear(&mut self) {
        self.termo.clear();
        self.somente_disponiveis = false;
    }
}

/// Case-insensitive substring match on titulo, autor and editora, intersected
/// with the availability filter
///
/// Order of the input is preserved.
pub fn filter_livros(livros: &[Livro], termo: &str, somente_disponiveis: bool) -> Vec<Livro> {
    let termo = termo.trim().to_lowercase();

    livros
        .iter()
        .filter(|livro| matches_termo(livro, &termo))
        .filter(|livro| !somente_disponiveis || livro.disponivel)
        .cloned()
        .collect()
}

fn matches_termo(livro: &Livro, termo: &str) -> bool {
    if termo.is_empty() {
        return true;
    }
    livro.titulo.to_lowercase().contains(termo)
        || livro.autor.to_lowercase().contains(termo)
        || livro
            .editora
            .as_ref()
            .is_some_and(|e| e.to_lowercase().contains(termo))
}
