//! Application state
//!
//! Everything the page shows is derived from this struct. It is owned by the
//! controller and mutated only through the methods below.

use crate::filter::SearchFilter;
use crate::form::FormController;
use crate::notify::{ConfirmModal, ToastSlot};
use crate::types::{Estatisticas, Livro};

#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Last full list fetched from the backend
    livros: Vec<Livro>,

    /// Search/filter projection currently displayed
    filtered: Vec<Livro>,

    pub form: FormController,
    pub search: SearchFilter,
    pub estatisticas: Estatisticas,

    /// Shown only while the full list is loading
    pub loading: bool,

    pub modal: ConfirmModal,
    pub toast: ToastSlot,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Authoritative list
    pub fn livros(&self) -> &[Livro] {
        &self.livros
    }

    /// Filtered view
    pub fn filtered(&self) -> &[Livro] {
        &self.filtered
    }

    /// Replace both collections after a successful full load and recount
    pub fn replace_livros(&mut self, livros: Vec<Livro>) {
        self.filtered = livros.clone();
        self.livros = livros;
        self.estatisticas = Estatisticas::from_livros(&self.livros);
    }

    /// Replace the filtered view with server search results, unfiltered
    pub fn set_search_results(&mut self, results: Vec<Livro>) {
        self.filtered = results;
    }

    /// Recompute the filtered view from the authoritative list
    pub fn apply_filters(&mut self) {
        self.filtered = self.search.apply(&self.livros);
        tracing::debug!(
            termo = %self.search.termo,
            somente_disponiveis = self.search.somente_disponiveis,
            matches = self.filtered.len(),
            "Applied client filter"
        );
    }

    /// Reset the search controls and show the full list again
    pub fn clear_search(&mut self) {
        self.search.clear();
        self.filtered = self.livros.clone();
    }

    /// Look up a displayed record by id
    pub fn find_displayed(&self, id: i64) -> Option<&Livro> {
        self.filtered.iter().find(|l| l.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Livro> {
        vec![
            Livro::new(1, "A", "Tolkien", "1", 2000),
            Livro::new(2, "B", "Herbert", "2", 2001).with_disponivel(false),
            Livro::new(3, "C", "Gibson", "3", 2002),
        ]
    }

    #[test]
    fn test_replace_livros_sets_both_views_and_stats() {
        let mut state = AppState::new();
        state.set_search_results(vec![Livro::new(9, "X", "Y", "Z", 1999)]);
        state.replace_livros(sample());

        assert_eq!(state.livros(), state.filtered());
        assert_eq!(state.estatisticas.total, 3);
        assert_eq!(state.estatisticas.disponiveis, 2);
    }

    #[test]
    fn test_filter_always_starts_from_full_list() {
        let mut state = AppState::new();
        state.replace_livros(sample());

        state.search.termo = "tolkien".to_string();
        state.apply_filters();
        assert_eq!(state.filtered().len(), 1);

        state.search.termo = "herbert".to_string();
        state.apply_filters();
        assert_eq!(state.filtered().len(), 1);
        assert_eq!(state.filtered()[0].id, 2);
    }

    #[test]
    fn test_clear_search_restores_full_list() {
        let mut state = AppState::new();
        state.replace_livros(sample());
        state.search.somente_disponiveis = true;
        state.apply_filters();
        assert_eq!(state.filtered().len(), 2);

        state.clear_search();
        assert_eq!(state.filtered(), state.livros());
        assert!(!state.search.somente_disponiveis);
    }

    #[test]
    fn test_search_results_bypass_availability() {
        let mut state = AppState::new();
        state.replace_livros(sample());
        state.search.somente_disponiveis = true;

        let unavailable = Livro::new(2, "B", "Herbert", "2", 2001).with_disponivel(false);
        state.set_search_results(vec![unavailable.clone()]);
        assert_eq!(state.filtered(), &[unavailable]);
        assert_eq!(state.find_displayed(2).map(|l| l.id), Some(2));
        assert!(state.find_displayed(1).is_none());
    }
}
