//! Aggregate catalog counts

use super::Livro;
use serde::{Deserialize, Serialize};

/// Totals shown in the statistics header
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Estatisticas {
    pub total: u64,
    pub disponiveis: u64,
}

impl Estatisticas {
    /// Count a list of records locally
    pub fn from_livros(livros: &[Livro]) -> Self {
        Self {
            total: livros.len() as u64,
            disponiveis: livros.iter().filter(|l| l.disponivel).count() as u64,
        }
    }
}
