//! The book record, the sole domain entity

use serde::{Deserialize, Serialize};

/// Earliest accepted publication year
pub const ANO_MINIMO: i32 = 1000;

/// Latest accepted publication year
pub const ANO_MAXIMO: i32 = 2030;

/// A persisted book record as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Livro {
    /// Server-assigned identifier
    pub id: i64,

    pub titulo: String,

    pub autor: String,

    pub isbn: String,

    /// Publication year, within [`ANO_MINIMO`, `ANO_MAXIMO`]
    pub ano_publicacao: i32,

    /// Publisher name
    #[serde(default)]
    pub editora: Option<String>,

    /// Free-form description
    #[serde(default)]
    pub descricao: Option<String>,

    /// Whether the book is available for loan
    #[serde(default = "default_disponivel")]
    pub disponivel: bool,
}

fn default_disponivel() -> bool {
    true
}

impl Livro {
    /// Create a record with the required fields; it starts available
    pub fn new(
        id: i64,
        titulo: impl Into<String>,
        autor: impl Into<String>,
        isbn: impl Into<String>,
        ano_publicacao: i32,
    ) -> Self {
        Self {
            id,
            titulo: titulo.into(),
            autor: autor.into(),
            isbn: isbn.into(),
            ano_publicacao,
            editora: None,
            descricao: None,
            disponivel: true,
        }
    }

    /// Set publisher
    pub fn with_editora(mut self, editora: impl Into<String>) -> Self {
        self.editora = Some(editora.into());
        self
    }

    /// Set description
    pub fn with_descricao(mut self, descricao: impl Into<String>) -> Self {
        self.descricao = Some(descricao.into());
        self
    }

    /// Set availability
    pub fn with_disponivel(mut self, disponivel: bool) -> Self {
        self.disponivel = disponivel;
        self
    }

    /// The record without its identifier, as sent on create/update
    pub fn to_payload(&self) -> LivroPayload {
        LivroPayload {
            titulo: self.titulo.clone(),
            autor: self.autor.clone(),
            isbn: self.isbn.clone(),
            ano_publicacao: self.ano_publicacao,
            editora: self.editora.clone(),
            descricao: self.descricao.clone(),
            disponivel: self.disponivel,
        }
    }
}

/// Request body for POST /livros and PUT /livros/{id}
///
/// Absent optional fields serialize as explicit `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LivroPayload {
    pub titulo: String,
    pub autor: String,
    pub isbn: String,
    pub ano_publicacao: i32,
    pub editora: Option<String>,
    pub descricao: Option<String>,
    pub disponivel: bool,
}
