//! Create/edit form controller
//!
//! The form is either creating a new record or editing an existing one. Field
//! values are kept as the raw strings the user typed; they are only trimmed and
//! parsed when a submission is validated.

use crate::error::{Result, ValidationError};
use crate::types::{Livro, LivroPayload, ANO_MAXIMO, ANO_MINIMO};

/// Raw form field values, as captured from the inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub titulo: String,
    pub autor: String,
    pub isbn: String,
    pub ano_publicacao: String,
    pub editora: String,
    pub descricao: String,
    /// Tri-state select: `""`, `"true"` or `"false"`
    pub disponivel: String,
}

impl FormInput {
    /// Field values that repopulate the form from an existing record
    pub fn from_livro(livro: &Livro) -> Self {
        Self {
            titulo: livro.titulo.clone(),
            autor: livro.autor.clone(),
            isbn: livro.isbn.clone(),
            ano_publicacao: livro.ano_publicacao.to_string(),
            editora: livro.editora.clone().unwrap_or_default(),
            descricao: livro.descricao.clone().unwrap_or_default(),
            disponivel: livro.disponivel.to_string(),
        }
    }

    /// Trim, parse and check the fields, producing a request body
    ///
    /// Required fields are checked before the year range.
    pub fn validate(&self) -> Result<LivroPayload> {
        let titulo = self.titulo.trim();
        let autor = self.autor.trim();
        let isbn = self.isbn.trim();
        let ano = self.ano_publicacao.trim().parse::<i32>().ok();

        let ano = match ano {
            Some(ano) if !titulo.is_empty() && !autor.is_empty() && !isbn.is_empty() => ano,
            _ => return Err(ValidationError::MissingRequired),
        };

        if !(ANO_MINIMO..=ANO_MAXIMO).contains(&ano) {
            return Err(ValidationError::AnoOutOfRange {
                ano,
                min: ANO_MINIMO,
                max: ANO_MAXIMO,
            });
        }

        Ok(LivroPayload {
            titulo: titulo.to_string(),
            autor: autor.to_string(),
            isbn: isbn.to_string(),
            ano_publicacao: ano,
            editora: non_empty(&self.editora),
            descricao: non_empty(&self.descricao),
            disponivel: self.disponivel == "true",
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Whether the form creates a record or edits one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Edit {
        id: i64,
    },
}

/// A validated submission, ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// `None` creates, `Some(id)` updates
    pub target: Option<i64>,
    pub payload: LivroPayload,
}

/// Form state machine
#[derive(Debug, Clone, Default)]
pub struct FormController {
    mode: FormMode,
    input: FormInput,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Current field values
    pub fn input(&self) -> &FormInput {
        &self.input
    }

    /// Id of the record being edited, if any
    pub fn edit_target(&self) -> Option<i64> {
        match self.mode {
            FormMode::Create => None,
            FormMode::Edit { id } => Some(id),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.edit_target().is_some()
    }

    /// Switch to edit mode and populate every field from the record
    pub fn begin_edit(&mut self, livro: &Livro) {
        self.mode = FormMode::Edit { id: livro.id };
        self.input = FormInput::from_livro(livro);
    }

    /// Back to create mode with empty fields
    pub fn reset(&mut self) {
        self.mode = FormMode::Create;
        self.input = FormInput::default();
    }

    /// Capture the submitted values and validate them
    ///
    /// The values stay in the form when validation fails, as they would in
    /// the inputs.
    pub fn submit(&mut self, input: FormInput) -> Result<Submission> {
        self.input = input;
        let payload = self.input.validate()?;
        Ok(Submission {
            target: self.edit_target(),
            payload,
        })
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Adicionar Novo Livro",
            FormMode::Edit { .. } => "Editar Livro",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Salvar",
            FormMode::Edit { .. } => "Atualizar",
        }
    }

    pub fn cancel_visible(&self) -> bool {
        self.is_editing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> FormInput {
        FormInput {
            titulo: "  O Hobbit ".to_string(),
            autor: "J.R.R. Tolkien".to_string(),
            isbn: " 978-8595084742".to_string(),
            ano_publicacao: "1937".to_string(),
            editora: "   ".to_string(),
            descricao: "Uma aventura".to_string(),
            disponivel: "true".to_string(),
        }
    }

    #[test]
    fn test_validate_trims_and_normalizes() {
        let payload = valid_input().validate().unwrap();
        assert_eq!(payload.titulo, "O Hobbit");
        assert_eq!(payload.isbn, "978-8595084742");
        assert_eq!(payload.ano_publicacao, 1937);
        assert_eq!(payload.editora, None);
        assert_eq!(payload.descricao.as_deref(), Some("Uma aventura"));
        assert!(payload.disponivel);
    }

    #[test]
    fn test_missing_required_field() {
        let mut input = valid_input();
        input.autor = "   ".to_string();
        assert_eq!(input.validate(), Err(ValidationError::MissingRequired));

        let mut input = valid_input();
        input.ano_publicacao = String::new();
        assert_eq!(input.validate(), Err(ValidationError::MissingRequired));
    }

    #[test]
    fn test_missing_field_reported_before_range() {
        let mut input = valid_input();
        input.titulo = String::new();
        input.ano_publicacao = "999".to_string();
        assert_eq!(input.validate(), Err(ValidationError::MissingRequired));
    }

    #[test]
    fn test_year_bounds() {
        let mut input = valid_input();

        input.ano_publicacao = "999".to_string();
        assert!(matches!(
            input.validate(),
            Err(ValidationError::AnoOutOfRange { ano: 999, .. })
        ));

        input.ano_publicacao = "2031".to_string();
        assert!(input.validate().is_err());

        input.ano_publicacao = "1000".to_string();
        assert!(input.validate().is_ok());

        input.ano_publicacao = "2030".to_string();
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_disponivel_exact_match() {
        let mut input = valid_input();
        for (raw, expected) in [("true", true), ("false", false), ("", false), ("TRUE", false)] {
            input.disponivel = raw.to_string();
            assert_eq!(input.validate().unwrap().disponivel, expected, "raw {raw:?}");
        }
    }

    #[test]
    fn test_edit_transition_populates_fields() {
        let livro = Livro::new(7, "Duna", "Frank Herbert", "123", 1965)
            .with_editora("Aleph")
            .with_disponivel(false);

        let mut form = FormController::new();
        assert_eq!(form.title(), "Adicionar Novo Livro");
        assert_eq!(form.submit_label(), "Salvar");
        assert!(!form.cancel_visible());

        form.begin_edit(&livro);
        assert_eq!(form.mode(), FormMode::Edit { id: 7 });
        assert_eq!(form.title(), "Editar Livro");
        assert_eq!(form.submit_label(), "Atualizar");
        assert!(form.cancel_visible());
        assert_eq!(form.input().editora, "Aleph");
        assert_eq!(form.input().descricao, "");
        assert_eq!(form.input().disponivel, "false");
        assert_eq!(form.input().ano_publicacao, "1965");

        form.reset();
        assert_eq!(form.mode(), FormMode::Create);
        assert_eq!(form.input(), &FormInput::default());
    }

    #[test]
    fn test_submit_carries_edit_target() {
        let livro = Livro::new(3, "A", "B", "C", 2000);
        let mut form = FormController::new();
        form.begin_edit(&livro);

        let submission = form.submit(FormInput::from_livro(&livro)).unwrap();
        assert_eq!(submission.target, Some(3));
        assert_eq!(submission.payload, livro.to_payload());
    }

    #[test]
    fn test_failed_submit_keeps_values_and_mode() {
        let livro = Livro::new(3, "A", "B", "C", 2000);
        let mut form = FormController::new();
        form.begin_edit(&livro);

        let mut input = FormInput::from_livro(&livro);
        input.ano_publicacao = "3000".to_string();
        assert!(form.submit(input.clone()).is_err());
        assert_eq!(form.input(), &input);
        assert_eq!(form.edit_target(), Some(3));
    }
}
