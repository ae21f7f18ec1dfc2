//! Rendering: state to view model to markup
//!
//! Nothing here touches the network or keeps state. [`PageView::from_state`]
//! captures everything the page shows, and the `render_*` functions turn it
//! into HTML. User-supplied text is always escaped; numbers are written as is.

use crate::form::FormInput;
use crate::notify::Severity;
use crate::state::AppState;
use crate::types::{Estatisticas, Livro};

/// Full page view model
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub form: FormView,
    pub search: SearchView,
    pub estatisticas: Estatisticas,
    pub loading_visible: bool,
    pub list: ListView,
    pub modal_open: bool,
    pub toast: Option<ToastView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub title: &'static str,
    pub submit_label: &'static str,
    pub cancel_visible: bool,
    pub values: FormInput,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchView {
    pub termo: String,
    pub somente_disponiveis: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListView {
    pub empty_state_visible: bool,
    pub list_visible: bool,
    /// One rendered card per record in the filtered view
    pub cards: Vec<String>,
}

impl ListView {
    /// Contents of the list container
    pub fn markup(&self) -> String {
        self.cards.concat()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToastView {
    pub message: String,
    pub severity: Severity,
}

impl PageView {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            form: FormView {
                title: state.form.title(),
                submit_label: state.form.submit_label(),
                cancel_visible: state.form.cancel_visible(),
                values: state.form.input().clone(),
            },
            search: SearchView {
                termo: state.search.termo.clone(),
                somente_disponiveis: state.search.somente_disponiveis,
            },
            estatisticas: state.estatisticas,
            loading_visible: state.loading,
            list: render_list(state.filtered()),
            modal_open: state.modal.is_open(),
            toast: state.toast.current().map(|t| ToastView {
                message: t.message.clone(),
                severity: t.severity,
            }),
        }
    }

    /// Render the whole page
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        html.push_str("<main class=\"container\">\n");

        html.push_str("<section class=\"stats\">\n");
        html.push_str(&format!(
            "<span id=\"totalLivros\">{}</span>\n<span id=\"livrosDisponiveis\">{}</span>\n",
            self.estatisticas.total, self.estatisticas.disponiveis
        ));
        html.push_str("</section>\n");

        html.push_str(&render_form(&self.form));
        html.push_str(&render_search(&self.search));

        html.push_str(&format!(
            "<div id=\"loading\"{}>Carregando...</div>\n",
            display(self.loading_visible)
        ));
        html.push_str(&format!(
            "<div id=\"emptyState\"{}>Nenhum livro encontrado</div>\n",
            display(self.list.empty_state_visible)
        ));
        html.push_str(&format!(
            "<div id=\"livrosList\"{}>\n{}</div>\n",
            display(self.list.list_visible),
            self.list.markup()
        ));

        html.push_str(&format!(
            "<div id=\"confirmModal\" class=\"modal\"{}>\n\
             <div class=\"modal-content\">\n\
             <p>Tem certeza que deseja excluir este livro?</p>\n\
             <button id=\"confirmDelete\" class=\"btn btn-danger\">Excluir</button>\n\
             <button id=\"cancelDelete\" class=\"btn btn-secondary\">Cancelar</button>\n\
             </div>\n</div>\n",
            display(self.modal_open)
        ));

        html.push_str(&render_toast(self.toast.as_ref()));
        html.push_str("</main>\n");
        html
    }
}

/// `style` attribute for a toggled element
fn display(visible: bool) -> &'static str {
    if visible {
        ""
    } else {
        " style=\"display: none\""
    }
}

/// Project the filtered view into the list container
pub fn render_list(livros: &[Livro]) -> ListView {
    if livros.is_empty() {
        return ListView {
            empty_state_visible: true,
            list_visible: false,
            cards: Vec::new(),
        };
    }

    ListView {
        empty_state_visible: false,
        list_visible: true,
        cards: livros.iter().map(render_card).collect(),
    }
}

/// Render one book card
pub fn render_card(livro: &Livro) -> String {
    let (status_class, status_label) = if livro.disponivel {
        ("status-disponivel", "Disponível")
    } else {
        ("status-indisponivel", "Indisponível")
    };

    let mut html = String::new();
    html.push_str(&format!("<div class=\"livro-card\" data-id=\"{}\">\n", livro.id));
    html.push_str("  <div class=\"livro-header\">\n");
    html.push_str("    <div>\n");
    html.push_str(&format!(
        "      <div class=\"livro-title\">{}</div>\n",
        escape_html(&livro.titulo)
    ));
    html.push_str(&format!(
        "      <div class=\"livro-author\">por {}</div>\n",
        escape_html(&livro.autor)
    ));
    html.push_str("    </div>\n");
    html.push_str(&format!(
        "    <span class=\"livro-status {status_class}\">{status_label}</span>\n"
    ));
    html.push_str("  </div>\n");

    html.push_str("  <div class=\"livro-details\">\n");
    html.push_str(&detail("ISBN", &escape_html(&livro.isbn)));
    html.push_str(&detail("Ano", &livro.ano_publicacao.to_string()));
    if let Some(editora) = non_blank(&livro.editora) {
        html.push_str(&detail("Editora", &escape_html(editora)));
    }
    html.push_str("  </div>\n");

    if let Some(descricao) = non_blank(&livro.descricao) {
        html.push_str(&format!(
            "  <div class=\"livro-description\">{}</div>\n",
            escape_html(descricao)
        ));
    }

    html.push_str("  <div class=\"livro-actions\">\n");
    html.push_str(&format!(
        "    <button class=\"btn btn-warning btn-small\" data-action=\"edit\" data-id=\"{}\"><i class=\"fas fa-edit\"></i> Editar</button>\n",
        livro.id
    ));
    html.push_str(&format!(
        "    <button class=\"btn btn-danger btn-small\" data-action=\"delete\" data-id=\"{}\"><i class=\"fas fa-trash\"></i> Excluir</button>\n",
        livro.id
    ));
    html.push_str("  </div>\n");
    html.push_str("</div>\n");
    html
}

fn detail(label: &str, value: &str) -> String {
    format!(
        "    <div class=\"livro-detail\"><span class=\"detail-label\">{label}</span><span class=\"detail-value\">{value}</span></div>\n"
    )
}

// An empty optional field renders like a missing one
fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn render_form(form: &FormView) -> String {
    let values = &form.values;
    let mut html = String::new();
    html.push_str("<section class=\"form-section\">\n");
    html.push_str(&format!("<h2 id=\"formTitle\">{}</h2>\n", form.title));
    html.push_str("<form id=\"livroForm\">\n");
    for (name, value) in [
        ("titulo", &values.titulo),
        ("autor", &values.autor),
        ("isbn", &values.isbn),
        ("anoPublicacao", &values.ano_publicacao),
        ("editora", &values.editora),
    ] {
        html.push_str(&format!(
            "<input id=\"{name}\" name=\"{name}\" value=\"{}\">\n",
            escape_html(value)
        ));
    }
    html.push_str(&format!(
        "<textarea id=\"descricao\" name=\"descricao\">{}</textarea>\n",
        escape_html(&values.descricao)
    ));
    html.push_str("<select id=\"disponivel\" name=\"disponivel\">\n");
    for (value, label) in [
        ("", "Selecione"),
        ("true", "Disponível"),
        ("false", "Indisponível"),
    ] {
        let selected = if values.disponivel == value {
            " selected"
        } else {
            ""
        };
        html.push_str(&format!(
            "<option value=\"{value}\"{selected}>{label}</option>\n"
        ));
    }
    html.push_str("</select>\n");
    html.push_str(&format!(
        "<button type=\"submit\" class=\"btn btn-primary\"><span id=\"submitBtnText\">{}</span></button>\n",
        form.submit_label
    ));
    html.push_str(&format!(
        "<button type=\"button\" id=\"cancelBtn\" class=\"btn btn-secondary\"{}>Cancelar</button>\n",
        if form.cancel_visible {
            " style=\"display: inline-flex\""
        } else {
            " style=\"display: none\""
        }
    ));
    html.push_str("</form>\n</section>\n");
    html
}

fn render_search(search: &SearchView) -> String {
    format!(
        "<section class=\"search-section\">\n\
         <input id=\"searchInput\" value=\"{}\">\n\
         <button id=\"searchBtn\">Buscar</button>\n\
         <button id=\"clearSearchBtn\">Limpar</button>\n\
         <input type=\"checkbox\" id=\"filterDisponiveis\"{}>\n\
         </section>\n",
        escape_html(&search.termo),
        if search.somente_disponiveis {
            " checked"
        } else {
            ""
        }
    )
}

fn render_toast(toast: Option<&ToastView>) -> String {
    match toast {
        Some(toast) => format!(
            "<div id=\"toast\" class=\"toast {} show\">{}</div>\n",
            toast.severity.css_class(),
            escape_html(&toast.message)
        ),
        None => "<div id=\"toast\" class=\"toast\"></div>\n".to_string(),
    }
}

/// Escape HTML special characters
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
