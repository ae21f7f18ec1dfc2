//! Application controller
//!
//! [`App`] owns the [`AppState`] and runs every user-facing operation: loading,
//! saving, deleting, searching and the form/modal transitions. Each operation
//! catches its own failures and turns them into toasts; the state lock is
//! never held across a request, so when responses overlap the last one to
//! arrive wins.

use crate::api::{ApiClient, HttpClient, LivrosApi};
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::events::{Bindings, DomEvent, UiEvent};
use crate::surface::Surface;
use biblioteca_core::{AppState, FormInput, PageView, SearchAction, Severity, Submission};
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

/// Toast shown when a transport failure escapes a handler
pub const CONNECTION_ERROR_MESSAGE: &str =
    "Erro de conexão com o servidor. Verifique se o backend está rodando.";

/// Toast shown when a handler task panics
pub const UNEXPECTED_ERROR_MESSAGE: &str =
    "Ocorreu um erro inesperado. Verifique o console para mais detalhes.";

#[derive(Clone)]
pub struct App {
    api: LivrosApi,
    state: Arc<RwLock<AppState>>,
    surface: Arc<dyn Surface>,
    bindings: Arc<Bindings>,
    config: Arc<ClientConfig>,
}

impl App {
    /// Create a controller with the standard listeners
    pub fn new(config: ClientConfig, http: Arc<dyn HttpClient>, surface: Arc<dyn Surface>) -> Self {
        let api = LivrosApi::new(ApiClient::new(config.api_base_url.clone(), http));
        Self {
            api,
            state: Arc::new(RwLock::new(AppState::new())),
            surface,
            bindings: Arc::new(Bindings::standard()),
            config: Arc::new(config),
        }
    }

    /// Replace the listener registry
    pub fn with_bindings(mut self, bindings: Bindings) -> Self {
        self.bindings = Arc::new(bindings);
        self
    }

    pub fn api(&self) -> &LivrosApi {
        &self.api
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Copy of the current state
    pub async fn snapshot(&self) -> AppState {
        self.state.read().await.clone()
    }

    /// View model of the current state
    pub async fn page(&self) -> PageView {
        PageView::from_state(&*self.state.read().await)
    }

    /// Resolve a raw event through the listeners and run its handler
    pub async fn handle(&self, event: &DomEvent) -> Result<(), ApiError> {
        match self.bindings.resolve(event) {
            Some(ui_event) => self.dispatch(ui_event).await,
            None => {
                tracing::trace!(?event, "No listener for event");
                Ok(())
            }
        }
    }

    /// Handle a raw event in its own task, reporting whatever escapes it
    pub fn spawn(&self, event: DomEvent) -> JoinHandle<()> {
        let app = self.clone();
        tokio::spawn(async move {
            let worker = app.clone();
            let outcome = tokio::spawn(async move { worker.handle(&event).await }).await;
            match outcome {
                Ok(Ok(())) => {}
                Ok(Err(e)) => app.report_unhandled(&e).await,
                Err(e) if e.is_panic() => app.report_fault(&e.to_string()).await,
                Err(e) => tracing::debug!("Event task cancelled: {}", e),
            }
        })
    }

    /// Run the handler for a semantic event
    pub async fn dispatch(&self, event: UiEvent) -> Result<(), ApiError> {
        tracing::debug!(?event, "Dispatching UI event");
        match event {
            UiEvent::Ready => self.start().await,
            UiEvent::SubmitForm(input) => self.submit_form(input).await,
            UiEvent::CancelEdit => self.cancel_edit().await,
            UiEvent::SearchInput(value) => self.set_search_term(value).await,
            UiEvent::Search => self.handle_search().await,
            UiEvent::ClearSearch => self.clear_search().await,
            UiEvent::FilterChanged(checked) => self.set_filter_disponiveis(checked).await,
            UiEvent::EditRequested(id) => return self.edit_livro(id).await,
            UiEvent::DeleteRequested(id) => self.request_delete(id).await,
            UiEvent::ConfirmDelete => self.confirm_delete().await,
            UiEvent::CloseModal => self.close_modal().await,
        }
        Ok(())
    }

    /// Initial load of the list and the statistics
    pub async fn start(&self) {
        tokio::join!(self.load_livros(), self.load_estatisticas());
    }

    /// Fetch the full list, replacing both views
    pub async fn load_livros(&self) {
        self.update(|s| s.loading = true).await;

        match self.api.listar().await {
            Ok(livros) => {
                tracing::info!(count = livros.len(), "Loaded livros");
                self.update(|s| {
                    s.replace_livros(livros);
                    s.loading = false;
                })
                .await;
            }
            Err(e) => {
                self.update(|s| s.loading = false).await;
                self.show_toast(format!("Erro ao carregar livros: {}", e), Severity::Error)
                    .await;
            }
        }
    }

    /// Fetch the aggregate counts. Failures are only logged.
    pub async fn load_estatisticas(&self) {
        match self.api.estatisticas().await {
            Ok(estatisticas) => self.update(|s| s.estatisticas = estatisticas).await,
            Err(e) => tracing::warn!("Erro ao carregar estatísticas: {}", e),
        }
    }

    /// Validate the submitted fields and save them, or warn
    pub async fn submit_form(&self, input: FormInput) {
        match self.update(|s| s.form.submit(input)).await {
            Ok(submission) => self.save_livro(submission).await,
            Err(e) => {
                tracing::debug!("Form rejected: {}", e);
                self.show_toast(e.to_string(), Severity::Warning).await;
            }
        }
    }

    /// POST a new record or PUT an edited one
    pub async fn save_livro(&self, submission: Submission) {
        let Submission { target, payload } = submission;
        let result = match target {
            Some(id) => self.api.atualizar(id, &payload).await,
            None => self.api.criar(&payload).await,
        };

        match result {
            Ok(livro) => {
                tracing::info!(id = livro.id, updated = target.is_some(), "Saved livro");
                let message = if target.is_some() {
                    "Livro atualizado com sucesso!"
                } else {
                    "Livro adicionado com sucesso!"
                };
                self.show_toast(message, Severity::Success).await;
                self.update(|s| s.form.reset()).await;
                tokio::join!(self.load_livros(), self.load_estatisticas());
            }
            Err(e) => {
                self.show_toast(format!("Erro ao salvar livro: {}", e), Severity::Error)
                    .await;
            }
        }
    }

    /// DELETE a record and reload
    pub async fn delete_livro(&self, id: i64) {
        match self.api.excluir(id).await {
            Ok(()) => {
                tracing::info!(id, "Deleted livro");
                self.show_toast("Livro excluído com sucesso!", Severity::Success)
                    .await;
                tokio::join!(self.load_livros(), self.load_estatisticas());
            }
            Err(e) => {
                self.show_toast(format!("Erro ao excluir livro: {}", e), Severity::Error)
                    .await;
            }
        }
    }

    /// Switch the form to edit mode for a displayed record
    ///
    /// The record normally comes from the filtered view. One that is no
    /// longer displayed is fetched by id; that failure is left to the caller.
    pub async fn edit_livro(&self, id: i64) -> Result<(), ApiError> {
        let displayed = self.state.read().await.find_displayed(id).cloned();
        let livro = match displayed {
            Some(livro) => livro,
            None => {
                tracing::debug!(id, "Record not displayed, fetching it");
                self.api.buscar_por_id(id).await?
            }
        };

        self.update(|s| s.form.begin_edit(&livro)).await;
        self.surface.scroll_to_form();
        Ok(())
    }

    pub async fn cancel_edit(&self) {
        self.update(|s| s.form.reset()).await;
    }

    pub async fn set_search_term(&self, termo: String) {
        self.update(|s| s.search.termo = termo).await;
    }

    /// Explicit search: server search for a non-empty term, client filter otherwise
    pub async fn handle_search(&self) {
        let action = self.state.read().await.search.search_action();
        match action {
            SearchAction::Server(termo) => self.search_livros(&termo).await,
            SearchAction::Client => self.update(|s| s.apply_filters()).await,
        }
    }

    /// Replace the filtered view with the server's matches
    pub async fn search_livros(&self, termo: &str) {
        match self.api.buscar(termo).await {
            Ok(results) => {
                tracing::debug!(termo, count = results.len(), "Server search");
                self.update(|s| s.set_search_results(results)).await;
            }
            Err(e) => {
                self.show_toast(format!("Erro na busca: {}", e), Severity::Error)
                    .await;
            }
        }
    }

    pub async fn clear_search(&self) {
        self.update(|s| s.clear_search()).await;
    }

    pub async fn set_filter_disponiveis(&self, checked: bool) {
        self.update(|s| {
            s.search.somente_disponiveis = checked;
            s.apply_filters();
        })
        .await;
    }

    /// Open the confirmation dialog for `id`; nothing is deleted yet
    pub async fn request_delete(&self, id: i64) {
        self.update(|s| s.modal.open(id)).await;
    }

    /// Close the dialog and delete its pending record, if any
    pub async fn confirm_delete(&self) {
        if let Some(id) = self.update(|s| s.modal.confirm()).await {
            self.delete_livro(id).await;
        }
    }

    pub async fn close_modal(&self) {
        self.update(|s| s.modal.close()).await;
    }

    /// Show a toast and schedule its dismissal
    pub async fn show_toast(&self, message: impl Into<String>, severity: Severity) {
        let generation = self.update(|s| s.toast.show(message, severity)).await;

        let app = self.clone();
        let duration = self.config.toast_duration;
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            let mut state = app.state.write().await;
            if state.toast.dismiss(generation) {
                app.surface.render(&PageView::from_state(&state));
            }
        });
    }

    /// Global handler for errors that escaped an event handler
    pub async fn report_unhandled(&self, err: &ApiError) {
        tracing::error!("Unhandled error: {}", err);
        if err.is_transport() {
            self.show_toast(CONNECTION_ERROR_MESSAGE, Severity::Error)
                .await;
        }
    }

    /// Global handler for runtime faults
    pub async fn report_fault(&self, detail: &str) {
        tracing::error!("Global error: {}", detail);
        self.show_toast(UNEXPECTED_ERROR_MESSAGE, Severity::Error)
            .await;
    }

    /// Mutate the state and render the result while still holding the lock,
    /// so renders happen in the same order as updates
    async fn update<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        let mut state = self.state.write().await;
        let result = f(&mut *state);
        self.surface.render(&PageView::from_state(&state));
        result
    }
}
