//! Typed endpoints of the /livros resource

use super::{ApiClient, Method, RequestOptions};
use crate::error::ApiError;
use biblioteca_core::{Estatisticas, Livro, LivroPayload};

#[derive(Clone)]
pub struct LivrosApi {
    client: ApiClient,
}

impl LivrosApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// GET /livros
    pub async fn listar(&self) -> Result<Vec<Livro>, ApiError> {
        self.client.request("/livros", RequestOptions::default()).await
    }

    /// GET /livros/estatisticas
    pub async fn estatisticas(&self) -> Result<Estatisticas, ApiError> {
        self.client
            .request("/livros/estatisticas", RequestOptions::default())
            .await
    }

    /// GET /livros/buscar?termo=..., term sent as given
    pub async fn buscar(&self, termo: &str) -> Result<Vec<Livro>, ApiError> {
        let path = format!("/livros/buscar?termo={}", urlencoding::encode(termo));
        self.client.request(&path, RequestOptions::default()).await
    }

    /// GET /livros/{id}
    pub async fn buscar_por_id(&self, id: i64) -> Result<Livro, ApiError> {
        self.client
            .request(&format!("/livros/{}", id), RequestOptions::default())
            .await
    }

    /// GET /livros/disponiveis
    pub async fn listar_disponiveis(&self) -> Result<Vec<Livro>, ApiError> {
        self.client
            .request("/livros/disponiveis", RequestOptions::default())
            .await
    }

    /// POST /livros
    pub async fn criar(&self, payload: &LivroPayload) -> Result<Livro, ApiError> {
        let options = RequestOptions::new(Method::Post).json(payload)?;
        self.client.request("/livros", options).await
    }

    /// PUT /livros/{id}
    pub async fn atualizar(&self, id: i64, payload: &LivroPayload) -> Result<Livro, ApiError> {
        let options = RequestOptions::new(Method::Put).json(payload)?;
        self.client.request(&format!("/livros/{}", id), options).await
    }

    /// DELETE /livros/{id}; whatever body comes back is ignored
    pub async fn excluir(&self, id: i64) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .client
            .request(&format!("/livros/{}", id), RequestOptions::new(Method::Delete))
            .await?;
        Ok(())
    }
}
