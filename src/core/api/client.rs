// HTTP client for the computation backend.

use serde::de::DeserializeOwned;
use thiserror::Error;

use super::model::{
    CubicalHomologyRequest, CubicalHomologyResponse, GenerateDataQuery, PointCloud,
    VietorisRipsRequest, VietorisRipsResponse,
};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("backend returned {0}")]
    Status(reqwest::StatusCode),
}

/// Client bound to one resolved API base path (trailing slash included).
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sample a noisy point cloud from one of the reference shapes
    pub async fn generate_data(&self, query: &GenerateDataQuery) -> Result<PointCloud, ApiError> {
        let response = self
            .http
            .get(self.endpoint("generate-data/"))
            .query(&[
                ("shape", query.shape.wire_name().to_string()),
                ("N", query.n.to_string()),
                ("error", query.error.to_string()),
                ("seed", query.seed.to_string()),
            ])
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Persistent homology of the KDE superlevel filtration
    pub async fn cubical_homology(
        &self,
        request: &CubicalHomologyRequest,
    ) -> Result<CubicalHomologyResponse, ApiError> {
        let response = self
            .http
            .post(self.endpoint("get-cubical-homology/"))
            .json(request)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Persistent homology of the Vietoris-Rips filtration
    pub async fn vietoris_rips_homology(
        &self,
        request: &VietorisRipsRequest,
    ) -> Result<VietorisRipsResponse, ApiError> {
        let response = self
            .http
            .post(self.endpoint("get-vr-homology/"))
            .json(request)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// Cheap reachability probe. Any HTTP response counts as up; the
    /// backend answers 404 on the bare base path.
    pub async fn ping(&self) -> bool {
        self.http.get(&self.base_url).send().await.is_ok()
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_path() {
        let client = ApiClient::new("http://localhost:8000/api/");
        assert_eq!(
            client.endpoint("generate-data/"),
            "http://localhost:8000/api/generate-data/"
        );
        assert_eq!(
            client.endpoint("get-vr-homology/"),
            "http://localhost:8000/api/get-vr-homology/"
        );
    }

    #[test]
    fn test_status_error_message_names_code() {
        let error = ApiError::Status(reqwest::StatusCode::BAD_GATEWAY);
        assert!(error.to_string().contains("502"));
    }
}
