use reqwest::Client;

use crate::error::TmdbError;

pub const BASE_URL: &str = "https://api.themoviedb.org/3";

pub struct TmdbClient {
    client: Client,
    api_key: String,
    lang: Option<String>,
    base_url: String,
}

impl TmdbClient {
    /// Create a TmdbClient with a reqwest Client.
    pub fn with_client(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            lang: None,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Request localized results (e.g. `en-US`). An empty string disables the parameter.
    pub fn with_language(mut self, lang: impl Into<String>) -> Self {
        let lang = lang.into();
        self.lang = (!lang.is_empty()).then_some(lang);
        self
    }

    /// Point the client at another API root, e.g. a caching proxy.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Query parameters sent with every request.
    pub(crate) fn common_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("api_key", self.api_key.clone())];
        if let Some(lang) = &self.lang {
            params.push(("language", lang.clone()));
        }
        params
    }

    pub(crate) async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> crate::Result<T> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(TmdbError::Api {
                status_code: status.as_u16(),
                message: body,
            });
        }
        parse_body(&body)
    }
}

pub(crate) fn parse_body<T: serde::de::DeserializeOwned>(body: &str) -> crate::Result<T> {
    let deserializer = &mut serde_json::Deserializer::from_str(body);
    serde_path_to_error::deserialize(deserializer).map_err(|e| TmdbError::Json {
        path: e.path().to_string(),
        source: e.into_inner(),
    })
}
