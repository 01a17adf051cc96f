use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Url;
use serde_json::Value;
use tracing::debug;

use super::types::{Activation, WebhookBody, WebhookReply, WorkflowApi, WorkflowList, WorkflowSummary};
use crate::config::{ManagerConfig, API_KEY_VAR};
use crate::error::{ManagerError, Result};
use crate::helpers::id_to_string;
use crate::workflow::WorkflowDocument;

pub const API_KEY_HEADER: &str = "x-n8n-api-key";
const API_PREFIX: [&str; 3] = ["api", "v1", "workflows"];

pub struct N8nClient {
    base_url: String,
    api_key: HeaderValue,
    client: Client,
}

impl N8nClient {
    pub fn new(cfg: &ManagerConfig) -> Result<Self> {
        // The blocking client defaults to a 30s timeout; `None` waits indefinitely.
        let client = Client::builder().timeout(cfg.timeout).build()?;
        let mut api_key =
            HeaderValue::from_str(&cfg.api_key).map_err(|_| ManagerError::InvalidEnv {
                name: API_KEY_VAR,
                reason: "not a valid http header value".to_string(),
            })?;
        api_key.set_sensitive(true);
        Ok(Self {
            base_url: cfg.base_url.clone(),
            api_key,
            client,
        })
    }

    fn workflows_url(&self, segments: &[&str]) -> Result<Url> {
        let invalid = |reason: String| ManagerError::InvalidUrl {
            url: self.base_url.clone(),
            reason,
        };
        let mut url = Url::parse(&self.base_url).map_err(|err| invalid(err.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid("cannot be a base url".to_string()))?
            .pop_if_empty()
            .extend(API_PREFIX)
            .extend(segments);
        Ok(url)
    }

    fn api_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(API_KEY_HEADER, self.api_key.clone());
        headers
    }

    fn send(&self, method: &str, url: &Url, request: RequestBuilder) -> Result<Response> {
        debug!(method, url = %url, "sending request");
        let resp = request.headers(self.api_headers()).send()?;
        debug!(method, url = %url, status = resp.status().as_u16(), "received response");
        Ok(resp)
    }
}

fn read_body(resp: Response) -> Result<String> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp.text()?)
    } else {
        let body = resp.text().unwrap_or_default();
        Err(ManagerError::Http {
            status: status.as_u16(),
            body,
        })
    }
}

fn read_json(resp: Response) -> Result<Value> {
    let body = read_body(resp)?;
    Ok(serde_json::from_str(&body)?)
}

impl WorkflowApi for N8nClient {
    fn list_workflows(&self) -> Result<Vec<WorkflowSummary>> {
        let url = self.workflows_url(&[])?;
        let resp = self.send("GET", &url, self.client.get(url.clone()))?;
        let list: WorkflowList = serde_json::from_value(read_json(resp)?)?;
        Ok(list.data)
    }

    fn get_workflow(&self, id: &str) -> Result<Value> {
        let url = self.workflows_url(&[id])?;
        let resp = self.send("GET", &url, self.client.get(url.clone()))?;
        read_json(resp)
    }

    fn create_workflow(&self, document: &WorkflowDocument) -> Result<String> {
        let url = self.workflows_url(&[])?;
        let request = self.client.post(url.clone()).json(document.body());
        let created = read_json(self.send("POST", &url, request)?)?;
        created
            .get("id")
            .or_else(|| created.get("data").and_then(|data| data.get("id")))
            .and_then(id_to_string)
            .ok_or(ManagerError::MissingField("id"))
    }

    fn update_workflow(&self, id: &str, body: &Value) -> Result<()> {
        let url = self.workflows_url(&[id])?;
        let request = self.client.put(url.clone()).json(body);
        read_body(self.send("PUT", &url, request)?).map(|_| ())
    }

    fn set_activation(&self, id: &str, activation: Activation) -> Result<()> {
        let url = self.workflows_url(&[id, activation.endpoint()])?;
        let resp = self.send("POST", &url, self.client.post(url.clone()))?;
        read_body(resp).map(|_| ())
    }

    fn trigger_webhook(&self, url: &str, payload: &Value) -> Result<WebhookReply> {
        // No api key on webhook calls.
        debug!(method = "POST", url, "calling webhook");
        let resp = self.client.post(url).json(payload).send()?;
        let status = resp.status().as_u16();
        let text = resp.text()?;
        Ok(WebhookReply {
            status,
            body: WebhookBody::from_text(text),
        })
    }
}
