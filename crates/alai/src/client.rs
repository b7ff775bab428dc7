//! Blocking client for the Alai presentation API.
//!
//! One presentation per run: authenticate (password grant), create the
//! presentation, append slides in plan order, then upsert a share link.
//! Slide content itself is produced server-side: each append creates the
//! slide, requests layout variants for the slide's text and images, and
//! applies the first variant returned.

use crate::session::Session;
use deck_core::{Error, Result, SlideContent, SlideHost};
use serde::Deserialize;
use serde_json::json;
use std::time::{Duration, SystemTime};
use uuid::Uuid;

/// Auth (Supabase) endpoint base.
const DEFAULT_AUTH_BASE_URL: &str = "https://api.getalai.com";

/// Presentation backend base.
const DEFAULT_API_BASE_URL: &str = "https://alai-standalone-backend.getalai.com";

/// Public viewer base for share links.
const VIEWER_BASE_URL: &str = "https://app.getalai.com/view";

/// Origin the backend expects on API calls.
const ORIGIN: &str = "https://app.getalai.com";

/// Default deck theme.
const DEFAULT_THEME_ID: &str = "a6bff6e5-3afc-4336-830b-fbc710081012";

/// Per-request timeout.
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Layout guidance sent with every variant request.
const SLIDE_INSTRUCTIONS: &str = "\
Make slides that are engaging and informative with minimal text.
Title: one short relevant title.
Content: 3-5 bullet points, each at most 8 words, one idea per bullet.
With images: two-column layout with text on one side and the image on the other.
Without images: centered title and bullets.";

/// Response from the token endpoint (either grant type).
#[derive(Debug, Deserialize)]
struct AuthResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default = "default_expires_in")]
    expires_in: u64,
}

fn default_expires_in() -> u64 {
    3600
}

/// Response from presentation creation.
#[derive(Debug, Deserialize)]
struct CreateResponse {
    id: String,
}

/// Response from a variant-generation request.
#[derive(Debug, Deserialize)]
struct VariantsResponse {
    #[serde(default)]
    variants: Vec<Variant>,
}

#[derive(Debug, Deserialize)]
struct Variant {
    id: String,
}

fn create_presentation_payload(presentation_id: &str, title: &str) -> serde_json::Value {
    json!({
        "presentation_id": presentation_id,
        "presentation_title": title,
        "create_first_slide": false,
        "theme_id": DEFAULT_THEME_ID,
        "default_color_set_id": 0,
    })
}

fn create_slide_payload(slide_id: &str, presentation_id: &str, order: usize) -> serde_json::Value {
    json!({
        "slide_id": slide_id,
        "presentation_id": presentation_id,
        "product_type": "PRESENTATION_CREATOR",
        "slide_order": order,
        "color_set_id": 0,
    })
}

fn variants_payload(
    presentation_id: &str,
    slide_id: &str,
    slide: &SlideContent,
) -> serde_json::Value {
    json!({
        "presentation_id": presentation_id,
        "slide_id": slide_id,
        "slide_specific_context": slide.context_text(),
        "images_on_slide": slide.image_urls,
        "additional_instructions": SLIDE_INSTRUCTIONS,
        "layout_type": "AI_GENERATED_LAYOUT",
        "update_tone_verbosity_calibration_status": false,
    })
}

/// Build the public viewer URL from the share endpoint's response body.
fn viewer_url(share_id: &str) -> String {
    format!("{VIEWER_BASE_URL}/{}", share_id.trim().trim_matches('"'))
}

/// Blocking Alai API client. Holds the session after `authenticate`.
pub struct AlaiClient {
    http: reqwest::blocking::Client,
    api_key: String,
    auth_base_url: String,
    api_base_url: String,
    session: Option<Session>,
}

impl AlaiClient {
    /// Create a client against the production endpoints.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::builder()
                .timeout(HTTP_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            auth_base_url: DEFAULT_AUTH_BASE_URL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            session: None,
        }
    }

    /// Override both endpoint bases.
    pub fn with_base_urls(
        mut self,
        auth_base_url: impl Into<String>,
        api_base_url: impl Into<String>,
    ) -> Self {
        self.auth_base_url = auth_base_url.into();
        self.api_base_url = api_base_url.into();
        self
    }

    /// POST to the token endpoint with the given grant type and body.
    fn token_request(&self, grant_type: &str, body: serde_json::Value) -> Result<Session> {
        let url = format!(
            "{}/auth/v1/token?grant_type={grant_type}",
            self.auth_base_url
        );
        let response = self
            .http
            .post(url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .map_err(|e| Error::Auth(format!("token request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().unwrap_or_default();
            return Err(Error::Auth(format!("token request returned {status}: {text}")));
        }

        let auth: AuthResponse = response
            .json()
            .map_err(|e| Error::Auth(format!("malformed token response: {e}")))?;

        Ok(Session::new(
            auth.access_token,
            auth.refresh_token,
            auth.expires_in,
            SystemTime::now(),
        ))
    }

    /// Current access token, refreshing it when close to expiry.
    fn token(&mut self) -> Result<String> {
        let session = self
            .session
            .as_ref()
            .ok_or_else(|| Error::Auth("not authenticated".into()))?;

        if !session.is_expiring(SystemTime::now()) {
            return Ok(session.access_token.clone());
        }

        let Some(refresh_token) = session.refresh_token.clone() else {
            return Err(Error::Auth("access token expired with no refresh token".into()));
        };

        log::debug!("Access token near expiry; refreshing");
        let refreshed = self.token_request(
            "refresh_token",
            json!({ "refresh_token": refresh_token }),
        )?;
        let token = refreshed.access_token.clone();
        self.session = Some(refreshed);
        Ok(token)
    }

    /// POST a JSON body to an API path. Non-2xx becomes an error message the
    /// caller wraps into its stage's variant.
    fn api_post(
        &self,
        path: &str,
        token: &str,
        body: &serde_json::Value,
    ) -> std::result::Result<reqwest::blocking::Response, String> {
        let response = self
            .http
            .post(format!("{}{path}", self.api_base_url))
            .bearer_auth(token)
            .header("Origin", ORIGIN)
            .json(body)
            .send()
            .map_err(|e| format!("{path} request failed: {e}"))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().unwrap_or_default();
            return Err(format!("{path} returned {status}: {text}"));
        }
        Ok(response)
    }
}

impl SlideHost for AlaiClient {
    fn authenticate(&mut self, email: &str, password: &str) -> Result<()> {
        let session = self.token_request(
            "password",
            json!({ "email": email, "password": password }),
        )?;
        self.session = Some(session);
        log::debug!("Authenticated with presentation service");
        Ok(())
    }

    fn create_presentation(&mut self, title: &str) -> Result<String> {
        let token = self.token()?;
        let presentation_id = Uuid::new_v4().to_string();
        let payload = create_presentation_payload(&presentation_id, title);

        let response = self
            .api_post("/create-new-presentation", &token, &payload)
            .map_err(Error::Create)?;

        let created: CreateResponse = response
            .json()
            .map_err(|e| Error::Create(format!("malformed create response: {e}")))?;
        Ok(created.id)
    }

    fn add_slide(
        &mut self,
        presentation_id: &str,
        order: usize,
        slide: &SlideContent,
    ) -> Result<()> {
        let slide_err = |message: String| Error::Slide { order, message };

        let token = self.token()?;
        let slide_id = Uuid::new_v4().to_string();

        self.api_post(
            "/create-new-slide",
            &token,
            &create_slide_payload(&slide_id, presentation_id, order),
        )
        .map_err(slide_err)?;

        let response = self
            .api_post(
                "/create-slide-variants",
                &token,
                &variants_payload(presentation_id, &slide_id, slide),
            )
            .map_err(slide_err)?;

        let variants: VariantsResponse = response
            .json()
            .map_err(|e| slide_err(format!("malformed variants response: {e}")))?;
        let variant = variants
            .variants
            .first()
            .ok_or_else(|| slide_err("no slide variants returned".into()))?;

        self.api_post(
            "/pick-slide-variant",
            &token,
            &json!({ "slide_id": slide_id, "variant_id": variant.id }),
        )
        .map_err(slide_err)?;

        Ok(())
    }

    fn share_link(&mut self, presentation_id: &str) -> Result<String> {
        let token = self.token()?;
        let response = self
            .api_post(
                "/upsert-presentation-share",
                &token,
                &json!({ "presentation_id": presentation_id }),
            )
            .map_err(Error::Share)?;

        let share_id = response
            .text()
            .map_err(|e| Error::Share(format!("unreadable share response: {e}")))?;
        Ok(viewer_url(&share_id))
    }
}
