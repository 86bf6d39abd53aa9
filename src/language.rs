use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::HeaderMap, http::request::Parts};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(EnumString, Display, AsRefStr, VariantArray, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    /// Picks the supported language with the highest `q` weight from an
    /// `Accept-Language` value. Region subtags are ignored (`ar-EG` is `ar`).
    pub fn negotiate(accept_language: &str) -> Self {
        let mut best: Option<(Language, f32)> = None;

        for range in accept_language.split(',') {
            let mut parts = range.trim().split(';');
            let tag = parts.next().unwrap_or_default().trim();
            let primary = tag.split('-').next().unwrap_or_default().to_lowercase();

            let quality = parts
                .find_map(|p| p.trim().strip_prefix("q="))
                .and_then(|q| q.trim().parse::<f32>().ok())
                .unwrap_or(1.0);

            let Ok(language) = primary.parse::<Language>() else {
                continue;
            };

            if quality > 0.0 && best.is_none_or(|(_, q)| quality > q) {
                best = Some((language, quality));
            }
        }

        best.map(|(language, _)| language).unwrap_or_default()
    }

    pub fn from_headers(headers: &HeaderMap) -> Self {
        headers
            .get(axum::http::header::ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok())
            .map(Self::negotiate)
            .unwrap_or_default()
    }

    pub fn translate(&self, message: &str) -> String {
        rust_i18n::t!(message, locale = self.as_ref()).to_string()
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Language {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}
