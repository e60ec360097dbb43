// Request locale resolution and translation lookup
use crate::presentation::app_state::AppState;
use axum::async_trait;
use axum::extract::{FromRequestParts, Query};
use axum::http::header::ACCEPT_LANGUAGE;
use axum::http::request::Parts;
use serde::Deserialize;
use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::{Arc, OnceLock};
use tracing::error;

/// The language one request renders in. Resolved once per request, always a
/// member of the configured supported list (or the configured default), and
/// passed explicitly to whatever renders text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    code: String,
}

impl Locale {
    pub fn code(&self) -> &str {
        &self.code
    }
}

#[derive(Debug, Deserialize)]
struct LangQuery {
    lang_code: Option<String>,
}

#[async_trait]
impl FromRequestParts<Arc<AppState>> for Locale {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let lang_code = Query::<LangQuery>::try_from_uri(&parts.uri)
            .map(|Query(query)| query.lang_code)
            .unwrap_or(None);
        let accept_language = parts
            .headers
            .get(ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok());

        let locales = &state.config.locales;
        Ok(resolve_locale(
            lang_code.as_deref(),
            accept_language,
            &locales.supported,
            &locales.default,
        ))
    }
}

/// Pick the effective locale for one request. An explicit `lang_code` wins
/// when it is supported; anything else falls back to header negotiation,
/// then to the default.
pub fn resolve_locale(
    lang_code: Option<&str>,
    accept_language: Option<&str>,
    supported: &[String],
    default: &str,
) -> Locale {
    if let Some(code) = lang_code {
        if let Some(found) = supported.iter().find(|c| c.eq_ignore_ascii_case(code)) {
            return Locale {
                code: found.clone(),
            };
        }
        // An unsupported explicit code is ignored, not rejected.
    }

    let code = accept_language
        .and_then(|header| negotiate(header, supported))
        .unwrap_or_else(|| default.to_string());
    Locale { code }
}

/// Weighted quality-value matching of an Accept-Language header against the
/// supported list. Region subtags match on their primary language; ties are
/// broken by supported-list order.
fn negotiate(header: &str, supported: &[String]) -> Option<String> {
    let mut best: Option<(f32, usize)> = None;

    for entry in header.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let mut components = entry.split(';');
        let Some(tag) = components.next() else {
            continue;
        };
        let tag = tag.trim();
        if tag.is_empty() {
            continue;
        }
        let quality = components
            .find_map(|part| part.trim().strip_prefix("q="))
            .and_then(|q| q.parse::<f32>().ok())
            .unwrap_or(1.0);
        if quality <= 0.0 {
            continue;
        }
        let primary = tag.split('-').next().unwrap_or(tag);

        for (idx, candidate) in supported.iter().enumerate() {
            if tag != "*" && !candidate.eq_ignore_ascii_case(primary) {
                continue;
            }
            let better = match best {
                None => true,
                Some((best_quality, best_idx)) => {
                    quality > best_quality || (quality == best_quality && idx < best_idx)
                }
            };
            if better {
                best = Some((quality, idx));
            }
            break;
        }
    }

    best.map(|(_, idx)| supported[idx].clone())
}

#[derive(Debug, Default)]
struct TranslationBundle {
    messages: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct TranslationFile {
    #[serde(default)]
    messages: HashMap<String, String>,
}

/// Translate a source-language message for the given locale. Unknown
/// messages and unbundled locales fall back to the message itself.
pub fn translate(locale: &Locale, message: &str) -> String {
    bundle_for(locale.code())
        .and_then(|bundle| bundle.messages.get(message))
        .map_or_else(|| message.to_string(), ToString::to_string)
}

fn bundle_for(code: &str) -> Option<&'static TranslationBundle> {
    static PT: OnceLock<TranslationBundle> = OnceLock::new();
    static EN: OnceLock<TranslationBundle> = OnceLock::new();
    match code {
        "pt" => Some(PT.get_or_init(|| load_bundle("pt", include_str!("../../i18n/pt.json")))),
        "en" => Some(EN.get_or_init(|| load_bundle("en", include_str!("../../i18n/en.json")))),
        _ => None,
    }
}

fn load_bundle(code: &str, raw: &str) -> TranslationBundle {
    match serde_json::from_str::<TranslationFile>(raw) {
        Ok(file) => TranslationBundle {
            messages: file.messages,
        },
        Err(err) => {
            error!(error = %err, locale = code, "failed to parse translation bundle");
            TranslationBundle::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supported() -> Vec<String> {
        vec!["pt".to_string(), "en".to_string()]
    }

    #[test]
    fn test_supported_explicit_code_wins_over_header() {
        let locale = resolve_locale(Some("en"), Some("pt-BR,pt;q=0.9"), &supported(), "pt");
        assert_eq!(locale.code(), "en");
    }

    #[test]
    fn test_unsupported_explicit_code_falls_back_to_negotiation() {
        let locale = resolve_locale(Some("fr"), Some("en;q=0.8,pt;q=0.5"), &supported(), "pt");
        assert_eq!(locale.code(), "en");
    }

    #[test]
    fn test_negotiation_respects_quality_ordering() {
        let locale = resolve_locale(None, Some("pt;q=0.4,en;q=0.9"), &supported(), "pt");
        assert_eq!(locale.code(), "en");
    }

    #[test]
    fn test_region_variants_match_their_primary_language() {
        let locale = resolve_locale(None, Some("pt-BR,en;q=0.5"), &supported(), "en");
        assert_eq!(locale.code(), "pt");
    }

    #[test]
    fn test_wildcard_matches_the_most_preferred_supported_locale() {
        let locale = resolve_locale(None, Some("fr;q=0.9,*;q=0.5"), &supported(), "en");
        assert_eq!(locale.code(), "pt");
    }

    #[test]
    fn test_no_overlap_falls_back_to_default() {
        let locale = resolve_locale(None, Some("fr,de;q=0.7"), &supported(), "pt");
        assert_eq!(locale.code(), "pt");
    }

    #[test]
    fn test_missing_header_falls_back_to_default() {
        let locale = resolve_locale(None, None, &supported(), "pt");
        assert_eq!(locale.code(), "pt");
    }

    #[test]
    fn test_zero_quality_entries_are_ignored() {
        let locale = resolve_locale(None, Some("en;q=0,pt;q=0.1"), &supported(), "en");
        assert_eq!(locale.code(), "pt");
    }

    #[test]
    fn test_resolution_always_lands_in_the_supported_list_or_default() {
        let supported = supported();
        let headers = [
            Some("fr,de;q=0.9"),
            Some("en-GB;q=0.8,es"),
            Some("garbage;;q=??"),
            Some(""),
            None,
        ];
        for header in headers {
            let locale = resolve_locale(Some("xx"), header, &supported, "pt");
            assert!(
                supported.iter().any(|c| c == locale.code()) || locale.code() == "pt",
                "unexpected locale {} for header {header:?}",
                locale.code()
            );
        }
    }

    #[test]
    fn test_translate_looks_up_the_english_bundle() {
        let locale = resolve_locale(Some("en"), None, &supported(), "pt");
        assert_eq!(
            translate(&locale, "Plataforma - Delphos"),
            "Platform - Delphos"
        );
    }

    #[test]
    fn test_translate_is_identity_for_the_source_language() {
        let locale = resolve_locale(Some("pt"), None, &supported(), "pt");
        assert_eq!(
            translate(&locale, "Plataforma - Delphos"),
            "Plataforma - Delphos"
        );
    }

    #[test]
    fn test_translate_falls_back_for_unknown_messages() {
        let locale = resolve_locale(Some("en"), None, &supported(), "pt");
        assert_eq!(translate(&locale, "missing-key"), "missing-key");
    }
}
