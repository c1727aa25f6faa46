// src/services/ai_keys.rs
//
// Decide qual credencial de IA está em uso e a classifica, sem nunca fazer
// chamadas de rede. Ausência de chave não é erro: vira None/false.

use crate::{
    config::AppConfig,
    models::status::{GeminiKeyStatus, OpenAiKeyStatus},
};

const CLIENT_KEY_PREFIX: &str = "AIza";
const CLIENT_KEY_MAX_LEN: usize = 50;

/// Heurística (não criptográfica): chaves emitidas para clientes começam com
/// `AIza` e têm menos de 50 caracteres.
pub fn is_client_shaped(key: &str) -> bool {
    key.starts_with(CLIENT_KEY_PREFIX) && key.chars().count() < CLIENT_KEY_MAX_LEN
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiKey {
    pub key: Option<String>,
    pub is_client_key: bool,
}

#[derive(Clone)]
pub struct AiKeyManager {
    gemini_api_key: Option<String>,
    openai_api_key: Option<String>,
}

impl AiKeyManager {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            gemini_api_key: config.gemini_api_key.clone(),
            openai_api_key: config.openai_api_key.clone(),
        }
    }

    pub fn gemini_key(&self) -> GeminiKey {
        match &self.gemini_api_key {
            Some(key) => {
                let is_client_key = is_client_shaped(key);
                if is_client_key {
                    tracing::warn!(
                        "GEMINI_API_KEY parece ser uma chave de cliente; em produção use uma chave de servidor (Vertex AI)"
                    );
                }
                GeminiKey { key: Some(key.clone()), is_client_key }
            }
            None => {
                tracing::error!("Nenhuma chave de API do Gemini configurada");
                GeminiKey { key: None, is_client_key: false }
            }
        }
    }

    pub fn openai_key(&self) -> Option<String> {
        if self.openai_api_key.is_none() {
            tracing::error!("Nenhuma chave de API da OpenAI configurada");
        }
        self.openai_api_key.clone()
    }

    // --- Status para as rotas (sem logs, nunca expõe a chave) ---

    pub fn gemini_status(&self) -> GeminiKeyStatus {
        GeminiKeyStatus {
            has_valid_key: self.gemini_api_key.is_some(),
            is_temporary_key: self.gemini_api_key.as_deref().is_some_and(is_client_shaped),
        }
    }

    pub fn openai_status(&self) -> OpenAiKeyStatus {
        OpenAiKeyStatus { success: true, has_key: self.openai_api_key.is_some() }
    }

    /// Diagnóstico único na subida do servidor.
    pub fn log_startup_diagnostics(&self) {
        let gemini = self.gemini_key();
        let openai = self.openai_key();
        tracing::info!(
            gemini = gemini.key.is_some(),
            gemini_client_key = gemini.is_client_key,
            openai = openai.is_some(),
            "🔑 Credenciais de IA verificadas"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(gemini: Option<&str>, openai: Option<&str>) -> AiKeyManager {
        AiKeyManager {
            gemini_api_key: gemini.map(str::to_string),
            openai_api_key: openai.map(str::to_string),
        }
    }

    #[test]
    fn short_aiza_keys_are_client_shaped() {
        let key = "AIzaSyA-1234567890abcdefghijklmnopqrs"; // 37 caracteres
        assert!(is_client_shaped(key));

        let status = manager(Some(key), None).gemini_status();
        assert!(status.has_valid_key);
        assert!(status.is_temporary_key);
        assert!(manager(Some(key), None).gemini_key().is_client_key);
    }

    #[test]
    fn long_keys_are_server_keys_regardless_of_prefix() {
        let long_aiza = format!("AIza{}", "x".repeat(46)); // exatamente 50
        assert!(!is_client_shaped(&long_aiza));

        let long_other = "y".repeat(80);
        assert!(!is_client_shaped(&long_other));

        let status = manager(Some(&long_aiza), None).gemini_status();
        assert!(status.has_valid_key);
        assert!(!status.is_temporary_key);
    }

    #[test]
    fn short_keys_without_the_prefix_are_not_client_shaped() {
        assert!(!is_client_shaped("sk-short"));
    }

    #[test]
    fn missing_gemini_key_is_a_normal_result() {
        let m = manager(None, None);
        assert_eq!(m.gemini_key(), GeminiKey { key: None, is_client_key: false });

        let status = m.gemini_status();
        assert!(!status.has_valid_key);
        assert!(!status.is_temporary_key);
    }

    #[test]
    fn openai_status_mirrors_presence() {
        assert!(manager(None, Some("sk-proj-abc")).openai_status().has_key);
        assert!(manager(None, Some("sk-proj-abc")).openai_status().success);
        assert!(!manager(None, None).openai_status().has_key);
        assert_eq!(manager(None, Some("sk-1")).openai_key().as_deref(), Some("sk-1"));
        assert_eq!(manager(None, None).openai_key(), None);
    }
}
