// src/services/whatsapp.rs
//
// Ponto de integração com o WhatsApp. Ainda não existe sessão real: o status
// é fixo e o QR só carrega o id de pareamento desta instância.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{DynamicImage, ImageOutputFormat, Luma};
use qrcode::QrCode;
use uuid::Uuid;

use crate::{common::error::AppError, models::status::WhatsAppStatus};

const QR_MIN_SIZE: u32 = 256;

#[derive(Clone)]
pub struct WhatsAppChannel {
    status: WhatsAppStatus,
    session_id: Uuid,
}

impl WhatsAppChannel {
    pub fn new() -> Self {
        Self {
            status: WhatsAppStatus { initialized: true, ready: true, authenticated: true },
            session_id: Uuid::new_v4(),
        }
    }

    pub fn status(&self) -> WhatsAppStatus {
        self.status
    }

    pub fn pairing_payload(&self) -> String {
        format!("crm-pairing:{}", self.session_id)
    }

    /// QR de pareamento como data URI PNG.
    pub async fn pairing_qr(&self) -> Result<String, AppError> {
        let payload = self.pairing_payload();
        tokio::task::spawn_blocking(move || render_qr_data_uri(&payload))
            .await
            .map_err(|e| anyhow::anyhow!("Falha na task do QR: {}", e))?
    }
}

impl Default for WhatsAppChannel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn render_qr_data_uri(payload: &str) -> Result<String, AppError> {
    let code = QrCode::new(payload.as_bytes())?;
    let image = code
        .render::<Luma<u8>>()
        .min_dimensions(QR_MIN_SIZE, QR_MIN_SIZE)
        .build();

    let mut png = Vec::new();
    DynamicImage::ImageLuma8(image)
        .write_to(&mut png, ImageOutputFormat::Png)
        .map_err(anyhow::Error::from)?;

    Ok(format!("data:image/png;base64,{}", STANDARD.encode(png)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qr_is_a_png_data_uri() {
        let uri = render_qr_data_uri("crm-pairing:teste").unwrap();
        let encoded = uri.strip_prefix("data:image/png;base64,").expect("prefixo do data URI");

        let bytes = STANDARD.decode(encoded).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[tokio::test]
    async fn pairing_qr_encodes_this_instance() {
        let channel = WhatsAppChannel::new();
        assert!(channel.pairing_payload().starts_with("crm-pairing:"));
        assert!(channel.pairing_qr().await.unwrap().starts_with("data:image/png;base64,"));

        let status = channel.status();
        assert!(status.initialized && status.ready && status.authenticated);
    }
}
