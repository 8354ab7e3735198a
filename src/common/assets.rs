// src/common/assets.rs

// ---
// Helper de URLs públicas: a "vitrine" dos arquivos em uploads/
// ---
// A base vem da configuração (PUBLIC_BASE_URL), nunca de um literal
// espalhado pelos handlers. É ela que os clientes usam para montar
// <img src=...> e os SvgUri do app mobile.
#[derive(Clone)]
pub struct AssetUrls {
    base_url: String,
}

impl AssetUrls {
    pub fn new(base_url: String) -> Self {
        // Normaliza: guardamos sempre sem a barra final.
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Monta a URL absoluta de um arquivo servido em /uploads.
    pub fn image_url(&self, filename: &str) -> String {
        format!("{}/uploads/{}", self.base_url, filename)
    }

    /// Versão para campos opcionais (pontos sem imagem serializam `null`).
    pub fn optional_image_url(&self, filename: Option<&str>) -> Option<String> {
        filename.map(|f| self.image_url(f))
    }
}
