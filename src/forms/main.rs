use std::fs;
use std::path::Path;

use actix_multipart::form::MultipartForm;
use actix_multipart::form::tempfile::TempFile;
use actix_multipart::form::text::Text;
use uuid::Uuid;

use crate::domain::charity::NewCharity;
use crate::domain::types::{CharityCategory, CharityLink, CharityName};
use crate::forms::FormError;

/// Multipart form used by the "add charity" dialog. The logo is optional and
/// arrives as an uploaded file.
#[derive(MultipartForm)]
pub struct AddCharityForm {
    pub name: Text<String>,
    pub category: Text<String>,
    pub location: Option<Text<String>>,
    pub link: Option<Text<String>>,
    #[multipart(limit = "5MB")]
    pub logo: Option<TempFile>,
}

impl AddCharityForm {
    /// Validates the fields and persists the uploaded logo under
    /// `<media_root>/charity_logos/`, returning a well-formed creation
    /// payload. The stored logo path is the URL it is served from.
    pub fn into_new_charity(mut self, media_root: &str) -> Result<NewCharity, FormError> {
        let name = CharityName::new(self.name.into_inner())?;
        let category: CharityCategory = self.category.into_inner().parse()?;

        let link = self
            .link
            .map(Text::into_inner)
            .filter(|s| !s.trim().is_empty())
            .map(CharityLink::new)
            .transpose()?;

        let logo = match self.logo.take() {
            Some(logo) if logo.size > 0 => Some(persist_logo(logo, media_root)?),
            _ => None,
        };

        Ok(NewCharity::new(
            name,
            category,
            self.location.map(Text::into_inner),
            logo,
            link,
        ))
    }
}

const ALLOWED_LOGO_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

/// Picks the stored file extension from the uploaded file name. Anything
/// outside the whitelist (including names smuggling path separators) falls
/// back to `png`; the extension is only a serving hint.
fn logo_extension(file_name: Option<&str>) -> &'static str {
    file_name
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .and_then(|ext| {
            ALLOWED_LOGO_EXTENSIONS
                .iter()
                .find(|allowed| **allowed == ext)
                .copied()
        })
        .unwrap_or("png")
}

fn persist_logo(logo: TempFile, media_root: &str) -> Result<String, FormError> {
    let ext = logo_extension(logo.file_name.as_deref());

    let dir = Path::new(media_root).join("charity_logos");
    fs::create_dir_all(&dir).map_err(|e| FormError::Upload(e.to_string()))?;

    let file_name = format!("{}.{ext}", Uuid::new_v4());
    // Copy instead of rename: the temp file may live on another filesystem.
    fs::copy(logo.file.path(), dir.join(&file_name))
        .map_err(|e| FormError::Upload(e.to_string()))?;

    Ok(format!("/media/charity_logos/{file_name}"))
}

/// Removes a persisted logo again, e.g. when the database insert that was
/// supposed to reference it fails. Takes the `/media/...` path stored on the
/// charity and maps it back onto the media root.
pub fn discard_logo(media_root: &str, logo_url: &str) {
    let Some(file_name) = logo_url.rsplit('/').next() else {
        return;
    };
    let path = Path::new(media_root).join("charity_logos").join(file_name);
    if let Err(e) = fs::remove_file(&path) {
        log::warn!("Failed to remove logo {}: {e}", path.display());
    }
}
