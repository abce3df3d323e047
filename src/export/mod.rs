// src/export/mod.rs - CSV export: pure text generation plus the download boundary

pub mod csv;

pub use csv::{timestamped_filename, to_csv, to_csv_row, CsvCell, CsvColumn};

use crate::error::Result;

/// UTF-8 byte-order-mark so spreadsheet tools detect the encoding
pub const UTF8_BOM: &str = "\u{FEFF}";

/// Generate CSV text for the given rows and hand it to the platform
/// download boundary. The text itself comes from [`to_csv`], which is pure
/// and tested independently of this side effect.
pub fn export_csv<T>(
    rows: &[T],
    columns: &[CsvColumn<T>],
    filename: &str,
    delimiter: char,
) -> Result<()> {
    let body = to_csv(rows, columns, delimiter);
    download_csv(filename, &format!("{}{}", UTF8_BOM, body))
}

/// Trigger a client-side download of the CSV text.
///
/// On the web this creates a Blob URL and clicks a transient anchor; on
/// native the file lands in the user's download directory (current
/// directory when none exists).
#[cfg(not(target_arch = "wasm32"))]
pub fn download_csv(filename: &str, contents: &str) -> Result<()> {
    use crate::error::Error;

    let dir = dirs::download_dir().unwrap_or_else(|| std::path::PathBuf::from("."));
    let path = dir.join(filename);
    std::fs::write(&path, contents)
        .map_err(|e| Error::storage(path.display().to_string(), "failed to write CSV").caused_by(e))?;
    tracing::info!(path = %path.display(), "CSV exported");
    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub fn download_csv(filename: &str, contents: &str) -> Result<()> {
    use crate::error::Error;
    use wasm_bindgen::JsCast;

    let window = web_sys::window()
        .ok_or_else(|| Error::new(crate::error::ErrorKind::Application, "no window"))?;
    let document = window
        .document()
        .ok_or_else(|| Error::new(crate::error::ErrorKind::Application, "no document"))?;

    let parts = js_sys::Array::new();
    parts.push(&wasm_bindgen::JsValue::from_str(contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv;charset=utf-8;");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|_| Error::new(crate::error::ErrorKind::Application, "failed to create blob"))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| Error::new(crate::error::ErrorKind::Application, "failed to create URL"))?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| Error::new(crate::error::ErrorKind::Application, "failed to create anchor"))?
        .dyn_into()
        .map_err(|_| Error::new(crate::error::ErrorKind::Application, "element is not an anchor"))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}
