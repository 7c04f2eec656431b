use wasm_bindgen_futures::JsFuture;
use web_sys::{Event, File, HtmlInputElement};
use wasm_bindgen::JsCast;

/// First file chosen in the `<input type="file">` that fired `ev`.
pub fn selected_file(ev: &Event) -> Option<File> {
    let input = ev
        .target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())?;
    let file = input.files().and_then(|files| files.get(0));
    // Allow picking the same file again.
    input.set_value("");
    file
}

/// Read the whole file as UTF-8 text.
pub async fn read_text(file: File) -> Result<String, String> {
    let text = JsFuture::from(file.text())
        .await
        .map_err(|e| format!("Failed to read {}: {:?}", file.name(), e))?;
    text.as_string()
        .ok_or_else(|| format!("{} is not a text file", file.name()))
}
