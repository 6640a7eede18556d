/*!
 * Extension to fence label lookup
 */

use std::collections::HashMap;
use std::path::Path;

use once_cell::sync::Lazy;

/// Fence labels keyed by lower-cased file extension
pub static EXTENSION_LANGUAGES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("py", "python"),
        ("js", "javascript"),
        ("jsx", "javascript"),
        ("ts", "typescript"),
        ("tsx", "typescript"),
        ("json", "json"),
        ("md", "markdown"),
        ("html", "html"),
        ("css", "css"),
        ("sh", "shell"),
        ("swift", "swift"),
        ("yaml", "yaml"),
        ("yml", "yaml"),
        ("ini", "ini"),
        ("xml", "xml"),
        ("java", "java"),
        ("c", "c"),
        ("cpp", "cpp"),
        ("rb", "ruby"),
    ])
});

/// Fence label for a file, or `""` when the extension is unknown
pub fn language_for(path: &Path) -> &'static str {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .and_then(|ext| EXTENSION_LANGUAGES.get(ext.as_str()).copied())
        .unwrap_or("")
}
