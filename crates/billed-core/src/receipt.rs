//! Receipt file input and validation

use once_cell::sync::OnceCell;
use regex::Regex;

/// File picked in the receipt input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub content_type: String,
    pub content: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: &str, content_type: &str, content: Vec<u8>) -> Self {
        Self {
            name: name.to_string(),
            content_type: content_type.to_string(),
            content,
        }
    }
}

/// State of the receipt file input
///
/// `value` is what the browser reports for the input, usually
/// `C:\fakepath\<name>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileInput {
    pub value: String,
    pub files: Vec<SelectedFile>,
}

impl FileInput {
    pub fn new(value: &str, files: Vec<SelectedFile>) -> Self {
        Self {
            value: value.to_string(),
            files,
        }
    }

    /// Input holding a single file, as after a browser file pick
    pub fn with_file(file: SelectedFile) -> Self {
        Self {
            value: format!("C:\\fakepath\\{}", file.name),
            files: vec![file],
        }
    }

    pub fn first_file(&self) -> Option<&SelectedFile> {
        self.files.first()
    }

    /// Reset the input to "no file selected"
    pub fn clear(&mut self) {
        self.value.clear();
        self.files.clear();
    }

    /// File name the user picked, taken from the input value when present
    pub fn file_name(&self) -> Option<String> {
        let from_value = file_name_from_value(&self.value);
        if !from_value.is_empty() {
            return Some(from_value.to_string());
        }
        self.first_file().map(|f| f.name.clone())
    }
}

/// Why a receipt was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// No file in the input
    NoFile,
    /// Extension outside the accepted set
    Extension,
    /// File above the size limit
    TooLarge,
}

impl RejectReason {
    pub fn message(&self) -> &'static str {
        match self {
            RejectReason::NoFile => "Aucun fichier sélectionné",
            RejectReason::Extension => "Seuls les fichiers jpg, jpeg et png sont acceptés",
            RejectReason::TooLarge => "Le fichier est trop volumineux",
        }
    }
}

/// Outcome of a receipt file change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileCheck {
    /// Receipt uploaded; the input keeps its file
    Accepted { file_name: String, file_url: String },
    /// Receipt refused; the input was cleared and nothing was uploaded
    Rejected { reason: RejectReason },
}

impl FileCheck {
    pub fn is_accepted(&self) -> bool {
        matches!(self, FileCheck::Accepted { .. })
    }
}

/// Last path segment of a file input value, splitting on `\` and `/`
pub fn file_name_from_value(value: &str) -> &str {
    value.rsplit(['\\', '/']).next().unwrap_or(value)
}

/// Lowercased extension of a file name
pub fn file_extension(name: &str) -> Option<String> {
    static EXTENSION_PATTERN: OnceCell<Regex> = OnceCell::new();
    let extension_regex = EXTENSION_PATTERN
        .get_or_try_init(|| Regex::new(r"\.([A-Za-z0-9]+)$"))
        .ok()?;

    extension_regex
        .captures(name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_lowercase())
}

/// Check a file name against the accepted extensions, ignoring case
pub fn extension_allowed(name: &str, allowed: &[String]) -> bool {
    match file_extension(name) {
        Some(ext) => allowed.iter().any(|a| a.eq_ignore_ascii_case(&ext)),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allowed() -> Vec<String> {
        vec!["jpg".to_string(), "jpeg".to_string(), "png".to_string()]
    }

    #[test]
    fn test_extension_allowed() {
        let allowed = allowed();
        for name in ["test.png", "test.jpg", "test.jpeg", "TEST.PNG", "scan.JpEg", "a.b.png"] {
            assert!(extension_allowed(name, &allowed), "{} should be accepted", name);
        }
        for name in ["test.pdf", "test", "png", "test.png.exe", "test.gif", "test."] {
            assert!(!extension_allowed(name, &allowed), "{} should be rejected", name);
        }
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("facture.PDF").as_deref(), Some("pdf"));
        assert_eq!(file_extension("noext"), None);
    }

    #[test]
    fn test_file_name_from_value() {
        assert_eq!(file_name_from_value("C:\\fakepath\\test.png"), "test.png");
        assert_eq!(file_name_from_value("/home/me/test.png"), "test.png");
        assert_eq!(file_name_from_value("test.png"), "test.png");
        assert_eq!(file_name_from_value(""), "");
    }

    #[test]
    fn test_file_input() {
        let mut input = FileInput::with_file(SelectedFile::new("test.png", "image/png", b"test".to_vec()));
        assert_eq!(input.files.len(), 1);
        assert_eq!(input.file_name().as_deref(), Some("test.png"));

        input.clear();
        assert!(input.value.is_empty());
        assert!(input.first_file().is_none());
        assert_eq!(input.file_name(), None);
    }

    #[test]
    fn test_file_name_falls_back_to_selected_file() {
        let input = FileInput::new("", vec![SelectedFile::new("scan.jpg", "image/jpeg", vec![])]);
        assert_eq!(input.file_name().as_deref(), Some("scan.jpg"));
    }
}
