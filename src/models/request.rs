use bytes::Bytes;

/// Declared MIME type of a PDF upload.
pub const PDF_MIME: &str = "application/pdf";
/// Declared MIME type of a DOCX upload.
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Closed set of document formats the extractor understands.
///
/// Classification happens once, when the upload is received; everything
/// downstream matches exhaustively on this instead of re-inspecting
/// MIME-type strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    Unsupported,
}

impl DocumentKind {
    /// Classify a declared content type. Parameters (`; charset=...`) are
    /// ignored; anything that is not PDF or DOCX is `Unsupported`.
    pub fn from_mime(content_type: &str) -> Self {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or("")
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            PDF_MIME => DocumentKind::Pdf,
            DOCX_MIME => DocumentKind::Docx,
            _ => DocumentKind::Unsupported,
        }
    }

    /// Fallback classification by filename extension, for clients that
    /// upload without a content type.
    pub fn from_file_name(name: &str) -> Self {
        let lower = name.to_lowercase();
        if lower.ends_with(".pdf") {
            DocumentKind::Pdf
        } else if lower.ends_with(".docx") {
            DocumentKind::Docx
        } else {
            DocumentKind::Unsupported
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::Docx => "docx",
            DocumentKind::Unsupported => "unsupported",
        }
    }
}

/// An uploaded document as received from the client: opaque bytes plus the
/// content type the client declared. Read-only for the rest of the request.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub name: String,
    pub size: usize,
    pub bytes: Bytes,
    pub content_type: Option<String>,
    pub kind: DocumentKind,
}

impl UploadedDocument {
    /// The declared content type decides the kind; the filename is consulted
    /// only when the client declared nothing at all.
    pub fn new(name: String, content_type: Option<String>, bytes: Bytes) -> Self {
        let kind = match content_type.as_deref() {
            Some(ct) => DocumentKind::from_mime(ct),
            None => DocumentKind::from_file_name(&name),
        };

        Self {
            size: bytes.len(),
            name,
            bytes,
            content_type,
            kind,
        }
    }

    /// The content type to report in errors when the upload is unsupported.
    pub fn declared_type(&self) -> &str {
        self.content_type.as_deref().unwrap_or("unknown")
    }
}
