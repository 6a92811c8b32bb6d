pub mod pdf;

pub use pdf::{sanitize_file_name, PdfExporter};
