use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Message {
    MinObjectSizeChanged(u32),
    MinHoleSizeChanged(u32),
    ClearCache,
    ExportCsv,
    /// Saved path, `None` when the dialog was cancelled
    CsvExported(Result<Option<PathBuf>, String>),
}
