/// Error codes with category prefix
///
/// Categories:
/// - MKT: Marketplace registry lookups and parsing
/// - PLG: Plugin package and manifest errors
/// - DOC: Content document access
/// - VAL: Input validation errors
/// - IO: File system operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Marketplace errors (MKT001-MKT099)
    /// Marketplace not found
    Mkt001,
    /// Registry file not found
    Mkt002,
    /// Registry file malformed
    Mkt003,
    /// Duplicate marketplace id
    Mkt004,

    // Plugin errors (PLG001-PLG099)
    /// Plugin not found
    Plg001,
    /// Manifest missing
    Plg002,
    /// Manifest malformed
    Plg003,
    /// Duplicate plugin name
    Plg004,
    /// Package directory not found
    Plg005,
    /// Plugin is hosted outside the repository
    Plg006,

    // Document errors (DOC001-DOC099)
    /// Document not found
    Doc001,

    // Validation errors (VAL001-VAL099)
    /// Unsafe or malformed relative path
    Val001,

    // I/O errors (IO001-IO099)
    /// File not found
    Io001,
    /// Permission denied
    Io002,
    /// Content is not valid UTF-8
    Io003,
    /// Other I/O failure
    Io004,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 16] = [
        ErrorCode::Mkt001,
        ErrorCode::Mkt002,
        ErrorCode::Mkt003,
        ErrorCode::Mkt004,
        ErrorCode::Plg001,
        ErrorCode::Plg002,
        ErrorCode::Plg003,
        ErrorCode::Plg004,
        ErrorCode::Plg005,
        ErrorCode::Plg006,
        ErrorCode::Doc001,
        ErrorCode::Val001,
        ErrorCode::Io001,
        ErrorCode::Io002,
        ErrorCode::Io003,
        ErrorCode::Io004,
    ];

    /// Returns the error code string (e.g., "MKT001")
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Mkt001 => "MKT001",
            ErrorCode::Mkt002 => "MKT002",
            ErrorCode::Mkt003 => "MKT003",
            ErrorCode::Mkt004 => "MKT004",
            ErrorCode::Plg001 => "PLG001",
            ErrorCode::Plg002 => "PLG002",
            ErrorCode::Plg003 => "PLG003",
            ErrorCode::Plg004 => "PLG004",
            ErrorCode::Plg005 => "PLG005",
            ErrorCode::Plg006 => "PLG006",
            ErrorCode::Doc001 => "DOC001",
            ErrorCode::Val001 => "VAL001",
            ErrorCode::Io001 => "IO001",
            ErrorCode::Io002 => "IO002",
            ErrorCode::Io003 => "IO003",
            ErrorCode::Io004 => "IO004",
        }
    }

    /// Returns the general cause description
    pub fn cause(&self) -> &'static str {
        match self {
            ErrorCode::Mkt001 => "The specified marketplace was not found",
            ErrorCode::Mkt002 => "No marketplace.json was found in the repository",
            ErrorCode::Mkt003 => "The marketplace registry file is invalid",
            ErrorCode::Mkt004 => "A marketplace with the same name is already registered",
            ErrorCode::Plg001 => "The specified plugin was not found in the marketplace",
            ErrorCode::Plg002 => "The plugin package has no plugin.json",
            ErrorCode::Plg003 => "The plugin manifest is invalid or lacks a name",
            ErrorCode::Plg004 => "Multiple plugins with the same name were declared",
            ErrorCode::Plg005 => "The plugin package directory does not exist",
            ErrorCode::Plg006 => "The plugin is fetched from an external source, not this repository",
            ErrorCode::Doc001 => "The requested document does not exist in the package",
            ErrorCode::Val001 => "The path is absolute or escapes its base directory",
            ErrorCode::Io001 => "The specified file or directory was not found",
            ErrorCode::Io002 => "Permission denied when accessing the file or directory",
            ErrorCode::Io003 => "The file content is not valid UTF-8 text",
            ErrorCode::Io004 => "A file system operation failed",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
