//! File-name splitting for materialized output paths.

/// A file name split into base name and extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileName {
    /// Last path component without its extension.
    pub base_name: String,

    /// Extension without the leading dot; empty when the name has none.
    pub extension: String,
}

/// Split a path into the last component's base name and extension.
///
/// Both `/` and `\` count as directory separators. Only the last dot
/// after the last separator starts the extension, so `a/b.tar.gz`
/// splits into `b.tar` + `gz`. A component without a dot keeps its
/// full text as the base name and gets an empty extension.
pub fn split_file_name(path: &str) -> FileName {
    let start = path.rfind(['/', '\\']).map_or(0, |sep| sep + 1);
    let name = &path[start..];
    match name.rfind('.') {
        Some(dot) => FileName {
            base_name: name[..dot].to_owned(),
            extension: name[dot + 1..].to_owned(),
        },
        None => FileName {
            base_name: name.to_owned(),
            extension: String::new(),
        },
    }
}
