//! Caller-supplied source location.
//!
//! The logger never inspects the stack. Callers build a [`CallSite`] themselves,
//! normally through [`call_site!`](crate::call_site), which expands Rust's
//! `file!()` / `line!()` and the enclosing function's name at the call location.

/// Where a log call originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallSite<'a> {
    /// Source file path as given by the caller (e.g. `file!()`).
    pub file: &'a str,
    /// Name of the calling function.
    pub function: &'a str,
    pub line: u32,
}

impl<'a> CallSite<'a> {
    pub const fn new(file: &'a str, function: &'a str, line: u32) -> Self {
        Self {
            file,
            function,
            line,
        }
    }

    /// Final `/`-separated segment of the file path.
    pub fn short_file_name(&self) -> &'a str {
        short_file_name(self.file)
    }
}

/// Last path segment of `path` split on `/`.
///
/// A path without `/` comes back unchanged. Trailing slashes are skipped so that
/// `"a/b/"` yields `"b"`; a path made only of slashes yields `""`.
pub fn short_file_name(path: &str) -> &str {
    path.split('/')
        .rev()
        .find(|segment| !segment.is_empty())
        .unwrap_or("")
}

/// Reduce a `type_name` of a nested marker fn to the enclosing function's name.
#[doc(hidden)]
pub fn trim_function_path(full: &'static str) -> &'static str {
    let mut path = full.strip_suffix("::__here").unwrap_or(full);
    while let Some(stripped) = path.strip_suffix("::{{closure}}") {
        path = stripped;
    }
    path.rsplit("::").next().unwrap_or(path)
}
