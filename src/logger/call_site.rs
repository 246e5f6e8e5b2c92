/// Where a log call came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite<'a> {
    pub file: &'a str,
    pub function: &'a str,
    pub line: u32,
}

impl<'a> CallSite<'a> {
    pub fn new(file: &'a str, function: &'a str, line: u32) -> Self {
        Self {
            file,
            function,
            line,
        }
    }

    /// `file.function():line`
    pub fn label(&self) -> String {
        format!(
            "{}.{}:{}",
            file_name_without_suffix(self.file),
            strip_params(self.function),
            self.line
        )
    }
}

/// Captures the current file, enclosing function and line.
#[macro_export]
macro_rules! call_site {
    () => {{
        fn __here() {}
        $crate::logger::CallSite::new(
            file!(),
            $crate::logger::enclosing_function(::std::any::type_name_of_val(&__here)),
            line!(),
        )
    }};
}

/// Reduces the type name of an item nested in a function to that function's
/// bare name.
pub fn enclosing_function(type_name: &'static str) -> &'static str {
    let mut path = type_name.strip_suffix("::__here").unwrap_or(type_name);
    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }
    path.rsplit("::").next().unwrap_or(path)
}

pub fn file_name_of_file(file: &str) -> &str {
    file.rsplit(['/', '\\']).next().unwrap_or("")
}

pub fn file_name_without_suffix(file: &str) -> &str {
    let file_name = file_name_of_file(file);
    if file_name.is_empty() {
        return "";
    }
    file_name.split('.').next().unwrap_or("")
}

pub fn strip_params(function: &str) -> String {
    let name = match function.find('(') {
        Some(brace) => &function[..brace],
        None => function,
    };
    format!("{name}()")
}
