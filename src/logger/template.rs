//! printf-style message templates.
//!
//! Placeholders are filled in order, or by `%N$` position. Extra arguments are
//! ignored. A placeholder without a matching argument, or with a conversion we
//! do not know, is copied to the output unchanged.

use std::fmt;

/// A value that can fill a template placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum LogArg {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Char(char),
}

impl fmt::Display for LogArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogArg::Str(s) => f.write_str(s),
            LogArg::Int(n) => write!(f, "{n}"),
            LogArg::UInt(n) => write!(f, "{n}"),
            LogArg::Float(v) => write!(f, "{v}"),
            LogArg::Bool(b) => write!(f, "{b}"),
            LogArg::Char(c) => write!(f, "{c}"),
        }
    }
}

impl From<&str> for LogArg {
    fn from(value: &str) -> Self {
        LogArg::Str(value.to_string())
    }
}

impl From<String> for LogArg {
    fn from(value: String) -> Self {
        LogArg::Str(value)
    }
}

impl From<&String> for LogArg {
    fn from(value: &String) -> Self {
        LogArg::Str(value.clone())
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $target:ty: $($t:ty),*) => {
        $(
            impl From<$t> for LogArg {
                fn from(value: $t) -> Self {
                    LogArg::$variant(value as $target)
                }
            }
        )*
    };
}

impl_from_int!(Int, i64: i8, i16, i32, i64, isize);
impl_from_int!(UInt, u64: u8, u16, u32, u64, usize);

impl From<f32> for LogArg {
    fn from(value: f32) -> Self {
        LogArg::Float(value as f64)
    }
}

impl From<f64> for LogArg {
    fn from(value: f64) -> Self {
        LogArg::Float(value)
    }
}

impl From<bool> for LogArg {
    fn from(value: bool) -> Self {
        LogArg::Bool(value)
    }
}

impl From<char> for LogArg {
    fn from(value: char) -> Self {
        LogArg::Char(value)
    }
}

impl LogArg {
    fn as_i64(&self) -> Option<i64> {
        match *self {
            LogArg::Int(n) => Some(n),
            LogArg::UInt(n) => Some(n as i64),
            LogArg::Float(v) => Some(v as i64),
            LogArg::Bool(b) => Some(b as i64),
            LogArg::Char(c) => Some(c as i64),
            LogArg::Str(_) => None,
        }
    }

    fn as_u64(&self) -> Option<u64> {
        match *self {
            LogArg::UInt(n) => Some(n),
            _ => self.as_i64().map(|n| n as u64),
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match *self {
            LogArg::Float(v) => Some(v),
            LogArg::Int(n) => Some(n as f64),
            LogArg::UInt(n) => Some(n as f64),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Conversion {
    Percent,
    Object,
    Signed,
    Unsigned,
    LowerHex,
    UpperHex,
    Float,
    Char,
}

/// Upper bound for width and precision.
const MAX_FIELD: usize = 64;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Flags {
    left: bool,
    plus: bool,
    space: bool,
    zero: bool,
    alternate: bool,
}

#[derive(Debug, PartialEq, Eq)]
struct Placeholder {
    position: Option<usize>,
    flags: Flags,
    width: Option<usize>,
    precision: Option<usize>,
    conversion: Conversion,
    len: usize,
}

fn scan_digits(bytes: &[u8], from: usize) -> usize {
    let mut end = from;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    end
}

fn parse_field(digits: &str) -> usize {
    digits.parse::<usize>().map_or(MAX_FIELD, |n| n.min(MAX_FIELD))
}

impl Placeholder {
    /// `s` starts at a `%`.
    fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        let mut i = 1;

        let mut position = None;
        let digits_end = scan_digits(bytes, i);
        if digits_end > i && bytes.get(digits_end) == Some(&b'$') {
            let n: usize = s[i..digits_end].parse().ok()?;
            position = Some(n.checked_sub(1)?);
            i = digits_end + 1;
        }

        let mut flags = Flags::default();
        loop {
            match bytes.get(i) {
                Some(b'-') => flags.left = true,
                Some(b'+') => flags.plus = true,
                Some(b' ') => flags.space = true,
                Some(b'0') => flags.zero = true,
                Some(b'#') => flags.alternate = true,
                _ => break,
            }
            i += 1;
        }

        let mut width = None;
        let width_end = scan_digits(bytes, i);
        if width_end > i {
            width = Some(parse_field(&s[i..width_end]));
            i = width_end;
        }

        let mut precision = None;
        if bytes.get(i) == Some(&b'.') {
            let start = i + 1;
            let end = scan_digits(bytes, start);
            precision = Some(if end > start {
                parse_field(&s[start..end])
            } else {
                0
            });
            i = end;
        }

        while matches!(
            bytes.get(i),
            Some(b'h' | b'l' | b'q' | b'z' | b't' | b'j')
        ) {
            i += 1;
        }

        let conversion = match bytes.get(i)? {
            b'%' if i == 1 => Conversion::Percent,
            b'@' | b's' => Conversion::Object,
            b'd' | b'i' => Conversion::Signed,
            b'u' => Conversion::Unsigned,
            b'x' => Conversion::LowerHex,
            b'X' => Conversion::UpperHex,
            b'f' | b'F' => Conversion::Float,
            b'c' => Conversion::Char,
            _ => return None,
        };

        Some(Placeholder {
            position,
            flags,
            width,
            precision,
            conversion,
            len: i + 1,
        })
    }

    fn render(&self, arg: &LogArg) -> String {
        let flags = self.flags;
        let number = match self.conversion {
            Conversion::Percent => return "%".to_string(),
            Conversion::Object => {
                let text = match self.precision {
                    Some(max) => arg.to_string().chars().take(max).collect(),
                    None => arg.to_string(),
                };
                return self.pad(text, false);
            }
            Conversion::Char => {
                let c = match arg {
                    LogArg::Int(_) | LogArg::UInt(_) => arg
                        .as_u64()
                        .and_then(|n| u32::try_from(n).ok())
                        .and_then(char::from_u32),
                    _ => None,
                };
                let text = c.map_or_else(|| arg.to_string(), String::from);
                return self.pad(text, false);
            }
            Conversion::Signed => arg.as_i64().map(|n| n.to_string()),
            Conversion::Unsigned => arg.as_u64().map(|n| n.to_string()),
            Conversion::LowerHex => arg.as_u64().map(|n| {
                if flags.alternate && n != 0 {
                    format!("{n:#x}")
                } else {
                    format!("{n:x}")
                }
            }),
            Conversion::UpperHex => arg.as_u64().map(|n| {
                if flags.alternate && n != 0 {
                    format!("0X{n:X}")
                } else {
                    format!("{n:X}")
                }
            }),
            Conversion::Float => arg
                .as_f64()
                .map(|v| format!("{:.*}", self.precision.unwrap_or(6), v)),
        };

        let Some(mut text) = number else {
            return self.pad(arg.to_string(), false);
        };
        let signed = matches!(self.conversion, Conversion::Signed | Conversion::Float);
        if signed && !text.starts_with('-') {
            if flags.plus {
                text.insert(0, '+');
            } else if flags.space {
                text.insert(0, ' ');
            }
        }
        self.pad(text, true)
    }

    fn pad(&self, text: String, numeric: bool) -> String {
        let Some(width) = self.width else {
            return text;
        };
        let len = text.chars().count();
        if len >= width {
            return text;
        }
        let fill = width - len;
        if self.flags.left {
            format!("{text}{}", " ".repeat(fill))
        } else if self.flags.zero && numeric {
            let (prefix, digits) = text.split_at(numeric_prefix_len(&text));
            format!("{prefix}{}{digits}", "0".repeat(fill))
        } else {
            format!("{}{text}", " ".repeat(fill))
        }
    }
}

/// Length of the sign and `0x` prefix that zero padding goes after.
fn numeric_prefix_len(text: &str) -> usize {
    let mut len = usize::from(text.starts_with(['-', '+', ' ']));
    if text[len..].starts_with("0x") || text[len..].starts_with("0X") {
        len += 2;
    }
    len
}

/// Fills `template` with `args`. With no args the template is returned as is.
pub fn format_template(template: &str, args: &[LogArg]) -> String {
    if args.is_empty() {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len());
    let mut next_arg = 0;
    let mut rest = template;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let spec = &rest[pos..];
        match Placeholder::parse(spec) {
            Some(placeholder) if placeholder.conversion == Conversion::Percent => {
                out.push('%');
                rest = &spec[placeholder.len..];
            }
            Some(placeholder) => {
                let index = placeholder.position.unwrap_or_else(|| {
                    let index = next_arg;
                    next_arg += 1;
                    index
                });
                match args.get(index) {
                    Some(arg) => out.push_str(&placeholder.render(arg)),
                    None => out.push_str(&spec[..placeholder.len]),
                }
                rest = &spec[placeholder.len..];
            }
            None => {
                out.push('%');
                rest = &spec[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
