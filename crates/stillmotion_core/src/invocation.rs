//! A fully built command line for the external generator.

use std::fmt;
use std::path::PathBuf;

/// Program, arguments and working directory of a child process.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct VideoInvocation {
    program: String,
    args: Vec<String>,
    working_dir: Option<PathBuf>,
}

impl VideoInvocation {
    /// Creates an invocation.
    pub fn new(
        program: impl Into<String>,
        args: Vec<String>,
        working_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            program: program.into(),
            args,
            working_dir,
        }
    }

    /// Value following `flag`, if present.
    ///
    /// ```
    /// use stillmotion_core::VideoInvocation;
    ///
    /// let inv = VideoInvocation::new("python3", vec!["--task".into(), "t2v-14B".into()], None);
    /// assert_eq!(inv.flag_value("--task"), Some("t2v-14B"));
    /// assert_eq!(inv.flag_value("--size"), None);
    /// ```
    pub fn flag_value(&self, flag: &str) -> Option<&str> {
        self.args
            .iter()
            .position(|arg| arg == flag)
            .and_then(|idx| self.args.get(idx + 1))
            .map(String::as_str)
    }
}

fn quoted(arg: &str) -> String {
    if !arg.is_empty() && !arg.contains(|c: char| c.is_whitespace() || "'\"$`\\".contains(c)) {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

impl fmt::Display for VideoInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", quoted(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", quoted(arg))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_quotes_whitespace() {
        let inv = VideoInvocation::new(
            "python3",
            vec!["--prompt".to_string(), "a fox's den".to_string()],
            None,
        );
        assert_eq!(inv.to_string(), r"python3 --prompt 'a fox'\''s den'");
    }

    #[test]
    fn test_display_plain_args_unquoted() {
        let inv = VideoInvocation::new("python3", vec!["generate.py".to_string()], None);
        assert_eq!(inv.to_string(), "python3 generate.py");
    }
}
