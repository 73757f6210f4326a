//! Output file naming and persistence for the token stream.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::lexer::{lexer::format_kinds, tokens::Token};

/// Derives the `.lex` output path for an input file.
///
/// The file name is cut at its first `.`, so `prog.txt` becomes `prog.lex`
/// and `a.b.c` becomes `a.lex`. Names starting with a dot are kept whole.
pub fn output_path(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let stem = match name.find('.') {
        Some(0) | None => name,
        Some(dot) => name[..dot].to_string(),
    };

    input.with_file_name(format!("{}.lex", stem))
}

/// Writes the space-separated kind names of `tokens` to `path`.
pub fn write_tokens(path: &Path, tokens: &[Token]) -> io::Result<String> {
    let line = format_kinds(tokens);
    fs::write(path, &line)?;
    debug!(path = %path.display(), bytes = line.len(), "wrote token stream");
    Ok(line)
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::output_path;

    #[test]
    fn test_output_path_replaces_extension() {
        assert_eq!(output_path(Path::new("prog.txt")), PathBuf::from("prog.lex"));
        assert_eq!(output_path(Path::new("src/prog.c")), PathBuf::from("src/prog.lex"));
    }

    #[test]
    fn test_output_path_cuts_at_first_dot() {
        assert_eq!(output_path(Path::new("a.b.c")), PathBuf::from("a.lex"));
        assert_eq!(output_path(Path::new("./dir/a.b.c")), PathBuf::from("./dir/a.lex"));
    }

    #[test]
    fn test_output_path_without_extension() {
        assert_eq!(output_path(Path::new("prog")), PathBuf::from("prog.lex"));
    }

    #[test]
    fn test_output_path_hidden_file() {
        assert_eq!(output_path(Path::new(".prog")), PathBuf::from(".prog.lex"));
    }
}
