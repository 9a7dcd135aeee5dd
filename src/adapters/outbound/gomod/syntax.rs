//! Line and block structure shared by `go.mod` and `go.work`.
//!
//! Both files are a sequence of directives. A directive is either a single
//! line (`require example.com/m v1.2.3`) or a factored block whose entries
//! all share the verb:
//!
//! ```text
//! require (
//!     example.com/a v1.0.0
//!     example.com/b v1.1.0 // indirect
//! )
//! ```
//!
//! Tokens are bare words, interpreted strings (`"..."`), raw strings
//! (`` `...` ``) and the punctuation `( ) [ ] { } ,`. Comments start with
//! `//` and run to the end of the line.

use crate::shared::Result;

/// One directive entry after block expansion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub verb: String,
    pub args: Vec<String>,
    /// Trailing `//` comment on the entry's line, without the slashes
    pub comment: Option<String>,
    /// 1-based line number of the entry
    pub line: usize,
}

impl Directive {
    /// True if the trailing comment marks the entry `// indirect`
    pub fn is_indirect(&self) -> bool {
        match self.comment.as_deref() {
            Some(comment) => comment == "indirect" || comment.starts_with("indirect;"),
            None => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Word(String),
    Punct(char),
}

impl Token {
    fn into_arg(self) -> String {
        match self {
            Token::Word(word) => word,
            Token::Punct(c) => c.to_string(),
        }
    }
}

struct LexedLine {
    tokens: Vec<Token>,
    comment: Option<String>,
}

/// Splits `content` into directives, expanding factored blocks
///
/// # Errors
/// Returns an error naming `file_name` and the line number for malformed
/// strings, `/* */` comments, stray parentheses and unterminated blocks.
pub fn parse_directives(file_name: &str, content: &str) -> Result<Vec<Directive>> {
    let mut directives = Vec::new();
    let mut open_block: Option<(String, usize)> = None;

    for (index, raw_line) in content.lines().enumerate() {
        let line_no = index + 1;
        let lexed = lex_line(raw_line)
            .map_err(|e| anyhow::anyhow!("{}:{}: {}", file_name, line_no, e))?;
        let mut tokens = lexed.tokens;

        if tokens.is_empty() {
            continue;
        }

        if let Some((verb, _)) = &open_block {
            if tokens == [Token::Punct(')')] {
                open_block = None;
                continue;
            }
            if tokens.contains(&Token::Punct('(')) || tokens.contains(&Token::Punct(')')) {
                anyhow::bail!(
                    "{}:{}: unexpected parenthesis inside {} block",
                    file_name,
                    line_no,
                    verb
                );
            }
            directives.push(Directive {
                verb: verb.clone(),
                args: tokens.into_iter().map(Token::into_arg).collect(),
                comment: lexed.comment,
                line: line_no,
            });
            continue;
        }

        let verb = match tokens.remove(0) {
            Token::Word(word) => word,
            Token::Punct(c) => anyhow::bail!("{}:{}: unexpected '{}'", file_name, line_no, c),
        };

        match tokens.as_slice() {
            [Token::Punct('(')] => {
                open_block = Some((verb, line_no));
            }
            [Token::Punct('('), Token::Punct(')')] => {}
            _ => {
                if tokens.contains(&Token::Punct('(')) || tokens.contains(&Token::Punct(')')) {
                    anyhow::bail!("{}:{}: unexpected parenthesis after {}", file_name, line_no, verb);
                }
                directives.push(Directive {
                    verb,
                    args: tokens.into_iter().map(Token::into_arg).collect(),
                    comment: lexed.comment,
                    line: line_no,
                });
            }
        }
    }

    if let Some((verb, line_no)) = open_block {
        anyhow::bail!(
            "{}:{}: unterminated {} block",
            file_name,
            line_no,
            verb
        );
    }

    Ok(directives)
}

fn lex_line(line: &str) -> Result<LexedLine> {
    let mut tokens = Vec::new();
    let mut comment = None;
    let mut chars = line.char_indices().peekable();

    while let Some(&(pos, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        let rest = &line[pos..];
        if rest.starts_with("//") {
            comment = Some(rest[2..].trim().to_string());
            break;
        }
        if rest.starts_with("/*") {
            anyhow::bail!("mod files must use // comments, not /* comments");
        }

        match c {
            '(' | ')' | '[' | ']' | '{' | '}' | ',' => {
                chars.next();
                tokens.push(Token::Punct(c));
            }
            '"' => {
                chars.next();
                tokens.push(Token::Word(lex_interpreted_string(&mut chars)?));
            }
            '`' => {
                chars.next();
                let mut value = String::new();
                loop {
                    match chars.next() {
                        Some((_, '`')) => break,
                        Some((_, ch)) => value.push(ch),
                        None => anyhow::bail!("unterminated raw string"),
                    }
                }
                tokens.push(Token::Word(value));
            }
            _ => {
                let mut word = String::new();
                while let Some(&(p, ch)) = chars.peek() {
                    if !is_word_char(ch) || line[p..].starts_with("//") {
                        break;
                    }
                    if line[p..].starts_with("/*") {
                        anyhow::bail!("mod files must use // comments, not /* comments");
                    }
                    word.push(ch);
                    chars.next();
                }
                if word.is_empty() {
                    anyhow::bail!("unexpected input character {:?}", c);
                }
                tokens.push(Token::Word(word));
            }
        }
    }

    Ok(LexedLine { tokens, comment })
}

fn is_word_char(c: char) -> bool {
    !matches!(c, '(' | ')' | '[' | ']' | '{' | '}' | ',' | '"' | '`')
        && !c.is_whitespace()
        && !c.is_control()
}

fn lex_interpreted_string<I>(chars: &mut std::iter::Peekable<I>) -> Result<String>
where
    I: Iterator<Item = (usize, char)>,
{
    let mut value = String::new();
    loop {
        let (_, c) = chars
            .next()
            .ok_or_else(|| anyhow::anyhow!("unterminated quoted string"))?;
        match c {
            '"' => return Ok(value),
            '\\' => {
                let (_, escaped) = chars
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("unterminated quoted string"))?;
                match escaped {
                    '\\' => value.push('\\'),
                    '"' => value.push('"'),
                    'n' => value.push('\n'),
                    't' => value.push('\t'),
                    'r' => value.push('\r'),
                    'x' => value.push(read_hex_escape(chars, 2)?),
                    'u' => value.push(read_hex_escape(chars, 4)?),
                    'U' => value.push(read_hex_escape(chars, 8)?),
                    other => anyhow::bail!("invalid escape sequence \\{} in quoted string", other),
                }
            }
            _ => value.push(c),
        }
    }
}

fn read_hex_escape<I>(chars: &mut std::iter::Peekable<I>, digits: usize) -> Result<char>
where
    I: Iterator<Item = (usize, char)>,
{
    let mut code = 0u32;
    for _ in 0..digits {
        let (_, c) = chars
            .next()
            .ok_or_else(|| anyhow::anyhow!("unterminated escape sequence"))?;
        let digit = c
            .to_digit(16)
            .ok_or_else(|| anyhow::anyhow!("invalid hex digit {:?} in escape sequence", c))?;
        code = code * 16 + digit;
    }
    char::from_u32(code).ok_or_else(|| anyhow::anyhow!("invalid unicode escape \\u{:x}", code))
}
