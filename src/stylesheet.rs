//! Stylesheet loader: rebuild the icon table from `:before` content rules.
//!
//! Icon font stylesheets declare one rule per glyph:
//!
//! ```css
//! .fa-glass:before { content: "\f000"; }
//! .fa-gear:before, .fa-cog:before { content: "\f013"; }
//! ```
//!
//! Every selector of the shape `.<prefix>-<name>:before` contributes `<name>`,
//! mapped to the code point escaped in the rule's `content` declaration.
//! Anything else (at-rules, other selectors, malformed values) is skipped.

use crate::icons::IconTable;
use crate::{Error, Result};
use cssparser::{
    AtRuleParser, Delimiter, ParseError, Parser, ParserInput, ParserState, QualifiedRuleParser,
    StyleSheetParser, Token,
};
use log::{debug, info, warn};
use std::path::Path;

/// A qualified rule reduced to what the loader needs.
#[derive(Debug, Clone, PartialEq, Eq)]
struct IconRule {
    selectors: Vec<String>,
    content: Option<String>,
}

struct IconRuleParser;

impl<'i> QualifiedRuleParser<'i> for IconRuleParser {
    type Prelude = Vec<String>;
    type QualifiedRule = IconRule;
    type Error = ();

    /// Split the selector list on top-level commas, dropping comments.
    fn parse_prelude<'t>(
        &mut self,
        input: &mut Parser<'i, 't>,
    ) -> std::result::Result<Vec<String>, ParseError<'i, ()>> {
        let mut selectors = vec![String::new()];
        loop {
            let start = input.position();
            let token = match input.next_including_whitespace_and_comments() {
                Ok(token) => token.clone(),
                Err(_) => break,
            };
            match token {
                Token::Comment(_) => {}
                Token::Comma => selectors.push(String::new()),
                _ => {
                    if let Some(current) = selectors.last_mut() {
                        current.push_str(input.slice_from(start));
                    }
                }
            }
        }
        Ok(selectors)
    }

    fn parse_block<'t>(
        &mut self,
        selectors: Vec<String>,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> std::result::Result<IconRule, ParseError<'i, ()>> {
        let mut content = None;
        while !input.is_exhausted() {
            let declaration = input.parse_until_after(Delimiter::Semicolon, |input| {
                let name = input.expect_ident_cloned()?;
                input.expect_colon()?;
                Ok::<_, ParseError<'i, ()>>((name, declaration_value(input)))
            });
            if let Ok((name, value)) = declaration {
                if name.eq_ignore_ascii_case("content") {
                    content = Some(value);
                }
            }
        }
        Ok(IconRule { selectors, content })
    }
}

/// Raw source text of a declaration value, without a trailing `!important`.
fn declaration_value(input: &mut Parser<'_, '_>) -> String {
    let start = input.position();
    let mut end = start;
    while let Ok(token) = input.next() {
        if matches!(token, Token::Delim('!')) {
            break;
        }
        end = input.position();
    }
    while input.next().is_ok() {}
    input.slice(start..end).trim().to_owned()
}

// At-rules (@font-face, @media, ...) are rejected and skipped by the
// default trait methods.
impl<'i> AtRuleParser<'i> for IconRuleParser {
    type Prelude = ();
    type AtRule = IconRule;
    type Error = ();
}

/// Extract `<name>` from a `.<prefix>-<name>:before` selector.
fn icon_name_from_selector(selector: &str) -> Option<&str> {
    let class = selector.trim().strip_prefix('.')?;
    let class = class
        .strip_suffix("::before")
        .or_else(|| class.strip_suffix(":before"))?;
    let (prefix, name) = class.split_once('-')?;
    let valid = |s: &str| {
        !s.is_empty()
            && s.chars()
                .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    };
    if valid(prefix) && valid(name) {
        Some(name)
    } else {
        None
    }
}

/// Parse a `content` value such as `"\f000"` into its code point.
pub fn parse_content_codepoint(value: &str) -> Result<char> {
    let value = value.trim();
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|q| value.strip_prefix(*q).and_then(|v| v.strip_suffix(*q)))
        .unwrap_or(value);
    let hex = unquoted
        .strip_prefix('\\')
        .ok_or_else(|| Error::StylesheetError(format!("content {} is not an escaped code point", value)))?;
    if hex.is_empty() || hex.len() > 6 {
        return Err(Error::StylesheetError(format!("content {} has no valid hex escape", value)));
    }
    let cp = u32::from_str_radix(hex, 16)
        .map_err(|e| Error::StylesheetError(format!("content {}: {}", value, e)))?;
    char::from_u32(cp)
        .ok_or_else(|| Error::StylesheetError(format!("content {} is not a Unicode scalar value", value)))
}

/// Build an icon table from stylesheet source text.
///
/// Parsing is lenient: rules and declarations that don't describe an icon
/// are ignored.
pub fn parse_stylesheet(css: &str) -> IconTable {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut rule_parser = IconRuleParser;
    let mut table = IconTable::new();

    for rule in StyleSheetParser::new(&mut parser, &mut rule_parser) {
        let rule = match rule {
            Ok(rule) => rule,
            Err((_, slice)) => {
                debug!("skipping unsupported rule: {}", slice.trim());
                continue;
            }
        };
        let names: Vec<&str> = rule
            .selectors
            .iter()
            .filter_map(|s| icon_name_from_selector(s))
            .collect();
        if names.is_empty() {
            continue;
        }
        let Some(content) = rule.content.as_deref() else {
            continue;
        };
        match parse_content_codepoint(content) {
            Ok(cp) => {
                for name in names {
                    table.insert(name, cp);
                }
            }
            Err(e) => debug!("skipping {}: {}", rule.selectors.join(",").trim(), e),
        }
    }

    table
}

/// Read a stylesheet file and build an icon table from it.
pub fn load_stylesheet(path: impl AsRef<Path>) -> Result<IconTable> {
    let path = path.as_ref();
    let css = std::fs::read_to_string(path).map_err(|e| {
        Error::ConfigError(format!("Stylesheet file ({}) can't be opened: {}", path.display(), e))
    })?;
    let table = parse_stylesheet(&css);
    if table.is_empty() {
        warn!("stylesheet {} defines no icons", path.display());
    } else {
        info!("loaded {} icons from {}", table.len(), path.display());
    }
    Ok(table)
}

impl IconTable {
    /// Replace-style constructor: the stylesheet becomes the whole table.
    pub fn from_stylesheet(path: impl AsRef<Path>) -> Result<Self> {
        load_stylesheet(path)
    }
}
