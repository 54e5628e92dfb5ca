use crate::{
    ast::{AbstractSyntax, Id},
    error::ParseError,
    interpreter::{lexer::Token, parser::stream::TokenStream},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full token list into one syntax tree.
///
/// This is the entry point for parsing. The grammar is LL(1) and parsing is
/// a single deterministic pass with no backtracking:
///
/// ```text
/// statements := statement*
/// statement  := TEXT | ifStmt | forStmt | idRef
/// ifStmt     := IF id statements (ELSE statements)? END
/// forStmt    := FOR PROPERTY_KEY IN id statements (ELSE statements)? END
/// id         := PROPERTY_KEY (ACCESSOR id)?
/// ```
///
/// # Parameters
/// - `tokens`: The lexer output, ending with [`Token::EndOfInput`].
///
/// # Returns
/// The root of the syntax tree.
///
/// # Errors
/// Returns a `ParseError` if the token stream violates the grammar,
/// including stray `else` or `end` tokens after the top-level statements.
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<AbstractSyntax> {
    let mut stream = TokenStream::new(tokens);
    let root = parse_statements(&mut stream)?;

    match stream.current().0 {
        Token::EndOfInput => Ok(root),
        _ => Err(stream.unexpected("end of input")),
    }
}

/// Parses a statement sequence, stopping at the first token that cannot
/// start a statement (`else`, `end`, or end of input).
fn parse_statements(stream: &mut TokenStream) -> ParseResult<AbstractSyntax> {
    let mut statements = Vec::new();

    loop {
        match &stream.current().0 {
            Token::Text(value) => {
                statements.push(AbstractSyntax::Text(value.clone()));
                stream.advance();
            },
            Token::PropertyKey(_) => statements.push(AbstractSyntax::Id(parse_id(stream)?)),
            Token::If => statements.push(parse_if(stream)?),
            Token::For => statements.push(parse_for(stream)?),
            _ => break,
        }
    }

    Ok(AbstractSyntax::Statements(statements))
}

/// Parses an `if` block: `IF id statements (ELSE statements)? END`.
///
/// The else branch defaults to [`AbstractSyntax::Empty`] when no `else`
/// section is present.
fn parse_if(stream: &mut TokenStream) -> ParseResult<AbstractSyntax> {
    stream.expect(&Token::If, "'if'")?;
    let condition = parse_id(stream)?;
    let then_branch = parse_statements(stream)?;
    let else_branch = parse_else(stream)?;
    stream.expect(&Token::End, "'end'")?;

    Ok(AbstractSyntax::If { condition,
                            then_branch: Box::new(then_branch),
                            else_branch: Box::new(else_branch) })
}

/// Parses a `for` block: `FOR PROPERTY_KEY IN id statements (ELSE
/// statements)? END`.
fn parse_for(stream: &mut TokenStream) -> ParseResult<AbstractSyntax> {
    stream.expect(&Token::For, "'for'")?;
    let variable = stream.expect_property_key("a loop variable name")?;
    stream.expect(&Token::In, "'in'")?;
    let collection = parse_id(stream)?;
    let body = parse_statements(stream)?;
    let else_branch = parse_else(stream)?;
    stream.expect(&Token::End, "'end'")?;

    Ok(AbstractSyntax::For { variable,
                             collection,
                             body: Box::new(body),
                             else_branch: Box::new(else_branch) })
}

/// Parses the optional else section shared by `if` and `for` blocks.
fn parse_else(stream: &mut TokenStream) -> ParseResult<AbstractSyntax> {
    if stream.current().0 == Token::Else {
        stream.advance();
        parse_statements(stream)
    } else {
        Ok(AbstractSyntax::Empty)
    }
}

/// Parses a dotted identifier: `PROPERTY_KEY (ACCESSOR id)?`.
///
/// `a.b.c` becomes a right-leaning chain with `a` at the root.
fn parse_id(stream: &mut TokenStream) -> ParseResult<Id> {
    let key = stream.expect_property_key("a property key")?;

    if stream.current().0 == Token::Accessor {
        stream.advance();
        Ok(Id::with_nested(key, parse_id(stream)?))
    } else {
        Ok(Id::new(key))
    }
}
