use std::{ fmt::{ self, Display, Formatter },
           rc::Rc };



/// Where a token was found: the source's path or tag, and the 1 based line and column of its first
/// character.  Word definitions keep the location of their name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceLocation
{
    path: String,
    line: usize,
    column: usize
}


/// Formats as `path (line, column)`, the prefix of every error report.
impl Display for SourceLocation
{
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result
    {
        write!(formatter, "{} ({}, {})", self.path, self.line, self.column)
    }
}


impl SourceLocation
{
    pub fn new(path: &str, line: usize, column: usize) -> Self
    {
        SourceLocation { path: path.to_owned(), line, column }
    }

    /// The first character of the source tagged `path`.
    pub fn start_of(path: &str) -> Self
    {
        SourceLocation::new(path, 1, 1)
    }

    pub fn path(&self) -> &str
    {
        &self.path
    }

    pub fn line(&self) -> usize
    {
        self.line
    }

    pub fn column(&self) -> usize
    {
        self.column
    }

    /// Step past one character.  A new line moves to column 1 of the next line.
    fn advance(&mut self, next: char)
    {
        if next == '\n'
        {
            self.line += 1;
            self.column = 1;
        }
        else
        {
            self.column += 1;
        }
    }
}



/// Helper macro to get the location of the macro invocation.  Built-in words use this to record
/// where in the Rust code they were registered.
#[macro_export]
macro_rules! location_here
{
    () =>
    {
        $crate::lang::source_buffer::SourceLocation::new(file!(),
                                      line!() as usize,
                                      column!() as usize)
    };
}



/// A forward only cursor over a block of source text.  As characters are consumed the location of
/// the cursor is maintained so tokens can report where they came from.
///
/// The buffer shares ownership of its text.  A user defined word's body is stored once in the
/// dictionary and every invocation of the word scans it through a fresh buffer.
#[derive(Clone)]
pub struct SourceBuffer
{
    /// The full text being scanned.
    source: Rc<str>,

    /// Byte offset of the next unread character.
    position: usize,

    /// The logical location of the cursor in the source code.
    location: SourceLocation
}


impl SourceBuffer
{
    /// Create a new SourceBuffer with the path to, or meaningful tag for the source code and the
    /// source code itself.
    pub fn new(path: &str, source: Rc<str>) -> Self
    {
        SourceBuffer
            {
                source,
                position: 0,
                location: SourceLocation::start_of(path)
            }
    }

    /// The location the cursor is at in the source code being processed.
    pub fn location(&self) -> &SourceLocation
    {
        &self.location
    }

    /// Is there anything left to read?
    pub fn is_exhausted(&self) -> bool
    {
        self.position >= self.source.len()
    }

    /// Take a peek at the next character in the source code without consuming it.
    pub fn peek_next(&self) -> Option<char>
    {
        self.source[self.position..].chars().next()
    }

    /// Get and consume the next character in the source code.
    pub fn next_char(&mut self) -> Option<char>
    {
        let next = self.peek_next();

        if let Some(next_char) = next
        {
            self.position += next_char.len_utf8();
            self.location.advance(next_char);
        }

        next
    }

    /// Throw away everything up to and including the next new line.  Used to drop the remainder of
    /// an input line after an error.
    pub fn skip_line(&mut self)
    {
        while let Some(next) = self.next_char()
        {
            if next == '\n'
            {
                break;
            }
        }
    }
}



#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn tracks_lines_and_columns()
    {
        let mut buffer = SourceBuffer::new("<test>", Rc::from("ab\ncd"));

        assert_eq!(buffer.next_char(), Some('a'));
        assert_eq!(buffer.location().column(), 2);

        let _ = buffer.next_char();
        let _ = buffer.next_char();

        assert_eq!(buffer.location().line(), 2);
        assert_eq!(buffer.location().column(), 1);
        assert_eq!(buffer.peek_next(), Some('c'));
    }

    #[test]
    fn location_formats_for_error_reports()
    {
        let location = SourceLocation::new("prelude.f", 3, 14);

        assert_eq!(location.path(), "prelude.f");
        assert_eq!(location.to_string(), "prelude.f (3, 14)");
        assert_eq!(SourceLocation::start_of("<repl>").to_string(), "<repl> (1, 1)");
    }

    #[test]
    fn skip_line_stops_after_new_line()
    {
        let mut buffer = SourceBuffer::new("<test>", Rc::from("1 2 oops\n3"));

        buffer.skip_line();

        assert_eq!(buffer.next_char(), Some('3'));
        assert!(buffer.is_exhausted());
    }
}
