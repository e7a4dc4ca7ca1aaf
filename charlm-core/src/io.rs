use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use std::str::Chars;

/// A sequential stream of characters used as a training corpus.
///
/// End of stream is a normal condition and is reported as `Ok(None)`.
/// Errors are only raised when the underlying source cannot be read.
pub trait CharSource {
	/// Reads the next character, or `None` once the stream is exhausted.
	fn next_char(&mut self) -> io::Result<Option<char>>;
}

impl CharSource for Chars<'_> {
	fn next_char(&mut self) -> io::Result<Option<char>> {
		Ok(self.next())
	}
}

/// Character source decoding UTF-8 from any reader, one character at a time.
///
/// The reader is consumed lazily, so a failure in the middle of the stream
/// is reported when the character it affects is requested.
///
/// - Malformed or truncated UTF-8 is reported as `InvalidData`
/// - `Interrupted` reads are retried by `read_exact`
#[derive(Debug)]
pub struct ReaderSource<R> {
	reader: R,
}

impl<R: Read> ReaderSource<R> {
	/// Wraps a reader. Callers reading from files should buffer it first.
	pub fn new(reader: R) -> Self {
		Self { reader }
	}

	/// Returns the wrapped reader.
	pub fn into_inner(self) -> R {
		self.reader
	}
}

impl<R: Read> CharSource for ReaderSource<R> {
	fn next_char(&mut self) -> io::Result<Option<char>> {
		let mut buf = [0u8; 4];
		match self.reader.read_exact(&mut buf[..1]) {
			Ok(()) => (),
			Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
			Err(e) => return Err(e),
		}

		let width = utf8_width(buf[0])
			.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "Invalid UTF-8 leading byte"))?;

		if width > 1 {
			self.reader.read_exact(&mut buf[1..width]).map_err(|e| {
				if e.kind() == io::ErrorKind::UnexpectedEof {
					io::Error::new(io::ErrorKind::InvalidData, "Truncated UTF-8 sequence")
				} else {
					e
				}
			})?;
		}

		let decoded = std::str::from_utf8(&buf[..width])
			.map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
		Ok(decoded.chars().next())
	}
}

/// Number of bytes of the UTF-8 sequence starting with `first`,
/// or `None` if `first` cannot start a sequence.
fn utf8_width(first: u8) -> Option<usize> {
	match first {
		0x00..=0x7F => Some(1),
		0xC2..=0xDF => Some(2),
		0xE0..=0xEF => Some(3),
		0xF0..=0xF4 => Some(4),
		_ => None,
	}
}

/// Opens a corpus file as a buffered character source.
///
/// # Errors
/// Returns an error if the file cannot be opened.
pub fn open_corpus<P: AsRef<Path>>(filename: P) -> io::Result<ReaderSource<BufReader<File>>> {
	Ok(ReaderSource::new(BufReader::new(File::open(filename)?)))
}
